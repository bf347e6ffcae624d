//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor
//! state, the addressing-mode resolvers, and the tick-driven
//! fetch/decode/execute state machine.
//!
//! ## Execution Model
//!
//! The CPU has two states, decided by the remaining-cycles counter:
//!
//! - **Fetch** (`remaining == 0`): the next `tick` reads the opcode at PC,
//!   resolves the addressing mode and runs the whole operation at once.
//! - **Idle** (`remaining > 0`): the tick only burns one cycle.
//!
//! Every tick decrements the counter, including the tick that fetched. The
//! work of an instruction therefore happens on its first cycle and the
//! remaining latency is modelled by the count of idle ticks that follow.
//!
//! The CPU owns no memory. Every tick takes the bus as a parameter.

use log::trace;

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::decode;
use crate::status::Status;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian break vector.
pub const BREAK_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_STACK_POINTER: u8 = 0xFD;

/// Cycles charged by reset before the first fetch.
pub const RESET_CYCLES: u8 = 8;

/// 6502 CPU state.
///
/// # Examples
///
/// ```
/// use emu6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x20);
/// memory.load(0x2000, &[0xA2, 0x21]); // LDX #$21
///
/// let mut cpu = Cpu::new();
/// cpu.reset(&memory);
///
/// // Burn the reset latency, then run LDX to completion
/// while !cpu.complete() {
///     cpu.tick(&mut memory);
/// }
/// cpu.tick(&mut memory);
/// assert_eq!(cpu.x(), 0x21);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cpu {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status flags
    pub(crate) status: Status,

    /// Cycles left before the next fetch
    pub(crate) cycles: u8,

    /// Last fetched opcode
    pub(crate) opcode: u8,

    /// Operand value, or the accumulator for implicit/accumulator modes
    pub(crate) fetched: u8,

    /// Resolved effective address
    pub(crate) addr_abs: u16,

    /// Sign-extended branch offset
    pub(crate) addr_rel: u16,

    /// Widened scratch accumulator for carry and overflow detection
    pub(crate) temp: u16,

    total_ticks: u64,
}

impl Cpu {
    /// Creates a CPU with every register, flag and counter at zero.
    ///
    /// Call [`reset`](Self::reset) to enter a defined state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the CPU into its defined start state.
    ///
    /// - PC is loaded from 0xFFFC (low) / 0xFFFD (high)
    /// - SP is set to 0xFD
    /// - A, X, Y and every status flag are cleared
    /// - [`RESET_CYCLES`] idle cycles are charged before the first fetch
    pub fn reset<M: MemoryBus + ?Sized>(&mut self, bus: &M) {
        self.pc = bus.read_word(RESET_VECTOR);
        self.sp = RESET_STACK_POINTER;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.status = Status::empty();

        self.opcode = 0x00;
        self.fetched = 0x00;
        self.addr_abs = 0x0000;
        self.addr_rel = 0x0000;
        self.temp = 0x0000;

        self.cycles = RESET_CYCLES;

        log::debug!("reset: PC=${:04X} SP=${:02X}", self.pc, self.sp);
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// On a fetch tick the whole instruction executes. The addressing mode
    /// and the operation each report whether they may need one extra cycle;
    /// the extra cycle is only charged when both agree.
    pub fn tick<M: MemoryBus + ?Sized>(&mut self, bus: &mut M) {
        if self.cycles == 0 {
            let opcode_addr = self.pc;
            self.opcode = bus.read(self.pc);
            self.pc = self.pc.wrapping_add(1);

            let instruction = decode(self.opcode);
            trace!(
                "${:04X}: {:02X} {} {} A={:02X} X={:02X} Y={:02X} SP={:02X} P={:02X}",
                opcode_addr,
                self.opcode,
                instruction.operation,
                instruction.mode,
                self.a,
                self.x,
                self.y,
                self.sp,
                self.status.bits()
            );

            self.cycles = instruction.cycles;

            let mode_extra = self.resolve(bus, instruction.mode);
            let op_extra = instructions::execute(self, bus, instruction);

            if mode_extra && op_extra {
                self.cycles += 1;
            }
        }

        self.cycles -= 1;
        self.total_ticks += 1;
    }

    /// Returns true when the current instruction has finished and the next
    /// tick will fetch.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    // ========== Addressing Mode Resolvers ==========

    /// Resolves `mode` into `addr_abs` (or `addr_rel`, or `fetched` for the
    /// accumulator forms), consuming operand bytes at PC.
    ///
    /// Returns true if the mode crossed a page and may cost an extra cycle.
    pub(crate) fn resolve<M: MemoryBus + ?Sized>(&mut self, bus: &M, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => {
                self.fetched = self.a;
                false
            }
            AddressingMode::Immediate => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            AddressingMode::ZeroPage => {
                self.addr_abs = self.next_byte(bus) as u16;
                false
            }
            AddressingMode::ZeroPageX => {
                self.addr_abs = self.next_byte(bus).wrapping_add(self.x) as u16;
                false
            }
            AddressingMode::ZeroPageY => {
                self.addr_abs = self.next_byte(bus).wrapping_add(self.y) as u16;
                false
            }
            AddressingMode::Relative => {
                self.addr_rel = self.next_byte(bus) as i8 as u16;
                false
            }
            AddressingMode::Absolute => {
                self.addr_abs = self.next_word(bus);
                false
            }
            AddressingMode::AbsoluteX => {
                let base = self.next_word(bus);
                self.addr_abs = base.wrapping_add(self.x as u16);
                page_crossed(base, self.addr_abs)
            }
            AddressingMode::AbsoluteY => {
                let base = self.next_word(bus);
                self.addr_abs = base.wrapping_add(self.y as u16);
                page_crossed(base, self.addr_abs)
            }
            AddressingMode::Indirect => {
                let ptr = self.next_word(bus);
                let lo = bus.read(ptr) as u16;
                // NMOS defect: the high byte never carries into the next page
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = bus.read(hi_addr) as u16;
                self.addr_abs = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectX => {
                let zp = self.next_byte(bus).wrapping_add(self.x);
                let lo = bus.read(zp as u16) as u16;
                let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
                self.addr_abs = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectY => {
                let zp = self.next_byte(bus);
                let lo = bus.read(zp as u16) as u16;
                let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                self.addr_abs = base.wrapping_add(self.y as u16);
                page_crossed(base, self.addr_abs)
            }
        }
    }

    /// Loads the operand for the current instruction into `fetched`.
    ///
    /// For the implicit and accumulator modes the resolver already placed
    /// the accumulator there.
    pub(crate) fn fetch<M: MemoryBus + ?Sized>(&mut self, bus: &M, mode: AddressingMode) -> u8 {
        if !mode.targets_accumulator() {
            self.fetched = bus.read(self.addr_abs);
        }
        self.fetched
    }

    fn next_byte<M: MemoryBus + ?Sized>(&mut self, bus: &M) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn next_word<M: MemoryBus + ?Sized>(&mut self, bus: &M) -> u16 {
        let lo = self.next_byte(bus) as u16;
        let hi = self.next_byte(bus) as u16;
        (hi << 8) | lo
    }

    // ========== Stack ==========

    /// Writes to 0x0100 + SP and decrements SP, wrapping within the page.
    pub(crate) fn push<M: MemoryBus + ?Sized>(&mut self, bus: &mut M, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP, wrapping within the page, and reads 0x0100 + SP.
    pub(crate) fn pull<M: MemoryBus + ?Sized>(&mut self, bus: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status flags.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Cycles left before the next fetch.
    pub fn remaining_cycles(&self) -> u8 {
        self.cycles
    }

    /// The most recently fetched opcode.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Ticks performed since construction. Not cleared by reset.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    // ========== Register Setters ==========
    //
    // Used by tests, fuzzing and front ends to stage machine states.

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces all status flags.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Sets or clears the flags in `flag`.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }
}

fn page_crossed(base: u16, effective: u16) -> bool {
    base & 0xFF00 != effective & 0xFF00
}
