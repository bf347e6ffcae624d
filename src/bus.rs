//! # System Bus
//!
//! The `Bus` owns the CPU, the fixed memory map and every attached
//! peripheral. It is the single owner of memory: the CPU and the
//! peripherals only ever see it through a [`MemoryBus`] borrow for the
//! duration of one tick.
//!
//! ## Memory Map
//!
//! | Range | Region |
//! |-------|--------|
//! | 0x0000-0x00FF | zero page |
//! | 0x0100-0x01FF | stack page |
//! | 0x0400-0x0404 | output window |
//! | 0x0500-0x0502 | drawing window |
//! | 0x1000-0xFFFF | general RAM |
//!
//! Every other address reads as 0 and ignores writes.
//!
//! ## Tick Order
//!
//! One bus tick advances the CPU first and then each peripheral in the
//! order it was attached, so peripherals observe the CPU's writes from the
//! same tick.

use log::debug;

use crate::cpu::Cpu;
use crate::devices::drawing::{DRAWING_BASE, DRAWING_SIZE};
use crate::devices::output::{OUTPUT_BASE, OUTPUT_SIZE};
use crate::devices::{MappedMemory, RamDevice};
use crate::loader::{self, LoadError};
use crate::memory::MemoryBus;

/// Base address of the zero page.
pub const ZERO_PAGE_BASE: u16 = 0x0000;

/// Base address of the stack page.
pub const STACK_PAGE_BASE: u16 = 0x0100;

/// Base address of general RAM, which runs to 0xFFFF.
pub const RAM_BASE: u16 = 0x1000;

/// Default address programs are loaded at.
pub const DEFAULT_LOAD_ADDRESS: u16 = 0x2000;

/// Something clocked by the bus after the CPU.
///
/// Peripherals hold no memory of their own. Each tick they get the bus and
/// read or write their window through it.
pub trait Peripheral {
    /// Advances the peripheral by one clock.
    fn tick(&mut self, bus: &mut dyn MemoryBus);

    /// Returns to the power-on state.
    fn reset(&mut self) {}

    /// True once the peripheral wants the driver to stop.
    fn wants_termination(&self) -> bool {
        false
    }
}

/// Construction-time settings for a [`Bus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Where [`Bus::load_program`] places the first byte.
    pub load_address: u16,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            load_address: DEFAULT_LOAD_ADDRESS,
        }
    }
}

/// The whole machine: CPU, memory map and peripherals.
///
/// # Examples
///
/// ```
/// use emu6502::{Bus, MemoryBus};
///
/// let mut bus = Bus::new();
/// bus.write(0xFFFC, 0x00);
/// bus.write(0xFFFD, 0x20);
/// bus.load_program("A2 21 8E 00 04").unwrap(); // LDX #$21; STX $0400
/// bus.reset();
///
/// bus.step_instruction();
/// bus.step_instruction();
///
/// assert_eq!(bus.cpu().x(), 0x21);
/// assert_eq!(bus.read(0x0400), 0x21);
/// ```
pub struct Bus {
    cpu: Cpu,
    memory: MappedMemory,
    peripherals: Vec<Box<dyn Peripheral>>,
    config: BusConfig,
    terminate: bool,
}

impl Bus {
    /// Creates a bus with the default configuration and no peripherals.
    pub fn new() -> Self {
        Self::with_peripherals(BusConfig::default(), Vec::new())
    }

    /// Creates a bus with `peripherals` ticked in vector order after the CPU.
    pub fn with_peripherals(config: BusConfig, peripherals: Vec<Box<dyn Peripheral>>) -> Self {
        Self {
            cpu: Cpu::new(),
            memory: standard_map(),
            peripherals,
            config,
            terminate: false,
        }
    }

    /// Appends a peripheral to the tick order.
    pub fn attach(&mut self, peripheral: Box<dyn Peripheral>) {
        self.peripherals.push(peripheral);
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn config(&self) -> BusConfig {
        self.config
    }

    /// Resets the CPU (reading the reset vector through the bus) and every
    /// peripheral. Memory and the termination flag are left alone.
    pub fn reset(&mut self) {
        self.cpu.reset(&self.memory);
        for peripheral in &mut self.peripherals {
            peripheral.reset();
        }
    }

    /// Advances the machine by one clock: CPU first, then peripherals.
    pub fn tick(&mut self) {
        self.cpu.tick(&mut self.memory);

        for peripheral in &mut self.peripherals {
            peripheral.tick(&mut self.memory);
            if peripheral.wants_termination() && !self.terminate {
                debug!("peripheral requested termination");
                self.terminate = true;
            }
        }
    }

    /// Runs exactly one instruction.
    ///
    /// Any latency still pending from the previous instruction (or from
    /// reset) is drained first. Returns the number of ticks performed.
    pub fn step_instruction(&mut self) -> u32 {
        let mut ticks = 0;

        while !self.cpu.complete() {
            self.tick();
            ticks += 1;
        }

        self.tick();
        ticks += 1;

        while !self.cpu.complete() {
            self.tick();
            ticks += 1;
        }

        ticks
    }

    /// Ticks up to `ticks` times, stopping early once termination is
    /// requested. Returns the number of ticks performed.
    pub fn run(&mut self, ticks: u64) -> u64 {
        let mut done = 0;
        while done < ticks && !self.terminate {
            self.tick();
            done += 1;
        }
        done
    }

    /// Parses whitespace-separated hex bytes and writes them from the
    /// configured load address. Nothing is written if any token is bad.
    ///
    /// Returns the number of bytes written.
    pub fn load_program(&mut self, text: &str) -> Result<usize, LoadError> {
        loader::load_program(&mut self.memory, self.config.load_address, text)
    }

    /// True once a peripheral or the driver asked to stop.
    pub fn should_terminate(&self) -> bool {
        self.terminate
    }

    /// Requests termination. The flag stays set for the life of the bus.
    pub fn set_termination(&mut self) {
        self.terminate = true;
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Bus {
    fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }
}

fn standard_map() -> MappedMemory {
    let regions = [
        (ZERO_PAGE_BASE, 0x0100),
        (STACK_PAGE_BASE, 0x0100),
        (OUTPUT_BASE, OUTPUT_SIZE),
        (DRAWING_BASE, DRAWING_SIZE),
        (RAM_BASE, 0xF000),
    ];

    let mut memory = MappedMemory::new();
    for (base, size) in regions {
        let added = memory.add_device(base, Box::new(RamDevice::new(size)));
        debug_assert!(added.is_ok(), "standard region ${base:04X} overlaps");
    }
    memory
}
