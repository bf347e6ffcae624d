//! # 6502 Instruction Implementations
//!
//! Every operation is a free function over the CPU and the bus, grouped by
//! category. Each returns `true` when it is willing to pay the extra cycle
//! that a page-crossing addressing mode asks for.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::{Instruction, Operation};

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

/// Runs `instruction` after its addressing mode has been resolved.
///
/// Returns the operation's half of the extra-cycle agreement.
pub(crate) fn execute<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    bus: &mut M,
    instruction: &Instruction,
) -> bool {
    let mode = instruction.mode;

    match instruction.operation {
        Operation::Adc => alu::adc(cpu, bus, mode),
        Operation::And => alu::and(cpu, bus, mode),
        Operation::Bit => alu::bit(cpu, bus, mode),
        Operation::Cmp => alu::cmp(cpu, bus, mode),
        Operation::Cpx => alu::cpx(cpu, bus, mode),
        Operation::Cpy => alu::cpy(cpu, bus, mode),
        Operation::Eor => alu::eor(cpu, bus, mode),
        Operation::Ora => alu::ora(cpu, bus, mode),
        Operation::Sbc => alu::sbc(cpu, bus, mode),

        Operation::Bcc => branches::bcc(cpu),
        Operation::Bcs => branches::bcs(cpu),
        Operation::Beq => branches::beq(cpu),
        Operation::Bmi => branches::bmi(cpu),
        Operation::Bne => branches::bne(cpu),
        Operation::Bpl => branches::bpl(cpu),
        Operation::Bvc => branches::bvc(cpu),
        Operation::Bvs => branches::bvs(cpu),

        Operation::Brk => control::brk(cpu, bus),
        Operation::Jmp => control::jmp(cpu),
        Operation::Jsr => control::jsr(cpu, bus),
        Operation::Nop => control::nop(),
        Operation::Rti => control::rti(cpu, bus),
        Operation::Rts => control::rts(cpu, bus),
        Operation::Illegal => control::illegal(cpu),

        Operation::Clc => flags::clc(cpu),
        Operation::Cld => flags::cld(cpu),
        Operation::Cli => flags::cli(cpu),
        Operation::Clv => flags::clv(cpu),
        Operation::Sec => flags::sec(cpu),
        Operation::Sed => flags::sed(cpu),
        Operation::Sei => flags::sei(cpu),

        Operation::Dec => inc_dec::dec(cpu, bus, mode),
        Operation::Dex => inc_dec::dex(cpu),
        Operation::Dey => inc_dec::dey(cpu),
        Operation::Inc => inc_dec::inc(cpu, bus, mode),
        Operation::Inx => inc_dec::inx(cpu),
        Operation::Iny => inc_dec::iny(cpu),

        Operation::Lda => load_store::lda(cpu, bus, mode),
        Operation::Ldx => load_store::ldx(cpu, bus, mode),
        Operation::Ldy => load_store::ldy(cpu, bus, mode),
        Operation::Sta => load_store::sta(cpu, bus),
        Operation::Stx => load_store::stx(cpu, bus),
        Operation::Sty => load_store::sty(cpu, bus),

        Operation::Asl => shifts::asl(cpu, bus, mode),
        Operation::Lsr => shifts::lsr(cpu, bus, mode),
        Operation::Rol => shifts::rol(cpu, bus, mode),
        Operation::Ror => shifts::ror(cpu, bus, mode),

        Operation::Pha => stack::pha(cpu, bus),
        Operation::Php => stack::php(cpu, bus),
        Operation::Pla => stack::pla(cpu, bus),
        Operation::Plp => stack::plp(cpu, bus),

        Operation::Tax => transfer::tax(cpu),
        Operation::Tay => transfer::tay(cpu),
        Operation::Tsx => transfer::tsx(cpu),
        Operation::Txa => transfer::txa(cpu),
        Operation::Txs => transfer::txs(cpu),
        Operation::Tya => transfer::tya(cpu),
    }
}
