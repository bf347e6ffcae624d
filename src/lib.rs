//! # 6502 Emulator Core
//!
//! A tick-driven NMOS 6502 emulator with a partitioned memory bus and
//! memory-mapped peripherals.
//!
//! The CPU executes each instruction in full on the tick that fetches it and
//! then idles for the rest of the instruction's cycle count, so peripherals
//! see exactly as many bus ticks per instruction as the real part would take.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{translate_to_hex, Bus, MemoryBus};
//!
//! let mut bus = Bus::new();
//!
//! // Point the reset vector at the load address
//! bus.write(0xFFFC, 0x00);
//! bus.write(0xFFFD, 0x20);
//!
//! let program = translate_to_hex("LDX #$21 STX $0400").unwrap();
//! bus.load_program(&program).unwrap();
//! bus.reset();
//!
//! // Reset latency, LDX and STX
//! assert_eq!(bus.run(8 + 2 + 4), 14);
//!
//! assert_eq!(bus.cpu().x(), 0x21);
//! assert_eq!(bus.read(0x0400), 0x21);
//! ```
//!
//! ## Architecture
//!
//! - **Bus owns everything**: the [`Bus`] holds the [`Cpu`], the memory map
//!   and the peripherals. The CPU gets memory only as a [`MemoryBus`]
//!   argument to [`Cpu::tick`], so there is no back-reference.
//! - **Table-driven decode**: [`INSTRUCTION_TABLE`] maps every opcode to an
//!   [`Operation`], an [`AddressingMode`] and a base cycle count.
//! - **Infallible core**: unmapped accesses read 0, unofficial opcodes are
//!   no-ops, the stack pointer wraps. Only text input (loader, translator)
//!   and device registration can fail.
//!
//! ## Modules
//!
//! - `cpu` - registers, addressing-mode resolvers, tick state machine
//! - `opcodes` - instruction table and mnemonics
//! - `status` - status flags
//! - `memory` - MemoryBus trait and a flat 64KB memory
//! - `devices` - address-range router, RAM and peripherals
//! - `bus` - the system bus and its fixed memory map
//! - `loader` / `translator` - program text input

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod translator;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

pub use addressing::AddressingMode;
pub use bus::{Bus, BusConfig, Peripheral};
pub use cpu::Cpu;
pub use devices::{
    Device, DeviceError, DrawingDevice, HeadlessRenderer, MappedMemory, OutputCell, OutputDevice,
    OutputEvent, RamDevice, Renderer,
};
pub use loader::{load_program, parse_program, LoadError};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, encode, Instruction, Operation, INSTRUCTION_TABLE};
pub use status::Status;
pub use translator::{translate, translate_to_hex, TranslateError};
