//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait is the only capability the CPU and the peripherals
//! get for touching memory. The CPU never owns storage; every fetch, operand
//! read, stack push and store goes through `read`/`write` on whatever bus the
//! caller hands to [`Cpu::tick`](crate::Cpu::tick).
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes always succeed
//! - Unmapped reads return a fixed value, unmapped writes are dropped
//! - Reads have no side effects

/// Memory bus trait for reading and writing bytes.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use emu6502::MemoryBus;
///
/// struct LowRamOnly {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for LowRamOnly {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram.get(addr as usize).copied().unwrap_or(0)
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if let Some(cell) = self.ram.get_mut(addr as usize) {
///             *cell = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses return an implementation-defined
    /// constant.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Writes to unmapped addresses are silently dropped.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1`.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// Every address is plain RAM initialised to 0x00. Useful for exercising the
/// CPU without the partitioned [`Bus`](crate::Bus) map.
///
/// # Examples
///
/// ```
/// use emu6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
///
/// let mut cpu = Cpu::new();
/// cpu.reset(&memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.write(start.wrapping_add(i as u16), byte);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
