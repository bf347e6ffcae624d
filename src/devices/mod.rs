//! Memory-mapped device support.
//!
//! Backing storage is expressed as [`Device`]s registered at base addresses
//! in a [`MappedMemory`] router. The [`Bus`](crate::Bus) builds its fixed
//! memory map from these pieces, and custom maps can be assembled the same
//! way.
//!
//! # Architecture
//!
//! - **Device trait**: offset-addressed storage behind one address range
//! - **MappedMemory**: routes reads and writes to the device owning an address
//! - **Peripherals**: [`OutputDevice`] and [`DrawingDevice`] do not own memory;
//!   they watch their windows through the bus on every tick
//!
//! # Example
//!
//! ```rust
//! use emu6502::{MappedMemory, MemoryBus, RamDevice};
//!
//! let mut memory = MappedMemory::new();
//! memory.add_device(0x0000, Box::new(RamDevice::new(0x0100))).unwrap();
//! memory.add_device(0x1000, Box::new(RamDevice::new(0x1000))).unwrap();
//!
//! memory.write(0x1234, 0x42);
//! assert_eq!(memory.read(0x1234), 0x42);
//! assert_eq!(memory.read(0x0800), 0x00);
//! ```

use thiserror::Error;

use crate::MemoryBus;

pub mod drawing;
pub mod output;
pub mod ram;

pub use drawing::{DrawingDevice, HeadlessRenderer, Renderer};
pub use output::{OutputCell, OutputDevice, OutputEvent};
pub use ram::RamDevice;

/// Storage occupying one contiguous address range.
///
/// The router calls these methods with offsets (0 to size-1), so a device
/// never needs to know where it is mapped.
///
/// # Examples
///
/// ```rust
/// use emu6502::Device;
///
/// struct Latch(u8);
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.0
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.0 = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Reads the byte at `offset`. Must not have side effects.
    fn read(&self, offset: u16) -> u8;

    /// Writes `value` at `offset`.
    fn write(&mut self, offset: u16, value: u8);

    /// Number of addresses the device occupies.
    fn size(&self) -> u16;
}

struct DeviceMapping {
    base_addr: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// Offset of `addr` inside this mapping, if it falls in range.
    ///
    /// A mapping whose end overflows past 0xFFFF extends to the top of the
    /// address space.
    fn offset_of(&self, addr: u16) -> Option<u16> {
        let (end_addr, overflow) = self.base_addr.overflowing_add(self.device.size());
        let in_range = if overflow {
            addr >= self.base_addr
        } else {
            addr >= self.base_addr && addr < end_addr
        };
        in_range.then(|| addr - self.base_addr)
    }

    fn end(&self) -> u32 {
        self.base_addr as u32 + self.device.size() as u32
    }
}

/// Error returned when device registration fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// Address range overlaps with an existing device.
    #[error(
        "device at ${new_base:04X} (size {new_size}) overlaps device at ${existing_base:04X} (size {existing_size})"
    )]
    Overlap {
        /// Base address of the new device
        new_base: u16,
        /// Size of the new device
        new_size: u16,
        /// Base address of the conflicting existing device
        existing_base: u16,
        /// Size of the conflicting existing device
        existing_size: u16,
    },
}

/// Router dispatching every access to the device that owns the address.
///
/// Ranges never overlap. Unmapped reads return a fixed value (0 unless
/// built with [`with_unmapped_value`](Self::with_unmapped_value)) and
/// unmapped writes are dropped.
pub struct MappedMemory {
    devices: Vec<DeviceMapping>,
    unmapped_value: u8,
}

impl MappedMemory {
    /// Creates an empty map whose unmapped addresses read as 0.
    pub fn new() -> Self {
        Self::with_unmapped_value(0x00)
    }

    /// Creates an empty map whose unmapped addresses read as `value`.
    ///
    /// ```rust
    /// use emu6502::{MappedMemory, MemoryBus};
    ///
    /// let memory = MappedMemory::with_unmapped_value(0xFF);
    /// assert_eq!(memory.read(0x8000), 0xFF);
    /// ```
    pub fn with_unmapped_value(value: u8) -> Self {
        Self {
            devices: Vec::new(),
            unmapped_value: value,
        }
    }

    /// Registers `device` at `base_addr`.
    ///
    /// Fails with [`DeviceError::Overlap`] if any address of the new range is
    /// already owned.
    pub fn add_device(
        &mut self,
        base_addr: u16,
        device: Box<dyn Device>,
    ) -> Result<(), DeviceError> {
        let new_size = device.size();
        let new_start = base_addr as u32;
        let new_end = new_start + new_size as u32;

        if let Some(existing) = self
            .devices
            .iter()
            .find(|m| new_start < m.end() && new_end > m.base_addr as u32)
        {
            return Err(DeviceError::Overlap {
                new_base: base_addr,
                new_size,
                existing_base: existing.base_addr,
                existing_size: existing.device.size(),
            });
        }

        self.devices.push(DeviceMapping { base_addr, device });
        Ok(())
    }

    /// Returns true if some device owns `addr`.
    pub fn is_mapped(&self, addr: u16) -> bool {
        self.devices.iter().any(|m| m.offset_of(addr).is_some())
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn read(&self, addr: u16) -> u8 {
        self.devices
            .iter()
            .find_map(|m| m.offset_of(addr).map(|offset| m.device.read(offset)))
            .unwrap_or(self.unmapped_value)
    }

    fn write(&mut self, addr: u16, value: u8) {
        for mapping in &mut self.devices {
            if let Some(offset) = mapping.offset_of(addr) {
                mapping.device.write(offset, value);
                return;
            }
        }
    }
}
