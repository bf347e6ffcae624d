//! RAM regions of the memory map.

use super::Device;

/// Zero-initialised read/write storage.
///
/// Every fixed region of the [`Bus`](crate::Bus) map (zero page, stack page,
/// the two peripheral windows and general RAM) is one of these.
///
/// # Examples
///
/// ```rust
/// use emu6502::{Device, RamDevice};
///
/// let mut ram = RamDevice::new(256);
/// ram.write(0x42, 0xAA);
/// assert_eq!(ram.read(0x42), 0xAA);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// Creates `size` bytes of zeroed RAM.
    pub fn new(size: u16) -> Self {
        Self {
            data: vec![0; size as usize],
        }
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Device for RamDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0)
    }

    fn write(&mut self, offset: u16, value: u8) {
        if let Some(cell) = self.data.get_mut(offset as usize) {
            *cell = value;
        }
    }

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}
