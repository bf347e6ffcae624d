//! Poll-based output window at 0x0400-0x0404.
//!
//! The device keeps the last value it saw in the "first" (0x0400) and
//! "second" (0x0401) cells. Whenever the bus holds something different it
//! records the new value and reports it to a sink.

use std::fmt;

use log::info;

use crate::bus::Peripheral;
use crate::MemoryBus;

/// Base address of the output window.
pub const OUTPUT_BASE: u16 = 0x0400;

/// Size of the output window in bytes.
pub const OUTPUT_SIZE: u16 = 5;

/// One of the two watched cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputCell {
    /// 0x0400
    First,
    /// 0x0401
    Second,
}

impl OutputCell {
    /// Bus address of the cell.
    pub fn address(self) -> u16 {
        match self {
            OutputCell::First => OUTPUT_BASE,
            OutputCell::Second => OUTPUT_BASE + 1,
        }
    }
}

impl fmt::Display for OutputCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputCell::First => f.write_str("First"),
            OutputCell::Second => f.write_str("Second"),
        }
    }
}

/// A watched cell changed to `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputEvent {
    pub cell: OutputCell,
    pub value: u8,
}

impl fmt::Display for OutputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.cell, self.value)
    }
}

type Sink = Box<dyn FnMut(OutputEvent)>;

/// Output peripheral watching 0x0400 and 0x0401.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use emu6502::{FlatMemory, MemoryBus, OutputCell, OutputDevice, Peripheral};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut device = OutputDevice::with_sink(move |event| sink.borrow_mut().push(event));
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0400, 33);
/// device.tick(&mut memory);
/// device.tick(&mut memory);
///
/// let seen = seen.borrow();
/// assert_eq!(seen.len(), 1);
/// assert_eq!(seen[0].cell, OutputCell::First);
/// assert_eq!(seen[0].value, 33);
/// ```
pub struct OutputDevice {
    first: u8,
    second: u8,
    sink: Sink,
}

impl OutputDevice {
    /// Creates a device that prints `First: <n>` / `Second: <n>` to stdout.
    pub fn new() -> Self {
        Self::with_sink(|event| println!("{event}"))
    }

    /// Creates a device that hands every change to `sink`.
    pub fn with_sink<F>(sink: F) -> Self
    where
        F: FnMut(OutputEvent) + 'static,
    {
        Self {
            first: 0x00,
            second: 0x00,
            sink: Box::new(sink),
        }
    }

    /// Last value observed at `cell`.
    pub fn last_seen(&self, cell: OutputCell) -> u8 {
        match cell {
            OutputCell::First => self.first,
            OutputCell::Second => self.second,
        }
    }

    fn observe(&mut self, bus: &dyn MemoryBus, cell: OutputCell) {
        let value = bus.read(cell.address());
        let last = match cell {
            OutputCell::First => &mut self.first,
            OutputCell::Second => &mut self.second,
        };
        if *last != value {
            *last = value;
            let event = OutputEvent { cell, value };
            info!("output {event}");
            (self.sink)(event);
        }
    }
}

impl Default for OutputDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Peripheral for OutputDevice {
    /// Both cells may report in the same tick, first before second.
    fn tick(&mut self, bus: &mut dyn MemoryBus) {
        self.observe(bus, OutputCell::First);
        self.observe(bus, OutputCell::Second);
    }

    fn reset(&mut self) {
        self.first = 0x00;
        self.second = 0x00;
    }
}
