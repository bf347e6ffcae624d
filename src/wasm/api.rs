//! WASM API for the emulator.
//!
//! Output-device changes are forwarded to a JavaScript callback as
//! `(cell, value)` where `cell` is 0 for 0x0400 and 1 for 0x0401.

use wasm_bindgen::prelude::*;

use crate::cpu::RESET_VECTOR;
use crate::{
    translate_to_hex, Bus, BusConfig, MemoryBus, OutputCell, OutputDevice, Peripheral, Status,
};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Browser-facing emulator: a [`Bus`] with an output device attached.
#[wasm_bindgen]
pub struct Emulator {
    bus: Bus,
}

#[wasm_bindgen]
impl Emulator {
    /// Creates an emulator whose reset vector points at the load address.
    ///
    /// `on_output` is called with `(cell, value)` whenever 0x0400 or 0x0401
    /// changes.
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function) -> Self {
        let output = OutputDevice::with_sink(move |event| {
            let cell = match event.cell {
                OutputCell::First => 0,
                OutputCell::Second => 1,
            };
            let _ = on_output.call2(
                &JsValue::NULL,
                &JsValue::from(cell),
                &JsValue::from(event.value),
            );
        });
        let peripherals: Vec<Box<dyn Peripheral>> = vec![Box::new(output)];

        let config = BusConfig::default();
        let mut bus = Bus::with_peripherals(config, peripherals);
        let [lo, hi] = config.load_address.to_le_bytes();
        bus.write(RESET_VECTOR, lo);
        bus.write(RESET_VECTOR + 1, hi);
        bus.reset();

        Emulator { bus }
    }

    pub fn reset(&mut self) {
        self.bus.reset();
    }

    /// Advances one clock.
    pub fn tick(&mut self) {
        self.bus.tick();
    }

    /// Runs one whole instruction and returns the ticks it took.
    pub fn step(&mut self) -> u32 {
        self.bus.step_instruction()
    }

    /// Ticks up to `ticks` times; returns the ticks actually performed.
    pub fn run(&mut self, ticks: u32) -> u32 {
        self.bus.run(ticks as u64) as u32
    }

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Loads hex program text at the load address and returns its length.
    pub fn load_program(&mut self, text: &str) -> Result<usize, JsError> {
        Ok(self.bus.load_program(text)?)
    }

    /// Translates mnemonic text into loader-compatible hex tokens.
    pub fn translate(&self, source: &str) -> Result<String, JsError> {
        Ok(translate_to_hex(source)?)
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.bus.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.bus.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.bus.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.bus.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.bus.cpu().sp()
    }

    /// Packed status byte, bit 0 = carry.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.bus.cpu().status().bits()
    }

    /// Ticks since construction, as f64 for JavaScript.
    #[wasm_bindgen(getter)]
    pub fn total_ticks(&self) -> f64 {
        self.bus.cpu().total_ticks() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.bus.cpu().flag(Status::CARRY)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.bus.cpu().flag(Status::ZERO)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.bus.cpu().flag(Status::NEGATIVE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.bus.cpu().flag(Status::OVERFLOW)
    }

    #[wasm_bindgen(getter)]
    pub fn should_terminate(&self) -> bool {
        self.bus.should_terminate()
    }
}
