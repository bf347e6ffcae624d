//! WebAssembly bindings.
//!
//! Exposes the [`Bus`](crate::Bus) to JavaScript as an `Emulator` class so a
//! page can load a program, drive the clock and inspect state.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator;
