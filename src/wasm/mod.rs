//! WebAssembly bindings for the System65 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser-based execution of 6502 programs.

pub mod api;

pub use api::WasmSystem;
