//! WASM API for the System65 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! memory access and disassembly.

use wasm_bindgen::prelude::*;

use crate::disassembler::decode_at;
use crate::{CpuConfig, DecodePolicy, MemoryBus, System65, DEFAULT_LOAD_OFFSET};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// One disassembled line
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main System65 interface for JavaScript
#[wasm_bindgen]
pub struct WasmSystem {
    cpu: System65,
}

#[wasm_bindgen]
impl WasmSystem {
    /// Create a system with `memory_size` bytes installed.
    ///
    /// `skip_illegal` selects the fail-soft decode policy.
    #[wasm_bindgen(constructor)]
    pub fn new(memory_size: u32, skip_illegal: bool) -> Result<WasmSystem, JsValue> {
        let policy = if skip_illegal {
            DecodePolicy::Skip
        } else {
            DecodePolicy::Halt
        };
        let config = CpuConfig::default().with_decode_policy(policy);

        let cpu = System65::with_memory_size(memory_size as usize, config).map_err(js_error)?;
        Ok(WasmSystem { cpu })
    }

    /// Copy a program image to `offset` (default $0200) and reset.
    /// Returns the number of bytes copied.
    pub fn load(&mut self, program: &[u8], offset: Option<u16>) -> u32 {
        self.cpu
            .load_program(program, offset.unwrap_or(DEFAULT_LOAD_OFFSET)) as u32
    }

    /// Execute one dispatch step and return its cycle cost
    pub fn step(&mut self) -> Result<u32, JsValue> {
        self.cpu
            .step()
            .map(|step| step.cycles() as u32)
            .map_err(js_error)
    }

    /// Run for a cycle budget and return the cycles actually executed
    pub fn run(&mut self, cycles: u32) -> Result<u32, JsValue> {
        self.cpu
            .run(cycles as u64)
            .map(|executed| executed as u32)
            .map_err(js_error)
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn raise_interrupt(&mut self, nmi: bool) {
        self.cpu.raise_interrupt(nmi);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn decode_errors(&self) -> f64 {
        self.cpu.decode_errors() as f64
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.peek8(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.poke8(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..=0xFF).map(|i| self.cpu.peek8(start | i)).collect()
    }

    /// Disassemble `count` instructions starting at `addr`
    pub fn disassemble(&self, addr: u16, count: u32) -> Vec<JsValue> {
        let memory = self.cpu.memory();
        let mut address = addr;

        (0..count)
            .map(|_| {
                let instr = decode_at(memory, address);
                let size = instr.size_bytes() as u16;
                let bytes = (0..size)
                    .map(|i| memory.read(address.wrapping_add(i)))
                    .collect();

                let line = DisassemblyLine {
                    address,
                    bytes,
                    text: instr.to_string(),
                };
                address = address.wrapping_add(size);
                JsValue::from(line)
            })
            .collect()
    }
}
