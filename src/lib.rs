//! # System65 Execution Core
//!
//! An NMOS 6502 execution core for the System65 virtual machine: register
//! file, memory bus, addressing-mode resolver, interrupt controller and the
//! fetch-decode-execute loop with cycle-budget accounting.
//!
//! ## Quick Start
//!
//! ```rust
//! use system65::{SystemMemory, CPU};
//!
//! let mut cpu = CPU::new(SystemMemory::new());
//!
//! // LDA #$05 at the default load offset
//! cpu.load_program(&[0xA9, 0x05], 0x0200);
//! assert_eq!(cpu.pc(), 0x0200);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.pc(), 0x0202);
//! assert_eq!(cpu.cycles(), 2);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Decode**: all opcode metadata lives in one 256-entry table
//! - **Cycle Accounting**: NMOS base costs plus branch penalties, with budget carry
//! - **Explicit Strictness**: illegal opcodes halt or skip per `DecodePolicy`
//!
//! ## Modules
//!
//! - `cpu` - CPU state, dispatch loop and execution driver
//! - `registers` - status register and register snapshot
//! - `memory` - MemoryBus trait and `SystemMemory`
//! - `addressing` - addressing modes and effective-address resolution
//! - `opcodes` - opcode metadata table
//! - `interrupts` - pending-request tracking and the service routine
//! - `config` - construction-time options
//! - `shared` - lock-guarded handle for multi-threaded hosts
//! - `disassembler` - instruction decoding and formatting

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod shared;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{CpuConfig, DecodePolicy, Vector};
pub use cpu::{Step, CPU, DEFAULT_LOAD_OFFSET};
pub use interrupts::{InterruptKind, InterruptState};
pub use memory::{MemoryBus, SystemMemory, ADDRESS_SPACE};
pub use opcodes::{lookup, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, Status};
pub use shared::SharedCpu;

/// A CPU wired to the System65 address space.
pub type System65 = CPU<SystemMemory>;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The byte at `address` is not a documented opcode.
    #[error("illegal opcode 0x{opcode:02X} at ${address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },

    /// The resolver was asked for a mode that has no bus address.
    #[error("addressing mode {0:?} does not resolve to a bus address")]
    UnresolvableMode(AddressingMode),
}

/// Errors raised while constructing a system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("installed memory size must be non-zero")]
    ZeroMemorySize,
}

/// Errors raised while loading a program image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read program image: {0}")]
    Io(#[from] std::io::Error),
}
