//! 6502 Disassembler Module
//!
//! Converts machine code into assembly text, either straight off a
//! [`MemoryBus`] (for tracing the running program) or from a byte slice.
//!
//! # Examples
//!
//! ```
//! use system65::disassembler::disassemble;
//!
//! let listing: Vec<String> = disassemble(&[0xA9, 0x05, 0x6C, 0x34, 0x12, 0x02], 0x0200)
//!     .iter()
//!     .map(|instr| instr.to_string())
//!     .collect();
//!
//! assert_eq!(listing, ["LDA #$05", "JMP ($1234)", ".byte $02"]);
//! ```

pub mod decoder;
pub mod formatter;

pub use decoder::{decode_at, decode_slice};

use crate::opcodes::{lookup, Mnemonic, OpcodeMetadata};

/// A single decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Table entry for the opcode, `None` for an illegal byte
    pub metadata: Option<&'static OpcodeMetadata>,

    /// Operand assembled little-endian; 0 when the mode takes none
    pub operand: u16,
}

impl Instruction {
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        self.metadata.map(|metadata| metadata.mnemonic)
    }

    fn raw_byte(address: u16, opcode: u8) -> Self {
        Instruction {
            address,
            opcode,
            metadata: None,
            operand: 0,
        }
    }

    /// Total size in bytes. Illegal bytes count as one.
    pub fn size_bytes(&self) -> u8 {
        self.metadata.map_or(1, |metadata| metadata.size_bytes)
    }
}

/// Disassembles a byte slice whose first byte sits at `start`.
///
/// Illegal opcodes, and a final instruction cut short by the end of the
/// slice, come out as one `.byte` entry per byte.
pub fn disassemble(bytes: &[u8], start: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start;

    while offset < bytes.len() {
        let instr = match decode_slice(&bytes[offset..], address) {
            Some(instr) => instr,
            None if lookup(bytes[offset]).is_some() => {
                // Legal opcode whose operand runs past the slice
                for (i, &byte) in bytes[offset..].iter().enumerate() {
                    instructions.push(Instruction::raw_byte(
                        address.wrapping_add(i as u16),
                        byte,
                    ));
                }
                break;
            }
            None => Instruction::raw_byte(address, bytes[offset]),
        };

        let size = instr.size_bytes();
        offset += size as usize;
        address = address.wrapping_add(size as u16);
        instructions.push(instr);
    }

    instructions
}
