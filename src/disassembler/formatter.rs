//! Assembly-text formatting for decoded instructions

use std::fmt;

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(metadata) = self.metadata else {
            return write!(f, ".byte ${:02X}", self.opcode);
        };

        let mnemonic = metadata.mnemonic;
        let operand = self.operand;

        match metadata.addressing_mode {
            AddressingMode::Implicit => write!(f, "{mnemonic}"),
            AddressingMode::Accumulator => write!(f, "{mnemonic} A"),
            AddressingMode::Immediate => write!(f, "{mnemonic} #${operand:02X}"),
            AddressingMode::ZeroPage => write!(f, "{mnemonic} ${operand:02X}"),
            AddressingMode::ZeroPageX => write!(f, "{mnemonic} ${operand:02X},X"),
            AddressingMode::ZeroPageY => write!(f, "{mnemonic} ${operand:02X},Y"),
            AddressingMode::Relative => write!(f, "{mnemonic} ${:04X}", self.branch_target()),
            AddressingMode::Absolute => write!(f, "{mnemonic} ${operand:04X}"),
            AddressingMode::AbsoluteX => write!(f, "{mnemonic} ${operand:04X},X"),
            AddressingMode::AbsoluteY => write!(f, "{mnemonic} ${operand:04X},Y"),
            AddressingMode::Indirect => write!(f, "{mnemonic} (${operand:04X})"),
            AddressingMode::IndirectX => write!(f, "{mnemonic} (${operand:02X},X)"),
            AddressingMode::IndirectY => write!(f, "{mnemonic} (${operand:02X}),Y"),
        }
    }
}

impl Instruction {
    /// Absolute destination of a branch, relative to the next instruction.
    fn branch_target(&self) -> u16 {
        self.address
            .wrapping_add(2)
            .wrapping_add_signed(self.operand as u8 as i8 as i16)
    }
}
