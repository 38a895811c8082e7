//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for decoding. Each of the 151 documented NMOS encodings
//! maps to a (mnemonic, addressing mode) pair with its size and base cycle
//! cost. The remaining 105 bytes are `None`: illegal opcodes are a decode
//! error, never a silent fall-through.

use std::fmt;

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single documented opcode.
///
/// # Examples
///
/// ```
/// use system65::{lookup, AddressingMode, Mnemonic};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The opcode byte this entry describes.
    pub opcode: u8,

    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost. Taken branches add to it at run time.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

const fn op(opcode: u8, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        opcode,
        mnemonic,
        addressing_mode: mode,
        base_cycles: cycles,
        size_bytes: 1 + mode.operand_bytes(),
    })
}

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<OpcodeMetadata>; 256] = [None; 256];

    // Load/store
    t[0xA9] = op(0xA9, Lda, Immediate, 2);
    t[0xA5] = op(0xA5, Lda, ZeroPage, 3);
    t[0xB5] = op(0xB5, Lda, ZeroPageX, 4);
    t[0xAD] = op(0xAD, Lda, Absolute, 4);
    t[0xBD] = op(0xBD, Lda, AbsoluteX, 4);
    t[0xB9] = op(0xB9, Lda, AbsoluteY, 4);
    t[0xA1] = op(0xA1, Lda, IndirectX, 6);
    t[0xB1] = op(0xB1, Lda, IndirectY, 5);

    t[0xA2] = op(0xA2, Ldx, Immediate, 2);
    t[0xA6] = op(0xA6, Ldx, ZeroPage, 3);
    t[0xB6] = op(0xB6, Ldx, ZeroPageY, 4);
    t[0xAE] = op(0xAE, Ldx, Absolute, 4);
    t[0xBE] = op(0xBE, Ldx, AbsoluteY, 4);

    t[0xA0] = op(0xA0, Ldy, Immediate, 2);
    t[0xA4] = op(0xA4, Ldy, ZeroPage, 3);
    t[0xB4] = op(0xB4, Ldy, ZeroPageX, 4);
    t[0xAC] = op(0xAC, Ldy, Absolute, 4);
    t[0xBC] = op(0xBC, Ldy, AbsoluteX, 4);

    t[0x85] = op(0x85, Sta, ZeroPage, 3);
    t[0x95] = op(0x95, Sta, ZeroPageX, 4);
    t[0x8D] = op(0x8D, Sta, Absolute, 4);
    t[0x9D] = op(0x9D, Sta, AbsoluteX, 5);
    t[0x99] = op(0x99, Sta, AbsoluteY, 5);
    t[0x81] = op(0x81, Sta, IndirectX, 6);
    t[0x91] = op(0x91, Sta, IndirectY, 6);

    t[0x86] = op(0x86, Stx, ZeroPage, 3);
    t[0x96] = op(0x96, Stx, ZeroPageY, 4);
    t[0x8E] = op(0x8E, Stx, Absolute, 4);

    t[0x84] = op(0x84, Sty, ZeroPage, 3);
    t[0x94] = op(0x94, Sty, ZeroPageX, 4);
    t[0x8C] = op(0x8C, Sty, Absolute, 4);

    // Register transfers
    t[0xAA] = op(0xAA, Tax, Implicit, 2);
    t[0xA8] = op(0xA8, Tay, Implicit, 2);
    t[0x8A] = op(0x8A, Txa, Implicit, 2);
    t[0x98] = op(0x98, Tya, Implicit, 2);
    t[0xBA] = op(0xBA, Tsx, Implicit, 2);
    t[0x9A] = op(0x9A, Txs, Implicit, 2);

    // Stack
    t[0x48] = op(0x48, Pha, Implicit, 3);
    t[0x08] = op(0x08, Php, Implicit, 3);
    t[0x68] = op(0x68, Pla, Implicit, 4);
    t[0x28] = op(0x28, Plp, Implicit, 4);

    // Logical
    t[0x29] = op(0x29, And, Immediate, 2);
    t[0x25] = op(0x25, And, ZeroPage, 3);
    t[0x35] = op(0x35, And, ZeroPageX, 4);
    t[0x2D] = op(0x2D, And, Absolute, 4);
    t[0x3D] = op(0x3D, And, AbsoluteX, 4);
    t[0x39] = op(0x39, And, AbsoluteY, 4);
    t[0x21] = op(0x21, And, IndirectX, 6);
    t[0x31] = op(0x31, And, IndirectY, 5);

    t[0x49] = op(0x49, Eor, Immediate, 2);
    t[0x45] = op(0x45, Eor, ZeroPage, 3);
    t[0x55] = op(0x55, Eor, ZeroPageX, 4);
    t[0x4D] = op(0x4D, Eor, Absolute, 4);
    t[0x5D] = op(0x5D, Eor, AbsoluteX, 4);
    t[0x59] = op(0x59, Eor, AbsoluteY, 4);
    t[0x41] = op(0x41, Eor, IndirectX, 6);
    t[0x51] = op(0x51, Eor, IndirectY, 5);

    t[0x09] = op(0x09, Ora, Immediate, 2);
    t[0x05] = op(0x05, Ora, ZeroPage, 3);
    t[0x15] = op(0x15, Ora, ZeroPageX, 4);
    t[0x0D] = op(0x0D, Ora, Absolute, 4);
    t[0x1D] = op(0x1D, Ora, AbsoluteX, 4);
    t[0x19] = op(0x19, Ora, AbsoluteY, 4);
    t[0x01] = op(0x01, Ora, IndirectX, 6);
    t[0x11] = op(0x11, Ora, IndirectY, 5);

    t[0x24] = op(0x24, Bit, ZeroPage, 3);
    t[0x2C] = op(0x2C, Bit, Absolute, 4);

    // Arithmetic
    t[0x69] = op(0x69, Adc, Immediate, 2);
    t[0x65] = op(0x65, Adc, ZeroPage, 3);
    t[0x75] = op(0x75, Adc, ZeroPageX, 4);
    t[0x6D] = op(0x6D, Adc, Absolute, 4);
    t[0x7D] = op(0x7D, Adc, AbsoluteX, 4);
    t[0x79] = op(0x79, Adc, AbsoluteY, 4);
    t[0x61] = op(0x61, Adc, IndirectX, 6);
    t[0x71] = op(0x71, Adc, IndirectY, 5);

    t[0xE9] = op(0xE9, Sbc, Immediate, 2);
    t[0xE5] = op(0xE5, Sbc, ZeroPage, 3);
    t[0xF5] = op(0xF5, Sbc, ZeroPageX, 4);
    t[0xED] = op(0xED, Sbc, Absolute, 4);
    t[0xFD] = op(0xFD, Sbc, AbsoluteX, 4);
    t[0xF9] = op(0xF9, Sbc, AbsoluteY, 4);
    t[0xE1] = op(0xE1, Sbc, IndirectX, 6);
    t[0xF1] = op(0xF1, Sbc, IndirectY, 5);

    t[0xC9] = op(0xC9, Cmp, Immediate, 2);
    t[0xC5] = op(0xC5, Cmp, ZeroPage, 3);
    t[0xD5] = op(0xD5, Cmp, ZeroPageX, 4);
    t[0xCD] = op(0xCD, Cmp, Absolute, 4);
    t[0xDD] = op(0xDD, Cmp, AbsoluteX, 4);
    t[0xD9] = op(0xD9, Cmp, AbsoluteY, 4);
    t[0xC1] = op(0xC1, Cmp, IndirectX, 6);
    t[0xD1] = op(0xD1, Cmp, IndirectY, 5);

    t[0xE0] = op(0xE0, Cpx, Immediate, 2);
    t[0xE4] = op(0xE4, Cpx, ZeroPage, 3);
    t[0xEC] = op(0xEC, Cpx, Absolute, 4);

    t[0xC0] = op(0xC0, Cpy, Immediate, 2);
    t[0xC4] = op(0xC4, Cpy, ZeroPage, 3);
    t[0xCC] = op(0xCC, Cpy, Absolute, 4);

    // Increments and decrements
    t[0xE6] = op(0xE6, Inc, ZeroPage, 5);
    t[0xF6] = op(0xF6, Inc, ZeroPageX, 6);
    t[0xEE] = op(0xEE, Inc, Absolute, 6);
    t[0xFE] = op(0xFE, Inc, AbsoluteX, 7);
    t[0xE8] = op(0xE8, Inx, Implicit, 2);
    t[0xC8] = op(0xC8, Iny, Implicit, 2);

    t[0xC6] = op(0xC6, Dec, ZeroPage, 5);
    t[0xD6] = op(0xD6, Dec, ZeroPageX, 6);
    t[0xCE] = op(0xCE, Dec, Absolute, 6);
    t[0xDE] = op(0xDE, Dec, AbsoluteX, 7);
    t[0xCA] = op(0xCA, Dex, Implicit, 2);
    t[0x88] = op(0x88, Dey, Implicit, 2);

    // Shifts
    t[0x0A] = op(0x0A, Asl, Accumulator, 2);
    t[0x06] = op(0x06, Asl, ZeroPage, 5);
    t[0x16] = op(0x16, Asl, ZeroPageX, 6);
    t[0x0E] = op(0x0E, Asl, Absolute, 6);
    t[0x1E] = op(0x1E, Asl, AbsoluteX, 7);

    t[0x4A] = op(0x4A, Lsr, Accumulator, 2);
    t[0x46] = op(0x46, Lsr, ZeroPage, 5);
    t[0x56] = op(0x56, Lsr, ZeroPageX, 6);
    t[0x4E] = op(0x4E, Lsr, Absolute, 6);
    t[0x5E] = op(0x5E, Lsr, AbsoluteX, 7);

    t[0x2A] = op(0x2A, Rol, Accumulator, 2);
    t[0x26] = op(0x26, Rol, ZeroPage, 5);
    t[0x36] = op(0x36, Rol, ZeroPageX, 6);
    t[0x2E] = op(0x2E, Rol, Absolute, 6);
    t[0x3E] = op(0x3E, Rol, AbsoluteX, 7);

    t[0x6A] = op(0x6A, Ror, Accumulator, 2);
    t[0x66] = op(0x66, Ror, ZeroPage, 5);
    t[0x76] = op(0x76, Ror, ZeroPageX, 6);
    t[0x6E] = op(0x6E, Ror, Absolute, 6);
    t[0x7E] = op(0x7E, Ror, AbsoluteX, 7);

    // Jumps and calls
    t[0x4C] = op(0x4C, Jmp, Absolute, 3);
    t[0x6C] = op(0x6C, Jmp, Indirect, 5);
    t[0x20] = op(0x20, Jsr, Absolute, 6);
    t[0x60] = op(0x60, Rts, Implicit, 6);

    // Branches
    t[0x90] = op(0x90, Bcc, Relative, 2);
    t[0xB0] = op(0xB0, Bcs, Relative, 2);
    t[0xF0] = op(0xF0, Beq, Relative, 2);
    t[0x30] = op(0x30, Bmi, Relative, 2);
    t[0xD0] = op(0xD0, Bne, Relative, 2);
    t[0x10] = op(0x10, Bpl, Relative, 2);
    t[0x50] = op(0x50, Bvc, Relative, 2);
    t[0x70] = op(0x70, Bvs, Relative, 2);

    // Status flags
    t[0x18] = op(0x18, Clc, Implicit, 2);
    t[0xD8] = op(0xD8, Cld, Implicit, 2);
    t[0x58] = op(0x58, Cli, Implicit, 2);
    t[0xB8] = op(0xB8, Clv, Implicit, 2);
    t[0x38] = op(0x38, Sec, Implicit, 2);
    t[0xF8] = op(0xF8, Sed, Implicit, 2);
    t[0x78] = op(0x78, Sei, Implicit, 2);

    // System
    t[0x00] = op(0x00, Brk, Implicit, 7);
    t[0xEA] = op(0xEA, Nop, Implicit, 2);
    t[0x40] = op(0x40, Rti, Implicit, 6);

    t
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks an illegal (undocumented) encoding.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the metadata for an opcode byte.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_entries_know_their_own_opcode() {
        for (index, entry) in OPCODE_TABLE.iter().enumerate() {
            if let Some(metadata) = entry {
                assert_eq!(metadata.opcode as usize, index);
            }
        }
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        assert_eq!(lookup(0x0A).unwrap().size_bytes, 1); // ASL A
        assert_eq!(lookup(0xA5).unwrap().size_bytes, 2); // LDA zp
        assert_eq!(lookup(0x6C).unwrap().size_bytes, 3); // JMP (ind)
        assert_eq!(lookup(0x20).unwrap().size_bytes, 3); // JSR abs
    }

    #[test]
    fn test_every_mnemonic_is_reachable() {
        let mut seen: Vec<Mnemonic> = OPCODE_TABLE
            .iter()
            .flatten()
            .map(|metadata| metadata.mnemonic)
            .collect();
        seen.sort_by_key(|mnemonic| mnemonic.as_str());
        seen.dedup();
        assert_eq!(seen.len(), 56);
    }
}
