//! Checks the opcode table against the documented NMOS 6502 instruction set.

use system65::{lookup, AddressingMode, Mnemonic, OPCODE_TABLE};

#[test]
fn test_documented_opcode_count() {
    let documented = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
    assert_eq!(documented, 151);
}

#[test]
fn test_known_entries() {
    let lda = lookup(0xA9).unwrap();
    assert_eq!(lda.mnemonic, Mnemonic::Lda);
    assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
    assert_eq!(lda.base_cycles, 2);
    assert_eq!(lda.size_bytes, 2);

    let jmp = lookup(0x6C).unwrap();
    assert_eq!(jmp.mnemonic, Mnemonic::Jmp);
    assert_eq!(jmp.addressing_mode, AddressingMode::Indirect);
    assert_eq!(jmp.base_cycles, 5);
    assert_eq!(jmp.size_bytes, 3);

    let brk = lookup(0x00).unwrap();
    assert_eq!(brk.mnemonic, Mnemonic::Brk);
    assert_eq!(brk.base_cycles, 7);

    let sta = lookup(0x9D).unwrap();
    assert_eq!(sta.addressing_mode, AddressingMode::AbsoluteX);
    assert_eq!(sta.base_cycles, 5);
}

#[test]
fn test_undocumented_bytes_are_absent() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x89, 0x9C, 0xEB, 0xFF] {
        assert!(lookup(opcode).is_none(), "0x{opcode:02X} should be illegal");
    }
}

#[test]
fn test_sizes_match_addressing_modes() {
    for entry in OPCODE_TABLE.iter().flatten() {
        let expected = match entry.addressing_mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
            _ => 2,
        };
        assert_eq!(
            entry.size_bytes, expected,
            "0x{:02X} {}",
            entry.opcode, entry.mnemonic
        );
    }
}

#[test]
fn test_read_modify_write_cycles() {
    // ASL/LSR/ROL/ROR/INC/DEC share one timing pattern per mode
    for entry in OPCODE_TABLE.iter().flatten() {
        let rmw = matches!(
            entry.mnemonic,
            Mnemonic::Asl | Mnemonic::Lsr | Mnemonic::Rol | Mnemonic::Ror | Mnemonic::Inc | Mnemonic::Dec
        );
        if !rmw {
            continue;
        }

        let expected = match entry.addressing_mode {
            AddressingMode::Accumulator => 2,
            AddressingMode::ZeroPage => 5,
            AddressingMode::ZeroPageX => 6,
            AddressingMode::Absolute => 6,
            AddressingMode::AbsoluteX => 7,
            mode => panic!("unexpected mode {mode:?} for {}", entry.mnemonic),
        };
        assert_eq!(entry.base_cycles, expected, "0x{:02X}", entry.opcode);
    }
}

#[test]
fn test_branches_are_relative() {
    for entry in OPCODE_TABLE.iter().flatten() {
        let is_branch = matches!(
            entry.mnemonic,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bne
                | Mnemonic::Bmi
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        );
        assert_eq!(is_branch, entry.addressing_mode == AddressingMode::Relative);
        if is_branch {
            assert_eq!(entry.base_cycles, 2);
        }
    }
}
