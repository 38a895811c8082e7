//! Tests for CMP, CPX and CPY.
//!
//! Comparisons compute `register - operand` without storing it:
//! C = register >= operand, Z = equal, N = bit 7 of the difference.

use system65::{MemoryBus, SystemMemory, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<SystemMemory> {
    let mut memory = SystemMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_immediate(opcode: u8, operand: u8, setup: impl FnOnce(&mut CPU<SystemMemory>)) -> CPU<SystemMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, operand);
    setup(&mut cpu);
    cpu.step().unwrap();
    cpu
}

// ========== CMP ==========

#[test]
fn test_cmp_equal() {
    let cpu = run_immediate(0xC9, 0x42, |cpu| cpu.set_a(0x42));

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_greater() {
    let cpu = run_immediate(0xC9, 0x10, |cpu| cpu.set_a(0x50));

    assert!(!cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let cpu = run_immediate(0xC9, 0x50, |cpu| cpu.set_a(0x10));

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_is_unsigned() {
    // 0x80 is greater than 0x7F when unsigned
    let cpu = run_immediate(0xC9, 0x7F, |cpu| cpu.set_a(0x80));

    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_leaves_overflow() {
    let cpu = run_immediate(0xC9, 0x01, |cpu| {
        cpu.set_a(0x80);
        cpu.set_flag_v(true);
    });

    assert!(cpu.flag_v());
}

#[test]
fn test_cmp_indirect_x_cycles() {
    let mut cpu = setup_cpu();

    // CMP ($10,X)
    cpu.memory_mut().write(0x8000, 0xC1);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write_word(0x0012, 0x0300);
    cpu.memory_mut().write(0x0300, 0x33);
    cpu.set_x(0x02);
    cpu.set_a(0x33);

    cpu.step().unwrap();

    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 6);
}

// ========== CPX / CPY ==========

#[test]
fn test_cpx_immediate() {
    let cpu = run_immediate(0xE0, 0x05, |cpu| cpu.set_x(0x05));

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_cpx_zero_page() {
    let mut cpu = setup_cpu();

    // CPX $40
    cpu.memory_mut().write(0x8000, 0xE4);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0x91);
    cpu.set_x(0x10);

    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_cpy_absolute() {
    let mut cpu = setup_cpu();

    // CPY $1000
    cpu.memory_mut().write(0x8000, 0xCC);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x1000, 0x01);
    cpu.set_y(0x00);

    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 4);
}
