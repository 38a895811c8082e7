//! Comprehensive tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Binary addition with and without carry in
//! - Flag updates (C, Z, V, N)
//! - Signed overflow cases
//! - Packed BCD addition in decimal mode

use system65::{MemoryBus, SystemMemory, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<SystemMemory> {
    let mut memory = SystemMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Runs `ADC #value` with the given accumulator and carry.
fn adc_immediate(a: u8, value: u8, carry: bool, decimal: bool) -> CPU<SystemMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, value);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.set_flag_d(decimal);
    cpu.step().unwrap();
    cpu
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let cpu = adc_immediate(0x10, 0x05, false, false);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let cpu = adc_immediate(0x10, 0x05, true, false);
    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_sec_then_adc_wraps_with_carry() {
    let mut cpu = setup_cpu();

    // SEC; ADC #$01 with A=$FF
    cpu.memory_mut().write(0x8000, 0x38);
    cpu.memory_mut().write(0x8001, 0x69);
    cpu.memory_mut().write(0x8002, 0x01);
    cpu.set_a(0xFF);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

// ========== Flag Tests ==========

#[test]
fn test_adc_carry_and_zero() {
    let cpu = adc_immediate(0x01, 0xFF, false, false);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_positive_overflow() {
    // 0x50 + 0x50 = 0xA0: two positives give a negative
    let cpu = adc_immediate(0x50, 0x50, false, false);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_negative_overflow() {
    // 0x90 + 0x90 = 0x120: two negatives give a positive
    let cpu = adc_immediate(0x90, 0x90, false, false);

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let cpu = adc_immediate(0x7F, 0x80, true, false);

    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
}

// ========== Addressing Modes ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();

    // ADC $10
    cpu.memory_mut().write(0x8000, 0x65);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x22);
    cpu.set_a(0x11);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();

    // ADC ($20),Y
    cpu.memory_mut().write(0x8000, 0x71);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write_word(0x0020, 0x1000);
    cpu.memory_mut().write(0x1003, 0x04);
    cpu.set_y(0x03);
    cpu.set_a(0x01);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.cycles(), 5);
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_simple() {
    let cpu = adc_immediate(0x15, 0x27, false, true);

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_carry_out() {
    let cpu = adc_immediate(0x58, 0x46, true, true);

    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_99_plus_1() {
    let cpu = adc_immediate(0x99, 0x01, false, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_decimal_does_not_touch_d() {
    let cpu = adc_immediate(0x01, 0x01, false, true);

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_d());
}
