//! Tests for INC, DEC, INX, INY, DEX and DEY.

use system65::{MemoryBus, SystemMemory, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<SystemMemory> {
    let mut memory = SystemMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Memory ==========

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();

    // INC $20
    cpu.memory_mut().write(0x8000, 0xE6);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0020), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_inc_wraps_without_touching_carry() {
    let mut cpu = setup_cpu();

    // INC $1234
    cpu.memory_mut().write(0x8000, 0xEE);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0xFF);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1234), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_dec_absolute_x() {
    let mut cpu = setup_cpu();

    // DEC $1000,X
    cpu.memory_mut().write(0x8000, 0xDE);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x1004, 0x00);
    cpu.set_x(0x04);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1004), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 7);
}

// ========== Registers ==========

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu();

    // INX
    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_x(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_iny() {
    let mut cpu = setup_cpu();

    // INY
    cpu.memory_mut().write(0x8000, 0xC8);
    cpu.set_y(0x41);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_dex_wraps() {
    let mut cpu = setup_cpu();

    // DEX
    cpu.memory_mut().write(0x8000, 0xCA);
    cpu.set_x(0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();

    // DEY
    cpu.memory_mut().write(0x8000, 0x88);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_countdown_loop() {
    let mut cpu = setup_cpu();

    // LDX #$05; loop: DEX; BNE loop
    cpu.memory_mut().write(0x8000, 0xA2);
    cpu.memory_mut().write(0x8001, 0x05);
    cpu.memory_mut().write(0x8002, 0xCA);
    cpu.memory_mut().write(0x8003, 0xD0);
    cpu.memory_mut().write(0x8004, 0xFD);

    cpu.step().unwrap();
    while cpu.pc() != 0x8005 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    // LDX 2 + 5 * DEX 2 + 4 taken BNE 3 + final BNE 2
    assert_eq!(cpu.cycles(), 2 + 10 + 12 + 2);
}
