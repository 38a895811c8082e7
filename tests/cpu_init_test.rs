//! Tests for CPU construction, reset and configuration.

use system65::{
    ConfigError, CpuConfig, InterruptState, MemoryBus, Status, System65, SystemMemory, Vector, CPU,
};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<SystemMemory> {
    let mut memory = SystemMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Construction ==========

#[test]
fn test_power_on_state() {
    let cpu = setup_cpu();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.decode_errors(), 0);

    assert!(cpu.flag_i());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.interrupt_state(), InterruptState::Idle);
}

#[test]
fn test_custom_reset_vector_location() {
    let mut memory = SystemMemory::new();
    memory.write_word(0xFFF0, 0x1234);
    memory.write_word(0xFFFC, 0x8000);

    let config = CpuConfig::default().with_vector(Vector::Reset, 0xFFF0);
    let cpu = CPU::with_config(memory, config);

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_with_memory_size() {
    let cpu = System65::with_memory_size(0x4000, CpuConfig::default()).unwrap();
    assert_eq!(cpu.memory().active_size(), 0x4000);

    let clamped = System65::with_memory_size(1 << 20, CpuConfig::default()).unwrap();
    assert_eq!(clamped.memory().active_size(), 0x10000);
}

#[test]
fn test_zero_memory_size_is_config_error() {
    let result = System65::with_memory_size(0, CpuConfig::default());
    assert!(matches!(result, Err(ConfigError::ZeroMemorySize)));
}

// ========== Reset ==========

#[test]
fn test_reset_preserves_registers_and_cycles() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA); // NOP
    cpu.step().unwrap();

    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x40);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);
    cpu.set_pc(0x1234);

    cpu.reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_i());
    assert!(cpu.flag_c());
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.y(), 0x33);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_reset_clears_pending_interrupt() {
    let mut cpu = setup_cpu();
    cpu.raise_interrupt(true);
    assert_ne!(cpu.interrupt_state(), InterruptState::Idle);

    cpu.reset();
    assert_eq!(cpu.interrupt_state(), InterruptState::Idle);
}

#[test]
fn test_reset_pushes_nothing() {
    let mut cpu = setup_cpu();
    cpu.reset();

    for addr in 0x0100..=0x01FF {
        assert_eq!(cpu.peek8(addr), 0x00);
    }
}

// ========== Status Register ==========

#[test]
fn test_set_status_normalizes_bits() {
    let mut cpu = setup_cpu();

    cpu.set_status(0x00);
    assert_eq!(cpu.status(), 0x20);

    cpu.set_status(0xFF);
    assert_eq!(cpu.status(), 0xEF);
    assert!(cpu.flag_n() && cpu.flag_v() && cpu.flag_d());
    assert!(cpu.flag_i() && cpu.flag_z() && cpu.flag_c());
}

#[test]
fn test_registers_snapshot() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);
    cpu.set_flag_c(true);

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x01);
    assert_eq!(regs.x, 0x02);
    assert_eq!(regs.y, 0x03);
    assert_eq!(regs.s, 0xFD);
    assert_eq!(regs.pc, 0x8000);
    assert!(regs.p.contains(Status::CARRY | Status::INTERRUPT_DISABLE));
}
