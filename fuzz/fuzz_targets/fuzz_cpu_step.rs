//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, memory contents and pending interrupt,
//! then runs one step under the chosen decode policy. Any panic is a bug.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use system65::{CpuConfig, DecodePolicy, ExecutionError, SystemMemory, Step, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    stack_page: u8,
    /// None, Some(false) = IRQ, Some(true) = NMI
    interrupt: Option<bool>,
    skip_illegal: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at $4000 for absolute addressing
    main_memory: [u8; 256],
    /// Installed size; 0 is replaced by the full space
    installed: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;
    let size = match input.memory.installed {
        0 => 0x10000,
        n => n as usize,
    };

    let Ok(memory) = SystemMemory::with_size(size) else {
        return;
    };

    let policy = if state.skip_illegal {
        DecodePolicy::Skip
    } else {
        DecodePolicy::Halt
    };
    let config = CpuConfig::default()
        .with_stack_page(state.stack_page)
        .with_decode_policy(policy);

    let mut cpu = CPU::with_config(memory, config);

    cpu.load_program(&input.memory.zero_page, 0x0000);
    cpu.load_program(&input.memory.stack_page, u16::from(state.stack_page) << 8);
    cpu.load_program(&input.memory.main_memory, 0x4000);
    cpu.load_program(&input.memory.instruction_bytes, 0x8000);

    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);
    if let Some(nmi) = state.interrupt {
        cpu.raise_interrupt(nmi);
    }

    let before = cpu.registers();
    match cpu.step() {
        Ok(step) => {
            assert!(step.cycles() >= 2);
            if let Step::Skipped { .. } = step {
                assert_eq!(cpu.decode_errors(), 1);
            }
        }
        Err(ExecutionError::IllegalOpcode { .. }) => {
            assert_eq!(cpu.registers(), before);
        }
        Err(err) => panic!("unexpected error: {err}"),
    }

    // Invariants that hold after every step
    assert_eq!(cpu.status() & 0x30, 0x20);
});
