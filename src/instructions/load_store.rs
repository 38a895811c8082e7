//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update Z and N; stores affect no flags.

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.read_operand(op)?;
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.read_operand(op)?;
    cpu.set_zn(cpu.x);
    cpu.finish(op);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.read_operand(op)?;
    cpu.set_zn(cpu.y);
    cpu.finish(op);
    Ok(())
}

fn store<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
    value: u8,
) -> Result<(), ExecutionError> {
    let addr = cpu.effective_address(op.addressing_mode)?;
    cpu.memory.write(addr, value);
    cpu.finish(op);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.a;
    store(cpu, op, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.x;
    store(cpu, op, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.y;
    store(cpu, op, value)
}
