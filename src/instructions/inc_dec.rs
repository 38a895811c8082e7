//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Read-modify-write on memory
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap at 8 bits and update Z and N. Carry and Overflow are untouched.

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, CPU};

fn modify_memory<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
    delta: fn(u8) -> u8,
) -> Result<(), ExecutionError> {
    let addr = cpu.effective_address(op.addressing_mode)?;
    let result = delta(cpu.memory.read(addr));
    cpu.memory.write(addr, result);

    cpu.set_zn(result);
    cpu.finish(op);
    Ok(())
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    modify_memory(cpu, op, |value| value.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    modify_memory(cpu, op, |value| value.wrapping_sub(1))
}

pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    cpu.finish(op);
    Ok(())
}
