//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on the accumulator or, read-modify-write, on memory. The bit
//! shifted out lands in Carry; Z and N come from the result.

use crate::{AddressingMode, ExecutionError, MemoryBus, OpcodeMetadata, Status, CPU};

/// Applies `shift` to the operand and stores the result back.
///
/// `shift` receives the operand and the incoming carry, and returns the
/// result and the outgoing carry.
fn shift_operand<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
    shift: fn(u8, bool) -> (u8, bool),
) -> Result<(), ExecutionError> {
    let carry_in = cpu.p.contains(Status::CARRY);

    let result = if op.addressing_mode == AddressingMode::Accumulator {
        let (result, carry_out) = shift(cpu.a, carry_in);
        cpu.a = result;
        cpu.p.set(Status::CARRY, carry_out);
        result
    } else {
        let addr = cpu.effective_address(op.addressing_mode)?;
        let (result, carry_out) = shift(cpu.memory.read(addr), carry_in);
        cpu.memory.write(addr, result);
        cpu.p.set(Status::CARRY, carry_out);
        result
    };

    cpu.set_zn(result);
    cpu.finish(op);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    shift_operand(cpu, op, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag. N is always
/// cleared as a result.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    shift_operand(cpu, op, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 leaves into carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    shift_operand(cpu, op, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 leaves into carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    shift_operand(cpu, op, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
