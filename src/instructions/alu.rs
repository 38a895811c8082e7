//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: Add/subtract with carry, binary or packed BCD
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register comparison
//! - BIT: Bit test

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Status, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. With the Decimal
/// flag set, both operands are treated as packed BCD.
///
/// # Flags
///
/// - C: carry out of bit 7 (binary) or out of the tens digit (decimal)
/// - V: signed overflow, taken from the binary sum in decimal mode
/// - Z, N: from the final accumulator value
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    let a = cpu.a;
    let carry_in = cpu.p.contains(Status::CARRY) as u16;

    let (result, carry, overflow) = if cpu.p.contains(Status::DECIMAL) {
        let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
        if lo > 0x09 {
            lo += 0x06;
        }
        let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + (lo > 0x0F) as u16;

        // V is computed before the tens digit is corrected
        let intermediate = ((hi << 4) | (lo & 0x0F)) as u8;
        let overflow = (!(a ^ value) & (a ^ intermediate) & 0x80) != 0;

        if hi > 0x09 {
            hi += 0x06;
        }
        (((hi << 4) | (lo & 0x0F)) as u8, hi > 0x0F, overflow)
    } else {
        let sum = a as u16 + value as u16 + carry_in;
        let result = sum as u8;
        // Both operands had the same sign and the result has a different one
        let overflow = (!(a ^ value) & (a ^ result) & 0x80) != 0;
        (result, sum > 0xFF, overflow)
    };

    cpu.a = result;
    cpu.p.set(Status::CARRY, carry);
    cpu.p.set(Status::OVERFLOW, overflow);
    cpu.set_zn(result);

    cpu.finish(op);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry is the inverted borrow: set when no
/// borrow was needed. In decimal mode the digits are corrected by 6 after a
/// borrow out of each nibble; C and V still come from the binary difference.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    let a = cpu.a;
    let borrow = (!cpu.p.contains(Status::CARRY)) as i16;

    let difference = a as i16 - value as i16 - borrow;
    let binary = difference as u8;
    let overflow = ((a ^ value) & (a ^ binary) & 0x80) != 0;

    let result = if cpu.p.contains(Status::DECIMAL) {
        let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
        let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
        if lo < 0 {
            lo -= 0x06;
            hi -= 1;
        }
        if hi < 0 {
            hi -= 0x06;
        }
        ((hi << 4) | (lo & 0x0F)) as u8
    } else {
        binary
    };

    cpu.a = result;
    cpu.p.set(Status::CARRY, difference >= 0);
    cpu.p.set(Status::OVERFLOW, overflow);
    cpu.set_zn(result);

    cpu.finish(op);
    Ok(())
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    cpu.a &= value;
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    cpu.a |= value;
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

/// Shared body of CMP, CPX and CPY.
///
/// - C: register >= operand (unsigned)
/// - Z: register == operand
/// - N: bit 7 of `register - operand`, truncated to a byte
fn compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
    register: u8,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    cpu.p.set(Status::CARRY, register >= value);
    cpu.set_zn(register.wrapping_sub(value));
    cpu.finish(op);
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let register = cpu.a;
    compare(cpu, op, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let register = cpu.x;
    compare(cpu, op, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let register = cpu.y;
    compare(cpu, op, register)
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is not modified.
///
/// - Z: set if `A & M` is zero
/// - N: bit 7 of M
/// - V: bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(op)?;
    cpu.p.set(Status::ZERO, cpu.a & value == 0);
    cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
    cpu.finish(op);
    Ok(())
}
