//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR, RTS: Subroutine call and return
//! - BRK, RTI: Software interrupt and interrupt return
//! - NOP: No operation
//!
//! BRK hands off to the interrupt service routine in [`crate::interrupts`]
//! with the Break marker set, so it pushes exactly what RTI pops.

use crate::interrupts::InterruptKind;
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// `JMP ($10FF)` reads its high byte from `$1000`, not `$1100`, matching
/// the NMOS part. The resolver handles that.
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let target = cpu.effective_address(op.addressing_mode)?;

    cpu.pc = target;
    cpu.cycles += op.base_cycles as u64;

    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC + 2), high byte
/// first, then jumps. RTS adds the missing 1 back.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let target = cpu.effective_address(op.addressing_mode)?;

    cpu.push16(cpu.pc.wrapping_add(2));
    cpu.pc = target;
    cpu.cycles += op.base_cycles as u64;

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.pc = cpu.pop16().wrapping_add(1);
    cpu.cycles += op.base_cycles as u64;

    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops the status register (Break discarded, bit 5 forced on), then PC.
/// Unlike RTS, the popped PC is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.p = Status::from_byte(cpu.pop8());
    cpu.pc = cpu.pop16();
    cpu.cycles += op.base_cycles as u64;

    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Pushes PC + 2 and the status with Break set, sets I and loads PC from
/// the IRQ vector. The 7 cycles are charged by the service routine.
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.enter_interrupt(InterruptKind::Brk);
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.finish(op);
    Ok(())
}
