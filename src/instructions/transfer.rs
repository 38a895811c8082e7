//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All but TXS update Z and N from the copied value.

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    cpu.finish(op);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.sp = cpu.x;
    cpu.finish(op);
    Ok(())
}
