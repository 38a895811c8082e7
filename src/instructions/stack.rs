//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PLA: Push/pull the accumulator
//! - PHP, PLP: Push/pull the status register
//!
//! The stack occupies one page (page 1 unless configured otherwise) and grows
//! downward. Pushes write then decrement SP; pulls increment SP then read.

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Cycles: 3. Flags affected: None
///
/// # Examples
///
/// ```
/// use system65::{MemoryBus, SystemMemory, CPU};
///
/// let mut memory = SystemMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.peek8(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.push8(cpu.a);
    cpu.finish(op);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has Break and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.push8(cpu.p.to_pushed(true));
    cpu.finish(op);
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.pop8();
    cpu.set_zn(cpu.a);
    cpu.finish(op);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// The Break bit of the pulled byte is ignored.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.p = Status::from_byte(cpu.pop8());
    cpu.finish(op);
    Ok(())
}
