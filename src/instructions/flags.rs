//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt Disable
//! - CLD / SED: Decimal Mode
//! - CLV: Overflow (there is no SEV)
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, CPU};

/// Sets or clears a single status flag.
///
/// # Examples
///
/// ```
/// use system65::{MemoryBus, SystemMemory, CPU};
///
/// let mut memory = SystemMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x8001);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub(crate) fn execute_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
    flag: u8,
    on: bool,
) -> Result<(), ExecutionError> {
    cpu.p.set(flag, on);
    cpu.finish(op);
    Ok(())
}
