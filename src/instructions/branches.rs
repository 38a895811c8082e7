//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS share one implementation; the
//! dispatcher evaluates the condition and passes it in.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use crate::{ExecutionError, MemoryBus, OpcodeMetadata, CPU};

/// Executes a conditional branch.
///
/// The offset is relative to the address of the next instruction (PC + 2).
///
/// Cycle timing:
/// - 2 cycles if branch not taken
/// - 3 cycles if branch taken to same page
/// - 4 cycles if branch taken to different page
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpcodeMetadata,
    condition: bool,
) -> Result<(), ExecutionError> {
    let offset = cpu.memory.read(cpu.pc.wrapping_add(1)) as i8;

    cpu.finish(op);

    if condition {
        let next = cpu.pc;
        let target = next.wrapping_add_signed(offset as i16);

        cpu.cycles += 1;
        if (next & 0xFF00) != (target & 0xFF00) {
            cpu.cycles += 1;
        }

        cpu.pc = target;
    }

    Ok(())
}
