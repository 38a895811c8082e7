//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::memory::MemoryBus;
use crate::opcodes::lookup;

/// Decodes the instruction at `address` on a bus.
///
/// Operand bytes are read with 16-bit wraparound. An illegal opcode decodes
/// to an instruction with no metadata.
pub fn decode_at<B: MemoryBus + ?Sized>(bus: &B, address: u16) -> Instruction {
    let opcode = bus.read(address);
    let metadata = lookup(opcode);

    let operand = match metadata.map_or(0, |metadata| metadata.size_bytes) {
        2 => bus.read(address.wrapping_add(1)) as u16,
        3 => bus.read_word(address.wrapping_add(1)),
        _ => 0,
    };

    Instruction {
        address,
        opcode,
        metadata,
        operand,
    }
}

/// Decodes one instruction from the start of `bytes`.
///
/// Returns `None` for an illegal opcode or when the slice ends before the
/// instruction does.
pub fn decode_slice(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = lookup(opcode)?;

    let operand = match metadata.size_bytes {
        2 => *rest.first()? as u16,
        3 => u16::from_le_bytes([*rest.first()?, *rest.get(1)?]),
        _ => 0,
    };

    Some(Instruction {
        address,
        opcode,
        metadata: Some(metadata),
        operand,
    })
}
