//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns the bytes following an opcode into an effective address.
//!
//! Ten of the modes resolve to a bus address. Implicit, Accumulator and
//! Relative do not: their operand is nothing, the A register, or a signed
//! branch displacement, and asking the resolver for them is an error.

use crate::{ExecutionError, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Computes the effective address of the operand of the instruction at PC.
    ///
    /// The result depends only on PC, X, Y and bus contents; nothing is
    /// modified. Zero-page indexing and the zero-page pointer fetches of
    /// `(zp,X)` and `(zp),Y` wrap within page 0. `JMP ($xxFF)` takes its high
    /// byte from `$xx00`, like the NMOS part.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnresolvableMode` for Implicit, Accumulator and
    /// Relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{AddressingMode, MemoryBus, SystemMemory, CPU};
    ///
    /// let mut mem = SystemMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0xB5); // LDA $FF,X
    /// mem.write(0x8001, 0xFF);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_x(0x01);
    ///
    /// // Wraps within page 0
    /// assert_eq!(cpu.effective_address(AddressingMode::ZeroPageX), Ok(0x0000));
    /// ```
    pub fn effective_address(&self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        let operand = self.pc.wrapping_add(1);

        let address = match mode {
            AddressingMode::Immediate => operand,
            AddressingMode::ZeroPage => self.memory.read(operand) as u16,
            AddressingMode::ZeroPageX => self.memory.read(operand).wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.memory.read(operand).wrapping_add(self.y) as u16,
            AddressingMode::Absolute => self.memory.read_word(operand),
            AddressingMode::AbsoluteX => self.memory.read_word(operand).wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.memory.read_word(operand).wrapping_add(self.y as u16),
            AddressingMode::Indirect => {
                let pointer = self.memory.read_word(operand);
                self.read_word_in_page(pointer)
            }
            AddressingMode::IndirectX => {
                let pointer = self.memory.read(operand).wrapping_add(self.x);
                self.read_word_in_page(pointer as u16)
            }
            AddressingMode::IndirectY => {
                let pointer = self.memory.read(operand);
                self.read_word_in_page(pointer as u16)
                    .wrapping_add(self.y as u16)
            }
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative => {
                return Err(ExecutionError::UnresolvableMode(mode));
            }
        };

        Ok(address)
    }

    /// Reads a pointer whose high byte comes from the same page as its low
    /// byte.
    fn read_word_in_page(&self, addr: u16) -> u16 {
        let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        u16::from_le_bytes([self.memory.read(addr), self.memory.read(hi_addr)])
    }
}
