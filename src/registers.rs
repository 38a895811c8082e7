//! # Register File
//!
//! The 6502's visible state is four 8-bit registers (A, X, Y, S), the 8-bit
//! processor status register (P) and the 16-bit program counter.
//!
//! ## Status Register Layout
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  N V R B D I Z C
//! ```
//!
//! - **R** (reserved) always reads as 1.
//! - **B** (break) is not stored in the live register. It only exists in the
//!   copy of P that BRK and PHP push onto the stack.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Processor status register (P).
///
/// Holds the packed flag byte. The reserved bit is always set and the break
/// bit is always clear; both invariants are enforced by every constructor.
///
/// # Examples
///
/// ```
/// use system65::Status;
///
/// let mut p = Status::from_byte(0x00);
/// assert_eq!(p.bits(), 0x20); // reserved bit forced on
///
/// p.set_zn(0x80);
/// assert!(p.contains(Status::NEGATIVE));
/// assert!(!p.contains(Status::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Status(u8);

impl Status {
    /// Carry: unsigned overflow out of bit 7, or "no borrow" after a subtraction.
    pub const CARRY: u8 = 0x01;
    /// Zero: the last result was 0.
    pub const ZERO: u8 = 0x02;
    /// Interrupt disable: IRQs are masked while set.
    pub const INTERRUPT_DISABLE: u8 = 0x04;
    /// Decimal: ADC/SBC operate on packed BCD.
    pub const DECIMAL: u8 = 0x08;
    /// Break marker, only ever present in a pushed copy of P.
    pub const BREAK: u8 = 0x10;
    /// Reserved bit, always 1.
    pub const RESERVED: u8 = 0x20;
    /// Overflow: signed overflow out of bit 6.
    pub const OVERFLOW: u8 = 0x40;
    /// Negative: bit 7 of the last result.
    pub const NEGATIVE: u8 = 0x80;

    /// Power-on status: only the reserved bit set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Self::RESERVED)
    }

    /// Builds a status value from a raw byte (e.g. one pulled off the stack).
    ///
    /// The break bit is discarded and the reserved bit is forced on.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self((value & !Self::BREAK) | Self::RESERVED)
    }

    /// Returns the packed flag byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the byte to push onto the stack.
    ///
    /// `break_marker` is true for BRK and PHP, false for IRQ/NMI.
    #[must_use]
    pub const fn to_pushed(self, break_marker: bool) -> u8 {
        if break_marker {
            self.0 | Self::BREAK | Self::RESERVED
        } else {
            self.0 | Self::RESERVED
        }
    }

    /// Returns true if every bit of `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Sets or clears `flag`.
    ///
    /// Attempts to set the break bit or clear the reserved bit are ignored.
    pub fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
        self.0 = (self.0 & !Self::BREAK) | Self::RESERVED;
    }

    /// Updates Zero and Negative from an 8-bit result.
    ///
    /// Both flags are written every time: a stale Z or N from an earlier
    /// result never survives.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of every architectural register.
///
/// Returned by [`CPU::registers`](crate::CPU::registers) for display and
/// diagnostics; mutating it has no effect on the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: Status,
    pub s: u8,
    pub pc: u16,
}
