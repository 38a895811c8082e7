//! # CPU Configuration
//!
//! Construction-time options: where the stack lives, where each vector is read
//! from, and how strictly illegal opcodes are treated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What `step` does when it fetches a byte that is not a documented opcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecodePolicy {
    /// Return `ExecutionError::IllegalOpcode` and leave the processor untouched.
    #[default]
    Halt,

    /// Log, count, and treat the byte as a one-byte, two-cycle no-op.
    Skip,
}

/// The three hardware vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Vector {
    Nmi,
    Reset,
    /// Shared by IRQ and BRK.
    Irq,
}

/// Construction-time options for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use system65::{CpuConfig, DecodePolicy, Vector};
///
/// let config = CpuConfig::default()
///     .with_stack_page(0x02)
///     .with_vector(Vector::Irq, 0xFFF0)
///     .with_decode_policy(DecodePolicy::Skip);
///
/// assert_eq!(config.stack_page, 0x02);
/// assert_eq!(config.irq_vector, 0xFFF0);
/// assert_eq!(config.reset_vector, 0xFFFC);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CpuConfig {
    /// High byte of the stack page.
    pub stack_page: u8,
    pub nmi_vector: u16,
    pub reset_vector: u16,
    pub irq_vector: u16,
    pub decode_policy: DecodePolicy,
}

impl CpuConfig {
    pub const DEFAULT_STACK_PAGE: u8 = 0x01;
    pub const DEFAULT_NMI_VECTOR: u16 = 0xFFFA;
    pub const DEFAULT_RESET_VECTOR: u16 = 0xFFFC;
    pub const DEFAULT_IRQ_VECTOR: u16 = 0xFFFE;

    #[must_use]
    pub fn with_stack_page(mut self, page: u8) -> Self {
        self.stack_page = page;
        self
    }

    #[must_use]
    pub fn with_vector(mut self, vector: Vector, addr: u16) -> Self {
        self.set_vector(vector, addr);
        self
    }

    #[must_use]
    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Returns the address a vector is read from.
    pub fn vector(&self, vector: Vector) -> u16 {
        match vector {
            Vector::Nmi => self.nmi_vector,
            Vector::Reset => self.reset_vector,
            Vector::Irq => self.irq_vector,
        }
    }

    pub(crate) fn set_vector(&mut self, vector: Vector, addr: u16) {
        match vector {
            Vector::Nmi => self.nmi_vector = addr,
            Vector::Reset => self.reset_vector = addr,
            Vector::Irq => self.irq_vector = addr,
        }
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            stack_page: Self::DEFAULT_STACK_PAGE,
            nmi_vector: Self::DEFAULT_NMI_VECTOR,
            reset_vector: Self::DEFAULT_RESET_VECTOR,
            irq_vector: Self::DEFAULT_IRQ_VECTOR,
            decode_policy: DecodePolicy::Halt,
        }
    }
}
