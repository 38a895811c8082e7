//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory it runs against, and `SystemMemory`, the System65 address space.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unpopulated reads return 0, writes to them are dropped
//! - Multi-byte values are little-endian with no page-boundary special-casing

use crate::ConfigError;

/// Size of the full 16-bit address space.
pub const ADDRESS_SPACE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// Only `read` and `write` are required. The word helpers and `load` have
/// default implementations built on top of them.
///
/// # Examples
///
/// ```
/// use system65::{MemoryBus, SystemMemory};
///
/// let mut mem = SystemMemory::new();
/// mem.write_word(0x1234, 0xBEEF);
///
/// assert_eq!(mem.read(0x1234), 0xEF);
/// assert_eq!(mem.read(0x1235), 0xBE);
/// assert_eq!(mem.read_word(0x1234), 0xBEEF);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use system65::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses return whatever the
    /// implementation chooses (`SystemMemory` returns 0).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Writes to read-only or unmapped addresses may be
    /// ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: `addr` is the low byte, `addr + 1` the high
    /// byte. `0xFFFF` wraps to `0x0000` for the high byte.
    fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    /// Writes a little-endian word (low byte at `addr`).
    fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Copies a program image into memory starting at `offset`.
    ///
    /// At most `65536 - offset` bytes are copied; the rest of the image is
    /// ignored. Returns the number of bytes copied.
    fn load(&mut self, offset: u16, image: &[u8]) -> usize {
        let len = image.len().min(ADDRESS_SPACE - offset as usize);
        for (i, &byte) in image[..len].iter().enumerate() {
            self.write(offset.wrapping_add(i as u16), byte);
        }
        len
    }
}

/// The System65 address space: 64KB of backing store with an installed size.
///
/// The array always spans the full 16-bit address space, but only addresses
/// below the *active size* behave as RAM. Reads above it return 0 and writes
/// are dropped, which models partially populated memory without changing the
/// address width.
///
/// # Examples
///
/// ```
/// use system65::{MemoryBus, SystemMemory};
///
/// let mut mem = SystemMemory::with_size(0x1000).unwrap();
///
/// mem.write(0x0FFF, 0x42);
/// assert_eq!(mem.read(0x0FFF), 0x42);
///
/// // Beyond the installed 4KB: writes dropped, reads return 0
/// mem.write(0x1000, 0x42);
/// assert_eq!(mem.read(0x1000), 0x00);
/// ```
pub struct SystemMemory {
    data: Box<[u8; ADDRESS_SPACE]>,
    active_size: usize,
}

impl SystemMemory {
    /// Creates a fully populated 64KB memory, zero-initialized.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
            active_size: ADDRESS_SPACE,
        }
    }

    /// Creates a memory with `size` bytes installed.
    ///
    /// Sizes above 65,536 are clamped. A size of zero is a configuration
    /// error.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroMemorySize);
        }

        let active_size = if size > ADDRESS_SPACE {
            log::warn!(
                "installed memory size {size:#X} exceeds the address space; clamping to {ADDRESS_SPACE:#X}"
            );
            ADDRESS_SPACE
        } else {
            size
        };

        Ok(Self {
            data: Box::new([0; ADDRESS_SPACE]),
            active_size,
        })
    }

    /// Returns the installed memory size in bytes.
    pub fn active_size(&self) -> usize {
        self.active_size
    }

    /// Returns true if `addr` falls inside the installed memory.
    pub fn in_range(&self, addr: u16) -> bool {
        (addr as usize) < self.active_size
    }
}

impl Default for SystemMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for SystemMemory {
    fn read(&self, addr: u16) -> u8 {
        if self.in_range(addr) {
            self.data[addr as usize]
        } else {
            0
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if self.in_range(addr) {
            self.data[addr as usize] = value;
        }
    }

    /// Images are copied straight into the backing array, like a DMA
    /// transfer, so they are not subject to the installed size.
    fn load(&mut self, offset: u16, image: &[u8]) -> usize {
        let start = offset as usize;
        let len = image.len().min(ADDRESS_SPACE - start);
        self.data[start..start + len].copy_from_slice(&image[..len]);
        len
    }
}
