//! # Shared CPU Handle
//!
//! `SharedCpu` puts a whole CPU, memory included, behind one mutex so an
//! execution thread and an inspection thread (a debugger view, a renderer
//! polling memory) can share it. Every method takes the lock for exactly one
//! call: a step is never observed half-done and a register snapshot is never
//! torn.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{ExecutionError, MemoryBus, Registers, Step, CPU};

/// Clonable, thread-safe handle to a [`CPU`].
///
/// # Examples
///
/// ```
/// use std::thread;
/// use system65::{SharedCpu, SystemMemory, CPU};
///
/// let mut cpu = CPU::new(SystemMemory::new());
/// cpu.load_program(&[0xE8, 0x4C, 0x00, 0x02], 0x0200); // INX; JMP $0200
///
/// let shared = SharedCpu::new(cpu);
/// let runner = shared.clone();
///
/// thread::spawn(move || runner.run(500).unwrap()).join().unwrap();
///
/// assert!(shared.registers().x > 0);
/// ```
pub struct SharedCpu<M: MemoryBus> {
    inner: Arc<Mutex<CPU<M>>>,
}

impl<M: MemoryBus> Clone for SharedCpu<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: MemoryBus> SharedCpu<M> {
    pub fn new(cpu: CPU<M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cpu)),
        }
    }

    /// Takes the lock, recovering the CPU from a poisoned mutex.
    fn lock(&self) -> MutexGuard<'_, CPU<M>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn step(&self) -> Result<Step, ExecutionError> {
        self.lock().step()
    }

    /// Runs a whole cycle budget under one lock.
    pub fn run(&self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        self.lock().run(cycle_budget)
    }

    pub fn raise_interrupt(&self, nmi: bool) {
        self.lock().raise_interrupt(nmi);
    }

    pub fn registers(&self) -> Registers {
        self.lock().registers()
    }

    pub fn peek8(&self, addr: u16) -> u8 {
        self.lock().peek8(addr)
    }

    pub fn peek16(&self, addr: u16) -> u16 {
        self.lock().peek16(addr)
    }

    /// Runs `f` with shared access under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&CPU<M>) -> R) -> R {
        f(&self.lock())
    }

    /// Runs `f` with exclusive access under the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut CPU<M>) -> R) -> R {
        f(&mut self.lock())
    }
}
