//! # Interrupt Controller
//!
//! Tracks pending hardware interrupt requests and performs the push-and-vector
//! service sequence shared by IRQ, NMI and BRK.
//!
//! ## Pending Requests
//!
//! There is one pending slot plus an NMI latch:
//!
//! - An NMI replaces a pending IRQ; the IRQ is dropped.
//! - A second IRQ while one is pending changes nothing.
//! - An IRQ raised while an NMI is pending is dropped.
//! - A second NMI while one is pending is latched and serviced on the step
//!   after the first. Further NMIs while latched are dropped.
//! - A masked IRQ stays pending until the Interrupt Disable flag clears.
//!
//! BRK never uses the slot. It is serviced inside the step that decodes it.
//!
//! A request goes from `Idle` to `Requested` and back to `Idle`. There is no
//! separate servicing state: the whole service sequence runs inside one step.
//!
//! ## Service Sequence
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push status, with the Break marker set only for BRK
//! 3. Set the Interrupt Disable flag
//! 4. Load PC from the kind's vector
//!
//! **Total: 7 cycles**

use crate::{MemoryBus, Status, CPU};

/// Cycles charged for servicing any interrupt, BRK included.
pub const INTERRUPT_CYCLES: u64 = 7;

/// Source of an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    /// Maskable hardware request.
    Irq,
    /// Non-maskable hardware request.
    Nmi,
    /// Software interrupt from the BRK instruction.
    Brk,
}

/// Observable state of the pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptState {
    #[default]
    Idle,
    Requested(InterruptKind),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct InterruptController {
    pending: Option<InterruptKind>,
    nmi_latched: bool,
}

impl InterruptController {
    /// Records a hardware request according to the collision policy.
    pub(crate) fn raise(&mut self, kind: InterruptKind) {
        match (self.pending, kind) {
            (None, _) => self.pending = Some(kind),
            (Some(InterruptKind::Irq), InterruptKind::Nmi) => {
                log::debug!("NMI replaces pending IRQ");
                self.pending = Some(InterruptKind::Nmi);
            }
            (Some(InterruptKind::Nmi), InterruptKind::Nmi) => {
                if self.nmi_latched {
                    log::debug!("NMI dropped: one already latched");
                } else {
                    log::debug!("NMI latched behind pending NMI");
                    self.nmi_latched = true;
                }
            }
            (Some(InterruptKind::Nmi), _) => {
                log::debug!("{kind:?} dropped: NMI pending");
            }
            (Some(_), _) => {}
        }
    }

    /// Removes and returns the pending request if it can be serviced now.
    ///
    /// An IRQ is left in place while `interrupt_disable` is set.
    pub(crate) fn take_serviceable(&mut self, interrupt_disable: bool) -> Option<InterruptKind> {
        let kind = self.pending?;
        if kind == InterruptKind::Irq && interrupt_disable {
            return None;
        }

        self.pending = if kind == InterruptKind::Nmi && self.nmi_latched {
            self.nmi_latched = false;
            Some(InterruptKind::Nmi)
        } else {
            None
        };

        Some(kind)
    }

    pub(crate) fn clear(&mut self) {
        self.pending = None;
        self.nmi_latched = false;
    }

    pub(crate) fn state(&self) -> InterruptState {
        match self.pending {
            Some(kind) => InterruptState::Requested(kind),
            None => InterruptState::Idle,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the service sequence for `kind` and charges its cycles.
    ///
    /// For BRK, PC still points at the BRK opcode; the pushed return address
    /// is PC + 2, skipping the padding byte.
    pub(crate) fn enter_interrupt(&mut self, kind: InterruptKind) {
        let return_address = match kind {
            InterruptKind::Brk => self.pc.wrapping_add(2),
            InterruptKind::Irq | InterruptKind::Nmi => self.pc,
        };

        self.push16(return_address);
        self.push8(self.p.to_pushed(kind == InterruptKind::Brk));
        self.p.set(Status::INTERRUPT_DISABLE, true);

        let vector = match kind {
            InterruptKind::Nmi => self.config.nmi_vector,
            InterruptKind::Irq | InterruptKind::Brk => self.config.irq_vector,
        };
        self.pc = self.memory.read_word(vector);
        self.cycles += INTERRUPT_CYCLES;

        log::debug!(
            "{kind:?} serviced: return ${return_address:04X}, vector ${vector:04X} -> ${:04X}",
            self.pc
        );
    }
}
