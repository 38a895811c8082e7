//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! the fetch-decode-execute loop and the cycle-budgeted execution driver.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into the configured stack page
//! - **Status register** (P): packed N V - B D I Z C flags
//! - **Cycle counters**: total cycles, plus the excess carried between `run` calls
//! - **Interrupt controller**: the pending hardware request, if any
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Service one pending interrupt, or execute one instruction
//! - `run()`: Step until a cycle budget is met, carrying the overshoot forward

use std::io::Read;

use crate::config::{CpuConfig, DecodePolicy, Vector};
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::interrupts::{InterruptController, InterruptKind, InterruptState};
use crate::{
    disassembler, lookup, AddressingMode, ConfigError, ExecutionError, LoadError, MemoryBus, Mnemonic,
    OpcodeMetadata, Registers, Status, SystemMemory, ADDRESS_SPACE,
};

/// Where `load_program` places an image unless told otherwise.
pub const DEFAULT_LOAD_OFFSET: u16 = 0x0200;

/// Stack pointer value after reset.
const RESET_SP: u8 = 0xFD;

/// Cycles charged for an illegal opcode skipped under `DecodePolicy::Skip`.
const SKIPPED_OPCODE_CYCLES: u64 = 2;

/// Outcome of one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A documented instruction executed.
    Instruction { opcode: u8, cycles: u64 },

    /// An interrupt was serviced. BRK reports here too.
    Interrupt { kind: InterruptKind, cycles: u64 },

    /// An illegal opcode was stepped over under `DecodePolicy::Skip`.
    Skipped { opcode: u8, cycles: u64 },
}

impl Step {
    /// Cycles consumed by the step.
    pub fn cycles(&self) -> u64 {
        match *self {
            Step::Instruction { cycles, .. }
            | Step::Interrupt { cycles, .. }
            | Step::Skipped { cycles, .. } => cycles,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, cycle counters and the pending interrupt request. It is generic over the
/// memory implementation via the `MemoryBus` trait.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use system65::{MemoryBus, SystemMemory, CPU};
///
/// // Create memory and set reset vector
/// let mut memory = SystemMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer, offset within the stack page
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) p: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Cycles the last `run` overshot its budget by
    cycle_carry: u64,

    /// Illegal opcodes fetched so far
    decode_errors: u64,

    pub(crate) interrupts: InterruptController,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the default configuration.
    ///
    /// The CPU is initialized to the 6502 power-on reset state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has only Interrupt Disable (and the reserved bit) set
    /// - A, X, Y and the cycle counter are zeroed
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{MemoryBus, SystemMemory, CPU};
    ///
    /// let mut mem = SystemMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration.
    ///
    /// PC is read from `config.reset_vector`.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: RESET_SP,
            p: Status::new(),
            cycles: 0,
            cycle_carry: 0,
            decode_errors: 0,
            interrupts: InterruptController::default(),
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Performs a processor reset.
    ///
    /// Reloads PC from the reset vector, sets SP to 0xFD, sets Interrupt
    /// Disable and drops any pending interrupt. A, X, Y, the other flags and
    /// the cycle counters are left alone. Nothing is pushed.
    pub fn reset(&mut self) {
        self.pc = self.memory.read_word(self.config.reset_vector);
        self.sp = RESET_SP;
        self.p.set(Status::INTERRUPT_DISABLE, true);
        self.interrupts.clear();

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    // ========== Program Loading ==========

    /// Copies a program image into memory at `offset`, then resets.
    ///
    /// At most `65536 - offset` bytes are copied. If the image does not
    /// cover both bytes of the reset vector, PC is set to `offset` so the
    /// program runs from where it was placed. Returns the number of bytes
    /// copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{SystemMemory, CPU, DEFAULT_LOAD_OFFSET};
    ///
    /// let mut cpu = CPU::new(SystemMemory::new());
    /// let copied = cpu.load_program(&[0xA9, 0x05], DEFAULT_LOAD_OFFSET);
    ///
    /// assert_eq!(copied, 2);
    /// assert_eq!(cpu.pc(), 0x0200);
    /// ```
    pub fn load_program(&mut self, image: &[u8], offset: u16) -> usize {
        let copied = self.memory.load(offset, image);
        self.reset();

        let start = offset as usize;
        let end = start + copied;
        let vector = self.config.reset_vector as usize;
        let covers_vector = vector >= start && vector + 2 <= end;
        if !covers_vector {
            self.pc = offset;
        }

        log::debug!("loaded {copied} bytes at ${offset:04X}, PC=${:04X}", self.pc);
        copied
    }

    /// Reads a program image from `reader` and loads it like
    /// [`load_program`](Self::load_program).
    ///
    /// Reading stops once the space above `offset` is full.
    ///
    /// # Errors
    ///
    /// `LoadError::Io` if the reader fails. Memory is untouched in that case.
    pub fn load_program_from<R: Read>(&mut self, reader: R, offset: u16) -> Result<usize, LoadError> {
        let limit = (ADDRESS_SPACE - offset as usize) as u64;
        let mut image = Vec::new();
        reader.take(limit).read_to_end(&mut image)?;

        Ok(self.load_program(&image, offset))
    }

    // ========== Execution ==========

    /// Executes one dispatch step.
    ///
    /// Performs, in order:
    /// 1. Service a pending interrupt if it is serviceable (NMI always, IRQ only with I clear)
    /// 2. Otherwise fetch the opcode byte at PC
    /// 3. Look it up in the opcode table
    /// 4. Execute the handler, which advances PC and the cycle counter
    ///
    /// # Errors
    ///
    /// `ExecutionError::IllegalOpcode` when an undocumented byte is fetched
    /// under `DecodePolicy::Halt`. The processor state is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{MemoryBus, Step, SystemMemory, CPU};
    ///
    /// let mut mem = SystemMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(Step::Instruction { opcode: 0xEA, cycles: 2 }));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<Step, ExecutionError> {
        let start_cycles = self.cycles;

        let masked = self.p.contains(Status::INTERRUPT_DISABLE);
        if let Some(kind) = self.interrupts.take_serviceable(masked) {
            self.enter_interrupt(kind);
            return Ok(Step::Interrupt {
                kind,
                cycles: self.cycles - start_cycles,
            });
        }

        let opcode = self.memory.read(self.pc);
        let Some(metadata) = lookup(opcode) else {
            return self.decode_error(opcode);
        };

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{:04X}  {}", self.pc, disassembler::decode_at(&self.memory, self.pc));
        }

        self.execute(metadata)?;

        let cycles = self.cycles - start_cycles;
        Ok(match metadata.mnemonic {
            Mnemonic::Brk => Step::Interrupt {
                kind: InterruptKind::Brk,
                cycles,
            },
            _ => Step::Instruction { opcode, cycles },
        })
    }

    /// Runs until at least `cycle_budget` cycles have been consumed.
    ///
    /// The last instruction may overshoot the budget. The overshoot is
    /// carried into the next call and deducted from its budget, so the
    /// average rate converges on the requested one. If the carry already
    /// covers the whole budget, nothing executes.
    ///
    /// Returns the number of cycles executed by this call.
    ///
    /// # Errors
    ///
    /// Propagates the first error from `step`. The carry is cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{MemoryBus, SystemMemory, CPU};
    ///
    /// let mut mem = SystemMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0x4C); // JMP $8000
    /// mem.write_word(0x8001, 0x8000);
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// // 3-cycle loop: 4 cycles requested, 6 executed, 2 carried
    /// assert_eq!(cpu.run(4), Ok(6));
    /// // Next call only needs 2 more to cover 4
    /// assert_eq!(cpu.run(4), Ok(3));
    /// ```
    pub fn run(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        if self.cycle_carry >= cycle_budget {
            self.cycle_carry -= cycle_budget;
            return Ok(0);
        }

        let target = cycle_budget - self.cycle_carry;
        let mut consumed = 0;

        while consumed < target {
            match self.step() {
                Ok(step) => consumed += step.cycles(),
                Err(err) => {
                    self.cycle_carry = 0;
                    return Err(err);
                }
            }
        }

        self.cycle_carry = consumed - target;
        Ok(consumed)
    }

    /// Clears the total cycle count and the carried budget excess.
    pub fn reset_cycle_count(&mut self) {
        self.cycles = 0;
        self.cycle_carry = 0;
    }

    fn decode_error(&mut self, opcode: u8) -> Result<Step, ExecutionError> {
        self.decode_errors += 1;
        let address = self.pc;

        match self.config.decode_policy {
            DecodePolicy::Halt => {
                log::error!("illegal opcode 0x{opcode:02X} at ${address:04X}");
                Err(ExecutionError::IllegalOpcode { opcode, address })
            }
            DecodePolicy::Skip => {
                log::warn!("skipping illegal opcode 0x{opcode:02X} at ${address:04X}");
                self.pc = self.pc.wrapping_add(1);
                self.cycles += SKIPPED_OPCODE_CYCLES;
                Ok(Step::Skipped {
                    opcode,
                    cycles: SKIPPED_OPCODE_CYCLES,
                })
            }
        }
    }

    fn execute(&mut self, op: &OpcodeMetadata) -> Result<(), ExecutionError> {
        let p = self.p;

        match op.mnemonic {
            Mnemonic::Adc => alu::execute_adc(self, op),
            Mnemonic::Sbc => alu::execute_sbc(self, op),
            Mnemonic::And => alu::execute_and(self, op),
            Mnemonic::Ora => alu::execute_ora(self, op),
            Mnemonic::Eor => alu::execute_eor(self, op),
            Mnemonic::Cmp => alu::execute_cmp(self, op),
            Mnemonic::Cpx => alu::execute_cpx(self, op),
            Mnemonic::Cpy => alu::execute_cpy(self, op),
            Mnemonic::Bit => alu::execute_bit(self, op),

            Mnemonic::Bcc => branches::execute_branch(self, op, !p.contains(Status::CARRY)),
            Mnemonic::Bcs => branches::execute_branch(self, op, p.contains(Status::CARRY)),
            Mnemonic::Bne => branches::execute_branch(self, op, !p.contains(Status::ZERO)),
            Mnemonic::Beq => branches::execute_branch(self, op, p.contains(Status::ZERO)),
            Mnemonic::Bpl => branches::execute_branch(self, op, !p.contains(Status::NEGATIVE)),
            Mnemonic::Bmi => branches::execute_branch(self, op, p.contains(Status::NEGATIVE)),
            Mnemonic::Bvc => branches::execute_branch(self, op, !p.contains(Status::OVERFLOW)),
            Mnemonic::Bvs => branches::execute_branch(self, op, p.contains(Status::OVERFLOW)),

            Mnemonic::Jmp => control::execute_jmp(self, op),
            Mnemonic::Jsr => control::execute_jsr(self, op),
            Mnemonic::Rts => control::execute_rts(self, op),
            Mnemonic::Rti => control::execute_rti(self, op),
            Mnemonic::Brk => control::execute_brk(self, op),
            Mnemonic::Nop => control::execute_nop(self, op),

            Mnemonic::Clc => flags::execute_flag(self, op, Status::CARRY, false),
            Mnemonic::Sec => flags::execute_flag(self, op, Status::CARRY, true),
            Mnemonic::Cli => flags::execute_flag(self, op, Status::INTERRUPT_DISABLE, false),
            Mnemonic::Sei => flags::execute_flag(self, op, Status::INTERRUPT_DISABLE, true),
            Mnemonic::Cld => flags::execute_flag(self, op, Status::DECIMAL, false),
            Mnemonic::Sed => flags::execute_flag(self, op, Status::DECIMAL, true),
            Mnemonic::Clv => flags::execute_flag(self, op, Status::OVERFLOW, false),

            Mnemonic::Inc => inc_dec::execute_inc(self, op),
            Mnemonic::Dec => inc_dec::execute_dec(self, op),
            Mnemonic::Inx => inc_dec::execute_inx(self, op),
            Mnemonic::Iny => inc_dec::execute_iny(self, op),
            Mnemonic::Dex => inc_dec::execute_dex(self, op),
            Mnemonic::Dey => inc_dec::execute_dey(self, op),

            Mnemonic::Lda => load_store::execute_lda(self, op),
            Mnemonic::Ldx => load_store::execute_ldx(self, op),
            Mnemonic::Ldy => load_store::execute_ldy(self, op),
            Mnemonic::Sta => load_store::execute_sta(self, op),
            Mnemonic::Stx => load_store::execute_stx(self, op),
            Mnemonic::Sty => load_store::execute_sty(self, op),

            Mnemonic::Asl => shifts::execute_asl(self, op),
            Mnemonic::Lsr => shifts::execute_lsr(self, op),
            Mnemonic::Rol => shifts::execute_rol(self, op),
            Mnemonic::Ror => shifts::execute_ror(self, op),

            Mnemonic::Pha => stack::execute_pha(self, op),
            Mnemonic::Php => stack::execute_php(self, op),
            Mnemonic::Pla => stack::execute_pla(self, op),
            Mnemonic::Plp => stack::execute_plp(self, op),

            Mnemonic::Tax => transfer::execute_tax(self, op),
            Mnemonic::Tay => transfer::execute_tay(self, op),
            Mnemonic::Txa => transfer::execute_txa(self, op),
            Mnemonic::Tya => transfer::execute_tya(self, op),
            Mnemonic::Tsx => transfer::execute_tsx(self, op),
            Mnemonic::Txs => transfer::execute_txs(self, op),
        }
    }

    // ========== Handler Helpers ==========

    /// Reads the operand byte of `op`: the accumulator, or the byte at the
    /// effective address.
    pub(crate) fn read_operand(&self, op: &OpcodeMetadata) -> Result<u8, ExecutionError> {
        match op.addressing_mode {
            AddressingMode::Accumulator => Ok(self.a),
            mode => Ok(self.memory.read(self.effective_address(mode)?)),
        }
    }

    /// Advances PC past `op` and charges its base cycles.
    pub(crate) fn finish(&mut self, op: &OpcodeMetadata) {
        self.pc = self.pc.wrapping_add(op.size_bytes as u16);
        self.cycles += op.base_cycles as u64;
    }

    pub(crate) fn set_zn(&mut self, value: u8) {
        self.p.set_zn(value);
    }

    // ========== Stack ==========

    fn stack_address(&self) -> u16 {
        u16::from_be_bytes([self.config.stack_page, self.sp])
    }

    /// Pushes a byte: write at the stack pointer, then decrement it.
    pub fn push8(&mut self, value: u8) {
        self.memory.write(self.stack_address(), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte: increment the stack pointer, then read.
    pub fn pop8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(self.stack_address())
    }

    /// Pushes a word, high byte first, so it sits little-endian in memory.
    pub fn push16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push8(hi);
        self.push8(lo);
    }

    /// Pops a word pushed by [`push16`](Self::push16).
    pub fn pop16(&mut self) -> u16 {
        let lo = self.pop8();
        let hi = self.pop8();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Memory Inspection ==========

    /// Reads a byte from the bus without executing anything.
    pub fn peek8(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Reads a little-endian word from the bus without executing anything.
    pub fn peek16(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    pub fn poke8(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub fn poke16(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value);
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Configuration and Interrupts ==========

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Moves the stack to page `page` (`$pp00-$ppFF`).
    pub fn set_stack_page(&mut self, page: u8) {
        self.config.stack_page = page;
    }

    /// Changes the address a vector is read from.
    pub fn set_vector_address(&mut self, vector: Vector, addr: u16) {
        self.config.set_vector(vector, addr);
    }

    /// Installs `handler` as the IRQ/BRK handler by writing it into the
    /// IRQ vector location.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{SystemMemory, CPU};
    ///
    /// let mut cpu = CPU::new(SystemMemory::new());
    /// cpu.set_interrupt_vector(0x9000);
    /// assert_eq!(cpu.peek16(0xFFFE), 0x9000);
    /// ```
    pub fn set_interrupt_vector(&mut self, handler: u16) {
        self.memory.write_word(self.config.irq_vector, handler);
    }

    /// Requests a hardware interrupt. It is serviced at the start of a later
    /// step: NMI unconditionally, IRQ once Interrupt Disable is clear.
    pub fn raise_interrupt(&mut self, nmi: bool) {
        let kind = if nmi {
            InterruptKind::Nmi
        } else {
            InterruptKind::Irq
        };
        self.interrupts.raise(kind);
    }

    pub fn interrupt_state(&self) -> InterruptState {
        self.interrupts.state()
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is `(stack_page << 8) | SP`. The stack grows
    /// downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit 5 always reads 1 and the Break bit always reads 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{SystemMemory, CPU};
    ///
    /// let cpu = CPU::new(SystemMemory::new());
    ///
    /// // I flag set (bit 2), bit 5 always 1
    /// assert_eq!(cpu.status(), 0b0010_0100);
    /// ```
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns a copy of every register.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            p: self.p,
            s: self.sp,
            pc: self.pc,
        }
    }

    /// Returns the total number of CPU cycles executed.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns how many illegal opcodes have been fetched.
    pub fn decode_errors(&self) -> u64 {
        self.decode_errors
    }

    // ========== Status Flag Getters ==========

    pub fn flag_n(&self) -> bool {
        self.p.contains(Status::NEGATIVE)
    }

    pub fn flag_v(&self) -> bool {
        self.p.contains(Status::OVERFLOW)
    }

    pub fn flag_d(&self) -> bool {
        self.p.contains(Status::DECIMAL)
    }

    pub fn flag_i(&self) -> bool {
        self.p.contains(Status::INTERRUPT_DISABLE)
    }

    pub fn flag_z(&self) -> bool {
        self.p.contains(Status::ZERO)
    }

    pub fn flag_c(&self) -> bool {
        self.p.contains(Status::CARRY)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the status register. The Break bit is dropped and bit 5 forced on.
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_byte(value);
    }

    pub fn set_flag_n(&mut self, on: bool) {
        self.p.set(Status::NEGATIVE, on);
    }

    pub fn set_flag_v(&mut self, on: bool) {
        self.p.set(Status::OVERFLOW, on);
    }

    pub fn set_flag_d(&mut self, on: bool) {
        self.p.set(Status::DECIMAL, on);
    }

    pub fn set_flag_i(&mut self, on: bool) {
        self.p.set(Status::INTERRUPT_DISABLE, on);
    }

    pub fn set_flag_z(&mut self, on: bool) {
        self.p.set(Status::ZERO, on);
    }

    pub fn set_flag_c(&mut self, on: bool) {
        self.p.set(Status::CARRY, on);
    }
}

impl CPU<SystemMemory> {
    /// Builds a System65 with `size` bytes of installed memory.
    ///
    /// # Errors
    ///
    /// `ConfigError::ZeroMemorySize` if `size` is 0. Larger-than-64KB sizes are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use system65::{ConfigError, CpuConfig, System65};
    ///
    /// let cpu = System65::with_memory_size(0x8000, CpuConfig::default()).unwrap();
    /// assert_eq!(cpu.memory().active_size(), 0x8000);
    ///
    /// assert!(matches!(
    ///     System65::with_memory_size(0, CpuConfig::default()),
    ///     Err(ConfigError::ZeroMemorySize)
    /// ));
    /// ```
    pub fn with_memory_size(size: usize, config: CpuConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_config(SystemMemory::with_size(size)?, config))
    }
}
