use crate::constants::{ADDRESS_MASK, PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};
use crate::error::Fault;
use crate::memory::Memory;

/// The Chip-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register (carry, borrow, collision, shifted-out bit)
/// - (i) a 12-bit memory address register
///
/// Counter
/// - (pc) a 12-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - The tone is active while the sound timer is above 0
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 0xFFF bytes of addressable memory
///
/// ## Input
/// - Emulation halts until a key's value is written to `register_needing_key`
///
/// ## Timing
/// - `tick` counts CPU cycles since the timers were last decremented
#[derive(Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: Memory,
    pub register_needing_key: Option<u8>,
    pub tick: u32,
}

impl State {
    pub fn new() -> Self {
        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory: Memory::new(),
            register_needing_key: None,
            tick: 0,
        }
    }

    /// Returns everything to its power-on value, leaving only the font in memory.
    pub fn reset(&mut self) {
        self.v = [0; REGISTER_COUNT];
        self.i = 0;
        self.pc = PROGRAM_START;
        self.sp = 0;
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.stack = [0; STACK_DEPTH];
        self.memory.reset();
        self.register_needing_key = None;
        self.tick = 0;
    }

    pub fn vx(&self, x: u8) -> u8 {
        self.v[usize::from(x & 0xF)]
    }

    pub fn set_vx(&mut self, x: u8, value: u8) {
        self.v[usize::from(x & 0xF)] = value;
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.pc = addr & ADDRESS_MASK;
    }

    pub fn set_i(&mut self, addr: u16) {
        self.i = addr & ADDRESS_MASK;
    }

    /// Steps over the next instruction.
    pub fn skip(&mut self) {
        self.set_pc(self.pc.wrapping_add(2));
    }

    /// Pushes a return address; `pc` is the address of the call itself.
    pub fn push(&mut self, return_addr: u16, pc: u16) -> Result<(), Fault> {
        if self.sp == STACK_DEPTH {
            return Err(Fault::StackOverflow { pc });
        }
        self.stack[self.sp] = return_addr;
        self.sp += 1;
        Ok(())
    }

    /// Pops a return address; `pc` is the address of the return itself.
    pub fn pop(&mut self, pc: u16) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    /// The return addresses currently on the stack, oldest first.
    pub fn call_stack(&self) -> &[u16] {
        &self.stack[..self.sp]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
