use std::io::Read;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::Config;
use crate::constants::MAX_PROGRAM_SIZE;
use crate::display::{Display, FrameBuffer};
use crate::error::{Fault, LoadError};
use crate::input::{Input, Keypad};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns:
///  - the machine `state`
///  - the `display` it draws on and the `input` it reads keys from
///  - the random source used by `Cxkk`
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU (and with it, the timers)
/// - reaching the display and input between steps
pub struct Chip8<D = FrameBuffer, I = Keypad, R = StdRng> {
    state: State,
    display: D,
    input: I,
    rng: R,
    config: Config,
    unknown_opcodes: u64,
}

impl<D: Display, I: Input, R: RngCore> Chip8<D, I, R> {
    pub fn new(display: D, input: I, rng: R, config: Config) -> Self {
        Chip8 {
            state: State::new(),
            display,
            input,
            rng,
            config,
            unknown_opcodes: 0,
        }
    }

    /// Resets the machine and loads a rom
    ///
    /// The reset happens whether or not the rom fits, so a failed load leaves
    /// an empty machine rather than a half-loaded one.
    ///
    /// # Arguments
    /// * `rom` raw big-endian opcodes, placed at 0x200
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.reset();
        self.state.memory.load_program(rom)?;
        info!("loaded {} byte rom", rom.len());
        Ok(())
    }

    /// Resets the machine and loads a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut rom = Vec::new();
        // one byte over the limit is enough to know it doesn't fit
        let limit = MAX_PROGRAM_SIZE as u64 + 1;
        if let Err(e) = reader.take(limit).read_to_end(&mut rom) {
            self.reset();
            return Err(e.into());
        }
        self.load_rom(&rom)
    }

    fn reset(&mut self) {
        self.state.reset();
        self.display.clear();
        self.display.set_render_due(true);
        self.unknown_opcodes = 0;
    }

    /// Advances the CPU by a single cycle
    /// - if awaiting a keypress, checks for one instead of fetching
    /// - otherwise gets and executes the next opcode
    /// - advances the timers
    ///
    /// A fault leaves the program counter on the faulting opcode and does not
    /// advance the timers.
    pub fn step(&mut self) -> Result<(), Fault> {
        if self.state.register_needing_key.is_some() {
            resolve_key(&mut self.state, &mut self.input);
        } else {
            let pc = self.state.pc;
            let op = self.state.memory.fetch(pc);
            trace!(
                "{} v{:02X?} i{:03X} pc{:03X}",
                op,
                self.state.v,
                self.state.i,
                pc
            );
            self.state.set_pc(pc.wrapping_add(2));
            if let Err(fault) = self.execute(op, pc) {
                self.state.pc = pc;
                return Err(fault);
            }
        }
        self.advance_timers();
        Ok(())
    }

    /// Applies the effect of `op`, which was fetched from `pc`.
    fn execute(&mut self, op: Opcode, pc: u16) -> Result<(), Fault> {
        let Some(instruction) = Instruction::decode(op) else {
            self.unknown_opcodes += 1;
            debug!("ignoring unknown opcode {op} at {pc:03X}");
            return Ok(());
        };

        let state = &mut self.state;
        match instruction {
            Instruction::Clear => clr(&mut self.display),
            Instruction::Return => rts(state, pc)?,
            Instruction::Jump(addr) => jump(state, addr),
            Instruction::Call(addr) => call(state, addr, pc)?,
            Instruction::SkipEqualImmediate { x, kk } => ske(state, x, kk),
            Instruction::SkipNotEqualImmediate { x, kk } => skne(state, x, kk),
            Instruction::SkipEqualRegisters { x, y } => skre(state, x, y),
            Instruction::SetImmediate { x, kk } => load(state, x, kk),
            Instruction::AddImmediate { x, kk } => add(state, x, kk),
            Instruction::Assign { x, y } => mv(state, x, y),
            Instruction::Or { x, y } => or(state, x, y),
            Instruction::And { x, y } => and(state, x, y),
            Instruction::Xor { x, y } => xor(state, x, y),
            Instruction::AddRegisters { x, y } => addr(state, x, y),
            Instruction::Subtract { x, y } => sub(state, x, y),
            Instruction::ShiftRight { x } => shr(state, x),
            Instruction::ReverseSubtract { x, y } => subn(state, x, y),
            Instruction::ShiftLeft { x } => shl(state, x),
            Instruction::SkipNotEqualRegisters { x, y } => skrne(state, x, y),
            Instruction::SetAddress(addr) => loadi(state, addr),
            Instruction::JumpOffset(addr) => jumpi(state, addr),
            Instruction::Random { x, kk } => rnd(state, &mut self.rng, x, kk),
            Instruction::Draw { x, y, n } => draw(state, &mut self.display, x, y, n),
            Instruction::SkipKeyDown { x } => skpr(state, &self.input, x),
            Instruction::SkipKeyUp { x } => skup(state, &self.input, x),
            Instruction::ReadDelay { x } => moved(state, x),
            Instruction::WaitKey { x } => keyd(state, &mut self.input, x),
            Instruction::SetDelay { x } => loads(state, x),
            Instruction::SetSound { x } => ld(state, x),
            Instruction::AddAddress { x } => addi(state, x),
            Instruction::FontGlyph { x } => ldspr(state, x),
            Instruction::Bcd { x } => bcd(state, x),
            Instruction::StoreRegisters { x } => stor(state, x),
            Instruction::LoadRegisters { x } => read(state, x),
        }
        Ok(())
    }

    /// Handles the tick counter and timers
    /// - increments the tick counter
    /// - once it reaches `ticks_per_timer`, decrements both timers towards 0,
    ///   marks a frame as due and starts counting again
    fn advance_timers(&mut self) {
        self.state.tick += 1;
        if self.state.tick < self.config.ticks_per_timer() {
            return;
        }
        self.state.tick = 0;
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
        self.display.set_render_due(true);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the tone should be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// The register waiting for a key, if the CPU is halted on `Fx0A`
    pub fn awaiting_key(&self) -> Option<u8> {
        self.state.register_needing_key
    }

    /// Opcodes skipped since the last load because they decode to nothing
    pub fn unknown_opcodes(&self) -> u64 {
        self.unknown_opcodes
    }
}

impl Chip8 {
    /// A machine with an in-memory display and keypad and an entropy-seeded
    /// random source.
    pub fn with_config(config: Config) -> Self {
        Chip8::new(
            FrameBuffer::new(),
            Keypad::new(),
            StdRng::from_entropy(),
            config,
        )
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}
