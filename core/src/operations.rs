//! One function per instruction. The program counter has already been moved
//! past the instruction when these run, so skips add 2 and calls push it as is.

use rand::{Rng, RngCore};

use crate::constants::{FLAG, GLYPH_SIZE};
use crate::display::Display;
use crate::error::Fault;
use crate::input::Input;
use crate::state::State;

/// clear
pub fn clr(display: &mut dyn Display) {
    display.clear();
}

/// PC = STACK.pop()
pub fn rts(state: &mut State, pc: u16) -> Result<(), Fault> {
    let addr = state.pop(pc)?;
    state.set_pc(addr);
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.set_pc(addr);
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16, pc: u16) -> Result<(), Fault> {
    state.push(state.pc, pc)?;
    state.set_pc(addr);
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    if state.vx(x) == kk {
        state.skip();
    }
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    if state.vx(x) != kk {
        state.skip();
    }
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    if state.vx(x) == state.vx(y) {
        state.skip();
    }
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    if state.vx(x) != state.vx(y) {
        state.skip();
    }
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.set_vx(x, kk);
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.set_vx(x, state.vx(x).wrapping_add(kk));
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.set_vx(x, state.vx(y));
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.set_vx(x, state.vx(x) | state.vx(y));
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.set_vx(x, state.vx(x) & state.vx(y));
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.set_vx(x, state.vx(x) ^ state.vx(y));
}

/// Writes an arithmetic result and then its flag, so VF ends up holding the
/// flag even when it was also the destination.
fn set_with_flag(state: &mut State, x: u8, result: u8, flag: bool) {
    state.set_vx(x, result);
    state.v[FLAG] = u8::from(flag);
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.vx(x).overflowing_add(state.vx(y));
    set_with_flag(state, x, res, over);
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.vx(x).overflowing_sub(state.vx(y));
    set_with_flag(state, x, res, !under);
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(state: &mut State, x: u8) {
    let value = state.vx(x);
    set_with_flag(state, x, value >> 1, value & 0x1 == 1);
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.vx(y).overflowing_sub(state.vx(x));
    set_with_flag(state, x, res, !under);
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(state: &mut State, x: u8) {
    let value = state.vx(x);
    set_with_flag(state, x, value << 1, value & 0x80 != 0);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.set_i(addr);
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.set_pc(addr + u16::from(state.v[0x0]));
}

/// Vx = rand_byte & kk
pub fn rnd(state: &mut State, rng: &mut dyn RngCore, x: u8, kk: u8) {
    let rand_byte: u8 = rng.gen();
    state.set_vx(x, rand_byte & kk);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite in memory I..I+n at position Vx, Vy with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, display: &mut dyn Display, x: u8, y: u8, n: u8) {
    let sprite = state.memory.read_wrapping(state.i, usize::from(n));
    let erased = display.draw(state.vx(x), state.vx(y), &sprite);
    state.v[FLAG] = u8::from(erased);
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, input: &dyn Input, x: u8) {
    if input.is_down(state.vx(x) & 0xF) {
        state.skip();
    }
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, input: &dyn Input, x: u8) {
    if !input.is_down(state.vx(x) & 0xF) {
        state.skip();
    }
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.set_vx(x, state.delay_timer);
}

/// await keypress for Vx
/// Presses from before this instruction don't count.
pub fn keyd(state: &mut State, input: &mut dyn Input, x: u8) {
    input.consume_pressed();
    state.register_needing_key = Some(x);
}

/// Resolves a pending `keyd` if a key went down since the last check.
/// Vx = the lowest key that is still held
pub fn resolve_key(state: &mut State, input: &mut dyn Input) {
    let Some(x) = state.register_needing_key else {
        return;
    };
    let Some(key) = (0x0..=0xF).find(|&key| input.is_down(key)) else {
        return;
    };
    if input.consume_pressed() {
        state.set_vx(x, key);
        state.register_needing_key = None;
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.delay_timer = state.vx(x);
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.sound_timer = state.vx(x);
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.set_i(state.i + u16::from(state.vx(x)));
}

/// I = Vx * 5
/// Set I to the memory address of the font glyph for Vx
pub fn ldspr(state: &mut State, x: u8) {
    state.set_i(u16::from(state.vx(x)) * GLYPH_SIZE);
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) {
    let value = state.vx(x);
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in (0u16..).zip(digits) {
        let addr = state.i.wrapping_add(offset);
        state.memory.write(addr, digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
/// Fill memory starting at address i with V0..=Vx
pub fn stor(state: &mut State, x: u8) {
    for register in 0..=x {
        let addr = state.i.wrapping_add(u16::from(register));
        let value = state.vx(register);
        state.memory.write(addr, value);
    }
}

/// V0..=Vx = mem[I..=I+x]
/// Fill V0..=Vx with memory starting at address i
pub fn read(state: &mut State, x: u8) {
    for register in 0..=x {
        let addr = state.i.wrapping_add(u16::from(register));
        let value = state.memory.read(addr);
        state.set_vx(register, value);
    }
}
