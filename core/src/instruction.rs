use crate::opcode::Opcode;

/// A decoded Chip-8 instruction.
///
/// `x` and `y` name registers (0x0..=0xF), `kk` is an immediate byte, `n` a
/// sprite height and the bare `u16` payloads are 12-bit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` clear the display
    Clear,
    /// `00EE` PC = STACK.pop()
    Return,
    /// `1nnn` PC = nnn
    Jump(u16),
    /// `2nnn` STACK.push(PC); PC = nnn
    Call(u16),
    /// `3xkk` if Vx == kk then skip
    SkipEqualImmediate { x: u8, kk: u8 },
    /// `4xkk` if Vx != kk then skip
    SkipNotEqualImmediate { x: u8, kk: u8 },
    /// `5xy0` if Vx == Vy then skip
    SkipEqualRegisters { x: u8, y: u8 },
    /// `6xkk` Vx = kk
    SetImmediate { x: u8, kk: u8 },
    /// `7xkk` Vx += kk
    AddImmediate { x: u8, kk: u8 },
    /// `8xy0` Vx = Vy
    Assign { x: u8, y: u8 },
    /// `8xy1` Vx |= Vy
    Or { x: u8, y: u8 },
    /// `8xy2` Vx &= Vy
    And { x: u8, y: u8 },
    /// `8xy3` Vx ^= Vy
    Xor { x: u8, y: u8 },
    /// `8xy4` Vx += Vy; VF = carry
    AddRegisters { x: u8, y: u8 },
    /// `8xy5` Vx -= Vy; VF = !borrow
    Subtract { x: u8, y: u8 },
    /// `8xy6` Vx >>= 1; VF = lsb
    ShiftRight { x: u8 },
    /// `8xy7` Vx = Vy - Vx; VF = !borrow
    ReverseSubtract { x: u8, y: u8 },
    /// `8xyE` Vx <<= 1; VF = msb
    ShiftLeft { x: u8 },
    /// `9xy0` if Vx != Vy then skip
    SkipNotEqualRegisters { x: u8, y: u8 },
    /// `Annn` I = nnn
    SetAddress(u16),
    /// `Bnnn` PC = nnn + V0
    JumpOffset(u16),
    /// `Cxkk` Vx = random & kk
    Random { x: u8, kk: u8 },
    /// `Dxyn` draw an n-byte sprite from I at (Vx, Vy); VF = collision
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E` if key Vx is down then skip
    SkipKeyDown { x: u8 },
    /// `ExA1` if key Vx is up then skip
    SkipKeyUp { x: u8 },
    /// `Fx07` Vx = DT
    ReadDelay { x: u8 },
    /// `Fx0A` wait for a key and store it in Vx
    WaitKey { x: u8 },
    /// `Fx15` DT = Vx
    SetDelay { x: u8 },
    /// `Fx18` ST = Vx
    SetSound { x: u8 },
    /// `Fx1E` I += Vx
    AddAddress { x: u8 },
    /// `Fx29` I = address of the glyph for Vx
    FontGlyph { x: u8 },
    /// `Fx33` mem[I..I+3] = bcd(Vx)
    Bcd { x: u8 },
    /// `Fx55` mem[I..=I+x] = V0..=Vx
    StoreRegisters { x: u8 },
    /// `Fx65` V0..=Vx = mem[I..=I+x]
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode.
    ///
    /// Masks are tried from the widest to the narrowest and the first one that
    /// matches wins. Opcodes that match none of them decode to `None`.
    pub fn decode(op: Opcode) -> Option<Instruction> {
        exact(op)
            .or_else(|| by_category(op))
            .or_else(|| by_last_nibble(op))
            .or_else(|| by_last_byte(op))
    }
}

fn exact(op: Opcode) -> Option<Instruction> {
    match op.0 {
        0x00E0 => Some(Instruction::Clear),
        0x00EE => Some(Instruction::Return),
        _ => None,
    }
}

fn by_category(op: Opcode) -> Option<Instruction> {
    let (x, y, n, kk, nnn) = (op.x(), op.y(), op.n(), op.kk(), op.nnn());
    let instruction = match op.masked(0xF000) {
        0x1000 => Instruction::Jump(nnn),
        0x2000 => Instruction::Call(nnn),
        0x3000 => Instruction::SkipEqualImmediate { x, kk },
        0x4000 => Instruction::SkipNotEqualImmediate { x, kk },
        0x6000 => Instruction::SetImmediate { x, kk },
        0x7000 => Instruction::AddImmediate { x, kk },
        0xA000 => Instruction::SetAddress(nnn),
        0xB000 => Instruction::JumpOffset(nnn),
        0xC000 => Instruction::Random { x, kk },
        0xD000 => Instruction::Draw { x, y, n },
        _ => return None,
    };
    Some(instruction)
}

fn by_last_nibble(op: Opcode) -> Option<Instruction> {
    let (x, y) = (op.x(), op.y());
    let instruction = match op.masked(0xF00F) {
        0x5000 => Instruction::SkipEqualRegisters { x, y },
        0x8000 => Instruction::Assign { x, y },
        0x8001 => Instruction::Or { x, y },
        0x8002 => Instruction::And { x, y },
        0x8003 => Instruction::Xor { x, y },
        0x8004 => Instruction::AddRegisters { x, y },
        0x8005 => Instruction::Subtract { x, y },
        0x8006 => Instruction::ShiftRight { x },
        0x8007 => Instruction::ReverseSubtract { x, y },
        0x800E => Instruction::ShiftLeft { x },
        0x9000 => Instruction::SkipNotEqualRegisters { x, y },
        _ => return None,
    };
    Some(instruction)
}

fn by_last_byte(op: Opcode) -> Option<Instruction> {
    let x = op.x();
    let instruction = match op.masked(0xF0FF) {
        0xE09E => Instruction::SkipKeyDown { x },
        0xE0A1 => Instruction::SkipKeyUp { x },
        0xF007 => Instruction::ReadDelay { x },
        0xF00A => Instruction::WaitKey { x },
        0xF015 => Instruction::SetDelay { x },
        0xF018 => Instruction::SetSound { x },
        0xF01E => Instruction::AddAddress { x },
        0xF029 => Instruction::FontGlyph { x },
        0xF033 => Instruction::Bcd { x },
        0xF055 => Instruction::StoreRegisters { x },
        0xF065 => Instruction::LoadRegisters { x },
        _ => return None,
    };
    Some(instruction)
}

#[cfg(test)]
mod tests {
    use super::Instruction::*;
    use super::*;

    fn decode(word: u16) -> Option<Instruction> {
        Instruction::decode(Opcode(word))
    }

    #[test]
    fn test_decodes_every_instruction() {
        let cases = [
            (0x00E0, Clear),
            (0x00EE, Return),
            (0x1234, Jump(0x234)),
            (0x2456, Call(0x456)),
            (0x342A, SkipEqualImmediate { x: 0x4, kk: 0x2A }),
            (0x4A75, SkipNotEqualImmediate { x: 0xA, kk: 0x75 }),
            (0x5AE0, SkipEqualRegisters { x: 0xA, y: 0xE }),
            (0x63F5, SetImmediate { x: 0x3, kk: 0xF5 }),
            (0x7B12, AddImmediate { x: 0xB, kk: 0x12 }),
            (0x8590, Assign { x: 0x5, y: 0x9 }),
            (0x8101, Or { x: 0x1, y: 0x0 }),
            (0x8642, And { x: 0x6, y: 0x4 }),
            (0x87F3, Xor { x: 0x7, y: 0xF }),
            (0x8264, AddRegisters { x: 0x2, y: 0x6 }),
            (0x8C45, Subtract { x: 0xC, y: 0x4 }),
            (0x8106, ShiftRight { x: 0x1 }),
            (0x86D7, ReverseSubtract { x: 0x6, y: 0xD }),
            (0x8E0E, ShiftLeft { x: 0xE }),
            (0x9990, SkipNotEqualRegisters { x: 0x9, y: 0x9 }),
            (0xA568, SetAddress(0x568)),
            (0xBABC, JumpOffset(0xABC)),
            (0xC5AF, Random { x: 0x5, kk: 0xAF }),
            (0xD7B3, Draw { x: 0x7, y: 0xB, n: 0x3 }),
            (0xE49E, SkipKeyDown { x: 0x4 }),
            (0xECA1, SkipKeyUp { x: 0xC }),
            (0xF907, ReadDelay { x: 0x9 }),
            (0xFD0A, WaitKey { x: 0xD }),
            (0xF315, SetDelay { x: 0x3 }),
            (0xF718, SetSound { x: 0x7 }),
            (0xF91E, AddAddress { x: 0x9 }),
            (0xFF29, FontGlyph { x: 0xF }),
            (0xF533, Bcd { x: 0x5 }),
            (0xF655, StoreRegisters { x: 0x6 }),
            (0xF865, LoadRegisters { x: 0x8 }),
        ];

        for (word, instruction) in cases {
            assert_eq!(decode(word), Some(instruction), "decoding {word:04X}");
        }
    }

    #[test]
    fn test_exact_match_wins_over_category() {
        // 0x00E0 and 0x00EE are only ever the fixed functions
        assert_eq!(decode(0x00E0), Some(Clear));
        assert_eq!(decode(0x00EE), Some(Return));
    }

    #[test]
    fn test_category_ignores_low_nibble() {
        // 0x3xkk with a low nibble that would mean something under 0xF00F
        assert_eq!(decode(0x3104), Some(SkipEqualImmediate { x: 0x1, kk: 0x04 }));
        assert_eq!(decode(0xD00E), Some(Draw { x: 0x0, y: 0x0, n: 0xE }));
    }

    #[test]
    fn test_unmatched_opcodes_decode_to_none() {
        for word in [0x0000, 0x0123, 0x00E1, 0x5121, 0x8008, 0x800F, 0x9121, 0xE19F, 0xF100, 0xFFFF] {
            assert_eq!(decode(word), None, "decoding {word:04X}");
        }
    }
}
