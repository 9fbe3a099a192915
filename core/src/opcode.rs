use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Which instruction an
/// opcode encodes is decided by matching it against a series of masks:
/// - `0xFFFF` the whole word, for fixed functions (e.g. CLS; clear screen)
/// - `0xF000` broad categorization by the most significant nibble
/// - `0xF00F` specific behavior within a category, by the last nibble
/// - `0xF0FF` specific behavior within a category, by the last byte
///
/// The fields not used to determine the operation carry its operands.
/// - `[_nnn]` a 12-bit address
/// - `[__kk]` a byte that is assigned to and/or compared with Vx
/// - `[_x__]` either the register Vx or a range of registers V0..=Vx
/// - `[__y_]` the register Vy
/// - `[___n]` a sprite height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Combines two subsequent bytes of memory, the first being the high byte.
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode(u16::from_be_bytes([high, low]))
    }

    /// The opcode with only the bits selected by `mask` kept.
    pub fn masked(self, mask: u16) -> u16 {
        self.0 & mask
    }

    /// `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// `[__kk]`
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// `[_nnn]`
    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
