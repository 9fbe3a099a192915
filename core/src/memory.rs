use crate::constants::{ADDRESS_MASK, FONT, MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::LoadError;
use crate::opcode::Opcode;

/// # Memory
/// 0xFFF bytes of addressable memory.
///
/// - `0x000..0x050` the font
/// - `0x050..0x200` reserved for the interpreter
/// - `0x200..` the program
///
/// Every address is masked to 12 bits. 0xFFF is the one 12-bit address with no
/// byte behind it and wraps around to 0x000.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: Box::new([0; MEMORY_SIZE]),
        };
        memory.load_font();
        memory
    }

    fn index(addr: u16) -> usize {
        usize::from(addr & ADDRESS_MASK) % MEMORY_SIZE
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Memory::index(addr)]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[Memory::index(addr)] = value;
    }

    /// Reads `len` bytes starting at `addr`, wrapping at the end of memory.
    pub fn read_wrapping(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read(addr.wrapping_add(offset as u16)))
            .collect()
    }

    /// The opcode at `addr`; the first byte is the high byte.
    pub fn fetch(&self, addr: u16) -> Opcode {
        Opcode::from_bytes(self.read(addr), self.read(addr.wrapping_add(1)))
    }

    /// Zeroes the program region and rewrites the font.
    pub fn reset(&mut self) {
        self.bytes[usize::from(PROGRAM_START)..].fill(0);
        self.load_font();
    }

    fn load_font(&mut self) {
        self.bytes[..FONT.len()].copy_from_slice(&FONT);
    }

    /// Copies `rom` to `PROGRAM_START`; nothing is written if it doesn't fit.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        if rom.len() > MAX_PROGRAM_SIZE {
            return Err(LoadError::TooLarge {
                size: rom.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = usize::from(PROGRAM_START);
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// The program region, from `PROGRAM_START` to the end of memory.
    pub fn program(&self) -> &[u8] {
        &self.bytes[usize::from(PROGRAM_START)..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
