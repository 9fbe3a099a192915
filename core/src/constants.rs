use std::time::Duration;

/// Width of the display in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// Height of the display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 0xFFF;
/// Addresses are 12 bits wide
pub const ADDRESS_MASK: u16 = 0x0FFF;
/// Where ROMs are loaded into memory
pub const PROGRAM_START: u16 = 0x200;
/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of return addresses the stack can hold
pub const STACK_DEPTH: usize = 16;
/// Number of V registers
pub const REGISTER_COUNT: usize = 16;
/// Index of VF, the flag register
pub const FLAG: usize = 0xF;

/// Time between two instructions (500Hz)
pub const CYCLE_PERIOD: Duration = Duration::from_millis(1000 / 500);
/// Time between two timer decrements and frames (60Hz)
pub const TIMER_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Bytes per glyph in the font table
pub const GLYPH_SIZE: u16 = 5;

/// # Font
/// One 8x5 glyph per hex digit, loaded at address 0x000 so that the glyph for
/// digit `d` starts at `d * GLYPH_SIZE`.
///
/// ```text
/// 0xF0  XXXX
/// 0x90  X  X
/// 0x90  X  X
/// 0x90  X  X
/// 0xF0  XXXX
/// ```
#[rustfmt::skip]
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
