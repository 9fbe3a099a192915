use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Display
/// What the CPU needs from a screen. Implementations decide how (and whether)
/// pixels end up in front of a user.
pub trait Display {
    /// Turns every pixel off.
    fn clear(&mut self);

    /// XORs an 8-pixel wide sprite onto the screen with its top-left corner at
    /// (x, y), one row per byte, wrapping around the edges.
    ///
    /// Returns whether any pixel was turned off.
    fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool;

    /// Whether the screen should be presented again.
    fn render_due(&self) -> bool;

    fn set_render_due(&mut self, due: bool);

    /// Adapts to a new output size in physical pixels.
    fn resize(&mut self, width: u32, height: u32);
}

/// # FrameBuffer
/// A 64x32 monochrome screen kept in memory.
///
/// Pixels are indexed as [y][x] and hold 1 when on and 0 when off.
/// `scale` is the largest whole number of physical pixels per Chip-8 pixel that
/// fits the last size given to `resize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
    render_due: bool,
    scale: u32,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            render_due: false,
            scale: 1,
        }
    }

    /// Whether the pixel at (x, y) is on; coordinates wrap.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH] == 1
    }

    pub fn rows(&self) -> &[[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT] {
        &self.pixels
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Number of pixels currently on.
    pub fn lit(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&pixel| pixel == 1).count()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FrameBuffer {
    fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut erased = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (usize::from(y) + row) % DISPLAY_HEIGHT;
            for column in 0..8 {
                if (byte >> (7 - column)) & 1 == 0 {
                    continue;
                }
                let px = (usize::from(x) + column) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py][px];
                *pixel ^= 1;
                if *pixel == 0 {
                    erased = true;
                }
            }
        }
        erased
    }

    fn render_due(&self) -> bool {
        self.render_due
    }

    fn set_render_due(&mut self, due: bool) {
        self.render_due = due;
    }

    fn resize(&mut self, width: u32, height: u32) {
        let scale = (width / DISPLAY_WIDTH as u32).min(height / DISPLAY_HEIGHT as u32);
        self.scale = scale.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_glyph() {
        let mut frame = FrameBuffer::new();
        // the 0 glyph with a 1x 1y offset
        let erased = frame.draw(1, 1, &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert!(!erased);
        let mut expected = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        expected[1][1..5].copy_from_slice(&[1, 1, 1, 1]);
        expected[2][1..5].copy_from_slice(&[1, 0, 0, 1]);
        expected[3][1..5].copy_from_slice(&[1, 0, 0, 1]);
        expected[4][1..5].copy_from_slice(&[1, 0, 0, 1]);
        expected[5][1..5].copy_from_slice(&[1, 1, 1, 1]);
        assert_eq!(frame.rows(), &expected);
    }

    #[test]
    fn test_draw_xors() {
        let mut frame = FrameBuffer::new();
        // 0 1 0 1 -> Set
        frame.draw(2, 0, &[0x50]);
        // 1 1 0 0 -> Draw xor
        let erased = frame.draw(2, 0, &[0xC0]);
        assert_eq!(frame.rows()[0][2..6], [1, 0, 0, 1]);
        assert!(erased);
    }

    #[test]
    fn test_draw_wraps_around_both_edges() {
        let mut frame = FrameBuffer::new();
        frame.draw(63, 31, &[0xFF]);
        for x in [63, 0, 1, 2, 3, 4, 5, 6] {
            assert!(frame.pixel(x, 31), "column {x}");
        }
        assert!(!frame.pixel(7, 31));
        assert_eq!(frame.lit(), 8);

        let mut frame = FrameBuffer::new();
        frame.draw(0, 31, &[0x80, 0x80]);
        assert!(frame.pixel(0, 31));
        assert!(frame.pixel(0, 0));
    }

    #[test]
    fn test_double_draw_restores_frame() {
        let mut frame = FrameBuffer::new();
        frame.draw(10, 10, &[0x3C]);
        let before = frame.clone();
        let sprite = [0xAA, 0x55, 0xFF];
        assert!(frame.draw(12, 9, &sprite));
        assert!(frame.draw(12, 9, &sprite));
        assert_eq!(frame, before);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw(0, 0, &[0xFF; 4]);
        frame.clear();
        assert_eq!(frame.lit(), 0);
    }

    #[test]
    fn test_resize_picks_largest_whole_scale() {
        let mut frame = FrameBuffer::new();
        frame.resize(1280, 720);
        assert_eq!(frame.scale(), 20);
        frame.resize(640, 100);
        assert_eq!(frame.scale(), 3);
        frame.resize(10, 10);
        assert_eq!(frame.scale(), 1);
    }

    #[test]
    fn test_render_due_flag() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.render_due());
        frame.set_render_due(true);
        assert!(frame.render_due());
    }
}
