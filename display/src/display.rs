use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

const BACKGROUND: [u8; 3] = [33, 140, 140];
const FOREGROUND: [u8; 3] = [107, 207, 204];

/// # Screen
/// An SDL2 window showing the 64x32 Chip-8 frame buffer.
/// The frame is scaled by the buffer's integer scale and centred in the window,
/// with the background colour filling whatever is left over.
/// The screen only gets a call to `render` when the engine reports a render is due.
pub struct Screen {
    canvas: sdl2::render::WindowCanvas,
}

impl Screen {
    /// Opens a resizable window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `width` the initial horizontal size of the window measured in pixels
    /// * `height` the initial vertical size of the window measured in pixels
    pub fn new(sdl: &sdl2::Sdl, width: u32, height: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window("Chip-8", width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Screen { canvas })
    }

    /// The drawable size of the window, in pixels.
    pub fn size(&self) -> Result<(u32, u32), String> {
        self.canvas.output_size()
    }

    /// Formats the frame buffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;
        texture
            .update(None, &frame_to_rgb24(frame), DISPLAY_WIDTH * 3)
            .map_err(|e| e.to_string())?;

        let (width, height) = self.canvas.output_size()?;
        let scaled_width = DISPLAY_WIDTH as u32 * frame.scale();
        let scaled_height = DISPLAY_HEIGHT as u32 * frame.scale();
        let target = Rect::new(
            (width.saturating_sub(scaled_width) / 2) as i32,
            (height.saturating_sub(scaled_height) / 2) as i32,
            scaled_width,
            scaled_height,
        );

        let [r, g, b] = BACKGROUND;
        self.canvas.set_draw_color(Color::RGB(r, g, b));
        self.canvas.clear();
        self.canvas.copy(&texture, None, target)?;
        self.canvas.present();
        Ok(())
    }
}

/// Formats a Chip-8 FrameBuffer as an RGB24 pixel stream.
///
/// An SDL2 texture is a 1D array of bytes that represent concatenated rows of RGB pixels,
/// so each cell of the frame becomes the three bytes of either the foreground or the
/// background colour.
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .rows()
        .iter()
        .flat_map(|row| row.iter())
        .flat_map(|&cell| if cell == 1 { FOREGROUND } else { BACKGROUND })
        .collect()
}
