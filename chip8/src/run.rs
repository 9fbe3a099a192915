use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Error;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Config, Display, FrameBuffer, Keypad, LoadError};
use chip8_display::Screen;

use crate::keymap::Layout;
use crate::sound::{Beeper, Mute, Sound};

/// Everything the driver needs to know before opening a window.
#[derive(Debug, Clone)]
pub struct Options {
    pub rom: PathBuf,
    pub config: Config,
    pub width: u32,
    pub height: u32,
    pub layout: Layout,
    pub seed: Option<u64>,
    pub mute: bool,
}

pub fn run(options: Options) -> anyhow::Result<()> {
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut chip8 = Chip8::new(FrameBuffer::new(), Keypad::new(), rng, options.config);

    // Get SDL2 context
    let sdl = sdl2::init().map_err(Error::msg)?;
    let mut screen = Screen::new(&sdl, options.width, options.height).map_err(Error::msg)?;
    let (width, height) = screen.size().map_err(Error::msg)?;
    chip8.display_mut().resize(width, height);
    let mut events = sdl.event_pump().map_err(Error::msg)?;

    let mut sound: Box<dyn Sound> = if options.mute {
        Box::new(Mute)
    } else {
        match Beeper::new(&sdl) {
            Ok(beeper) => Box::new(beeper),
            Err(e) => {
                warn!("no audio device, continuing without sound: {}", e);
                Box::new(Mute)
            }
        }
    };

    // Load ROM; a rom that fails to load leaves an idle window open
    let loaded = File::open(&options.rom)
        .map_err(LoadError::from)
        .and_then(|file| chip8.load_rom_from(&mut BufReader::new(file)));
    let mut halted = match loaded {
        Ok(()) => false,
        Err(e) => {
            error!("unable to load {}: {}", options.rom.display(), e);
            true
        }
    };

    // Set initial timing
    let cycle_time: Duration = chip8.config().cycle_period();
    let mut last_cycle: Instant = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, options.layout.keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, options.layout.keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = screen.size().map_err(Error::msg)?;
                    chip8.display_mut().resize(width, height);
                    chip8.display_mut().set_render_due(true);
                }
                _ => continue,
            };
        }

        // Update state
        if !halted {
            if let Err(fault) = chip8.step() {
                error!("halting: {}", fault);
                halted = true;
            }
        }

        // If a frame is due, unset the flag and render the current frame
        if chip8.display().render_due() {
            screen.render(chip8.display()).map_err(Error::msg)?;
            chip8.display_mut().set_render_due(false);
        }

        if chip8.sound_active() && !halted {
            sound.play();
        } else {
            sound.stop();
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    if chip8.unknown_opcodes() > 0 {
        info!("skipped {} unknown opcodes", chip8.unknown_opcodes());
    }
    Ok(())
}
