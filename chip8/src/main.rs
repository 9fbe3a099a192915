//! Runs a Chip-8 rom in an SDL2 window.
//!
//! ```bash
//! chip8 roms/PONG --ips 700 --layout sequential
//! ```
//!
//! Hold **Space** to run without pacing, press **Escape** to quit.

use std::path::PathBuf;

use clap::Parser;

use chip8_core::Config;

use crate::keymap::Layout;
use crate::run::{run, Options};

mod keymap;
mod run;
mod sound;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the rom to run
    rom: PathBuf,

    /// Instructions per second
    #[arg(long, default_value_t = 500)]
    ips: u32,

    /// Rate at which the delay and sound timers count down, in Hz
    #[arg(long, default_value_t = 60)]
    timer_hz: u32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// How the keyboard maps onto the hex keypad
    #[arg(long, value_enum, default_value_t = Layout::Cosmac)]
    layout: Layout,

    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Don't open an audio device
    #[arg(long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::from_rates(args.ips, args.timer_hz)?;

    run(Options {
        rom: args.rom,
        config,
        width: args.width,
        height: args.height,
        layout: args.layout,
        seed: args.seed,
        mute: args.mute,
    })
}
