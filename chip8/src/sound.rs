use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired, AudioStatus};

const PITCH: f32 = 440.0;
const VOLUME: f32 = 0.25;

/// Something that can sound the Chip-8 tone while the sound timer is running.
pub trait Sound {
    fn play(&mut self);
    fn stop(&mut self);
}

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// A square wave played through the default SDL2 audio device.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: PITCH / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(Beeper { device })
    }
}

impl Sound for Beeper {
    fn play(&mut self) {
        if self.device.status() != AudioStatus::Playing {
            self.device.resume();
        }
    }

    fn stop(&mut self) {
        if self.device.status() == AudioStatus::Playing {
            self.device.pause();
        }
    }
}

pub struct Mute;

impl Sound for Mute {
    fn play(&mut self) {}

    fn stop(&mut self) {}
}
