use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::audio::commands::MediaCommand;

/// The platform element that actually renders audio.
///
/// Implementations report back through `Audio` events (`Play`, `Pause`,
/// `TimeUpdate`, `Ended`) rather than return values. The output stream is
/// tied to the thread that opened it, so elements are not `Send`.
pub trait MediaElement {
    fn load(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, position: std::time::Duration);
    fn set_volume(&mut self, volume: f32);

    fn execute(&mut self, command: MediaCommand) {
        match command {
            MediaCommand::Load { url } => self.load(&url),
            MediaCommand::Play => self.play(),
            MediaCommand::Pause => self.pause(),
            MediaCommand::Seek(position) => self.seek(position),
            MediaCommand::SetVolume(volume) => self.set_volume(volume),
        }
    }
}

pub trait IndexPicker: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
