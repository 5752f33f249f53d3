use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Default, Debug)]
pub struct TrackProgress {
    current_position_millis: AtomicU64,
    total_duration_millis: AtomicU64,
    generation: AtomicU64,
}

impl TrackProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_position(&self, position: Duration) {
        self.current_position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn set_total_duration(&self, duration: Duration) {
        self.total_duration_millis
            .store(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn seconds(&self) -> (f64, Option<f64>) {
        let current = self.current_position_millis.load(Ordering::Relaxed) as f64 / 1000.0;
        let total = self.total_duration_millis.load(Ordering::Relaxed);
        (current, (total > 0).then(|| total as f64 / 1000.0))
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn reset(&self) -> u64 {
        self.set_current_position(Duration::ZERO);
        self.set_total_duration(Duration::ZERO);
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
