use std::time::Duration;

use super::queue::QueueManager;
use crate::model::track::Track;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub queue: QueueManager,
    pub volume: f32,
    pub current_time: f64,
    pub duration: Option<f64>,
    pub paused: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            queue: QueueManager::new(),
            volume: 1.0,
            current_time: 0.0,
            duration: None,
            paused: true,
        }
    }
}

impl PlaybackState {
    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current_track()
    }

    pub fn known_duration(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    pub fn position_for_percent(&self, percent: f64) -> Option<Duration> {
        let duration = self.known_duration()?;
        let seconds = (percent.clamp(0.0, 100.0) / 100.0) * duration;
        Some(Duration::from_secs_f64(seconds))
    }

    pub fn percent_complete(&self) -> Option<f64> {
        let duration = self.known_duration()?;
        Some((self.current_time / duration * 100.0).clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_maps_onto_known_duration() {
        let state = PlaybackState {
            duration: Some(200.0),
            ..Default::default()
        };
        assert_eq!(
            state.position_for_percent(50.0),
            Some(Duration::from_secs(100))
        );
    }

    #[test]
    fn unknown_duration_has_no_position() {
        let mut state = PlaybackState::default();
        assert_eq!(state.position_for_percent(50.0), None);

        state.duration = Some(f64::NAN);
        assert_eq!(state.position_for_percent(50.0), None);
        assert_eq!(state.percent_complete(), None);
    }
}
