use tracing::{info, warn};

use super::traits::IndexPicker;
use crate::model::track::Track;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueManager {
    queue: Vec<Track>,
    current_track_index: Option<usize>,
    pub is_shuffled: bool,
    pub is_repeat: bool,
}

impl QueueManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, tracks: Option<Vec<Track>>) -> bool {
        let Some(tracks) = tracks.filter(|t| !t.is_empty()) else {
            return false;
        };

        self.queue = tracks;
        self.current_track_index = Some(0);
        true
    }

    pub fn tracks(&self) -> &[Track] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_track_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track_index.and_then(|i| self.queue.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.queue.get(index)
    }

    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index < self.queue.len() {
            self.current_track_index = Some(index);
            true
        } else {
            false
        }
    }

    /// Resolves which index plays next and moves there.
    ///
    /// Repeat wins over shuffle, shuffle over sequential order. `None` means
    /// the queue is exhausted (or empty) and nothing should load.
    pub fn next_index(&mut self, picker: &mut dyn IndexPicker) -> Option<usize> {
        let current = self.current_track_index?;

        if self.is_repeat {
            return Some(current);
        }

        if self.is_shuffled {
            let index = picker.pick(self.queue.len());
            if !self.set_current_index(index) {
                warn!("Shuffle picked {index} outside a queue of {}", self.queue.len());
                return None;
            }
            return Some(index);
        }

        if current + 1 < self.queue.len() {
            self.current_track_index = Some(current + 1);
            Some(current + 1)
        } else {
            info!("End of queue");
            None
        }
    }

    pub fn previous_index(&mut self) -> Option<usize> {
        let current = self.current_track_index?;
        if current == 0 {
            return None;
        }

        self.current_track_index = Some(current - 1);
        Some(current - 1)
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.is_shuffled = !self.is_shuffled;
        self.is_shuffled
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.is_repeat = !self.is_repeat;
        self.is_repeat
    }
}
