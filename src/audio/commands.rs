use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load { url: String },
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f32),
}
