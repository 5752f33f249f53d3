pub mod commands;
pub mod engine;
pub mod error;
pub mod progress;
pub mod queue;
pub mod state;
pub mod traits;
pub mod util;
