pub mod audio;
pub mod config;
pub mod event;
pub mod http;
pub mod model;
pub mod player;
pub mod ui;
pub mod util;
