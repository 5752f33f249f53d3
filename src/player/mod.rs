pub mod controller;
pub mod effects;
pub mod format;
