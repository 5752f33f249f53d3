pub mod events;
pub mod registry;
