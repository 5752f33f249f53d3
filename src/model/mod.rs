pub mod seed;
pub mod track;
