//! Pure helpers shared by the host components.

pub mod chrome;
pub mod input_map;
