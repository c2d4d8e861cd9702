//! Utility helpers

pub mod path;
pub mod shell_detect;
