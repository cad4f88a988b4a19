//! Library side of the inventory export CLI.

pub mod commands;
pub mod logging;
pub mod types;
