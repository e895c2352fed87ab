//! CLI library components for the remittance generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod samples;
pub mod types;
