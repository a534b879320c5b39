//! CLI tool for inspecting consistent hash rings.
//!
//! Provides commands for:
//! - Looking up which node owns a key
//! - Measuring key distribution across nodes
//! - Dumping ring positions
//! - Measuring how many keys move on membership changes

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
