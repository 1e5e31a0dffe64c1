//! Subcommands
//!
//! Each `execute` returns `Ok(false)` when the command ran but the answer is
//! negative, which the binary maps to exit status 1.

pub mod check;
pub mod config;
pub mod lookup;
pub mod resolve;
pub mod show;

/// Result type shared by all subcommands
pub type CmdResult = Result<bool, Box<dyn std::error::Error>>;
