//! refbench CLI library.
//!
//! Configuration, manifest loading, command execution and output
//! formatting for the `refbench` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use manifest::Manifest;
pub use output::Formatter;
