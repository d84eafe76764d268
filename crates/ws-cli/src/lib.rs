//! Workstamps report CLI library.
//!
//! This crate provides the CLI interface over `ws-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
