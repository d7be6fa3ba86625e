//! envurl CLI - Command-line interface for envurl.
//!
//! This crate provides the `envurl` tool, which prints the settings a
//! database, cache or email URL turns into.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
