//! Command implementations behind the `locmap` binary.
//!
//! Each subcommand lives in [`commands`] as a `handle_*` function that
//! returns its output instead of printing it, so the binary stays a thin
//! argument parser.

pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod utils;
