//! CLI infrastructure for the `ps` binary
//!
//! Commands for training a PS agent in a reference environment and for
//! comparing it against a random baseline.

pub mod commands;
pub mod config;
pub mod output;
