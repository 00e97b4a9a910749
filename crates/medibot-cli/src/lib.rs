//! medibot-cli library root.
//!
//! The binary is a thin shell over these modules; they are public so the
//! integration tests can drive config migration, argument parsing and
//! terminal rendering directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod terminal;
