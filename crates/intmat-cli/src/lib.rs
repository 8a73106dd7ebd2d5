//! Library half of the `intmat` command-line tool: configuration loading and
//! the per-subcommand actions, kept out of `main.rs` so they can be tested.
pub mod commands;
pub mod config;
