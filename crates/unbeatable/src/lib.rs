//! Unbeatable - play tic-tac-toe in the terminal against a perfect opponent.
//!
//! This crate is the presentation side: command-line parsing, configuration,
//! logging setup and the terminal UI. All game logic lives in
//! [`unbeatable_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod suggest;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
