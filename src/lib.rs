//! Wrap-around grid Snake.
//!
//! The engine (`board`, `snake`, `food`, `game`) is pure and deterministic
//! given a seed; the terminal driver (`input`, `clock`, `renderer`, `ui`,
//! `terminal_runtime`) is thin glue around it.

pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
