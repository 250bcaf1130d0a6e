//! Wrap-around snake for the terminal.
//!
//! The simulation lives in [`game`], [`snake`], and [`food`]; it is driven
//! purely by explicit calls and owns no timers or I/O. Everything else in the
//! crate (renderer, HUD, menus, input translation, terminal runtime) sits on
//! top of that engine and can be swapped out without touching it.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
