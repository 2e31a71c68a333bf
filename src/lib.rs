//! Library exports for the drawcmd interpreter.
//!
//! Exposes the command grammar, the shape dispatcher and the drawing surfaces
//! so that front-ends (the bundled terminal binary, or a GUI) can share the
//! same parse-and-draw cycle.

pub mod command;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
