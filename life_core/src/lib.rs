// lib.rs - Conway's Game of Life: grid model, cursor, input handling and rendering
//
// Nothing in here knows about windows or key codes. A front end turns its
// keys into `input::Key` events, feeds them to a `Controller` each frame and
// draws through `render::Canvas`.

pub mod color;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod patterns;
pub mod render;
pub mod sim;

pub use color::Color;
pub use config::Config;
pub use controller::{Controller, FrameOutcome};
pub use cursor::{Cursor, Direction};
pub use error::{ConfigError, GridError};
pub use grid::{Cell, Grid, advance, advance_into};
pub use input::{Action, InputEvent, Key};
pub use layout::{Layout, Rect};
pub use patterns::Pattern;
pub use render::{Canvas, Palette, render};
pub use sim::Simulation;
