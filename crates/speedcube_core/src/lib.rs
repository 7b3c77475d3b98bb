//! 3x3x3 twisty puzzle backend: facelet state, quarter-turn twists, move
//! notation, and scrambling.

#[macro_use]
extern crate strum;

mod color;
mod face;
mod scramble;
mod state;
mod timestamp;
mod twist;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use face::{Face, Strip};
pub use scramble::{ScrambleError, ScrambleParams, ScrambledCube};
pub use state::{CubeState, FaceGrid};
pub use timestamp::Timestamp;
pub use twist::{Direction, NotationError, Twist, format_twists, parse_twists};

/// Default number of twists in a scramble.
///
/// **Changing this changes the output of every recorded scramble that did
/// not specify a length.**
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 25;

/// Number of rows and columns on each face.
pub const GRID_SIZE: usize = 3;

/// Total number of facelets on the cube.
pub const FACELET_COUNT: usize = 6 * GRID_SIZE * GRID_SIZE;
