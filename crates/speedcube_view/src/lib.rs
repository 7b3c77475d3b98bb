//! Cube simulation state manager: sequences twist animations and commits
//! each twist to the cube state once its animation finishes.

mod animations;
mod simulation;

pub use animations::{TwistAnimation, TwistAnimationState};
pub use simulation::{CubeSimulation, ScrambleRecord};
