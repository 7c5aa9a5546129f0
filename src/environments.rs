//! Reference environments for exercising learners
//!
//! - [`InvasionGame`]: the one-step symbol-following task PS agents are usually
//!   introduced with, optionally reversing its meaning mid-run
//! - [`GridWorld`]: a multi-step navigation task where reward only arrives at
//!   the goal, so credit must flow back through glow

pub mod grid_world;
pub mod invasion;

pub use grid_world::{GridMove, GridPosition, GridWorld};
pub use invasion::{InvasionGame, Symbol};
