//! Two-layer Projective Simulation agent
//!
//! Percept clips are rows of two parallel matrices: the h-matrix holds the
//! learned strength of every percept→action edge and the g-matrix holds its
//! glow (eligibility for the next reward).

pub mod agent;
pub mod matrix;
pub mod percepts;

pub use agent::PsAgent;
pub use matrix::EdgeMatrix;
pub use percepts::PerceptTable;
