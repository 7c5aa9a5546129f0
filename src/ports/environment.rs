//! Environment port - the task a learner interacts with

use std::fmt::Display;

use crate::Result;

/// Outcome of a single environment step
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O> {
    /// Observation after the step
    pub observation: O,
    /// Reward for the action just taken
    pub reward: f64,
    /// Whether the episode has ended
    pub done: bool,
}

/// Episodic task with a fixed, discrete action set.
///
/// Observations only need a stable `Display` form: that string is what a PS
/// agent uses as the percept key.
pub trait Environment {
    type Observation: Display;

    /// Number of discrete actions `0..num_actions()`
    fn num_actions(&self) -> usize;

    /// Start a new episode and return its first observation.
    fn reset(&mut self) -> Self::Observation;

    /// Apply `action`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if `action >= num_actions()`.
    fn step(&mut self, action: usize) -> Result<Transition<Self::Observation>>;

    fn name(&self) -> &str;
}
