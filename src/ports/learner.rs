//! Learner port - abstraction for agents driven by an environment loop
//!
//! The environment loop alternates `predict` (observation in, action out) and
//! `train` (reward in). Implemented by the PS agent and by baselines used for
//! comparison.

use std::fmt::Display;

use crate::Result;

/// Learner trait - unified interface for reward-driven agents
///
/// Object safe, so pipelines can hold `&mut dyn Learner` and compare different
/// agents against the same environment.
///
/// # Examples
///
/// ```
/// use ps_agent::{PsAgent, ports::Learner};
///
/// fn step(learner: &mut dyn Learner, observation: &str, reward: f64) -> ps_agent::Result<usize> {
///     let action = learner.predict(&observation)?;
///     learner.train(reward)?;
///     Ok(action)
/// }
///
/// let mut agent = PsAgent::new(3).unwrap().with_seed(1);
/// assert!(step(&mut agent, "percept", 1.0).unwrap() < 3);
/// ```
pub trait Learner: Send {
    /// Select an action for the given observation.
    ///
    /// # Errors
    ///
    /// Returns an error if the learner cannot form an action distribution.
    fn predict(&mut self, observation: &dyn Display) -> Result<usize>;

    /// Update the learner with the reward that followed its last action(s).
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive baselines.
    fn train(&mut self, _reward: f64) -> Result<()> {
        Ok(())
    }

    /// Get the learner's name.
    ///
    /// Used for identification in comparisons and logging.
    fn name(&self) -> &str;

    /// Reset learner state to initial conditions.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless learners.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Seed the learner's internal random number generator.
    ///
    /// Training pipelines call this when supplied with a deterministic seed.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }

    /// Probability distribution over actions for an observation, if the
    /// learner has an explicit policy.
    fn action_probabilities(&self, _observation: &dyn Display) -> Option<Vec<f64>> {
        None
    }

    /// Enable downcasting to concrete types.
    fn as_any(&self) -> &dyn std::any::Any;
}
