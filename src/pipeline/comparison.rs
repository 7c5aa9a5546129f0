//! Baseline learners and side-by-side comparison

use std::fmt::Display;

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{
    observers::ProgressObserver,
    training::{TrainingConfig, TrainingPipeline, TrainingResult},
};
use crate::{
    Error, Result,
    ports::{Environment, Learner},
};

/// Random learner (uniform over actions, never learns)
pub struct RandomLearner {
    name: String,
    num_actions: usize,
    rng: StdRng,
}

impl RandomLearner {
    /// Create a new random learner over `num_actions` actions
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `num_actions` is zero.
    pub fn new(name: String, num_actions: usize) -> Result<Self> {
        if num_actions == 0 {
            return Err(Error::InvalidParameter {
                name: "num_actions",
                reason: "must be a positive integer".to_string(),
            });
        }
        Ok(Self {
            name,
            num_actions,
            rng: StdRng::seed_from_u64(random()),
        })
    }

    /// Create a new random learner with a deterministic seed
    pub fn with_seed(name: String, num_actions: usize, seed: u64) -> Result<Self> {
        let mut learner = Self::new(name, num_actions)?;
        learner.rng = StdRng::seed_from_u64(seed);
        Ok(learner)
    }
}

impl Learner for RandomLearner {
    fn predict(&mut self, _observation: &dyn Display) -> Result<usize> {
        Ok(self.rng.random_range(0..self.num_actions))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn action_probabilities(&self, _observation: &dyn Display) -> Option<Vec<f64>> {
        Some(vec![1.0 / self.num_actions as f64; self.num_actions])
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Results of running several learners through identical training runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub results: Vec<TrainingResult>,
}

impl ComparisonResult {
    /// Result with the highest final-window reward
    pub fn best(&self) -> Option<&TrainingResult> {
        self.results
            .iter()
            .max_by(|a, b| a.final_window_reward.total_cmp(&b.final_window_reward))
    }
}

/// Runs every learner on a fresh environment with the same training configuration
pub struct ComparisonFramework {
    learners: Vec<Box<dyn Learner>>,
    config: TrainingConfig,
    progress: bool,
}

impl ComparisonFramework {
    /// Create a new comparison framework
    pub fn new(learners: Vec<Box<dyn Learner>>, config: TrainingConfig) -> Self {
        Self {
            learners,
            config,
            progress: false,
        }
    }

    /// Show a progress bar for each learner's run
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Train each learner in an environment built by `make_env`.
    ///
    /// `make_env` is called once per learner so no learner sees another's
    /// environment state.
    pub fn compare<E, F>(&mut self, mut make_env: F) -> Result<ComparisonResult>
    where
        E: Environment,
        F: FnMut() -> Result<E>,
    {
        let mut results = Vec::with_capacity(self.learners.len());
        for learner in &mut self.learners {
            let mut env = make_env()?;
            let mut pipeline = TrainingPipeline::new(self.config.clone());
            if self.progress {
                pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
            }
            results.push(pipeline.run(learner.as_mut(), &mut env)?);
        }
        Ok(ComparisonResult { results })
    }

    /// Learners in the order they were given
    pub fn learners(&self) -> &[Box<dyn Learner>] {
        &self.learners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_learner_stays_in_range() {
        let mut learner = RandomLearner::with_seed("Random".to_string(), 3, 5).unwrap();
        for _ in 0..100 {
            assert!(learner.predict(&"anything").unwrap() < 3);
        }
        assert_eq!(
            learner.action_probabilities(&"anything"),
            Some(vec![1.0 / 3.0; 3])
        );
    }

    #[test]
    fn random_learner_needs_actions() {
        assert!(RandomLearner::new("Random".to_string(), 0).is_err());
    }
}
