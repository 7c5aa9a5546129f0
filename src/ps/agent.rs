//! Projective Simulation agent with h- and g-matrices over percept clips.

use std::fmt::{self, Display};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use super::{matrix::EdgeMatrix, percepts::PerceptTable};
use crate::{
    Error, Result,
    config::AgentConfig,
    ports::Learner,
    utils::{softmax, weighted_sample},
};

/// Neutral h-value every edge starts from and is damped towards.
pub const INITIAL_H_VALUE: f64 = 1.0;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Simple two-layer Projective Simulation (PS) agent.
///
/// Each percept clip is a row of the h-matrix (learned edge strengths) and of
/// the g-matrix (glow). Both matrices hold `num_percepts + 1` rows: row `i`
/// belongs to the percept with index `i` and the trailing row is a pristine
/// placeholder that the next unseen percept takes over.
///
/// Percept identity is the `Display` string of the observation, so `1` and
/// `"1"` are the same percept.
///
/// # Examples
///
/// ```
/// use ps_agent::PsAgent;
///
/// let mut agent = PsAgent::new(2).unwrap().with_seed(7);
/// let action = agent.predict("left").unwrap();
/// assert!(action < 2);
/// agent.train(1.0).unwrap();
/// assert_eq!(agent.h_matrix().get(0, action), Some(2.0));
/// ```
pub struct PsAgent {
    config: AgentConfig,
    percepts: PerceptTable,
    h_matrix: EdgeMatrix,
    g_matrix: EdgeMatrix,
    rng: StdRng,
}

impl fmt::Debug for PsAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PsAgent")
            .field("config", &self.config)
            .field("num_percepts", &self.num_percepts())
            .finish()
    }
}

impl PsAgent {
    /// Create an agent with the default glow, damping and softmax parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `num_actions` is zero.
    pub fn new(num_actions: usize) -> Result<Self> {
        Self::from_config(AgentConfig::new(num_actions))
    }

    /// Create an agent from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the configuration fails validation.
    pub fn from_config(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        let num_actions = config.num_actions;
        Ok(Self {
            rng: build_rng(config.seed),
            percepts: PerceptTable::new(),
            h_matrix: EdgeMatrix::with_row(num_actions, INITIAL_H_VALUE),
            g_matrix: EdgeMatrix::with_row(num_actions, 0.0),
            config,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Replace the sampling RNG with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn num_actions(&self) -> usize {
        self.config.num_actions
    }

    pub fn num_percepts(&self) -> usize {
        self.percepts.len()
    }

    pub fn percepts(&self) -> &PerceptTable {
        &self.percepts
    }

    pub fn h_matrix(&self) -> &EdgeMatrix {
        &self.h_matrix
    }

    pub fn g_matrix(&self) -> &EdgeMatrix {
        &self.g_matrix
    }

    /// Row an observation reads from: its own row if seen, else the placeholder.
    fn row_for(&self, key: &str) -> usize {
        self.percepts
            .index_of(key)
            .unwrap_or_else(|| self.percepts.len())
    }

    /// Action-selection distribution the agent would use for `observation`.
    ///
    /// Does not register the percept; an unseen observation reads the
    /// placeholder row and therefore gets the uniform distribution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericalError`] if the h-values cannot form a distribution.
    pub fn action_probabilities<O: Display + ?Sized>(&self, observation: &O) -> Result<Vec<f64>> {
        let key = observation.to_string();
        softmax(self.h_matrix.row(self.row_for(&key)), self.config.softmax)
    }

    /// Choose an action for `observation` and mark the chosen edge as glowing.
    ///
    /// An unseen percept is registered first, growing both matrices by one row.
    /// Sampling happens before any state is touched, so an error leaves the
    /// agent unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericalError`] if the h-values cannot form a distribution.
    pub fn predict<O: Display + ?Sized>(&mut self, observation: &O) -> Result<usize> {
        let key = observation.to_string();
        let row = self.row_for(&key);

        let probabilities = softmax(self.h_matrix.row(row), self.config.softmax)?;
        let items: Vec<(usize, f64)> = probabilities.into_iter().enumerate().collect();
        let action = weighted_sample(&mut self.rng, &items)
            .ok_or_else(|| Error::numerical("empty action distribution"))?;

        if row == self.percepts.len() {
            let (index, _) = self.percepts.insert(key);
            debug_assert_eq!(index, row);
            self.h_matrix.push_row(INITIAL_H_VALUE);
            self.g_matrix.push_row(0.0);
            debug!(
                percept = self.percepts.key(index).unwrap_or_default(),
                index, "new percept clip"
            );
        }

        self.g_matrix.set(row, action, 1.0);
        trace!(percept_index = row, action, "edge glowing");

        Ok(action)
    }

    /// Apply damping, reward-weighted reinforcement and glow decay to every edge.
    ///
    /// ```text
    /// h ← h − γ(h − 1) + reward·g
    /// g ← (1 − η)·g
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericalError`] if `reward` is not finite or if any
    /// updated h-value would overflow; nothing is updated in either case.
    pub fn train(&mut self, reward: f64) -> Result<()> {
        if !reward.is_finite() {
            return Err(Error::numerical(format!("reward {reward} is not finite")));
        }

        let damp = self.config.damp;
        let decay = 1.0 - self.config.glow;
        let updated = |h: f64, g: f64| h - damp * (h - INITIAL_H_VALUE) + reward * g;

        if let Some((index, value)) = self
            .h_matrix
            .values()
            .iter()
            .zip(self.g_matrix.values())
            .map(|(h, g)| updated(*h, *g))
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            let cols = self.h_matrix.cols();
            return Err(Error::numerical(format!(
                "reward {reward} would drive h-value at ({}, {}) to {value}",
                index / cols,
                index % cols
            )));
        }

        for (h, g) in self
            .h_matrix
            .values_mut()
            .iter_mut()
            .zip(self.g_matrix.values_mut().iter_mut())
        {
            *h = updated(*h, *g);
            *g *= decay;
        }

        trace!(reward, num_percepts = self.num_percepts(), "trained");
        Ok(())
    }
}

impl Learner for PsAgent {
    fn predict(&mut self, observation: &dyn Display) -> Result<usize> {
        PsAgent::predict(self, observation)
    }

    fn train(&mut self, reward: f64) -> Result<()> {
        PsAgent::train(self, reward)
    }

    fn name(&self) -> &str {
        "PS"
    }

    fn reset(&mut self) -> Result<()> {
        let fresh = Self::from_config(self.config.clone())?;
        *self = fresh;
        Ok(())
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.reseed(seed);
        Ok(())
    }

    fn action_probabilities(&self, observation: &dyn Display) -> Option<Vec<f64>> {
        PsAgent::action_probabilities(self, observation).ok()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
