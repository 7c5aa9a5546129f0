//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default glow (η) parameter.
pub const DEFAULT_GLOW: f64 = 0.1;
/// Default damping (γ) parameter.
pub const DEFAULT_DAMP: f64 = 0.0;
/// Default softmax (β) parameter.
pub const DEFAULT_SOFTMAX: f64 = 0.1;

/// Configuration for creating a PS agent.
///
/// Builder-style API; the values are checked by [`AgentConfig::validate`] when
/// the agent is constructed.
///
/// # Examples
///
/// ```
/// use ps_agent::AgentConfig;
///
/// let config = AgentConfig::new(2)
///     .with_glow(0.2)
///     .with_damp(0.01)
///     .with_softmax(1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Number of available actions, fixed for the agent's lifetime
    pub num_actions: usize,
    /// Glow decay rate η in `[0, 1]`
    pub glow: f64,
    /// Damping rate γ in `[0, 1]`
    pub damp: f64,
    /// Softmax inverse temperature β, positive and finite
    pub softmax: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration for `num_actions` actions.
    ///
    /// Uses default values for other parameters:
    /// - glow: 0.1
    /// - damp: 0.0
    /// - softmax: 0.1
    /// - seed: None (non-deterministic)
    pub fn new(num_actions: usize) -> Self {
        Self {
            num_actions,
            glow: DEFAULT_GLOW,
            damp: DEFAULT_DAMP,
            softmax: DEFAULT_SOFTMAX,
            seed: None,
        }
    }

    /// Set the glow (η) parameter.
    pub fn with_glow(mut self, glow: f64) -> Self {
        self.glow = glow;
        self
    }

    /// Set the damping (γ) parameter.
    pub fn with_damp(mut self, damp: f64) -> Self {
        self.damp = damp;
        self
    }

    /// Set the softmax (β) parameter.
    pub fn with_softmax(mut self, softmax: f64) -> Self {
        self.softmax = softmax;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter against its admissible range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.num_actions == 0 {
            return Err(Error::invalid_parameter(
                "num_actions",
                "must be a positive integer",
            ));
        }
        check_unit_interval("glow", self.glow)?;
        check_unit_interval("damp", self.damp)?;
        if !(self.softmax.is_finite() && self.softmax > 0.0) {
            return Err(Error::invalid_parameter(
                "softmax",
                format!("must be a positive finite number, got {}", self.softmax),
            ));
        }
        Ok(())
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            name,
            format!("must lie in [0, 1], got {value}"),
        ))
    }
}
