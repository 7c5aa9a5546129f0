//! Shared argument groups for CLI commands

use clap::{Args, ValueEnum};

use crate::{
    AgentConfig, Result,
    environments::{GridWorld, InvasionGame},
    pipeline::TrainingConfig,
};

/// Environment to train in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvKind {
    /// Invasion game (one decision per episode)
    Invasion,
    /// Grid world navigation (reward only at the goal)
    GridWorld,
}

/// Environment selection and parameters
#[derive(Args, Debug, Clone)]
pub struct EnvArgs {
    /// Environment to train in
    #[arg(long, value_enum, default_value_t = EnvKind::Invasion)]
    pub env: EnvKind,

    /// Number of attacker symbols (invasion game)
    #[arg(long, default_value_t = 2)]
    pub symbols: usize,

    /// Reverse symbol meanings after this many trials (invasion game)
    #[arg(long)]
    pub reverse_at: Option<usize>,

    /// Grid width (grid world)
    #[arg(long, default_value_t = 5)]
    pub width: usize,

    /// Grid height (grid world)
    #[arg(long, default_value_t = 5)]
    pub height: usize,
}

impl EnvArgs {
    /// Build the invasion game; the attacker's RNG is seeded from `seed` when given.
    pub fn invasion(&self, seed: Option<u64>) -> Result<InvasionGame> {
        let mut game = InvasionGame::new(self.symbols)?;
        if let Some(seed) = seed {
            game = game.with_seed(seed.wrapping_add(1));
        }
        if let Some(trial) = self.reverse_at {
            game = game.with_reversal(trial);
        }
        Ok(game)
    }

    pub fn grid_world(&self) -> Result<GridWorld> {
        GridWorld::new(self.width, self.height)
    }
}

/// PS agent parameters
#[derive(Args, Debug, Clone)]
pub struct AgentArgs {
    /// Glow decay rate η in [0, 1]
    #[arg(long, default_value_t = crate::config::DEFAULT_GLOW)]
    pub glow: f64,

    /// Damping rate γ in [0, 1]
    #[arg(long, default_value_t = crate::config::DEFAULT_DAMP)]
    pub damp: f64,

    /// Softmax inverse temperature β
    #[arg(long, default_value_t = crate::config::DEFAULT_SOFTMAX)]
    pub softmax: f64,
}

impl AgentArgs {
    pub fn to_config(&self, num_actions: usize, seed: Option<u64>) -> AgentConfig {
        let config = AgentConfig::new(num_actions)
            .with_glow(self.glow)
            .with_damp(self.damp)
            .with_softmax(self.softmax);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Training run length and seeding
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Step limit per episode
    #[arg(long, default_value_t = 100)]
    pub max_steps: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl RunArgs {
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            num_episodes: self.episodes,
            max_steps_per_episode: self.max_steps,
            seed: self.seed,
        }
    }
}
