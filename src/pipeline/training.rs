//! Training pipeline driving a learner through an environment

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Environment, EpisodeSummary, Learner, Observer},
    utils::mean,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub num_episodes: usize,

    /// Step limit after which an unfinished episode is cut off
    pub max_steps_per_episode: usize,

    /// Random seed handed to the learner
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_episodes: 1000,
            max_steps_per_episode: 100,
            seed: None,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Learner name
    pub learner: String,

    /// Environment name
    pub environment: String,

    /// Total episodes played
    pub total_episodes: usize,

    /// Episodes ended by the environment rather than the step limit
    pub completed_episodes: usize,

    /// Total steps across all episodes
    pub total_steps: usize,

    /// Sum of all rewards
    pub total_reward: f64,

    pub mean_reward_per_episode: f64,

    pub mean_steps_per_episode: f64,

    /// Mean reward per episode over the last tenth of the run (at least one episode)
    pub final_window_reward: f64,
}

impl TrainingResult {
    /// Summarise a sequence of episodes.
    pub fn from_episodes(
        learner: impl Into<String>,
        environment: impl Into<String>,
        episodes: &[EpisodeSummary],
    ) -> Self {
        let rewards: Vec<f64> = episodes.iter().map(|e| e.reward).collect();
        let steps: Vec<f64> = episodes.iter().map(|e| e.steps as f64).collect();
        let window = (episodes.len() / 10).max(1).min(episodes.len());

        Self {
            learner: learner.into(),
            environment: environment.into(),
            total_episodes: episodes.len(),
            completed_episodes: episodes.iter().filter(|e| e.completed).count(),
            total_steps: episodes.iter().map(|e| e.steps).sum(),
            total_reward: rewards.iter().sum(),
            mean_reward_per_episode: mean(&rewards),
            mean_steps_per_episode: mean(&steps),
            final_window_reward: mean(&rewards[rewards.len() - window..]),
        }
    }

    /// Pretty-printed JSON form
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Training pipeline for a single learner in an environment
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run `config.num_episodes` episodes.
    ///
    /// Every step is `predict → environment step → train`, so the learner is
    /// trained on each reward, including zero rewards that only decay glow.
    ///
    /// # Errors
    ///
    /// Propagates learner, environment and observer errors; returns
    /// [`Error::InvalidParameter`] if `max_steps_per_episode` is zero.
    pub fn run<E: Environment>(
        &mut self,
        learner: &mut dyn Learner,
        env: &mut E,
    ) -> Result<TrainingResult> {
        if self.config.max_steps_per_episode == 0 {
            return Err(Error::InvalidParameter {
                name: "max_steps_per_episode",
                reason: "must be at least 1".to_string(),
            });
        }

        if let Some(seed) = self.config.seed {
            learner.set_rng_seed(seed)?;
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_episodes)?;
        }

        let mut episodes = Vec::with_capacity(self.config.num_episodes);
        for episode in 0..self.config.num_episodes {
            let summary = self.run_episode(episode, learner, env)?;
            debug!(
                episode,
                steps = summary.steps,
                reward = summary.reward,
                "episode finished"
            );
            episodes.push(summary);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::from_episodes(learner.name(), env.name(), &episodes);
        info!(
            learner = %result.learner,
            environment = %result.environment,
            episodes = result.total_episodes,
            mean_reward = result.mean_reward_per_episode,
            final_window_reward = result.final_window_reward,
            "training finished"
        );
        Ok(result)
    }

    fn run_episode<E: Environment>(
        &mut self,
        episode: usize,
        learner: &mut dyn Learner,
        env: &mut E,
    ) -> Result<EpisodeSummary> {
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let mut summary = EpisodeSummary {
            steps: 0,
            reward: 0.0,
            completed: false,
        };

        let mut observation = env.reset();
        for step in 0..self.config.max_steps_per_episode {
            let percept = observation.to_string();
            let action = learner.predict(&percept)?;
            let transition = env.step(action)?;
            learner.train(transition.reward)?;

            for observer in &mut self.observers {
                observer.on_step(episode, step, &percept, action, transition.reward)?;
            }

            summary.steps += 1;
            summary.reward += transition.reward;
            if transition.done {
                summary.completed = true;
                break;
            }
            observation = transition.observation;
        }

        for observer in &mut self.observers {
            observer.on_episode_end(episode, summary)?;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(reward: f64, steps: usize) -> EpisodeSummary {
        EpisodeSummary {
            steps,
            reward,
            completed: true,
        }
    }

    #[test]
    fn result_from_no_episodes_is_zeroed() {
        let result = TrainingResult::from_episodes("PS", "env", &[]);
        assert_eq!(result.total_episodes, 0);
        assert_eq!(result.total_steps, 0);
        assert_eq!(result.mean_reward_per_episode, 0.0);
        assert_eq!(result.final_window_reward, 0.0);
    }

    #[test]
    fn final_window_covers_last_tenth() {
        let mut episodes: Vec<_> = (0..90).map(|_| summary(0.0, 1)).collect();
        episodes.extend((0..10).map(|_| summary(1.0, 3)));
        let result = TrainingResult::from_episodes("PS", "env", &episodes);

        assert_eq!(result.total_episodes, 100);
        assert_eq!(result.total_steps, 120);
        assert_eq!(result.total_reward, 10.0);
        assert!((result.mean_reward_per_episode - 0.1).abs() < 1e-12);
        assert!((result.mean_steps_per_episode - 1.2).abs() < 1e-12);
        assert_eq!(result.final_window_reward, 1.0);
    }

    #[test]
    fn short_runs_use_last_episode_as_window() {
        let episodes = [summary(0.0, 1), summary(1.0, 1)];
        let result = TrainingResult::from_episodes("PS", "env", &episodes);
        assert_eq!(result.final_window_reward, 1.0);
    }

    #[test]
    fn result_serializes_to_json() {
        let result = TrainingResult::from_episodes("PS", "env", &[summary(1.0, 2)]);
        let json = result.to_json_pretty().unwrap();
        assert!(json.contains("\"learner\": \"PS\""));
        assert!(json.contains("\"total_episodes\": 1"));
    }
}
