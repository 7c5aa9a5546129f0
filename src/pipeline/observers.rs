//! Observer implementations for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! training logic to specific output formats.

use std::sync::{Arc, Mutex, PoisonError};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    ports::{EpisodeSummary, Observer},
    utils::mean,
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_reward: f64,
    episodes: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_reward: 0.0,
            episodes: 0,
        }
    }

    fn message(&self) -> String {
        let mean_reward = if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f64
        };
        format!("mean reward {mean_reward:.3}")
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, summary: EpisodeSummary) -> Result<()> {
        self.episodes += 1;
        self.total_reward += summary.reward;

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Per-episode history recorded by [`MetricsObserver`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardHistory {
    pub episode_rewards: Vec<f64>,
    pub episode_steps: Vec<usize>,
}

impl RewardHistory {
    /// Mean reward of consecutive blocks of `window` episodes.
    ///
    /// A trailing partial block is averaged over its own length.
    pub fn learning_curve(&self, window: usize) -> Vec<f64> {
        if window == 0 {
            return Vec::new();
        }
        self.episode_rewards.chunks(window).map(mean).collect()
    }

    pub fn mean_reward(&self) -> f64 {
        mean(&self.episode_rewards)
    }

    pub fn mean_steps(&self) -> f64 {
        if self.episode_steps.is_empty() {
            0.0
        } else {
            self.episode_steps.iter().sum::<usize>() as f64 / self.episode_steps.len() as f64
        }
    }
}

/// Metrics observer - Tracks per-episode rewards and lengths
///
/// The pipeline owns its observers, so the history lives behind a shared
/// handle that stays readable after the observer has been boxed.
///
/// ```
/// use ps_agent::pipeline::MetricsObserver;
///
/// let observer = MetricsObserver::new();
/// let history = observer.history();
/// // ... pass `Box::new(observer)` to a pipeline and run it ...
/// assert!(history.snapshot().episode_rewards.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MetricsObserver {
    history: MetricsHandle,
}

/// Shared read handle onto a [`MetricsObserver`]'s history
#[derive(Debug, Clone, Default)]
pub struct MetricsHandle(Arc<Mutex<RewardHistory>>);

impl MetricsHandle {
    /// Copy of the history recorded so far
    pub fn snapshot(&self) -> RewardHistory {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for reading the history after training
    pub fn history(&self) -> MetricsHandle {
        self.history.clone()
    }
}

impl Observer for MetricsObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let mut history = self
            .history
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        history.episode_rewards.reserve(total_episodes);
        history.episode_steps.reserve(total_episodes);
        Ok(())
    }

    fn on_episode_end(&mut self, _episode: usize, summary: EpisodeSummary) -> Result<()> {
        let mut history = self
            .history
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        history.episode_rewards.push(summary.reward);
        history.episode_steps.push(summary.steps);
        Ok(())
    }
}

/// Tracing observer - Logs a rolling summary every `interval` episodes
pub struct TracingObserver {
    interval: usize,
    window_reward: f64,
    window_steps: usize,
    window_episodes: usize,
}

impl TracingObserver {
    /// Log every `interval` episodes (an interval of zero is treated as one).
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            window_reward: 0.0,
            window_steps: 0,
            window_episodes: 0,
        }
    }
}

impl Observer for TracingObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        info!(total_episodes, "training started");
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, summary: EpisodeSummary) -> Result<()> {
        self.window_reward += summary.reward;
        self.window_steps += summary.steps;
        self.window_episodes += 1;

        if self.window_episodes == self.interval {
            let n = self.window_episodes as f64;
            info!(
                episode = episode + 1,
                mean_reward = self.window_reward / n,
                mean_steps = self.window_steps as f64 / n,
                "training progress"
            );
            self.window_reward = 0.0;
            self.window_steps = 0;
            self.window_episodes = 0;
        }
        Ok(())
    }
}
