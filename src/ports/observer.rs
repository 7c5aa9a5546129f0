//! Observer port - abstraction for training observation and data collection
//!
//! Observers receive training events so that progress reporting and metrics
//! stay decoupled from the training loop.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Totals for one finished episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Steps taken in the episode
    pub steps: usize,
    /// Sum of rewards received
    pub reward: f64,
    /// Whether the environment ended the episode (as opposed to the step limit)
    pub completed: bool,
}

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - once
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - after each predict → step → train cycle
///    - `on_episode_end(episode, summary)`
/// 3. `on_training_end()` - once
///
/// # Examples
///
/// ```
/// use ps_agent::ports::{EpisodeSummary, Observer};
///
/// struct RewardCounter {
///     total: f64,
/// }
///
/// impl Observer for RewardCounter {
///     fn on_episode_end(&mut self, _episode: usize, summary: EpisodeSummary) -> ps_agent::Result<()> {
///         self.total += summary.reward;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts (`episode` is 0-based).
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after the learner has been trained on a step's reward.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the current episode
    /// * `step` - Step number within the episode (0-based)
    /// * `percept` - String form of the observation the action was chosen for
    /// * `action` - Action chosen
    /// * `reward` - Reward received for the action
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _percept: &str,
        _action: usize,
        _reward: f64,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends.
    fn on_episode_end(&mut self, _episode: usize, _summary: EpisodeSummary) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
