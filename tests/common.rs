//! Common test utilities for the ps-agent test suite.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ps_agent::{
    Result,
    ports::{EpisodeSummary, Observer},
};

pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_tol(a, b, 1e-9)
}

pub fn approx_eq_tol(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Observer that records every event as a short string.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Observer for RecordingObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.record(format!("start {total_episodes}"));
        Ok(())
    }

    fn on_episode_start(&mut self, episode: usize) -> Result<()> {
        self.record(format!("episode {episode}"));
        Ok(())
    }

    fn on_step(
        &mut self,
        episode: usize,
        step: usize,
        percept: &str,
        action: usize,
        reward: f64,
    ) -> Result<()> {
        self.record(format!("step {episode}.{step} {percept} {action} {reward}"));
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, summary: EpisodeSummary) -> Result<()> {
        self.record(format!("end {episode} {}", summary.steps));
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.record("finish".to_string());
        Ok(())
    }
}
