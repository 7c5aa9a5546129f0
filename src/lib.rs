//! Projective Simulation (PS) reinforcement learning agent
//!
//! This crate provides:
//! - A two-layer PS agent: percept clips connected to action clips through
//!   h-values (learned strength) and g-values (glow)
//! - Learner / environment / observer ports for driving agents in a loop
//! - Reference environments (invasion game, grid world)
//! - A training pipeline with progress, metrics and tracing observers
//!
//! ```
//! use ps_agent::{AgentConfig, PsAgent};
//!
//! let mut agent = PsAgent::from_config(AgentConfig::new(2).with_seed(1)).unwrap();
//! let action = agent.predict("A").unwrap();
//! agent.train(1.0).unwrap();
//! assert_eq!(agent.h_matrix().get(0, action), Some(2.0));
//! ```

pub mod cli;
pub mod config;
pub mod environments;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod ps;
pub mod utils;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use ps::{EdgeMatrix, PerceptTable, PsAgent};
