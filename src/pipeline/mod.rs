//! Training pipeline abstractions
//!
//! This module provides composable pipelines for:
//! - Training learners in an environment
//! - Comparing learners on identical runs
//! - Recording observations during training

pub mod comparison;
pub mod observers;
pub mod training;

pub use comparison::{ComparisonFramework, ComparisonResult, RandomLearner};
pub use observers::{
    MetricsHandle, MetricsObserver, ProgressObserver, RewardHistory, TracingObserver,
};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Learner, Observer};
