//! Ports (trait boundaries) between the agent core and its collaborators.
//!
//! Learners, environments and observers are owned by the domain as traits
//! and implemented by adapters elsewhere in the crate (or by callers).

pub mod environment;
pub mod learner;
pub mod observer;

pub use environment::{Environment, Transition};
pub use learner::Learner;
pub use observer::{EpisodeSummary, Observer};
