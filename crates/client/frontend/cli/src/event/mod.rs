//! Event processing for the CLI frontend.
mod jobs;
mod r#loop;

pub use jobs::{AttackReport, Job, JobOutcome};
pub use r#loop::EventLoop;
