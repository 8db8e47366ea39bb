//! Workflow entry points shared by the binary and tests

pub mod orchestration;

pub use orchestration::{run_bump, BumpOutcome, BumpWorkflowArgs};
