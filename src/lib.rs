pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod hooks;
pub mod manifest;
pub mod ui;

pub use error::{FistBumpError, Result};
