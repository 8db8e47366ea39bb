//! Classification of commit messages into version bumps

pub mod classifier;

pub use classifier::{classify, Classifier};
