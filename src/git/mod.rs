//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations a bump needs, allowing for a real implementation and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Orchestration code depends on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use fist_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> fist_bump::Result<()> {
//! let message = repo.head_message()?;
//! repo.amend_head_message(&format!("(v1.0.1) {}", message))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Common git operation trait for abstraction
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to [crate::error::FistBumpError].
pub trait Repository: Send + Sync {
    /// Full message of the commit HEAD points to
    ///
    /// # Returns
    /// * `Ok(String)` - The raw message, header and body
    /// * `Err` - If HEAD is unborn or there's a Git error
    fn head_message(&self) -> Result<String>;

    /// Root of the working tree
    ///
    /// # Returns
    /// * `Err` - For bare repositories
    fn workdir(&self) -> Result<PathBuf>;

    /// The `.git` directory
    fn git_dir(&self) -> PathBuf;

    /// Add files to the index
    ///
    /// # Arguments
    /// * `paths` - Absolute paths inside the working tree, or paths relative to it
    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()>;

    /// Rewrite the HEAD commit with a new message and the current index tree
    ///
    /// No git hooks run, so calling this from a `post-commit` hook cannot
    /// trigger the hook again.
    fn amend_head_message(&self, message: &str) -> Result<()>;
}

/// Express `path` relative to `workdir`, leaving relative paths untouched
pub(crate) fn relative_to(workdir: &Path, path: &Path) -> Result<PathBuf> {
    if path.is_relative() {
        return Ok(path.to_path_buf());
    }

    path.strip_prefix(workdir)
        .map(Path::to_path_buf)
        .map_err(|_| {
            crate::error::FistBumpError::manifest(format!(
                "{} is outside the working tree {}",
                path.display(),
                workdir.display()
            ))
        })
}
