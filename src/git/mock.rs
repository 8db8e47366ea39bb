use crate::error::{FistBumpError, Result};
use crate::git::Repository;
use std::path::PathBuf;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    workdir: PathBuf,
    message: Mutex<Option<String>>,
    staged: Mutex<Vec<PathBuf>>,
    amended: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a mock whose HEAD carries `message`
    pub fn new(workdir: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        MockRepository {
            workdir: workdir.into(),
            message: Mutex::new(Some(message.into())),
            staged: Mutex::new(Vec::new()),
            amended: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock with an unborn HEAD
    pub fn empty(workdir: impl Into<PathBuf>) -> Self {
        let repo = MockRepository::new(workdir, "");
        *repo.message.lock().unwrap_or_else(|e| e.into_inner()) = None;
        repo
    }

    /// Paths staged so far, in order
    pub fn staged(&self) -> Vec<PathBuf> {
        self.staged.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Messages passed to `amend_head_message`, in order
    pub fn amended(&self) -> Vec<String> {
        self.amended.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Repository for MockRepository {
    fn head_message(&self) -> Result<String> {
        self.message
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or_else(|| FistBumpError::Git(git2::Error::from_str("reference 'HEAD' not found")))
    }

    fn workdir(&self) -> Result<PathBuf> {
        Ok(self.workdir.clone())
    }

    fn git_dir(&self) -> PathBuf {
        self.workdir.join(".git")
    }

    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()> {
        self.staged
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(paths.iter().cloned());
        Ok(())
    }

    fn amend_head_message(&self, message: &str) -> Result<()> {
        self.amended
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
        *self.message.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
        Ok(())
    }
}
