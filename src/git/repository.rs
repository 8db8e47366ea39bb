use crate::error::{FistBumpError, Result};
use crate::git::relative_to;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
///
/// `git2::Repository` is `Send` but not `Sync`; the mutex makes the wrapper
/// shareable.
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Git2Repo>> {
        self.repo
            .lock()
            .map_err(|_| FistBumpError::Git(git2::Error::from_str("repository lock poisoned")))
    }
}

impl super::Repository for Git2Repository {
    fn head_message(&self) -> Result<String> {
        let repo = self.lock()?;
        let commit = repo.head()?.peel_to_commit()?;

        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }

    fn workdir(&self) -> Result<PathBuf> {
        let repo = self.lock()?;
        repo.workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| FistBumpError::Git(git2::Error::from_str("repository is bare")))
    }

    fn git_dir(&self) -> PathBuf {
        match self.lock() {
            Ok(repo) => repo.path().to_path_buf(),
            Err(_) => PathBuf::from(".git"),
        }
    }

    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()> {
        let workdir = self.workdir()?.canonicalize()?;
        let repo = self.lock()?;
        let mut index = repo.index()?;

        for path in paths {
            let absolute = if path.is_absolute() {
                path.canonicalize()?
            } else {
                path.clone()
            };
            let relative = relative_to(&workdir, &absolute)?;
            debug!(path = %relative.display(), "staging");
            index.add_path(&relative)?;
        }

        index.write()?;
        Ok(())
    }

    fn amend_head_message(&self, message: &str) -> Result<()> {
        let repo = self.lock()?;
        let head = repo.head()?.peel_to_commit()?;

        let mut index = repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let oid = head.amend(Some("HEAD"), None, None, None, Some(message), Some(&tree))?;
        debug!(old = %head.id(), new = %oid, "amended HEAD");

        Ok(())
    }
}
