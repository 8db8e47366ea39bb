use crate::error::{FistBumpError, Result};
use crate::hooks::lifecycle::{HookInstall, HookType, HookUninstall, HOOK_MARKER};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Check whether a file at `path` is a hook written by fist-bump
pub fn is_fist_bump_hook(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| content.contains(HOOK_MARKER))
        .unwrap_or(false)
}

/// Backup filename for an existing foreign hook
fn backup_path(hook_path: &Path) -> PathBuf {
    let name = hook_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    hook_path.with_file_name(format!("{}.pre-fist-bump", name))
}

fn hook_path(git_dir: &Path, hook: HookType) -> PathBuf {
    git_dir.join("hooks").join(hook.name())
}

/// Install the `post-commit` hook into `<git_dir>/hooks`
///
/// # Arguments
/// * `git_dir` - The repository's `.git` directory
///
/// # Returns
/// * `Ok(HookInstall)` - What was done
/// * `Err` - If the hooks directory or script cannot be written
pub fn install_hook(git_dir: &Path) -> Result<HookInstall> {
    let hook = HookType::PostCommit;
    let path = hook_path(git_dir, hook);

    if path.exists() && is_fist_bump_hook(&path) {
        debug!(hook = %hook, "hook already installed");
        return Ok(HookInstall::AlreadyInstalled { path });
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            FistBumpError::hook(format!("Cannot create {}: {}", dir.display(), e))
        })?;
    }

    let mut backup = None;
    if path.exists() {
        let target = backup_path(&path);
        info!(hook = %hook, backup = %target.display(), "backing up existing hook");
        fs::rename(&path, &target).map_err(|e| {
            FistBumpError::hook(format!("Failed to back up existing {} hook: {}", hook, e))
        })?;
        backup = Some(target);
    }

    fs::write(&path, hook.script())
        .map_err(|e| FistBumpError::hook(format!("Failed to write {} hook: {}", hook, e)))?;
    make_executable(&path)?;

    debug!(hook = %hook, path = %path.display(), "installed hook");
    Ok(match backup {
        Some(backup) => HookInstall::InstalledWithBackup { path, backup },
        None => HookInstall::Installed { path },
    })
}

/// Remove the fist-bump `post-commit` hook, restoring a backup if present
///
/// A hook not written by fist-bump is left alone.
pub fn uninstall_hook(git_dir: &Path) -> Result<HookUninstall> {
    let hook = HookType::PostCommit;
    let path = hook_path(git_dir, hook);

    if !path.exists() {
        debug!(hook = %hook, "hook not installed, nothing to remove");
        return Ok(HookUninstall::NotInstalled);
    }

    if !is_fist_bump_hook(&path) {
        warn!(hook = %hook, "hook exists but is not managed by fist-bump, skipping");
        return Ok(HookUninstall::NotOurs { path });
    }

    fs::remove_file(&path)
        .map_err(|e| FistBumpError::hook(format!("Failed to remove {} hook: {}", hook, e)))?;

    let backup = backup_path(&path);
    if backup.exists() {
        info!(hook = %hook, "restoring backed up hook");
        fs::rename(&backup, &path)
            .map_err(|e| FistBumpError::hook(format!("Failed to restore backup: {}", e)))?;
        return Ok(HookUninstall::Restored { path });
    }

    debug!(hook = %hook, "uninstalled hook");
    Ok(HookUninstall::Removed { path })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| FistBumpError::hook(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
