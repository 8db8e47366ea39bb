//! Git hook installation
//!
//! Installs a `post-commit` hook that runs fist-bump after every commit:
//! - install: write the hook, backing up any foreign hook already there
//! - uninstall: remove our hook and restore the backup

pub mod installer;
pub mod lifecycle;

pub use installer::{install_hook, is_fist_bump_hook, uninstall_hook};
pub use lifecycle::{HookInstall, HookType, HookUninstall};
