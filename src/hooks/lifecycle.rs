use std::fmt;
use std::path::PathBuf;

/// Marker comment embedded in generated hook scripts
pub const HOOK_MARKER: &str = "# managed by fist-bump, remove with `fist-bump --uninstall`";

/// Git hooks fist-bump can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookType {
    PostCommit,
}

impl HookType {
    /// File name inside `.git/hooks/`
    pub fn name(&self) -> &'static str {
        match self {
            HookType::PostCommit => "post-commit",
        }
    }

    /// Shell script written for this hook
    pub fn script(&self) -> String {
        format!(
            "#!/bin/sh\n{marker}\nexec fist-bump \"$@\"\n",
            marker = HOOK_MARKER
        )
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What `install_hook` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInstall {
    Installed { path: PathBuf },
    /// A foreign hook was moved aside first
    InstalledWithBackup { path: PathBuf, backup: PathBuf },
    AlreadyInstalled { path: PathBuf },
}

/// What `uninstall_hook` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookUninstall {
    Removed { path: PathBuf },
    /// Our hook was removed and the backed-up hook put back
    Restored { path: PathBuf },
    NotInstalled,
    /// The hook file exists but was not written by fist-bump
    NotOurs { path: PathBuf },
}
