use semver::Version;
use std::fmt;

use crate::error::{FistBumpError, Result};

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Lowercase name of the bump, as used in messages and config
    pub fn name(&self) -> &'static str {
        match self {
            VersionBump::Patch => "patch",
            VersionBump::Minor => "minor",
            VersionBump::Major => "major",
        }
    }

    /// Bump a version according to this bump type
    ///
    /// Lower components reset to zero. Pre-release and build metadata are
    /// dropped, so `1.2.3-beta.1` patches to `1.2.4`. Fails when the bumped
    /// component is already `u64::MAX`.
    pub fn apply(&self, version: &Version) -> Result<Version> {
        let next = |component: u64| {
            component.checked_add(1).ok_or_else(|| {
                FistBumpError::version(format!("cannot {} bump {}: overflow", self, version))
            })
        };

        Ok(match self {
            VersionBump::Major => Version::new(next(version.major)?, 0, 0),
            VersionBump::Minor => Version::new(version.major, next(version.minor)?, 0),
            VersionBump::Patch => Version::new(version.major, version.minor, next(version.patch)?),
        })
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
