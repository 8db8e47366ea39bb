//! Project manifest discovery and version rewriting.
//!
//! Two manifest kinds are understood:
//!
//! - npm: `package.json`, with `package-lock.json` and `pnpm-lock.yaml`
//! - Cargo: `Cargo.toml`, with `Cargo.lock`
//!
//! JSON files are rewritten through `serde_json` with key order preserved.
//! TOML files are edited in place with `toml_edit` so comments and layout
//! survive.

use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;
use tracing::{debug, info};

use crate::domain::VersionBump;
use crate::error::{FistBumpError, Result};

/// How many parent directories to climb looking for a manifest
pub const MAX_SEARCH_DEPTH: usize = 5;

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_LOCK: &str = "package-lock.json";
const PNPM_LOCK: &str = "pnpm-lock.yaml";
const CARGO_TOML: &str = "Cargo.toml";
const CARGO_LOCK: &str = "Cargo.lock";

/// Kind of project manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Npm,
    Cargo,
}

impl ManifestKind {
    /// File name of the manifest itself
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Npm => PACKAGE_JSON,
            ManifestKind::Cargo => CARGO_TOML,
        }
    }

    /// Detect the manifest kind of a directory; `package.json` wins over `Cargo.toml`
    pub fn detect(dir: &Path) -> Option<Self> {
        [ManifestKind::Npm, ManifestKind::Cargo]
            .into_iter()
            .find(|kind| dir.join(kind.file_name()).is_file())
    }
}

/// Finds the closest directory at or above `start` holding a manifest.
///
/// Climbs at most [`MAX_SEARCH_DEPTH`] parent directories, and never above
/// `ceiling` when one is given.
pub fn find_project_root(start: &Path, ceiling: Option<&Path>) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_SEARCH_DEPTH + 1)
        .take_while(|dir| ceiling.map_or(true, |ceiling| dir.starts_with(ceiling)))
        .find(|dir| ManifestKind::detect(dir).is_some())
        .map(Path::to_path_buf)
}

/// Result of writing a bumped version
#[derive(Debug, Clone, PartialEq)]
pub struct BumpedManifest {
    pub previous: Version,
    pub current: Version,
    /// Files that were rewritten or should be staged alongside the manifest
    pub changed: Vec<PathBuf>,
}

/// A project manifest at a known root
#[derive(Debug, Clone)]
pub struct Manifest {
    root: PathBuf,
    kind: ManifestKind,
}

impl Manifest {
    /// Open the manifest in `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let kind = ManifestKind::detect(&root).ok_or_else(|| {
            FistBumpError::manifest(format!(
                "No {} or {} found in {}",
                PACKAGE_JSON,
                CARGO_TOML,
                root.display()
            ))
        })?;

        Ok(Manifest { root, kind })
    }

    /// Locate the project root from `start` and open its manifest
    ///
    /// The search stops at `ceiling`, usually the working tree root.
    pub fn discover(start: &Path, ceiling: Option<&Path>) -> Result<Self> {
        let root = find_project_root(start, ceiling).ok_or_else(|| {
            FistBumpError::manifest(format!(
                "No project manifest found within {} levels of {}",
                MAX_SEARCH_DEPTH,
                start.display()
            ))
        })?;
        Manifest::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    /// Full path of the manifest file
    pub fn path(&self) -> PathBuf {
        self.root.join(self.kind.file_name())
    }

    /// Current version recorded in the manifest
    pub fn version(&self) -> Result<Version> {
        let raw = match self.kind {
            ManifestKind::Npm => {
                let package = read_json(&self.path())?;
                package
                    .get("version")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            }
            ManifestKind::Cargo => {
                let doc = read_toml(&self.path())?;
                doc.get("package")
                    .and_then(|package| package.get("version"))
                    .and_then(|version| version.as_str())
                    .map(str::to_string)
            }
        };

        let raw = raw.ok_or_else(|| {
            FistBumpError::manifest(format!(
                "{} has no literal version field",
                self.path().display()
            ))
        })?;

        Ok(Version::parse(raw.trim())?)
    }

    /// Version that `bump` would write, without touching any file
    pub fn next_version(&self, bump: VersionBump) -> Result<Version> {
        bump.apply(&self.version()?)
    }

    /// Apply a bump to the manifest and its lockfiles
    pub fn bump(&self, bump: VersionBump) -> Result<BumpedManifest> {
        let previous = self.version()?;
        let current = bump.apply(&previous)?;

        let changed = match self.kind {
            ManifestKind::Npm => self.write_npm(&current)?,
            ManifestKind::Cargo => self.write_cargo(&previous, &current)?,
        };

        info!(%previous, %current, files = changed.len(), "wrote bumped version");
        Ok(BumpedManifest {
            previous,
            current,
            changed,
        })
    }

    fn write_npm(&self, version: &Version) -> Result<Vec<PathBuf>> {
        let manifest_path = self.path();
        let mut package = read_json(&manifest_path)?;
        set_json_version(&mut package, version);
        write_json(&manifest_path, &package)?;

        let mut changed = vec![manifest_path];

        let lock_path = self.root.join(PACKAGE_LOCK);
        if lock_path.is_file() {
            let mut lock = read_json(&lock_path)?;
            let mut updated = false;
            if lock.get("version").is_some() {
                set_json_version(&mut lock, version);
                updated = true;
            }
            if let Some(root_package) = lock
                .get_mut("packages")
                .and_then(|packages| packages.get_mut(""))
            {
                if root_package.get("version").is_some() {
                    set_json_version(root_package, version);
                    updated = true;
                }
            }

            if updated {
                write_json(&lock_path, &lock)?;
                changed.push(lock_path);
            } else {
                debug!("no version field in {}", PACKAGE_LOCK);
            }
        }

        // pnpm keeps no root version in its lockfile, it only gets staged
        let pnpm_path = self.root.join(PNPM_LOCK);
        if pnpm_path.is_file() {
            changed.push(pnpm_path);
        }

        Ok(changed)
    }

    fn write_cargo(&self, previous: &Version, version: &Version) -> Result<Vec<PathBuf>> {
        let manifest_path = self.path();
        let mut doc = read_toml(&manifest_path)?;

        let name = doc
            .get("package")
            .and_then(|package| package.get("name"))
            .and_then(|name| name.as_str())
            .map(str::to_string);

        let package = doc
            .get_mut("package")
            .and_then(|package| package.as_table_like_mut())
            .ok_or_else(|| {
                FistBumpError::manifest(format!(
                    "{} has no [package] table",
                    manifest_path.display()
                ))
            })?;
        package.insert("version", toml_edit::value(version.to_string()));
        fs::write(&manifest_path, doc.to_string())?;

        let mut changed = vec![manifest_path];

        let lock_path = self.root.join(CARGO_LOCK);
        if let (Some(name), true) = (name, lock_path.is_file()) {
            let mut lock = read_toml(&lock_path)?;
            let mut updated = false;

            if let Some(packages) = lock
                .get_mut("package")
                .and_then(|packages| packages.as_array_of_tables_mut())
            {
                let previous = previous.to_string();
                for entry in packages.iter_mut() {
                    let is_ours = entry.get("name").and_then(|n| n.as_str()) == Some(name.as_str())
                        && entry.get("version").and_then(|v| v.as_str()) == Some(previous.as_str());
                    if is_ours {
                        entry.insert("version", toml_edit::value(version.to_string()));
                        updated = true;
                    }
                }
            }

            if updated {
                fs::write(&lock_path, lock.to_string())?;
                changed.push(lock_path);
            } else {
                debug!(package = %name, "no matching entry in Cargo.lock");
            }
        }

        Ok(changed)
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

fn set_json_version(value: &mut serde_json::Value, version: &Version) {
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "version".to_string(),
            serde_json::Value::String(version.to_string()),
        );
    }
}

fn read_toml(path: &Path) -> Result<DocumentMut> {
    let content = fs::read_to_string(path)?;
    Ok(content.parse::<DocumentMut>()?)
}
