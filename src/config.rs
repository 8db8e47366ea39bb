use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::keyword::{
    to_owned_list, DEFAULT_MAJOR_KEYWORDS, DEFAULT_MINOR_KEYWORDS, DEFAULT_PATCH_KEYWORDS,
    DEFAULT_SKIP_KEYWORDS,
};
use crate::domain::{BracketStyle, KeywordSet, TagPosition, TagStyle};
use crate::error::{FistBumpError, Result};

/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = "fistbump.toml";

/// Key holding inline configuration in `package.json`
pub const PACKAGE_JSON_KEY: &str = "fistbump";

/// Represents the complete configuration for fist-bump.
///
/// Contains the keyword lists per bump severity, the skip keywords, and where
/// and how the version tag is written into the commit header.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_patch_keywords")]
    pub patch: Vec<String>,

    #[serde(default = "default_minor_keywords")]
    pub minor: Vec<String>,

    #[serde(default = "default_major_keywords")]
    pub major: Vec<String>,

    #[serde(default = "default_skip_keywords")]
    pub skip: Vec<String>,

    #[serde(default)]
    pub position: TagPosition,

    #[serde(default)]
    pub bracket: BracketStyle,
}

fn default_patch_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_PATCH_KEYWORDS)
}

fn default_minor_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_MINOR_KEYWORDS)
}

fn default_major_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_MAJOR_KEYWORDS)
}

fn default_skip_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_SKIP_KEYWORDS)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            patch: default_patch_keywords(),
            minor: default_minor_keywords(),
            major: default_major_keywords(),
            skip: default_skip_keywords(),
            position: TagPosition::default(),
            bracket: BracketStyle::default(),
        }
    }
}

impl Config {
    /// Keyword lists used by the classifier
    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::new(self.patch.clone(), self.minor.clone(), self.major.clone())
    }

    /// Tag style used by the formatter
    pub fn tag_style(&self) -> TagStyle {
        TagStyle::new(self.bracket, self.position)
    }

    /// A bump keyword list given as empty keeps the built-in keywords. The
    /// skip list is taken as written, so `skip = []` turns skipping off.
    fn with_empty_lists_defaulted(mut self) -> Self {
        let fill = |list: &mut Vec<String>, defaults: fn() -> Vec<String>| {
            if list.iter().all(|k| k.trim().is_empty()) {
                *list = defaults();
            }
        };
        fill(&mut self.patch, default_patch_keywords);
        fill(&mut self.minor, default_minor_keywords);
        fill(&mut self.major, default_major_keywords);
        self
    }
}

/// Where the configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    PackageJson(PathBuf),
    Defaults,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `fistbump.toml` in the project root
/// 3. The `fistbump` key of `package.json` in the project root
/// 4. `fistbump/config.toml` in the user config directory
/// 5. Default configuration if nothing is found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `project_root` - Directory holding the project manifest
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, project_root: &Path) -> Result<Config> {
    let (config, source) = load_config_with_source(config_path, project_root)?;
    debug!(?source, "loaded configuration");
    Ok(config)
}

/// Same as [`load_config`], also reporting which source was used
pub fn load_config_with_source(
    config_path: Option<&Path>,
    project_root: &Path,
) -> Result<(Config, ConfigSource)> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(FistBumpError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok((read_toml(path)?, ConfigSource::File(path.to_path_buf())));
    }

    let project_file = project_root.join(CONFIG_FILE_NAME);
    if project_file.is_file() {
        return Ok((read_toml(&project_file)?, ConfigSource::File(project_file)));
    }

    let package_json = project_root.join("package.json");
    if package_json.is_file() {
        if let Some(config) = read_package_json(&package_json)? {
            return Ok((config, ConfigSource::PackageJson(package_json)));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_file = config_dir.join("fistbump").join("config.toml");
        if user_file.is_file() {
            return Ok((read_toml(&user_file)?, ConfigSource::File(user_file)));
        }
    }

    Ok((Config::default(), ConfigSource::Defaults))
}

fn read_toml(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| FistBumpError::config(format!("{}: {}", path.display(), e)))?;
    Ok(config.with_empty_lists_defaulted())
}

fn read_package_json(path: &Path) -> Result<Option<Config>> {
    let content = fs::read_to_string(path)?;
    let mut package: serde_json::Value = serde_json::from_str(&content)?;

    match package.get_mut(PACKAGE_JSON_KEY).map(serde_json::Value::take) {
        Some(serde_json::Value::Null) | None => Ok(None),
        Some(section) => {
            let config: Config = serde_json::from_value(section).map_err(|e| {
                FistBumpError::config(format!(
                    "{}: invalid \"{}\" section: {}",
                    path.display(),
                    PACKAGE_JSON_KEY,
                    e
                ))
            })?;
            Ok(Some(config.with_empty_lists_defaulted()))
        }
    }
}
