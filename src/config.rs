//! Archive configuration (`arcgen.toml`).
//!
//! One `[archive]`-shaped table per run: where the archive lives, which
//! layout renders it, and how it paginates. Loaded from TOML with every
//! field defaulted, then validated before any generation math runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::NUM_TOKEN;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Policy for group keys that slugify to the empty string.
///
/// The source behavior was inconsistent here, so it is a configuration
/// choice rather than a hardcoded rule: `reject` fails the group,
/// `allow` emits a root-level page at the base directory.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmptyKeys {
    /// Fail a group whose key slugifies to nothing (default).
    #[default]
    Reject,
    /// Emit the group's pages at the base directory itself.
    Allow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Identifier for the whole archive type (e.g. "category").
    pub archive_id: String,
    /// Directory all group archives live under, relative to site root.
    pub base_dir: String,
    /// Layout resource handed to the renderer with each page record.
    pub template_path: PathBuf,
    /// Items per page; absent disables pagination entirely.
    pub per_page: Option<usize>,
    /// Path fragment for pages 2+, containing the `:num` token.
    pub paginate_path_template: String,
    /// What to do with group keys that slugify to the empty string.
    pub empty_keys: EmptyKeys,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            archive_id: "archive".to_owned(),
            base_dir: String::new(),
            template_path: PathBuf::from("archive.html"),
            per_page: None,
            paginate_path_template: "page:num/".to_owned(),
            empty_keys: EmptyKeys::Reject,
        }
    }
}

impl ArchiveConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations whose downstream math or paths would be
    /// silently wrong: a zero page size and a template that can never
    /// substitute a page number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == Some(0) {
            return Err(ConfigError::Validation(
                "[per_page] must be at least 1; omit it to disable pagination".to_owned(),
            ));
        }
        let tokens = self.paginate_path_template.matches(NUM_TOKEN).count();
        if tokens == 0 {
            return Err(ConfigError::Validation(format!(
                "[paginate_path_template] `{}` has no `{NUM_TOKEN}` token; \
                 every page past the first would share one path",
                self.paginate_path_template
            )));
        }
        if tokens > 1 {
            crate::log!("config"; "paginate_path_template `{}` has {tokens} `{NUM_TOKEN}` tokens; all will be substituted",
                self.paginate_path_template);
        }
        Ok(())
    }
}
