//! Persisted configuration.

mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted settings, read from `~/.config/confedit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor used to open the chosen file.
    pub editor: EditorConfig,
    /// Where the run-control, interpreter and alias files live.
    pub sources: SourcesConfig,
    /// The host application site whose settings are offered.
    pub site: SiteConfig,
}

/// Editor settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Command template with one `%s` for the path, e.g. "vim %s" or "code --wait %s"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Candidate file locations that cannot be discovered on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// The ini file loaded by the active interpreter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter_ini: Option<PathBuf>,
    /// Extra run-control files.
    pub config_paths: Vec<PathBuf>,
    /// Directories scanned for `*.site.yml` alias files.
    pub alias_dirs: Vec<PathBuf>,
}

/// Host application site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory containing `settings.php`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_dir: Option<PathBuf>,
    /// Application root; defaults to `conf_dir`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_root: Option<PathBuf>,
}
