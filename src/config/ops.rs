use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Keys accepted by [`Config::get_value`] and [`Config::set_value`].
    pub const KEYS: &'static [&'static str] = &[
        "editor.command",
        "sources.interpreter_ini",
        "sources.config_paths",
        "sources.alias_dirs",
        "site.conf_dir",
        "site.app_root",
    ];

    /// Location of the config file.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("confedit").join("config.toml"))
    }

    /// Load from [`Config::path`], falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match key {
            "editor.command" => self.editor.command.clone().unwrap_or_default(),
            "sources.interpreter_ini" => display_opt(self.sources.interpreter_ini.as_deref()),
            "sources.config_paths" => join_paths(&self.sources.config_paths),
            "sources.alias_dirs" => join_paths(&self.sources.alias_dirs),
            "site.conf_dir" => display_opt(self.site.conf_dir.as_deref()),
            "site.app_root" => display_opt(self.site.app_root.as_deref()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a config value by dot-separated key path. Lists are comma separated;
    /// an empty value clears the key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor.command" => {
                self.editor.command = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "sources.interpreter_ini" => self.sources.interpreter_ini = opt_path(value),
            "sources.config_paths" => self.sources.config_paths = split_paths(value),
            "sources.alias_dirs" => self.sources.alias_dirs = split_paths(value),
            "site.conf_dir" => self.site.conf_dir = opt_path(value),
            "site.app_root" => self.site.app_root = opt_path(value),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown config key: {key} (expected one of: {})",
        Config::KEYS.join(", ")
    )
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn opt_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() { None } else { Some(PathBuf::from(value)) }
}

fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
