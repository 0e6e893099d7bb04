use std::path::{Path, PathBuf};

use super::{Environment, Site, USER_DIR};
use crate::config::Config;

/// Suffix identifying alias files inside an alias directory.
pub const ALIAS_SUFFIX: &str = ".site.yml";

/// [`Environment`] backed by the process environment and the loaded [`Config`].
pub struct SystemEnvironment {
    config: Config,
    config_path: Option<PathBuf>,
}

impl SystemEnvironment {
    /// Wrap `config`; the config file itself is offered as a run-control file.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            config_path: Config::path().ok(),
        }
    }

    fn alias_dirs(&self) -> Vec<PathBuf> {
        if !self.config.sources.alias_dirs.is_empty() {
            return self.config.sources.alias_dirs.clone();
        }
        self.home_dir()
            .map(|h| vec![h.join(USER_DIR).join("sites")])
            .unwrap_or_default()
    }
}

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn interpreter_ini(&self) -> Option<PathBuf> {
        self.config.sources.interpreter_ini.clone()
    }

    fn base_dir(&self) -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
    }

    fn system_dir(&self) -> PathBuf {
        PathBuf::from("/etc/confedit")
    }

    fn runtime_config_paths(&self) -> Vec<PathBuf> {
        self.config_path
            .iter()
            .chain(&self.config.sources.config_paths)
            .filter(|p| p.exists())
            .cloned()
            .collect()
    }

    fn alias_file_paths(&self) -> Vec<PathBuf> {
        self.alias_dirs()
            .iter()
            .flat_map(|dir| list_alias_files(dir))
            .collect()
    }

    fn site(&self) -> Option<Site> {
        let conf_dir = self.config.site.conf_dir.clone()?;
        let app_root = self
            .config
            .site
            .app_root
            .clone()
            .unwrap_or_else(|| conf_dir.clone());
        Some(Site { conf_dir, app_root })
    }
}

/// Files in `dir` whose name ends with [`ALIAS_SUFFIX`]. An unreadable
/// directory yields nothing.
pub(crate) fn list_alias_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "skipping alias directory");
            return Vec::new();
        }
    };
    entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(ALIAS_SUFFIX))
        })
        .collect()
}
