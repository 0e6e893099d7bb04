//! Collectors that discover candidate files, one per [`CategoryKind`].
//!
//! Every collector is a pure function of an [`Environment`] plus filesystem
//! existence checks. A missing file is skipped, never reported as an error.

mod system;


pub use system::SystemEnvironment;

use std::path::{Path, PathBuf};

use crate::candidate::{CandidateList, CategoryKind, Entries, FileEntry};

/// Environment variable naming an extra interpreter ini file.
pub const INI_ENV_VAR: &str = "CONFEDIT_INI";
/// File name probed for in each fixed ini location.
pub const INI_FILE: &str = "confedit.ini";
/// Per-user tool directory under the home directory.
pub const USER_DIR: &str = ".confedit";
/// Prompt-integration script inside [`USER_DIR`].
pub const PROMPT_SCRIPT: &str = "confedit.prompt.sh";

/// Host application files looked up in [`Site::conf_dir`] and [`Site::app_root`].
pub const SETTINGS_FILE: &str = "settings.php";
/// Optional local override next to [`SETTINGS_FILE`].
pub const LOCAL_SETTINGS_FILE: &str = "settings.local.php";
/// Access-control file at the application root.
pub const ACCESS_FILE: &str = ".htaccess";

/// Location of a host application site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Directory holding the site's settings files.
    pub conf_dir: PathBuf,
    /// Application root holding the access-control file.
    pub app_root: PathBuf,
}

/// Everything the collectors need to know about the host.
pub trait Environment {
    /// The operator's home directory.
    fn home_dir(&self) -> Option<PathBuf>;
    /// A non-empty environment variable.
    fn var(&self, key: &str) -> Option<String>;
    /// The configuration file loaded by the active interpreter.
    fn interpreter_ini(&self) -> Option<PathBuf>;
    /// Directory the tool itself is installed in.
    fn base_dir(&self) -> Option<PathBuf>;
    /// System-wide configuration directory.
    fn system_dir(&self) -> PathBuf;
    /// Run-control files already resolved by the configuration loader.
    fn runtime_config_paths(&self) -> Vec<PathBuf>;
    /// Every known alias file.
    fn alias_file_paths(&self) -> Vec<PathBuf>;
    /// The current host site, if one was configured.
    fn site(&self) -> Option<Site>;
}

/// Run every collector in display order and merge the results.
pub fn collect(env: &dyn Environment) -> CandidateList {
    let mut list = CandidateList::new();
    list.insert(CategoryKind::InterpreterIni, interpreter_ini_files(env));
    list.insert(CategoryKind::ShellProfile, shell_profile_files(env));
    list.insert(CategoryKind::RuntimeConfig, runtime_config_files(env));
    list.insert(CategoryKind::Alias, alias_files(env));
    list.insert(CategoryKind::HostSettings, host_settings_files(env));
    tracing::debug!(count = list.len(), "collected candidate files");
    list
}

/// Every candidate path, unfiltered and without headers, for shell completion.
pub fn completion_candidates(env: &dyn Environment) -> Vec<String> {
    collect(env).files().map(|entry| entry.key).collect()
}

/// The interpreter's loaded ini, the [`INI_ENV_VAR`] override, and
/// [`INI_FILE`] in the base, system and user directories.
pub fn interpreter_ini_files(env: &dyn Environment) -> Entries {
    let mut files = Entries::new();
    if let Some(loaded) = env.interpreter_ini() {
        insert_existing(&mut files, &loaded, false);
    }
    if let Some(over) = env.var(INI_ENV_VAR) {
        insert_existing(&mut files, Path::new(&over), false);
    }
    let dirs = [
        env.base_dir(),
        Some(env.system_dir()),
        env.home_dir().map(|h| h.join(USER_DIR)),
    ];
    for dir in dirs.into_iter().flatten() {
        insert_existing(&mut files, &dir.join(INI_FILE), true);
    }
    files
}

/// The shell startup file and the optional prompt-integration script.
pub fn shell_profile_files(env: &dyn Environment) -> Entries {
    let mut files = Entries::new();
    let Some(home) = env.home_dir() else {
        return files;
    };
    insert_existing(&mut files, &find_bashrc(&home), false);
    insert_existing(&mut files, &home.join(USER_DIR).join(PROMPT_SCRIPT), false);
    files
}

/// Pick the shell startup file for this platform.
// TODO: probe ~/.zshrc once the prompt script supports zsh.
pub fn find_bashrc(home: &Path) -> PathBuf {
    home.join(".bashrc")
}

/// Run-control files supplied by the environment.
pub fn runtime_config_files(env: &dyn Environment) -> Entries {
    let mut files = Entries::new();
    for path in env.runtime_config_paths() {
        insert_existing(&mut files, &path, false);
    }
    files
}

/// Alias files supplied by the environment.
pub fn alias_files(env: &dyn Environment) -> Entries {
    let mut files = Entries::new();
    for path in env.alias_file_paths() {
        insert_existing(&mut files, &path, false);
    }
    files
}

/// Settings, local settings and access-control files of the current site.
pub fn host_settings_files(env: &dyn Environment) -> Entries {
    let mut files = Entries::new();
    let Some(site) = env.site() else {
        return files;
    };
    insert_existing(&mut files, &site.conf_dir.join(SETTINGS_FILE), true);
    insert_existing(&mut files, &site.conf_dir.join(LOCAL_SETTINGS_FILE), true);
    insert_existing(&mut files, &site.app_root.join(ACCESS_FILE), true);
    files
}

fn insert_existing(files: &mut Entries, path: &Path, canonical: bool) {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "skipping missing candidate");
        return;
    }
    let path = if canonical {
        dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    };
    match FileEntry::from_path(&path) {
        Some(entry) => {
            files.insert(entry.key, entry.label);
        }
        None => tracing::debug!(path = %path.display(), "skipping non-UTF-8 candidate"),
    }
}
