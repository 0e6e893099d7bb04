//! Building the editor command line and running it.

mod editor;
mod shell;


pub use shell::augmented_path;

use anyhow::{bail, Context, Result};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the shell-escaped path.
pub const PLACEHOLDER: &str = "%s";

/// Used when nothing else names an editor.
pub const DEFAULT_EDITOR: &str = "vi";

/// A shell command template with exactly one [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    template: String,
}

impl EditorCommand {
    /// Validate `template`. A template without a placeholder gets one appended.
    pub fn new(template: &str) -> Result<Self> {
        let template = template.trim();
        if template.is_empty() {
            bail!("Empty editor command");
        }
        match template.matches(PLACEHOLDER).count() {
            0 => Ok(Self {
                template: format!("{template} {PLACEHOLDER}"),
            }),
            1 => Ok(Self {
                template: template.to_string(),
            }),
            n => bail!("Editor command must contain one {PLACEHOLDER}, found {n}: {template}"),
        }
    }

    /// The normalized template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The program the template runs, looked up in `PATH` before launching.
    ///
    /// Leading `NAME=value` assignments are skipped. `None` when the command
    /// starts with a shell variable, builtin or grouping, which only the
    /// shell itself can resolve.
    pub fn program(&self) -> Option<String> {
        shlex::split(&self.template)?
            .into_iter()
            .find(|word| !is_assignment(word))
            .filter(|word| {
                !word.starts_with(['$', '(', '{', '`'])
                    && word != PLACEHOLDER
                    && !SHELL_BUILTINS.contains(&word.as_str())
            })
    }

    /// Substitute the shell-escaped `path` into the template.
    pub fn render(&self, path: &Path) -> Result<String> {
        let path_str = path
            .to_str()
            .context("Path contains non-UTF-8 characters")?;
        let quoted = quote_path(path_str)?;
        Ok(self.template.replacen(PLACEHOLDER, &quoted, 1))
    }
}

const SHELL_BUILTINS: &[&str] = &[
    "exec", "command", "env", "cd", "nohup", "builtin", "eval", "time", "if", "while", "!",
];

fn is_assignment(word: &str) -> bool {
    word.split_once('=').is_some_and(|(name, _)| {
        !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric())
    })
}

#[cfg(not(windows))]
fn quote_path(path: &str) -> Result<Cow<'_, str>> {
    shlex::try_quote(path).with_context(|| format!("Cannot shell-escape path {path}"))
}

/// `cmd /C` only understands double quotes, and a path cannot contain one.
#[cfg(windows)]
fn quote_path(path: &str) -> Result<Cow<'_, str>> {
    if path.contains('"') {
        bail!("Cannot quote path containing '\"': {path}");
    }
    if path.chars().any(|c| c.is_whitespace() || "&|<>^()%!,;=".contains(c)) {
        Ok(Cow::Owned(format!("\"{path}\"")))
    } else {
        Ok(Cow::Borrowed(path))
    }
}

/// Pick the editor template: the `--editor` flag, then the configured
/// command, then `$VISUAL`, then `$EDITOR`, then [`DEFAULT_EDITOR`].
pub fn resolve_editor(flag: Option<&str>, configured: Option<&str>) -> Result<EditorCommand> {
    let visual = std::env::var("VISUAL").ok();
    let env_editor = std::env::var("EDITOR").ok();
    let name = choose_editor([flag, configured, visual.as_deref(), env_editor.as_deref()]);
    EditorCommand::new(&editor::resolve_editor_command(name))
}

fn choose_editor<'a>(sources: [Option<&'a str>; 4]) -> &'a str {
    sources
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_EDITOR)
}

/// Open `path` in the editor attached to the terminal and wait for it to exit.
/// A non-zero exit status is an error.
pub fn open_in_editor(path: &Path, editor: &EditorCommand) -> Result<()> {
    let cmd = prepare(path, editor)?;
    tracing::info!(command = %cmd, "launching editor");
    shell::run_interactive(&cmd)
}

/// Start the editor detached from the terminal and return immediately.
pub fn open_in_background(path: &Path, editor: &EditorCommand) -> Result<()> {
    let cmd = prepare(path, editor)?;
    tracing::info!(command = %cmd, "launching editor in background");
    shell::spawn_detached(&cmd)
        .with_context(|| format!("Failed to open editor with command: {cmd}"))
}

fn prepare(path: &Path, editor: &EditorCommand) -> Result<String> {
    if let Some(program) = editor.program() {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(&program, Some(augmented_path()), cwd)
            .with_context(|| format!("Editor `{program}` not found in PATH"))?;
    }
    editor.render(path)
}
