use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// `PATH` with common package-manager bin directories prepended.
pub fn augmented_path() -> OsString {
    let extras = [
        "/usr/local/bin",
        "/opt/homebrew/bin",
        "/opt/homebrew/sbin",
    ];
    let mut parts: Vec<PathBuf> = extras.iter().map(PathBuf::from).collect();
    if let Some(current) = std::env::var_os("PATH") {
        for p in std::env::split_paths(&current) {
            if !p.as_os_str().is_empty() && !parts.contains(&p) {
                parts.push(p);
            }
        }
    }
    std::env::join_paths(parts).unwrap_or_default()
}

/// Exit status `sh` reports when it cannot find the program to run.
const COMMAND_NOT_FOUND: i32 = 127;

fn shell_command(cmd: &str) -> Command {
    #[cfg(windows)]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", cmd]);
        c
    };
    #[cfg(not(windows))]
    let mut command = {
        let mut c = Command::new("sh");
        c.args(["-c", cmd]);
        c
    };
    command.env("PATH", augmented_path());
    command
}

/// Run `cmd` through the shell on the controlling terminal and wait.
pub(super) fn run_interactive(cmd: &str) -> Result<()> {
    let mut command = shell_command(cmd);
    attach_tty(&mut command);
    let status = command
        .status()
        .with_context(|| format!("Failed to run editor command: {cmd}"))?;
    if cfg!(unix) && status.code() == Some(COMMAND_NOT_FOUND) {
        bail!("Editor command `{cmd}` failed: program not found ({status})");
    }
    if !status.success() {
        bail!("Editor command `{cmd}` failed: {status}");
    }
    Ok(())
}

pub(super) fn spawn_detached(cmd: &str) -> Result<()> {
    shell_command(cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {cmd}"))?;
    Ok(())
}

/// Full-screen editors need a terminal. When stdin was redirected, hand the
/// child `/dev/tty` instead.
#[cfg(unix)]
fn attach_tty(command: &mut Command) {
    use std::io::IsTerminal;

    if std::io::stdin().is_terminal() {
        return;
    }
    let tty = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .and_then(|f| Ok((f.try_clone()?, f)));
    match tty {
        Ok((input, output)) => {
            command.stdin(input).stdout(output);
        }
        Err(e) => tracing::debug!(error = %e, "no controlling terminal, inheriting stdio"),
    }
}

#[cfg(not(unix))]
fn attach_tty(_command: &mut Command) {}
