//! Choosing one candidate and turning its label into a path.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::candidate::{CandidateList, FileEntry, Row};


/// Pick one file from `list` and return its label.
///
/// A single candidate is returned without prompting. `preset` is a 1-based
/// position in the displayed list. Otherwise the list is written to `output`
/// and a number is read from `input`.
pub fn select<R: BufRead, W: Write>(
    list: &CandidateList,
    preset: Option<usize>,
    input: R,
    output: W,
) -> Result<String> {
    let files: Vec<FileEntry> = list.files().collect();
    if files.is_empty() {
        bail!("No files to choose from");
    }
    if let [only] = files.as_slice() {
        tracing::debug!(label = %only.label, "single candidate, skipping prompt");
        return Ok(only.label.clone());
    }
    let choice = match preset {
        Some(n) => n,
        None => prompt(list, input, output)?,
    };
    pick(&files, choice)
}

fn prompt<R: BufRead, W: Write>(list: &CandidateList, mut input: R, mut output: W) -> Result<usize> {
    writeln!(output, "Choose a file to edit:")?;
    let mut n = 0;
    for row in list.rows(true) {
        match row {
            Row::Header(kind) => writeln!(output, "  {}", kind.header())?,
            Row::File(entry) => {
                n += 1;
                writeln!(output, "  [{n}] {}", entry.label)?;
            }
        }
    }
    writeln!(output, "  [0] Cancel")?;
    write!(output, "Choice: ")?;
    output.flush().ok();

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read choice")?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("No file chosen");
    }
    let choice: usize = trimmed
        .parse()
        .with_context(|| format!("Invalid choice: {trimmed}"))?;
    if choice == 0 {
        bail!("Cancelled");
    }
    Ok(choice)
}

fn pick(files: &[FileEntry], choice: usize) -> Result<String> {
    choice
        .checked_sub(1)
        .and_then(|i| files.get(i))
        .map(|f| f.label.clone())
        .with_context(|| format!("Choice {choice} is out of range (1-{})", files.len()))
}

/// Strip a trailing `:<line>` from a label; editors are not opened at a line.
///
/// Everything from the first `:` on is dropped, except a colon at the very
/// start and a Windows drive prefix.
pub fn resolve_selection(label: &str) -> PathBuf {
    let start = drive_prefix_len(label);
    match label[start..].find(':') {
        Some(pos) if start + pos > 0 => PathBuf::from(&label[..start + pos]),
        _ => PathBuf::from(label),
    }
}

fn drive_prefix_len(label: &str) -> usize {
    let bytes = label.as_bytes();
    let is_drive = cfg!(windows)
        && bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'\\' | b'/');
    if is_drive { 2 } else { 0 }
}
