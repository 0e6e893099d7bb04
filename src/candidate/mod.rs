//! The categorized candidate list and its flattened, filterable view.

use indexmap::IndexMap;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Ordered `key -> label` mapping produced by a collector.
///
/// Keys are filesystem paths; inserting an existing key overwrites its label
/// in place instead of adding a second entry.
pub type Entries = IndexMap<String, String>;

/// A fixed grouping of candidate files. Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Interpreter configuration (`.ini`) files.
    InterpreterIni,
    /// Shell startup and prompt-integration scripts.
    ShellProfile,
    /// Run-control files loaded by this tool.
    RuntimeConfig,
    /// Named remote/alias definition files.
    Alias,
    /// Host application settings files.
    HostSettings,
}

impl CategoryKind {
    /// Every category, in the order they are displayed.
    pub const ALL: [Self; 5] = [
        Self::InterpreterIni,
        Self::ShellProfile,
        Self::RuntimeConfig,
        Self::Alias,
        Self::HostSettings,
    ];

    /// Identifier used as the key of this category's header row.
    pub const fn id(self) -> &'static str {
        match self {
            Self::InterpreterIni => "interpreter-ini",
            Self::ShellProfile => "shell-profile",
            Self::RuntimeConfig => "runtime-config",
            Self::Alias => "alias",
            Self::HostSettings => "host-settings",
        }
    }

    /// Banner shown above the category's entries.
    pub const fn header(self) -> &'static str {
        match self {
            Self::InterpreterIni => "-- Interpreter ini files --",
            Self::ShellProfile => "-- Shell files --",
            Self::RuntimeConfig => "-- Run-control files --",
            Self::Alias => "-- Aliases --",
            Self::HostSettings => "-- Host settings --",
        }
    }

    /// Whether entries are sorted by key before they are inserted.
    pub const fn sorted(self) -> bool {
        matches!(self, Self::RuntimeConfig | Self::Alias)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A candidate file: its path (`key`) and the text shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Filesystem path, used for de-duplication and filtering.
    pub key: String,
    /// Operator-facing text; may carry a `:<line>` suffix.
    pub label: String,
}

impl FileEntry {
    /// Entry whose key and label are both the path, or `None` when the
    /// path is not valid UTF-8 and could not be passed to the editor intact.
    pub fn from_path(path: &Path) -> Option<Self> {
        let s = path.to_str()?.to_string();
        Some(Self { key: s.clone(), label: s })
    }
}

/// One line of the flattened candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Non-selectable banner introducing a category.
    Header(CategoryKind),
    /// A selectable file.
    File(FileEntry),
}

impl Row {
    /// The row's key: the category id for headers, the path for files.
    pub fn key(&self) -> &str {
        match self {
            Self::Header(kind) => kind.id(),
            Self::File(entry) => &entry.key,
        }
    }

    /// The text displayed for this row.
    pub fn label(&self) -> &str {
        match self {
            Self::Header(kind) => kind.header(),
            Self::File(entry) => &entry.label,
        }
    }
}

/// Candidates grouped by category, rebuilt from scratch on every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    categories: [Entries; 5],
}

impl CandidateList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collector's output to `kind`.
    ///
    /// Sorted categories are ordered by key first. A key already present in
    /// any category keeps its position there and only has its label replaced.
    pub fn insert(&mut self, kind: CategoryKind, mut entries: Entries) {
        if kind.sorted() {
            entries.sort_keys();
        }
        for (key, label) in entries {
            let owner = self
                .categories
                .iter()
                .position(|category| category.contains_key(&key))
                .unwrap_or(kind.index());
            self.categories[owner].insert(key, label);
        }
    }

    /// Entries of a single category, in insertion order.
    pub fn entries(&self, kind: CategoryKind) -> &Entries {
        &self.categories[kind.index()]
    }

    /// Number of file entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(IndexMap::len).sum()
    }

    /// True when no category has any entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only entries whose key contains `needle` literally.
    ///
    /// `None` and the empty string keep everything. Headers are not filtered
    /// here; [`CandidateList::rows`] shows a header whenever its category
    /// still has entries.
    #[must_use]
    pub fn filter(&self, needle: Option<&str>) -> Self {
        let Some(needle) = needle.filter(|n| !n.is_empty()) else {
            return self.clone();
        };
        let mut filtered = Self::new();
        for (i, category) in self.categories.iter().enumerate() {
            filtered.categories[i] = category
                .iter()
                .filter(|(key, _)| key.contains(needle))
                .map(|(key, label)| (key.clone(), label.clone()))
                .collect();
        }
        filtered
    }

    /// Flatten into display order, with a header before each non-empty
    /// category when `headers` is set.
    pub fn rows(&self, headers: bool) -> Vec<Row> {
        let mut rows = Vec::with_capacity(self.len() + CategoryKind::ALL.len());
        for kind in CategoryKind::ALL {
            let entries = self.entries(kind);
            if entries.is_empty() {
                continue;
            }
            if headers {
                rows.push(Row::Header(kind));
            }
            rows.extend(entries.iter().map(|(key, label)| {
                Row::File(FileEntry {
                    key: key.clone(),
                    label: label.clone(),
                })
            }));
        }
        rows
    }

    /// File entries in display order, without headers.
    pub fn files(&self) -> impl Iterator<Item = FileEntry> + '_ {
        CategoryKind::ALL.into_iter().flat_map(move |kind| {
            self.entries(kind).iter().map(|(key, label)| FileEntry {
                key: key.clone(),
                label: label.clone(),
            })
        })
    }
}
