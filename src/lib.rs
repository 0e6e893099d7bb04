//! Find the configuration files that shape the current environment, pick one,
//! and open it in an editor.

pub mod candidate;
pub mod config;
pub mod logging;
pub mod opener;
pub mod select;
pub mod sources;

pub use candidate::{CandidateList, CategoryKind, FileEntry, Row};
pub use config::Config;
pub use opener::EditorCommand;
pub use sources::{Environment, SystemEnvironment};
