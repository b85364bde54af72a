//! Sidebar validation errors.

use crate::EntryPath;

/// Error raised while building the navigation tree.
///
/// Every variant carries the path of the offending entry. Building stops at
/// the first error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Label is empty or whitespace-only.
    #[error("Sidebar entry {path} has an empty label")]
    EmptyLabel {
        /// Path to the entry.
        path: EntryPath,
    },
    /// Entry sets zero or several of `slug`, `autogenerate` and `items`.
    #[error(
        "Sidebar entry {path} must set exactly one of slug, autogenerate or items (found: {found})"
    )]
    InvalidEntryKind {
        /// Path to the entry.
        path: EntryPath,
        /// Target fields that were set (e.g., "slug, items" or "none").
        found: String,
    },
    /// Group has an `items` list with no entries.
    #[error("Sidebar group {path} has no items")]
    EmptyGroup {
        /// Path to the group.
        path: EntryPath,
    },
    /// Leaf slug is empty or whitespace-only.
    #[error("Sidebar entry {path} has an empty slug")]
    EmptySlug {
        /// Path to the entry.
        path: EntryPath,
    },
    /// Autogenerate directive names an empty directory.
    #[error("Sidebar entry {path} has an empty autogenerate directory")]
    EmptyDirectory {
        /// Path to the entry.
        path: EntryPath,
    },
}

impl NavError {
    /// Path of the entry that failed validation.
    #[must_use]
    pub fn path(&self) -> &EntryPath {
        match self {
            Self::EmptyLabel { path }
            | Self::InvalidEntryKind { path, .. }
            | Self::EmptyGroup { path }
            | Self::EmptySlug { path }
            | Self::EmptyDirectory { path } => path,
        }
    }
}
