//! Non-fatal checks over a validated tree.

use std::collections::HashSet;
use std::fmt;

use crate::{EntryPath, NavigationEntry};

/// Finding that does not invalidate the tree but is likely an authoring mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintWarning {
    /// Two entries at the same level share a label.
    DuplicateLabel {
        /// Path to the later entry.
        path: EntryPath,
        /// The repeated label.
        label: String,
    },
    /// The same slug is linked from more than one leaf.
    DuplicateSlug {
        /// Path to the later leaf.
        path: EntryPath,
        /// The repeated slug.
        slug: String,
    },
}

impl LintWarning {
    /// Path of the entry the warning is about.
    #[must_use]
    pub fn path(&self) -> &EntryPath {
        match self {
            Self::DuplicateLabel { path, .. } | Self::DuplicateSlug { path, .. } => path,
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { path, label } => {
                write!(f, "Duplicate label {label:?} at {path}")
            }
            Self::DuplicateSlug { path, slug } => {
                write!(f, "Slug {slug:?} is already linked elsewhere, repeated at {path}")
            }
        }
    }
}

/// Collect lint warnings in depth-first display order.
pub(crate) fn check(entries: &[NavigationEntry]) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut seen_slugs = HashSet::new();
    check_level(entries, &EntryPath::root(), &mut seen_slugs, &mut warnings);
    warnings
}

fn check_level<'a>(
    entries: &'a [NavigationEntry],
    parent: &EntryPath,
    seen_slugs: &mut HashSet<&'a str>,
    warnings: &mut Vec<LintWarning>,
) {
    let mut seen_labels = HashSet::new();

    for entry in entries {
        let path = parent.child(entry.label());

        if !seen_labels.insert(entry.label()) {
            warnings.push(LintWarning::DuplicateLabel {
                path: path.clone(),
                label: entry.label().to_owned(),
            });
        }

        match entry {
            NavigationEntry::Leaf(leaf) => {
                if !seen_slugs.insert(leaf.slug()) {
                    warnings.push(LintWarning::DuplicateSlug {
                        path,
                        slug: leaf.slug().to_owned(),
                    });
                }
            }
            NavigationEntry::Group(group) => {
                check_level(group.items(), &path, seen_slugs, warnings);
            }
            NavigationEntry::AutoGroup(_) => {}
        }
    }
}
