//! Validated navigation tree and traversal.

use std::slice;

use serde::{Serialize, Serializer};

use crate::lint::{self, LintWarning};
use crate::{EntryPath, NavigationEntry};

/// Ordered sequence of validated root entries.
///
/// Immutable once built. Serializes as the bare entry list, which is the
/// sidebar shape the site builder consumes; lint warnings are not serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatedNavigationTree {
    entries: Vec<NavigationEntry>,
    warnings: Vec<LintWarning>,
}

impl ValidatedNavigationTree {
    pub(crate) fn new(entries: Vec<NavigationEntry>) -> Self {
        let warnings = lint::check(&entries);
        Self { entries, warnings }
    }

    /// Root entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Lint findings collected while building.
    #[must_use]
    pub fn warnings(&self) -> &[LintWarning] {
        &self.warnings
    }

    /// Depth-first, pre-order traversal yielding each entry with its path.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(EntryPath::root(), self.entries.iter())],
        }
    }

    /// Slugs of every leaf in display order.
    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|(_, entry)| match entry {
                NavigationEntry::Leaf(leaf) => Some(leaf.slug()),
                _ => None,
            })
            .collect()
    }

    /// Directories of every autogenerated group in display order.
    #[must_use]
    pub fn autogenerated_directories(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|(_, entry)| match entry {
                NavigationEntry::AutoGroup(group) => Some(group.directory()),
                _ => None,
            })
            .collect()
    }

    /// Deepest nesting level: 0 when empty, 1 when every entry is top-level.
    #[must_use]
    pub fn depth(&self) -> usize {
        fn depth_of(entries: &[NavigationEntry]) -> usize {
            entries
                .iter()
                .map(|entry| 1 + depth_of(entry.children()))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.entries)
    }

    /// Number of entries at every level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ValidatedNavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Iterator returned by [`ValidatedNavigationTree::walk`].
pub struct Walk<'a> {
    stack: Vec<(EntryPath, slice::Iter<'a, NavigationEntry>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (EntryPath, &'a NavigationEntry);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (parent, siblings) = self.stack.last_mut()?;
            let Some(entry) = siblings.next() else {
                self.stack.pop();
                continue;
            };
            let path = parent.child(entry.label());
            if let NavigationEntry::Group(group) = entry {
                self.stack.push((path.clone(), group.items().iter()));
            }
            return Some((path, entry));
        }
    }
}
