//! Label paths identifying entries within the sidebar.

use std::fmt;

/// Sequence of labels from a root entry down to a specific entry.
///
/// The last label is the entry's own, even when it is empty, so errors about
/// unlabeled entries still point at their position under the parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntryPath(Vec<String>);

impl EntryPath {
    /// Path above the top-level entries.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a child entry with the given label.
    #[must_use]
    pub fn child(&self, label: &str) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.to_owned());
        Self(labels)
    }

    /// Labels from the root down.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Number of labels (1 for a top-level entry).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True for the path above the top-level entries.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for EntryPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{label:?}")?;
        }
        Ok(())
    }
}
