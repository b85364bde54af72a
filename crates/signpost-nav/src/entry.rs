//! Sidebar entry types.
//!
//! [`NavigationEntrySpec`] is the loosely typed shape authors write in the
//! site configuration. [`NavigationEntry`] is its validated counterpart: a
//! sum type whose variants are only constructed by [`build`](crate::build),
//! so each entry is exactly one of leaf, autogenerated group, or group.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Directive asking the site builder to derive a group's children from a
/// content directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Autogenerate {
    /// Content directory, relative to the docs root (e.g., "reference").
    pub directory: String,
}

/// Sidebar entry as written in configuration.
///
/// At most one of `slug`, `autogenerate` and `items` may be set. The builder
/// rejects anything else, so this type intentionally allows invalid shapes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationEntrySpec {
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Content page identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Directory-driven group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autogenerate: Option<Autogenerate>,
    /// Explicit child entries, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavigationEntrySpec>>,
}

impl NavigationEntrySpec {
    /// Entry linking to a single page.
    #[must_use]
    pub fn leaf(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Entry whose children come from a content directory.
    #[must_use]
    pub fn auto_group(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            autogenerate: Some(Autogenerate {
                directory: directory.into(),
            }),
            ..Self::default()
        }
    }

    /// Entry with explicit children.
    #[must_use]
    pub fn group(label: impl Into<String>, items: impl IntoIterator<Item = Self>) -> Self {
        Self {
            label: label.into(),
            items: Some(items.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Names of the target fields that are set, in declaration order.
    pub(crate) fn target_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.slug.is_some() {
            fields.push("slug");
        }
        if self.autogenerate.is_some() {
            fields.push("autogenerate");
        }
        if self.items.is_some() {
            fields.push("items");
        }
        fields
    }
}

/// Variant of a validated entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Links to a single page by slug.
    Leaf,
    /// Children are discovered by the site builder.
    AutoGroup,
    /// Children are listed explicitly.
    Group,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Leaf => "leaf",
            Self::AutoGroup => "autogenerated group",
            Self::Group => "group",
        })
    }
}

/// Validated sidebar entry.
///
/// Serializes to the shape the site builder expects: `{label, slug}`,
/// `{label, autogenerate: {directory}}` or `{label, items}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavigationEntry {
    /// Single page.
    Leaf(Leaf),
    /// Directory-driven group.
    AutoGroup(AutoGroup),
    /// Explicit group with at least one child.
    Group(Group),
}

impl NavigationEntry {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.label,
            Self::AutoGroup(group) => &group.label,
            Self::Group(group) => &group.label,
        }
    }

    /// Which variant this entry is.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Leaf(_) => EntryKind::Leaf,
            Self::AutoGroup(_) => EntryKind::AutoGroup,
            Self::Group(_) => EntryKind::Group,
        }
    }

    /// Explicit children. Empty for leaves and autogenerated groups.
    #[must_use]
    pub fn children(&self) -> &[NavigationEntry] {
        match self {
            Self::Group(group) => &group.items,
            Self::Leaf(_) | Self::AutoGroup(_) => &[],
        }
    }
}

/// Entry linking to one content page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Leaf {
    label: String,
    slug: String,
}

impl Leaf {
    pub(crate) fn new(label: String, slug: String) -> Self {
        Self { label, slug }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Page identifier resolved by the site builder.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Group whose children the site builder derives from a directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AutoGroup {
    label: String,
    autogenerate: Autogenerate,
}

impl AutoGroup {
    pub(crate) fn new(label: String, directory: String) -> Self {
        Self {
            label,
            autogenerate: Autogenerate { directory },
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Content directory the site builder scans.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.autogenerate.directory
    }
}

/// Group with an explicit, non-empty list of children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    label: String,
    items: Vec<NavigationEntry>,
}

impl Group {
    pub(crate) fn new(label: String, items: Vec<NavigationEntry>) -> Self {
        Self { label, items }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children in display order. Never empty.
    #[must_use]
    pub fn items(&self) -> &[NavigationEntry] {
        &self.items
    }
}
