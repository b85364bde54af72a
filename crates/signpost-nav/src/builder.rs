//! Single-pass validation from entry specs to a [`ValidatedNavigationTree`].

use crate::entry::{AutoGroup, Group, Leaf};
use crate::{EntryPath, NavError, NavigationEntry, NavigationEntrySpec, ValidatedNavigationTree};

/// Validate sidebar entry specs and build the navigation tree.
///
/// Entries are checked depth-first in display order. For each entry:
/// the label must be non-blank, exactly one of `slug`, `autogenerate` and
/// `items` must be set, groups must have items, and slugs and directories
/// must be non-blank. An `items` key that is present but empty still counts
/// as set, so `{slug, items: []}` is a mixed entry rather than a leaf.
///
/// Lint findings (duplicate sibling labels, repeated slugs) do not fail the
/// build. They are attached to the tree for the caller to report, and logged
/// at debug level.
///
/// # Errors
///
/// Returns the first [`NavError`] encountered.
pub fn build(entries: &[NavigationEntrySpec]) -> Result<ValidatedNavigationTree, NavError> {
    let root = EntryPath::root();
    let entries = build_entries(entries, &root)?;
    let tree = ValidatedNavigationTree::new(entries);

    for warning in tree.warnings() {
        tracing::debug!(path = %warning.path(), "{warning}");
    }
    tracing::debug!(
        entries = tree.len(),
        depth = tree.depth(),
        "Navigation tree built"
    );

    Ok(tree)
}

fn build_entries(
    specs: &[NavigationEntrySpec],
    parent: &EntryPath,
) -> Result<Vec<NavigationEntry>, NavError> {
    specs
        .iter()
        .map(|spec| build_entry(spec, parent))
        .collect()
}

fn build_entry(
    spec: &NavigationEntrySpec,
    parent: &EntryPath,
) -> Result<NavigationEntry, NavError> {
    let path = parent.child(&spec.label);

    if spec.label.trim().is_empty() {
        return Err(NavError::EmptyLabel { path });
    }

    match (&spec.slug, &spec.autogenerate, &spec.items) {
        (Some(slug), None, None) => {
            if slug.trim().is_empty() {
                return Err(NavError::EmptySlug { path });
            }
            Ok(NavigationEntry::Leaf(Leaf::new(
                spec.label.clone(),
                slug.clone(),
            )))
        }
        (None, Some(autogenerate), None) => {
            if autogenerate.directory.trim().is_empty() {
                return Err(NavError::EmptyDirectory { path });
            }
            Ok(NavigationEntry::AutoGroup(AutoGroup::new(
                spec.label.clone(),
                autogenerate.directory.clone(),
            )))
        }
        (None, None, Some(items)) => {
            if items.is_empty() {
                return Err(NavError::EmptyGroup { path });
            }
            let items = build_entries(items, &path)?;
            Ok(NavigationEntry::Group(Group::new(spec.label.clone(), items)))
        }
        _ => {
            let fields = spec.target_fields();
            let found = if fields.is_empty() {
                "none".to_owned()
            } else {
                fields.join(", ")
            };
            Err(NavError::InvalidEntryKind { path, found })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntryKind, LintWarning};
    use pretty_assertions::assert_eq;

    fn leaf(label: &str, slug: &str) -> NavigationEntrySpec {
        NavigationEntrySpec::leaf(label, slug)
    }

    fn group(label: &str, items: Vec<NavigationEntrySpec>) -> NavigationEntrySpec {
        NavigationEntrySpec::group(label, items)
    }

    fn path(labels: &[&str]) -> EntryPath {
        labels.iter().copied().collect()
    }

    #[test]
    fn test_group_with_leaf() {
        let tree = build(&[group("Guides", vec![leaf("Example", "guides/example")])]).unwrap();

        assert_eq!(tree.entries().len(), 1);
        let NavigationEntry::Group(guides) = &tree.entries()[0] else {
            panic!("expected group, got {:?}", tree.entries()[0]);
        };
        assert_eq!(guides.label(), "Guides");
        assert_eq!(guides.items().len(), 1);
        let NavigationEntry::Leaf(example) = &guides.items()[0] else {
            panic!("expected leaf, got {:?}", guides.items()[0]);
        };
        assert_eq!(example.label(), "Example");
        assert_eq!(example.slug(), "guides/example");
    }

    #[test]
    fn test_mixed_slug_and_items_is_invalid_kind() {
        let spec = NavigationEntrySpec {
            label: "X".to_owned(),
            slug: Some("a".to_owned()),
            items: Some(vec![leaf("Child", "child")]),
            ..Default::default()
        };

        let err = build(&[spec]).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidEntryKind {
                path: path(&["X"]),
                found: "slug, items".to_owned(),
            }
        );
    }

    #[test]
    fn test_mixed_slug_and_autogenerate_is_invalid_kind() {
        let spec = NavigationEntrySpec {
            slug: Some("reference".to_owned()),
            ..NavigationEntrySpec::auto_group("Reference", "reference")
        };

        let err = build(&[spec]).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidEntryKind {
                path: path(&["Reference"]),
                found: "slug, autogenerate".to_owned(),
            }
        );
    }

    #[test]
    fn test_mixed_autogenerate_and_items_is_invalid_kind() {
        let spec = NavigationEntrySpec {
            items: Some(vec![leaf("Child", "child")]),
            ..NavigationEntrySpec::auto_group("Reference", "reference")
        };

        let err = build(&[spec]).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidEntryKind {
                path: path(&["Reference"]),
                found: "autogenerate, items".to_owned(),
            }
        );
    }

    #[test]
    fn test_all_three_targets_is_invalid_kind() {
        let spec = NavigationEntrySpec {
            slug: Some("reference".to_owned()),
            items: Some(vec![leaf("Child", "child")]),
            ..NavigationEntrySpec::auto_group("Reference", "reference")
        };

        let err = build(&[spec]).unwrap_err();
        assert!(
            matches!(err, NavError::InvalidEntryKind { ref found, .. } if found == "slug, autogenerate, items")
        );
    }

    #[test]
    fn test_entry_without_target_is_invalid_kind() {
        let spec = NavigationEntrySpec {
            label: "Nothing".to_owned(),
            ..Default::default()
        };

        let err = build(&[spec]).unwrap_err();
        assert!(matches!(err, NavError::InvalidEntryKind { ref found, .. } if found == "none"));
        assert!(err.to_string().contains("\"Nothing\""));
    }

    #[test]
    fn test_slug_with_empty_items_is_invalid_kind() {
        let spec = NavigationEntrySpec {
            label: "X".to_owned(),
            slug: Some("a".to_owned()),
            items: Some(Vec::new()),
            ..Default::default()
        };

        let err = build(&[spec]).unwrap_err();
        assert!(matches!(err, NavError::InvalidEntryKind { .. }));
    }

    #[test]
    fn test_empty_group() {
        let err = build(&[group("Empty", Vec::new())]).unwrap_err();
        assert_eq!(
            err,
            NavError::EmptyGroup {
                path: path(&["Empty"])
            }
        );
    }

    #[test]
    fn test_autogenerate_group_is_not_expanded() {
        let tree = build(&[NavigationEntrySpec::auto_group("Reference", "reference")]).unwrap();

        let entry = &tree.entries()[0];
        assert_eq!(entry.kind(), EntryKind::AutoGroup);
        assert!(entry.children().is_empty());
        let NavigationEntry::AutoGroup(reference) = entry else {
            panic!("expected autogenerated group, got {entry:?}");
        };
        assert_eq!(reference.directory(), "reference");
    }

    #[test]
    fn test_empty_label() {
        let err = build(&[leaf("", "a")]).unwrap_err();
        assert_eq!(err, NavError::EmptyLabel { path: path(&[""]) });
    }

    #[test]
    fn test_whitespace_label() {
        let err = build(&[leaf("   ", "a")]).unwrap_err();
        assert!(matches!(err, NavError::EmptyLabel { .. }));
    }

    #[test]
    fn test_empty_label_checked_before_kind() {
        let err = build(&[NavigationEntrySpec::default()]).unwrap_err();
        assert!(matches!(err, NavError::EmptyLabel { .. }));
    }

    #[test]
    fn test_empty_slug() {
        let err = build(&[leaf("Blank", " ")]).unwrap_err();
        assert_eq!(
            err,
            NavError::EmptySlug {
                path: path(&["Blank"])
            }
        );
    }

    #[test]
    fn test_empty_directory() {
        let err = build(&[NavigationEntrySpec::auto_group("Reference", "")]).unwrap_err();
        assert_eq!(
            err,
            NavError::EmptyDirectory {
                path: path(&["Reference"])
            }
        );
    }

    #[test]
    fn test_nested_error_reports_full_path() {
        let specs = [
            leaf("Home", "index"),
            group(
                "Develop",
                vec![group(
                    "Extensions",
                    vec![leaf("Building", "develop/extension-building"), leaf("Broken", "")],
                )],
            ),
        ];

        let err = build(&specs).unwrap_err();
        assert_eq!(
            err.path(),
            &path(&["Develop", "Extensions", "Broken"])
        );
        assert_eq!(
            err.to_string(),
            r#"Sidebar entry "Develop" > "Extensions" > "Broken" has an empty slug"#
        );
    }

    #[test]
    fn test_first_error_wins() {
        let specs = [group("Empty", Vec::new()), leaf("", "a")];
        let err = build(&specs).unwrap_err();
        assert!(matches!(err, NavError::EmptyGroup { .. }));
    }

    #[test]
    fn test_order_is_preserved() {
        let specs = [
            leaf("Zeta", "z"),
            group("Alpha", vec![leaf("C", "c"), leaf("A", "a"), leaf("B", "b")]),
            leaf("Mu", "m"),
        ];

        let tree = build(&specs).unwrap();
        let labels: Vec<&str> = tree.entries().iter().map(NavigationEntry::label).collect();
        assert_eq!(labels, ["Zeta", "Alpha", "Mu"]);
        assert_eq!(tree.slugs(), ["z", "c", "a", "b", "m"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let specs = [
            group(
                "Guides",
                vec![
                    leaf("Example Guide", "guides/example"),
                    leaf("Getting Started", "guides/getting-started"),
                ],
            ),
            NavigationEntrySpec::auto_group("Reference", "reference"),
        ];

        let first = build(&specs).unwrap();
        let second = build(&specs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_builds_empty_tree() {
        let tree = build(&[]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_deep_nesting() {
        let mut spec = leaf("Bottom", "deep/bottom");
        for level in (0..10).rev() {
            spec = group(&format!("Level {level}"), vec![spec]);
        }

        let tree = build(&[spec]).unwrap();
        assert_eq!(tree.depth(), 11);
        assert_eq!(tree.slugs(), ["deep/bottom"]);
    }

    #[test]
    fn test_duplicate_labels_are_warnings() {
        let specs = [
            leaf("Intro", "intro"),
            leaf("Intro", "intro-again"),
        ];

        let tree = build(&specs).unwrap();
        assert_eq!(
            tree.warnings(),
            [LintWarning::DuplicateLabel {
                path: path(&["Intro"]),
                label: "Intro".to_owned(),
            }]
        );
    }
}
