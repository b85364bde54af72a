//! Sidebar navigation tree for Signpost.
//!
//! Turns the sidebar entries an author writes in configuration into a validated,
//! immutable tree ready to hand to the site builder.
//!
//! Each entry is exactly one of:
//! - a leaf linking to a page by slug,
//! - an autogenerated group whose pages the site builder discovers from a
//!   directory,
//! - a group with an explicit, non-empty list of children.
//!
//! # Example
//!
//! ```
//! use signpost_nav::{NavigationEntrySpec, build};
//!
//! let tree = build(&[
//!     NavigationEntrySpec::group(
//!         "Guides",
//!         [NavigationEntrySpec::leaf("Example", "guides/example")],
//!     ),
//!     NavigationEntrySpec::auto_group("Reference", "reference"),
//! ])?;
//!
//! assert_eq!(tree.slugs(), ["guides/example"]);
//! assert_eq!(tree.autogenerated_directories(), ["reference"]);
//! # Ok::<(), signpost_nav::NavError>(())
//! ```

mod builder;
mod entry;
mod error;
mod lint;
mod path;
mod tree;

pub use builder::build;
pub use entry::{
    AutoGroup, Autogenerate, EntryKind, Group, Leaf, NavigationEntry, NavigationEntrySpec,
};
pub use error::NavError;
pub use lint::LintWarning;
pub use path::EntryPath;
pub use tree::{ValidatedNavigationTree, Walk};
