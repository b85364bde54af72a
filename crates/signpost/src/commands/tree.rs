//! `signpost tree` command implementation.

use std::path::PathBuf;

use clap::Args;
use signpost_config::Config;
use signpost_nav::{NavigationEntry, ValidatedNavigationTree};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Path to configuration file (default: auto-discover signpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or sidebar is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let tree = config.navigation()?;

        if tree.is_empty() {
            output.info("Sidebar is empty");
            return Ok(());
        }
        for line in outline(&tree) {
            output.print(&line)?;
        }
        Ok(())
    }
}

/// Render the tree as indented lines, two spaces per level.
fn outline(tree: &ValidatedNavigationTree) -> Vec<String> {
    tree.walk()
        .map(|(path, entry)| {
            let indent = "  ".repeat(path.depth().saturating_sub(1));
            match entry {
                NavigationEntry::Leaf(leaf) => {
                    format!("{indent}{} → {}", leaf.label(), leaf.slug())
                }
                NavigationEntry::AutoGroup(group) => format!(
                    "{indent}{} → autogenerate: {}/",
                    group.label(),
                    group.directory().trim_end_matches('/')
                ),
                NavigationEntry::Group(group) => format!("{indent}{}", group.label()),
            }
        })
        .collect()
}
