//! `signpost check` command implementation.

use std::path::PathBuf;

use clap::Args;
use signpost_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover signpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat sidebar lint warnings as errors.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or sidebar is invalid, or if
    /// `--strict` is set and the sidebar has lint warnings.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let tree = config.navigation()?;

        output.highlight(&format!("Site: {}", config.title));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Sidebar: {} entries, {} pages, {} autogenerated groups, depth {}",
            tree.len(),
            tree.slugs().len(),
            tree.autogenerated_directories().len(),
            tree.depth()
        ));

        let warnings = tree.warnings();
        for warning in warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        if self.strict && !warnings.is_empty() {
            return Err(CliError::Validation(format!(
                "{} sidebar warning(s) with --strict",
                warnings.len()
            )));
        }

        output.success("Configuration is valid");
        Ok(())
    }
}
