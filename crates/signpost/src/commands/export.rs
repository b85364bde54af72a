//! `signpost export` command implementation.

use std::path::PathBuf;

use clap::Args;
use signpost_config::{CliSettings, Config, SiteOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover signpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long = "output")]
    output_path: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Deployed site URL (overrides config).
    #[arg(long, env = "SIGNPOST_SITE")]
    site: Option<String>,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the output cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            site: self.site,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = config.site_options()?;
        let json = render(&options, self.compact)?;

        match self.output_path {
            Some(path) => {
                std::fs::write(&path, format!("{json}\n"))?;
                tracing::info!(path = %path.display(), "Site options exported");
                output.success(&format!("Wrote site options to {}", path.display()));
            }
            None => output.print(&json)?,
        }
        Ok(())
    }
}

fn render(options: &SiteOptions, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(options)?
    } else {
        serde_json::to_string_pretty(options)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_options() -> SiteOptions {
        Config::from_toml(
            r#"
title = "Purro Docs"

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }
"#,
        )
        .unwrap()
        .site_options()
        .unwrap()
    }

    #[test]
    fn test_render_compact() {
        let json = render(&sample_options(), true).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Purro Docs","sidebar":[{"label":"Reference","autogenerate":{"directory":"reference"}}]}"#
        );
    }

    #[test]
    fn test_render_pretty_is_multiline() {
        let json = render(&sample_options(), false).unwrap();
        assert!(json.lines().count() > 1);
        assert!(json.contains("\"autogenerate\""));
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("signpost.toml");
        std::fs::write(&config_path, "title = \"Docs\"\n").unwrap();
        let out_path = dir.path().join("site.json");

        let args = ExportArgs {
            config: Some(config_path),
            output_path: Some(out_path.clone()),
            title: None,
            site: Some("https://docs.example.com".to_owned()),
            compact: true,
            verbose: false,
        };
        args.execute().unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(
            written,
            "{\"title\":\"Docs\",\"sidebar\":[],\"site\":\"https://docs.example.com\"}\n"
        );
    }
}
