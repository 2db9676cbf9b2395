//! logview - Entry Point

use clap::Parser;
use logview::config::{self, CliOverrides};
use logview::model::AppError;
use logview::state::LogViewOptions;
use logview::view::TuiError;
use std::path::PathBuf;
use tracing::info;

/// Live log viewer with follow mode and wraparound search
#[derive(Parser, Debug)]
#[command(name = "logview")]
#[command(version)]
#[command(about = "Live, append-only log viewer pane for the terminal")]
pub struct Args {
    /// Path to log file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Start with follow mode off
    #[arg(long)]
    pub no_follow: bool,

    /// Start with line wrapping off
    #[arg(long)]
    pub no_wrap: bool,

    /// Start in table view
    #[arg(long)]
    pub table: bool,

    /// Search for a term after the initial load
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that override config values. Unset flags leave config alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            follow: self.no_follow.then_some(false),
            line_wrap: self.no_wrap.then_some(false),
            table_view: self.table.then_some(true),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve(args.config.clone(), args.overrides())?;

    logview::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = logview::source::detect_input_source(args.file.clone())?;
    let options = LogViewOptions::from(&config);

    logview::view::run_with_source(input_source, options, args.search.as_deref()).map_err(
        |err| match err {
            TuiError::Io(err) => AppError::Terminal(err),
            TuiError::Input(err) => AppError::Input(err),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_does_not_error() {
        let err = Args::try_parse_from(["logview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_does_not_error() {
        let err = Args::try_parse_from(["logview", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["logview"]);
        assert_eq!(args.file, None);
        assert!(!args.no_follow);
        assert!(!args.no_wrap);
        assert!(!args.table);
        assert_eq!(args.search, None);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn file_path_populates_file_field() {
        let args = Args::parse_from(["logview", "app.log"]);
        assert_eq!(args.file, Some(PathBuf::from("app.log")));
    }

    #[test]
    fn flags_become_overrides() {
        let args = Args::parse_from(["logview", "--no-follow", "--no-wrap", "--table"]);
        assert_eq!(
            args.overrides(),
            CliOverrides {
                follow: Some(false),
                line_wrap: Some(false),
                table_view: Some(true),
            }
        );
    }

    #[test]
    fn search_short_and_long() {
        let short = Args::parse_from(["logview", "-s", "error"]);
        assert_eq!(short.search.as_deref(), Some("error"));
        let long = Args::parse_from(["logview", "--search", "warn"]);
        assert_eq!(long.search.as_deref(), Some("warn"));
    }

    #[test]
    fn config_path() {
        let args = Args::parse_from(["logview", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["logview", "--follow"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
