use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::rounding::RoundingMode;

// ── OutputFormat ───────────────────────────────────────────────────────────────

/// How the analysis report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// Aligned `label  value` lines.
    Text,
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Descriptive statistics for a file of newline-separated integers
#[derive(Parser, Debug, Clone)]
#[command(
    name = "number-stats",
    about = "Descriptive statistics for a file of newline-separated integers",
    version
)]
pub struct Settings {
    /// File containing one integer per line
    // `String` rather than `PathBuf`: clap's path parser rejects "" before
    // `FileAnalyzer::new` can report it as invalid configuration.
    pub path: String,

    /// Tie-breaking rule when rounding average and median to one decimal
    #[arg(long, value_enum, default_value_t = RoundingMode::HalfEven)]
    pub rounding: RoundingMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Include source, timing and entry count in JSON output
    #[arg(long)]
    pub with_metadata: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
