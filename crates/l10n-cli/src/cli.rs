//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use l10n_ingest::Delimiter;
use l10n_map::DEFAULT_PREVIEW_ROWS;

#[derive(Parser)]
#[command(
    name = "l10n",
    version,
    about = "Import, check and export translation tables",
    long_about = "Import translation tables from CSV or spreadsheet workbooks.\n\n\
                  Maps columns onto key/source/target/status, checks that every\n\
                  placeholder and markup tag in a source string survives translation,\n\
                  and exports entries back to delimited text. Glossary terms are\n\
                  imported and exported alongside."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a table and show its columns and first rows.
    Inspect(InspectArgs),

    /// Map a table's columns and write the resulting entries as JSON.
    Import(ImportArgs),

    /// Compare the markers of a source string and its translation.
    Check(CheckArgs),

    /// Report missing markers across an imported entry file.
    Audit(AuditArgs),

    /// Write an imported entry file back out as delimited text.
    Export(ExportArgs),

    /// Import or export glossary terms.
    #[command(subcommand)]
    Glossary(GlossaryCommand),
}

#[derive(Subcommand)]
pub enum GlossaryCommand {
    /// Read `source,target,notes` rows and write the terms as JSON.
    Import(GlossaryImportArgs),

    /// Write a glossary JSON file back out as delimited text.
    Export(GlossaryExportArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV file or spreadsheet workbook.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Delimiter for CSV input (`auto`, `tab`, or any literal string).
    #[arg(long, default_value = "auto")]
    pub delimiter: Delimiter,

    /// Number of rows to preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file or spreadsheet workbook.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column holding the entry key.
    #[arg(long, value_name = "COLUMN")]
    pub key: String,

    /// Column holding the source text.
    #[arg(long, value_name = "COLUMN")]
    pub source: String,

    /// Column holding the translation.
    #[arg(long, value_name = "COLUMN")]
    pub target: Option<String>,

    /// Column holding the status name.
    #[arg(long, value_name = "COLUMN")]
    pub status: Option<String>,

    /// Delimiter for CSV input (`auto`, `tab`, or any literal string).
    #[arg(long, default_value = "auto")]
    pub delimiter: Delimiter,

    /// JSON array of `{ "name", "color" }` replacing the built-in statuses.
    #[arg(long, value_name = "FILE", conflicts_with = "status_preset")]
    pub statuses: Option<PathBuf>,

    /// Built-in status names to resolve the status column against.
    #[arg(long = "status-preset", value_enum, default_value = "english")]
    pub status_preset: StatusPresetArg,

    /// Number of mapped rows to preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Write entries here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Source string.
    pub source: String,

    /// Translated string.
    pub target: String,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Entry file written by `import`.
    #[arg(value_name = "ENTRIES")]
    pub entries: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Entry file written by `import`.
    #[arg(value_name = "ENTRIES")]
    pub entries: PathBuf,

    /// Output delimiter; `auto` writes commas.
    #[arg(long, default_value = "auto")]
    pub delimiter: Delimiter,

    /// Write here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GlossaryImportArgs {
    /// Delimited glossary file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter (`\t` or `tab` for tabs); `auto` reads commas.
    #[arg(long, default_value = ",")]
    pub delimiter: Delimiter,

    /// Discard the first row.
    #[arg(long = "skip-header")]
    pub skip_header: bool,

    /// Write terms here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GlossaryExportArgs {
    /// Glossary file written by `glossary import`.
    #[arg(value_name = "TERMS")]
    pub terms: PathBuf,

    /// Output delimiter; `auto` writes commas.
    #[arg(long, default_value = ",")]
    pub delimiter: Delimiter,

    /// Write here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Built-in status catalogs.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusPresetArg {
    /// Untranslated, Draft, Translated, Reviewed.
    English,
    /// 미번역, 초벌 번역, 번역 완료, 검수 완료.
    Korean,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
