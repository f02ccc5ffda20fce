use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{Instrument, info, info_span, trace, warn};

use l10n_ingest::{
    Delimiter, ParseOptions, ParsedSheet, decode_text, read_glossary, read_spreadsheet,
    write_entries_csv, write_glossary_csv,
};
use l10n_map::{build_entry_set, confirm_mapping, preview};
use l10n_model::{EntrySet, GlossaryTerm, PartialMapping, StatusCatalog, StatusSpec};
use l10n_tokens::{MarkerReport, audit_entries, missing_markers};

use l10n_cli::logging::redact_value;
use l10n_cli::render::{
    check_report, columns_table, glossary_table, issues_table, mapping_table, rows_table,
};

use crate::cli::{
    AuditArgs, CheckArgs, ExportArgs, GlossaryExportArgs, GlossaryImportArgs, ImportArgs,
    InspectArgs, StatusPresetArg,
};

pub async fn run_inspect(args: &InspectArgs) -> Result<()> {
    let sheet = load_sheet(&args.file, &args.delimiter).await?;
    println!("File: {}", args.file.display());
    if sheet.is_empty() {
        println!("No rows found; nothing to map.");
        return Ok(());
    }
    print_sheet_facts(&sheet);
    println!("{}", columns_table(&sheet));
    println!("{}", rows_table(&sheet, args.preview_rows));
    Ok(())
}

pub async fn run_import(args: &ImportArgs) -> Result<()> {
    let span = info_span!("import", file = %args.file.display());
    let sheet = load_sheet(&args.file, &args.delimiter)
        .instrument(span.clone())
        .await?;
    let _guard = span.enter();
    if sheet.is_empty() {
        println!("No rows found in {}; nothing to map.", args.file.display());
        return Ok(());
    }

    let partial = PartialMapping {
        key: Some(args.key.clone()),
        source: Some(args.source.clone()),
        target: args.target.clone(),
        status: args.status.clone(),
    };
    let shown = preview(&sheet.rows, &partial, args.preview_rows);
    let mapping = confirm_mapping(partial, &sheet.columns).with_context(|| {
        format!(
            "invalid column mapping (available columns: {})",
            sheet.columns.as_slice().join(", ")
        )
    })?;
    let statuses = load_catalog(args.statuses.as_deref(), args.status_preset)?;

    let set = build_entry_set(sheet.columns, &sheet.rows, mapping, statuses);
    for entry in &set.entries {
        trace!(
            key = redact_value(&entry.key),
            source = redact_value(&entry.source),
            target = redact_value(&entry.target),
            "entry"
        );
    }

    // Tables go to stderr when stdout carries the JSON.
    let summary = format!(
        "{}\nImported {} entries from {}",
        mapping_table(&shown),
        set.entries.len(),
        args.file.display()
    );
    if args.output.is_some() {
        println!("{summary}");
    } else {
        eprintln!("{summary}");
    }

    let mut out = open_output(args.output.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &set).context("serialize entries")?;
    writeln!(out).context("write entries")?;
    out.flush().context("write entries")?;
    info!(entries = set.entries.len(), "import complete");
    Ok(())
}

/// Returns true when the target keeps every source marker.
pub fn run_check(args: &CheckArgs) -> bool {
    print!("{}", check_report(&args.source, &args.target));
    missing_markers(&args.source, &args.target).is_empty()
}

pub fn run_audit(args: &AuditArgs) -> Result<MarkerReport> {
    let set = load_entry_set(&args.entries)?;
    let report = audit_entries(&set.entries);
    println!(
        "Checked {} entries ({} untranslated skipped)",
        report.checked, report.untranslated
    );
    if report.is_clean() {
        println!("No missing markers.");
    } else {
        println!("{}", issues_table(&report));
        println!(
            "{} entries missing {} markers",
            report.issue_count(),
            report.missing_count()
        );
    }
    Ok(report)
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let set = load_entry_set(&args.entries)?;
    let mut out = open_output(args.output.as_deref())?;
    write_entries_csv(&mut out, &set, &args.delimiter).context("write delimited output")?;
    out.flush().context("write delimited output")?;
    info!(entries = set.entries.len(), delimiter = %args.delimiter, "export complete");
    Ok(())
}

pub async fn run_glossary_import(args: &GlossaryImportArgs) -> Result<()> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("read {}", args.file.display()))?;
    let terms = read_glossary(&decode_text(&bytes), &args.delimiter, args.skip_header)
        .with_context(|| format!("parse glossary {}", args.file.display()))?;
    for term in &terms {
        trace!(
            source = redact_value(&term.source),
            target = redact_value(&term.target),
            "term"
        );
    }

    let summary = format!(
        "{}\nImported {} terms from {}",
        glossary_table(&terms),
        terms.len(),
        args.file.display()
    );
    if args.output.is_some() {
        println!("{summary}");
    } else {
        eprintln!("{summary}");
    }

    let mut out = open_output(args.output.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &terms).context("serialize glossary")?;
    writeln!(out).context("write glossary")?;
    out.flush().context("write glossary")?;
    info!(terms = terms.len(), "glossary import complete");
    Ok(())
}

pub fn run_glossary_export(args: &GlossaryExportArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.terms)
        .with_context(|| format!("read {}", args.terms.display()))?;
    let terms: Vec<GlossaryTerm> = serde_json::from_str(&text)
        .with_context(|| format!("parse glossary {}", args.terms.display()))?;
    let mut out = open_output(args.output.as_deref())?;
    write_glossary_csv(&mut out, &terms, &args.delimiter).context("write delimited output")?;
    out.flush().context("write delimited output")?;
    info!(terms = terms.len(), delimiter = %args.delimiter, "glossary export complete");
    Ok(())
}

async fn load_sheet(path: &Path, delimiter: &Delimiter) -> Result<ParsedSheet> {
    let options = ParseOptions::default().with_delimiter(delimiter.clone());
    read_spreadsheet(path, options)
        .await
        .with_context(|| format!("parse {}", path.display()))
}

fn print_sheet_facts(sheet: &ParsedSheet) {
    let header = if sheet.has_header {
        "first row"
    } else {
        "generated"
    };
    println!("Rows: {}", sheet.rows.len());
    println!("Columns: {} ({header})", sheet.columns.len());
    if let Some(delimiter) = &sheet.delimiter {
        println!("Delimiter: {}", Delimiter::explicit(delimiter.as_str()));
    }
}

fn load_catalog(path: Option<&Path>, preset: StatusPresetArg) -> Result<StatusCatalog> {
    let Some(path) = path else {
        return Ok(match preset {
            StatusPresetArg::English => StatusCatalog::default(),
            StatusPresetArg::Korean => StatusCatalog::korean(),
        });
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let specs: Vec<StatusSpec> = serde_json::from_str(&text)
        .with_context(|| format!("parse status list {}", path.display()))?;
    if specs.is_empty() {
        warn!(path = %path.display(), "status list is empty");
    }
    StatusCatalog::from_specs(&specs)
        .with_context(|| format!("load statuses from {}", path.display()))
}

fn load_entry_set(path: &Path) -> Result<EntrySet> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse entries {}", path.display()))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
