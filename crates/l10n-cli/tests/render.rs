//! Integration tests for command output rendering.

use l10n_cli::render::{
    check_report, columns_table, glossary_table, issues_table, mapping_table, rows_table,
};
use l10n_ingest::{
    Delimiter, ParseOptions, ParsedSheet, SpreadsheetFile, parse_spreadsheet, read_glossary,
};
use l10n_map::preview;
use l10n_model::{ColumnMapping, PartialMapping, StatusCatalog};
use l10n_tokens::audit_entries;

fn sheet(text: &str) -> ParsedSheet {
    let file = SpreadsheetFile::new("strings.csv", text.as_bytes());
    parse_spreadsheet(&file, &ParseOptions::default()).unwrap()
}

#[test]
fn check_report_lists_segments_and_missing_markers() {
    let report = check_report(
        "Hello {name}, you have %d new <b>messages</b>",
        "{name}님, 새 메시지가 있습니다",
    );
    insta::assert_snapshot!(report, @r#"
      text   "Hello "
      marker "{name}"
      text   ", you have "
      marker "%d"
      text   " new "
      marker "<b>"
      text   "messages"
      marker "</b>"
    missing 3: %d <b> </b>
    "#);
}

#[test]
fn check_report_when_all_markers_survive() {
    let report = check_report("<i>%s</i>", "<i>%s</i> 님");
    assert!(report.ends_with("all markers present\n"));
}

#[test]
fn columns_table_shows_names_and_samples() {
    let sheet = sheet("key,en,ko\nHELLO,Hello,안녕\n");
    let rendered = columns_table(&sheet).to_string();
    for expected in ["Column", "Sample", "key", "HELLO", "ko", "안녕"] {
        assert!(rendered.contains(expected), "missing {expected} in\n{rendered}");
    }
}

#[test]
fn rows_table_respects_limit() {
    let sheet = sheet("key,en\nA,first\nB,second\nC,third\n");
    let rendered = rows_table(&sheet, 2).to_string();
    assert!(rendered.contains("first"));
    assert!(rendered.contains("second"));
    assert!(!rendered.contains("third"));
}

#[test]
fn mapping_table_flags_missing_markers() {
    let sheet = sheet("key,en,ko\nGREET,Hi {name},안녕\nBYE,Bye,잘가\n");
    let partial = PartialMapping::from(ColumnMapping::new("key", "en").with_target("ko"));
    let rendered = mapping_table(&preview(&sheet.rows, &partial, 5)).to_string();
    assert!(rendered.contains("GREET"));
    assert!(rendered.contains("{name}"));
    assert!(rendered.contains("BYE"));
}

#[test]
fn issues_table_lists_each_broken_entry() {
    let sheet = sheet("key,en,ko\nGREET,Hi {name},안녕\nOK,<b>Go</b>,<b>가자</b>\n");
    let mapping = ColumnMapping::new("key", "en").with_target("ko");
    let entries = l10n_map::materialize(&sheet.rows, &mapping, &StatusCatalog::default());
    let report = audit_entries(&entries);
    assert_eq!(report.issue_count(), 1);

    let rendered = issues_table(&report).to_string();
    assert!(rendered.contains("GREET"));
    assert!(!rendered.contains("OK"));
}

#[test]
fn glossary_table_shows_trimmed_terms() {
    let terms = read_glossary(" save , 저장 , verb\n,orphan\ncancel,취소\n", &Delimiter::Auto, false)
        .unwrap();
    let rendered = glossary_table(&terms).to_string();
    assert!(rendered.contains("save"));
    assert!(rendered.contains("verb"));
    assert!(rendered.contains("취소"));
    assert!(!rendered.contains("orphan"));
}
