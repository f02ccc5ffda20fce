use std::io::Write;

use rust_xlsxwriter::{Workbook, XlsxError};

use l10n_ingest::{
    Delimiter, IngestError, ParseOptions, ParseTracker, SpreadsheetFile, parse_spreadsheet,
    read_spreadsheet,
};

fn csv_file(text: &str) -> SpreadsheetFile {
    SpreadsheetFile::new("strings.csv", text.as_bytes())
}

fn parse(text: &str) -> l10n_ingest::ParsedSheet {
    parse_spreadsheet(&csv_file(text), &ParseOptions::default()).unwrap()
}

#[test]
fn csv_with_header_row() {
    let sheet = parse("key,en,ko\nHELLO,Hello,안녕\n");
    assert!(sheet.has_header);
    assert_eq!(sheet.columns.as_slice(), ["key", "en", "ko"]);
    assert_eq!(sheet.rows.len(), 1);
    let row = &sheet.rows[0];
    assert_eq!(row.get("key"), "HELLO");
    assert_eq!(row.get("en"), "Hello");
    assert_eq!(row.get("ko"), "안녕");
    assert_eq!(sheet.delimiter.as_deref(), Some(","));
}

#[test]
fn csv_with_blank_header_cell_gets_synthetic_columns() {
    let sheet = parse(",B\nC,D\n");
    assert!(!sheet.has_header);
    assert_eq!(sheet.columns.as_slice(), ["Column 1", "Column 2"]);
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0].get("Column 1"), "");
    assert_eq!(sheet.rows[0].get("Column 2"), "B");
    assert_eq!(sheet.rows[1].get("Column 1"), "C");
    assert_eq!(sheet.rows[1].get("Column 2"), "D");
}

#[test]
fn csv_with_numeric_first_row_is_still_a_header() {
    let sheet = parse("1,2\n3,4\n");
    assert!(sheet.has_header);
    assert_eq!(sheet.columns.as_slice(), ["1", "2"]);
    assert_eq!(sheet.rows.len(), 1);
}

#[test]
fn empty_csv_is_not_an_error() {
    let sheet = parse("");
    assert!(sheet.is_empty());
    assert!(sheet.rows.is_empty());
    assert!(sheet.columns.is_empty());
    assert!(sheet.delimiter.is_none());
}

#[test]
fn explicit_semicolon_delimiter() {
    let options = ParseOptions::default().with_delimiter(Delimiter::explicit(";"));
    let sheet =
        parse_spreadsheet(&csv_file("key;text\nGREET;Hello, {name}\n"), &options).unwrap();
    assert_eq!(sheet.rows[0].get("text"), "Hello, {name}");
    assert_eq!(sheet.delimiter.as_deref(), Some(";"));
}

#[test]
fn multi_character_delimiter() {
    let options = ParseOptions::default().with_delimiter(Delimiter::explicit("||"));
    let sheet = parse_spreadsheet(&csv_file("key||en\nA||a|b\n"), &options).unwrap();
    assert_eq!(sheet.columns.as_slice(), ["key", "en"]);
    assert_eq!(sheet.rows[0].get("en"), "a|b");
}

#[test]
fn detected_tab_delimiter() {
    let sheet = parse("key\ten\nBYE\tSee you, later\n");
    assert_eq!(sheet.delimiter.as_deref(), Some("\t"));
    assert_eq!(sheet.rows[0].get("en"), "See you, later");
}

#[test]
fn media_type_selects_delimited_text() {
    let file = SpreadsheetFile::new("upload", "key,en\nA,a\n".as_bytes()).with_media_type("text/csv");
    let sheet = parse_spreadsheet(&file, &ParseOptions::default()).unwrap();
    assert_eq!(sheet.rows.len(), 1);
}

#[test]
fn multi_character_delimiter_keeps_stray_quotes_in_field() {
    let options = ParseOptions::default().with_delimiter(Delimiter::explicit("||"));
    let text = "key||en\nA||5\" screen\nB||ok\nC||x\n";
    let sheet = parse_spreadsheet(&csv_file(text), &options).unwrap();
    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.rows[0].get("en"), "5\" screen");
    assert_eq!(sheet.rows[1].get("key"), "B");
    assert_eq!(sheet.rows[2].get("en"), "x");
}

fn workbook_file(
    name: &str,
    build: impl FnOnce(&mut Workbook) -> Result<(), XlsxError>,
) -> SpreadsheetFile {
    let mut workbook = Workbook::new();
    build(&mut workbook).unwrap();
    SpreadsheetFile::new(name, workbook.save_to_buffer().unwrap())
}

#[test]
fn workbook_blank_cells_read_as_empty() {
    let file = workbook_file("strings.xlsx", |workbook| {
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "key")?;
        sheet.write_string(0, 1, "en")?;
        sheet.write_string(0, 2, "notes")?;
        sheet.write_string(1, 0, "HELLO")?;
        sheet.write_string(1, 2, "greeting")?;
        Ok(())
    });
    let sheet = parse_spreadsheet(&file, &ParseOptions::default()).unwrap();
    assert!(sheet.has_header);
    assert_eq!(sheet.columns.as_slice(), ["key", "en", "notes"]);
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].get("en"), "");
    assert_eq!(sheet.rows[0].get("notes"), "greeting");
    assert!(sheet.delimiter.is_none());
}

#[test]
fn workbook_numbers_render_without_trailing_zero() {
    let file = workbook_file("counts.xlsx", |workbook| {
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "key")?;
        sheet.write_string(0, 1, "count")?;
        sheet.write_string(1, 0, "ITEMS")?;
        sheet.write_number(1, 1, 3.0)?;
        sheet.write_string(2, 0, "RATIO")?;
        sheet.write_number(2, 1, 2.5)?;
        Ok(())
    });
    let sheet = parse_spreadsheet(&file, &ParseOptions::default()).unwrap();
    assert_eq!(sheet.rows[0].get("count"), "3");
    assert_eq!(sheet.rows[1].get("count"), "2.5");
}

#[test]
fn workbook_reads_only_the_first_sheet() {
    let file = workbook_file("two-sheets.xlsx", |workbook| {
        let first = workbook.add_worksheet();
        first.set_name("Strings")?;
        first.write_string(0, 0, "key")?;
        first.write_string(0, 1, "en")?;
        first.write_string(1, 0, "HELLO")?;
        first.write_string(1, 1, "Hello")?;
        let second = workbook.add_worksheet();
        second.set_name("Scratch")?;
        second.write_string(0, 0, "ignored")?;
        second.write_string(1, 0, "also ignored")?;
        Ok(())
    });
    let sheet = parse_spreadsheet(&file, &ParseOptions::default()).unwrap();
    assert_eq!(sheet.columns.as_slice(), ["key", "en"]);
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].get("en"), "Hello");
}

#[test]
fn workbook_table_away_from_a1_keeps_its_header() {
    let file = workbook_file("offset.xlsx", |workbook| {
        let sheet = workbook.add_worksheet();
        sheet.write_string(1, 1, "key")?;
        sheet.write_string(1, 2, "en")?;
        sheet.write_string(2, 1, "HELLO")?;
        sheet.write_string(2, 2, "Hello")?;
        Ok(())
    });
    let sheet = parse_spreadsheet(&file, &ParseOptions::default()).unwrap();
    assert!(sheet.has_header);
    assert_eq!(sheet.columns.as_slice(), ["key", "en"]);
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].get("key"), "HELLO");
}

#[test]
fn unreadable_workbook_is_an_error() {
    let file = SpreadsheetFile::new("strings.xlsx", b"PK\x03\x04 not really a zip".to_vec());
    let result = parse_spreadsheet(&file, &ParseOptions::default());
    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}

#[tokio::test]
async fn reads_file_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all("key,en\nHELLO,Hello {name}\n".as_bytes()).unwrap();
    file.flush().unwrap();

    let sheet = read_spreadsheet(file.path(), ParseOptions::default())
        .await
        .unwrap();
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].get("en"), "Hello {name}");
}

#[tokio::test]
async fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let err = read_spreadsheet(&path, ParseOptions::default())
        .await
        .unwrap_err();
    match err {
        IngestError::FileRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn superseded_parse_is_dropped() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"key;en\nA;a\n").unwrap();
    file.flush().unwrap();

    let tracker = ParseTracker::new();
    let first = tracker.issue();
    let first_result = read_spreadsheet(file.path(), ParseOptions::default()).await;

    // A second request with another delimiter is issued before the first
    // result is applied.
    let options = ParseOptions::default().with_delimiter(Delimiter::explicit(";"));
    let latest = tracker.run(file.path(), options).await;
    let latest = latest.expect("latest request is applied").unwrap();
    assert_eq!(latest.columns.as_slice(), ["key", "en"]);

    assert!(tracker.accept(first, first_result).is_none());
}
