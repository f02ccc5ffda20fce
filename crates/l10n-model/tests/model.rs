use l10n_model::{
    ColumnMapping, ColumnSet, EntryId, EntrySet, Marker, ParsedRow, PartialMapping, Segment,
    StatusCatalog, StatusSpec, TranslationEntry,
};

#[test]
fn segment_serializes_with_kind_tag() {
    let text = serde_json::to_value(Segment::text("Hello ")).expect("serialize text");
    assert_eq!(text, serde_json::json!({ "kind": "text", "text": "Hello " }));

    let marker = serde_json::to_value(Segment::marker("{name}")).expect("serialize marker");
    assert_eq!(marker, serde_json::json!({ "kind": "marker", "text": "{name}" }));
}

#[test]
fn segment_exposes_raw_text() {
    assert_eq!(Segment::text("a").as_str(), "a");
    assert_eq!(Segment::marker("%s").as_str(), "%s");
    assert_eq!(
        Segment::marker("<b>").into_marker(),
        Some(Marker::new("<b>"))
    );
    assert_eq!(Segment::text("x").into_marker(), None);
}

#[test]
fn column_set_rejects_duplicates_on_deserialize() {
    let result: Result<ColumnSet, _> = serde_json::from_str(r#"["a","a"]"#);
    assert!(result.is_err());

    let ok: ColumnSet = serde_json::from_str(r#"["a","b"]"#).expect("deserialize columns");
    assert_eq!(ok.as_slice(), ["a", "b"]);
}

#[test]
fn parsed_row_serializes_as_map() {
    let columns = ColumnSet::from_header(&["key", "en"]).unwrap();
    let row = ParsedRow::from_cells(&columns, &["HELLO", "Hello"]);
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json, serde_json::json!({ "key": "HELLO", "en": "Hello" }));
}

#[test]
fn partial_mapping_completeness() {
    let mut partial = PartialMapping::default();
    assert!(!partial.is_complete());
    partial.key = Some("key".into());
    assert!(!partial.is_complete());
    partial.source = Some("en".into());
    assert!(partial.is_complete());

    let full: PartialMapping = ColumnMapping::new("key", "en").with_target("ko").into();
    assert_eq!(full.target.as_deref(), Some("ko"));
    assert!(full.status.is_none());
}

#[test]
fn mapping_omits_absent_optional_fields() {
    let json = serde_json::to_value(ColumnMapping::new("key", "en")).expect("serialize");
    assert_eq!(json, serde_json::json!({ "key": "key", "source": "en" }));
}

#[test]
fn custom_catalog_keeps_order() {
    let catalog = StatusCatalog::from_specs(&[
        StatusSpec::new("New", "slate"),
        StatusSpec::new("Done", "emerald"),
    ])
    .expect("catalog");
    let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["New", "Done"]);
    assert_eq!(catalog.default_status().name, "New");
}

#[test]
fn entry_set_round_trips_through_json() {
    let statuses = StatusCatalog::default();
    let draft = statuses.by_name("Draft").unwrap().id;
    let set = EntrySet {
        columns: ColumnSet::from_header(&["key", "en", "ko"]).unwrap(),
        mapping: ColumnMapping::new("key", "en").with_target("ko"),
        statuses,
        entries: vec![TranslationEntry {
            id: EntryId::new_v4(),
            key: "HELLO".into(),
            source: "Hello {name}".into(),
            target: "안녕 {name}".into(),
            status_id: draft,
            notes: None,
        }],
    };

    let json = serde_json::to_string(&set).expect("serialize set");
    let back: EntrySet = serde_json::from_str(&json).expect("deserialize set");
    assert_eq!(back.entries, set.entries);
    assert_eq!(back.status_name(&back.entries[0]), Some("Draft"));
}
