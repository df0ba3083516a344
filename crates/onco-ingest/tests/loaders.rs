//! Loader round-trips through temporary files.

use std::fs;
use std::path::PathBuf;

use onco_ingest::{
    IngestError, load_diagnosis_entries, load_record_rows, load_term_table, load_topography_rows,
};
use onco_model::Code;

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn loads_diagnosis_entries_and_skips_incomplete_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "diagnosis-codes.csv",
        "Concept Id,Topography,Name\n\
         1001,C34.1,\"Adenocarcinoma, lung\"\n\
         ,C34.1,Row without id\n\
         1003,,Entry without topography\n\
         1004,C49.9, \n",
    );

    let entries = load_diagnosis_entries(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "1001");
    assert_eq!(entries[0].name, "Adenocarcinoma, lung");
    assert_eq!(entries[1].topography, "");
}

#[test]
fn loads_topography_rows_and_skips_blank_expressions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "topography.csv",
        "Subsite,ICD-O-3,Site,Group,Macrogrouping\n\
         unused,C34.1-34.9,Lung,Thoracic,Viscera\n\
         unused,,No expression,Dropped,Dropped\n\
         unused, C64 ,Kidney,Urological,Viscera\n",
    );

    let rows = load_topography_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].icdo3, "C34.1-34.9");
    assert_eq!(rows[1].icdo3, "C64");
    assert_eq!(rows[1].macrogrouping, "Viscera");
}

#[test]
fn term_table_accepts_scalar_and_list_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "term_to_code.json",
        r#"{"angiomyxoma": 4029680, "leiomyosarcoma": [10, 11], "subsite": "C49.9"}"#,
    );

    let table = load_term_table(&path).unwrap();
    assert_eq!(table["angiomyxoma"], vec![Code::Integer(4_029_680)]);
    assert_eq!(table["leiomyosarcoma"], vec![Code::Integer(10), Code::Integer(11)]);
    assert_eq!(table["subsite"], vec![Code::from("C49.9")]);
}

#[test]
fn record_table_drops_legacy_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "code_to_record.json",
        r#"{
            "Diagnosis_hasHistology_angiomyxoma": {
                "variable_name": "Histology",
                "term": "angiomyxoma",
                "entity": "Diagnosis",
                "description": "Histological classification",
                "code": 4029680,
                "object_property": "hasHistology"
            },
            "Subsite_hasSubsite_upper lobe": {
                "variable_name": "ignored",
                "term": "upper lobe",
                "entity": "Subsite",
                "code": 12
            }
        }"#,
    );

    let rows = load_record_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    // Keys sort "Diagnosis..." before "Subsite...".
    assert_eq!(rows[0].term, "angiomyxoma");
    assert_eq!(rows[1].entity, "Subsite");
    assert_eq!(rows[1].object_property, "");
}

#[test]
fn missing_input_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");

    let error = load_diagnosis_entries(&missing).unwrap_err();
    assert!(matches!(error, IngestError::FileNotFound { .. }));

    let error = load_term_table(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}

#[test]
fn malformed_json_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "broken.json", "{ not json");

    let error = load_term_table(&path).unwrap_err();
    match error {
        IngestError::Json { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Json error, got {other:?}"),
    }
}
