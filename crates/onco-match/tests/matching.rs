//! End-to-end matching over a small vocabulary.

use std::collections::BTreeMap;

use onco_match::{TermMatcher, aggregate, matched_codes, matched_terms};
use onco_model::{Code, RecordRow, VocabularyStore};

fn record(entity: &str, variable: &str, property: &str, term: &str, code: &str) -> RecordRow {
    RecordRow {
        variable_name: variable.to_string(),
        term: term.to_string(),
        entity: entity.to_string(),
        description: String::new(),
        code: Code::from(code),
        object_property: property.to_string(),
    }
}

fn clinical_store() -> VocabularyStore {
    let mut terms = BTreeMap::new();
    terms.insert("angiomyxoma".to_string(), vec![Code::from("C01")]);
    terms.insert("carcinoma".to_string(), vec![Code::from("C02")]);
    terms.insert("high blood pressure".to_string(), vec![Code::from("HBP01")]);
    terms.insert("heart disease".to_string(), vec![Code::from("HD01")]);

    VocabularyStore::from_tables(
        terms,
        vec![
            record("Diagnosis", "Histology", "hasHistology", "angiomyxoma", "C01"),
            record("Diagnosis", "Histology", "hasHistology", "carcinoma", "C02"),
            record(
                "Patient",
                "Comorbidity",
                "hasComorbidity",
                "high blood pressure",
                "HBP01",
            ),
        ],
    )
}

#[test]
fn resolves_codes_from_clinical_free_text() {
    let store = clinical_store();
    let matcher = TermMatcher::new(&store);

    let matches = matcher.match_terms(
        "The patient with angiomyxoma and carcinoma had high blood pressure.",
        80,
    );

    assert_eq!(
        matched_codes(&matches),
        vec![Code::from("C01"), Code::from("C02"), Code::from("HBP01")]
    );
    assert_eq!(
        matched_terms(&matches),
        vec!["angiomyxoma", "carcinoma", "high blood pressure"]
    );
}

#[test]
fn list_valued_terms_flatten_into_the_code_list() {
    let mut terms = BTreeMap::new();
    terms.insert(
        "leiomyosarcoma".to_string(),
        vec![Code::Integer(10), Code::Integer(11)],
    );
    let matcher = TermMatcher::new(&VocabularyStore::from_tables(terms, Vec::new()));

    let matches = matcher.match_terms("biopsy confirmed leiomyosarcoma", 80);
    assert_eq!(
        matched_codes(&matches),
        vec![Code::Integer(10), Code::Integer(11)]
    );
}

#[test]
fn groups_are_keyed_by_shared_words() {
    let store = clinical_store();
    let matcher = TermMatcher::new(&store);
    let query = "The patient with angiomyxoma and carcinoma had high blood pressure.";

    let groups = aggregate(query, &matcher.match_terms(query, 80), &store, 80);

    // Keys are the sorted words justifying each match.
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, ["angiomyxoma", "blood high pressure", "carcinoma"]);

    let pressure = &groups["blood high pressure"];
    assert_eq!(pressure.len(), 1);
    assert_eq!(pressure[0].entity, "Patient");
    assert_eq!(pressure[0].variable_name, "Comorbidity");
    assert_eq!(pressure[0].code, Code::from("HBP01"));
}

#[test]
fn matches_without_records_are_skipped_in_aggregation() {
    let mut terms = BTreeMap::new();
    terms.insert("orphan term".to_string(), vec![Code::from("X01")]);
    // No record rows: the term matches but cannot be annotated.
    let store = VocabularyStore::from_tables(terms, Vec::new());
    let matcher = TermMatcher::new(&store);

    let query = "notes mention the orphan term here";
    let matches = matcher.match_terms(query, 80);
    assert_eq!(matches.len(), 1);

    let groups = aggregate(query, &matches, &store, 80);
    assert!(groups.is_empty());
}
