//! Loaders for the four input tables.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use onco_model::{Code, DiagnosisEntry, RecordRow, TopographyRow};

use crate::error::{IngestError, Result};

/// Row of the diagnosis dataset CSV.
#[derive(Debug, Deserialize)]
struct DiagnosisCsvRow {
    #[serde(rename = "Concept Id")]
    id: String,
    #[serde(rename = "Topography")]
    topography: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Row of the topography classification CSV.
///
/// The `Subsite` column of the source spreadsheet is not consumed here.
#[derive(Debug, Deserialize)]
struct TopographyCsvRow {
    #[serde(rename = "ICD-O-3")]
    icdo3: String,
    #[serde(rename = "Site")]
    site: String,
    #[serde(rename = "Group")]
    group: String,
    #[serde(rename = "Macrogrouping")]
    macrogrouping: String,
}

/// Term table value: a single code or a list of codes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CodeValue {
    One(Code),
    Many(Vec<Code>),
}

impl From<CodeValue> for Vec<Code> {
    fn from(value: CodeValue) -> Self {
        match value {
            CodeValue::One(code) => vec![code],
            CodeValue::Many(codes) => codes,
        }
    }
}

/// Loads the diagnosis dataset.
///
/// Rows without an id or a name carry nothing searchable and are
/// skipped; the skip count is logged for data-quality auditing.
pub fn load_diagnosis_entries(path: &Path) -> Result<Vec<DiagnosisEntry>> {
    let mut reader = csv_reader(path)?;
    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<DiagnosisCsvRow>() {
        let row = row.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let id = row.id.trim();
        let name = row.name.trim();
        if id.is_empty() || name.is_empty() {
            skipped += 1;
            continue;
        }
        entries.push(DiagnosisEntry {
            id: id.to_string(),
            topography: row.topography.trim().to_string(),
            name: name.to_string(),
        });
    }
    if skipped > 0 {
        tracing::debug!(skipped, path = %path.display(), "diagnosis rows without id or name");
    }
    tracing::info!(count = entries.len(), path = %path.display(), "loaded diagnosis dataset");
    Ok(entries)
}

/// Loads the topography classification rows.
///
/// Rows without a code range expression are skipped here; whether an
/// expression actually parses is the indexer's concern, not the
/// loader's.
pub fn load_topography_rows(path: &Path) -> Result<Vec<TopographyRow>> {
    let mut reader = csv_reader(path)?;
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<TopographyCsvRow>() {
        let row = row.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let icdo3 = row.icdo3.trim();
        if icdo3.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(TopographyRow {
            icdo3: icdo3.to_string(),
            site: row.site.trim().to_string(),
            group: row.group.trim().to_string(),
            macrogrouping: row.macrogrouping.trim().to_string(),
        });
    }
    if skipped > 0 {
        tracing::debug!(skipped, path = %path.display(), "topography rows without a code expression");
    }
    tracing::info!(count = rows.len(), path = %path.display(), "loaded topography classification");
    Ok(rows)
}

/// Loads the term→code table.
///
/// Scalar and list values are both accepted and normalized to code
/// lists. Duplicate keys inside the JSON object collapse last-wins at
/// parse time.
pub fn load_term_table(path: &Path) -> Result<BTreeMap<String, Vec<Code>>> {
    let file = open(path)?;
    let raw: BTreeMap<String, CodeValue> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let table: BTreeMap<String, Vec<Code>> = raw
        .into_iter()
        .map(|(term, value)| (term, value.into()))
        .collect();
    tracing::info!(terms = table.len(), path = %path.display(), "loaded term table");
    Ok(table)
}

/// Loads the code→record table.
///
/// The serialized table is keyed by a legacy concatenated string; the
/// key is discarded and structured keys are rebuilt from the row fields
/// when the store is constructed.
pub fn load_record_rows(path: &Path) -> Result<Vec<RecordRow>> {
    let file = open(path)?;
    let raw: BTreeMap<String, RecordRow> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(records = raw.len(), path = %path.display(), "loaded record table");
    Ok(raw.into_values().collect())
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = open(path)?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file))
}
