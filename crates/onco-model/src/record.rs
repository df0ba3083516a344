//! Variable records and their composite keys.

use serde::{Deserialize, Serialize};

use crate::Code;

/// One row of the code→record input table, as the extraction job emits it.
///
/// The serialized table is keyed by a legacy concatenated string; that key
/// is discarded on load and rebuilt structurally from the row fields via
/// [`RecordRow::into_keyed_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRow {
    /// Human-readable variable label (e.g. "Histology").
    pub variable_name: String,
    /// Vocabulary term this row binds to the code.
    pub term: String,
    /// Owning entity (e.g. "Diagnosis").
    pub entity: String,
    /// Free-text variable description.
    #[serde(default)]
    pub description: String,
    /// Canonical code for the term.
    pub code: Code,
    /// Ontology property the variable is read from; part of the record key.
    #[serde(default)]
    pub object_property: String,
}

/// Metadata describing the variable a vocabulary term belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Human-readable variable label.
    pub variable_name: String,
    /// Vocabulary term.
    pub term: String,
    /// Owning entity.
    pub entity: String,
    /// Free-text variable description.
    pub description: String,
    /// Canonical code.
    pub code: Code,
}

/// Composite record key: `(entity, object_property, term)`.
///
/// Identical terms are reused by different entities and variables, so a
/// term alone cannot address a record. The key is kept structured so a
/// separator character inside any component can never cause a collision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    /// Owning entity, after entity normalization.
    pub entity: String,
    /// Ontology property.
    pub object_property: String,
    /// Vocabulary term.
    pub term: String,
}

impl RecordRow {
    /// Splits the row into its key and stored record.
    ///
    /// Legacy entities are normalized first, before the key is built:
    /// `HistologySubGroup` rows fold into the `Diagnosis` entity as the
    /// `Histology` variable, and `Subsite` rows as `Topography`.
    pub fn into_keyed_record(self) -> (RecordKey, VariableRecord) {
        let remapped = match self.entity.as_str() {
            "HistologySubGroup" => Some("Histology"),
            "Subsite" => Some("Topography"),
            _ => None,
        };
        let (entity, variable_name) = match remapped {
            Some(variable) => ("Diagnosis".to_string(), variable.to_string()),
            None => (self.entity, self.variable_name),
        };
        let key = RecordKey {
            entity: entity.clone(),
            object_property: self.object_property,
            term: self.term.clone(),
        };
        let record = VariableRecord {
            variable_name,
            term: self.term,
            entity,
            description: self.description,
            code: self.code,
        };
        (key, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entity: &str, variable_name: &str, term: &str) -> RecordRow {
        RecordRow {
            variable_name: variable_name.to_string(),
            term: term.to_string(),
            entity: entity.to_string(),
            description: String::new(),
            code: Code::Integer(1),
            object_property: "hasCode".to_string(),
        }
    }

    #[test]
    fn histology_subgroup_folds_into_diagnosis() {
        let (key, record) = row("HistologySubGroup", "ignored", "myxoid").into_keyed_record();
        assert_eq!(key.entity, "Diagnosis");
        assert_eq!(record.entity, "Diagnosis");
        assert_eq!(record.variable_name, "Histology");
    }

    #[test]
    fn subsite_folds_into_topography() {
        let (_, record) = row("Subsite", "ignored", "upper lobe").into_keyed_record();
        assert_eq!(record.entity, "Diagnosis");
        assert_eq!(record.variable_name, "Topography");
    }

    #[test]
    fn other_entities_pass_through() {
        let (key, record) = row("Surgery", "Margins", "R0").into_keyed_record();
        assert_eq!(key.entity, "Surgery");
        assert_eq!(record.variable_name, "Margins");
        assert_eq!(key.object_property, "hasCode");
    }
}
