//! Shared text normalization.

/// Normalizes free text for matching.
///
/// Lowercases, maps every non-alphanumeric character to a space and
/// collapses whitespace runs. Queries, vocabulary terms and dataset names
/// all go through this one policy so similarity scores stay comparable
/// across call sites.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_separators() {
        assert_eq!(
            normalize("Well-Differentiated / NOS,  liposarcoma"),
            "well differentiated nos liposarcoma"
        );
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(normalize("high blood pressure."), "high blood pressure");
    }

    #[test]
    fn punctuation_only_input_is_empty() {
        assert_eq!(normalize(" -- / .. "), "");
    }
}
