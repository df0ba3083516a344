//! Similarity scoring primitives.
//!
//! Token-set scoring follows the RapidFuzz construction: compare the
//! sorted shared-token string against each side's shared-plus-distinct
//! string and keep the best indel ratio. The result is independent of
//! token order and tolerant of one side carrying extra tokens.

use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Token-set similarity between two normalized strings, in `[0, 100]`.
///
/// Symmetric with respect to token order; when one side's tokens are a
/// subset of the other's (with at least one shared token) the score
/// is 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let shared: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let shared_joined = shared.join(" ");
    let a_joined = join_with_shared(&shared_joined, &only_a);
    let b_joined = join_with_shared(&shared_joined, &only_b);

    let mut best = fuzz::ratio(a_joined.chars(), b_joined.chars());
    if !shared_joined.is_empty() {
        best = best
            .max(fuzz::ratio(shared_joined.chars(), a_joined.chars()))
            .max(fuzz::ratio(shared_joined.chars(), b_joined.chars()));
    }
    best
}

/// Substring-tolerant similarity used for dataset-name search, `[0, 100]`.
pub fn partial_score(query: &str, name: &str) -> f64 {
    if query.is_empty() || name.is_empty() {
        return 0.0;
    }
    fuzz::partial_ratio(query.chars(), name.chars())
}

fn join_with_shared(shared: &str, rest: &[&str]) -> String {
    let rest = rest.join(" ");
    if shared.is_empty() {
        rest
    } else if rest.is_empty() {
        shared.to_string()
    } else {
        format!("{shared} {rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_order_does_not_matter() {
        let forward = token_set_ratio("myxoid liposarcoma of limb", "limb of liposarcoma myxoid");
        assert_eq!(forward, 100.0);
    }

    #[test]
    fn token_subset_scores_full_marks() {
        let score = token_set_ratio(
            "angiomyxoma",
            "the patient with angiomyxoma was diagnosed",
        );
        assert_eq!(score, 100.0);
    }

    #[test]
    fn disjoint_tokens_score_low() {
        assert!(token_set_ratio("angiomyxoma", "pressure") < 50.0);
    }

    #[test]
    fn empty_sides_score_zero() {
        assert_eq!(token_set_ratio("", "carcinoma"), 0.0);
        assert_eq!(token_set_ratio("carcinoma", ""), 0.0);
    }

    #[test]
    fn partial_score_finds_substrings() {
        assert_eq!(
            partial_score("carcinoma", "squamous cell carcinoma of lung"),
            100.0
        );
        assert_eq!(partial_score("", "anything"), 0.0);
    }
}
