//! Code range expression expansion.
//!
//! Topography tables describe hierarchy positions with compact ICD-O-3
//! range expressions in three forms:
//!
//! - simple: `C10.0` (exact) or `C12` (prefix over the whole major group)
//! - decimal range: `C34.1-34.9`, `C15.0-C15.9`, `C21.0-8`
//! - major range: `C53-C54-C55`, `C64-65`
//!
//! Anything else expands to no rules and the caller drops the row; an
//! empty expansion must never be read as "all codes match".

use onco_model::CodeRangeRule;

/// Expands a compact code range expression into match rules.
///
/// Major numbers are always zero-padded to two digits so downstream code
/// comparisons are apples-to-apples. Pure function of its input; returns
/// an empty list for anything that does not parse as one of the
/// supported forms.
pub fn expand(expression: &str) -> Vec<CodeRangeRule> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Vec::new();
    }
    if let Some(rules) = parse_decimal_range(expression) {
        return rules;
    }
    if expression.contains('-') {
        return parse_major_range(expression).unwrap_or_default();
    }
    parse_simple(expression).unwrap_or_default()
}

/// True when any rule matches the observed code.
pub fn matches_any(observed: &str, rules: &[CodeRangeRule]) -> bool {
    rules.iter().any(|rule| rule.matches(observed))
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `C<major>` or `C<major>.<minor>`; minor digits are preserved as written.
fn parse_simple(expression: &str) -> Option<Vec<CodeRangeRule>> {
    let rest = expression.strip_prefix('C')?;
    match rest.split_once('.') {
        Some((major, minor)) => {
            let major = parse_number(major)?;
            parse_number(minor)?;
            Some(vec![CodeRangeRule::exact(format!("C{major:02}.{minor}"))])
        }
        None => {
            let major = parse_number(rest)?;
            Some(vec![CodeRangeRule::prefix(format!("C{major:02}"))])
        }
    }
}

/// `C<major>.<a>-<end>` where the end is `b`, `<major>.b` or `C<major>.b`.
/// One exact rule per minor in `[a, b]`.
fn parse_decimal_range(expression: &str) -> Option<Vec<CodeRangeRule>> {
    let rest = expression.strip_prefix('C')?;
    let (start, end) = rest.split_once('-')?;
    let (major, minor_start) = start.split_once('.')?;
    let major = parse_number(major)?;
    let minor_start = parse_number(minor_start)?;

    let minor_end = if let Some(end_rest) = end.strip_prefix('C') {
        let (end_major, end_minor) = end_rest.split_once('.')?;
        parse_number(end_major)?;
        end_minor
    } else if let Some((end_major, end_minor)) = end.split_once('.') {
        parse_number(end_major)?;
        end_minor
    } else {
        end
    };
    let minor_end = parse_number(minor_end)?;

    Some(
        (minor_start..=minor_end)
            .map(|minor| CodeRangeRule::exact(format!("C{major:02}.{minor}")))
            .collect(),
    )
}

/// Dash-joined bare or C-prefixed majors; one prefix rule per major in
/// `[first, last]`.
fn parse_major_range(expression: &str) -> Option<Vec<CodeRangeRule>> {
    let mut majors = Vec::new();
    for part in expression.split('-') {
        let digits = part.trim();
        let digits = digits.strip_prefix('C').unwrap_or(digits);
        majors.push(parse_number(digits)?);
    }
    let first = *majors.first()?;
    let last = *majors.last()?;
    Some(
        (first..=last)
            .map(|major| CodeRangeRule::prefix(format!("C{major:02}")))
            .collect(),
    )
}
