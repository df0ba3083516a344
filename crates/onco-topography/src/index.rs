//! Topography index construction and filtering.

use std::collections::{BTreeMap, BTreeSet};

use onco_model::{
    CodeRangeRule, DiagnosisEntry, FilterOptions, TopographyAttribute, TopographyRow,
};

use crate::expand::{expand, matches_any};

/// Filter constraints over the classification hierarchy.
///
/// Empty fields are unconstrained; non-empty fields require exact
/// equality on the corresponding attribute level.
#[derive(Debug, Clone, Default)]
pub struct TopographyFilter {
    /// Required macrogrouping, or empty.
    pub macrogrouping: String,
    /// Required group, or empty.
    pub group: String,
    /// Required site, or empty.
    pub site: String,
}

impl TopographyFilter {
    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.macrogrouping.is_empty() && self.group.is_empty() && self.site.is_empty()
    }

    fn accepts(&self, attribute: &TopographyAttribute) -> bool {
        (self.macrogrouping.is_empty() || attribute.macrogrouping == self.macrogrouping)
            && (self.group.is_empty() || attribute.group == self.group)
            && (self.site.is_empty() || attribute.site == self.site)
    }
}

/// Lookup from observed diagnosis codes to hierarchy positions, plus the
/// cascading filter options projected from it.
///
/// Built once at startup and read-only afterwards; concurrent lookups
/// need no coordination.
#[derive(Debug, Clone, Default)]
pub struct TopographyIndex {
    lookup: BTreeMap<String, Vec<TopographyAttribute>>,
    filter_options: FilterOptions,
}

impl TopographyIndex {
    /// Builds the index from classification rows and the codes observed
    /// in the diagnosis dataset.
    ///
    /// Rows whose range expression expands to no rules contribute nothing
    /// and are counted at debug level for data-quality auditing. Codes
    /// matching no row are simply absent from the lookup.
    pub fn build<'a, I>(rows: &[TopographyRow], observed_codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut expanded: Vec<(Vec<CodeRangeRule>, &TopographyRow)> = Vec::new();
        let mut skipped = 0usize;
        for row in rows {
            let rules = expand(&row.icdo3);
            if rules.is_empty() {
                skipped += 1;
                tracing::debug!(expression = %row.icdo3, "skipping unparseable topography row");
                continue;
            }
            expanded.push((rules, row));
        }
        if skipped > 0 {
            tracing::debug!(skipped, total = rows.len(), "topography rows without rules");
        }

        let codes: BTreeSet<&str> = observed_codes
            .into_iter()
            .filter(|code| !code.is_empty())
            .collect();

        let mut lookup: BTreeMap<String, Vec<TopographyAttribute>> = BTreeMap::new();
        for code in codes {
            let mut attributes: Vec<TopographyAttribute> = Vec::new();
            for (rules, row) in &expanded {
                if matches_any(code, rules) {
                    let attribute = TopographyAttribute {
                        macrogrouping: row.macrogrouping.clone(),
                        group: row.group.clone(),
                        site: row.site.clone(),
                    };
                    if !attributes.contains(&attribute) {
                        attributes.push(attribute);
                    }
                }
            }
            if !attributes.is_empty() {
                lookup.insert(code.to_string(), attributes);
            }
        }

        let filter_options = project_filter_options(&lookup);
        Self {
            lookup,
            filter_options,
        }
    }

    /// Hierarchy positions for an observed code; empty if unknown.
    pub fn lookup(&self, code: &str) -> &[TopographyAttribute] {
        self.lookup.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct codes the lookup covers.
    pub fn code_count(&self) -> usize {
        self.lookup.len()
    }

    /// Cascading filter options projected from the built lookup.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    /// Keeps the entries whose topography code satisfies the filter.
    ///
    /// An entry passes when at least one of its hierarchy positions
    /// satisfies every non-empty constraint. Without constraints the full
    /// dataset passes through unchanged.
    pub fn filter_entries<'a>(
        &self,
        entries: &'a [DiagnosisEntry],
        filter: &TopographyFilter,
    ) -> Vec<&'a DiagnosisEntry> {
        if filter.is_empty() {
            return entries.iter().collect();
        }
        entries
            .iter()
            .filter(|entry| {
                self.lookup(&entry.topography)
                    .iter()
                    .any(|attribute| filter.accepts(attribute))
            })
            .collect()
    }
}

/// Derives the cascading filter option sets from the built lookup.
///
/// A macrogrouping appears even when none of its rows carry a group, and
/// a group collects sites independently of its macrogrouping; empty
/// strings never become filter values.
fn project_filter_options(lookup: &BTreeMap<String, Vec<TopographyAttribute>>) -> FilterOptions {
    let mut macrogroupings: BTreeSet<String> = BTreeSet::new();
    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut sites: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for attribute in lookup.values().flatten() {
        if !attribute.macrogrouping.is_empty() {
            macrogroupings.insert(attribute.macrogrouping.clone());
            let entry = groups.entry(attribute.macrogrouping.clone()).or_default();
            if !attribute.group.is_empty() {
                entry.insert(attribute.group.clone());
            }
        }
        if !attribute.group.is_empty() {
            let entry = sites.entry(attribute.group.clone()).or_default();
            if !attribute.site.is_empty() {
                entry.insert(attribute.site.clone());
            }
        }
    }

    FilterOptions {
        macrogroupings: macrogroupings.into_iter().collect(),
        groups: groups
            .into_iter()
            .map(|(macrogrouping, set)| (macrogrouping, set.into_iter().collect()))
            .collect(),
        sites: sites
            .into_iter()
            .map(|(group, set)| (group, set.into_iter().collect()))
            .collect(),
    }
}
