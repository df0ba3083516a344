//! Command implementations.

use std::path::Path;

use anyhow::Context;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use onco_ingest::{
    load_diagnosis_entries, load_record_rows, load_term_table, load_topography_rows,
};
use onco_model::VocabularyStore;
use onco_search::{SearchRequest, SearchResponse, SearchService};

use crate::cli::{FiltersArgs, ResolveArgs, SearchArgs};

/// File names expected inside the data directory.
const DIAGNOSIS_FILE: &str = "diagnosis-codes.csv";
const TOPOGRAPHY_FILE: &str = "topography.csv";
const TERM_TABLE_FILE: &str = "term_to_code.json";
const RECORD_TABLE_FILE: &str = "code_to_record.json";

/// Loads all tables and builds the service.
///
/// Any load failure aborts the command before anything is served.
fn load_service(data_dir: &Path) -> anyhow::Result<SearchService> {
    let entries = load_diagnosis_entries(&data_dir.join(DIAGNOSIS_FILE))?;
    let topography = load_topography_rows(&data_dir.join(TOPOGRAPHY_FILE))?;
    let terms = load_term_table(&data_dir.join(TERM_TABLE_FILE))?;
    let records = load_record_rows(&data_dir.join(RECORD_TABLE_FILE))?;
    let vocabulary = VocabularyStore::from_tables(terms, records);

    let service = SearchService::new(entries, vocabulary, &topography);
    tracing::info!(
        entries = service.entry_count(),
        indexed_codes = service.indexed_code_count(),
        "search context ready"
    );
    Ok(service)
}

pub fn run_search(data_dir: &Path, args: &SearchArgs) -> anyhow::Result<()> {
    let service = load_service(data_dir)?;
    let request = SearchRequest {
        query: args.query.clone(),
        threshold: args.threshold,
        macrogrouping: args.macrogrouping.clone(),
        group: args.group.clone(),
        site: args.site.clone(),
    };
    let response = service.search(&request);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("serialize search response")?
        );
        return Ok(());
    }
    print_search_response(&response);
    Ok(())
}

pub fn run_resolve(data_dir: &Path, args: &ResolveArgs) -> anyhow::Result<()> {
    let service = load_service(data_dir)?;
    let resolution = service.resolve(&args.text, args.threshold);

    if resolution.codes.is_empty() {
        println!("No vocabulary terms matched.");
        return Ok(());
    }

    let codes: Vec<String> = resolution.codes.iter().map(|code| code.to_string()).collect();
    println!("codes: {}", codes.join(", "));

    let mut table = new_table(vec![
        "Shared words",
        "Term",
        "Variable",
        "Entity",
        "Code",
        "Score",
    ]);
    for (shared_words, group) in &resolution.groups {
        for matched in group {
            table.add_row(vec![
                Cell::new(shared_words),
                Cell::new(&matched.term),
                Cell::new(&matched.variable_name),
                Cell::new(&matched.entity),
                Cell::new(matched.code.to_string()),
                Cell::new(format!("{:.1}", matched.score)).set_alignment(CellAlignment::Right),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_filters(data_dir: &Path, args: &FiltersArgs) -> anyhow::Result<()> {
    let service = load_service(data_dir)?;
    let options = service.filters();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(options).context("serialize filter options")?
        );
        return Ok(());
    }

    for macrogrouping in &options.macrogroupings {
        println!("{macrogrouping}");
        let Some(groups) = options.groups.get(macrogrouping) else {
            continue;
        };
        for group in groups {
            println!("  {group}");
            if let Some(sites) = options.sites.get(group) {
                for site in sites {
                    println!("    {site}");
                }
            }
        }
    }
    Ok(())
}

fn print_search_response(response: &SearchResponse) {
    if response.results.is_empty() {
        println!("No matches.");
        return;
    }

    let mut table = new_table(vec!["Id", "Name", "Score"]);
    for hit in &response.results {
        let score = hit.score.map(|value| format!("{value:.1}")).unwrap_or_default();
        table.add_row(vec![
            Cell::new(&hit.id),
            Cell::new(&hit.name),
            Cell::new(score).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");

    if response.truncated {
        println!(
            "Showing {} of {} matches; the id list below is complete.",
            response.results.len(),
            response.total
        );
    }
    println!("ids: {}", response.ids_csv);
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}
