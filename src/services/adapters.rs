use crate::domain::models::{RawFields, NOT_AVAILABLE};
use crate::error::GateError;
use crate::services::normalize::normalize_strict;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// One fetched document, already decoded to the shape its adapter reads.
pub enum SourceDocument {
    /// Structured metrics endpoint response.
    Api(Value),
    /// Overview dashboard page listing every application as a card.
    Overview(Html),
    /// Per-application report page with fixed element ids.
    Report(Html),
    /// Plain text extracted from a report document, all pages concatenated.
    PdfText(String),
}

/// Pull whatever quality fields the document carries.
///
/// `target_name` only matters for the overview page, where the right card
/// still has to be found; the other documents are already scoped to one
/// application by the caller.
pub fn extract(document: &SourceDocument, target_name: &str) -> Result<RawFields, GateError> {
    match document {
        SourceDocument::Api(body) => Ok(from_api(body)),
        SourceDocument::Overview(page) => from_overview(page, target_name),
        SourceDocument::Report(page) => Ok(from_report(page)),
        SourceDocument::PdfText(text) => from_pdf_text(text),
    }
}

fn from_api(body: &Value) -> RawFields {
    // The endpoint omits keys for apps it has not analyzed yet; missing or
    // wrongly-typed values degrade to neutral defaults without complaint.
    let rating = body
        .get("ArchitectureRating")
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string();
    let violations = body
        .get("TotalViolations")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    RawFields {
        architecture_rating: Some(rating),
        total_violations: Some(violations),
        ..Default::default()
    }
}

fn from_overview(page: &Html, target_name: &str) -> Result<RawFields, GateError> {
    let mut want = normalize_strict(target_name);
    if let Some(selected) = page.select(picker_selected_selector()).next() {
        let label = element_text(&selected);
        let label = label.trim();
        if !label.is_empty() {
            debug!(label, "dashboard has a selected application; matching on it");
            want = normalize_strict(label);
        }
    }

    let card = page
        .select(card_selector())
        .find(|card| normalize_strict(&element_text(card)).contains(&want))
        .ok_or_else(|| GateError::NotFound {
            name: target_name.to_string(),
            surface: "overview dashboard".to_string(),
        })?;

    Ok(RawFields {
        architecture_rating: field_text(&card, rating_selector()),
        total_violations: field_text(&card, violations_selector()).map(|t| parse_violations(&t)),
        technical_debt_percent: field_text(&card, debt_selector()).and_then(|t| parse_percent(&t)),
        scores: collect_scores(card, score_selector()),
    })
}

fn from_report(page: &Html) -> RawFields {
    let root = page.root_element();
    RawFields {
        architecture_rating: field_text(&root, report_rating_selector()),
        total_violations: field_text(&root, report_violations_selector())
            .map(|t| parse_violations(&t)),
        technical_debt_percent: field_text(&root, report_debt_selector())
            .and_then(|t| parse_percent(&t)),
        scores: collect_scores(root, report_score_selector()),
    }
}

fn from_pdf_text(text: &str) -> Result<RawFields, GateError> {
    let caps = total_row_regex()
        .captures(text)
        .ok_or(GateError::SummaryLineMissing)?;
    let percent = caps[1]
        .parse::<u64>()
        .map_err(|_| GateError::SummaryLineMissing)?;
    Ok(RawFields {
        technical_debt_percent: Some(percent),
        ..Default::default()
    })
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>()
}

/// Trimmed text of the first descendant matching `sel`; empty and absent
/// elements both count as "field not carried".
fn field_text(scope: &ElementRef, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(|el| element_text(&el).trim().to_string())
        .filter(|text| !text.is_empty())
}

fn collect_scores(scope: ElementRef, sel: &Selector) -> Vec<String> {
    scope
        .select(sel)
        .map(|el| element_text(&el).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

fn parse_violations(text: &str) -> u64 {
    match text.trim().parse::<u64>() {
        Ok(count) => count,
        Err(_) => {
            warn!(raw = text, "violation count not numeric, defaulting to 0");
            0
        }
    }
}

fn parse_percent(text: &str) -> Option<u64> {
    let trimmed = text.trim().trim_end_matches('%').trim_end();
    match trimmed.parse::<u64>() {
        Ok(percent) => Some(percent),
        Err(_) => {
            warn!(raw = text, "technical debt not a percentage, leaving unset");
            None
        }
    }
}

fn picker_selected_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("select.application-picker option[selected]").expect("picker selector")
    })
}

fn card_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("div.application-card").expect("card selector"))
}

fn rating_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".architecture-rating").expect("rating selector"))
}

fn violations_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".violation-count").expect("violations selector"))
}

fn debt_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".technical-debt").expect("debt selector"))
}

fn score_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".score-item").expect("score selector"))
}

fn report_rating_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("#architecture-rating").expect("report rating selector"))
}

fn report_violations_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("#total-violations").expect("report violations selector"))
}

fn report_debt_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("#technical-debt").expect("report debt selector"))
}

fn report_score_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("#score-breakdown li").expect("report score selector"))
}

fn total_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Total\s+\d+\s+\d+\s+\d+%?\s+(\d+)%").expect("total row regex"))
}
