use std::fmt::Display;
use std::fmt::Write as _;

use crate::domain::AggregateReport;

pub const REPORT_CONTENT_TYPE: &str = "text/plain";

pub const SECTION_LABELS: [&str; 7] = [
    "Summary:",
    "Entities:",
    "Overall Sentiment:",
    "PII Entities Detected:",
    "Detected Language:",
    "Key Phrases:",
    "Syntax Tokens:",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    pub entity_limit: usize,
    pub key_phrase_limit: usize,
    pub syntax_token_limit: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            entity_limit: 10,
            key_phrase_limit: 20,
            syntax_token_limit: 20,
        }
    }
}

pub fn render_report(report: &AggregateReport, layout: &ReportLayout) -> String {
    let mut out = String::new();

    let summary = if report.summary.trim().is_empty() {
        "none"
    } else {
        report.summary.trim()
    };
    let _ = writeln!(out, "{} {}\n", SECTION_LABELS[0], summary);
    let _ = writeln!(
        out,
        "{} {}\n",
        SECTION_LABELS[1],
        join_limited(&report.entities, layout.entity_limit)
    );
    let _ = writeln!(
        out,
        "{} {}",
        SECTION_LABELS[2],
        report
            .sentiment
            .map(|s| s.as_str())
            .unwrap_or("UNKNOWN")
    );
    let _ = writeln!(
        out,
        "{} {}",
        SECTION_LABELS[3],
        join_limited(&report.pii_types, usize::MAX)
    );
    let _ = writeln!(
        out,
        "{} {}",
        SECTION_LABELS[4],
        join_limited(&report.languages, usize::MAX)
    );
    let _ = writeln!(
        out,
        "{} {}",
        SECTION_LABELS[5],
        join_limited(&report.key_phrases, layout.key_phrase_limit)
    );
    let _ = writeln!(
        out,
        "{} {} total; {}",
        SECTION_LABELS[6],
        report.syntax_tokens.len(),
        join_limited(&report.syntax_tokens, layout.syntax_token_limit)
    );

    if !report.skipped_calls.is_empty() {
        let skipped: Vec<String> = report
            .skipped_calls
            .iter()
            .map(|(chunk, call)| format!("chunk {} {}", chunk, call))
            .collect();
        let _ = writeln!(
            out,
            "Skipped Analytics Calls: {} ({})",
            skipped.len(),
            skipped.join(", ")
        );
    }

    out
}

fn join_limited<T: Display>(items: &[T], limit: usize) -> String {
    if items.is_empty() {
        return "none".to_string();
    }

    let shown: Vec<String> = items.iter().take(limit).map(|i| i.to_string()).collect();
    let hidden = items.len().saturating_sub(limit);

    if hidden > 0 {
        format!("{} (+{} more)", shown.join(", "), hidden)
    } else {
        shown.join(", ")
    }
}
