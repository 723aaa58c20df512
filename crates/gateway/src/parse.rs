//! Parsing of gateway replies into structured recommendations.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One recommendation entry shown as a card on the dashboard.
///
/// Only `title`, `description`, and `priority` are always present; the
/// remaining fields depend on which prompt produced the reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    /// One of `urgent` / `high` / `medium` / `low`.
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<String>,
}

/// Matches the first bracketed JSON array in a reply, spanning newlines.
fn array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("array regex is valid"))
}

/// Extract recommendations from the model's reply content.
///
/// Models often wrap the JSON array in prose or a code fence, so the
/// extraction is lenient: try the first `[` … `]` span, then the whole
/// content, and finally fall back to wrapping the raw text in a single
/// medium-priority recommendation so the user always sees something.
pub fn extract_recommendations(content: &str) -> Vec<Recommendation> {
    if let Some(found) = array_regex().find(content) {
        if let Ok(recs) = serde_json::from_str::<Vec<Recommendation>>(found.as_str()) {
            return recs;
        }
    }

    if let Ok(recs) = serde_json::from_str::<Vec<Recommendation>>(content) {
        return recs;
    }

    tracing::warn!("Failed to parse gateway reply as JSON, wrapping raw text");
    vec![Recommendation {
        title: "AI Response".to_string(),
        description: content.to_string(),
        priority: "medium".to_string(),
        category: None,
        reason: None,
        action: None,
        expected_impact: None,
    }]
}
