//! Prompt construction for each recommendation kind.

use serde::{Deserialize, Serialize};

/// The three recommendation requests the dashboard can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    /// Gift suggestions from children's wishlists.
    GiftRecommendations,
    /// Route and region suggestions from delivery data.
    DeliveryOptimization,
    /// Workforce suggestions from elf productivity data.
    WorkforceAnalysis,
}

/// Categories offered to the model when the context does not name any.
const DEFAULT_CATEGORIES: &str = "Toys, Electronics, Books, Games, Art Supplies";

/// Build the `(system, user)` prompt pair for a recommendation request.
///
/// `context` is the free-form JSON object the client sent; the relevant
/// slice (`children`, `deliveries`, or `elves`) is embedded pretty-printed
/// so the model sees the same rows the dashboard shows.
pub fn build_prompts(kind: RecommendationKind, context: &serde_json::Value) -> (String, String) {
    match kind {
        RecommendationKind::GiftRecommendations => {
            let system = "You are Santa's AI assistant helping with gift recommendations. \
                          You analyze children's wishlists and provide smart gift suggestions. \
                          Keep responses concise and festive! Always respond in JSON format \
                          with an array of 3-4 recommendations."
                .to_string();

            let categories = context
                .get("categories")
                .and_then(|c| c.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORIES.to_string());

            let user = format!(
                "Based on the following children data, provide gift recommendations:\n{}\n\n\
                 Current inventory categories: {categories}\n\n\
                 Respond with a JSON array of recommendations, each with: title, description, \
                 priority (high/medium/low), category, and reason.",
                pretty_slice(context, "children"),
            );
            (system, user)
        }
        RecommendationKind::DeliveryOptimization => {
            let system = "You are Santa's logistics AI. You analyze delivery routes and provide \
                          optimization suggestions. Keep responses concise and actionable. \
                          Always respond in JSON format."
                .to_string();
            let user = format!(
                "Analyze these delivery regions and provide optimization suggestions:\n{}\n\n\
                 Respond with a JSON array of suggestions, each with: title, description, \
                 priority (urgent/high/medium/low), and expectedImpact.",
                pretty_slice(context, "deliveries"),
            );
            (system, user)
        }
        RecommendationKind::WorkforceAnalysis => {
            let system = "You are Santa's workshop manager AI. You analyze elf productivity and \
                          provide workforce recommendations. Keep responses concise. Always \
                          respond in JSON format."
                .to_string();
            let user = format!(
                "Analyze this elf workforce data and provide recommendations:\n{}\n\n\
                 Respond with a JSON array of recommendations, each with: title, description, \
                 priority (high/medium/low), and action.",
                pretty_slice(context, "elves"),
            );
            (system, user)
        }
    }
}

/// Pretty-print `context[key]`, defaulting to an empty array when absent.
fn pretty_slice(context: &serde_json::Value, key: &str) -> String {
    let slice = context
        .get(key)
        .cloned()
        .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
    // Pretty-printing a Value cannot fail.
    serde_json::to_string_pretty(&slice).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_deserializes_from_kebab_case() {
        let kind: RecommendationKind =
            serde_json::from_value(json!("gift-recommendations")).expect("should parse");
        assert_eq!(kind, RecommendationKind::GiftRecommendations);

        let kind: RecommendationKind =
            serde_json::from_value(json!("delivery-optimization")).expect("should parse");
        assert_eq!(kind, RecommendationKind::DeliveryOptimization);

        let kind: RecommendationKind =
            serde_json::from_value(json!("workforce-analysis")).expect("should parse");
        assert_eq!(kind, RecommendationKind::WorkforceAnalysis);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result: Result<RecommendationKind, _> = serde_json::from_value(json!("route-magic"));
        assert!(result.is_err());
    }

    #[test]
    fn gift_prompt_embeds_children_and_categories() {
        let context = json!({
            "children": [{"name": "Emma", "age": 7}],
            "categories": ["Plush", "Toys"],
        });
        let (system, user) = build_prompts(RecommendationKind::GiftRecommendations, &context);
        assert!(system.contains("gift recommendations"));
        assert!(user.contains("Emma"));
        assert!(user.contains("Plush, Toys"));
    }

    #[test]
    fn gift_prompt_falls_back_to_default_categories() {
        let (_, user) =
            build_prompts(RecommendationKind::GiftRecommendations, &json!({}));
        assert!(user.contains(DEFAULT_CATEGORIES));
    }

    #[test]
    fn delivery_prompt_defaults_missing_slice_to_empty_array() {
        let (_, user) = build_prompts(RecommendationKind::DeliveryOptimization, &json!({}));
        assert!(user.contains("[]"));
        assert!(user.contains("expectedImpact"));
    }

    #[test]
    fn workforce_prompt_embeds_elves() {
        let context = json!({"elves": [{"name": "Jingle", "efficiency": 94}]});
        let (_, user) = build_prompts(RecommendationKind::WorkforceAnalysis, &context);
        assert!(user.contains("Jingle"));
        assert!(user.contains("action"));
    }
}
