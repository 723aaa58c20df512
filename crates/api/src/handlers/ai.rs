//! Handler for the AI recommendation endpoint.

use axum::extract::State;
use axum::Json;
use santaverse_gateway::{Recommendation, RecommendationKind};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Request body for `POST /ai/recommendations`.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Which prompt to run.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Free-form JSON context; the prompt builder picks out the slice it
    /// needs (`children`, `deliveries`, or `elves`).
    #[serde(default)]
    pub context: serde_json::Value,
}

/// Response body for `POST /ai/recommendations`.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

/// POST /api/v1/ai/recommendations
///
/// Gateway failures map to JSON errors in [`AppError`](crate::error::AppError):
/// 429 and 402 keep their distinct messages, everything else is a 502.
pub async fn recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(user_id = user.user_id, kind = ?input.kind, "AI recommendation request");

    let recommendations = state
        .gateway
        .recommendations(input.kind, &input.context)
        .await?;

    Ok(Json(RecommendationResponse { recommendations }))
}
