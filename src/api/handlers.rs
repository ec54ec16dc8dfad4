//! HTTP request handlers for the Policy Cost Engine API.

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::price_policy;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::source::PolicySource;

use super::response::PolicyReply;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for the GET /policy endpoint.
async fn policy_handler(State(state): State<AppState>) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing policy request");

    let reply = handle_policy_request(state.source(), state.config()).await;

    if reply.status.is_success() {
        info!(
            correlation_id = %correlation_id,
            status = reply.status.as_u16(),
            "Policy request completed"
        );
    } else {
        warn!(
            correlation_id = %correlation_id,
            status = reply.status.as_u16(),
            "Policy request failed"
        );
    }

    reply
}

/// Fetches, prices, and shapes one policy request.
///
/// This is the whole aggregation pass: one read from the data source, the
/// pricing rule mapped over every worker in input order, totals summed,
/// and the reply rendered. The "source yielded no data" case becomes the
/// 503 reply; every other failure is shaped by the error-to-reply mapping.
pub async fn handle_policy_request(
    source: &dyn PolicySource,
    config: &EngineConfig,
) -> PolicyReply {
    match fetch_and_price(source, config).await {
        Ok(reply) => reply,
        Err(error) => PolicyReply::from(error),
    }
}

async fn fetch_and_price(
    source: &dyn PolicySource,
    config: &EngineConfig,
) -> EngineResult<PolicyReply> {
    let document = source
        .fetch_policy()
        .await?
        .ok_or(EngineError::DataUnavailable)?;

    let percentage = config
        .percentage_handling
        .resolve(document.company_percentage)?;

    let priced = price_policy(&document, percentage);

    Ok(PolicyReply::success(document, priced))
}
