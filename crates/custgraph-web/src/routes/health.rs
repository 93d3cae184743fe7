//! Health check.

use axum::extract::State;

use crate::state::AppState;

/// GET / - Issue a trivial query and report the outcome as plain text.
///
/// This is the only route that turns a store failure into a normal response.
pub async fn index(State(state): State<AppState>) -> String {
    match state.store.ping().await {
        Ok(()) => "Hello Neo4j!".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            format!("Error: {}", e.detail())
        }
    }
}
