pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Role catalog
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route("/api/v1/roles/:role", get(catalog::handle_get_role))
        .route(
            "/api/v1/roles/:role/examples",
            get(catalog::handle_role_examples),
        )
        // Scoring
        .route("/api/v1/score", post(scoring::handle_score))
        .route(
            "/api/v1/skills/categorize",
            post(scoring::handle_categorize),
        )
        .with_state(state)
}
