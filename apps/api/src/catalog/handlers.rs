//! Axum route handlers for the read-only role catalog.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::role::RoleProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleDetailResponse {
    pub name: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

#[derive(Debug, Serialize)]
pub struct RoleExamplesResponse {
    pub job_role: String,
    pub examples: Vec<Value>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: state
            .catalog
            .role_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// GET /api/v1/roles/:role
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RoleDetailResponse>, AppError> {
    let profile = state
        .catalog
        .get(&role)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Role '{role}' not found")))?;
    Ok(Json(RoleDetailResponse {
        name: role,
        profile,
    }))
}

/// GET /api/v1/roles/:role/examples
///
/// Curated examples for a role; an unknown role simply has none.
pub async fn handle_role_examples(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<RoleExamplesResponse> {
    let examples = state.examples.for_role(&role).to_vec();
    Json(RoleExamplesResponse {
        job_role: role,
        examples,
    })
}
