//! Handlers for saving, listing, and viewing shared builds.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use rigforge_core::error::CoreError;
use rigforge_core::types::DbId;
use rigforge_db::models::build::CreateBuild;
use rigforge_db::repositories::build_repo::clamp_limit;
use rigforge_db::repositories::BuildRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Name used when a save request carries none.
const DEFAULT_BUILD_NAME: &str = "New Build";

/// Response payload for a successful save: the shareable identifier.
#[derive(Debug, Serialize)]
pub struct SavedBuild {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// POST /builds
// ---------------------------------------------------------------------------

/// Persist a build snapshot.
///
/// Each part reference in the request is projected down to its identifier
/// before storage; full part objects are never embedded. Compatibility is
/// advisory and client-side -- nothing here re-validates the combination.
pub async fn create_build(
    State(state): State<AppState>,
    Json(input): Json<CreateBuild>,
) -> AppResult<impl IntoResponse> {
    if input.total_price < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "totalPrice must be non-negative".to_string(),
        )));
    }

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_BUILD_NAME);

    let ids = input.parts.project();
    let created = BuildRepo::create(&state.pool, name, &ids, input.total_price).await?;
    tracing::info!(id = created.id, name = %created.name, total_price = created.total_price, "Build saved");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SavedBuild { id: created.id },
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /builds
// ---------------------------------------------------------------------------

/// List recently shared builds, most recent first.
pub async fn list_builds(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit);
    let items = BuildRepo::list_recent(&state.pool, limit).await?;
    tracing::debug!(count = items.len(), "Listed shared builds");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /builds/{id}
// ---------------------------------------------------------------------------

/// Fetch one build with its referenced parts resolved for display.
pub async fn get_build(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = BuildRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Build",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}
