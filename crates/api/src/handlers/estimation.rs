//! Handler for the FPS forecast endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rigforge_core::error::CoreError;
use rigforge_core::estimation;
use rigforge_core::part::{Part, PartKind};
use rigforge_core::types::DbId;
use rigforge_db::repositories::PartRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the forecast endpoint. Both ids are required;
/// a missing id is rejected before this handler runs.
#[derive(Debug, Deserialize)]
pub struct FpsParams {
    pub cpu_id: DbId,
    pub gpu_id: DbId,
}

/// Look up a referenced part, verifying it is of the expected kind.
/// A stale id is a not-found condition -- no fallback computation.
async fn fetch_component(
    state: &AppState,
    id: DbId,
    expected: PartKind,
) -> AppResult<Part> {
    let part = PartRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Part", id }))?;
    if part.kind != expected {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Part {id} is a {}, expected a {expected}",
            part.kind
        ))));
    }
    Ok(part)
}

// ---------------------------------------------------------------------------
// GET /fps-estimate
// ---------------------------------------------------------------------------

/// Forecast FPS figures for a cpu/gpu pairing. The math lives in
/// `rigforge_core::estimation`; this handler only resolves the ids.
pub async fn fps_estimate(
    State(state): State<AppState>,
    Query(params): Query<FpsParams>,
) -> AppResult<impl IntoResponse> {
    let cpu = fetch_component(&state, params.cpu_id, PartKind::Cpu).await?;
    let gpu = fetch_component(&state, params.gpu_id, PartKind::Gpu).await?;

    let estimates = estimation::estimate(&cpu, &gpu);
    Ok(Json(DataResponse { data: estimates }))
}
