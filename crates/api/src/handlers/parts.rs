//! Handlers for catalog reads.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use rigforge_core::part::PartKind;
use rigforge_db::repositories::PartRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /parts/{kind}
// ---------------------------------------------------------------------------

/// List every catalog part in one slot category.
///
/// The kind is validated before the query, so an unknown category is a
/// 400 rather than an empty 200.
pub async fn list_parts_by_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<impl IntoResponse> {
    let kind = PartKind::try_from(kind)?;
    let items = PartRepo::list_by_kind(&state.pool, kind).await?;
    tracing::debug!(kind = %kind, count = items.len(), "Listed catalog parts");
    Ok(Json(DataResponse { data: items }))
}
