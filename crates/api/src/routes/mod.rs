pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /parts/{kind}        catalog parts for one slot category (GET)
///
/// /builds              save a build snapshot (POST), list recent (GET)
/// /builds/{id}         build detail with parts resolved (GET)
///
/// /fps-estimate        FPS forecast for a cpu/gpu pairing (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/parts/{kind}", get(handlers::parts::list_parts_by_kind))
        .route(
            "/builds",
            post(handlers::builds::create_build).get(handlers::builds::list_builds),
        )
        .route("/builds/{id}", get(handlers::builds::get_build))
        .route("/fps-estimate", get(handlers::estimation::fps_estimate))
}
