pub mod health;
pub mod roll;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /rolls                 list, create
/// /rolls/stats           aggregate statistics (POST)
/// /rolls/{id}            get, remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/rolls", roll::router())
}
