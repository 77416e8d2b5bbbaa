//! Route definitions for the `/rolls` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roll;
use crate::state::AppState;

/// Routes mounted at `/rolls`.
///
/// ```text
/// GET    /           -> list_rolls   (?id_range=&weight_range=&length_range=
///                                      &added_date_range=&removed_date_range=)
/// POST   /           -> create_roll
/// POST   /stats      -> roll_stats
/// GET    /{id}       -> get_roll
/// DELETE /{id}       -> remove_roll
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(roll::list_rolls).post(roll::create_roll))
        .route("/stats", post(roll::roll_stats))
        .route("/{id}", get(roll::get_roll).delete(roll::remove_roll))
}
