//! Handlers for the `/rolls` resource.
//!
//! Rolls are created, listed with range filters, soft-removed, and
//! summarised over a date window. Removed rolls stay visible in listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use metal_rolls_core::error::CoreError;
use metal_rolls_core::range_filter::{RollFilter, RollFilterParams};
use metal_rolls_core::roll::{validate_roll_dimensions, ROLL_ENTITY};
use metal_rolls_core::stats::{compute_roll_stats, parse_stats_window, RollSnapshot};
use metal_rolls_core::types::DbId;
use metal_rolls_db::models::roll::CreateRoll;
use metal_rolls_db::repositories::RollRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /rolls/stats`.
#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    /// ISO 8601 window start (inclusive).
    pub start_date: String,
    /// ISO 8601 window end (inclusive). Defaults to now.
    pub end_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/rolls
///
/// Create a roll. `id` and `added_date` are assigned by the database.
pub async fn create_roll(
    State(state): State<AppState>,
    Json(input): Json<CreateRoll>,
) -> AppResult<impl IntoResponse> {
    validate_roll_dimensions(input.length, input.weight)?;

    let roll = RollRepo::create(&state.pool, &input).await?;

    tracing::info!(
        roll_id = roll.id,
        length = roll.length,
        weight = roll.weight,
        "Roll created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: roll })))
}

/// GET /api/v1/rolls
///
/// List rolls, optionally constrained by `id_range`, `weight_range`,
/// `length_range` (`start-end`) and `added_date_range`, `removed_date_range`
/// (`start/end`). The filter is parsed in full before the database is queried.
pub async fn list_rolls(
    State(state): State<AppState>,
    Query(params): Query<RollFilterParams>,
) -> AppResult<impl IntoResponse> {
    let filter = RollFilter::parse(&params)?;
    let rolls = RollRepo::list(&state.pool, &filter).await?;

    tracing::debug!(count = rolls.len(), filtered = !filter.is_unconstrained(), "Listed rolls");

    Ok(Json(DataResponse { data: rolls }))
}

/// GET /api/v1/rolls/{id}
pub async fn get_roll(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let roll = RollRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ROLL_ENTITY,
            id,
        }))?;

    Ok(Json(DataResponse { data: roll }))
}

/// DELETE /api/v1/rolls/{id}
///
/// Soft-remove a roll by stamping `removed_date`. Returns 404 for an
/// unknown id and 409 if the roll was already removed.
pub async fn remove_roll(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if let Some(roll) = RollRepo::mark_removed(&state.pool, id).await? {
        tracing::info!(roll_id = roll.id, "Roll removed");
        return Ok(Json(DataResponse { data: roll }));
    }

    // Nothing was updated: either the roll is missing or already removed.
    let err = match RollRepo::find_by_id(&state.pool, id).await? {
        Some(roll) if roll.is_removed() => CoreError::AlreadyRemoved { id },
        _ => CoreError::NotFound {
            entity: ROLL_ENTITY,
            id,
        },
    };
    Err(AppError::Core(err))
}

/// POST /api/v1/rolls/stats
///
/// Aggregate statistics for rolls added within `[start_date, end_date]`.
pub async fn roll_stats(
    State(state): State<AppState>,
    Json(input): Json<StatsRequest>,
) -> AppResult<impl IntoResponse> {
    let window = parse_stats_window(&input.start_date, input.end_date.as_deref(), Utc::now())?;

    let rolls = RollRepo::list_added_between(&state.pool, &window).await?;
    let snapshots: Vec<RollSnapshot> = rolls.iter().map(RollSnapshot::from).collect();
    let stats = compute_roll_stats(&snapshots, &window);

    tracing::debug!(
        start = %window.start,
        end = %window.end,
        added_rolls = stats.added_rolls,
        "Computed roll statistics"
    );

    Ok(Json(DataResponse { data: stats }))
}
