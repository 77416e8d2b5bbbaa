//! Repository for the `metal_rolls` table.

use metal_rolls_core::range_filter::{InclusiveRange, RollFilter};
use metal_rolls_core::stats::StatsWindow;
use metal_rolls_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::roll::{CreateRoll, Roll};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, length, weight, added_date, removed_date";

/// Provides create, lookup, listing and soft-removal for rolls.
///
/// There is no hard delete.
pub struct RollRepo;

impl RollRepo {
    /// Insert a new roll, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoll) -> Result<Roll, sqlx::Error> {
        let query = format!(
            "INSERT INTO metal_rolls (length, weight) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Roll>(&query)
            .bind(input.length)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    /// Find a roll by its ID, removed or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Roll>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM metal_rolls WHERE id = $1");
        sqlx::query_as::<_, Roll>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rolls matching every constraint in `filter`, ordered by id.
    ///
    /// Bounds are inclusive. A reversed bound matches nothing.
    pub async fn list(pool: &PgPool, filter: &RollFilter) -> Result<Vec<Roll>, sqlx::Error> {
        let (where_clause, bind_values) = build_roll_filter(filter);
        let query = format!("SELECT {COLUMNS} FROM metal_rolls {where_clause} ORDER BY id");

        let mut q = sqlx::query_as::<_, Roll>(&query);
        for val in &bind_values {
            q = match val {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Double(v) => q.bind(*v),
                BindValue::Timestamp(v) => q.bind(*v),
            };
        }
        q.fetch_all(pool).await
    }

    /// List rolls whose `added_date` lies inside `window` (inclusive).
    pub async fn list_added_between(
        pool: &PgPool,
        window: &StatsWindow,
    ) -> Result<Vec<Roll>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM metal_rolls \
             WHERE added_date BETWEEN $1 AND $2 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Roll>(&query)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(pool)
            .await
    }

    /// Set `removed_date = NOW()` on an active roll.
    ///
    /// Returns `None` if the roll does not exist or was already removed;
    /// the conditional update never overwrites an existing removal date.
    pub async fn mark_removed(pool: &PgPool, id: DbId) -> Result<Option<Roll>, sqlx::Error> {
        let query = format!(
            "UPDATE metal_rolls SET removed_date = NOW() \
             WHERE id = $1 AND removed_date IS NULL \
             RETURNING {COLUMNS}"
        );
        let removed = sqlx::query_as::<_, Roll>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        if let Some(ref roll) = removed {
            tracing::debug!(roll_id = roll.id, "Roll marked removed");
        }
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built roll queries.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BindValue {
    BigInt(i64),
    Double(f64),
    Timestamp(Timestamp),
}

/// Build a WHERE clause and bind values from a parsed [`RollFilter`].
///
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_roll_filter(filter: &RollFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<BindValue> = Vec::new();

    let mut push_between = |column: &str, start: BindValue, end: BindValue| {
        let start_idx = bind_values.len() + 1;
        conditions.push(format!(
            "{column} BETWEEN ${start_idx} AND ${}",
            start_idx + 1
        ));
        bind_values.push(start);
        bind_values.push(end);
    };

    if let Some(InclusiveRange { start, end }) = filter.id {
        push_between("id", BindValue::BigInt(start), BindValue::BigInt(end));
    }
    if let Some(InclusiveRange { start, end }) = filter.weight {
        push_between("weight", BindValue::Double(start), BindValue::Double(end));
    }
    if let Some(InclusiveRange { start, end }) = filter.length {
        push_between("length", BindValue::Double(start), BindValue::Double(end));
    }
    if let Some(InclusiveRange { start, end }) = filter.added_date {
        push_between(
            "added_date",
            BindValue::Timestamp(start),
            BindValue::Timestamp(end),
        );
    }
    if let Some(InclusiveRange { start, end }) = filter.removed_date {
        push_between(
            "removed_date",
            BindValue::Timestamp(start),
            BindValue::Timestamp(end),
        );
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}
