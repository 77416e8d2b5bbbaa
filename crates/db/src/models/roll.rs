//! Metal roll entity model and DTOs.

use metal_rolls_core::stats::RollSnapshot;
use metal_rolls_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `metal_rolls` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Roll {
    pub id: DbId,
    pub length: f64,
    pub weight: f64,
    pub added_date: Timestamp,
    pub removed_date: Option<Timestamp>,
}

impl Roll {
    /// Whether the roll has been soft-deleted.
    pub fn is_removed(&self) -> bool {
        self.removed_date.is_some()
    }
}

impl From<&Roll> for RollSnapshot {
    fn from(roll: &Roll) -> Self {
        RollSnapshot {
            length: roll.length,
            weight: roll.weight,
            added_date: roll.added_date,
            removed_date: roll.removed_date,
        }
    }
}

/// DTO for creating a new roll. `id` and `added_date` are assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoll {
    pub length: f64,
    pub weight: f64,
}
