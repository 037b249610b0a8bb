//! Animal observation models and wire DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wildtrack_core::types::DbId;

/// A row from the `animals` table.
///
/// Every observation field is nullable at the storage level; `common_name`
/// is required by the admin client only, and `area_id` may dangle (no
/// foreign key is enforced).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    pub area_id: Option<DbId>,
    pub common_name: Option<String>,
    pub species: Option<String>,
    pub count_est: i32,
    pub average_age_years: Option<Decimal>,
    pub notes: Option<String>,
    pub last_seen: Option<NaiveDate>,
}

/// An animal annotated with its area's display name, used by the
/// unfiltered listing. `area_name` is null for a null or dangling
/// `area_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnimalWithArea {
    pub id: DbId,
    pub area_id: Option<DbId>,
    pub common_name: Option<String>,
    pub species: Option<String>,
    pub count_est: i32,
    pub average_age_years: Option<Decimal>,
    pub notes: Option<String>,
    pub last_seen: Option<NaiveDate>,
    pub area_name: Option<String>,
}

/// Per-species aggregate for one area's summary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpeciesSummary {
    /// Null groups the records with no species recorded.
    pub species: Option<String>,
    pub total_count: i64,
    pub records: i64,
}

/// Wire DTO for creating or overwriting an animal record.
///
/// Fields absent from (or null in) the request body are stored as NULL,
/// except `count_est` which defaults to 0. The same struct serves POST
/// and PUT; the PUT id travels separately.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalInput {
    pub area_id: Option<DbId>,
    pub common_name: Option<String>,
    pub species: Option<String>,
    pub count_est: Option<i32>,
    pub average_age_years: Option<Decimal>,
    pub notes: Option<String>,
    pub last_seen: Option<NaiveDate>,
}
