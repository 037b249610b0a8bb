//! Area entity models.
//!
//! Areas are read-only through the API; there are no create/update DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wildtrack_core::types::DbId;

/// A row from the `areas` table. The display name is selected with an
/// `AS name` alias whichever physical column it lives in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Area {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// An area annotated with the summed `count_est` of its animals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AreaWithTotal {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// 0 for an area with no animal records, never null.
    pub total_animals: i64,
}
