//! Repository for the `areas` table.
//!
//! The API never mutates areas; only reads live here.

use wildtrack_core::types::DbId;

use crate::models::area::{Area, AreaWithTotal};
use crate::schema::NameColumn;
use crate::DbPool;

pub struct AreaRepo;

impl AreaRepo {
    /// List all areas with the summed `count_est` of their animals
    /// (0 for an area with none, via left join), ordered by display name.
    pub async fn list_with_totals(
        pool: &DbPool,
        name_col: NameColumn,
    ) -> Result<Vec<AreaWithTotal>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.{col} AS name, a.description,
                    COALESCE(SUM(an.count_est), 0)::BIGINT AS total_animals
             FROM areas a
             LEFT JOIN animals an ON an.area_id = a.id
             GROUP BY a.id, a.{col}, a.description
             ORDER BY a.{col}",
            col = name_col.as_str()
        );
        sqlx::query_as::<_, AreaWithTotal>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one area by id, display name aliased to `name`.
    pub async fn find_by_id(
        pool: &DbPool,
        name_col: NameColumn,
        id: DbId,
    ) -> Result<Option<Area>, sqlx::Error> {
        let query = format!(
            "SELECT id, {col} AS name, description FROM areas WHERE id = $1",
            col = name_col.as_str()
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
