//! Repository for the `animals` table.

use wildtrack_core::types::DbId;

use crate::models::animal::{Animal, AnimalInput, AnimalWithArea, SpeciesSummary};
use crate::schema::NameColumn;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, area_id, common_name, species, count_est, average_age_years, notes, last_seen";

pub struct AnimalRepo;

impl AnimalRepo {
    /// Animals observed in one area, ordered by common name.
    pub async fn list_by_area(pool: &DbPool, area_id: DbId) -> Result<Vec<Animal>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM animals WHERE area_id = $1 ORDER BY common_name");
        sqlx::query_as::<_, Animal>(&query)
            .bind(area_id)
            .fetch_all(pool)
            .await
    }

    /// All animals, newest first, each annotated with its area's display
    /// name. The left join keeps rows whose `area_id` is null or dangling;
    /// those surface `area_name: null`.
    pub async fn list_all_with_area(
        pool: &DbPool,
        name_col: NameColumn,
    ) -> Result<Vec<AnimalWithArea>, sqlx::Error> {
        let query = format!(
            "SELECT an.id, an.area_id, an.common_name, an.species, an.count_est,
                    an.average_age_years, an.notes, an.last_seen,
                    a.{col} AS area_name
             FROM animals an
             LEFT JOIN areas a ON an.area_id = a.id
             ORDER BY an.id DESC",
            col = name_col.as_str()
        );
        sqlx::query_as::<_, AnimalWithArea>(&query)
            .fetch_all(pool)
            .await
    }

    /// Per-species totals for one area, largest populations first.
    /// Records with no species recorded aggregate under a null key.
    pub async fn species_summary(
        pool: &DbPool,
        area_id: DbId,
    ) -> Result<Vec<SpeciesSummary>, sqlx::Error> {
        sqlx::query_as::<_, SpeciesSummary>(
            "SELECT species, SUM(count_est)::BIGINT AS total_count, COUNT(*) AS records
             FROM animals
             WHERE area_id = $1
             GROUP BY species
             ORDER BY total_count DESC",
        )
        .bind(area_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a new observation, returning the generated id.
    ///
    /// An omitted `count_est` inserts 0; every other omitted field
    /// inserts NULL.
    pub async fn insert(pool: &DbPool, input: &AnimalInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO animals
                (area_id, common_name, species, count_est, average_age_years, notes, last_seen)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(input.area_id)
        .bind(&input.common_name)
        .bind(&input.species)
        .bind(input.count_est.unwrap_or(0))
        .bind(input.average_age_years)
        .bind(&input.notes)
        .bind(input.last_seen)
        .fetch_one(pool)
        .await
    }

    /// Overwrite an observation by id with the same defaulting rules as
    /// [`insert`](Self::insert). Returns the number of rows touched; 0
    /// when the id does not exist (the caller still reports success --
    /// last writer wins, no version check).
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &AnimalInput,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE animals
             SET area_id = $2, common_name = $3, species = $4, count_est = $5,
                 average_age_years = $6, notes = $7, last_seen = $8
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.area_id)
        .bind(&input.common_name)
        .bind(&input.species)
        .bind(input.count_est.unwrap_or(0))
        .bind(input.average_age_years)
        .bind(&input.notes)
        .bind(input.last_seen)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. A missing id is a no-op, not an error.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
