//! Detection of which display-name column the `areas` table uses.
//!
//! Two schema variants exist in the field: current databases call the
//! column `area_name`, older ones call it `name`. The service tolerates
//! both without migrating either; every request resolves the variant
//! fresh from catalog metadata before touching the table.

use wildtrack_core::error::CoreError;

use crate::DbPool;

/// The display-name column variant of the `areas` table.
///
/// A closed enum so only these two known-safe identifiers ever reach
/// query text; request data is never interpolated into identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameColumn {
    /// The table uses `area_name`.
    AreaName,
    /// The table uses `name`.
    Name,
}

impl NameColumn {
    /// The bare column identifier for query templates.
    pub fn as_str(self) -> &'static str {
        match self {
            NameColumn::AreaName => "area_name",
            NameColumn::Name => "name",
        }
    }
}

/// Failure modes of [`resolve_name_column`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Neither recognised column exists on `areas`.
    #[error(transparent)]
    Unsupported(#[from] CoreError),
}

/// Look up which name column exists on `areas` in the current schema,
/// preferring `area_name` when both are present.
pub async fn resolve_name_column(pool: &DbPool) -> Result<NameColumn, ResolveError> {
    let columns: Vec<String> = sqlx::query_scalar(
        "SELECT column_name::TEXT
         FROM information_schema.columns
         WHERE table_schema = current_schema()
           AND table_name = 'areas'
           AND column_name IN ('area_name', 'name')",
    )
    .fetch_all(pool)
    .await?;

    if columns.iter().any(|c| c == "area_name") {
        Ok(NameColumn::AreaName)
    } else if columns.iter().any(|c| c == "name") {
        tracing::debug!("areas table uses the legacy 'name' column");
        Ok(NameColumn::Name)
    } else {
        Err(CoreError::SchemaMismatch.into())
    }
}
