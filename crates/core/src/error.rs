#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The `areas` table carries neither of the two recognised
    /// display-name columns, so no query can be built against it.
    #[error("areas table does not have 'area_name' or 'name' column")]
    SchemaMismatch,
}
