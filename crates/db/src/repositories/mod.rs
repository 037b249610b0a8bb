//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. Queries that touch the areas
//! display-name column take the resolved [`NameColumn`] and splice it
//! from the enum's fixed identifiers; all values are bound parameters.
//!
//! [`NameColumn`]: crate::schema::NameColumn

pub mod animal_repo;
pub mod area_repo;

pub use animal_repo::AnimalRepo;
pub use area_repo::AreaRepo;
