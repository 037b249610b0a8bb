//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching database rows
//! - The `Deserialize` wire DTOs used by the API service

pub mod animal;
pub mod area;
