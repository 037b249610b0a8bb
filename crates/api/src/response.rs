//! Response rendering and the wire-contract payload types.
//!
//! The published surface is bare arrays/objects plus `{success}` and
//! `{error}` bodies (no envelope), always tagged
//! `application/json; charset=utf-8` -- `axum::Json` would emit the
//! content type without the charset, so rendering is centralized here.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use wildtrack_core::types::DbId;
use wildtrack_db::models::animal::SpeciesSummary;
use wildtrack_db::models::area::Area;

/// Serialize a payload with the contract's content type.
pub fn json_body(status: StatusCode, value: &impl Serialize) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            )],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `{success: true, insert_id}` returned by POST.
#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub insert_id: DbId,
}

/// `{success: true}` returned by PUT and DELETE.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// The `areasummary` payload: the area row (null when the id does not
/// exist) and the per-species aggregates (possibly empty, never null).
#[derive(Debug, Serialize)]
pub struct AreaSummary {
    pub area: Option<Area>,
    #[serde(rename = "bySpecies")]
    pub by_species: Vec<SpeciesSummary>,
}
