//! The action-dispatched record endpoint.
//!
//! One path (`/api/animals`) carries the whole CRUD surface; the `action`
//! query parameter plus the HTTP method select the operation, and any
//! unmatched combination falls through to the 404 body. Every dispatch
//! resolves the areas name column before touching the tables, so a
//! broken schema fails all six operations the same way.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::Value;
use wildtrack_core::types::DbId;
use wildtrack_db::models::animal::AnimalInput;
use wildtrack_db::repositories::{AnimalRepo, AreaRepo};
use wildtrack_db::schema;

use crate::error::{ApiError, ApiResult};
use crate::query::ActionParams;
use crate::response::{self, AreaSummary, InsertResponse, SuccessResponse};
use crate::state::AppState;

/// GET `?action=areas` | `animals[&area_id]` | `areasummary&area_id`.
pub async fn get_records(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
) -> Response {
    let verbose = state.config.verbose_errors;
    dispatch_get(&state, &params)
        .await
        .unwrap_or_else(|err| err.into_response_with(verbose))
}

/// POST `?action=animal` with a JSON body: create a record.
pub async fn post_records(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let verbose = state.config.verbose_errors;
    dispatch_post(&state, &params, body)
        .await
        .unwrap_or_else(|err| err.into_response_with(verbose))
}

/// PUT `?action=animal` with a JSON body carrying `id`: overwrite a record.
pub async fn put_records(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let verbose = state.config.verbose_errors;
    dispatch_put(&state, &params, body)
        .await
        .unwrap_or_else(|err| err.into_response_with(verbose))
}

/// DELETE `?action=animal` with `id` in the query string or body.
pub async fn delete_records(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let verbose = state.config.verbose_errors;
    dispatch_delete(&state, &params, body)
        .await
        .unwrap_or_else(|err| err.into_response_with(verbose))
}

/// OPTIONS on the API path: 200 with no body. Preflights carrying the
/// CORS request headers are answered by the CORS layer before reaching
/// here; this covers bare OPTIONS probes.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn dispatch_get(state: &AppState, params: &ActionParams) -> ApiResult<Response> {
    let name_col = schema::resolve_name_column(&state.pool).await?;

    match params.action.as_str() {
        "areas" => {
            let areas = AreaRepo::list_with_totals(&state.pool, name_col).await?;
            Ok(response::json_body(StatusCode::OK, &areas))
        }
        "animals" => {
            let area_id = params.area_id();
            if area_id != 0 {
                let animals = AnimalRepo::list_by_area(&state.pool, area_id).await?;
                Ok(response::json_body(StatusCode::OK, &animals))
            } else {
                let animals = AnimalRepo::list_all_with_area(&state.pool, name_col).await?;
                Ok(response::json_body(StatusCode::OK, &animals))
            }
        }
        "areasummary" => {
            let area_id = params.area_id();
            if area_id == 0 {
                return Err(ApiError::BadRequest("area_id required".into()));
            }
            // Two independent reads, not a transaction; the summary can
            // straddle a concurrent write like the rest of the surface.
            let by_species = AnimalRepo::species_summary(&state.pool, area_id).await?;
            let area = AreaRepo::find_by_id(&state.pool, name_col, area_id).await?;
            Ok(response::json_body(
                StatusCode::OK,
                &AreaSummary { area, by_species },
            ))
        }
        _ => Err(ApiError::UnknownEndpoint),
    }
}

async fn dispatch_post(
    state: &AppState,
    params: &ActionParams,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    schema::resolve_name_column(&state.pool).await?;

    match params.action.as_str() {
        "animal" => {
            let input = parse_animal_body(body)?;
            let insert_id = AnimalRepo::insert(&state.pool, &input).await?;
            tracing::info!(insert_id, "Animal record created");
            Ok(response::json_body(
                StatusCode::OK,
                &InsertResponse {
                    success: true,
                    insert_id,
                },
            ))
        }
        _ => Err(ApiError::UnknownEndpoint),
    }
}

async fn dispatch_put(
    state: &AppState,
    params: &ActionParams,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    schema::resolve_name_column(&state.pool).await?;

    match params.action.as_str() {
        "animal" => {
            let Ok(Json(value)) = body else {
                return Err(ApiError::BadRequest("id required".into()));
            };
            let id = body_id(&value);
            if id == 0 {
                return Err(ApiError::BadRequest("id required".into()));
            }
            let input: AnimalInput = serde_json::from_value(value)
                .map_err(|_| ApiError::BadRequest("Invalid JSON body".into()))?;
            let rows = AnimalRepo::update(&state.pool, id, &input).await?;
            // 0 rows is still a success: last writer wins, no existence check.
            tracing::info!(id, updated = rows > 0, "Animal record overwritten");
            Ok(response::json_body(
                StatusCode::OK,
                &SuccessResponse { success: true },
            ))
        }
        _ => Err(ApiError::UnknownEndpoint),
    }
}

async fn dispatch_delete(
    state: &AppState,
    params: &ActionParams,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    schema::resolve_name_column(&state.pool).await?;

    match params.action.as_str() {
        "animal" => {
            // A present query id wins over the body, even when unusable.
            let id = match params.id() {
                Some(id) => id,
                None => body.map(|Json(value)| body_id(&value)).unwrap_or(0),
            };
            if id == 0 {
                return Err(ApiError::BadRequest("id required".into()));
            }
            let rows = AnimalRepo::delete(&state.pool, id).await?;
            // Deleting a missing id is a no-op success, not an error.
            tracing::info!(id, deleted = rows > 0, "Animal record delete");
            Ok(response::json_body(
                StatusCode::OK,
                &SuccessResponse { success: true },
            ))
        }
        _ => Err(ApiError::UnknownEndpoint),
    }
}

/// Decode a POST body into the animal DTO. The body must be a JSON
/// object; anything else (malformed JSON included) is the contract's
/// `Invalid JSON body` 400, as is an object whose fields don't fit the
/// DTO's types.
fn parse_animal_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<AnimalInput> {
    let Ok(Json(value)) = body else {
        return Err(ApiError::BadRequest("Invalid JSON body".into()));
    };
    if !value.is_object() {
        return Err(ApiError::BadRequest("Invalid JSON body".into()));
    }
    serde_json::from_value(value).map_err(|_| ApiError::BadRequest("Invalid JSON body".into()))
}

/// Read an `id` out of a JSON body, accepting numbers and numeric
/// strings; 0 when the body is not an object or the id is absent, null,
/// zero, or unusable.
fn body_id(value: &Value) -> DbId {
    match value.get("id") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
