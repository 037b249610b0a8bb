//! Route tree for the API surface.

pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Build the `/api` route tree: one action-dispatched path.
///
/// ```text
/// GET     /animals?action=areas                     area list with totals
/// GET     /animals?action=animals[&area_id=N]       animal list
/// GET     /animals?action=areasummary&area_id=N     per-species summary
/// POST    /animals?action=animal                    create record
/// PUT     /animals?action=animal                    overwrite record
/// DELETE  /animals?action=animal&id=N               delete record
/// OPTIONS /animals                                  preflight
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/animals",
        get(records::get_records)
            .post(records::post_records)
            .put(records::put_records)
            .delete(records::delete_records)
            .options(records::preflight),
    )
}
