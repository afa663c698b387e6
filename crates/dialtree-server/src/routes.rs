//! Route table
//!
//! Resource-oriented JSON contract over options, submenus and dials. No
//! DELETE is exposed for dials, and submenu deletion addresses an embedded
//! label by option id + index rather than a submenu record.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{dials, options, submenus};
use crate::state::SharedStore;

/// Build the application router over a shared store
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/options",
            get(options::list_options).post(options::create_option),
        )
        .route(
            "/options/:id",
            get(options::get_option)
                .put(options::update_option)
                .delete(options::delete_option),
        )
        .route(
            "/submenus",
            get(submenus::list_submenus).post(submenus::create_submenu),
        )
        .route(
            "/submenus/:id",
            get(submenus::get_submenu).put(submenus::update_submenu),
        )
        .route(
            "/submenus/:option_id/:submenu_index",
            delete(submenus::delete_submenu_at),
        )
        .route("/dials", get(dials::list_dials).post(dials::create_dial))
        .route("/dials/:id", put(dials::update_dial))
        .with_state(store)
}
