use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use dialtree_core::ops::{option_ops, submenu_ops};
use dialtree_core::{MenuError, MenuOption, OptionPatch, Submenu};

use crate::error::ApiError;
use crate::state::{lock, SharedStore};

/// Submenu-creation body
///
/// Extra fields (clients sometimes send `dial`/`dialExtension` here) are
/// accepted and ignored; the stored record has no dial fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmenuRequest {
    pub parent_id: Option<String>,
    pub sub_menu: Option<String>,
}

/// List query: the parameter is named `id` but filters options by parentId.
/// The naming inconsistency is part of the wire contract.
#[derive(Debug, Deserialize)]
pub struct ListSubmenusQuery {
    pub id: Option<String>,
}

/// POST /submenus - create a submenu record
pub async fn create_submenu(
    State(store): State<SharedStore>,
    Json(body): Json<CreateSubmenuRequest>,
) -> Result<(StatusCode, Json<Submenu>), ApiError> {
    let mut store = lock(&store)?;
    let submenu = submenu_ops::create_submenu(&mut **store, body.parent_id, body.sub_menu)?;
    Ok((StatusCode::CREATED, Json(submenu)))
}

/// GET /submenus?id={parentId} - lists *options* under the given parent
pub async fn list_submenus(
    State(store): State<SharedStore>,
    Query(query): Query<ListSubmenusQuery>,
) -> Result<Json<Vec<MenuOption>>, ApiError> {
    let parent_id = query.id.ok_or_else(|| MenuError::MissingField {
        field: "id".to_string(),
    })?;

    let store = lock(&store)?;
    let options = option_ops::list_options(&**store, Some(&parent_id))?;
    Ok(Json(options))
}

/// GET /submenus/{id} - reads the option collection (documented aliasing)
pub async fn get_submenu(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MenuOption>, ApiError> {
    let store = lock(&store)?;
    let option = submenu_ops::get_submenu(&**store, &id)?;
    Ok(Json(option))
}

/// PUT /submenus/{id} - updates the option collection (documented aliasing)
pub async fn update_submenu(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<OptionPatch>,
) -> Result<Json<MenuOption>, ApiError> {
    let mut store = lock(&store)?;
    let option = submenu_ops::update_submenu(&mut **store, &id, &patch)?;
    Ok(Json(option))
}

/// DELETE /submenus/{optionId}/{submenuIndex} - remove one embedded label
pub async fn delete_submenu_at(
    State(store): State<SharedStore>,
    Path((option_id, submenu_index)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let mut store = lock(&store)?;
    let removed = submenu_ops::delete_submenu_at(&mut **store, &option_id, &submenu_index)?;
    Ok(Json(json!({
        "message": "Submenu deleted successfully",
        "deletedSubmenu": removed,
    })))
}
