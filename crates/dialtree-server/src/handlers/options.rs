use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use dialtree_core::ops::option_ops;
use dialtree_core::{MenuOption, OptionPatch};

use crate::error::ApiError;
use crate::state::{lock, SharedStore};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptionsQuery {
    pub parent_id: Option<String>,
}

/// Option-creation body
///
/// `sub_menus` stays a raw JSON value so the array-of-strings shape check
/// happens in the rules layer with a proper 400, not in deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionRequest {
    pub menu: Option<String>,
    pub sub_menus: Option<Value>,
    pub dial: Option<String>,
    pub dial_extension: Option<String>,
}

/// GET /options - list all options, or filter by `parentId`
pub async fn list_options(
    State(store): State<SharedStore>,
    Query(query): Query<ListOptionsQuery>,
) -> Result<Json<Vec<MenuOption>>, ApiError> {
    let store = lock(&store)?;
    let options = option_ops::list_options(&**store, query.parent_id.as_deref())?;
    Ok(Json(options))
}

/// POST /options - create an option
pub async fn create_option(
    State(store): State<SharedStore>,
    Json(body): Json<CreateOptionRequest>,
) -> Result<(StatusCode, Json<MenuOption>), ApiError> {
    let mut store = lock(&store)?;
    let option = option_ops::create_option(
        &mut **store,
        body.menu.as_deref(),
        body.sub_menus.as_ref(),
        body.dial,
        body.dial_extension,
    )?;
    Ok((StatusCode::CREATED, Json(option)))
}

/// GET /options/{id}
pub async fn get_option(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MenuOption>, ApiError> {
    let store = lock(&store)?;
    let option = option_ops::get_option(&**store, &id)?;
    Ok(Json(option))
}

/// PUT /options/{id} - partial update, omitted fields preserved
pub async fn update_option(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<OptionPatch>,
) -> Result<Json<MenuOption>, ApiError> {
    let mut store = lock(&store)?;
    let option = option_ops::update_option(&mut **store, &id, &patch)?;
    Ok(Json(option))
}

/// DELETE /options/{id} - 204 whether or not the id existed
pub async fn delete_option(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = lock(&store)?;
    option_ops::delete_option(&mut **store, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
