use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use dialtree_core::ops::dial_ops;
use dialtree_core::{Dial, DialPatch, ExpandedDial};

use crate::error::ApiError;
use crate::state::{lock, SharedStore};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDialRequest {
    pub dial: Option<String>,
    pub dial_extension: Option<String>,
    pub submenu: Option<String>,
}

/// POST /dials - create a dial under an existing submenu
pub async fn create_dial(
    State(store): State<SharedStore>,
    Json(body): Json<CreateDialRequest>,
) -> Result<(StatusCode, Json<Dial>), ApiError> {
    let mut store = lock(&store)?;
    let dial = dial_ops::create_dial(&mut **store, body.dial, body.dial_extension, body.submenu)?;
    Ok((StatusCode::CREATED, Json(dial)))
}

/// GET /dials - list all dials with submenu expanded
pub async fn list_dials(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<ExpandedDial>>, ApiError> {
    let store = lock(&store)?;
    let dials = dial_ops::list_dials(&**store)?;
    Ok(Json(dials))
}

/// PUT /dials/{id} - partial update, response includes expanded submenu
pub async fn update_dial(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<DialPatch>,
) -> Result<Json<ExpandedDial>, ApiError> {
    let mut store = lock(&store)?;
    let dial = dial_ops::update_dial(&mut **store, &id, &patch)?;
    Ok(Json(dial))
}
