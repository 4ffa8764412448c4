use axum::{
    extract::{Query, State},
    Json,
};
use model::{location::NurseLocation, WithNurseId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracking::{StoreError, DEFAULT_NURSE_ID};

use crate::{common::RouteResult, WebState};

/// Coordinates arrive as raw JSON values so that a non-numeric `lat` maps
/// to the invalid-coordinates error instead of a body-rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateLocationBody {
    lat: Option<Value>,
    lon: Option<Value>,
    nurse_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateLocationResponse {
    success: bool,
    location: NurseLocation,
}

pub(crate) async fn update_location(
    State(WebState { store, .. }): State<WebState>,
    Json(body): Json<UpdateLocationBody>,
) -> RouteResult<Json<UpdateLocationResponse>> {
    let (Some(lat), Some(lon)) = (
        body.lat.as_ref().and_then(Value::as_f64),
        body.lon.as_ref().and_then(Value::as_f64),
    ) else {
        return Err(StoreError::InvalidCoordinates.into());
    };

    let nurse_id = body
        .nurse_id
        .unwrap_or_else(|| DEFAULT_NURSE_ID.to_owned());

    let location = store.update(&nurse_id, lat, lon).await?;
    log::info!(
        "Nurse location updated: {} at {}, {}",
        nurse_id,
        location.lat,
        location.lon
    );

    Ok(Json(UpdateLocationResponse {
        success: true,
        location,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetLocationQuery {
    nurse_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum GetLocationResponse {
    Single(NurseLocation),
    All(Vec<WithNurseId<NurseLocation>>),
}

pub(crate) async fn get_location(
    State(WebState { store, .. }): State<WebState>,
    Query(params): Query<GetLocationQuery>,
) -> RouteResult<Json<GetLocationResponse>> {
    let response = match params.nurse_id {
        Some(nurse_id) => GetLocationResponse::Single(store.get(&nurse_id).await?),
        None => GetLocationResponse::All(store.get_all().await?),
    };

    Ok(Json(response))
}
