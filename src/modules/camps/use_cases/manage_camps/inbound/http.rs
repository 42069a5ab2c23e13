use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::modules::camps::adapters::inbound::problem::ApiError;
use crate::modules::camps::adapters::inbound::representations::{
    CampModel, CreateCampBody, UpdateCampBody,
};
use crate::modules::camps::adapters::inbound::versioning::ApiVersion;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CampPath {
    pub moniker: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeTalksParams {
    #[serde(default)]
    pub include_talks: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub the_date: String,
    #[serde(default)]
    pub include_talks: bool,
}

/// Accepts a full `YYYY-MM-DDTHH:MM:SS` or a bare date meaning midnight.
fn parse_event_date(raw: &str) -> Result<NaiveDateTime, ApiError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .map_err(|_| ApiError::InvalidQuery(format!("theDate {raw:?} is not a date")))
}

pub async fn list(
    State(state): State<AppState>,
    version: ApiVersion,
    params: Result<Query<IncludeTalksParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let camps = state.camps.list_camps(params.include_talks).await?;
    Ok(version.camp_collection(camps))
}

pub async fn get(
    State(state): State<AppState>,
    version: ApiVersion,
    path: Result<Path<CampPath>, PathRejection>,
    params: Result<Query<IncludeTalksParams>, QueryRejection>,
) -> Result<Json<CampModel>, ApiError> {
    let Path(path) = path?;
    let Query(params) = params?;
    let include_talks = version.include_talks(params.include_talks);
    let camp = state.camps.get_camp(&path.moniker, include_talks).await?;
    Ok(Json(camp.into()))
}

pub async fn search(
    State(state): State<AppState>,
    version: ApiVersion,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let date = parse_event_date(&params.the_date)?;
    let camps = state
        .camps
        .search_by_event_date(date, params.include_talks)
        .await?;
    Ok(version.camp_collection(camps))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateCampBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::UnprocessableBody(e.body_text()))?;
    let created = state.camps.create_camp(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location)],
        Json(CampModel::from(created.resource)),
    )
        .into_response())
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<CampPath>, PathRejection>,
    body: Result<Json<UpdateCampBody>, JsonRejection>,
) -> Result<Json<CampModel>, ApiError> {
    let Path(path) = path?;
    let Json(body) = body.map_err(|e| ApiError::UnprocessableBody(e.body_text()))?;
    let camp = state.camps.update_camp(&path.moniker, body.into()).await?;
    Ok(Json(camp.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<CampPath>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(path) = path?;
    state.camps.delete_camp(&path.moniker).await?;
    Ok(StatusCode::OK)
}
