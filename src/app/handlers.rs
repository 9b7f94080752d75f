use crate::app::AppState;
use crate::domain::model::{AdvertResponse, CategoriesResponse, HomeResponse};
use crate::utils::error::Result;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(state.gateway.home())
}

pub async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(state.gateway.categories())
}

pub async fn create_influencer_persona(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = payload?;
    let echoed = state.gateway.create_persona(request).await?;
    Ok(Json(echoed))
}

pub async fn create_advert(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<AdvertResponse>> {
    let Json(request) = payload?;
    let response = state.gateway.create_advert(request).await?;
    Ok(Json(response))
}
