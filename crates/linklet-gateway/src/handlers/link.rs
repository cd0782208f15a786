use crate::error::{AppError, Result};
use crate::model::{CreateLinkRequest, CreateLinkResponse, LinkStatsResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linklet_core::ShortCode;
use linklet_service::ServiceError;

pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkRequest>,
) -> Result<Response> {
    let record = state.links().create(&request.url).await?;
    Ok((StatusCode::CREATED, Json(CreateLinkResponse::from(record))).into_response())
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = parse_code(&code)?;
    let record = state.links().resolve(&code).await?;

    // 302 rather than 301: a permanent redirect would let browsers cache
    // the hop and bypass the click counter.
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.target_url)],
    )
        .into_response())
}

pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkStatsResponse>> {
    let code = parse_code(&code)?;
    let record = state.links().stats(&code).await?;
    Ok(Json(LinkStatsResponse::from(record)))
}

pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let code = parse_code(&code)?;
    if state.links().delete(&code).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::from(ServiceError::NotFound))
    }
}

/// A syntactically invalid code can never exist, so lookups and deletes
/// treat it as absent rather than a distinct client error.
fn parse_code(raw: &str) -> Result<ShortCode> {
    ShortCode::parse(raw).map_err(|_| AppError::from(ServiceError::NotFound))
}
