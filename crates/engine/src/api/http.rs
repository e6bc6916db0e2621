//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use sheetsmith_domain::{CharacterSheet, DerivedStats, SheetId};

use crate::app::App;
use crate::use_cases::SheetError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/characters", get(list_sheets).post(create_sheet))
        .route(
            "/api/characters/{id}",
            get(get_sheet).put(update_sheet).delete(delete_sheet),
        )
        .route("/api/characters/{id}/derived", get(get_derived))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_sheets(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<CharacterSheet>>, ApiError> {
    let sheets = app.use_cases.sheets.list().await?;
    Ok(Json(sheets))
}

async fn create_sheet(
    State(app): State<Arc<App>>,
    Json(sheet): Json<CharacterSheet>,
) -> Result<(StatusCode, Json<CharacterSheet>), ApiError> {
    let created = app.use_cases.sheets.create(sheet).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CharacterSheet>, ApiError> {
    let sheet = app.use_cases.sheets.get(SheetId::from_uuid(id)).await?;
    Ok(Json(sheet))
}

async fn update_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(sheet): Json<CharacterSheet>,
) -> Result<Json<CharacterSheet>, ApiError> {
    let updated = app
        .use_cases
        .sheets
        .update(SheetId::from_uuid(id), sheet)
        .await?;
    Ok(Json(updated))
}

async fn delete_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.sheets.delete(SheetId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_derived(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DerivedStats>, ApiError> {
    let stats = app.use_cases.sheets.derived(SheetId::from_uuid(id)).await?;
    Ok(Json(stats))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<SheetError> for ApiError {
    fn from(e: SheetError) -> Self {
        match e {
            SheetError::SheetNotFound(_) => ApiError::NotFound,
            SheetError::Domain(err) => ApiError::BadRequest(err.to_string()),
            SheetError::Repo(err) if err.is_not_found() => ApiError::NotFound,
            SheetError::Repo(err) => ApiError::Internal(err.to_string()),
        }
    }
}
