use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{developerdb::DeveloperExt, taskdb::TaskExt},
    dtos::developerdtos::{
        CreateDeveloperDto, DeveloperListResponseDto, DeveloperPageData,
        DeveloperPageResponseDto, UpdateDeveloperDto,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub async fn list_developers(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let developers = app_state
        .db_client
        .get_developers()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(DeveloperListResponseDto {
        status: "success".to_string(),
        results: developers.len() as i64,
        developers,
    }))
}

// Public developer pages are addressed by the admin-chosen external id, and
// the upcoming projects are matched on the store id that links them.
pub async fn developer_page(
    Path(external_id): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let developer = app_state
        .db_client
        .get_developer_by_external_id(&external_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::DeveloperNotFound.to_string()))?;

    let tasks = app_state
        .db_client
        .get_tasks_by_developer(developer.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(DeveloperPageResponseDto {
        status: "success".to_string(),
        data: DeveloperPageData { developer, tasks },
    }))
}

pub async fn create_developer(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateDeveloperDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let developer = app_state
        .db_client
        .save_developer(body)
        .await
        .map_err(|e| {
            if e.to_string().contains("duplicate key") {
                HttpError::bad_request(ErrorMessage::DeveloperIdTaken.to_string())
            } else {
                HttpError::server_error(e.to_string())
            }
        })?;

    Ok(Json(json!({
        "status": "success",
        "message": "Developer added successfully",
        "data": {
            "developer": developer
        }
    })))
}

pub async fn update_developer(
    Path(developer_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateDeveloperDto>,
) -> Result<impl IntoResponse, HttpError> {
    let developer = app_state
        .db_client
        .update_developer(developer_id, body)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::DeveloperNotFound.to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Developer updated successfully",
        "data": {
            "developer": developer
        }
    })))
}
