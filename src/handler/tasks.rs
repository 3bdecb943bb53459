use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Multipart, Path},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::{developerdb::DeveloperExt, taskdb::TaskExt},
    dtos::taskdtos::{TaskData, TaskListResponseDto},
    error::{ErrorMessage, HttpError},
    service::{
        forms::ListingForm,
        upload::{ReceivedForm, UploadReceiver},
    },
    AppState,
};

pub async fn list_tasks(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let tasks = app_state
        .db_client
        .get_tasks()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let developers = app_state
        .db_client
        .get_developers()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let by_id: HashMap<Uuid, _> = developers
        .into_iter()
        .map(|developer| (developer.id, developer))
        .collect();

    let tasks = tasks
        .into_iter()
        .map(|task| {
            let developer = task.developer_id.and_then(|id| by_id.get(&id).cloned());
            TaskData { task, developer }
        })
        .collect::<Vec<_>>();

    Ok(Json(TaskListResponseDto {
        status: "success".to_string(),
        results: tasks.len() as i64,
        tasks,
    }))
}

fn parse_developer_id(form: &ReceivedForm) -> Result<Option<Uuid>, HttpError> {
    let raw = form.text("developerId");
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(raw.trim())
        .map(Some)
        .map_err(|_| HttpError::bad_request("developerId must be a valid developer id"))
}

pub async fn create_task(
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(&app_state.env.upload_dir, app_state.env.max_upload_bytes);
    let form = receiver.receive(multipart).await?;

    let developer_id = parse_developer_id(&form)?;
    let data = ListingForm::from_received(&form);

    let task = app_state
        .db_client
        .save_task(developer_id, data)
        .await
        .map_err(|e| {
            if e.to_string().contains("foreign key") {
                HttpError::bad_request(ErrorMessage::DeveloperNotFound.to_string())
            } else {
                HttpError::server_error(e.to_string())
            }
        })?;

    Ok(Json(json!({
        "status": "success",
        "message": "Task added successfully",
        "data": {
            "task": task
        }
    })))
}

pub async fn update_task(
    Path(task_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(&app_state.env.upload_dir, app_state.env.max_upload_bytes);
    let form = receiver.receive(multipart).await?;

    let developer_id = parse_developer_id(&form)?;
    let data = ListingForm::from_received(&form);

    let task = app_state
        .db_client
        .update_task(task_id, developer_id, data)
        .await
        .map_err(|e| {
            if e.to_string().contains("foreign key") {
                HttpError::bad_request(ErrorMessage::DeveloperNotFound.to_string())
            } else {
                HttpError::server_error(e.to_string())
            }
        })?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::TaskNotFound.to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Task updated successfully",
        "data": {
            "task": task
        }
    })))
}
