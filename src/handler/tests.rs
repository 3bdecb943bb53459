use std::sync::Arc;

use axum::{
    extract::{Multipart, Path},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::testdb::TestExt,
    error::{ErrorMessage, HttpError},
    service::{forms::TestForm, upload::UploadReceiver},
    AppState,
};

pub async fn create_test(
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(&app_state.env.upload_dir, app_state.env.max_upload_bytes);
    let form = receiver.receive(multipart).await?;

    let data = TestForm::from_received(&form);

    let test = app_state
        .db_client
        .save_test(data)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Test added successfully",
        "data": {
            "test": test
        }
    })))
}

pub async fn update_test(
    Path(test_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(&app_state.env.upload_dir, app_state.env.max_upload_bytes);
    let form = receiver.receive(multipart).await?;

    let data = TestForm::from_received_for_update(&form);

    let test = app_state
        .db_client
        .update_test(test_id, data)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::TestNotFound.to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Test updated successfully",
        "data": {
            "test": test
        }
    })))
}
