use std::sync::Arc;

use axum::{
    extract::{Multipart, Path},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::propertydb::PropertyExt,
    error::{ErrorMessage, HttpError},
    service::{forms::ListingForm, upload::UploadReceiver},
    AppState,
};

pub async fn create_property(
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(
        &app_state.env.upload_dir,
        app_state.env.max_upload_bytes,
    );

    let form = receiver.receive(multipart).await?;
    let data = ListingForm::from_received(&form);

    let property = app_state
        .db_client
        .save_property(data)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Property added successfully",
        "data": {
            "property": property
        }
    })))
}

// A full replacement: the edit form echoes untouched slots back as text, so
// every column is rewritten from the submitted form.
pub async fn update_property(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(
        &app_state.env.upload_dir,
        app_state.env.max_upload_bytes,
    );

    let form = receiver.receive(multipart).await?;
    let data = ListingForm::from_received(&form);

    let property = app_state
        .db_client
        .update_property(property_id, data)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Property updated successfully",
        "data": {
            "property": property
        }
    })))
}
