use std::sync::Arc;

use axum::{response::IntoResponse, Extension, Json};
use validator::Validate;

use crate::{
    db::userdb::UserExt,
    dtos::userdtos::{CreateUserDto, Response},
    error::HttpError,
    AppState,
};

// Callback requests from the public site. The saved contact shows up on the
// admin dashboard next to everything else.
pub async fn add_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .save_user(body)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(Response {
        status: "success",
        message: "User added successfully".to_string(),
    }))
}
