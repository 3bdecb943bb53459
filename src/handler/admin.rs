use std::sync::Arc;

use axum::{
    extract::{Multipart, Path},
    http::{header, HeaderMap},
    response::IntoResponse,
    Extension, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{
        developerdb::DeveloperExt, propertydb::PropertyExt, taskdb::TaskExt, testdb::TestExt,
        userdb::UserExt,
    },
    dtos::{
        admindtos::{DashboardData, DashboardResponseDto, VerifyCodeDto},
        developerdtos::{DeveloperData, DeveloperResponseDto},
        propertydtos::{PropertyData, PropertyResponseDto},
        testdtos::{TestData, TestResponseDto},
        userdtos::Response,
    },
    error::{ErrorMessage, HttpError},
    middleware::{known_session, SESSION_COOKIE},
    service::upload::UploadReceiver,
    AppState,
};

pub async fn verify_code(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<VerifyCodeDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if body.code != app_state.env.admin_access_code {
        return Err(HttpError::unauthorized(
            ErrorMessage::WrongAccessCode.to_string(),
        ));
    }

    // Reuse the visitor's session when one exists so re-entering the code
    // does not leave orphaned sessions behind.
    let sid = match known_session(&cookie_jar, &app_state).await {
        Some(sid) => sid,
        None => app_state.sessions.create().await,
    };
    app_state.sessions.grant_admin(sid).await;

    let cookie = Cookie::build((SESSION_COOKIE, sid.to_string()))
        .path("/")
        .http_only(true)
        .build();

    let mut headers = HeaderMap::new();

    headers.append(header::SET_COOKIE, cookie.to_string().parse().unwrap());

    let mut response = Json(Response {
        status: "success",
        message: "Admin access granted".to_string(),
    })
    .into_response();

    response.headers_mut().extend(headers);

    Ok(response)
}

pub async fn logout(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(sid) = known_session(&cookie_jar, &app_state).await {
        app_state.sessions.destroy(sid).await;
    }

    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .http_only(true)
        .build();

    let mut headers = HeaderMap::new();

    headers.append(header::SET_COOKIE, cookie.to_string().parse().unwrap());

    let mut response = Json(Response {
        status: "success",
        message: "Logged out successfully".to_string(),
    })
    .into_response();

    response.headers_mut().extend(headers);

    Ok(response)
}

pub async fn dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let db = &app_state.db_client;

    let properties = db
        .get_properties(&[])
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let developers = db
        .get_developers()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let tasks = db
        .get_tasks()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let users = db
        .get_users()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let tests = db
        .get_tests()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(DashboardResponseDto {
        status: "success".to_string(),
        data: DashboardData {
            properties,
            developers,
            tasks,
            users,
            tests,
        },
    }))
}

pub async fn edit_property(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    Ok(Json(PropertyResponseDto {
        status: "success".to_string(),
        data: PropertyData { property },
    }))
}

pub async fn edit_developer(
    Path(developer_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let developer = app_state
        .db_client
        .get_developer(developer_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::DeveloperNotFound.to_string()))?;

    Ok(Json(DeveloperResponseDto {
        status: "success".to_string(),
        data: DeveloperData { developer },
    }))
}

pub async fn edit_test(
    Path(test_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let test = app_state
        .db_client
        .get_test(test_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::TestNotFound.to_string()))?;

    Ok(Json(TestResponseDto {
        status: "success".to_string(),
        data: TestData { test },
    }))
}

/// One delete button serves every collection, so the record id is tried
/// against each of them and whichever table holds it loses the row.
pub async fn delete_record(
    Path(record_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let db = &app_state.db_client;

    let (properties, developers, tasks, tests) = tokio::try_join!(
        db.delete_property(record_id),
        db.delete_developer(record_id),
        db.delete_task(record_id),
        db.delete_test(record_id),
    )
    .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::debug!(
        "delete {} removed {} properties, {} developers, {} tasks, {} tests",
        record_id,
        properties,
        developers,
        tasks,
        tests
    );

    Ok(Json(Response {
        status: "success",
        message: "Record deleted successfully".to_string(),
    }))
}

pub async fn upload_file(
    Extension(app_state): Extension<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let receiver = UploadReceiver::new(&app_state.env.upload_dir, app_state.env.max_upload_bytes);
    let form = receiver.receive(multipart).await?;

    let path = form
        .file("file")
        .ok_or_else(|| HttpError::bad_request("No file was uploaded"))?;

    Ok(Json(json!({
        "status": "success",
        "message": "File uploaded successfully",
        "data": {
            "path": path
        }
    })))
}
