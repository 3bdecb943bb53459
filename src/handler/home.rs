use std::sync::Arc;

use axum::{extract::Query, response::IntoResponse, Extension, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    db::{developerdb::DeveloperExt, propertydb::PropertyExt, testdb::TestExt},
    dtos::propertydtos::{HomeData, HomeQueryDto, HomeResponseDto},
    error::HttpError,
    middleware::session_is_admin,
    service::listing::{bucketize, parse_filter},
    AppState,
};

pub async fn home_page(
    Query(query): Query<HomeQueryDto>,
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let filter = query
        .categories
        .as_deref()
        .map(parse_filter)
        .unwrap_or_default();

    let properties = app_state
        .db_client
        .get_properties(&filter)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let developers = app_state
        .db_client
        .get_developers()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let tests = app_state
        .db_client
        .get_tests()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let is_admin = session_is_admin(&cookie_jar, &app_state).await;

    Ok(Json(HomeResponseDto {
        status: "success".to_string(),
        data: HomeData {
            properties: bucketize(&properties),
            developers,
            tests,
            is_admin,
        },
    }))
}
