use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::{
    error::{ErrorMessage, HttpError},
    AppState,
};

pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone)]
pub struct AdminSession {
    pub sid: Uuid,
}

fn session_id(cookie_jar: &CookieJar) -> Option<Uuid> {
    cookie_jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// Lets a request through only when its `sid` cookie names a session that
/// has passed the access code check. Everyone else gets the 401 challenge.
pub async fn require_admin(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let sid = session_id(&cookie_jar)
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::AdminRequired.to_string()))?;

    if !app_state.sessions.is_admin(sid).await {
        return Err(HttpError::unauthorized(
            ErrorMessage::AdminRequired.to_string(),
        ));
    }

    req.extensions_mut().insert(AdminSession { sid });

    Ok(next.run(req).await)
}

/// Cookie check for pages that render for everyone but show admin controls
/// to a verified session.
pub async fn session_is_admin(cookie_jar: &CookieJar, app_state: &AppState) -> bool {
    match session_id(cookie_jar) {
        Some(sid) => app_state.sessions.is_admin(sid).await,
        None => false,
    }
}

/// The session named by the cookie, if the store still knows it.
pub async fn known_session(cookie_jar: &CookieJar, app_state: &AppState) -> Option<Uuid> {
    let sid = session_id(cookie_jar)?;
    if app_state.sessions.exists(sid).await {
        Some(sid)
    } else {
        None
    }
}
