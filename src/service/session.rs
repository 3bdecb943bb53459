use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub is_admin: bool,
}

/// In-memory session store keyed by the opaque id carried in the `sid`
/// cookie. Sessions hold nothing but the admin flag and vanish on restart.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionData>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let sid = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(sid, SessionData::default());
        sid
    }

    pub async fn exists(&self, sid: Uuid) -> bool {
        self.sessions.read().await.contains_key(&sid)
    }

    pub async fn grant_admin(&self, sid: Uuid) {
        if let Some(session) = self.sessions.write().await.get_mut(&sid) {
            session.is_admin = true;
        }
    }

    pub async fn is_admin(&self, sid: Uuid) -> bool {
        self.sessions
            .read()
            .await
            .get(&sid)
            .map(|session| session.is_admin)
            .unwrap_or(false)
    }

    pub async fn destroy(&self, sid: Uuid) {
        self.sessions.write().await.remove(&sid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn a_fresh_session_is_not_admin() {
        let store = SessionStore::new();
        let sid = store.create().await;

        assert!(store.exists(sid).await);
        assert!(!store.is_admin(sid).await);
    }

    #[tokio::test]
    async fn granting_admin_sticks_until_the_session_is_destroyed() {
        let store = SessionStore::new();
        let sid = store.create().await;

        store.grant_admin(sid).await;
        assert!(store.is_admin(sid).await);

        store.destroy(sid).await;
        assert!(!store.exists(sid).await);
        assert!(!store.is_admin(sid).await);
    }

    #[tokio::test]
    async fn unknown_session_ids_are_never_admin() {
        let store = SessionStore::new();

        assert!(!store.is_admin(Uuid::new_v4()).await);
    }
}
