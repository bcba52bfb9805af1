//! In-memory registry of active interview sessions.
//!
//! Each session is created when an interview starts and removed when it is abandoned.
//! Sessions never share state; the lock only guards the map itself.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::interview::session::InterviewSession;

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, InterviewSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, session: InterviewSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Returns a snapshot of the session.
    pub async fn get(&self, id: Uuid) -> Option<InterviewSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Applies `f` to the session under the write lock.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut InterviewSession) -> R) -> Option<R> {
        self.sessions.write().await.get_mut(&id).map(f)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }
}
