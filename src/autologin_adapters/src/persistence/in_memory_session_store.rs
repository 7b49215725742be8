use std::fmt;
use std::sync::Arc;

use autologin_core::{
    Customer, CustomerId, Notice, NotificationSink, ResetToken, SessionStore, SessionStoreError,
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session id from a cookie value. Anything that is not a UUID is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    pub reset_token: Option<ResetToken>,
    pub started: bool,
    pub customer_id: Option<CustomerId>,
    pub notices: Vec<Notice>,
    pub last_seen: DateTime<Utc>,
}

impl SessionData {
    /// Nothing left worth keeping.
    fn is_empty(&self) -> bool {
        self.reset_token.is_none()
            && !self.started
            && self.customer_id.is_none()
            && self.notices.is_empty()
    }
}

/// Sessions and their flash messages, kept in memory.
///
/// Sessions left untouched for longer than the idle TTL are dropped by
/// [`InMemorySessionStore::evict_idle`].
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<SessionId, SessionData>>,
    idle_ttl: Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_idle_ttl(Duration::minutes(
            defaults::SESSION_IDLE_TTL_IN_MINUTES,
        ))
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            idle_ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// A request-scoped handle on session `id`. The session is created lazily.
    pub fn handle(&self, id: SessionId) -> SessionHandle {
        SessionHandle {
            store: self.clone(),
            id: Arc::new(RwLock::new(id)),
        }
    }

    pub fn get(&self, id: &SessionId) -> Option<SessionData> {
        self.sessions.get(id).map(|data| data.clone())
    }

    /// Remove and return the flash messages of session `id`.
    ///
    /// A session holding nothing but those messages is dropped with them.
    pub fn take_notices(&self, id: &SessionId) -> Vec<Notice> {
        let notices = self
            .sessions
            .get_mut(id)
            .map(|mut data| {
                data.last_seen = Utc::now();
                std::mem::take(&mut data.notices)
            })
            .unwrap_or_default();
        self.sessions.remove_if(id, |_, data| data.is_empty());
        notices
    }

    /// Drop every session idle for longer than the TTL. Returns how many were dropped.
    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Utc::now())
    }

    pub fn evict_idle_at(&self, now: DateTime<Utc>) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|_, data| {
            let keep = now - data.last_seen <= self.idle_ttl;
            if !keep {
                evicted += 1;
            }
            keep
        });
        evicted
    }

    /// Run [`InMemorySessionStore::evict_idle`] every `period` on the current runtime.
    pub fn spawn_eviction(&self, period: std::time::Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle();
                if evicted > 0 {
                    tracing::debug!(evicted, "Evicted idle sessions");
                }
            }
        })
    }

    fn update<F>(&self, id: SessionId, f: F)
    where
        F: FnOnce(&mut SessionData),
    {
        let mut data = self.sessions.entry(id).or_default();
        f(&mut *data);
        data.last_seen = Utc::now();
    }

    /// Move the data of session `from` to a freshly generated id.
    fn regenerate(&self, from: SessionId) -> SessionId {
        let mut data = self
            .sessions
            .remove(&from)
            .map(|(_, data)| data)
            .unwrap_or_default();
        data.last_seen = Utc::now();
        let to = SessionId::generate();
        self.sessions.insert(to, data);
        to
    }
}

/// The session of the request being handled.
///
/// Logging a customer in regenerates the session id; read [`SessionHandle::id`] after
/// the request has been handled to learn which id to hand back to the client.
#[derive(Clone)]
pub struct SessionHandle {
    store: InMemorySessionStore,
    id: Arc<RwLock<SessionId>>,
}

impl SessionHandle {
    pub async fn id(&self) -> SessionId {
        *self.id.read().await
    }
}

#[async_trait::async_trait]
impl SessionStore for SessionHandle {
    async fn reset_token(&self) -> Result<Option<ResetToken>, SessionStoreError> {
        let id = self.id().await;
        Ok(self.store.get(&id).and_then(|data| data.reset_token))
    }

    async fn set_reset_token(&self, token: &ResetToken) -> Result<(), SessionStoreError> {
        let id = self.id().await;
        self.store
            .update(id, |data| data.reset_token = Some(token.clone()));
        Ok(())
    }

    async fn clear_reset_token(&self) -> Result<(), SessionStoreError> {
        let id = self.id().await;
        self.store.update(id, |data| data.reset_token = None);
        Ok(())
    }

    async fn start(&self) -> Result<(), SessionStoreError> {
        let id = self.id().await;
        self.store.update(id, |data| data.started = true);
        Ok(())
    }

    async fn set_authenticated_customer(
        &self,
        customer: &Customer,
    ) -> Result<(), SessionStoreError> {
        let mut id = self.id.write().await;
        if !self.store.get(&*id).is_some_and(|data| data.started) {
            return Err(SessionStoreError::SessionNotFound);
        }

        *id = self.store.regenerate(*id);
        self.store
            .update(*id, |data| data.customer_id = Some(customer.id()));
        tracing::debug!(session_id = %*id, "Session regenerated for authenticated customer");
        Ok(())
    }
}

#[async_trait::async_trait]
impl NotificationSink for SessionHandle {
    async fn add_error(&self, message: &str) {
        let id = self.id().await;
        self.store
            .update(id, |data| data.notices.push(Notice::error(message)));
    }

    async fn add_success(&self, message: &str) {
        let id = self.id().await;
        self.store
            .update(id, |data| data.notices.push(Notice::success(message)));
    }
}
