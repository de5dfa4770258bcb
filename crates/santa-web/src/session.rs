//! Cookie-keyed, in-memory session slots.
//!
//! Each session holds the result of its latest submission. Sessions are
//! only created by a submission; viewing the page never allocates one.
//! Nothing is shared between sessions and nothing survives a restart. Idle
//! sessions are evicted by [`spawn_sweeper`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use santa_core::Assessment;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "santa_session";

struct Session {
    last: Assessment,
    last_seen: Instant,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

/// Where a submission was stored by [`SessionStore::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded {
    pub id: Uuid,
    /// True when a new id was issued and must be sent back as a cookie.
    pub is_new: bool,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Last result of a known session, refreshing its idle timer.
    /// Unknown ids yield `None` and allocate nothing.
    pub async fn lookup(&self, id: Option<Uuid>, now: Instant) -> Option<Assessment> {
        let id = id?;
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_seen = now;
        Some(session.last.clone())
    }

    /// Overwrite the caller's last result, starting a session if needed.
    ///
    /// Unknown ids (evicted, from a previous run, or forged) are never
    /// adopted; a new random id is issued instead.
    pub async fn record(&self, id: Option<Uuid>, assessment: Assessment, now: Instant) -> Recorded {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id
            && let Some(session) = sessions.get_mut(&id)
        {
            session.last = assessment;
            session.last_seen = now;
            return Recorded { id, is_new: false };
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Session {
                last: assessment,
                last_seen: now,
            },
        );
        debug!(session = %id, "session started");

        Recorded { id, is_new: true }
    }

    /// Drop sessions idle for longer than the TTL. Returns how many went.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen) <= self.ttl);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Periodically evict idle sessions until aborted or the runtime shuts down.
pub fn spawn_sweeper(store: Arc<SessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(Instant::now()).await;
            if evicted > 0 {
                let remaining = store.len().await;
                info!(evicted, remaining, "evicted idle sessions");
            }
        }
    })
}

/// Session id from the request's `Cookie` headers, if present and well-formed.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> HeaderValue {
    // A hyphenated UUID is always a valid header value.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("santa_session=; Path=/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_core::assess;

    const TTL: Duration = Duration::from_secs(60);

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[tokio::test]
    async fn lookup_never_allocates() {
        let store = SessionStore::new(TTL);
        let now = Instant::now();
        assert!(store.lookup(None, now).await.is_none());
        assert!(store.lookup(Some(Uuid::new_v4()), now).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn first_submission_starts_a_session() {
        let store = SessionStore::new(TTL);
        let now = Instant::now();
        let recorded = store.record(None, assess("a bike"), now).await;
        assert!(recorded.is_new);
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.lookup(Some(recorded.id), now).await.unwrap().wish,
            "a bike"
        );
    }

    #[tokio::test]
    async fn known_session_is_overwritten() {
        let store = SessionStore::new(TTL);
        let t0 = Instant::now();
        let id = store.record(None, assess("a bike"), t0).await.id;
        let again = store.record(Some(id), assess("a holiday"), t0 + secs(1)).await;

        assert_eq!(again, Recorded { id, is_new: false });
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.lookup(Some(id), t0 + secs(2)).await.unwrap().wish,
            "a holiday"
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_adopted() {
        let store = SessionStore::new(TTL);
        let forged = Uuid::new_v4();
        let recorded = store.record(Some(forged), assess("a bike"), Instant::now()).await;
        assert!(recorded.is_new);
        assert_ne!(recorded.id, forged);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new(TTL);
        let now = Instant::now();
        let a = store.record(None, assess("a bike"), now).await.id;
        let b = store.record(None, assess("a holiday"), now).await.id;
        assert_ne!(a, b);
        assert_eq!(store.lookup(Some(a), now).await.unwrap().wish, "a bike");
        assert_eq!(store.lookup(Some(b), now).await.unwrap().wish, "a holiday");
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted() {
        let store = SessionStore::new(TTL);
        let t0 = Instant::now();
        let stale = store.record(None, assess("a bike"), t0).await.id;
        let fresh = store.record(None, assess("a ps5"), t0 + secs(50)).await.id;

        assert_eq!(store.evict_idle(t0 + secs(60)).await, 0);
        assert_eq!(store.evict_idle(t0 + secs(100)).await, 1);
        assert!(store.lookup(Some(stale), t0 + secs(101)).await.is_none());
        assert!(store.lookup(Some(fresh), t0 + secs(101)).await.is_some());
    }

    #[tokio::test]
    async fn lookup_refreshes_idle_timer() {
        let store = SessionStore::new(TTL);
        let t0 = Instant::now();
        let id = store.record(None, assess("a bike"), t0).await.id;
        assert!(store.lookup(Some(id), t0 + secs(50)).await.is_some());
        assert_eq!(store.evict_idle(t0 + secs(100)).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn sweeper_evicts_after_ttl() {
        let store = Arc::new(SessionStore::new(TTL));
        store.record(None, assess("a bike"), Instant::now()).await;
        let sweeper = spawn_sweeper(store.clone(), secs(10));

        tokio::time::sleep(secs(30)).await;
        assert_eq!(store.len().await, 1);

        tokio::time::sleep(secs(45)).await;
        assert!(store.is_empty().await);

        sweeper.abort();
    }

    #[test]
    fn cookie_parsing() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; other=1")).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("santa_session=not-a-uuid"));
        assert_eq!(session_id_from_headers(&headers), None);

        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn cookie_attributes() {
        let id = Uuid::new_v4();
        let value = session_cookie(id);
        let value = value.to_str().unwrap();
        assert!(value.starts_with(&format!("santa_session={id};")));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
    }
}
