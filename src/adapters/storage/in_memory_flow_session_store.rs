//! In-memory flow session store.
//!
//! Sessions idle for longer than the configured TTL are dropped by
//! [`InMemoryFlowSessionStore::run_sweeper`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio::time;

use crate::domain::flow::{FlowError, FlowSession};
use crate::domain::foundation::{DomainError, FlowSessionId, Timestamp};
use crate::ports::{FlowSessionStore, SessionUpdate};

/// Keeps chat sessions in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlowSessionStore {
    sessions: Arc<RwLock<HashMap<FlowSessionId, FlowSession>>>,
    idle_ttl: Option<Duration>,
}

impl InMemoryFlowSessionStore {
    /// A store that never evicts.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose sessions expire after `idle_ttl` without activity.
    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            idle_ttl: Some(idle_ttl),
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions whose last activity is older than the TTL as seen
    /// from `now`. Returns how many were removed.
    pub async fn evict_idle_at(&self, now: &Timestamp) -> usize {
        let Some(ttl) = self.idle_ttl else {
            return 0;
        };
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let now_ms = now.as_unix_millis();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now_ms.saturating_sub(s.updated_at().as_unix_millis()) <= ttl_ms);
        before - sessions.len()
    }

    /// Sweeps idle sessions every `every` until `shutdown` turns true.
    pub async fn run_sweeper(&self, every: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(every);
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        return;
                    }
                }
                _ = interval.tick() => {
                    let evicted = self.evict_idle_at(&Timestamp::now()).await;
                    if evicted > 0 {
                        tracing::debug!(evicted, "idle chat sessions evicted");
                    }
                }
            }
        }
    }
}

#[async_trait]
impl FlowSessionStore for InMemoryFlowSessionStore {
    async fn save(&self, session: &FlowSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find(&self, id: &FlowSessionId) -> Result<Option<FlowSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn update<'a>(
        &self,
        id: &FlowSessionId,
        apply: SessionUpdate<'a>,
    ) -> Result<FlowSession, FlowError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(id).ok_or(FlowError::NotFound(*id))?;

        let mut draft = stored.clone();
        apply(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }

    async fn delete(&self, id: &FlowSessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_find_delete() {
        let store = InMemoryFlowSessionStore::new();
        let session = FlowSession::new(FlowSessionId::new());

        store.save(&session).await.unwrap();
        assert_eq!(store.find(session.id()).await.unwrap(), Some(session.clone()));
        assert_eq!(store.count().await, 1);

        assert!(store.delete(session.id()).await.unwrap());
        assert!(!store.delete(session.id()).await.unwrap());
        assert!(store.find(session.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = InMemoryFlowSessionStore::new();
        let a = FlowSession::new(FlowSessionId::new());
        let b = FlowSession::new(FlowSessionId::new());
        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();
        store.delete(a.id()).await.unwrap();
        assert!(store.find(b.id()).await.unwrap().is_some());
    }

    mod update {
        use super::*;

        #[tokio::test]
        async fn applies_and_stores_the_change() {
            let store = InMemoryFlowSessionStore::new();
            let session = FlowSession::new(FlowSessionId::new());
            store.save(&session).await.unwrap();

            let updated = store
                .update(session.id(), Box::new(|s: &mut FlowSession| {
                    s.restart();
                    Ok(())
                }))
                .await
                .unwrap();
            assert_eq!(store.find(session.id()).await.unwrap(), Some(updated));
        }

        #[tokio::test]
        async fn failed_update_writes_nothing() {
            let store = InMemoryFlowSessionStore::new();
            let session = FlowSession::new(FlowSessionId::new());
            store.save(&session).await.unwrap();

            let err = store
                .update(session.id(), Box::new(|s: &mut FlowSession| {
                    s.restart();
                    Err(FlowError::EmptyAnswer)
                }))
                .await
                .unwrap_err();
            assert_eq!(err, FlowError::EmptyAnswer);
            assert_eq!(store.find(session.id()).await.unwrap(), Some(session));
        }

        #[tokio::test]
        async fn missing_session_is_not_found() {
            let store = InMemoryFlowSessionStore::new();
            let id = FlowSessionId::new();
            let err = store.update(&id, Box::new(|_: &mut FlowSession| Ok(()))).await.unwrap_err();
            assert_eq!(err, FlowError::NotFound(id));
        }
    }

    mod eviction {
        use super::*;
        use chrono::Utc;

        fn later(secs: i64) -> Timestamp {
            Timestamp::from_datetime(Utc::now() + chrono::Duration::seconds(secs))
        }

        #[tokio::test]
        async fn idle_sessions_are_evicted_after_the_ttl() {
            let store = InMemoryFlowSessionStore::with_idle_ttl(Duration::from_secs(60));
            let session = FlowSession::new(FlowSessionId::new());
            store.save(&session).await.unwrap();

            assert_eq!(store.evict_idle_at(&later(30)).await, 0);
            assert_eq!(store.count().await, 1);

            assert_eq!(store.evict_idle_at(&later(120)).await, 1);
            assert!(store.find(session.id()).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn store_without_ttl_keeps_everything() {
            let store = InMemoryFlowSessionStore::new();
            store.save(&FlowSession::new(FlowSessionId::new())).await.unwrap();
            assert_eq!(store.evict_idle_at(&later(86_400)).await, 0);
            assert_eq!(store.count().await, 1);
        }

        #[tokio::test]
        async fn sweeper_stops_on_shutdown() {
            let store = InMemoryFlowSessionStore::with_idle_ttl(Duration::from_millis(1));
            store.save(&FlowSession::new(FlowSessionId::new())).await.unwrap();
            let (tx, rx) = watch::channel(false);

            let sweeper = {
                let store = store.clone();
                tokio::spawn(async move { store.run_sweeper(Duration::from_millis(5), rx).await })
            };
            time::sleep(Duration::from_millis(40)).await;
            tx.send(true).unwrap();
            sweeper.await.unwrap();

            assert_eq!(store.count().await, 0);
        }
    }
}
