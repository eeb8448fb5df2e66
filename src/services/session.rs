use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{BabyProfile, Recommendations};

/// Fixed key of the stored input record
pub const BABY_DATA_KEY: &str = "babyData";
/// Fixed key of the stored output record
pub const RECOMMENDATIONS_KEY: &str = "recommendations";

/// Errors that can occur with session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Session entry missing: {0}")]
    Missing(String),
}

/// In-memory key-value store for results-view data
///
/// Each session holds two JSON blobs, the submitted profile and the
/// generated recommendations, under fixed keys. Entries expire after the
/// configured TTL; nothing survives a restart.
pub struct SessionStore {
    entries: moka::future::Cache<String, Vec<u8>>,
}

impl SessionStore {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get a value from the store
    pub async fn get<T>(&self, key: &str) -> Result<T, SessionError>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self.entries.get(key).await {
            Some(bytes) => {
                tracing::trace!("Session hit: {}", key);
                Ok(serde_json::from_slice(&bytes)?)
            }
            None => {
                tracing::trace!("Session miss: {}", key);
                Err(SessionError::Missing(key.to_string()))
            }
        }
    }

    /// Set a value in the store
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), SessionError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.entries.insert(key.to_string(), bytes).await;

        tracing::trace!("Session set: {}", key);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn set_raw(&self, key: &str, bytes: Vec<u8>) {
        self.entries.insert(key.to_string(), bytes).await;
    }

    pub async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    /// Save both records of a session
    pub async fn save(
        &self,
        session_id: Uuid,
        profile: &BabyProfile,
        recs: &Recommendations,
    ) -> Result<(), SessionError> {
        self.set(&SessionKey::baby_data(session_id), profile).await?;
        self.set(&SessionKey::recommendations(session_id), recs).await?;

        tracing::debug!("Saved session {}", session_id);
        Ok(())
    }

    /// Load both records of a session; either one missing fails the load
    pub async fn load(
        &self,
        session_id: Uuid,
    ) -> Result<(BabyProfile, Recommendations), SessionError> {
        let recs = self.get(&SessionKey::recommendations(session_id)).await?;
        let profile = self.get(&SessionKey::baby_data(session_id)).await?;
        Ok((profile, recs))
    }

    /// Drop both records of a session
    pub async fn discard(&self, session_id: Uuid) {
        self.delete(&SessionKey::baby_data(session_id)).await;
        self.delete(&SessionKey::recommendations(session_id)).await;

        tracing::debug!("Discarded session {}", session_id);
    }

    /// Get store statistics
    pub async fn stats(&self) -> SessionStats {
        self.entries.run_pending_tasks().await;
        SessionStats {
            entries: self.entries.entry_count(),
        }
    }
}

/// Session store statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub entries: u64,
}

/// Session key builder
pub struct SessionKey;

impl SessionKey {
    pub fn baby_data(session_id: Uuid) -> String {
        format!("session:{}:{}", session_id, BABY_DATA_KEY)
    }

    pub fn recommendations(session_id: Uuid) -> String {
        format!("session:{}:{}", session_id, RECOMMENDATIONS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Advisor;

    #[tokio::test]
    async fn test_session_set_get() {
        let store = SessionStore::new(100, 60);

        let key = "test_key";
        let value = "test_value".to_string();

        store.set(key, &value).await.unwrap();
        let result: String = store.get(key).await.unwrap();
        assert_eq!(result, value);

        store.delete(key).await;
        assert!(matches!(
            store.get::<String>(key).await,
            Err(SessionError::Missing(_))
        ));
    }

    #[tokio::test]
    async fn test_save_load_discard() {
        let store = SessionStore::new(100, 60);
        let profile = BabyProfile::for_age(5);
        let recs = Advisor::default().recommend(&profile);
        let id = Uuid::new_v4();

        store.save(id, &profile, &recs).await.unwrap();
        let (loaded_profile, loaded_recs) = store.load(id).await.unwrap();
        assert_eq!(loaded_profile, profile);
        assert_eq!(loaded_recs, recs);

        store.discard(id).await;
        assert!(store.load(id).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_half_fails_load() {
        let store = SessionStore::new(100, 60);
        let profile = BabyProfile::for_age(5);
        let id = Uuid::new_v4();

        store.set(&SessionKey::baby_data(id), &profile).await.unwrap();
        assert!(matches!(store.load(id).await, Err(SessionError::Missing(_))));
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_serialization_error() {
        let store = SessionStore::new(100, 60);
        let key = SessionKey::recommendations(Uuid::new_v4());

        store.set_raw(&key, b"{not json".to_vec()).await;
        assert!(matches!(
            store.get::<Recommendations>(&key).await,
            Err(SessionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_session_key_builder() {
        let id = Uuid::nil();
        assert_eq!(
            SessionKey::baby_data(id),
            "session:00000000-0000-0000-0000-000000000000:babyData"
        );
        assert_eq!(
            SessionKey::recommendations(id),
            "session:00000000-0000-0000-0000-000000000000:recommendations"
        );
    }
}
