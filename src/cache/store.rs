//! In-process response store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::cache::{CacheError, CacheKey, CachePolicy, Clock, Namespace, SystemClock};
use crate::config::CacheSettings;

/// A stored payload and the moment it was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub payload: Value,
    pub fetched_at: Instant,
}

impl CacheEntry {
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }

    /// Fresh while strictly younger than `ttl`.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

/// Held while one task fetches and populates a key.
///
/// Dropping it releases the key and forgets its mutex once no other task
/// is waiting on it, so keys that never get cached leave nothing behind.
#[must_use]
pub struct KeyGuard<'a> {
    locks: &'a DashMap<CacheKey, Arc<Mutex<()>>>,
    key: CacheKey,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}

/// Time-keyed store shared by all request handlers.
///
/// Entries are never evicted; a stale entry stays until it is overwritten
/// or the store is cleared at shutdown.
#[derive(Debug)]
pub struct CacheStore {
    partitions: [DashMap<String, CacheEntry>; 4],
    locks: DashMap<CacheKey, Arc<Mutex<()>>>,
    policy: CachePolicy,
    clock: Arc<dyn Clock>,
    single_flight: bool,
}

impl CacheStore {
    pub fn new(policy: CachePolicy, clock: Arc<dyn Clock>, single_flight: bool) -> Self {
        Self {
            partitions: std::array::from_fn(|_| DashMap::new()),
            locks: DashMap::new(),
            policy,
            clock,
            single_flight,
        }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(
            CachePolicy::from_settings(settings),
            Arc::new(SystemClock),
            settings.single_flight,
        )
    }

    fn partition(&self, namespace: Namespace) -> &DashMap<String, CacheEntry> {
        &self.partitions[namespace.index()]
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Raw lookup, fresh or not.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.partition(key.namespace())
            .get(key.as_str())
            .map(|entry| entry.value().clone())
    }

    /// Stores `payload` stamped with the current time, replacing any prior entry.
    pub fn put(&self, key: &CacheKey, payload: Value) {
        let entry = CacheEntry {
            payload,
            fetched_at: self.clock.now(),
        };
        self.partition(key.namespace())
            .insert(key.as_str().to_string(), entry);
    }

    /// Payload for `key` if it is younger than its namespace TTL.
    pub fn get_fresh(&self, key: &CacheKey) -> Option<Value> {
        let ttl = self.policy.ttl_for(key.namespace());
        let now = self.clock.now();
        let entry = self.partition(key.namespace()).get(key.as_str())?;
        if entry.is_fresh(now, ttl) {
            tracing::debug!(key = %key, age_ms = entry.age(now).as_millis() as u64, "Cache hit");
            Some(entry.payload.clone())
        } else {
            tracing::debug!(key = %key, "Cache entry stale");
            None
        }
    }

    /// Typed view of [`get_fresh`](Self::get_fresh).
    ///
    /// A payload that no longer matches `T` is treated as a miss.
    pub fn get_typed<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let payload = self.get_fresh(key)?;
        match serde_json::from_value(payload) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding unreadable cache entry");
                None
            }
        }
    }

    pub fn put_typed<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<(), CacheError> {
        let payload = serde_json::to_value(value)?;
        self.put(key, payload);
        Ok(())
    }

    /// Serializes fetch-and-populate for one key.
    ///
    /// Returns `None` when single-flight is disabled.
    pub async fn lock_key(&self, key: &CacheKey) -> Option<KeyGuard<'_>> {
        if !self.single_flight {
            return None;
        }
        let lock = self
            .locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        Some(KeyGuard {
            locks: &self.locks,
            key: key.clone(),
            guard: Some(guard),
        })
    }

    /// Keys that currently have a fetch in progress or waiting.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    pub fn len(&self, namespace: Namespace) -> usize {
        self.partition(namespace).len()
    }

    pub fn total_len(&self) -> usize {
        Namespace::ALL.iter().map(|ns| self.len(*ns)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Drops every entry and returns how many were removed.
    pub fn clear(&self) -> usize {
        let removed = self.total_len();
        for partition in &self.partitions {
            partition.clear();
        }
        self.locks.clear();
        removed
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::from_settings(&CacheSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BASE: Duration = Duration::from_secs(3600);

    fn store_with_clock() -> (CacheStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let store = CacheStore::new(CachePolicy::new(BASE, 6), clock.clone(), true);
        (store, clock)
    }

    #[test]
    fn test_put_then_get_fresh() {
        let (store, _clock) = store_with_clock();
        let key = CacheKey::search("vpn", "cn");

        assert!(store.get_fresh(&key).is_none());
        store.put(&key, json!({"total": 0}));
        assert_eq!(store.get_fresh(&key), Some(json!({"total": 0})));
        assert_eq!(store.len(Namespace::Keywords), 1);
        assert_eq!(store.len(Namespace::Apps), 0);
    }

    #[test]
    fn test_search_entry_expires_at_base_ttl() {
        let (store, clock) = store_with_clock();
        let key = CacheKey::search("vpn", "cn");
        store.put(&key, json!(1));

        clock.advance(BASE - Duration::from_secs(1));
        assert!(store.get_fresh(&key).is_some());

        clock.advance(Duration::from_secs(1));
        assert!(store.get_fresh(&key).is_none());
        // stale entries are kept until overwritten
        assert!(store.get(&key).is_some());
    }

    #[test]
    fn test_app_entry_lives_six_times_longer() {
        let (store, clock) = store_with_clock();
        let key = CacheKey::app("42", "cn");
        store.put(&key, json!({"id": "42"}));

        clock.advance(BASE * 5 + Duration::from_secs(30));
        assert!(store.get_fresh(&key).is_some());

        clock.advance(BASE);
        assert!(store.get_fresh(&key).is_none());
    }

    #[test]
    fn test_put_overwrites_and_restamps() {
        let (store, clock) = store_with_clock();
        let key = CacheKey::rankings("us");
        store.put(&key, json!("old"));
        let first = store.get(&key).unwrap().fetched_at;

        clock.advance(BASE * 2);
        store.put(&key, json!("new"));
        let entry = store.get(&key).unwrap();

        assert!(entry.fetched_at > first);
        assert_eq!(entry.payload, json!("new"));
        assert_eq!(store.len(Namespace::Rankings), 1);
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip_and_mismatch() {
        let (store, _clock) = store_with_clock();
        let key = CacheKey::search("typed", "cn");
        let sample = Sample {
            name: "x".into(),
            count: 3,
        };
        store.put_typed(&key, &sample).unwrap();
        assert_eq!(store.get_typed::<Sample>(&key), Some(sample));

        store.put(&key, json!("not a sample"));
        assert_eq!(store.get_typed::<Sample>(&key), None);
    }

    #[test]
    fn test_clear_reports_removed_entries() {
        let (store, _clock) = store_with_clock();
        store.put(&CacheKey::search("a", "cn"), json!(1));
        store.put(&CacheKey::app("1", "cn"), json!(2));
        store.put(&CacheKey::rankings("cn"), json!(3));

        assert_eq!(store.total_len(), 3);
        assert_eq!(store.clear(), 3);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_lock_key_serializes_same_key() {
        let (store, _clock) = store_with_clock();
        let store = Arc::new(store);
        let key = CacheKey::search("herd", "cn");
        let fetches = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let key = key.clone();
            let fetches = fetches.clone();
            handles.push(tokio::spawn(async move {
                let _guard = store.lock_key(&key).await;
                if store.get_fresh(&key).is_none() {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    store.put(&key, json!("fetched"));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(store.lock_count(), 0);
    }

    #[tokio::test]
    async fn test_lock_entry_kept_while_waiter_queued() {
        let (store, _clock) = store_with_clock();
        let store = Arc::new(store);
        let key = CacheKey::app("404", "cn");

        let first = store.lock_key(&key).await;
        assert_eq!(store.lock_count(), 1);

        let waiter = {
            let store = store.clone();
            let key = key.clone();
            tokio::spawn(async move {
                let _guard = store.lock_key(&key).await;
                store.lock_count()
            })
        };
        tokio::task::yield_now().await;

        drop(first);
        // the waiter still holds the mutex when it checks
        assert_eq!(waiter.await.unwrap(), 1);
        assert_eq!(store.lock_count(), 0);
    }

    #[tokio::test]
    async fn test_lock_entries_do_not_accumulate() {
        let (store, _clock) = store_with_clock();
        for i in 0..50 {
            let key = CacheKey::app(&i.to_string(), "cn");
            let _guard = store.lock_key(&key).await;
        }
        assert_eq!(store.lock_count(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_lock_key_disabled() {
        let store = CacheStore::new(CachePolicy::default(), Arc::new(SystemClock), false);
        assert!(store.lock_key(&CacheKey::rankings("cn")).await.is_none());
    }
}
