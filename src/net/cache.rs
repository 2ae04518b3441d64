//! Request cache shared by the command handlers.
//!
//! Entries are not checked for age on access. A background reaper wakes once
//! per interval and drops every entry at least one interval old, so an entry
//! can stay visible for up to two intervals.

use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Bytes,
    created: Instant,
}

type Entries = RwLock<HashMap<String, CacheEntry>>;

/// Time-bounded store of response bodies keyed by request URL.
///
/// Clones are handles to the same entries and the same reaper.
#[derive(Debug, Clone)]
pub struct Cache {
    entries: Arc<Entries>,
}

impl Cache {
    /// Create an empty cache and start its reaper on the current Tokio runtime.
    ///
    /// `interval` is both the sweep period and the eviction age.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime or if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "cache interval must be non-zero");
        let entries = Arc::new(RwLock::new(HashMap::new()));
        tokio::spawn(reap_loop(Arc::downgrade(&entries), interval));

        Self { entries }
    }

    /// Store `value` under `key`, replacing any previous entry and its timestamp.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let entry = CacheEntry {
            value: value.into(),
            created: Instant::now(),
        };
        self.entries.write().insert(key.into(), entry);
    }

    /// Return the stored value, or `None` if it was never inserted or has been reaped.
    pub fn lookup(&self, key: &str) -> Option<Bytes> {
        self.entries.read().get(key).map(|entry| entry.value.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Sweep on every tick until the last `Cache` handle is gone.
async fn reap_loop(entries: Weak<Entries>, interval: Duration) {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let Some(entries) = entries.upgrade() else {
            log::debug!("Cache dropped, stopping reaper");
            return;
        };

        let evicted = reap(&entries, Instant::now(), interval);
        if evicted > 0 {
            log::debug!("Reaped {} cache entries", evicted);
        }
    }
}

/// Remove every entry aged `interval` or more at `now`. Returns how many were removed.
fn reap(entries: &Entries, now: Instant, interval: Duration) -> usize {
    let mut entries = entries.write();
    let before = entries.len();
    entries.retain(|_, entry| now.duration_since(entry.created) < interval);
    before - entries.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let cache = Cache::new(INTERVAL);
        cache.insert("https://example.com/a", vec![1u8, 2, 3]);

        assert_eq!(cache.lookup("https://example.com/a").as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_unknown_key() {
        let cache = Cache::new(INTERVAL);
        assert!(cache.lookup("https://example.com/missing").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_empty_value_is_a_hit() {
        let cache = Cache::new(INTERVAL);
        cache.insert("empty", Vec::<u8>::new());
        assert_eq!(cache.lookup("empty"), Some(Bytes::new()));
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let cache = Cache::new(INTERVAL);
        cache.insert("key", vec![1u8]);
        cache.insert("key", vec![2u8, 2]);

        assert_eq!(cache.lookup("key"), Some(Bytes::from_static(&[2, 2])));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_timestamp() {
        let cache = Cache::new(INTERVAL);
        cache.insert("key", vec![1u8]);

        sleep(Duration::from_secs(4)).await;
        cache.insert("key", vec![2u8]);

        // First sweep at t=5 sees the replacement aged 1s.
        sleep(Duration::from_secs(2)).await;
        assert_eq!(cache.lookup("key"), Some(Bytes::from_static(&[2])));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_survives_before_interval() {
        let cache = Cache::new(INTERVAL);
        cache.insert("key", vec![7u8]);

        sleep(Duration::from_secs(4)).await;
        assert_eq!(cache.lookup("key"), Some(Bytes::from_static(&[7])));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_does_not_renew() {
        let cache = Cache::new(INTERVAL);
        cache.insert("key", vec![7u8]);

        for _ in 0..4 {
            sleep(Duration::from_secs(1)).await;
            assert!(cache.lookup("key").is_some());
        }

        sleep(Duration::from_secs(2)).await;
        assert!(cache.lookup("key").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_scenario() {
        let cache = Cache::new(INTERVAL);
        cache.insert("A", vec![1u8, 2, 3]);

        sleep(Duration::from_secs(1)).await;
        assert_eq!(cache.lookup("A"), Some(Bytes::from_static(&[1, 2, 3])));

        sleep(Duration::from_secs(5)).await;
        assert!(cache.lookup("A").is_none());

        cache.insert("A", vec![9u8]);
        sleep(Duration::from_secs(1)).await;
        assert_eq!(cache.lookup("A"), Some(Bytes::from_static(&[9])));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_can_outlive_interval_until_next_sweep() {
        let cache = Cache::new(INTERVAL);

        sleep(Duration::from_secs(1)).await;
        cache.insert("late", vec![1u8]);

        // Sweep at t=5 sees age 4, sweep at t=10 sees age 9.
        sleep(Duration::from_secs(8)).await;
        assert!(cache.lookup("late").is_some());

        sleep(Duration::from_secs(2)).await;
        assert!(cache.lookup("late").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_keeps_fresh_entries() {
        let cache = Cache::new(INTERVAL);
        cache.insert("old", vec![1u8]);

        sleep(Duration::from_secs(3)).await;
        cache.insert("new", vec![2u8]);

        sleep(Duration::from_secs(3)).await;
        assert!(cache.lookup("old").is_none());
        assert!(cache.lookup("new").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reap_threshold() {
        let entries: Entries = RwLock::new(HashMap::new());
        let now = Instant::now();
        let aged = |age: u64| CacheEntry {
            value: Bytes::from_static(b"x"),
            created: now - Duration::from_secs(age),
        };
        {
            let mut map = entries.write();
            map.insert("fresh".to_string(), aged(4));
            map.insert("exact".to_string(), aged(5));
            map.insert("stale".to_string(), aged(6));
        }

        assert_eq!(reap(&entries, now, INTERVAL), 2);
        let map = entries.read();
        assert!(map.contains_key("fresh"));
        assert_eq!(map.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_insert_and_lookup() {
        let cache = Cache::new(INTERVAL);
        let value_for = |i: usize| vec![i as u8; 64];

        std::thread::scope(|scope| {
            for writer in 0..4 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in (writer * 50)..(writer * 50 + 50) {
                        cache.insert(format!("key-{}", i), value_for(i));
                    }
                });
            }
            for _ in 0..4 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..250 {
                        if let Some(value) = cache.lookup(&format!("key-{}", i)) {
                            assert_eq!(value.as_ref(), value_for(i).as_slice());
                        }
                    }
                });
            }
        });

        assert_eq!(cache.len(), 200);
        assert!(cache.lookup("key-200").is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = Cache::new(INTERVAL);
        let other = cache.clone();
        other.insert("shared", vec![4u8]);

        assert_eq!(cache.lookup("shared"), Some(Bytes::from_static(&[4])));
    }

    #[tokio::test]
    #[should_panic(expected = "cache interval must be non-zero")]
    async fn test_zero_interval_rejected() {
        Cache::new(Duration::ZERO);
    }
}
