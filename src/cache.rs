// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;
use std::time::Duration;

use tokio::time::Instant;

/// Key-value storage whose entries disappear after a time-to-live.
///
/// Expiry is passive: an entry past its deadline is dropped on the next read, no background
/// sweep is required for correctness.
pub trait ExpiringStorage<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;

    fn set(&self, key: K, value: V, ttl: Duration);

    fn delete(&self, key: &K);
}

/// In-memory implementation of [`ExpiringStorage`].
///
/// This does not persist data, all entries are lost when the process ends. Deadlines are
/// measured on the tokio clock so tests can pause and advance time.
#[derive(Debug)]
pub struct MemoryExpiringStorage<K, V> {
    entries: RwLock<HashMap<K, (V, Instant)>>,
}

impl<K, V> MemoryExpiringStorage<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for MemoryExpiringStorage<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ExpiringStorage<K, V> for MemoryExpiringStorage<K, V>
where
    K: Clone + Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        let expired = {
            let entries = self
                .entries
                .read()
                .expect("acquire shared read access on cache");
            match entries.get(key) {
                Some((value, deadline)) if *deadline > Instant::now() => {
                    return Some(value.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.delete(key);
        }
        None
    }

    fn set(&self, key: K, value: V, ttl: Duration) {
        let deadline = Instant::now() + ttl;
        self.entries
            .write()
            .expect("acquire exclusive write access on cache")
            .insert(key, (value, deadline));
    }

    fn delete(&self, key: &K) {
        self.entries
            .write()
            .expect("acquire exclusive write access on cache")
            .remove(key);
    }
}
