//! Forward-chaining hash table with a fixed bucket count
//!
//! Collision resolution is forward chaining: each bucket owns a singly linked
//! chain of key/value nodes and new entries are inserted at the chain head, so
//! the newest pair for a bucket is always at the front. The bucket count is
//! fixed at construction; there is no resizing or load-factor policy.
//!
//! The strategy that maps a key to a bucket index is pluggable through
//! [`BucketIndex`], with [`HashIndex`] (ahash) as the default and
//! [`OffsetModIndex`] for the classic `h(key) = (key + offset) mod buckets`
//! scheme used with small integer keys.

use crate::error::{check_bounds, AlgolabError, Result};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// Strategy that maps a key to a bucket index
pub trait BucketIndex<K> {
    /// Compute the bucket for `key` given `bucket_count` buckets.
    ///
    /// The returned index must be `< bucket_count` for any key.
    fn bucket(&self, key: &K, bucket_count: usize) -> usize;
}

/// Default bucket strategy: ahash of the key, reduced modulo the bucket count
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    state: ahash::RandomState,
}

impl<K: Hash> BucketIndex<K> for HashIndex {
    fn bucket(&self, key: &K, bucket_count: usize) -> usize {
        let mut hasher = self.state.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % bucket_count
    }
}

/// Modular bucket strategy for integer keys: `(key + offset) mod bucket_count`
#[derive(Debug, Clone, Copy)]
pub struct OffsetModIndex {
    /// Constant added to the key before the modulo reduction
    pub offset: i64,
}

impl BucketIndex<i64> for OffsetModIndex {
    fn bucket(&self, key: &i64, bucket_count: usize) -> usize {
        (*key + self.offset).rem_euclid(bucket_count as i64) as usize
    }
}

struct Node<K, V> {
    key: K,
    value: V,
    next: Option<Box<Node<K, V>>>,
}

/// Hash table with forward-chaining collision resolution
///
/// # Examples
///
/// ```rust
/// use algolab::containers::{ChainedHashMap, OffsetModIndex};
///
/// // h(key) = (key + 3) % 6, the classic lab hash function
/// let mut table = ChainedHashMap::with_index(6, OffsetModIndex { offset: 3 })?;
/// table.insert(4, "Rafi");
/// table.insert(22, "Nilu");
///
/// assert_eq!(table.get(&4), Some(&"Rafi"));
/// assert_eq!(table.remove(&4), Some("Rafi"));
/// assert_eq!(table.remove(&4), None);
/// # Ok::<(), algolab::AlgolabError>(())
/// ```
pub struct ChainedHashMap<K, V, I = HashIndex> {
    buckets: Vec<Option<Box<Node<K, V>>>>,
    len: usize,
    index: I,
}

impl<K: Hash + PartialEq, V> ChainedHashMap<K, V, HashIndex> {
    /// Create a table with `bucket_count` buckets and the default ahash strategy
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        Self::with_index(bucket_count, HashIndex::default())
    }
}

impl<K, V, I> ChainedHashMap<K, V, I>
where
    K: PartialEq,
    I: BucketIndex<K>,
{
    /// Create a table with `bucket_count` buckets and a custom bucket strategy
    pub fn with_index(bucket_count: usize, index: I) -> Result<Self> {
        if bucket_count == 0 {
            return Err(AlgolabError::invalid_input("bucket count must be non-zero"));
        }
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        Ok(Self { buckets, len: 0, index })
    }

    /// Insert a key/value pair at the head of its bucket chain
    ///
    /// Duplicate keys are not rejected: the newer pair shadows the older one
    /// for [`get`](Self::get) until it is removed.
    pub fn insert(&mut self, key: K, value: V) {
        let idx = self.index.bucket(&key, self.buckets.len());
        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Node { key, value, next }));
        self.len += 1;
    }

    /// Bulk-load pairs in iteration order
    pub fn extend_from_pairs<T: IntoIterator<Item = (K, V)>>(&mut self, pairs: T) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Look up the value for `key`, front-of-chain first
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.index.bucket(key, self.buckets.len());
        let mut cursor = self.buckets[idx].as_deref();
        while let Some(node) = cursor {
            if node.key == *key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove the first pair whose key matches, unlinking it from its chain
    ///
    /// Returns the removed value, or `None` (table unchanged) when the key is
    /// absent. Both the chain-head and interior-node cases relink correctly.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.bucket(key, self.buckets.len());
        let mut cursor = &mut self.buckets[idx];
        while cursor.as_ref().map(|node| &node.key) != Some(key) {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return None,
            }
        }
        let node = cursor.take()?;
        *cursor = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the table holds no pairs
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets (fixed at construction)
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Chain contents of bucket `bucket`, front to back
    pub fn bucket_entries(&self, bucket: usize) -> Result<Vec<(&K, &V)>> {
        check_bounds(bucket, self.buckets.len())?;
        let mut entries = Vec::new();
        let mut cursor = self.buckets[bucket].as_deref();
        while let Some(node) = cursor {
            entries.push((&node.key, &node.value));
            cursor = node.next.as_deref();
        }
        Ok(entries)
    }
}

impl<K, V, I> fmt::Display for ChainedHashMap<K, V, I>
where
    K: fmt::Display,
    V: fmt::Display,
{
    /// One bucket per line: `1: (22, Nilu) -> (34, Abid) -> null`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{}: ", i)?;
            let mut cursor = bucket.as_deref();
            while let Some(node) = cursor {
                write!(f, "({}, {}) -> ", node.key, node.value)?;
                cursor = node.next.as_deref();
            }
            writeln!(f, "null")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The lab scenario: h(key) = (key + 3) % 6 over 6 buckets.
    fn lab_table() -> ChainedHashMap<i64, &'static str, OffsetModIndex> {
        let mut table = ChainedHashMap::with_index(6, OffsetModIndex { offset: 3 }).unwrap();
        table.extend_from_pairs([
            (34, "Abid"),
            (4, "Rafi"),
            (6, "Karim"),
            (3, "Chitra"),
            (22, "Nilu"),
        ]);
        table
    }

    #[test]
    fn test_lab_bucket_layout() {
        let table = lab_table();
        assert_eq!(table.len(), 5);

        // Head insertion: bucket 1 holds 22 -> 4 -> 34, newest first
        let chain: Vec<i64> = table
            .bucket_entries(1)
            .unwrap()
            .iter()
            .map(|(k, _)| **k)
            .collect();
        assert_eq!(chain, vec![22, 4, 34]);

        assert_eq!(table.bucket_entries(0).unwrap().len(), 1); // (3, Chitra)
        assert_eq!(table.bucket_entries(3).unwrap().len(), 1); // (6, Karim)
        assert!(table.bucket_entries(2).unwrap().is_empty());
    }

    #[test]
    fn test_remove_interior_node() {
        let mut table = lab_table();

        // (4, Rafi) sits in the middle of bucket 1's chain
        assert_eq!(table.remove(&4), Some("Rafi"));
        let chain: Vec<i64> = table
            .bucket_entries(1)
            .unwrap()
            .iter()
            .map(|(k, _)| **k)
            .collect();
        assert_eq!(chain, vec![22, 34]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_remove_head_and_tail_nodes() {
        let mut table = lab_table();

        assert_eq!(table.remove(&22), Some("Nilu")); // chain head
        assert_eq!(table.remove(&34), Some("Abid")); // chain tail
        assert!(table.bucket_entries(1).unwrap().iter().any(|(k, _)| **k == 4));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut table = lab_table();
        assert_eq!(table.remove(&9), None);
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(&3), Some(&"Chitra"));
    }

    #[test]
    fn test_remove_only_node_empties_bucket() {
        let mut table = lab_table();
        assert_eq!(table.remove(&3), Some("Chitra"));
        assert!(table.bucket_entries(0).unwrap().is_empty());

        // The bucket is reusable after being emptied
        table.insert(3, "Chitra");
        assert_eq!(table.get(&3), Some(&"Chitra"));
    }

    #[test]
    fn test_duplicate_key_shadows() {
        let mut table = lab_table();
        table.insert(4, "Rafi2");
        assert_eq!(table.get(&4), Some(&"Rafi2"));

        // Removing the shadow exposes the older pair
        assert_eq!(table.remove(&4), Some("Rafi2"));
        assert_eq!(table.get(&4), Some(&"Rafi"));
    }

    #[test]
    fn test_default_hash_strategy() {
        let mut table: ChainedHashMap<String, i32> = ChainedHashMap::with_buckets(8).unwrap();
        for i in 0..100 {
            table.insert(format!("key-{}", i), i);
        }
        assert_eq!(table.len(), 100);
        for i in 0..100 {
            assert_eq!(table.get(&format!("key-{}", i)), Some(&i));
        }
        assert_eq!(table.remove(&"key-42".to_string()), Some(42));
        assert!(!table.contains_key(&"key-42".to_string()));
    }

    #[test]
    fn test_zero_buckets_rejected() {
        assert!(ChainedHashMap::<i64, ()>::with_buckets(0).is_err());
    }

    #[test]
    fn test_bucket_entries_out_of_range() {
        let table = lab_table();
        assert!(table.bucket_entries(6).is_err());
    }

    #[test]
    fn test_display_format() {
        let mut table = ChainedHashMap::with_index(3, OffsetModIndex { offset: 0 }).unwrap();
        table.insert(1, "a");
        let rendered = format!("{}", table);
        assert!(rendered.contains("1: (1, a) -> null"));
        assert!(rendered.contains("0: null"));
    }

    #[test]
    fn test_negative_keys_use_positive_buckets() {
        let mut table = ChainedHashMap::with_index(6, OffsetModIndex { offset: 3 }).unwrap();
        table.insert(-10, "neg");
        assert_eq!(table.get(&-10), Some(&"neg"));
        assert_eq!(table.remove(&-10), Some("neg"));
    }
}
