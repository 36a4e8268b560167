//! Linked container structures
//!
//! This module provides the two linked structures the rest of the crate is
//! built on: a forward-chaining hash table with a fixed bucket count and an
//! owned singly linked FIFO queue.

pub mod chained_hash_map;
pub mod linked_queue;

pub use chained_hash_map::{BucketIndex, ChainedHashMap, HashIndex, OffsetModIndex};
pub use linked_queue::LinkedQueue;
