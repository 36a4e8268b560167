//! Singly linked FIFO queue
//!
//! An owned linked queue: `enqueue` appends at the tail, `dequeue` pops the
//! head. Ownership flows head-to-tail through `Option<Box<Node>>` links, so no
//! unsafe code and no reference cycles are involved. Enqueue walks the chain
//! (O(n)); the structure exists for its linked shape, not for throughput.

use std::fmt;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Owned singly linked FIFO queue
///
/// # Examples
///
/// ```rust
/// use algolab::containers::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
///
/// assert_eq!(queue.front(), Some(&'a'));
/// assert_eq!(queue.back(), Some(&'b'));
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct LinkedQueue<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Append a value at the tail
    pub fn enqueue(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Pop the value at the head, if any
    pub fn dequeue(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Peek at the head value
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Peek at the tail value
    pub fn back(&self) -> Option<&T> {
        let mut cursor = self.head.as_deref()?;
        while let Some(next) = cursor.next.as_deref() {
            cursor = next;
        }
        Some(&cursor.value)
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all queued values
    pub fn clear(&mut self) {
        // Iterative teardown; a recursive Drop would overflow on long chains
        while self.dequeue().is_some() {}
    }

    /// Iterate head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { cursor: self.head.as_deref() }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail iterator over a [`LinkedQueue`]
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.value)
    }
}
