//! String transforms built on the linked containers

use crate::containers::LinkedQueue;

/// Collapse runs of identical adjacent characters to a single occurrence
///
/// Survivors pass through a [`LinkedQueue`] in order: each character is
/// enqueued only when it differs from the current queue tail, then the queue
/// is drained into the result. Operates on `char`s, so multi-byte characters
/// collapse correctly.
///
/// # Examples
///
/// ```rust
/// use algolab::string::remove_consecutive_duplicates;
///
/// assert_eq!(remove_consecutive_duplicates("aabbbccccdd"), "abcd");
/// assert_eq!(remove_consecutive_duplicates("aaabbaa"), "aba");
/// ```
pub fn remove_consecutive_duplicates(word: &str) -> String {
    let mut queue: LinkedQueue<char> = LinkedQueue::new();
    for ch in word.chars() {
        if queue.back() != Some(&ch) {
            queue.enqueue(ch);
        }
    }

    let mut result = String::with_capacity(queue.len());
    while let Some(ch) = queue.dequeue() {
        result.push(ch);
    }
    result
}
