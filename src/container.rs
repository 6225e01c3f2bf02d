//! FIFO-stable priority queue.
//!
//! Items leave the queue highest priority first. Items of equal priority
//! leave in insertion order.
//!
//! # Representation
//! The backing vector is kept sorted with the next item to remove at the
//! tail, so removal is O(1) and insertion is a linear scan plus a
//! positional insert, O(n).

/// Strict "higher priority" ordering used by [`PriorityQueue`].
///
/// `higher_priority(a, b)` must return `true` only when `a` should leave
/// the queue strictly before `b`. Equal items must return `false` both
/// ways; that is what keeps ties in insertion order.
pub trait Priority<T> {
    /// Whether `a` has strictly higher priority than `b`.
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// A queue that removes items in priority order, FIFO among ties.
///
/// # Example
/// ```
/// use parcel_schedule::container::PriorityQueue;
///
/// let mut pq = PriorityQueue::new(|a: &&str, b: &&str| a.len() < b.len());
/// for word in ["fred", "arju", "monalisa", "hat"] {
///     pq.add(word);
/// }
/// assert_eq!(pq.remove(), Some("hat"));
/// assert_eq!(pq.remove(), Some("fred"));
/// assert_eq!(pq.remove(), Some("arju"));
/// assert_eq!(pq.remove(), Some("monalisa"));
/// assert!(pq.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    queue: Vec<T>,
    priority: P,
}

impl<T, P: Priority<T>> PriorityQueue<T, P> {
    /// Creates an empty queue ordered by `priority`.
    pub fn new(priority: P) -> Self {
        Self {
            queue: Vec::new(),
            priority,
        }
    }

    /// Inserts `item`, keeping the queue sorted.
    ///
    /// The item goes in front of the first queued element it does not
    /// strictly outrank, so it ends up behind every equal element already
    /// queued and is removed after them.
    pub fn add(&mut self, item: T) {
        let at = self
            .queue
            .iter()
            .position(|queued| !self.priority.higher_priority(&item, queued))
            .unwrap_or(self.queue.len());
        self.queue.insert(at, item);
    }

    /// Removes and returns the highest-priority item.
    ///
    /// Returns `None` when the queue is empty.
    pub fn remove(&mut self) -> Option<T> {
        self.queue.pop()
    }

    /// The item [`remove`](Self::remove) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.queue.last()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T, P: Priority<T>> Extend<T> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shorter(a: &String, b: &String) -> bool {
        a.len() < b.len()
    }

    fn words() -> PriorityQueue<String, fn(&String, &String) -> bool> {
        let mut pq = PriorityQueue::new(shorter as fn(&String, &String) -> bool);
        for w in ["fred", "arju", "monalisa", "hat"] {
            pq.add(w.to_string());
        }
        pq
    }

    #[test]
    fn test_is_empty() {
        let mut pq = PriorityQueue::new(|a: &String, b: &String| a < b);
        assert!(pq.is_empty());
        pq.add("fred".to_string());
        assert!(!pq.is_empty());
        assert_eq!(pq.len(), 1);
    }

    #[test]
    fn test_internal_order() {
        let pq = words();
        // Tail is the next item out; "arju" sits behind "fred" because it
        // arrived later.
        assert_eq!(pq.queue, vec!["monalisa", "arju", "fred", "hat"]);
    }

    #[test]
    fn test_remove_order_fifo_ties() {
        let mut pq = words();
        assert_eq!(pq.peek().map(String::as_str), Some("hat"));
        assert_eq!(pq.remove().as_deref(), Some("hat"));
        assert_eq!(pq.remove().as_deref(), Some("fred"));
        assert_eq!(pq.remove().as_deref(), Some("arju"));
        assert_eq!(pq.remove().as_deref(), Some("monalisa"));
        assert_eq!(pq.remove(), None);
    }

    #[test]
    fn test_all_equal_is_fifo() {
        let mut pq = PriorityQueue::new(|_: &u32, _: &u32| false);
        pq.extend([5, 3, 9, 1]);
        let out: Vec<u32> = std::iter::from_fn(|| pq.remove()).collect();
        assert_eq!(out, vec![5, 3, 9, 1]);
    }

    #[test]
    fn test_strict_descending() {
        let mut pq = PriorityQueue::new(|a: &u32, b: &u32| a > b);
        pq.extend([4, 10, 1, 7, 10]);
        let out: Vec<u32> = std::iter::from_fn(|| pq.remove()).collect();
        assert_eq!(out, vec![10, 10, 7, 4, 1]);
    }

    struct ByLen;

    impl Priority<&'static str> for ByLen {
        fn higher_priority(&self, a: &&'static str, b: &&'static str) -> bool {
            a.len() > b.len()
        }
    }

    #[test]
    fn test_strategy_object() {
        let mut pq = PriorityQueue::new(ByLen);
        pq.extend(["aa", "b", "cccc", "dd"]);
        assert_eq!(pq.remove(), Some("cccc"));
        assert_eq!(pq.remove(), Some("aa"));
        assert_eq!(pq.remove(), Some("dd"));
        assert_eq!(pq.remove(), Some("b"));
    }
}
