//! A queue of owned strings on top of [`List`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::list::iterator::IntoIter;
use crate::list::List;

/// A queue of strings.
///
/// Every inserted value is duplicated into a string owned by the queue, and
/// handed back as an [`Element`] when removed. Sorting, filtering and merging
/// compare values under the queue's [`Collation`](crate::Collation), and
/// sorting uses its [`SortStrategy`](crate::SortStrategy).
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b")?;
/// queue.insert_head("c")?;
/// queue.insert_tail("a")?;
/// queue.sort();
/// assert!(queue.iter().eq(["a", "b", "c"]));
///
/// let head = queue.remove_head().unwrap();
/// assert_eq!(head.value(), "a");
/// assert_eq!(queue.size(), 2);
/// # Ok::<(), cyclic_queue::Error>(())
/// ```
pub struct Queue {
    list: List<String>,
    config: Config,
}

/// A value removed from a [`Queue`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    fn new(value: String) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into `buf` as a NUL-terminated byte string, truncated
    /// to `buf.len() - 1` bytes. Returns the number of value bytes copied.
    ///
    /// Truncation is byte-wise and may split a multi-byte character.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroCapacity`] if `buf` has no room for the terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("hello")?;
    /// let element = queue.remove_head().unwrap();
    ///
    /// let mut buf = [0xff; 4];
    /// assert_eq!(element.copy_into(&mut buf)?, 3);
    /// assert_eq!(&buf, b"hel\0");
    /// # Ok::<(), cyclic_queue::Error>(())
    /// ```
    pub fn copy_into(&self, buf: &mut [u8]) -> Result<usize> {
        let room = buf.len().checked_sub(1).ok_or(Error::ZeroCapacity)?;
        let bytes = self.value.as_bytes();
        let copied = bytes.len().min(room);
        buf[..copied].copy_from_slice(&bytes[..copied]);
        buf[copied] = 0;
        Ok(copied)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.value
    }
}

/// Duplicate `value` into a fresh string, reporting allocation failure
/// instead of aborting.
fn duplicate(value: &str) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(value.len()).map_err(|_| {
        tracing::debug!(len = value.len(), "element allocation failed");
        Error::AllocFailed { len: value.len() }
    })?;
    owned.push_str(value);
    Ok(owned)
}

// Lifecycle
impl Queue {
    /// Create an empty queue with the default [`Config`].
    ///
    /// The default arena starts unallocated, so this never fails.
    pub fn new() -> Self {
        Self {
            list: List::new(),
            config: Config::default(),
        }
    }

    /// Create an empty queue with `config`, pre-sizing the node arena for
    /// `config.capacity` elements.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the arena cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Config, Error, Queue};
    ///
    /// let queue = Queue::with_config(Config::new().capacity(4))?;
    /// assert!(queue.is_empty());
    ///
    /// let oversized = Queue::with_config(Config::new().capacity(usize::MAX / 2));
    /// assert!(matches!(oversized, Err(Error::AllocFailed { .. })));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_config(config: Config) -> Result<Self> {
        let list = List::try_with_capacity(config.capacity).map_err(|err| {
            tracing::debug!(capacity = config.capacity, "queue arena allocation failed");
            err
        })?;
        Ok(Self { list, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the queue and every element it owns.
    ///
    /// Dropping the queue does the same; this is the explicit form.
    pub fn free(self) {
        tracing::trace!(len = self.size(), "freeing queue");
        drop(self);
    }

    /// Release every element, keeping the queue usable.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.size(), "clearing queue");
        self.list.clear();
    }

    /// The underlying list.
    pub fn as_list(&self) -> &List<String> {
        &self.list
    }

    /// Check every structural invariant of the queue. See
    /// [`List::validate`].
    pub fn validate(&self) -> Result<()> {
        self.list.validate()
    }
}

// Insertion and removal
impl Queue {
    /// Insert a copy of `value` at the head.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the copy cannot be allocated; the queue is
    /// left unchanged. Growing the node arena is not covered: if the arena
    /// is full and cannot grow, the allocator aborts the process. Reserve
    /// room up front with the `capacity` setting of [`Config`] to avoid
    /// growth.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let value = duplicate(value)?;
        self.list.push_front(value);
        Ok(())
    }

    /// Insert a copy of `value` at the tail.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the copy cannot be allocated; the queue is
    /// left unchanged. Growing the node arena is not covered: if the arena
    /// is full and cannot grow, the allocator aborts the process. Reserve
    /// room up front with the `capacity` setting of [`Config`] to avoid
    /// growth.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let value = duplicate(value)?;
        self.list.push_back(value);
        Ok(())
    }

    /// Remove the head element, or return `None` if the queue is empty.
    pub fn remove_head(&mut self) -> Option<Element> {
        self.list.pop_front().map(Element::new)
    }

    /// Remove the tail element, or return `None` if the queue is empty.
    pub fn remove_tail(&mut self) -> Option<Element> {
        self.list.pop_back().map(Element::new)
    }

    /// Remove the head element and copy its value into `buf`, see
    /// [`Element::copy_into`].
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] or [`Error::ZeroCapacity`], with the queue left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Error, Queue};
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["alpha", "beta"]);
    /// let mut buf = [0; 8];
    /// assert_eq!(queue.remove_head_into(&mut buf)?.value(), "alpha");
    /// assert_eq!(&buf[..6], b"alpha\0");
    ///
    /// assert_eq!(queue.remove_head_into(&mut []), Err(Error::ZeroCapacity));
    /// assert_eq!(queue.size(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Result<Element> {
        self.remove_into(buf, List::pop_front)
    }

    /// Remove the tail element and copy its value into `buf`, see
    /// [`Element::copy_into`].
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] or [`Error::ZeroCapacity`], with the queue left
    /// unchanged.
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Result<Element> {
        self.remove_into(buf, List::pop_back)
    }

    fn remove_into(&mut self, buf: &mut [u8], pop: fn(&mut List<String>) -> Option<String>) -> Result<Element> {
        if self.is_empty() {
            tracing::debug!("remove from an empty queue");
            return Err(Error::Empty);
        }
        if buf.is_empty() {
            tracing::debug!("remove into a zero-capacity buffer");
            return Err(Error::ZeroCapacity);
        }
        let element = pop(&mut self.list).map(Element::new).ok_or(Error::Empty)?;
        element.copy_into(buf)?;
        Ok(element)
    }

    /// The number of elements, in *O*(1) time.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn front(&self) -> Option<&str> {
        self.list.front().map(String::as_str)
    }

    pub fn back(&self) -> Option<&str> {
        self.list.back().map(String::as_str)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.list.iter().map(String::as_str)
    }
}

// Reordering
impl Queue {
    /// Delete the middle element: index ⌊*n* / 2⌋, which is the later of
    /// the two centers when the size is even.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to delete.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
    /// queue.delete_mid()?;
    /// assert!(queue.iter().eq(["1", "2", "4"]));
    /// # Ok::<(), cyclic_queue::Error>(())
    /// ```
    pub fn delete_mid(&mut self) -> Result<()> {
        match self.list.remove_middle() {
            Some(_) => Ok(()),
            None => {
                tracing::debug!("delete_mid on an empty queue");
                Err(Error::Empty)
            }
        }
    }

    /// Delete every value that appears in a run of two or more adjacent
    /// equal values, keeping only values that are distinct from both
    /// neighbors. Meant for sorted queues.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c"]);
    /// queue.delete_dup()?;
    /// assert!(queue.iter().eq(["b"]));
    /// # Ok::<(), cyclic_queue::Error>(())
    /// ```
    pub fn delete_dup(&mut self) -> Result<()> {
        if self.is_empty() {
            tracing::debug!("delete_dup on an empty queue");
            return Err(Error::Empty);
        }
        let removed = self.list.dedup_runs_by(|a, b| a == b);
        tracing::trace!(removed, len = self.size(), "deleted duplicate runs");
        Ok(())
    }

    /// Swap every two adjacent elements; an odd tail element stays.
    pub fn swap(&mut self) {
        self.list.swap_pairs();
    }

    /// Reverse the queue in place.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverse every consecutive group of `k` elements from the head; a
    /// final short group keeps its order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGroupSize`] if `k` is 0; the queue is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.reverse_k(2)?;
    /// assert!(queue.iter().eq(["2", "1", "4", "3", "5"]));
    /// # Ok::<(), cyclic_queue::Error>(())
    /// ```
    pub fn reverse_k(&mut self, k: usize) -> Result<()> {
        self.list.reverse_groups(k).map_err(|err| {
            tracing::debug!(k, "rejected group size");
            err
        })?;
        tracing::trace!(k, groups = self.size() / k, "reversed groups");
        Ok(())
    }
}

// Ordering
impl Queue {
    /// Sort the queue in ascending order. The sort is stable.
    pub fn sort(&mut self) {
        let collation = self.config.collation;
        self.sort_with(|a, b| collation.compare(a, b));
    }

    /// Sort the queue in descending order. The sort is stable: equal values
    /// keep their original order.
    pub fn sort_descending(&mut self) {
        let collation = self.config.collation;
        self.sort_with(|a, b| collation.compare(b, a));
    }

    fn sort_with<F>(&mut self, compare: F)
    where
        F: FnMut(&String, &String) -> std::cmp::Ordering,
    {
        let strategy = self.config.sort_strategy;
        tracing::trace!(len = self.size(), ?strategy, "sorting queue");
        self.list.sort_with(strategy, compare);
    }

    /// Delete every element that has a strictly greater element somewhere
    /// after it, leaving a non-increasing queue. Returns the new size.
    ///
    /// "Greater" follows the queue's [`Collation`](crate::Collation). Under
    /// the default [`Lexical`](crate::Collation::Lexical) collation, strings
    /// compare byte-wise, so `"13" < "8"`; use
    /// [`Numeric`](crate::Collation::Numeric) to compare integers by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Collation, Config, Queue};
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["5", "2", "13", "3", "8"]);
    /// assert_eq!(queue.descend(), 1);
    /// assert!(queue.iter().eq(["8"]));
    ///
    /// let mut queue = Queue::with_config(Config::new().collation(Collation::Numeric))?;
    /// queue.extend(["5", "2", "13", "3", "8"]);
    /// assert_eq!(queue.descend(), 2);
    /// assert!(queue.iter().eq(["13", "8"]));
    /// # Ok::<(), cyclic_queue::Error>(())
    /// ```
    pub fn descend(&mut self) -> usize {
        let collation = self.config.collation;
        let before = self.size();
        let len = self.list.retain_suffix_max_by(|a, b| collation.compare(a, b));
        tracing::trace!(removed = before - len, len, "filtered to suffix maxima");
        len
    }

    /// Delete every element that has a strictly smaller element somewhere
    /// after it, leaving a non-decreasing queue. Returns the new size.
    pub fn ascend(&mut self) -> usize {
        let collation = self.config.collation;
        let before = self.size();
        let len = self.list.retain_suffix_max_by(|a, b| collation.compare(b, a));
        tracing::trace!(removed = before - len, len, "filtered to suffix minima");
        len
    }

    /// Merge the sorted queue `other` into this sorted queue, leaving `other`
    /// empty. On equal values, elements of `self` come first.
    pub fn merge(&mut self, other: &mut Queue) {
        let collation = self.config.collation;
        tracing::trace!(len = self.size(), other = other.size(), "merging queues");
        self.list.merge_by(&mut other.list, |a, b| collation.compare(a, b));
    }

    /// Merge every sorted queue of `queues` into `queues[0]`, leaving the
    /// others empty, and return the resulting size (0 for no queues).
    ///
    /// Adjacent queues are merged pairwise in rounds, so the cost is
    /// *O*(*N* log *k*) for *N* elements over *k* queues. Equal values keep
    /// the order of the queues they came from. The collation of `queues[0]`
    /// is used throughout.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queues = [
    ///     Queue::from_iter(["a", "d"]),
    ///     Queue::from_iter(["b", "e"]),
    ///     Queue::from_iter(["c"]),
    /// ];
    /// assert_eq!(Queue::merge_k(&mut queues), 5);
    /// assert!(queues[0].iter().eq(["a", "b", "c", "d", "e"]));
    /// assert!(queues[1].is_empty() && queues[2].is_empty());
    /// ```
    pub fn merge_k(queues: &mut [Queue]) -> usize {
        let collation = match queues.first() {
            Some(first) => first.config.collation,
            None => return 0,
        };
        let mut step = 1;
        while step < queues.len() {
            let mut i = 0;
            while i + step < queues.len() {
                let (left, right) = queues.split_at_mut(i + step);
                left[i]
                    .list
                    .merge_by(&mut right[0].list, |a, b| collation.compare(a, b));
                i += 2 * step;
            }
            step *= 2;
        }
        let len = queues[0].size();
        tracing::trace!(queues = queues.len(), len, "merged queues");
        len
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Clone for Queue {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            config: self.config,
        }
    }
}

/// Queues are equal when they hold the same values in the same order,
/// whatever their configuration.
impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl Eq for Queue {}

impl Hash for Queue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.list.hash(state);
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

/// Appends copies of the values at the tail. Unlike
/// [`Queue::insert_tail`], allocation failure aborts.
impl<'a> Extend<&'a str> for Queue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.list.extend(iter.into_iter().map(str::to_owned));
    }
}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Collation, SortStrategy};

    fn queue_eq(queue: &Queue, expected: &[&str]) {
        assert_eq!(queue.iter().collect::<Vec<_>>(), expected);
        assert_eq!(queue.size(), expected.len());
        assert_eq!(queue.validate(), Ok(()));
    }

    #[test]
    fn insert_and_remove_round_trip() {
        let mut queue = Queue::new();
        queue.insert_tail("x").unwrap();
        queue.insert_tail("a").unwrap();
        assert_eq!(queue.remove_tail().map(Element::into_value), Some("a".to_owned()));
        queue_eq(&queue, &["x"]);

        queue.insert_head("h").unwrap();
        queue_eq(&queue, &["h", "x"]);
        assert_eq!(queue.front(), Some("h"));
        assert_eq!(queue.back(), Some("x"));
        assert_eq!(queue.remove_head().unwrap().value(), "h");
        assert_eq!(queue.remove_head().unwrap().value(), "x");
        assert_eq!(queue.remove_head(), None);
        assert_eq!(queue.remove_tail(), None);
        queue_eq(&queue, &[]);
    }

    #[test]
    fn inserted_values_are_copies() {
        let mut source = String::from("abc");
        let mut queue = Queue::new();
        queue.insert_tail(&source).unwrap();
        source.push('d');
        queue_eq(&queue, &["abc"]);
    }

    #[test]
    fn remove_into_truncates() {
        let mut queue = Queue::from_iter(["abcdef", "xy"]);
        let mut buf = [0xffu8; 4];
        let element = queue.remove_head_into(&mut buf).unwrap();
        assert_eq!(element.value(), "abcdef");
        assert_eq!(&buf, b"abc\0");

        let mut buf = [0xffu8; 4];
        assert_eq!(queue.remove_tail_into(&mut buf).unwrap().value(), "xy");
        assert_eq!(&buf[..3], b"xy\0");
        assert_eq!(buf[3], 0xff);

        let mut buf = [0u8; 1];
        queue.insert_tail("q").unwrap();
        queue.remove_tail_into(&mut buf).unwrap();
        assert_eq!(buf, [0]);
    }

    #[test]
    fn remove_into_failures_leave_queue_unchanged() {
        let mut queue = Queue::new();
        assert_eq!(queue.remove_head_into(&mut [0; 4]), Err(Error::Empty));
        assert_eq!(queue.remove_tail_into(&mut []), Err(Error::Empty));

        queue.insert_tail("a").unwrap();
        assert_eq!(queue.remove_head_into(&mut []), Err(Error::ZeroCapacity));
        assert_eq!(queue.remove_tail_into(&mut []), Err(Error::ZeroCapacity));
        queue_eq(&queue, &["a"]);
    }

    #[test]
    fn delete_mid_and_dup() {
        let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
        queue.delete_mid().unwrap();
        queue_eq(&queue, &["1", "2", "4"]);
        queue.delete_mid().unwrap();
        queue_eq(&queue, &["1", "4"]);

        let mut queue = Queue::from_iter(["a", "a", "b", "c", "c"]);
        queue.delete_dup().unwrap();
        queue_eq(&queue, &["b"]);

        let mut queue = Queue::new();
        assert_eq!(queue.delete_mid(), Err(Error::Empty));
        assert_eq!(queue.delete_dup(), Err(Error::Empty));
    }

    #[test]
    fn swap_and_reverse() {
        let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
        queue.swap();
        queue_eq(&queue, &["2", "1", "4", "3", "5"]);
        queue.reverse();
        queue_eq(&queue, &["5", "3", "4", "1", "2"]);

        let mut queue = Queue::new();
        queue.swap();
        queue.reverse();
        queue_eq(&queue, &[]);
    }

    #[test]
    fn reverse_k_rejects_zero() {
        let mut queue = Queue::from_iter(["1", "2"]);
        assert_eq!(queue.reverse_k(0), Err(Error::InvalidGroupSize(0)));
        queue_eq(&queue, &["1", "2"]);
    }

    #[test]
    fn sort_uses_collation() {
        let values = ["10", "9", "b", "100", "a"];

        let mut queue = Queue::from_iter(values);
        queue.sort();
        queue_eq(&queue, &["10", "100", "9", "a", "b"]);

        let config = Config::new().collation(Collation::Numeric);
        let mut queue = Queue::with_config(config).unwrap();
        queue.extend(values);
        queue.sort();
        queue_eq(&queue, &["9", "10", "100", "a", "b"]);
        queue.sort_descending();
        queue_eq(&queue, &["b", "a", "100", "10", "9"]);
    }

    #[test]
    fn sort_strategies_agree() {
        let values = ["d", "b", "a", "c", "b", "e", "a"];
        for strategy in [SortStrategy::Recursive, SortStrategy::BottomUp] {
            let mut queue = Queue::with_config(Config::new().sort_strategy(strategy)).unwrap();
            queue.extend(values);
            queue.sort();
            queue_eq(&queue, &["a", "a", "b", "b", "c", "d", "e"]);
        }
    }

    #[test]
    fn oversized_capacity_is_reported() {
        let config = Config::new().capacity(usize::MAX / 2);
        assert!(matches!(Queue::with_config(config), Err(Error::AllocFailed { .. })));

        let mut queue = Queue::with_config(Config::new().capacity(2)).unwrap();
        assert_eq!(queue.config().capacity, 2);
        queue.insert_tail("a").unwrap();
        queue_eq(&queue, &["a"]);
    }

    #[test]
    fn inserts_grow_past_capacity() {
        let mut queue = Queue::with_config(Config::new().capacity(1)).unwrap();
        let values = Vec::from_iter((0..100).map(|n| n.to_string()));
        for value in &values {
            queue.insert_tail(value).unwrap();
        }
        queue.insert_head("h").unwrap();
        assert_eq!(queue.size(), 101);
        assert_eq!(queue.front(), Some("h"));
        assert!(queue.iter().skip(1).eq(values.iter().map(String::as_str)));
        assert_eq!(queue.validate(), Ok(()));
    }

    #[test]
    fn descend_and_ascend() {
        let mut queue = Queue::from_iter(["5", "2", "13", "3", "8"]);
        assert_eq!(queue.descend(), 1);
        queue_eq(&queue, &["8"]);

        let mut queue = Queue::from_iter(["1", "3", "2", "2", "5"]);
        assert_eq!(queue.ascend(), 4);
        queue_eq(&queue, &["1", "2", "2", "5"]);

        let mut queue = Queue::new();
        assert_eq!(queue.descend(), 0);
        assert_eq!(queue.ascend(), 0);
    }

    #[test]
    fn merge_two_queues() {
        let mut queue = Queue::from_iter(["a", "c", "e"]);
        let mut other = Queue::from_iter(["b", "c", "f"]);
        queue.merge(&mut other);
        queue_eq(&queue, &["a", "b", "c", "c", "e", "f"]);
        queue_eq(&other, &[]);
    }

    #[test]
    fn merge_k_edge_cases() {
        assert_eq!(Queue::merge_k(&mut []), 0);

        let mut queues = [Queue::from_iter(["a"])];
        assert_eq!(Queue::merge_k(&mut queues), 1);

        let mut queues = [Queue::new(), Queue::from_iter(["b"]), Queue::new()];
        assert_eq!(Queue::merge_k(&mut queues), 1);
        queue_eq(&queues[0], &["b"]);
        queue_eq(&queues[1], &[]);
    }

    #[test]
    fn clear_and_free() {
        let mut queue = Queue::from_iter(["a", "b"]);
        queue.clear();
        queue_eq(&queue, &[]);
        queue.insert_tail("c").unwrap();
        queue_eq(&queue, &["c"]);
        queue.free();
    }

    #[test]
    fn clone_and_compare() {
        let queue = Queue::from_iter(["a", "b"]);
        let mut clone = queue.clone();
        assert_eq!(queue, clone);
        clone.reverse();
        assert_ne!(queue, clone);
        assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn element_conversions() {
        let mut queue = Queue::from_iter(["hi"]);
        let element = queue.remove_head().unwrap();
        assert_eq!(element.to_string(), "hi");
        assert_eq!(format!("{:?}", element), r#""hi""#);
        assert_eq!(element.as_ref(), "hi");
        assert_eq!(String::from(element), "hi");
    }
}
