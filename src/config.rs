//! Queue configuration.

use std::cmp::Ordering;

/// Which merge sort [`Queue::sort`](crate::Queue::sort) runs.
///
/// Both are stable and produce identical output; they differ in how the
/// merges are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Top-down: split at the structural middle, sort both halves, merge.
    Recursive,
    /// Iterative run merging over a pending stack of power-of-two runs.
    /// Never recurses and always merges in the same order.
    #[default]
    BottomUp,
}

/// How queue values are ordered by sorting, filtering and merging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Collation {
    /// Byte-wise lexicographic order (`"13" < "8"`).
    #[default]
    Lexical,
    /// Values that parse as integers compare by numeric value and sort
    /// before all other values. Everything else falls back to byte order.
    ///
    /// Numerically equal values with different spellings (`"7"`, `"07"`)
    /// are ordered byte-wise, so two values compare equal only if their
    /// bytes are equal.
    Numeric,
}

impl Collation {
    /// Compare two values under this collation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Collation;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Collation::Lexical.compare("13", "8"), Ordering::Less);
    /// assert_eq!(Collation::Numeric.compare("13", "8"), Ordering::Greater);
    /// assert_eq!(Collation::Numeric.compare("-2", "abc"), Ordering::Less);
    /// ```
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Lexical => a.as_bytes().cmp(b.as_bytes()),
            Collation::Numeric => match (a.parse::<i128>(), b.parse::<i128>()) {
                (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.as_bytes().cmp(b.as_bytes())),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.as_bytes().cmp(b.as_bytes()),
            },
        }
    }
}

/// Construction-time settings of a [`Queue`](crate::Queue).
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Collation, Config, Queue, SortStrategy};
///
/// let config = Config::new()
///     .sort_strategy(SortStrategy::Recursive)
///     .collation(Collation::Numeric)
///     .capacity(16);
/// let queue = Queue::with_config(config)?;
/// assert_eq!(queue.config().collation, Collation::Numeric);
/// # Ok::<(), cyclic_queue::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    pub sort_strategy: SortStrategy,
    pub collation: Collation,
    /// Number of elements the node arena is pre-sized for.
    pub capacity: usize,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            sort_strategy: SortStrategy::BottomUp,
            collation: Collation::Lexical,
            capacity: 0,
        }
    }

    pub const fn sort_strategy(mut self, sort_strategy: SortStrategy) -> Self {
        self.sort_strategy = sort_strategy;
        self
    }

    pub const fn collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        assert_eq!(Config::default(), Config::new());
    }

    #[test]
    fn numeric_collation_is_total() {
        let values = ["10", "9", "09", "abc", "-1", "", "+3", "3"];
        for a in values {
            for b in values {
                let ab = Collation::Numeric.compare(a, b);
                let ba = Collation::Numeric.compare(b, a);
                assert_eq!(ab, ba.reverse(), "{:?} vs {:?}", a, b);
                assert_eq!(ab == Ordering::Equal, a == b, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn numeric_collation_orders_numbers_by_value() {
        let mut values = vec!["100", "abc", "9", "-4", "09", "b"];
        values.sort_by(|a, b| Collation::Numeric.compare(a, b));
        assert_eq!(values, vec!["-4", "09", "9", "100", "abc", "b"]);
    }
}
