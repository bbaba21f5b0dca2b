use crate::list::algorithms::sort::merge_range;
use crate::list::List;
use std::cmp::Ordering;

impl<T> List<T> {
    /// Merge the sorted list `other` into this sorted list, leaving `other`
    /// empty.
    ///
    /// The merge is stable: on ties, elements of `self` come before those of
    /// `other`, and each side keeps its own order. If either side is not
    /// sorted by `compare`, the result is some interleaving of both.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time. The elements of
    /// `other` are moved into the arena of `self` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([(1, 'a'), (3, 'a'), (5, 'a')]);
    /// let mut other = List::from_iter([(2, 'b'), (3, 'b'), (6, 'b')]);
    /// list.merge_by(&mut other, |a, b| a.0.cmp(&b.0));
    /// assert!(other.is_empty());
    /// assert!(list.iter().map(|&(n, _)| n).eq([1, 2, 3, 3, 5, 6]));
    /// assert_eq!(list.iter().nth(2), Some(&(3, 'a')));
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut List<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }
        let back = self.back_node();
        self.append(other);
        let (start, mid, end) = (self.front_node(), self.next_of(back), self.ghost_node());
        let mut less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        merge_range(self, start, mid, end, &mut less);
    }
}
