//! Algorithms that drop elements by position or by value.

use crate::list::{List, GHOST};
use std::cmp::Ordering;

impl<T> List<T> {
    /// Remove and return the middle element: the one at index ⌊*n* / 2⌋
    /// (0-based), i.e. the later of the two centers when *n* is even.
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, walking inward from
    /// both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=4);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// assert!(list.iter().eq(&[1, 4]));
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let middle = self.middle_of(self.front_node(), GHOST);
        Some(self.detach_node(middle))
    }

    /// Remove every element that belongs to a run of two or more adjacent
    /// elements considered the `same`, including the first of the run.
    /// Elements that occur once in a row are kept. Returns the number of
    /// removed elements.
    ///
    /// Only adjacency matters; on an unsorted list equal elements in
    /// separate runs are handled run by run.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 3, 3, 3, 4, 1]);
    /// assert_eq!(list.dedup_runs_by(|a, b| a == b), 5);
    /// assert!(list.iter().eq(&[2, 4, 1]));
    /// ```
    pub fn dedup_runs_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.cursor_start_mut();
        while let Some(current) = cursor.current() {
            let starts_run = cursor.peek_next().map_or(false, |next| same(current, next));
            if !starts_run {
                cursor.move_next_cyclic();
                continue;
            }
            if let Some(first) = cursor.remove() {
                removed += 1;
                while cursor.current().map_or(false, |next| same(&first, next)) {
                    cursor.remove();
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Keep only the elements that are not less than any element after
    /// them, scanning from the back: an element survives iff `compare`
    /// finds it greater than or equal to the running maximum of the suffix.
    /// Survivors keep their relative order, so the result is non-increasing.
    /// Returns the resulting length.
    ///
    /// Reversing the comparator keeps the non-decreasing suffix minima
    /// instead.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 13, 3, 8]);
    /// assert_eq!(list.retain_suffix_max_by(|a, b| a.cmp(b)), 2);
    /// assert!(list.iter().eq(&[13, 8]));
    ///
    /// let mut list = List::from_iter([1, 3, 2, 2, 5]);
    /// assert_eq!(list.retain_suffix_max_by(|a, b| b.cmp(a)), 4);
    /// assert!(list.iter().eq(&[1, 2, 2, 5]));
    /// ```
    pub fn retain_suffix_max_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return self.len();
        }
        let mut max = self.back_node();
        let mut node = self.prev_of(max);
        while node != GHOST {
            let prev = self.prev_of(node);
            match compare(self.element(node), self.element(max)) {
                Ordering::Less => drop(self.detach_node(node)),
                Ordering::Greater => max = node,
                Ordering::Equal => {}
            }
            node = prev;
        }
        self.len()
    }
}
