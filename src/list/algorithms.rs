use crate::config::SortStrategy;
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod filter;
mod merge;
mod reorder;
mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut cursor_mut = self.cursor_start_mut();
        for elem_other in other {
            match cursor_mut.current_mut() {
                None => cursor_mut.insert(elem_other.clone()),
                Some(elem) => {
                    elem.clone_from(elem_other);
                    cursor_mut.move_next_cyclic();
                }
            }
        }
        // Drop the surplus of a longer `self`.
        while cursor_mut.remove().is_some() {}
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list: List<u32> = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sorts the list in place.
    ///
    /// This sort is stable (i.e., does not reorder equal elements) and
    /// *O*(*n* \* log(*n*)) worst-case. Nodes are relinked, never moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([-5, 4, 1, -3, 2]);
    ///
    /// list.sort();
    /// assert!(list.into_iter().eq([-5, -3, 1, 2, 4]));
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the list in place with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements) and
    /// *O*(*n* \* log(*n*)) worst-case.
    ///
    /// The comparator function must define a total ordering for the elements
    /// in the list. If the ordering is not total, the order of the elements
    /// is unspecified, but the list stays well-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 4, 1, 3, 2]);
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert!(list.iter().eq(&[1, 2, 3, 4, 5]));
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert!(list.iter().eq(&[5, 4, 3, 2, 1]));
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with(SortStrategy::default(), compare);
    }

    /// Sorts the list in place with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements) and
    /// *O*(*m* \* *n* \* log(*n*)) worst-case, where the key function is
    /// *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// list.sort_by_key(|k| k.abs());
    /// assert!(list.into_iter().eq([1, 2, -3, 4, -5]));
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Sorts the list in place with a comparator function, using the given
    /// merge strategy.
    ///
    /// Both strategies are stable and give the same result; see
    /// [`SortStrategy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{List, SortStrategy};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    /// list.sort_with(SortStrategy::Recursive, |a, b| a.0.cmp(&b.0));
    /// assert!(list.iter().eq(&[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]));
    /// ```
    pub fn sort_with<F>(&mut self, strategy: SortStrategy, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        match strategy {
            SortStrategy::Recursive => sort::merge_sort(self, &mut less),
            SortStrategy::BottomUp => sort::list_sort(self, &mut less),
        }
    }
}
