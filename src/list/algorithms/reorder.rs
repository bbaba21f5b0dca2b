//! Relinking algorithms that reorder a list without comparing elements.

use crate::error::{Error, Result};
use crate::list::{DetachedNodes, List, GHOST};

impl<T> List<T> {
    /// Swap every two adjacent elements: positions (0,1), (2,3), ... are
    /// exchanged, and a trailing odd element stays in place.
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
    /// let mut list = List::from_iter(1..=5);
    /// list.swap_pairs();
    /// assert!(list.into_iter().eq([2, 1, 4, 3, 5]));
    /// ```
    pub fn swap_pairs(&mut self) {
        let mut first = self.front_node();
        while first != GHOST {
            let second = self.next_of(first);
            if second == GHOST {
                break;
            }
            let after = self.next_of(second);
            // [.. first second after ..] -> [.. second first after ..]
            self.move_node(first, after);
            first = after;
        }
    }

    /// Reverse the order of the elements.
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
    /// let mut list = List::from_iter(['a', 'b', 'c']);
    /// list.reverse();
    /// assert!(list.into_iter().eq(['c', 'b', 'a']));
    /// ```
    pub fn reverse(&mut self) {
        let mut node = GHOST;
        loop {
            let link = self.link_mut(node);
            std::mem::swap(&mut link.next, &mut link.prev);
            // `prev` holds the old `next` now.
            node = link.prev;
            if node == GHOST {
                break;
            }
        }
    }

    /// Reverse every consecutive group of `k` elements, counting from the
    /// front. A final group shorter than `k` keeps its order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGroupSize`] if `k` is 0; the list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_groups(3).unwrap();
    /// assert!(list.iter().eq(&[3, 2, 1, 6, 5, 4, 7, 8]));
    ///
    /// assert_eq!(list.reverse_groups(0), Err(Error::InvalidGroupSize(0)));
    /// ```
    pub fn reverse_groups(&mut self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(Error::InvalidGroupSize(k));
        }
        if k == 1 || self.len() < k {
            return Ok(());
        }
        let mut reversed: Option<DetachedNodes> = None;
        while self.len() >= k {
            let front = self.front_node();
            let mut back = front;
            for _ in 1..k {
                back = self.next_of(back);
            }
            let mut group = self.detach_nodes(front, back, k);
            self.reverse_detached(&mut group);
            reversed = Some(match reversed {
                None => group,
                Some(done) => self.join_detached(done, group),
            });
        }
        if let Some(reversed) = reversed {
            let front = self.front_node();
            self.attach_nodes(GHOST, front, reversed);
        }
        Ok(())
    }
}
