use crate::error::{Error, Result};
use crate::list::{List, NodeId};
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor:
/// the *n* element nodes and the ghost node of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #]
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #]
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Create a cursor in the end and move forward: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// // Move cursor forward, cyclically: [|A B C D #]
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: NodeId,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            list: self.list,
        }
    }
}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next_cyclic();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different lists.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// Removing the current element moves the cursor to the next one, so a
/// traversal can delete nodes as it goes.
///
/// # Examples
///
/// ```compile_fail
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: NodeId,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NodeId {
                self.list.next_of(self.current)
            }
            pub(crate) fn prev_node(&self) -> NodeId {
                self.list.prev_of(self.current)
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use cyclic_queue::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_next_cyclic();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, unless it is at the
            /// ghost node.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Errors
            ///
            /// [`Error::GhostBoundary`] if the cursor is at the ghost node.
            ///
            /// # Examples
            ///
            /// ```
            /// use cyclic_queue::{Error, List};
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_start();
            /// assert_eq!(cursor.move_next(), Ok(()));
            /// assert_eq!(cursor.move_next(), Ok(()));
            /// assert_eq!(cursor.move_next(), Err(Error::GhostBoundary));
            /// ```
            pub fn move_next(&mut self) -> Result<()> {
                if self.is_empty() || self.is_ghost_node() {
                    return Err(Error::GhostBoundary);
                }
                self.move_next_cyclic();
                Ok(())
            }

            /// Move the cursor to the previous position, unless it is at
            /// the first node.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Errors
            ///
            /// [`Error::GhostBoundary`] if the cursor is at the first node
            /// (or the list is empty).
            pub fn move_prev(&mut self) -> Result<()> {
                if self.is_empty() || self.is_front_node() {
                    return Err(Error::GhostBoundary);
                }
                self.move_prev_cyclic();
                Ok(())
            }

            /// Move the cursor forward by `steps`, stopping at the ghost node.
            ///
            /// On failure, returns the number of steps that were taken.
            ///
            /// This operation should compute in *O*(*steps*) time.
            pub fn seek_forward(&mut self, steps: usize) -> std::result::Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move the cursor backward by `steps`, stopping at the first node.
            ///
            /// On failure, returns the number of steps that were taken.
            pub fn seek_backward(&mut self, steps: usize) -> std::result::Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use cyclic_queue::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the ghost node
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_to_start();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            #[inline]
            pub fn move_to_start(&mut self) {
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the ghost node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.current = self.list.ghost_node();
            }

            /// Return an immutable reference of the element under the cursor,
            /// or return `None` if it is located at the ghost node.
            pub fn current(&self) -> Option<&T> {
                if self.is_ghost_node() {
                    return None;
                }
                Some(self.list.element(self.current))
            }

            /// Return an immutable reference of the element before the cursor,
            /// or return `None` if it is located at the first node.
            ///
            /// # Examples
            ///
            /// ```
            /// use cyclic_queue::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            /// assert_eq!(cursor.previous(), None);
            /// cursor.move_next_cyclic();
            /// assert_eq!(cursor.previous(), Some(&1));
            /// ```
            pub fn previous(&self) -> Option<&T> {
                if self.is_front_node() {
                    return None;
                }
                Some(self.list.element(self.prev_node()))
            }

            /// Return an immutable reference of the element after the cursor,
            /// or return `None` if the next node is the ghost node.
            pub fn peek_next(&self) -> Option<&T> {
                let next = self.next_node();
                if next == self.list.ghost_node() {
                    return None;
                }
                Some(self.list.element(next))
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("current", &self.current())
                    .field("list", &self.list)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NodeId) -> Self {
        Self { current, list }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NodeId) -> Self {
        Self { current, list }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a mutable reference of the element under the cursor, or return
    /// `None` if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// while let Some(x) = cursor.current_mut() {
    ///     *x *= 10;
    ///     cursor.move_next_cyclic();
    /// }
    /// assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost_node() {
            return None;
        }
        Some(self.list.element_mut(self.current))
    }

    /// Borrow the underlying list immutably while the cursor lives.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.remove();
    /// assert_eq!(cursor.view().len(), 2);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Convert into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Insert a new element before the cursor; the cursor stays on its
    /// current node.
    ///
    /// This operation should compute in *O*(1) amortized time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.move_next_cyclic();
    /// cursor.insert(2);
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = self.list.new_detached(item);
        let prev = self.prev_node();
        self.list.attach_node(prev, self.current, node);
    }

    /// Remove the element under the cursor and move to the next node.
    /// Returns `None` if the cursor is at the ghost node.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// let mut cursor = list.cursor_start_mut();
    /// while let Some(&x) = cursor.current() {
    ///     if x % 2 == 0 {
    ///         cursor.remove();
    ///     } else {
    ///         cursor.move_next_cyclic();
    ///     }
    /// }
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        let item = self.list.detach_node(self.current);
        self.current = next;
        Some(item)
    }

    /// Remove the element before the cursor. The cursor stays on its
    /// current node. Returns `None` if the cursor is at the first node.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok()?;
        self.remove()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_walks_both_ways() {
        let list = List::from_iter(0..4);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.move_prev(), Err(Error::GhostBoundary));
        assert_eq!(cursor.seek_forward(3), Ok(()));
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.seek_forward(5), Err(1));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.seek_backward(5), Err(4));
        assert_eq!(cursor.current(), Some(&0));
        cursor.move_prev_cyclic();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), Some(&3));
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.is_empty());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.move_next(), Err(Error::GhostBoundary));
        assert_eq!(cursor.move_prev(), Err(Error::GhostBoundary));
        cursor.move_next_cyclic();
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.backspace(), None);
        cursor.insert(1);
        assert_eq!(cursor.previous(), Some(&1));
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn cursor_mut_edits() {
        let mut list = List::from_iter(1..=5);
        let mut cursor = list.cursor_start_mut();
        cursor.seek_forward(2).unwrap();
        assert_eq!(cursor.backspace(), Some(2));
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.current(), Some(&4));
        cursor.move_to_end();
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.backspace(), Some(5));
        cursor.insert(6);
        let cursor = cursor.into_cursor();
        assert_eq!(cursor.previous(), Some(&6));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 4, 6]);
        assert_eq!(list.validate(), Ok(()));
    }
}
