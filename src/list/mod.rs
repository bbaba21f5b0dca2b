use std::fmt::{Debug, Formatter};

use slab::Slab;

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::iterator::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// Handle of a node: its key in the node arena.
pub(crate) type NodeId = usize;

/// Handle of the ghost node.
///
/// Slab keys are dense indices, so `usize::MAX` is never handed out to a
/// real node.
pub(crate) const GHOST: NodeId = usize::MAX;

/// The `List` is a doubly-linked list with arena-owned nodes, implemented as
/// a cyclic list. It allows inserting, removing and relinking elements at any
/// known position in constant time. In compromise, accessing or mutating
/// elements at any position take *O*(*n*) time.
///
/// The `List` contains:
/// - the links of the ghost node, which has no payload and is addressed by a
///   reserved handle;
/// - a slab of nodes, each holding its `next` and `prev` handles and an
///   element;
/// - a length field `len`, the number of nodes reachable from the ghost node.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: Link,
    nodes: Slab<Node<T>>,
    /// the length of the list
    len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

pub(crate) struct Node<T> {
    pub(crate) link: Link,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used as a temporary sub-list while
/// reordering.
///
/// The nodes still live in the arena of the list they were detached from,
/// and must be attached back to that same list. Reading `front.prev` and
/// `back.next` of a detached fragment is meaningless.
#[derive(Debug)]
pub(crate) struct DetachedNodes {
    pub(crate) front: NodeId,
    pub(crate) back: NodeId,
    pub(crate) len: usize,
}

impl Link {
    const fn ghost() -> Self {
        Self {
            next: GHOST,
            prev: GHOST,
        }
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NodeId {
        GHOST
    }
    pub(crate) fn front_node(&self) -> NodeId {
        self.ghost.next
    }
    pub(crate) fn back_node(&self) -> NodeId {
        self.ghost.prev
    }

    pub(crate) fn link(&self, node: NodeId) -> &Link {
        if node == GHOST {
            &self.ghost
        } else {
            &self.nodes[node].link
        }
    }
    pub(crate) fn link_mut(&mut self, node: NodeId) -> &mut Link {
        if node == GHOST {
            &mut self.ghost
        } else {
            &mut self.nodes[node].link
        }
    }
    pub(crate) fn next_of(&self, node: NodeId) -> NodeId {
        self.link(node).next
    }
    pub(crate) fn prev_of(&self, node: NodeId) -> NodeId {
        self.link(node).prev
    }
    pub(crate) fn set_next(&mut self, node: NodeId, next: NodeId) {
        self.link_mut(node).next = next;
    }
    pub(crate) fn set_prev(&mut self, node: NodeId, prev: NodeId) {
        self.link_mut(node).prev = prev;
    }

    /// The element of a non-ghost node.
    pub(crate) fn element(&self, node: NodeId) -> &T {
        &self.nodes[node].element
    }
    pub(crate) fn element_mut(&mut self, node: NodeId) -> &mut T {
        &mut self.nodes[node].element
    }

    pub(crate) fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.set_next(prev, next);
        self.set_prev(next, prev);
    }

    /// Allocate a node for `element` in the arena without linking it.
    ///
    /// The node must be attached with [`List::attach_node`] before the list
    /// is observed again, or the arena and `len` disagree.
    pub(crate) fn new_detached(&mut self, element: T) -> NodeId {
        let entry = self.nodes.vacant_entry();
        let node = entry.key();
        debug_assert_ne!(node, GHOST);
        entry.insert(Node {
            link: Link {
                next: node,
                prev: node,
            },
            element,
        });
        node
    }

    /// Detach a single node `node` from the list, release its slot, and
    /// return its element.
    ///
    /// `node` must be a non-ghost node of this list.
    pub(crate) fn detach_node(&mut self, node: NodeId) -> T {
        debug_assert_ne!(node, GHOST, "Cannot detach the ghost node");
        let Link { next, prev } = *self.link(node);
        self.connect(prev, next);
        self.len -= 1;
        self.nodes.remove(node).element
    }

    /// Attach a single detached node `node` to the list, between `prev` and
    /// `next`.
    ///
    /// If the `prev` and `next` are not adjacent nodes of this list, this
    /// function call will make the list ill-formed (checked only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(&mut self, prev: NodeId, next: NodeId, node: NodeId) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` of length `len` from the list,
    /// and return the detached nodes.
    ///
    /// `front` must **NOT** be at the right of `back`, and `len` must be the
    /// number of nodes in between, or the list becomes ill-formed.
    pub(crate) fn detach_nodes(&mut self, front: NodeId, back: NodeId, len: usize) -> DetachedNodes {
        self.len -= len;
        let (prev, next) = (self.prev_of(front), self.next_of(back));
        self.connect(prev, next);
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// If the `prev` and `next` are not adjacent nodes of this list, this
    /// function call will make the list ill-formed.
    pub(crate) fn attach_nodes(&mut self, prev: NodeId, next: NodeId, detached: DetachedNodes) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, detached.front);
        self.connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, detached.front);
            self.assert_adjacent(detached.back, next);
        }
    }

    /// Reverse a detached fragment in place, so that its old back becomes its
    /// front.
    pub(crate) fn reverse_detached(&mut self, detached: &mut DetachedNodes) {
        let mut node = detached.front;
        for _ in 0..detached.len {
            let link = self.link_mut(node);
            std::mem::swap(&mut link.next, &mut link.prev);
            // `prev` holds the old `next` now.
            node = link.prev;
        }
        std::mem::swap(&mut detached.front, &mut detached.back);
    }

    /// Concatenate two detached fragments of this list.
    pub(crate) fn join_detached(&mut self, first: DetachedNodes, second: DetachedNodes) -> DetachedNodes {
        self.connect(first.back, second.front);
        DetachedNodes::new(first.front, second.back, first.len + second.len)
    }

    /// Move the nodes `front..=back` so that they sit right before `to`.
    ///
    /// `to` must not be inside `front..=back`. The length is unchanged.
    pub(crate) fn move_nodes(&mut self, front: NodeId, back: NodeId, to: NodeId) {
        let (before, after) = (self.prev_of(front), self.next_of(back));
        self.connect(before, after);
        let to_prev = self.prev_of(to);
        self.connect(to_prev, front);
        self.connect(back, to);
    }

    pub(crate) fn move_node(&mut self, node: NodeId, to: NodeId) {
        self.move_nodes(node, node, to);
    }

    /// Find the structural middle of the non-empty range `start..end`.
    ///
    /// Two cursors walk inward from both ends of the range until they meet
    /// or become adjacent; the back one is the middle. For a range of length
    /// *n* it is the node at offset *n* / 2, i.e. the later of the two
    /// centers when *n* is even.
    pub(crate) fn middle_of(&self, start: NodeId, end: NodeId) -> NodeId {
        let (mut front, mut back) = (start, self.prev_of(end));
        while front != back && self.next_of(front) != back {
            front = self.next_of(front);
            back = self.prev_of(back);
        }
        back
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.next_of(prev), next);
        assert_eq!(self.prev_of(next), prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `List` whose arena can hold `capacity` nodes without
    /// reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the arena size overflows `isize::MAX` bytes. See
    /// [`List::try_with_capacity`] for the fallible form.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ghost: Link::ghost(),
            nodes: Slab::with_capacity(capacity),
            len: 0,
        }
    }

    /// Create an empty `List` whose arena can hold `capacity` nodes, or
    /// report that the arena cannot be allocated.
    ///
    /// # Errors
    ///
    /// [`Error::AllocFailed`] if the arena size overflows or the allocator
    /// refuses it.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::{Error, List};
    ///
    /// let list: List<u32> = List::try_with_capacity(8)?;
    /// assert!(list.is_empty());
    /// assert!(matches!(
    ///     List::<u32>::try_with_capacity(usize::MAX / 2),
    ///     Err(Error::AllocFailed { .. })
    /// ));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        // `Slab` has no fallible reservation. A slab entry is no larger than
        // a node plus a key, so reserve that much up front and release it.
        let mut probe: Vec<(Node<T>, NodeId)> = Vec::new();
        probe.try_reserve_exact(capacity).map_err(|_| Error::AllocFailed {
            len: capacity.saturating_mul(std::mem::size_of::<(Node<T>, NodeId)>()),
        })?;
        drop(probe);
        Ok(Self::with_capacity(capacity))
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns `true` if the `List` holds exactly one element.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.ghost = Link::ghost();
        self.len = 0;
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.element(self.front_node()))
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front_node();
        Some(self.element_mut(front))
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.element(self.back_node()))
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let back = self.back_node();
        Some(self.element_mut(back))
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) amortized time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the "ghost" node if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost_node())
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the "ghost" node if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost_node();
        CursorMut::new(self, ghost)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// After this operation, `other` becomes empty. Since every list owns
    /// its own arena, elements are moved one by one (no element is cloned).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time if `self` is empty, and
    /// *O*(*m*) time otherwise, where *m* is the length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }
        while let Some(elt) = other.pop_front() {
            self.push_back(elt);
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    ///
    /// After this operation, `other` becomes empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list2.prepend(&mut list1);
    ///
    /// let mut iter = list2.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }
        while let Some(elt) = other.pop_back() {
            self.push_front(elt);
        }
    }

    /// Check the structural invariants of the list:
    /// - every `next` link is answered by the matching `prev` link;
    /// - following `next` from the ghost node returns to it after exactly
    ///   `len` nodes;
    /// - the arena holds no node that is unreachable from the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..8);
    /// list.reverse();
    /// assert!(list.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let mut count = 0;
        let mut node = self.ghost_node();
        loop {
            let next = self.next_of(node);
            if next != GHOST && !self.nodes.contains(next) {
                return Err(Error::Corrupted("link to a vacant arena slot"));
            }
            if self.prev_of(next) != node {
                return Err(Error::Corrupted("`next.prev` does not point back"));
            }
            if next == GHOST {
                break;
            }
            count += 1;
            if count > self.nodes.len() {
                return Err(Error::Corrupted("cycle does not return to the ghost node"));
            }
            node = next;
        }
        if count != self.len {
            return Err(Error::Corrupted("tracked length does not match reachable nodes"));
        }
        if self.nodes.len() != self.len {
            return Err(Error::Corrupted("arena holds unreachable nodes"));
        }
        Ok(())
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl DetachedNodes {
    /// `front..=back` must be a valid range of exactly `len` nodes.
    fn new(front: NodeId, back: NodeId, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self { front, back, len }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::{List, GHOST};
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert!(list.is_singular());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert!(!list.is_singular());
    }

    #[test]
    fn list_try_with_capacity() {
        let mut list = List::try_with_capacity(4).unwrap();
        assert!(list.nodes.capacity() >= 4);
        list.extend(0..6);
        list_eq(&list, 0..6);

        let result = List::<String>::try_with_capacity(usize::MAX / 2);
        assert!(matches!(result, Err(Error::AllocFailed { .. })));
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list.pop_front());
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        drop(list);
        let mut dropped = dropped.into_inner();
        dropped.sort_unstable();
        assert_eq!(dropped, vec![1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn list_front_and_back_mut() {
        let mut list = List::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() *= 10;
        *list.back_mut().unwrap() *= 10;
        list_eq(&list, [10, 2, 30]);
        assert_eq!(List::<i32>::new().front_mut(), None);
    }

    #[test]
    fn list_slots_are_reused() {
        let mut list = List::from_iter(0..4);
        list.pop_front();
        list.pop_back();
        list.push_back(7);
        list.push_front(8);
        list_eq(&list, [8, 1, 2, 7]);
        assert_eq!(list.nodes.len(), 4);
    }

    #[test]
    fn list_append_and_prepend() {
        fn check<I1, I2, I3>(list: I1, other: I2, appended: I3)
        where
            I1: IntoIterator<Item = i32> + Clone,
            I2: IntoIterator<Item = i32> + Clone,
            I3: IntoIterator<Item = i32> + Clone,
        {
            let mut first = List::from_iter(list.clone());
            let mut second = List::from_iter(other.clone());
            first.append(&mut second);
            assert!(second.is_empty());
            assert_eq!(second.validate(), Ok(()));
            list_eq(&first, appended.clone());

            let mut first = List::from_iter(list);
            let mut second = List::from_iter(other);
            second.prepend(&mut first);
            assert!(first.is_empty());
            list_eq(&second, appended);
        }
        check(0..5, 5..7, 0..7);
        check(0..5, None, 0..5);
        check(0..1, 1..3, 0..3);
        check(None, 0..2, 0..2);
        check(None, None, None);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        list.clear();
        assert!(list.is_empty());
        list_eq(&list, None);
        list.push_back(1);
        list_eq(&list, [1]);
    }

    #[test]
    fn list_middle_of() {
        for len in 1..10 {
            let list = List::from_iter(0..len);
            let middle = list.middle_of(list.front_node(), GHOST);
            assert_eq!(*list.element(middle), len / 2);
        }
    }

    #[test]
    fn list_detach_and_attach_nodes() {
        let mut list = List::from_iter(0..6);
        let front = list.next_of(list.front_node());
        let back = list.next_of(list.next_of(front));
        let mut detached = list.detach_nodes(front, back, 3);
        assert_eq!(list.len(), 3);
        list.reverse_detached(&mut detached);
        let back = list.back_node();
        list.attach_nodes(back, GHOST, detached);
        list_eq(&list, [0, 4, 5, 3, 2, 1]);
    }

    #[test]
    fn list_validate_detects_corruption() {
        let mut list = List::from_iter(0..4);
        let second = list.next_of(list.front_node());
        list.set_prev(second, GHOST);
        assert!(list.validate().is_err());

        let mut list = List::from_iter(0..4);
        list.len = 3;
        assert!(list.validate().is_err());
    }
}
