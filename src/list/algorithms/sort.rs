//! Stable in-place merge sorts over the node links.
//!
//! Both sorts only relink nodes; elements never move in the arena. They
//! take a strict `less` predicate and only place a right-hand node before a
//! left-hand one when it is strictly less, which keeps equal elements in
//! their original order.

use crate::list::{List, NodeId, GHOST};

/// Top-down merge sort: split at the structural middle, sort both halves,
/// then merge them in place.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let (start, end, len) = (list.front_node(), list.ghost_node(), list.len());
    merge_sort_range(list, start, end, len, less);
}

/// Sort the range `start..end` of length `len`, and return the new start.
fn merge_sort_range<T, F>(list: &mut List<T>, start: NodeId, end: NodeId, len: usize, less: &mut F) -> NodeId
where
    F: FnMut(&T, &T) -> bool,
{
    if len < 2 {
        return start;
    }
    let mid = list.middle_of(start, end);
    let left_len = len / 2;
    // Sorting `start..mid` leaves `mid` in place, and vice versa.
    let start = merge_sort_range(list, start, mid, left_len, less);
    let mid = merge_sort_range(list, mid, end, len - left_len, less);
    merge_range(list, start, mid, end, less)
}

/// Merge two adjacent sorted ranges `start..mid` and `mid..end` in place,
/// and return the new start of the merged range.
pub(crate) fn merge_range<T, F>(list: &mut List<T>, mut start: NodeId, mid: NodeId, end: NodeId, less: &mut F) -> NodeId
where
    F: FnMut(&T, &T) -> bool,
{
    if start == mid || mid == end {
        return start;
    }
    // This algorithm first logically partitions the range into
    // two sub-range, both of which are internal sorted:
    // - merged range: `start..mid`,
    // - unmerged range: `mid..end`.
    //
    // Then merge the nodes in the unmerged range run by run
    // into the merged range.
    let (mut merged, merged_back, mut to_merge) = (start, list.prev_of(mid), mid);
    // If the back of merged range <= the front of unmerged range,
    // it is fully sorted, the algorithm stops here.
    while to_merge != end && less(list.element(to_merge), list.element(merged_back)) {
        // Find a position of `merged` in the merged range,
        // where the element of the current node to merge < `*merged`.
        while merged != to_merge && !less(list.element(to_merge), list.element(merged)) {
            merged = list.next_of(merged);
        }
        if merged == to_merge {
            break;
        }

        // Find a sub-range `to_merge..next_to_merge` in the unmerged range,
        // where all the element in it is < `*merged`.
        let mut next_to_merge = list.next_of(to_merge);
        while next_to_merge != end && less(list.element(next_to_merge), list.element(merged)) {
            next_to_merge = list.next_of(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        // Move the sub-range `to_merge..next_to_merge` to the
        // node before `merged`.
        let to_merge_back = list.prev_of(next_to_merge);
        list.move_nodes(to_merge, to_merge_back, merged);
        to_merge = next_to_merge;
    }
    start
}

/// Terminator of the singly-linked chains used by [`list_sort`].
///
/// Chains are linked through `next` only, and end where `next` is the ghost
/// node. The ghost links themselves are stale until the final merge.
const NIL: NodeId = GHOST;

/// Bottom-up merge sort.
///
/// Elements are pushed one by one onto a stack of pending sorted runs,
/// linked through their `prev` fields. Every run has a power-of-two length,
/// and two runs of equal size *2^k* are merged as soon as a third run of
/// that size would follow, so pending runs are at worst 2:1 unbalanced.
///
/// The number of elements pushed so far, `count`, encodes the state: bit
/// *k* set means there is a pending run of size *2^k*. Pushing an element
/// merges the two runs below the lowest clear bit of `count`, unless `count`
/// is one less than a power of two, in which case nothing is merged.
///
/// When the input runs out, the pending runs are merged from the smallest
/// up, and the last merge rebuilds every `prev` link and closes the cycle.
pub(crate) fn list_sort<T, F>(list: &mut List<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    // `back.next` is already the ghost node, so the list reads as a
    // NIL-terminated chain from `front`.
    let mut node = list.front_node();
    let mut pending = NIL;
    let mut count = 0_usize;

    loop {
        // Find the least-significant clear bit in `count`. `tail` names the
        // slot holding the run below it: `None` for `pending` itself,
        // `Some(run)` for `run.prev`.
        let mut tail: Option<NodeId> = None;
        let mut bits = count;
        while bits & 1 == 1 {
            tail = Some(slot(list, pending, tail));
            bits >>= 1;
        }
        // Do the indicated merge
        if bits != 0 {
            let newer = slot(list, pending, tail);
            let older = list.prev_of(newer);
            let below = list.prev_of(older);
            let merged = merge(list, older, newer, less);
            list.set_prev(merged, below);
            match tail {
                None => pending = merged,
                Some(run) => list.set_prev(run, merged),
            }
        }

        // Move one element from input list to pending
        let next = list.next_of(node);
        list.set_prev(node, pending);
        list.set_next(node, NIL);
        pending = node;
        node = next;
        count += 1;
        if node == NIL {
            break;
        }
    }

    // End of input; merge together all the pending runs.
    let mut merged = pending;
    let mut pending = list.prev_of(pending);
    loop {
        let older = list.prev_of(pending);
        if older == NIL {
            break;
        }
        merged = merge(list, pending, merged, less);
        pending = older;
    }
    merge_final(list, pending, merged, less);
}

fn slot<T>(list: &List<T>, pending: NodeId, tail: Option<NodeId>) -> NodeId {
    match tail {
        None => pending,
        Some(run) => list.prev_of(run),
    }
}

/// Head and tail of a NIL-terminated chain under construction.
struct Chain {
    head: NodeId,
    tail: NodeId,
}

impl Chain {
    fn new() -> Self {
        Self { head: NIL, tail: NIL }
    }

    fn push<T>(&mut self, list: &mut List<T>, node: NodeId) {
        if self.tail == NIL {
            self.head = node;
        } else {
            list.set_next(self.tail, node);
        }
        self.tail = node;
    }
}

/// Merge two non-empty NIL-terminated chains `a` and `b`, where `a` holds
/// the earlier elements. Only `next` links are written.
fn merge<T, F>(list: &mut List<T>, mut a: NodeId, mut b: NodeId, less: &mut F) -> NodeId
where
    F: FnMut(&T, &T) -> bool,
{
    let mut chain = Chain::new();
    loop {
        if !less(list.element(b), list.element(a)) {
            chain.push(list, a);
            a = list.next_of(a);
            if a == NIL {
                chain.push(list, b);
                break;
            }
        } else {
            chain.push(list, b);
            b = list.next_of(b);
            if b == NIL {
                chain.push(list, a);
                break;
            }
        }
    }
    chain.head
}

/// Merge `a` and `b` like [`merge`], writing `prev` links too, and splice
/// the result between the ghost node's `next` and `prev`.
fn merge_final<T, F>(list: &mut List<T>, mut a: NodeId, mut b: NodeId, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut tail = GHOST;
    loop {
        if !less(list.element(b), list.element(a)) {
            list.connect(tail, a);
            tail = a;
            a = list.next_of(a);
            if a == NIL {
                break;
            }
        } else {
            list.connect(tail, b);
            tail = b;
            b = list.next_of(b);
            if b == NIL {
                b = a;
                break;
            }
        }
    }
    // Finish linking the remainder onto the tail.
    loop {
        list.connect(tail, b);
        tail = b;
        b = list.next_of(b);
        if b == NIL {
            break;
        }
    }
    list.connect(tail, GHOST);
}

#[cfg(test)]
mod tests {
    use super::{list_sort, merge_sort};
    use crate::list::List;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::iter::FromIterator;

    type Less = fn(&(u8, usize), &(u8, usize)) -> bool;
    type Sort = fn(&mut List<(u8, usize)>, &mut Less);

    fn by_key(a: &(u8, usize), b: &(u8, usize)) -> bool {
        a.0 < b.0
    }

    fn check_sort(sort: Sort, keys: &[u8]) {
        let input: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let mut list = List::from_iter(input.clone());
        let mut less: Less = by_key;
        sort(&mut list, &mut less);

        let mut expected = input;
        expected.sort_by_key(|&(key, _)| key);
        assert_eq!(Vec::from_iter(list.iter().copied()), expected);
        assert_eq!(list.validate(), Ok(()));
        assert_eq!(
            Vec::from_iter(list.iter().rev().copied()),
            Vec::from_iter(expected.into_iter().rev())
        );
    }

    fn sorts() -> [Sort; 2] {
        [
            |list, less| merge_sort(list, less),
            |list, less| list_sort(list, less),
        ]
    }

    #[test]
    fn sort_small_inputs() {
        for sort in sorts() {
            check_sort(sort, &[]);
            check_sort(sort, &[1]);
            check_sort(sort, &[2, 1]);
            check_sort(sort, &[1, 2]);
            check_sort(sort, &[1, 1]);
            check_sort(sort, &[3, 1, 2]);
            check_sort(sort, &[2, 2, 1, 1, 2]);
            check_sort(sort, &[5, 4, 3, 2, 1, 0]);
        }
    }

    #[test]
    fn sort_every_length_up_to_64() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for sort in sorts() {
            for len in 0..=64 {
                let keys: Vec<u8> = (0..len).map(|_| rng.gen_range(0..8)).collect();
                check_sort(sort, &keys);
            }
        }
    }

    #[test]
    fn sort_large_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys: Vec<u8> = (0..5000).map(|_| rng.gen()).collect();
        for sort in sorts() {
            check_sort(sort, &keys);
        }
    }

    #[test]
    fn sort_after_slot_reuse() {
        let mut list = List::from_iter(0..10);
        for _ in 0..4 {
            list.pop_front();
        }
        list.extend([3, 1, 2]);
        list_sort(&mut list, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(list.validate(), Ok(()));
    }
}
