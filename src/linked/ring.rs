//! The circular sentinel ring shared by every linked container.
//!
//! Nodes live in a [`slab::Slab`] arena and point at each other through
//! stable keys rather than references, so removing a node can never leave
//! a dangling link behind. One slot per ring is reserved for the sentinel:
//! a permanently present, valueless node whose key marks the boundary of
//! the ring. An empty ring is the sentinel linked to itself.
//!
//! Invariants:
//!
//! * for every node `n`, `n.next.prev == n` and `n.prev.next == n`;
//! * `len` equals the number of payload nodes reachable from the sentinel
//!   by following `next` before arriving back at it;
//! * the sentinel is never unlinked, never holds a value, and is never
//!   yielded by a cursor.

use std::sync::RwLockReadGuard;

use slab::Slab;

/// Stable arena key addressing one node of a ring.
pub(crate) type NodeKey = usize;

#[derive(Debug, Clone)]
struct Node<E> {
    // None only for the sentinel.
    value: Option<E>,
    prev: NodeKey,
    next: NodeKey,
}

/// The ring core. All access is mediated by the owning container's lock;
/// nothing here is synchronized on its own.
#[derive(Debug, Clone)]
pub(crate) struct Ring<E> {
    nodes: Slab<Node<E>>,
    sentinel: NodeKey,
    len: usize,
}

impl<E> Ring<E> {
    pub(crate) fn new() -> Self {
        let mut nodes = Slab::new();
        let sentinel = Self::seed(&mut nodes);
        Ring {
            nodes,
            sentinel,
            len: 0,
        }
    }

    // Reserve the sentinel slot, self-linked: the empty ring.
    fn seed(nodes: &mut Slab<Node<E>>) -> NodeKey {
        let entry = nodes.vacant_entry();
        let sentinel = entry.key();
        entry.insert(Node {
            value: None,
            prev: sentinel,
            next: sentinel,
        });
        sentinel
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes[self.sentinel].next == self.sentinel
    }

    pub(crate) fn sentinel(&self) -> NodeKey {
        self.sentinel
    }

    pub(crate) fn next_of(&self, key: NodeKey) -> NodeKey {
        self.nodes[key].next
    }

    pub(crate) fn prev_of(&self, key: NodeKey) -> NodeKey {
        self.nodes[key].prev
    }

    /// First payload node, or the sentinel when empty.
    pub(crate) fn head(&self) -> NodeKey {
        self.next_of(self.sentinel)
    }

    /// Last payload node, or the sentinel when empty.
    pub(crate) fn tail(&self) -> NodeKey {
        self.prev_of(self.sentinel)
    }

    pub(crate) fn value(&self, key: NodeKey) -> &E {
        debug_assert_ne!(key, self.sentinel);
        match self.nodes[key].value.as_ref() {
            Some(v) => v,
            None => unreachable!("payload node without a value"),
        }
    }

    pub(crate) fn value_mut(&mut self, key: NodeKey) -> &mut E {
        debug_assert_ne!(key, self.sentinel);
        match self.nodes[key].value.as_mut() {
            Some(v) => v,
            None => unreachable!("payload node without a value"),
        }
    }

    /// Splices a new node immediately before `at`.
    ///
    /// `at` may be any node including the sentinel; inserting before the
    /// sentinel appends at the tail. The new node adopts its neighbours
    /// first, then the left neighbour's `next` and `at`'s `prev` are
    /// rewritten to it. `len` is bumped only once the splice is complete.
    pub(crate) fn link_before(&mut self, at: NodeKey, value: E) -> NodeKey {
        let left = self.nodes[at].prev;
        let node = self.nodes.insert(Node {
            value: Some(value),
            prev: left,
            next: at,
        });
        self.nodes[left].next = node;
        self.nodes[at].prev = node;
        self.len += 1;
        node
    }

    /// Unlinks `key` by joining its neighbours, frees its slot, and
    /// returns its value. Must never be called with the sentinel.
    pub(crate) fn unlink(&mut self, key: NodeKey) -> E {
        debug_assert_ne!(key, self.sentinel);
        let node = self.nodes.remove(key);
        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        self.len -= 1;
        match node.value {
            Some(v) => v,
            None => unreachable!("unlinked the sentinel"),
        }
    }

    /// Walks to position `i` from whichever end is closer, bounding the
    /// cost at `len / 2` hops.
    ///
    /// `i` may equal `len`, which lands on the sentinel: the
    /// insert-before position for an append. The tail-ward branch steps
    /// back exactly `len - i` times from the sentinel; starting the count
    /// at the index itself is what kept the original reverse scans from
    /// over-running by one.
    pub(crate) fn node_at(&self, i: usize) -> NodeKey {
        debug_assert!(i <= self.len);
        if i < self.len / 2 {
            let mut node = self.head();
            for _ in 0..i {
                node = self.next_of(node);
            }
            node
        } else {
            let mut node = self.sentinel;
            for _ in i..self.len {
                node = self.prev_of(node);
            }
            node
        }
    }

    /// Drops every payload node and reseeds the sentinel.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.sentinel = Self::seed(&mut self.nodes);
        self.len = 0;
    }

    /// Borrowing forward traversal, sentinel excluded.
    pub(crate) fn values(&self) -> Values<'_, E> {
        Values {
            ring: self,
            cursor: self.sentinel,
        }
    }
}

impl<E: PartialEq> Ring<E> {
    /// Position of the last node whose value equals `e`, scanning
    /// tail-ward from the sentinel.
    pub(crate) fn last_position(&self, e: &E) -> Option<usize> {
        let mut i = self.len;
        let mut node = self.tail();
        while node != self.sentinel {
            i -= 1;
            if self.value(node) == e {
                return Some(i);
            }
            node = self.prev_of(node);
        }
        None
    }

    /// Unlinks every node whose value equals `e`, returning how many were
    /// removed. The successor is captured before each unlink so the scan
    /// survives the removal of the node it sits on.
    pub(crate) fn unlink_equal(&mut self, e: &E) -> usize {
        let mut removed = 0;
        let mut node = self.head();
        while node != self.sentinel {
            let next = self.next_of(node);
            if self.value(node) == e {
                self.unlink(node);
                removed += 1;
            }
            node = next;
        }
        removed
    }
}

#[cfg(test)]
impl<E> Ring<E> {
    // Walks the ring both ways and checks the symmetric link invariant,
    // the length accounting, and that one step past the last payload node
    // is the sentinel again.
    pub(crate) fn assert_ring(&self) {
        let mut node = self.sentinel;
        for _ in 0..self.len {
            node = self.next_of(node);
            assert_ne!(node, self.sentinel);
            assert_eq!(self.prev_of(self.next_of(node)), node);
            assert_eq!(self.next_of(self.prev_of(node)), node);
        }
        assert_eq!(self.next_of(node), self.sentinel);

        let mut node = self.sentinel;
        for _ in 0..self.len {
            node = self.prev_of(node);
            assert_ne!(node, self.sentinel);
        }
        assert_eq!(self.prev_of(node), self.sentinel);

        // one slab slot per payload node, plus the sentinel
        assert_eq!(self.nodes.len(), self.len + 1);
    }
}

/// Borrowing cursor over a ring's payload values. Used internally under a
/// held guard; the public iterators wrap the guard itself.
pub(crate) struct Values<'a, E> {
    ring: &'a Ring<E>,
    cursor: NodeKey,
}

impl<'a, E> Iterator for Values<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.ring.next_of(self.cursor);
        if next == self.ring.sentinel {
            None
        } else {
            self.cursor = next;
            Some(self.ring.value(next))
        }
    }
}

/// Owning iterator over a linked container.
///
/// Holds the container's read guard for its entire lifetime (writers wait
/// until it is dropped) and tracks its position as an arena key. The
/// cursor starts on the sentinel, one before the first element, so the
/// first `next()` yields the first payload value; "another element
/// remains" is exactly "the node after the cursor is not the sentinel".
pub(crate) struct RingIter<'a, E> {
    guard: RwLockReadGuard<'a, Ring<E>>,
    cursor: NodeKey,
}

impl<'a, E> RingIter<'a, E> {
    pub(crate) fn new(guard: RwLockReadGuard<'a, Ring<E>>) -> Self {
        let cursor = guard.sentinel();
        RingIter { guard, cursor }
    }
}

impl<'a, E: Clone> Iterator for RingIter<'a, E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.guard.next_of(self.cursor);
        if next == self.guard.sentinel() {
            None
        } else {
            self.cursor = next;
            Some(self.guard.value(next).clone())
        }
    }
}
