//! Ordered, index-addressable container over the sentinel ring.

use std::sync::RwLock;

use tracing::trace;

use crate::error::{ContainerError, Result};
use crate::linked::ring::Ring;
use crate::traits::{aliases, check_insert_index, check_read_index, Container, List};
use crate::utils::{read_txn, write_txn};

/// A doubly-linked list over a circular sentinel ring.
///
/// Indexed lookups walk from whichever end of the ring is closer to the
/// target, so random access costs at most `len / 2` hops. All operations
/// are safe to call from multiple threads; each takes the list's
/// reader/writer lock for exactly one operation.
///
/// # Examples
/// ```
/// use ringbox::{Container, LinkedList, List};
///
/// let list: LinkedList<i64> = LinkedList::new();
/// list.add(1);
/// list.add(3);
/// list.add_at(1, 2).unwrap();
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
///
/// assert_eq!(list.remove_first().unwrap(), 1);
/// assert_eq!(list.index_of(&3), Some(1));
/// assert_eq!(format!("{}", list), "[2 3]");
/// ```
#[derive(Debug)]
pub struct LinkedList<E> {
    inner: RwLock<Ring<E>>,
}

impl<E> LinkedList<E> {
    /// Creates an empty list. Use `FromIterator` to create a populated
    /// one.
    pub fn new() -> Self {
        LinkedList {
            inner: RwLock::new(Ring::new()),
        }
    }
}

ring_container_impl!(LinkedList);

impl<E: Clone + PartialEq + 'static> List<E> for LinkedList<E> {
    fn add(&self, e: E) {
        let mut ring = write_txn(&self.inner);
        let sentinel = ring.sentinel();
        ring.link_before(sentinel, e);
    }

    fn add_at(&self, i: isize, e: E) -> Result<()> {
        let mut ring = write_txn(&self.inner);
        let i = check_insert_index(i, ring.len())?;
        let at = ring.node_at(i);
        ring.link_before(at, e);
        Ok(())
    }

    fn add_list(&self, other: &dyn Container<E>) -> Result<()> {
        if aliases(self as *const Self as *const (), other) {
            return Err(ContainerError::SelfReference);
        }
        // Snapshot the source before taking our write lock: no operation
        // may hold two container locks at once, or two concatenations
        // running in opposite directions acquire them in opposite orders.
        let elems = other.to_vec();
        let mut ring = write_txn(&self.inner);
        let sentinel = ring.sentinel();
        for e in elems {
            ring.link_before(sentinel, e);
        }
        Ok(())
    }

    fn add_list_at(&self, i: isize, other: &dyn Container<E>) -> Result<()> {
        if aliases(self as *const Self as *const (), other) {
            return Err(ContainerError::SelfReference);
        }
        // Same single-lock rule as add_list: snapshot, then lock.
        let elems = other.to_vec();
        let mut ring = write_txn(&self.inner);
        let i = check_insert_index(i, ring.len())?;
        // Splicing each element before the node at `i` keeps the source
        // order and pushes that node rightward as the splice grows.
        let at = ring.node_at(i);
        for e in elems {
            ring.link_before(at, e);
        }
        Ok(())
    }

    fn copy(&self) -> Box<dyn List<E>> {
        Box::new(self.clone())
    }

    fn index_of(&self, e: &E) -> Option<usize> {
        read_txn(&self.inner).values().position(|v| v == e)
    }

    fn last_index_of(&self, e: &E) -> Option<usize> {
        read_txn(&self.inner).last_position(e)
    }

    fn remove_elements(&self, e: &E) -> bool {
        let mut ring = write_txn(&self.inner);
        let removed = ring.unlink_equal(e);
        if removed > 0 {
            trace!(removed, "remove_elements");
        }
        removed > 0
    }

    fn remove_first(&self) -> Result<E> {
        let mut ring = write_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::ListEmpty);
        }
        let head = ring.head();
        Ok(ring.unlink(head))
    }

    fn remove_last(&self) -> Result<E> {
        let mut ring = write_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::ListEmpty);
        }
        let tail = ring.tail();
        Ok(ring.unlink(tail))
    }

    fn remove_at(&self, i: isize) -> Result<E> {
        let mut ring = write_txn(&self.inner);
        let i = check_read_index(i, ring.len())?;
        let at = ring.node_at(i);
        Ok(ring.unlink(at))
    }

    fn set(&self, i: isize, e: E) -> Result<()> {
        let mut ring = write_txn(&self.inner);
        let i = check_read_index(i, ring.len())?;
        let at = ring.node_at(i);
        *ring.value_mut(at) = e;
        Ok(())
    }
}
