//! Ordered, index-addressable container over contiguous storage.

use std::sync::RwLock;

use tracing::trace;

use crate::error::{ContainerError, Result};
use crate::traits::{aliases, check_insert_index, check_read_index, Container, List};
use crate::utils::{read_txn, write_txn};

/// A list over contiguous storage.
///
/// Interchangeable with [`crate::LinkedList`] behind the [`List`] trait;
/// indexed reads are O(1), insertion and removal shift the elements after
/// the target.
///
/// # Examples
/// ```
/// use ringbox::{Container, List, VecList};
///
/// let list: VecList<i64> = [1, 2, 3].into_iter().collect();
/// list.add(4);
/// assert_eq!(list.get(3).unwrap(), 4);
/// assert!(list.remove_elements(&2));
/// assert_eq!(list.to_vec(), vec![1, 3, 4]);
/// ```
#[derive(Debug)]
pub struct VecList<E> {
    inner: RwLock<Vec<E>>,
}

impl<E> VecList<E> {
    /// Creates an empty list.
    pub fn new() -> Self {
        VecList {
            inner: RwLock::new(Vec::new()),
        }
    }
}

contig_container_impl!(VecList);

impl<E: Clone + PartialEq + 'static> List<E> for VecList<E> {
    fn add(&self, e: E) {
        write_txn(&self.inner).push(e);
    }

    fn add_at(&self, i: isize, e: E) -> Result<()> {
        let mut store = write_txn(&self.inner);
        let i = check_insert_index(i, store.len())?;
        store.insert(i, e);
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
        let mut store = write_txn(&self.inner);
        store.extend(elems);
        Ok(())
    }

    fn add_list_at(&self, i: isize, other: &dyn Container<E>) -> Result<()> {
        if aliases(self as *const Self as *const (), other) {
            return Err(ContainerError::SelfReference);
        }
        // Same single-lock rule as add_list: snapshot, then lock.
        let elems = other.to_vec();
        let mut store = write_txn(&self.inner);
        let i = check_insert_index(i, store.len())?;
        store.splice(i..i, elems);
        Ok(())
    }

    fn copy(&self) -> Box<dyn List<E>> {
        Box::new(self.clone())
    }

    fn index_of(&self, e: &E) -> Option<usize> {
        read_txn(&self.inner).iter().position(|v| v == e)
    }

    fn last_index_of(&self, e: &E) -> Option<usize> {
        read_txn(&self.inner).iter().rposition(|v| v == e)
    }

    fn remove_elements(&self, e: &E) -> bool {
        let mut store = write_txn(&self.inner);
        let before = store.len();
        store.retain(|v| v != e);
        let removed = before - store.len();
        if removed > 0 {
            trace!(removed, "remove_elements");
        }
        removed > 0
    }

    fn remove_first(&self) -> Result<E> {
        let mut store = write_txn(&self.inner);
        if store.is_empty() {
            return Err(ContainerError::ListEmpty);
        }
        Ok(store.remove(0))
    }

    fn remove_last(&self) -> Result<E> {
        write_txn(&self.inner).pop().ok_or(ContainerError::ListEmpty)
    }

    fn remove_at(&self, i: isize) -> Result<E> {
        let mut store = write_txn(&self.inner);
        let i = check_read_index(i, store.len())?;
        Ok(store.remove(i))
    }

    fn set(&self, i: isize, e: E) -> Result<()> {
        let mut store = write_txn(&self.inner);
        let i = check_read_index(i, store.len())?;
        store[i] = e;
        Ok(())
    }
}
