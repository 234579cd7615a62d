//! LIFO role over the sentinel ring: enter and leave at the tail.

use std::sync::RwLock;

use crate::error::{ContainerError, Result};
use crate::linked::ring::Ring;
use crate::traits::{Container, Stack};
use crate::utils::{read_txn, write_txn};

/// A LIFO stack over a circular sentinel ring.
///
/// # Examples
/// ```
/// use ringbox::{LinkedStack, Stack};
///
/// let s: LinkedStack<u32> = LinkedStack::new();
/// s.push(1);
/// s.push(2);
/// assert_eq!(s.top().unwrap(), 2);
/// assert_eq!(s.pop().unwrap(), 2);
/// assert_eq!(s.pop().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct LinkedStack<E> {
    inner: RwLock<Ring<E>>,
}

impl<E> LinkedStack<E> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        LinkedStack {
            inner: RwLock::new(Ring::new()),
        }
    }
}

ring_container_impl!(LinkedStack);

impl<E: Clone + PartialEq> Stack<E> for LinkedStack<E> {
    fn push(&self, e: E) {
        let mut ring = write_txn(&self.inner);
        let sentinel = ring.sentinel();
        ring.link_before(sentinel, e);
    }

    fn pop(&self) -> Result<E> {
        let mut ring = write_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::StackEmpty);
        }
        let tail = ring.tail();
        Ok(ring.unlink(tail))
    }

    fn top(&self) -> Result<E> {
        let ring = read_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::StackEmpty);
        }
        Ok(ring.value(ring.tail()).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedStack;
    use crate::error::ContainerError;
    use crate::traits::{Container, Stack};

    #[test]
    fn test_stack_lifo_order() {
        let s: LinkedStack<u64> = LinkedStack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop(), Err(ContainerError::StackEmpty));
        s.assert_invariants();
    }

    #[test]
    fn test_stack_empty_errors() {
        let s: LinkedStack<u64> = LinkedStack::new();
        assert_eq!(s.pop(), Err(ContainerError::StackEmpty));
        assert_eq!(s.top(), Err(ContainerError::StackEmpty));
    }

    #[test]
    fn test_stack_top_does_not_remove() {
        let s: LinkedStack<u64> = [1, 2].into_iter().collect();
        assert_eq!(s.top(), Ok(2));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_stack_iteration_is_insertion_order() {
        // traversal order is bottom-to-top insertion order, not pop order
        let s: LinkedStack<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.get(0), Ok(1));
        assert_eq!(format!("{}", s), "[1 2 3]");
    }

    #[test]
    fn test_stack_clear() {
        let s: LinkedStack<u64> = [1, 2, 3].into_iter().collect();
        s.clear();
        assert!(s.is_empty());
        s.push(4);
        assert_eq!(s.top(), Ok(4));
        s.assert_invariants();
    }
}
