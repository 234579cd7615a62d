//! FIFO role over the sentinel ring: enter at the tail, leave at the head.

use std::sync::RwLock;

use crate::error::{ContainerError, Result};
use crate::linked::ring::Ring;
use crate::traits::{Container, Queue};
use crate::utils::{read_txn, write_txn};

/// A FIFO queue over a circular sentinel ring.
///
/// # Examples
/// ```
/// use ringbox::{LinkedQueue, Queue};
///
/// let q: LinkedQueue<&str> = LinkedQueue::new();
/// q.enqueue("a");
/// q.enqueue("b");
/// assert_eq!(q.front().unwrap(), "a");
/// assert_eq!(q.rear().unwrap(), "b");
/// assert_eq!(q.dequeue().unwrap(), "a");
/// ```
#[derive(Debug)]
pub struct LinkedQueue<E> {
    inner: RwLock<Ring<E>>,
}

impl<E> LinkedQueue<E> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        LinkedQueue {
            inner: RwLock::new(Ring::new()),
        }
    }
}

ring_container_impl!(LinkedQueue);

impl<E: Clone + PartialEq> Queue<E> for LinkedQueue<E> {
    fn enqueue(&self, e: E) {
        let mut ring = write_txn(&self.inner);
        let sentinel = ring.sentinel();
        ring.link_before(sentinel, e);
    }

    fn dequeue(&self) -> Result<E> {
        let mut ring = write_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::QueueEmpty);
        }
        let head = ring.head();
        Ok(ring.unlink(head))
    }

    fn front(&self) -> Result<E> {
        let ring = read_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::QueueEmpty);
        }
        Ok(ring.value(ring.head()).clone())
    }

    fn rear(&self) -> Result<E> {
        let ring = read_txn(&self.inner);
        if ring.is_empty() {
            return Err(ContainerError::QueueEmpty);
        }
        Ok(ring.value(ring.tail()).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedQueue;
    use crate::error::ContainerError;
    use crate::traits::{Container, Queue};

    #[test]
    fn test_queue_fifo_order() {
        let q: LinkedQueue<u64> = LinkedQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.dequeue(), Err(ContainerError::QueueEmpty));
        q.assert_invariants();
    }

    #[test]
    fn test_queue_empty_errors() {
        let q: LinkedQueue<u64> = LinkedQueue::new();
        assert_eq!(q.dequeue(), Err(ContainerError::QueueEmpty));
        assert_eq!(q.front(), Err(ContainerError::QueueEmpty));
        assert_eq!(q.rear(), Err(ContainerError::QueueEmpty));
    }

    #[test]
    fn test_queue_peeks_do_not_remove() {
        let q: LinkedQueue<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(q.front(), Ok(1));
        assert_eq!(q.rear(), Ok(3));
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_queue_get_and_iter() {
        let q: LinkedQueue<u64> = [4, 5, 6].into_iter().collect();
        assert_eq!(q.get(1), Ok(5));
        assert_eq!(q.get(-1), Err(ContainerError::IndexNegative));
        assert_eq!(q.get(3), Err(ContainerError::IndexOutOfRange));
        assert_eq!(q.to_vec(), vec![4, 5, 6]);
        assert_eq!(format!("{}", q), "[4 5 6]");
    }

    #[test]
    fn test_queue_clear() {
        let q: LinkedQueue<u64> = [4, 5].into_iter().collect();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(ContainerError::QueueEmpty));
        q.enqueue(7);
        assert_eq!(q.front(), Ok(7));
        q.assert_invariants();
    }

    #[test]
    fn test_queue_clone_is_independent() {
        let q: LinkedQueue<u64> = [1, 2].into_iter().collect();
        let c = q.clone();
        q.dequeue().unwrap();
        assert_eq!(c.to_vec(), vec![1, 2]);
        assert_eq!(q.to_vec(), vec![2]);
    }
}
