//! FIFO role over contiguous storage.

use std::collections::VecDeque;
use std::sync::RwLock;

use crate::error::{ContainerError, Result};
use crate::traits::{Container, Queue};
use crate::utils::{read_txn, write_txn};

/// A FIFO queue over contiguous storage (`VecDeque`), interchangeable
/// with [`crate::LinkedQueue`] behind the [`Queue`] trait.
#[derive(Debug)]
pub struct VecQueue<E> {
    inner: RwLock<VecDeque<E>>,
}

impl<E> VecQueue<E> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        VecQueue {
            inner: RwLock::new(VecDeque::new()),
        }
    }
}

contig_container_impl!(VecQueue);

impl<E: Clone + PartialEq> Queue<E> for VecQueue<E> {
    fn enqueue(&self, e: E) {
        write_txn(&self.inner).push_back(e);
    }

    fn dequeue(&self) -> Result<E> {
        write_txn(&self.inner)
            .pop_front()
            .ok_or(ContainerError::QueueEmpty)
    }

    fn front(&self) -> Result<E> {
        read_txn(&self.inner)
            .front()
            .cloned()
            .ok_or(ContainerError::QueueEmpty)
    }

    fn rear(&self) -> Result<E> {
        read_txn(&self.inner)
            .back()
            .cloned()
            .ok_or(ContainerError::QueueEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::VecQueue;
    use crate::error::ContainerError;
    use crate::traits::{Container, Queue};

    #[test]
    fn test_vec_queue_fifo_order() {
        let q: VecQueue<u64> = VecQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.dequeue(), Err(ContainerError::QueueEmpty));
    }

    #[test]
    fn test_vec_queue_empty_errors() {
        let q: VecQueue<u64> = VecQueue::new();
        assert_eq!(q.dequeue(), Err(ContainerError::QueueEmpty));
        assert_eq!(q.front(), Err(ContainerError::QueueEmpty));
        assert_eq!(q.rear(), Err(ContainerError::QueueEmpty));
    }

    #[test]
    fn test_vec_queue_peeks_and_get() {
        let q: VecQueue<u64> = [4, 5, 6].into_iter().collect();
        assert_eq!(q.front(), Ok(4));
        assert_eq!(q.rear(), Ok(6));
        assert_eq!(q.get(1), Ok(5));
        assert_eq!(q.get(-1), Err(ContainerError::IndexNegative));
        assert_eq!(q.get(3), Err(ContainerError::IndexOutOfRange));
        assert_eq!(q.len(), 3);
        assert_eq!(format!("{}", q), "[4 5 6]");
    }

    #[test]
    fn test_vec_queue_clear() {
        let q: VecQueue<u64> = [1, 2].into_iter().collect();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.to_vec(), Vec::<u64>::new());
    }
}
