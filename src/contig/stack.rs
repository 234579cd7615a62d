//! LIFO role over contiguous storage.

use std::sync::RwLock;

use crate::error::{ContainerError, Result};
use crate::traits::{Container, Stack};
use crate::utils::{read_txn, write_txn};

/// A LIFO stack over contiguous storage (`Vec`), interchangeable with
/// [`crate::LinkedStack`] behind the [`Stack`] trait.
#[derive(Debug)]
pub struct VecStack<E> {
    inner: RwLock<Vec<E>>,
}

impl<E> VecStack<E> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        VecStack {
            inner: RwLock::new(Vec::new()),
        }
    }
}

contig_container_impl!(VecStack);

impl<E: Clone + PartialEq> Stack<E> for VecStack<E> {
    fn push(&self, e: E) {
        write_txn(&self.inner).push(e);
    }

    fn pop(&self) -> Result<E> {
        write_txn(&self.inner)
            .pop()
            .ok_or(ContainerError::StackEmpty)
    }

    fn top(&self) -> Result<E> {
        read_txn(&self.inner)
            .last()
            .cloned()
            .ok_or(ContainerError::StackEmpty)
    }
}
