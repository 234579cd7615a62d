//! Containers backed by contiguous storage.
//!
//! This family satisfies the same capability sets as the linked family
//! with plain index-bounded operations over `Vec` (list, stack) and
//! `VecDeque` (queue). Same locking discipline: one `RwLock` per
//! container, iterators keep the read guard for their lifetime.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::RwLockReadGuard;

// What the contiguous iterator needs from its storage: a length-bounded
// positional read.
pub(crate) trait IndexedStorage<E> {
    fn at(&self, i: usize) -> Option<&E>;
}

impl<E> IndexedStorage<E> for Vec<E> {
    fn at(&self, i: usize) -> Option<&E> {
        self.get(i)
    }
}

impl<E> IndexedStorage<E> for VecDeque<E> {
    fn at(&self, i: usize) -> Option<&E> {
        self.get(i)
    }
}

/// Owning iterator over a contiguous container: a running index compared
/// against the guarded storage's bounds. Holds the container's read guard
/// for its entire lifetime, like its linked counterpart.
pub(crate) struct ContigIter<'a, S, E> {
    guard: RwLockReadGuard<'a, S>,
    index: usize,
    _elem: PhantomData<fn() -> E>,
}

impl<'a, S, E> ContigIter<'a, S, E> {
    pub(crate) fn new(guard: RwLockReadGuard<'a, S>) -> Self {
        ContigIter {
            guard,
            index: 0,
            _elem: PhantomData,
        }
    }
}

impl<'a, S: IndexedStorage<E>, E: Clone> Iterator for ContigIter<'a, S, E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.guard.at(self.index)?.clone();
        self.index += 1;
        Some(value)
    }
}

// Shared Container surface and ambient impls for the contiguous family,
// mirroring the ring-backed macro in `crate::linked`.
macro_rules! contig_container_impl {
    ($t:ident) => {
        impl<E: Clone + PartialEq> crate::traits::Container<E> for $t<E> {
            fn len(&self) -> usize {
                crate::utils::read_txn(&self.inner).len()
            }

            fn is_empty(&self) -> bool {
                crate::utils::read_txn(&self.inner).is_empty()
            }

            fn clear(&self) {
                let mut store = crate::utils::write_txn(&self.inner);
                tracing::trace!(len = store.len(), "clear");
                store.clear();
            }

            fn get(&self, i: isize) -> crate::error::Result<E> {
                let store = crate::utils::read_txn(&self.inner);
                let i = crate::traits::check_read_index(i, store.len())?;
                Ok(store[i].clone())
            }

            fn iter(&self) -> Box<dyn Iterator<Item = E> + '_> {
                Box::new(crate::contig::ContigIter::new(crate::utils::read_txn(
                    &self.inner,
                )))
            }

            fn to_vec(&self) -> Vec<E> {
                crate::utils::read_txn(&self.inner).iter().cloned().collect()
            }
        }

        impl<E: Clone> Clone for $t<E> {
            fn clone(&self) -> Self {
                let store = crate::utils::read_txn(&self.inner);
                $t {
                    inner: std::sync::RwLock::new(store.clone()),
                }
            }
        }

        impl<E> Default for $t<E> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<E> std::iter::FromIterator<E> for $t<E> {
            fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
                $t {
                    inner: std::sync::RwLock::new(iter.into_iter().collect()),
                }
            }
        }

        impl<E: std::fmt::Display> std::fmt::Display for $t<E> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let store = crate::utils::read_txn(&self.inner);
                crate::utils::write_bracketed(f, store.iter())
            }
        }
    };
}

mod list;
mod queue;
mod stack;

pub use list::VecList;
pub use queue::VecQueue;
pub use stack::VecStack;
