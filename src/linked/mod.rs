//! Containers backed by the circular sentinel ring.
//!
//! All three roles (list, queue, stack) share one ring core and differ
//! only in which entry and exit points they expose: the list inserts and
//! removes anywhere, the queue enters at the tail and leaves at the head,
//! the stack enters and leaves at the tail. Each container wraps its ring
//! in one `RwLock`; reads take shared access, structural mutations take
//! exclusive access, and iterators keep the shared guard alive for their
//! whole traversal.

// The Container surface and the ambient impls (Clone, Default,
// FromIterator, Display) are identical across the three ring-backed
// roles, so they are stamped out here. Each role keeps its own entry/exit
// operations in its own file.
macro_rules! ring_container_impl {
    ($t:ident) => {
        impl<E: Clone + PartialEq> crate::traits::Container<E> for $t<E> {
            fn len(&self) -> usize {
                crate::utils::read_txn(&self.inner).len()
            }

            fn is_empty(&self) -> bool {
                crate::utils::read_txn(&self.inner).is_empty()
            }

            fn clear(&self) {
                let mut ring = crate::utils::write_txn(&self.inner);
                tracing::trace!(len = ring.len(), "clear");
                ring.clear();
            }

            fn get(&self, i: isize) -> crate::error::Result<E> {
                let ring = crate::utils::read_txn(&self.inner);
                let i = crate::traits::check_read_index(i, ring.len())?;
                Ok(ring.value(ring.node_at(i)).clone())
            }

            fn iter(&self) -> Box<dyn Iterator<Item = E> + '_> {
                Box::new(crate::linked::ring::RingIter::new(crate::utils::read_txn(
                    &self.inner,
                )))
            }

            fn to_vec(&self) -> Vec<E> {
                crate::utils::read_txn(&self.inner)
                    .values()
                    .cloned()
                    .collect()
            }
        }

        impl<E: Clone> Clone for $t<E> {
            fn clone(&self) -> Self {
                let ring = crate::utils::read_txn(&self.inner);
                $t {
                    inner: std::sync::RwLock::new(ring.clone()),
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
                let mut ring = crate::linked::ring::Ring::new();
                let sentinel = ring.sentinel();
                for e in iter {
                    ring.link_before(sentinel, e);
                }
                $t {
                    inner: std::sync::RwLock::new(ring),
                }
            }
        }

        impl<E: std::fmt::Display> std::fmt::Display for $t<E> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let ring = crate::utils::read_txn(&self.inner);
                crate::utils::write_bracketed(f, ring.values())
            }
        }

        #[cfg(test)]
        impl<E> $t<E> {
            pub(crate) fn assert_invariants(&self) {
                crate::utils::read_txn(&self.inner).assert_ring();
            }
        }
    };
}

mod list;
mod queue;
pub(crate) mod ring;
mod stack;

pub use list::LinkedList;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
