//! Ringbox - interchangeable list, queue and stack containers
//!
//! Every container role in this crate comes in two backing families that
//! satisfy identical trait contracts, so call sites can swap one for the
//! other without changing:
//!
//! * the **linked family** ([`LinkedList`], [`LinkedQueue`],
//!   [`LinkedStack`]) stores its elements in a circular doubly-linked
//!   ring around a permanent sentinel node, giving O(1) insertion and
//!   removal at both ends and `len / 2`-bounded random access;
//! * the **contiguous family** ([`VecList`], [`VecQueue`], [`VecStack`])
//!   stores its elements in contiguous memory, giving O(1) random access.
//!
//! Each container owns one reader/writer lock. Read-only operations take
//! shared access, structural mutations take exclusive access, and every
//! operation is data-race safe on its own; sequences of operations are
//! not atomic. Iterators hold the container's read lock for their entire
//! traversal, so they can never observe a half-finished mutation - at the
//! cost of blocking writers while they are alive.
//!
//! Fallible operations return [`ContainerError`] rather than panicking:
//! out-of-range and negative indexes, removal from an empty container,
//! and a container offered as its own concatenation source are all
//! caller-recoverable conditions.
//!
//! # Examples
//! ```
//! use ringbox::{Container, LinkedList, List, Queue, VecQueue};
//!
//! let list: LinkedList<i64> = [1, 2, 3].into_iter().collect();
//! list.add(4);
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
//!
//! // The queue roles behave identically across families.
//! let q: VecQueue<i64> = VecQueue::new();
//! q.enqueue(1);
//! q.enqueue(2);
//! assert_eq!(q.dequeue().unwrap(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod contig;
pub mod error;
pub mod linked;
mod traits;
mod utils;

pub use contig::{VecList, VecQueue, VecStack};
pub use error::{ContainerError, Result};
pub use linked::{LinkedList, LinkedQueue, LinkedStack};
pub use traits::{Container, List, Queue, Stack};
