//! Capability sets shared by both backing families.
//!
//! Callers program against these traits and can swap the contiguous family
//! for the linked family (or back) without changing a call site. Every
//! concrete type in this crate implements the whole of its capability set;
//! the default bodies below exist so that a deliberately minimal variant
//! reports [`ContainerError::NotImplemented`] instead of silently returning
//! wrong data.

use crate::error::{ContainerError, Result};

/// The universal container contract: sizing, clearing, indexed read,
/// traversal and snapshotting.
///
/// Index arguments are signed so that a negative index is reportable as
/// [`ContainerError::IndexNegative`] rather than being unrepresentable.
pub trait Container<E> {
    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns true when no elements are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element, leaving the container empty.
    fn clear(&self);

    /// Returns a clone of the element at position `i`.
    ///
    /// Valid range is `[0, len)`. The default body reports
    /// [`ContainerError::NotImplemented`] for variants without random
    /// access.
    fn get(&self, i: isize) -> Result<E> {
        let _ = i;
        Err(ContainerError::NotImplemented)
    }

    /// Returns a forward, single-pass iterator over the contents.
    ///
    /// The iterator holds the container's read lock for its entire
    /// lifetime: traversal can never observe a concurrent structural
    /// mutation, and writers block until the iterator is dropped. Once
    /// exhausted it cannot be restarted; create a new one.
    fn iter(&self) -> Box<dyn Iterator<Item = E> + '_>;

    /// Returns the contents, in order, as an owned `Vec`.
    fn to_vec(&self) -> Vec<E> {
        self.iter().collect()
    }
}

/// An ordered, index-addressable container that supports insertion and
/// removal at any position.
pub trait List<E>: Container<E> {
    /// Appends `e` at the end of the list.
    fn add(&self, e: E);

    /// Inserts `e` at position `i`, shifting later elements toward the
    /// end. Valid range is `[0, len]`; `add_at(len, e)` appends.
    fn add_at(&self, i: isize, e: E) -> Result<()>;

    /// Appends every element of `other` (read through its iterator, so
    /// the source may belong to either backing family).
    ///
    /// A container is rejected as its own source with
    /// [`ContainerError::SelfReference`].
    fn add_list(&self, other: &dyn Container<E>) -> Result<()>;

    /// Splices every element of `other` in at position `i`.
    fn add_list_at(&self, i: isize, other: &dyn Container<E>) -> Result<()>;

    /// Returns an independent list holding the same sequence of values.
    /// Nothing is shared with the source; mutating one never affects the
    /// other.
    fn copy(&self) -> Box<dyn List<E>>;

    /// Returns the position of the first element equal to `e`.
    fn index_of(&self, e: &E) -> Option<usize>;

    /// Returns the position of the last element equal to `e`.
    fn last_index_of(&self, e: &E) -> Option<usize>;

    /// Removes every element equal to `e`, returning whether at least one
    /// removal occurred. Equality is the element type's `PartialEq`, not
    /// identity.
    fn remove_elements(&self, e: &E) -> bool;

    /// Removes and returns the first element.
    fn remove_first(&self) -> Result<E>;

    /// Removes and returns the last element.
    fn remove_last(&self) -> Result<E>;

    /// Removes and returns the element at position `i`.
    fn remove_at(&self, i: isize) -> Result<E>;

    /// Replaces the element at position `i` with `e`.
    fn set(&self, i: isize, e: E) -> Result<()>;
}

/// A first-in first-out container: elements enter at the rear and leave
/// at the front.
pub trait Queue<E>: Container<E> {
    /// Appends `e` at the rear of the queue.
    fn enqueue(&self, e: E);

    /// Removes and returns the front element.
    fn dequeue(&self) -> Result<E>;

    /// Returns a clone of the front element without removing it.
    fn front(&self) -> Result<E>;

    /// Returns a clone of the rear element without removing it.
    fn rear(&self) -> Result<E>;
}

/// A last-in first-out container: elements enter and leave at the top.
pub trait Stack<E>: Container<E> {
    /// Pushes `e` onto the top of the stack.
    fn push(&self, e: E);

    /// Removes and returns the top element.
    fn pop(&self) -> Result<E>;

    /// Returns a clone of the top element without removing it.
    fn top(&self) -> Result<E>;
}

// Concatenation sources are rejected when they alias the destination: a
// self splice would corrupt the ring, and taking the same lock in read
// mode under the write guard would deadlock. Data-pointer equality is
// sufficient; none of the concrete containers are zero-sized.
pub(crate) fn aliases<E>(this: *const (), other: &dyn Container<E>) -> bool {
    std::ptr::eq(this, other as *const dyn Container<E> as *const ())
}

pub(crate) fn check_read_index(i: isize, len: usize) -> Result<usize> {
    if i < 0 {
        return Err(ContainerError::IndexNegative);
    }
    let i = i as usize;
    if i >= len {
        return Err(ContainerError::IndexOutOfRange);
    }
    Ok(i)
}

pub(crate) fn check_insert_index(i: isize, len: usize) -> Result<usize> {
    if i < 0 {
        return Err(ContainerError::IndexNegative);
    }
    let i = i as usize;
    if i > len {
        return Err(ContainerError::IndexOutOfRange);
    }
    Ok(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A variant that only knows how to count and iterate. The defaulted
    // operations must surface NotImplemented, never a fabricated value.
    struct CountOnly(usize);

    impl Container<u64> for CountOnly {
        fn len(&self) -> usize {
            self.0
        }

        fn clear(&self) {}

        fn iter(&self) -> Box<dyn Iterator<Item = u64> + '_> {
            Box::new(std::iter::empty())
        }
    }

    #[test]
    fn test_minimal_variant_reports_not_implemented() {
        let c = CountOnly(3);
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert_eq!(c.get(0), Err(ContainerError::NotImplemented));
        assert_eq!(c.get(2), Err(ContainerError::NotImplemented));
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(check_read_index(-1, 4), Err(ContainerError::IndexNegative));
        assert_eq!(check_read_index(4, 4), Err(ContainerError::IndexOutOfRange));
        assert_eq!(check_read_index(3, 4), Ok(3));
        assert_eq!(check_insert_index(4, 4), Ok(4));
        assert_eq!(
            check_insert_index(5, 4),
            Err(ContainerError::IndexOutOfRange)
        );
        assert_eq!(
            check_insert_index(-1, 0),
            Err(ContainerError::IndexNegative)
        );
    }
}
