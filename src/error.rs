//! Error taxonomy shared by every container operation.
//!
//! Each variant corresponds to one caller-recoverable condition. No
//! operation panics for any of these; a rejected mutation leaves the
//! container untouched.

use std::error::Error;
use std::fmt;

/// The error kind returned by fallible container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// An index argument was negative.
    IndexNegative,
    /// An index argument was past the end of the container: `>= len` for
    /// read/remove/set, `> len` for insert.
    IndexOutOfRange,
    /// `remove_first`/`remove_last` was called on an empty list.
    ListEmpty,
    /// `dequeue`/`front`/`rear` was called on an empty queue.
    QueueEmpty,
    /// `pop`/`top` was called on an empty stack.
    StackEmpty,
    /// A container was passed as its own concatenation source.
    SelfReference,
    /// The operation is intentionally unsupported by this variant.
    NotImplemented,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ContainerError::IndexNegative => "index cannot be less than 0",
            ContainerError::IndexOutOfRange => "index is out of range for this container",
            ContainerError::ListEmpty => "list is empty",
            ContainerError::QueueEmpty => "queue is empty",
            ContainerError::StackEmpty => "stack is empty",
            ContainerError::SelfReference => "a container cannot be its own concatenation source",
            ContainerError::NotImplemented => "operation not implemented by this variant",
        };
        f.write_str(msg)
    }
}

impl Error for ContainerError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ContainerError>;
