use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// A panicked thread can only poison a lock between complete splices, so the
// inner state is still structurally consistent and safe to hand out.
pub(crate) fn read_txn<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_txn<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

// Diagnostic rendering shared by all containers: ordered, bracketed,
// space-separated. Not a parseable format.
pub(crate) fn write_bracketed<E, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    E: fmt::Display,
    I: Iterator<Item = E>,
{
    f.write_str("[")?;
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", value)?;
    }
    f.write_str("]")
}
