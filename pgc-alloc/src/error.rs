//! Error types for the allocator crate.

use thiserror::Error;

/// Errors produced by [`crate::StackAllocator`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    /// A `free` call targeted an allocation that is not the current top of
    /// the stack. The stack allocator only supports freeing in exact reverse
    /// allocation order.
    #[error("out-of-order free: tried to free slot {requested}, current top is {top}")]
    OutOfOrderFree { requested: usize, top: usize },

    /// `free`/`pop` called on an empty stack.
    #[error("stack is empty")]
    Empty,
}

pub type StackResult<T> = std::result::Result<T, StackError>;
