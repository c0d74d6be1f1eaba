//! A double-ended queue (deque) that supports adding and removing
//! items at the front and the back in constant time, and iterating
//! over the items from front to back.
//!
//! Internally, the deque uses a `Vec`, and tracks next, previous,
//! front, and back elements by index.
//!
//! As items are removed from the deque, their memory in the `Vec` is
//! put on an internal free list. This free list is used when items
//! are inserted into the deque before the internal `Vec` is expanded.

mod deque;
mod error;
mod iter;
mod slot;

pub use crate::deque::Deque;
pub use crate::error::Error;
pub use crate::iter::{Drain, Iter};
