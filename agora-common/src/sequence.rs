//! Monotonic id sequences.
//!
//! Every sequence hands out `1, 2, 3, ...` and never repeats a value, even if
//! the entity that received an id is later removed.

use crate::model::Id;
use derive_where::derive_where;
use std::marker::PhantomData;

/// The first id any sequence hands out.
pub const FIRST_ID: u64 = 1;

#[derive_where(Clone, Eq, PartialEq, Debug, Hash)]
pub struct IdSequence<Marker> {
    next: u64,
    marker: PhantomData<Marker>,
}

impl<Marker> IdSequence<Marker> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: FIRST_ID,
            marker: PhantomData,
        }
    }

    /// The id the next call to [`generate`](Self::generate) will return.
    #[must_use]
    pub fn peek(&self) -> Id<Marker> {
        self.next.into()
    }

    pub fn generate(&mut self) -> Id<Marker> {
        let id = self.peek();
        self.next += 1;
        id
    }
}

impl<Marker> Default for IdSequence<Marker> {
    fn default() -> Self {
        Self::new()
    }
}
