// SPDX-License-Identifier: MPL-2.0
//! Revision-counted state slices and the post-render reactions observing them.
//!
//! A [`Watched`] value bumps its revision on every write, including writes
//! that store an equal value. A [`Reaction`] is bound to one slice when it is
//! created and fires at most once per revision change, so a reaction tied to
//! the chat log never fires because the counter moved.
//!
//! The application runs all reactions from a single follow-up message that
//! is delivered after the view for the triggering update has been rebuilt.
//!
//! # Example
//!
//! ```
//! use ref_playground::reactive::{Reaction, Watched};
//!
//! let mut count = Watched::new(0);
//! let mut on_count = Reaction::new(&count);
//!
//! assert!(!on_count.take(&count));
//! count.set(1);
//! assert!(on_count.take(&count));
//! assert!(!on_count.take(&count));
//! ```

/// A value whose writes are counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Watched<T> {
    value: T,
    revision: u64,
}

impl<T> Watched<T> {
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value, returning the one it superseded.
    pub fn set(&mut self, value: T) -> T {
        self.revision = self.revision.wrapping_add(1);
        std::mem::replace(&mut self.value, value)
    }

    /// Mutates the value in place.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Number of writes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T: Default> Default for Watched<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Observer of a single [`Watched`] slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    seen: u64,
}

impl Reaction {
    /// Registers against `slice`; writes made before this call are not reported.
    pub fn new<T>(slice: &Watched<T>) -> Self {
        Self {
            seen: slice.revision(),
        }
    }

    /// Returns `true` once for every batch of writes since the last call.
    pub fn take<T>(&mut self, slice: &Watched<T>) -> bool {
        if self.seen == slice.revision() {
            return false;
        }
        self.seen = slice.revision();
        true
    }

    /// Whether `slice` has writes this reaction has not consumed yet.
    pub fn is_pending<T>(&self, slice: &Watched<T>) -> bool {
        self.seen != slice.revision()
    }
}
