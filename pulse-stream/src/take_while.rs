// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-while operator that forwards values until a predicate first fails.
//!
//! The operator keeps an `active` latch that starts `true`. The first value for
//! which the predicate returns `false` clears the latch for good: that value and
//! every later one are dropped, even if the predicate would accept them again.
//! The predicate is not evaluated once the latch is cleared.

use crate::util::child_of;
use pulse_core::PulseStream;
use std::sync::atomic::{AtomicBool, Ordering};

/// Extension trait providing the `take_while` operator for Pulse streams.
pub trait TakeWhileExt<T> {
    /// Derives a stream that receives the longest prefix of values satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::TakeWhileExt;
    /// use pulse_test_utils::{push_all, Recorder};
    ///
    /// let source = PulseStream::new();
    /// let small = source.take_while(|n: &i32| *n < 3);
    /// let recorder = Recorder::attach(&small);
    ///
    /// push_all(&source, [1, 2, 3, 1]);
    ///
    /// assert_eq!(recorder.values(), vec![1, 2]);
    /// ```
    fn take_while<F>(&self, predicate: F) -> PulseStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T> TakeWhileExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn take_while<F>(&self, predicate: F) -> PulseStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let taken = child_of(self);
        let downstream = taken.clone();
        let active = AtomicBool::new(true);

        self.listen(move |value| {
            if !active.load(Ordering::SeqCst) {
                return;
            }
            if predicate(value) {
                downstream.push(value.clone());
            } else {
                active.store(false, Ordering::SeqCst);
            }
        });

        taken
    }
}
