// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-while operator that suppresses values until a predicate first fails.
//!
//! Mirror image of [`take_while`](crate::TakeWhileExt::take_while): the first value
//! failing the predicate opens the stream for good, and that value plus every
//! later one is forwarded without consulting the predicate again.

use crate::util::child_of;
use pulse_core::PulseStream;
use std::sync::atomic::{AtomicBool, Ordering};

/// Extension trait providing the `drop_while` operator for Pulse streams.
pub trait DropWhileExt<T> {
    /// Derives a stream that skips the leading values satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::DropWhileExt;
    /// use pulse_test_utils::{push_all, Recorder};
    ///
    /// let source = PulseStream::new();
    /// let rest = source.drop_while(|n: &i32| *n < 3);
    /// let recorder = Recorder::attach(&rest);
    ///
    /// push_all(&source, [1, 2, 3, 1]);
    ///
    /// assert_eq!(recorder.values(), vec![3, 1]);
    /// ```
    fn drop_while<F>(&self, predicate: F) -> PulseStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T> DropWhileExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop_while<F>(&self, predicate: F) -> PulseStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let rest = child_of(self);
        let downstream = rest.clone();
        let dropping = AtomicBool::new(true);

        self.listen(move |value| {
            if dropping.load(Ordering::SeqCst) {
                if predicate(value) {
                    return;
                }
                dropping.store(false, Ordering::SeqCst);
            }
            downstream.push(value.clone());
        });

        rest
    }
}
