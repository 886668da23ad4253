// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop operator that skips the first n values of a stream.

use crate::util::child_of;
use pulse_core::PulseStream;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Extension trait providing the `drop` operator for Pulse streams.
pub trait DropExt<T> {
    /// Derives a stream that skips the first `n` values and receives every later one.
    ///
    /// `drop(0)` forwards everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::DropExt;
    /// use pulse_test_utils::{push_all, Recorder};
    ///
    /// let source = PulseStream::new();
    /// let rest = source.drop(2);
    /// let recorder = Recorder::attach(&rest);
    ///
    /// push_all(&source, [1, 2, 3, 4]);
    ///
    /// assert_eq!(recorder.values(), vec![3, 4]);
    /// ```
    fn drop(&self, n: usize) -> PulseStream<T>;
}

impl<T> DropExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&self, n: usize) -> PulseStream<T> {
        let rest = child_of(self);
        let downstream = rest.clone();
        let to_skip = AtomicUsize::new(n);

        self.listen(move |value| {
            let skipped = to_skip
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();
            if !skipped {
                downstream.push(value.clone());
            }
        });

        rest
    }
}
