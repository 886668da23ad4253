// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator that forwards only the first n values of a stream.

use crate::util::child_of;
use pulse_core::PulseStream;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Extension trait providing the `take` operator for Pulse streams.
pub trait TakeExt<T> {
    /// Derives a stream that receives the first `n` values of this stream.
    ///
    /// Values after the n-th are ignored. `take(0)` forwards nothing. The derived
    /// stream is not ended once the limit is reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::TakeExt;
    /// use pulse_test_utils::{push_all, Recorder};
    ///
    /// let source = PulseStream::new();
    /// let first_two = source.take(2);
    /// let recorder = Recorder::attach(&first_two);
    ///
    /// push_all(&source, ["a", "b", "c"]);
    ///
    /// assert_eq!(recorder.values(), vec!["a", "b"]);
    /// ```
    fn take(&self, n: usize) -> PulseStream<T>;
}

impl<T> TakeExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn take(&self, n: usize) -> PulseStream<T> {
        let taken = child_of(self);
        let downstream = taken.clone();
        let remaining = AtomicUsize::new(n);

        self.listen(move |value| {
            let within_limit = remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();
            if within_limit {
                downstream.push(value.clone());
            }
        });

        taken
    }
}
