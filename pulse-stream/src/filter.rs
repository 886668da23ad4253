// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator that forwards only the values matching a predicate.

use crate::util::child_of;
use pulse_core::PulseStream;

/// Extension trait providing the `filter` operator for Pulse streams.
pub trait FilterExt<T> {
    /// Derives a stream that receives each value for which `predicate` returns `true`.
    ///
    /// Arrival order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::{FilterExt, MapExt};
    /// use pulse_test_utils::{push_all, Recorder};
    ///
    /// let source = PulseStream::new();
    /// let scaled = source.filter(|n: &i32| n % 2 == 0).map(|n| n * 10);
    /// let recorder = Recorder::attach(&scaled);
    ///
    /// push_all(&source, 1..=5);
    ///
    /// assert_eq!(recorder.values(), vec![20, 40]);
    /// ```
    fn filter<F>(&self, predicate: F) -> PulseStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T> FilterExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn filter<F>(&self, predicate: F) -> PulseStream<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let filtered = child_of(self);
        let downstream = filtered.clone();
        self.listen(move |value| {
            if predicate(value) {
                downstream.push(value.clone());
            }
        });
        filtered
    }
}
