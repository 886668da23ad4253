// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge operator that combines two streams into one.
//!
//! Every value pushed into either source is forwarded as it arrives. There is no
//! reordering: the output order is exactly the order in which the two sources
//! dispatched their values. Both sources are recorded as upstreams.
//!
//! Ending either source, or both, does not end the merged stream.

use pulse_core::PulseStream;

/// Extension trait providing the `merge` operator for Pulse streams.
pub trait MergeExt<T> {
    /// Derives a stream that receives every value of `self` and of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::MergeExt;
    /// use pulse_test_utils::Recorder;
    ///
    /// let left = PulseStream::new();
    /// let right = PulseStream::new();
    /// let merged = left.merge(&right);
    /// let recorder = Recorder::attach(&merged);
    ///
    /// left.push("l1");
    /// right.push("r1");
    /// left.push("l2");
    ///
    /// assert_eq!(recorder.values(), vec!["l1", "r1", "l2"]);
    /// ```
    fn merge(&self, other: &PulseStream<T>) -> PulseStream<T>;
}

impl<T> MergeExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn merge(&self, other: &PulseStream<T>) -> PulseStream<T> {
        let merged = PulseStream::derived(vec![self.as_upstream(), other.as_upstream()]);

        for source in [self, other] {
            let downstream = merged.clone();
            source.listen(move |value: &T| downstream.push(value.clone()));
        }

        merged
    }
}
