// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator that transforms every value of a stream.
//!
//! ## Characteristics
//!
//! - **Synchronous**: the mapper runs inside the upstream `push`
//! - **One-to-one**: exactly one output per input
//! - **Not terminal-aware**: ending the source does not end the mapped stream

use crate::util::child_of;
use pulse_core::PulseStream;

/// Extension trait providing the `map` operator for Pulse streams.
pub trait MapExt<T> {
    /// Derives a stream that receives `mapper(v)` for every value `v` of this stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::PulseStream;
    /// use pulse_stream::MapExt;
    /// use pulse_test_utils::Recorder;
    ///
    /// let source = PulseStream::new();
    /// let lengths = source.map(|s: &String| s.len());
    /// let recorder = Recorder::attach(&lengths);
    ///
    /// source.push("pulse".to_string());
    /// source.push("go".to_string());
    ///
    /// assert_eq!(recorder.values(), vec![5, 2]);
    /// ```
    fn map<U, F>(&self, mapper: F) -> PulseStream<U>
    where
        U: Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static;

    /// Derives a stream that receives a clone of `value` for every value of this stream.
    fn map_to<U>(&self, value: U) -> PulseStream<U>
    where
        U: Clone + Send + Sync + 'static;
}

impl<T> MapExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn map<U, F>(&self, mapper: F) -> PulseStream<U>
    where
        U: Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let mapped = child_of(self);
        let downstream = mapped.clone();
        self.listen(move |value| downstream.push(mapper(value)));
        mapped
    }

    fn map_to<U>(&self, value: U) -> PulseStream<U>
    where
        U: Clone + Send + Sync + 'static,
    {
        self.map(move |_| value.clone())
    }
}
