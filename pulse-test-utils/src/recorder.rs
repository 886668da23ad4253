// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::PulseStream;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Listener that records every value and `end` notification of a stream.
///
/// Clones share the same recording.
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
    ends: Arc<AtomicUsize>,
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    /// Registers a recorder as both a `data` and an `end` listener of `stream`.
    pub fn attach(stream: &PulseStream<T>) -> Self {
        let recorder = Self {
            values: Arc::new(Mutex::new(Vec::new())),
            ends: Arc::new(AtomicUsize::new(0)),
        };

        let values = Arc::clone(&recorder.values);
        stream.listen(move |value: &T| values.lock().push(value.clone()));

        let ends = Arc::clone(&recorder.ends);
        stream.on_end(move || {
            ends.fetch_add(1, Ordering::SeqCst);
        });

        recorder
    }

    /// Everything recorded so far, in arrival order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    /// Returns the recorded values and clears the recording.
    #[must_use]
    pub fn drain(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }

    /// Number of values recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns `true` if no value has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Number of `end` notifications received.
    #[must_use]
    pub fn end_count(&self) -> usize {
        self.ends.load(Ordering::SeqCst)
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            ends: Arc::clone(&self.ends),
        }
    }
}
