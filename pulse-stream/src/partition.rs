// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Partition operator that splits a stream into two based on a predicate.
//!
//! The [`partition`](PartitionExt::partition) operator routes each value to one of two
//! derived streams. Values satisfying the predicate go to the "true" stream, the
//! others go to the "false" stream.
//!
//! ## Characteristics
//!
//! - **Routing**: every value goes to exactly one output stream
//! - **Order-preserving**: each branch sees its values in arrival order
//! - **Single evaluation**: the predicate runs once per value
//! - **Hot**: values pushed before a branch has listeners are not buffered
//!
//! ## Example
//!
//! ```rust
//! use pulse_core::PulseStream;
//! use pulse_stream::PartitionExt;
//! use pulse_test_utils::{push_all, Recorder};
//!
//! let source = PulseStream::new();
//! let (evens, odds) = source.partition(|n: &i32| n % 2 == 0);
//! let evens = Recorder::attach(&evens);
//! let odds = Recorder::attach(&odds);
//!
//! push_all(&source, 1..=6);
//!
//! assert_eq!(evens.values(), vec![2, 4, 6]);
//! assert_eq!(odds.values(), vec![1, 3, 5]);
//! ```

use crate::util::child_of;
use pulse_core::PulseStream;

/// Extension trait providing the `partition` operator for Pulse streams.
pub trait PartitionExt<T> {
    /// Splits the stream into `(matching, non_matching)` streams.
    ///
    /// See the [module-level documentation](crate::partition) for details.
    fn partition<F>(&self, predicate: F) -> (PulseStream<T>, PulseStream<T>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;

    /// Alias for [`partition`](Self::partition).
    fn fork<F>(&self, predicate: F) -> (PulseStream<T>, PulseStream<T>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.partition(predicate)
    }
}

impl<T> PartitionExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn partition<F>(&self, predicate: F) -> (PulseStream<T>, PulseStream<T>)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let matching = child_of(self);
        let non_matching = child_of(self);

        let on_true = matching.clone();
        let on_false = non_matching.clone();
        self.listen(move |value| {
            if predicate(value) {
                on_true.push(value.clone());
            } else {
                on_false.push(value.clone());
            }
        });

        (matching, non_matching)
    }
}
