// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fold operator that emits a running accumulation of a stream.
//!
//! [`fold`](FoldExt::fold) (alias [`reduce`](FoldExt::reduce)) uses the first value
//! as the initial accumulator and emits it unchanged; every later value `v` emits
//! `acc = reducer(&acc, &v)`.
//!
//! [`fold_with`](FoldExt::fold_with) starts from an explicit seed, so the reducer
//! runs for every value, including the first, and the accumulator type may
//! differ from the value type.
//!
//! ## Characteristics
//!
//! - **Stateful**: one accumulator per derived stream, never reset
//! - **One-to-one**: exactly one output per input
//! - **Panic-safe**: the accumulator is only replaced after the reducer returns,
//!   so a panicking reducer leaves the previous accumulator in place
//! - **Serialized**: one step (read, reduce, store, push) runs at a time per
//!   derived stream, so pushes from several threads never lose an update and
//!   the outputs appear in accumulation order. The step lock is re-entrant, so
//!   the reducer and downstream listeners may push into the same pipeline
//!
//! ## Example
//!
//! ```rust
//! use pulse_core::PulseStream;
//! use pulse_stream::FoldExt;
//! use pulse_test_utils::{push_all, Recorder};
//!
//! let source = PulseStream::new();
//! let sums = source.fold(|acc: &i32, v: &i32| acc + v);
//! let counts = source.fold_with(0usize, |count, _| count + 1);
//! let sums_rec = Recorder::attach(&sums);
//! let counts_rec = Recorder::attach(&counts);
//!
//! push_all(&source, [3, 4, 5]);
//!
//! assert_eq!(sums_rec.values(), vec![3, 7, 12]);
//! assert_eq!(counts_rec.values(), vec![1, 2, 3]);
//! ```

use crate::util::child_of;
use parking_lot::ReentrantMutex;
use pulse_core::PulseStream;
use std::cell::RefCell;

/// Extension trait providing the `fold` family of operators for Pulse streams.
pub trait FoldExt<T> {
    /// Running accumulation seeded by the first value.
    fn fold<F>(&self, reducer: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> T + Send + Sync + 'static;

    /// Alias for [`fold`](Self::fold).
    fn reduce<F>(&self, reducer: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> T + Send + Sync + 'static,
    {
        self.fold(reducer)
    }

    /// Running accumulation starting from `seed`.
    fn fold_with<A, F>(&self, seed: A, reducer: F) -> PulseStream<A>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(&A, &T) -> A + Send + Sync + 'static;
}

impl<T> FoldExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn fold<F>(&self, reducer: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> T + Send + Sync + 'static,
    {
        let folded = child_of(self);
        let downstream = folded.clone();
        let acc: ReentrantMutex<RefCell<Option<T>>> = ReentrantMutex::new(RefCell::new(None));

        self.listen(move |value| {
            let step = acc.lock();
            // No borrow is held across the reducer or the push, both may re-enter.
            let previous = step.borrow().clone();
            let next = match previous {
                Some(previous) => reducer(&previous, value),
                None => value.clone(),
            };
            *step.borrow_mut() = Some(next.clone());
            downstream.push(next);
        });

        folded
    }

    fn fold_with<A, F>(&self, seed: A, reducer: F) -> PulseStream<A>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(&A, &T) -> A + Send + Sync + 'static,
    {
        let folded = child_of(self);
        let downstream = folded.clone();
        let acc = ReentrantMutex::new(RefCell::new(seed));

        self.listen(move |value| {
            let step = acc.lock();
            let previous = step.borrow().clone();
            let next = reducer(&previous, value);
            *step.borrow_mut() = next.clone();
            downstream.push(next);
        });

        folded
    }
}
