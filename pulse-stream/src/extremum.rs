// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running maximum and minimum operators.
//!
//! The derived stream emits the first value, then every value that is strictly
//! greater ([`max`](ExtremumExt::max)) or strictly less ([`min`](ExtremumExt::min))
//! than the current extremum. A value comparing `Equal` to the current extremum
//! does not replace it, so the output never repeats an unchanged extremum and is
//! strictly monotonic under the comparator, even with several producer threads.
//!
//! ## Example
//!
//! ```rust
//! use pulse_core::PulseStream;
//! use pulse_stream::ExtremumExt;
//! use pulse_test_utils::{push_all, Recorder};
//!
//! let source = PulseStream::new();
//! let highs = Recorder::attach(&source.max());
//! let lows = Recorder::attach(&source.min());
//!
//! push_all(&source, [3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! assert_eq!(highs.values(), vec![3, 4, 5, 9]);
//! assert_eq!(lows.values(), vec![3, 1]);
//! ```

use crate::compare::{natural_order, reversed};
use crate::util::child_of;
use parking_lot::ReentrantMutex;
use pulse_core::PulseStream;
use std::cell::RefCell;
use std::cmp::Ordering;

/// Extension trait providing the running `max`/`min` operators for Pulse streams.
pub trait ExtremumExt<T> {
    /// Running maximum under [`natural_order`].
    fn max(&self) -> PulseStream<T>
    where
        T: PartialOrd;

    /// Running maximum under `compare`.
    fn max_by<F>(&self, compare: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static;

    /// Running minimum under [`natural_order`].
    fn min(&self) -> PulseStream<T>
    where
        T: PartialOrd;

    /// Running minimum under `compare`.
    fn min_by<F>(&self, compare: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static;
}

impl<T> ExtremumExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn max(&self) -> PulseStream<T>
    where
        T: PartialOrd,
    {
        running_greatest(self, natural_order::<T>)
    }

    fn max_by<F>(&self, compare: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        running_greatest(self, compare)
    }

    fn min(&self) -> PulseStream<T>
    where
        T: PartialOrd,
    {
        running_greatest(self, reversed(natural_order::<T>))
    }

    fn min_by<F>(&self, compare: F) -> PulseStream<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        running_greatest(self, reversed(compare))
    }
}

fn running_greatest<T, F>(source: &PulseStream<T>, compare: F) -> PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    let extremum = child_of(source);
    let downstream = extremum.clone();
    let current: ReentrantMutex<RefCell<Option<T>>> = ReentrantMutex::new(RefCell::new(None));

    source.listen(move |value| {
        // Held through the push so concurrent producers cannot reorder the output.
        let step = current.lock();
        let best = step.borrow().clone();
        let replaces = match best {
            Some(best) => compare(value, &best) == Ordering::Greater,
            None => true,
        };
        if replaces {
            *step.borrow_mut() = Some(value.clone());
            downstream.push(value.clone());
        }
    });

    extremum
}
