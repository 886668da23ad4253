// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous combinators for Pulse push-based streams.
//!
//! Every operator is an extension trait implemented for
//! [`PulseStream`](pulse_core::PulseStream). Calling an operator subscribes once to
//! the source and returns a new derived stream; values pushed into the source
//! then flow through the whole graph of derived streams, depth-first, before
//! `push` returns.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)** / **[`map_to`](MapExt::map_to)**: transform every value
//! - **[`fold`](FoldExt::fold)** / **[`reduce`](FoldExt::reduce)** /
//!   **[`fold_with`](FoldExt::fold_with)**: running accumulation
//! - **[`max`](ExtremumExt::max)** / **[`min`](ExtremumExt::min)**: running extremum,
//!   emitted only when it changes
//!
//! ### Filtering
//!
//! - **[`filter`](FilterExt::filter)**: values matching a predicate
//! - **[`take`](TakeExt::take)** / **[`drop`](DropExt::drop)**: first n values / all but the first n
//! - **[`take_while`](TakeWhileExt::take_while)** /
//!   **[`drop_while`](DropWhileExt::drop_while)**: prefix while a predicate holds / everything after
//!
//! ### Splitting and combining
//!
//! - **[`merge`](MergeExt::merge)**: both sources in arrival order
//! - **[`partition`](PartitionExt::partition)** / **[`fork`](PartitionExt::fork)**:
//!   true-branch and false-branch
//! - **[`classify`](ClassifyExt::classify)**: one lazily created stream per key
//!
//! ## Lifecycle
//!
//! Ending a source never ends the streams derived from it. A derived stream can
//! be ended explicitly, after which it ignores further values from its source.
//!
//! ## Example
//!
//! ```rust
//! use pulse_stream::prelude::*;
//! use pulse_test_utils::{push_all, Recorder};
//!
//! let readings = PulseStream::new();
//! let (valid, invalid) = readings.partition(|r: &i32| *r >= 0);
//! let peaks = Recorder::attach(&valid.max());
//! let rejected = Recorder::attach(&invalid.fold_with(0u32, |count, _| count + 1));
//!
//! push_all(&readings, [4, -1, 7, 7, -3, 2, 9]);
//!
//! assert_eq!(peaks.values(), vec![4, 7, 9]);
//! assert_eq!(rejected.values(), vec![1, 2]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod classify;
pub mod compare;
pub mod drop_items;
pub mod drop_while;
pub mod extremum;
pub mod filter;
pub mod fold;
pub mod map;
pub mod merge;
pub mod partition;
pub mod prelude;
pub mod take;
pub mod take_while;
mod util;

pub use classify::{ClassifierMap, ClassifyExt};
pub use drop_items::DropExt;
pub use drop_while::DropWhileExt;
pub use extremum::ExtremumExt;
pub use filter::FilterExt;
pub use fold::FoldExt;
pub use map::MapExt;
pub use merge::MergeExt;
pub use partition::PartitionExt;
pub use take::TakeExt;
pub use take_while::TakeWhileExt;
