// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pulse
//!
//! Synchronous, push-based reactive streams.
//!
//! A producer pushes values one at a time into a [`PulseStream`]. Every listener
//! and every stream derived from it through the combinators in [`prelude`] runs
//! before `push` returns. There are no tasks, no runtimes and no buffering.
//!
//! ```rust
//! use pulse::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let clicks = PulseStream::new();
//! let totals = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = totals.clone();
//! clicks
//!     .filter(|x: &u32| *x > 0)
//!     .fold(|acc, x| acc + x)
//!     .listen(move |total| sink.lock().unwrap().push(*total));
//!
//! clicks.push(2);
//! clicks.push(0);
//! clicks.push(5);
//!
//! assert_eq!(*totals.lock().unwrap(), vec![2, 7]);
//! ```
//!
//! ## Crates
//!
//! - `pulse-core`: [`PulseStream`], [`Emitter`], [`Upstream`], [`StreamError`]
//! - `pulse-stream`: the operator extension traits and [`ClassifierMap`]
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for stream creation, ending and classifier
//!   growth

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use pulse_core::{Emitter, Listener, PulseStream, Result, StreamError, StreamId, Upstream};
pub use pulse_stream::compare;
pub use pulse_stream::ClassifierMap;

/// Prelude module for convenient imports
pub mod prelude {
    pub use pulse_core::{PulseStream, StreamError, Upstream};
    pub use pulse_stream::prelude::*;
}
