// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for Pulse push-based streams.
//!
//! - [`Emitter`]: typed, synchronous listener list for one event kind
//! - [`PulseStream`]: the stream node producers push into and combinators return
//! - [`Upstream`]: non-owning provenance reference to a stream
//! - [`StreamError`]: lifecycle errors reported by the checked `try_*` operations
//!
//! Combinators live in the `pulse-stream` crate.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;

#[macro_use]
mod logging;
pub mod emitter;
pub mod error;
pub mod pulse_stream;
pub mod stream_id;
pub mod upstream;

pub use self::emitter::{Emitter, Listener};
pub use self::error::{Result, StreamError};
pub use self::pulse_stream::PulseStream;
pub use self::stream_id::StreamId;
pub use self::upstream::Upstream;
