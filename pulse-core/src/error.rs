// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for Pulse stream lifecycle operations.
//!
//! Values flowing through a stream never carry errors: there is no error channel.
//! [`StreamError`] only reports misuse of a stream's lifecycle through the
//! checked `try_*` variants of [`PulseStream`](crate::PulseStream) operations.
//!
//! # Examples
//!
//! ```
//! use pulse_core::{PulseStream, StreamError};
//!
//! let stream = PulseStream::<i32>::new();
//! stream.end();
//!
//! assert_eq!(stream.try_push(1), Err(StreamError::Ended { id: stream.id() }));
//! ```

use crate::StreamId;

/// Errors returned by the checked lifecycle operations of a stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// The stream has already ended and no longer accepts values or a second end.
    #[error("Stream {id} has ended")]
    Ended {
        /// Identity of the stream that rejected the operation
        id: StreamId,
    },
}

impl StreamError {
    /// Create an `Ended` error for the given stream
    #[must_use]
    pub const fn ended(id: StreamId) -> Self {
        Self::Ended { id }
    }

    /// Identity of the stream the error refers to
    #[must_use]
    pub const fn stream_id(&self) -> StreamId {
        match self {
            Self::Ended { id } => *id,
        }
    }
}

/// Specialized Result type for Pulse lifecycle operations
pub type Result<T> = std::result::Result<T, StreamError>;
