// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based, multi-subscriber stream.
//!
//! A [`PulseStream`] delivers each pushed value to all of its `data` listeners
//! synchronously, then optionally ends exactly once.
//!
//! ## Characteristics
//!
//! - **Hot**: listeners only see values pushed after they were registered.
//! - **Synchronous**: [`push`](PulseStream::push) returns after every listener,
//!   and everything wired downstream of them, has run.
//! - **Unbuffered**: a value pushed with no listeners is simply dropped.
//! - **Shared**: cheap to clone; all clones are handles to the same stream.
//! - **Terminal**: after [`end`](PulseStream::end), pushes are ignored. Ending
//!   does not unsubscribe listeners and does not end derived streams.
//!
//! ## Example
//!
//! ```
//! use pulse_core::PulseStream;
//! use std::sync::{Arc, Mutex};
//!
//! let stream = PulseStream::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! stream.listen(move |value| sink.lock().unwrap().push(*value));
//!
//! stream.push(1);
//! stream.push(2);
//! stream.end();
//! stream.push(3); // ignored
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::upstream::StreamNode;
use crate::{Emitter, Result, StreamError, StreamId, Upstream};
use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

struct StreamState<T> {
    id: StreamId,
    ended: AtomicBool,
    data: Emitter<T>,
    end: Emitter<()>,
    upstreams: Vec<Upstream>,
}

impl<T> StreamNode for StreamState<T> {
    fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }
}

/// A hot, synchronous stream that broadcasts pushed values to its listeners.
///
/// `PulseStream` is both the entry point producers push into and the node type
/// every combinator returns. See the [module documentation](self) for details.
pub struct PulseStream<T> {
    state: Arc<StreamState<T>>,
}

impl<T: 'static> PulseStream<T> {
    /// Creates a root stream with no listeners and no upstreams.
    #[must_use]
    pub fn new() -> Self {
        Self::derived(Vec::new())
    }

    /// Creates a root stream with `listener` already registered for `data`.
    #[must_use]
    pub fn with_listener<F>(listener: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let stream = Self::new();
        stream.listen(listener);
        stream
    }

    /// Creates a stream that records `upstreams` as its provenance.
    ///
    /// The list is stored as given and never acted upon: no subscription is made
    /// and ending an upstream has no effect on this stream. Combinators use this
    /// to record where a derived stream came from.
    #[must_use]
    pub fn derived(upstreams: Vec<Upstream>) -> Self {
        let id = StreamId::next();
        debug!(
            "created {} (upstreams: {:?})",
            id,
            upstreams.iter().map(Upstream::id).collect::<Vec<_>>()
        );

        Self {
            state: Arc::new(StreamState {
                id,
                ended: AtomicBool::new(false),
                data: Emitter::new(),
                end: Emitter::new(),
                upstreams,
            }),
        }
    }

    /// Identity of this stream.
    #[must_use]
    pub fn id(&self) -> StreamId {
        self.state.id
    }

    /// Returns `true` once [`end`](Self::end) has been called.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    /// Provenance recorded at construction; empty for root streams.
    #[must_use]
    pub fn upstreams(&self) -> &[Upstream] {
        &self.state.upstreams
    }

    /// A non-owning reference to this stream, for recording provenance.
    #[must_use]
    pub fn as_upstream(&self) -> Upstream {
        let weak = Arc::downgrade(&self.state);
        let node: Weak<dyn StreamNode> = weak;
        Upstream::new(self.state.id, node)
    }

    /// Number of registered `data` listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.data.len()
    }

    /// Registers `listener` to receive every value pushed from now on.
    ///
    /// Registrations accumulate; there is no way to unsubscribe.
    pub fn listen<F>(&self, listener: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.state.data.subscribe(listener);
    }

    /// Registers `listener` to be invoked when the stream ends.
    pub fn on_end<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.state.end.subscribe(move |_: &()| listener());
    }

    /// Delivers `value` to every `data` listener, in registration order.
    ///
    /// Does nothing if the stream has ended.
    pub fn push(&self, value: T) {
        if self.is_ended() {
            trace!("{} ignored a push after end", self.state.id);
            return;
        }
        self.state.data.emit(&value);
    }

    /// Like [`push`](Self::push), but reports a push after end.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Ended`] if the stream has ended.
    pub fn try_push(&self, value: T) -> Result<()> {
        if self.is_ended() {
            return Err(StreamError::ended(self.state.id));
        }
        self.state.data.emit(&value);
        Ok(())
    }

    /// Ends the stream and notifies `end` listeners.
    ///
    /// Ending is idempotent: only the first call notifies listeners.
    pub fn end(&self) {
        if self.try_end().is_err() {
            warn!("{} was ended more than once", self.state.id);
        }
    }

    /// Like [`end`](Self::end), but reports a repeated end.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Ended`] if the stream had already ended.
    pub fn try_end(&self) -> Result<()> {
        if self.state.ended.swap(true, Ordering::SeqCst) {
            return Err(StreamError::ended(self.state.id));
        }
        debug!("{} ended", self.state.id);
        self.state.end.emit(&());
        Ok(())
    }
}

impl<T: 'static> Default for PulseStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PulseStream<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Debug for PulseStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PulseStream")
            .field("id", &self.state.id)
            .field("ended", &self.state.is_ended())
            .field("listeners", &self.state.data.len())
            .field("upstreams", &self.state.upstreams)
            .finish()
    }
}
