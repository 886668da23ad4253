// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Typed, synchronous publish/subscribe primitive.
//!
//! An [`Emitter<E>`] holds an ordered list of listeners for a single event kind.
//! [`emit`](Emitter::emit) invokes every listener registered so far, in registration
//! order, on the caller's stack.
//!
//! ## Characteristics
//!
//! - **Synchronous**: `emit` returns only after every listener has run.
//! - **Re-entrant**: no lock is held while listeners run, so a listener may
//!   subscribe to or emit on the same emitter.
//! - **Snapshot dispatch**: listeners registered during an `emit` are first
//!   invoked by the next `emit`.
//! - **No removal**: listeners live as long as the emitter.
//!
//! ## Example
//!
//! ```
//! use pulse_core::Emitter;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let emitter = Emitter::<usize>::new();
//! let total = Arc::new(AtomicUsize::new(0));
//!
//! let sink = total.clone();
//! emitter.subscribe(move |n| {
//!     sink.fetch_add(*n, Ordering::SeqCst);
//! });
//!
//! emitter.emit(&2);
//! emitter.emit(&3);
//! assert_eq!(total.load(Ordering::SeqCst), 5);
//! ```

use parking_lot::Mutex;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// A registered listener for events of type `E`.
pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync + 'static>;

/// Ordered listener list for one event kind.
pub struct Emitter<E: ?Sized> {
    listeners: Mutex<Vec<Listener<E>>>,
}

impl<E: ?Sized> Emitter<E> {
    /// Creates an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Appends `listener` to the end of the listener list.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }

    /// Invokes every registered listener with `event`, in registration order.
    ///
    /// A panicking listener unwinds out of `emit`; listeners after it are not
    /// invoked for this event, but the emitter itself stays usable.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self.listeners.lock().clone();
        for listener in &snapshot {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Returns `true` if no listener has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

impl<E: ?Sized> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.len())
            .finish()
    }
}
