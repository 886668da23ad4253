// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Classify operator that routes values to lazily created per-key streams.
//!
//! [`classify`](ClassifyExt::classify) computes a key for every value and pushes
//! the value into the child stream registered for that key in the returned
//! [`ClassifierMap`]. A child is created the first time its key is needed, either
//! by a routed value or by [`ClassifierMap::get`], and lives as long as the map.
//!
//! ## Characteristics
//!
//! - **Lazy**: no child exists for a key until a value with that key is routed
//!   or the key is requested
//! - **Stable**: the same key always yields the same child stream
//! - **Order-preserving**: each child sees its values in arrival order
//! - **Hot**: subscribe to a child before values with its key arrive, or use
//!   [`get`](ClassifierMap::get) to create it up front
//!
//! Keys are any `Eq + Hash + Clone` type; there is no implicit conversion of
//! values to keys.
//!
//! ## Example
//!
//! ```rust
//! use pulse_core::PulseStream;
//! use pulse_stream::ClassifyExt;
//! use pulse_test_utils::Recorder;
//!
//! let source = PulseStream::new();
//! let by_letter = source.classify(|word: &&str| word.chars().next());
//!
//! let a = Recorder::attach(&by_letter.get(Some('a')));
//! source.push("a1");
//! let b = Recorder::attach(&by_letter.get(Some('b')));
//! source.push("b2");
//! source.push("a3");
//!
//! assert_eq!(a.values(), vec!["a1", "a3"]);
//! assert_eq!(b.values(), vec!["b2"]);
//! ```

use parking_lot::Mutex;
use pulse_core::{debug, PulseStream, Upstream};
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

struct ClassifierState<K, T> {
    parent: Upstream,
    children: Mutex<HashMap<K, PulseStream<T>>>,
}

/// Registry of per-key child streams produced by [`classify`](ClassifyExt::classify).
///
/// Cheap to clone; all clones share the same registry.
pub struct ClassifierMap<K, T> {
    state: Arc<ClassifierState<K, T>>,
}

impl<K, T> ClassifierMap<K, T>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn new(parent: Upstream) -> Self {
        Self {
            state: Arc::new(ClassifierState {
                parent,
                children: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Returns the child stream for `key`, creating it if it does not exist yet.
    pub fn get(&self, key: K) -> PulseStream<T> {
        let mut children = self.state.children.lock();
        children
            .entry(key)
            .or_insert_with(|| {
                let child = PulseStream::derived(vec![self.state.parent.clone()]);
                debug!(
                    "classifier of {} created child {}",
                    self.state.parent.id(),
                    child.id()
                );
                child
            })
            .clone()
    }

    /// Returns `true` if a child stream exists for `key`. Never creates one.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.state.children.lock().contains_key(key)
    }

    /// Number of child streams created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.children.lock().len()
    }

    /// Returns `true` if no child stream has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.children.lock().is_empty()
    }

    /// Keys with a child stream, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.state.children.lock().keys().cloned().collect()
    }

    /// The stream being classified.
    #[must_use]
    pub fn parent(&self) -> &Upstream {
        &self.state.parent
    }
}

impl<K, T> Clone for ClassifierMap<K, T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<K, T> Debug for ClassifierMap<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierMap")
            .field("parent", &self.state.parent)
            .field("children", &self.state.children.lock().len())
            .finish()
    }
}

/// Extension trait providing the `classify` operator for Pulse streams.
pub trait ClassifyExt<T> {
    /// Routes every value into the child stream for `classifier(value)`.
    ///
    /// See the [module-level documentation](crate::classify) for details.
    fn classify<K, F>(&self, classifier: F) -> ClassifierMap<K, T>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static;
}

impl<T> ClassifyExt<T> for PulseStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn classify<K, F>(&self, classifier: F) -> ClassifierMap<K, T>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let map = ClassifierMap::new(self.as_upstream());
        let routes = map.clone();

        self.listen(move |value| {
            let child = routes.get(classifier(value));
            child.push(value.clone());
        });

        map
    }
}
