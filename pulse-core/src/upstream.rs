// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamId;
use std::fmt::{self, Debug};
use std::sync::Weak;

/// Type-erased view of a stream's lifecycle, independent of its value type.
pub(crate) trait StreamNode: Send + Sync {
    fn is_ended(&self) -> bool;
}

/// Non-owning provenance reference to a stream of any value type.
///
/// Derived streams record the streams they were wired from as `Upstream`s. The
/// reference is weak: holding it never keeps the upstream alive, and a stream
/// never acts on its own upstream list.
#[derive(Clone)]
pub struct Upstream {
    id: StreamId,
    node: Weak<dyn StreamNode>,
}

impl Upstream {
    pub(crate) fn new(id: StreamId, node: Weak<dyn StreamNode>) -> Self {
        Self { id, node }
    }

    /// Identity of the referenced stream
    #[must_use]
    pub const fn id(&self) -> StreamId {
        self.id
    }

    /// Returns `true` while the referenced stream still exists.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.node.strong_count() > 0
    }

    /// Returns `true` if the referenced stream exists and has ended.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.node.upgrade().is_some_and(|node| node.is_ended())
    }
}

impl PartialEq for Upstream {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Upstream {}

impl Debug for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upstream")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}
