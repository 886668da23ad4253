// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::PulseStream;

/// Creates an empty stream that records `source` as its only upstream.
pub(crate) fn child_of<T: 'static, U: 'static>(source: &PulseStream<T>) -> PulseStream<U> {
    PulseStream::derived(vec![source.as_upstream()])
}
