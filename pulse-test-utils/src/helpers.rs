// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Recorder;
use pulse_core::PulseStream;
use std::fmt::Debug;

/// Pushes every value of `values` into `stream`, in order.
pub fn push_all<T, I>(stream: &PulseStream<T>, values: I)
where
    T: 'static,
    I: IntoIterator<Item = T>,
{
    for value in values {
        stream.push(value);
    }
}

pub fn assert_no_element_emitted<T>(recorder: &Recorder<T>)
where
    T: Clone + Debug + Send + Sync + 'static,
{
    let values = recorder.values();
    assert!(
        values.is_empty(),
        "Unexpected values emitted, expected no output: {values:?}"
    );
}
