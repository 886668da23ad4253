// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::PulseStream;
use pulse_stream::{FoldExt, MapExt, TakeExt, TakeWhileExt};
use pulse_test_utils::Recorder;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_panicking_mapper_leaves_stream_usable() {
    // Arrange
    let source = PulseStream::new();
    let mapped = source.map(|n: &i32| {
        assert!(*n >= 0, "negative input");
        n * 2
    });
    let recorder = Recorder::attach(&mapped);

    // Act
    source.push(1);
    let result = catch_unwind(AssertUnwindSafe(|| source.push(-1)));
    source.push(2);

    // Assert
    assert!(result.is_err());
    assert_eq!(recorder.values(), vec![2, 4]);
}

#[test]
fn test_panicking_reducer_keeps_previous_accumulator() {
    // Arrange
    let source = PulseStream::new();
    let totals = source.fold(|acc: &i32, v: &i32| {
        assert!(*v != 0, "zero input");
        acc + v
    });
    let recorder = Recorder::attach(&totals);

    // Act
    source.push(5);
    let result = catch_unwind(AssertUnwindSafe(|| source.push(0)));
    source.push(3);

    // Assert
    assert!(result.is_err());
    assert_eq!(recorder.values(), vec![5, 8]);
}

#[test]
fn test_panicking_downstream_listener_still_consumes_take_budget() {
    // Arrange
    let source = PulseStream::new();
    let first_two = source.take(2);
    first_two.listen(|n: &u32| assert!(*n != 1, "boom"));
    let recorder = Recorder::attach(&first_two);

    // Act
    let result = catch_unwind(AssertUnwindSafe(|| source.push(1)));
    source.push(2);
    source.push(3);

    // Assert: the panic happened after the value was counted
    assert!(result.is_err());
    assert_eq!(recorder.values(), vec![2]);
}

#[test]
fn test_panicking_predicate_does_not_close_take_while() {
    // Arrange
    let source = PulseStream::new();
    let small = source.take_while(|n: &i32| {
        assert!(*n != 7, "unlucky");
        *n < 10
    });
    let recorder = Recorder::attach(&small);

    // Act
    source.push(1);
    let result = catch_unwind(AssertUnwindSafe(|| source.push(7)));
    source.push(2);
    source.push(20);
    source.push(3);

    // Assert
    assert!(result.is_err());
    assert_eq!(recorder.values(), vec![1, 2]);
}
