// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::PulseStream;
use pulse_stream::TakeWhileExt;
use pulse_test_utils::test_data::{
    animal_dog, person_alice, person_bob, person_charlie, plant_rose, DataKind, TestData,
};
use pulse_test_utils::{assert_no_element_emitted, push_all, Recorder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_take_while_emits_matching_prefix() {
    // Arrange
    let source = PulseStream::new();
    let people = source.take_while(|data: &TestData| data.kind() == DataKind::Person);
    let recorder = Recorder::attach(&people);

    // Act
    push_all(&source, [person_alice(), person_bob(), animal_dog()]);

    // Assert
    assert_eq!(recorder.values(), vec![person_alice(), person_bob()]);
}

#[test]
fn test_take_while_latch_is_sticky() {
    // Arrange
    let source = PulseStream::new();
    let people = source.take_while(|data: &TestData| data.kind() == DataKind::Person);
    let recorder = Recorder::attach(&people);

    // Act: predicate holds again after failing once
    push_all(
        &source,
        [person_alice(), plant_rose(), person_bob(), person_charlie()],
    );

    // Assert
    assert_eq!(recorder.values(), vec![person_alice()]);
}

#[test]
fn test_take_while_false_immediately() {
    // Arrange
    let source = PulseStream::new();
    let taken = source.take_while(|n: &i32| *n > 0);
    let recorder = Recorder::attach(&taken);

    // Act
    push_all(&source, [0, 1, 2]);

    // Assert
    assert_no_element_emitted(&recorder);
}

#[test]
fn test_take_while_always_true() {
    // Arrange
    let source = PulseStream::new();
    let taken = source.take_while(|_: &i32| true);
    let recorder = Recorder::attach(&taken);

    // Act
    push_all(&source, [3, 2, 1]);

    // Assert
    assert_eq!(recorder.values(), vec![3, 2, 1]);
}

#[test]
fn test_take_while_stops_evaluating_predicate_after_latch() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = PulseStream::new();
    let _taken = source.take_while(move |n: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        *n < 2
    });

    // Act
    push_all(&source, [1, 2, 1, 1]);

    // Assert
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
