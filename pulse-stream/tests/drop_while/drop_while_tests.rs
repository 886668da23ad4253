// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::PulseStream;
use pulse_stream::{DropWhileExt, TakeWhileExt};
use pulse_test_utils::test_data::{
    animal_dog, person_alice, person_bob, plant_rose, DataKind, TestData,
};
use pulse_test_utils::{assert_no_element_emitted, push_all, Recorder};

#[test]
fn test_drop_while_forwards_from_first_failure() {
    // Arrange
    let source = PulseStream::new();
    let rest = source.drop_while(|data: &TestData| data.kind() == DataKind::Person);
    let recorder = Recorder::attach(&rest);

    // Act
    push_all(&source, [person_alice(), animal_dog(), person_bob(), plant_rose()]);

    // Assert: the failing value and everything after it
    assert_eq!(
        recorder.values(),
        vec![animal_dog(), person_bob(), plant_rose()]
    );
}

#[test]
fn test_drop_while_always_true_forwards_nothing() {
    // Arrange
    let source = PulseStream::new();
    let rest = source.drop_while(|_: &i32| true);
    let recorder = Recorder::attach(&rest);

    // Act
    push_all(&source, [1, 2, 3]);

    // Assert
    assert_no_element_emitted(&recorder);
}

#[test]
fn test_drop_while_false_immediately_forwards_everything() {
    // Arrange
    let source = PulseStream::new();
    let rest = source.drop_while(|n: &i32| *n > 10);
    let recorder = Recorder::attach(&rest);

    // Act
    push_all(&source, [1, 20, 2]);

    // Assert
    assert_eq!(recorder.values(), vec![1, 20, 2]);
}

#[test]
fn test_take_while_and_drop_while_split_the_sequence() {
    // Arrange
    let source = PulseStream::new();
    let head = Recorder::attach(&source.take_while(|n: &i32| *n < 4));
    let tail = Recorder::attach(&source.drop_while(|n: &i32| *n < 4));

    // Act
    push_all(&source, [1, 2, 5, 3, 9]);

    // Assert
    assert_eq!(head.values(), vec![1, 2]);
    assert_eq!(tail.values(), vec![5, 3, 9]);
}
