// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::PulseStream;
use pulse_stream::MergeExt;
use pulse_test_utils::test_data::{
    animal_cat, animal_dog, person_alice, person_bob, plant_rose, TestData,
};
use pulse_test_utils::{push_all, Recorder};

#[test]
fn test_merge_forwards_in_arrival_order() {
    // Arrange
    let people = PulseStream::new();
    let animals = PulseStream::new();
    let merged = people.merge(&animals);
    let recorder = Recorder::attach(&merged);

    // Act
    people.push(person_alice());
    animals.push(animal_dog());
    animals.push(animal_cat());
    people.push(person_bob());

    // Assert
    assert_eq!(
        recorder.values(),
        vec![person_alice(), animal_dog(), animal_cat(), person_bob()]
    );
}

#[test]
fn test_merge_count_is_sum_of_sources() {
    // Arrange
    let left = PulseStream::new();
    let right = PulseStream::new();
    let recorder = Recorder::attach(&left.merge(&right));

    // Act
    push_all(&left, 0..5);
    push_all(&right, 10..13);
    push_all(&left, 5..7);

    // Assert: per-source order preserved
    let values = recorder.values();
    assert_eq!(values.len(), 7 + 3);
    let from_left: Vec<_> = values.iter().copied().filter(|v| *v < 10).collect();
    let from_right: Vec<_> = values.iter().copied().filter(|v| *v >= 10).collect();
    assert_eq!(from_left, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(from_right, vec![10, 11, 12]);
}

#[test]
fn test_merge_with_itself_duplicates_values() {
    // Arrange
    let source = PulseStream::new();
    let recorder = Recorder::attach(&source.merge(&source));

    // Act
    source.push(plant_rose());

    // Assert
    assert_eq!(recorder.values(), vec![plant_rose(), plant_rose()]);
}

#[test]
fn test_merge_survives_one_source_ending() {
    // Arrange
    let left = PulseStream::<TestData>::new();
    let right = PulseStream::<TestData>::new();
    let merged = left.merge(&right);
    let recorder = Recorder::attach(&merged);

    // Act
    left.end();
    left.push(person_alice());
    right.push(animal_dog());

    // Assert
    assert_eq!(recorder.values(), vec![animal_dog()]);
    assert!(!merged.is_ended());
}

#[test]
fn test_merge_records_both_upstreams() {
    let left = PulseStream::<u8>::new();
    let right = PulseStream::<u8>::new();
    let merged = left.merge(&right);

    let ids: Vec<_> = merged.upstreams().iter().map(|u| u.id()).collect();
    assert_eq!(ids, vec![left.id(), right.id()]);
}
