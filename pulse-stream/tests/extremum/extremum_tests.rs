// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::PulseStream;
use pulse_stream::ExtremumExt;
use pulse_test_utils::test_data::{
    animal_bird, animal_cat, animal_dog, animal_spider, plant_fern, plant_rose, plant_sunflower,
    TestData,
};
use pulse_test_utils::{push_all, Recorder};

#[test]
fn test_max_emits_only_new_maxima() {
    // Arrange
    let source = PulseStream::new();
    let highs = source.max();
    let recorder = Recorder::attach(&highs);

    // Act
    push_all(&source, [3, 1, 4, 1, 5, 9, 2, 6]);

    // Assert
    assert_eq!(recorder.values(), vec![3, 4, 5, 9]);
}

#[test]
fn test_min_emits_only_new_minima() {
    // Arrange
    let source = PulseStream::new();
    let lows = source.min();
    let recorder = Recorder::attach(&lows);

    // Act
    push_all(&source, [3, 1, 4, 1, 5, 0, 2, -6]);

    // Assert
    assert_eq!(recorder.values(), vec![3, 1, 0, -6]);
}

#[test]
fn test_max_ties_do_not_reemit() {
    // Arrange
    let source = PulseStream::new();
    let recorder = Recorder::attach(&source.max());

    // Act
    push_all(&source, [5, 5, 5, 6, 6]);

    // Assert
    assert_eq!(recorder.values(), vec![5, 6]);
}

#[test]
fn test_max_by_custom_comparator_keeps_first_of_equals() {
    // Arrange: dog and cat both have four legs
    let source = PulseStream::new();
    let most_legs = source.max_by(|a: &TestData, b: &TestData| a.magnitude().cmp(&b.magnitude()));
    let recorder = Recorder::attach(&most_legs);

    // Act
    push_all(
        &source,
        [animal_bird(), animal_dog(), animal_cat(), animal_spider()],
    );

    // Assert
    assert_eq!(
        recorder.values(),
        vec![animal_bird(), animal_dog(), animal_spider()]
    );
}

#[test]
fn test_min_by_custom_comparator() {
    // Arrange
    let source = PulseStream::new();
    let shortest = source.min_by(|a: &TestData, b: &TestData| a.magnitude().cmp(&b.magnitude()));
    let recorder = Recorder::attach(&shortest);

    // Act
    push_all(&source, [plant_fern(), plant_sunflower(), plant_rose()]);

    // Assert
    assert_eq!(recorder.values(), vec![plant_fern(), plant_rose()]);
}

#[test]
fn test_max_floats_ignores_nan() {
    // Arrange: NaN compares Equal to everything, so it never replaces the maximum
    let source = PulseStream::new();
    let recorder = Recorder::attach(&source.max());

    // Act
    push_all(&source, [1.5_f64, f64::NAN, 0.5, 2.5]);

    // Assert
    assert_eq!(recorder.values(), vec![1.5, 2.5]);
}

#[test]
fn test_max_output_is_strictly_increasing() {
    // Arrange
    let source = PulseStream::new();
    let recorder = Recorder::attach(&source.max());

    // Act
    push_all(&source, [7u64, 3, 11, 11, 2, 13, 13, 1, 20, 19]);

    // Assert
    let values = recorder.values();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(values, vec![7, 11, 13, 20]);
}

#[test]
fn test_max_with_concurrent_producers_stays_strictly_increasing() {
    // Arrange
    let source = PulseStream::<u32>::new();
    let highs = Recorder::attach(&source.max());

    // Act: each producer walks an interleaved slice of 0..800
    std::thread::scope(|scope| {
        for offset in 0..4u32 {
            let producer = source.clone();
            scope.spawn(move || push_all(&producer, (0..200).map(move |i| i * 4 + offset)));
        }
    });

    // Assert
    let highs = highs.values();
    assert!(highs.windows(2).all(|pair| pair[0] < pair[1]), "{highs:?}");
    assert_eq!(highs.last().copied(), Some(799));
}

#[test]
fn test_min_with_concurrent_producers_stays_strictly_decreasing() {
    // Arrange
    let source = PulseStream::<i64>::new();
    let lows = Recorder::attach(&source.min());

    // Act
    std::thread::scope(|scope| {
        for offset in 0..4i64 {
            let producer = source.clone();
            scope.spawn(move || push_all(&producer, (0..200).map(move |i| -(i * 4 + offset))));
        }
    });

    // Assert
    let lows = lows.values();
    assert!(lows.windows(2).all(|pair| pair[0] > pair[1]), "{lows:?}");
    assert_eq!(lows.last().copied(), Some(-799));
}
