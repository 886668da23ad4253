// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Pulse stream library.
//!
//! This crate is for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `Recorder<T>`
//!
//! A sink that listens to a stream and keeps every value it receives, plus the
//! number of `end` notifications:
//!
//! ```rust
//! use pulse_core::PulseStream;
//! use pulse_test_utils::Recorder;
//!
//! let stream = PulseStream::new();
//! let recorder = Recorder::attach(&stream);
//!
//! stream.push(1);
//! stream.push(2);
//! stream.end();
//!
//! assert_eq!(recorder.values(), vec![1, 2]);
//! assert_eq!(recorder.end_count(), 1);
//! ```
//!
//! ## TestData
//!
//! An enum of `Person`, `Animal` and `Plant` fixtures with a hashable
//! [`DataKind`](test_data::DataKind) for classification tests and a
//! [`magnitude`](test_data::TestData::magnitude) for ordering tests:
//!
//! ```rust
//! use pulse_test_utils::test_data::{person_alice, DataKind};
//!
//! let alice = person_alice();
//! assert_eq!(alice.kind(), DataKind::Person);
//! assert_eq!(alice.magnitude(), 25);
//! ```

pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use helpers::{assert_no_element_emitted, push_all};
pub use recorder::Recorder;
pub use test_data::{DataKind, TestData};
