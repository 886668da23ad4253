// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports of every operator trait.
//!
//! ```rust
//! use pulse_stream::prelude::*;
//!
//! let source = PulseStream::new();
//! let _pipeline = source.filter(|n: &u8| *n > 1).map(|n| u32::from(*n)).take(3);
//! ```

pub use crate::classify::{ClassifierMap, ClassifyExt};
pub use crate::drop_items::DropExt;
pub use crate::drop_while::DropWhileExt;
pub use crate::extremum::ExtremumExt;
pub use crate::filter::FilterExt;
pub use crate::fold::FoldExt;
pub use crate::map::MapExt;
pub use crate::merge::MergeExt;
pub use crate::partition::PartitionExt;
pub use crate::take::TakeExt;
pub use crate::take_while::TakeWhileExt;
pub use pulse_core::PulseStream;
