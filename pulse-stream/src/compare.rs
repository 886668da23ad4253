// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Comparison helpers shared by the ordering operators.

use std::cmp::Ordering;

/// Natural ordering for any `PartialOrd` type.
///
/// `a < b` is `Less`, `a > b` is `Greater`, anything else (equal or
/// incomparable, such as a `NaN`) is `Equal`.
///
/// ```
/// use pulse_stream::compare::natural_order;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_order(&1, &2), Ordering::Less);
/// assert_eq!(natural_order(&f64::NAN, &1.0), Ordering::Equal);
/// ```
pub fn natural_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Reverses a comparator.
pub fn reversed<T, F>(compare: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    move |a, b| compare(b, a)
}
