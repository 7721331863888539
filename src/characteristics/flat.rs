//! Reducers over a single interval array.
//!
//! Intervals are positive; an empty array yields the neutral value noted on
//! each function instead of failing.

use num_traits::{Float, NumCast};

pub(crate) fn cast<F: Float>(value: usize) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::infinity)
}

/// Product of the intervals. Empty: 1.
pub fn volume<F: Float>(intervals: &[usize]) -> F {
    intervals
        .iter()
        .fold(F::one(), |acc, &interval| acc * cast::<F>(interval))
}

/// `log2` of the volume, summed term by term so long arrays do not overflow.
/// Empty: 0.
pub fn depth<F: Float>(intervals: &[usize]) -> F {
    intervals
        .iter()
        .fold(F::zero(), |acc, &interval| acc + cast::<F>(interval).log2())
}

/// Empty: 0.
pub fn arithmetic_mean<F: Float>(intervals: &[usize]) -> F {
    if intervals.is_empty() {
        return F::zero();
    }
    let sum = intervals
        .iter()
        .fold(F::zero(), |acc, &interval| acc + cast::<F>(interval));
    sum / cast(intervals.len())
}

/// `volume^(1/n)`, computed as `2^(depth/n)`. Empty: 0.
pub fn geometric_mean<F: Float>(intervals: &[usize]) -> F {
    if intervals.is_empty() {
        return F::zero();
    }
    average_remoteness::<F>(intervals).exp2()
}

/// Depth per interval. Empty: 0.
pub fn average_remoteness<F: Float>(intervals: &[usize]) -> F {
    if intervals.is_empty() {
        return F::zero();
    }
    depth::<F>(intervals) / cast(intervals.len())
}
