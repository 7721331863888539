//! Interval extraction.
//!
//! An interval is the distance, in positions, between two consecutive
//! occurrences of the same symbol, or between an occurrence and a sequence
//! edge. [`Binding`] picks the scan direction and [`Mode`] decides what
//! happens to the edge intervals.
//!
//! Two result shapes are produced:
//! - [`intervals`] returns one flat array, where entry `i` is the interval
//!   closing at position `i` (edge intervals elided in lossy mode; in
//!   redundant mode each symbol's tail interval follows its last occurrence);
//! - [`congeneric_intervals`] returns one array per distinct symbol, in
//!   first-appearance order, each group in chronological order.
//!
//! Both group occurrences with a stable sort permutation.

use crate::binding::{Binding, Mode};
use crate::error::Result;
use crate::permutation::{as_1d, Grouping};
use ndarray::{s, ArrayView1, AsArray, Dimension};

/// Extracts the flat interval array of `x`.
///
/// With `Binding::End` the sequence is reversed, scanned with start logic,
/// and the result reversed back.
///
/// # Errors
///
/// [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional.
///
/// # Example
///
/// ```
/// use foa_rs::{intervals, Binding, Mode};
///
/// let x = ["a", "b", "a", "c", "d"];
/// assert_eq!(
///     intervals(&x[..], Binding::Start, Mode::Normal).unwrap(),
///     vec![1, 2, 2, 4, 5]
/// );
/// ```
pub fn intervals<'a, T, D>(
    x: impl AsArray<'a, T, D>,
    binding: Binding,
    mode: Mode,
) -> Result<Vec<usize>>
where
    T: Ord + 'a,
    D: Dimension,
{
    let values = as_1d(x.into())?;
    log::trace!(
        "intervals: {} elements, binding={binding}, mode={mode}",
        values.len()
    );

    Ok(match binding {
        Binding::Start => scan_from_start(values, mode),
        Binding::End => {
            let mut result = scan_from_start(values.slice_move(s![..;-1]), mode);
            result.reverse();
            result
        }
    })
}

/// Extracts one interval array per distinct symbol of `x`.
///
/// Groups follow the alphabet (first-appearance order); inside a group
/// intervals appear in the order they occur along the sequence.
///
/// # Errors
///
/// [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional.
///
/// # Example
///
/// ```
/// use foa_rs::{congeneric_intervals, Binding, Mode};
///
/// let groups = congeneric_intervals(&[2, 4, 2, 2, 4][..], Binding::Start, Mode::Normal).unwrap();
/// assert_eq!(groups, vec![vec![1, 2, 1], vec![2, 3]]);
/// ```
pub fn congeneric_intervals<'a, T, D>(
    x: impl AsArray<'a, T, D>,
    binding: Binding,
    mode: Mode,
) -> Result<Vec<Vec<usize>>>
where
    T: Ord + 'a,
    D: Dimension,
{
    let values = as_1d(x.into())?;
    log::trace!(
        "congeneric_intervals: {} elements, binding={binding}, mode={mode}",
        values.len()
    );

    let grouping = Grouping::new(&values);
    let len = grouping.len();
    Ok(grouping
        .symbols()
        .map(|positions| symbol_intervals(positions, len, binding, mode))
        .collect())
}

/// Start-bound flat scan.
///
/// Each occurrence writes the interval closing at its own position: the gap
/// to the previous occurrence, or the edge correction for a first occurrence.
/// Writing through the grouped positions is the scatter back to sequence
/// order. In redundant mode the tail interval of a symbol is emitted right
/// after the entry of its last occurrence.
fn scan_from_start<T: Ord>(values: ArrayView1<'_, T>, mode: Mode) -> Vec<usize> {
    let grouping = Grouping::new(&values);
    let len = grouping.len();

    let mut result = vec![0; len];
    let mut tails = match mode {
        Mode::Redundant => vec![None; len],
        _ => Vec::new(),
    };

    for positions in grouping.symbols() {
        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            continue;
        };

        // Zero marks a dropped edge interval; real intervals are >= 1.
        result[first] = match mode {
            Mode::Lossy => 0,
            Mode::Normal | Mode::Redundant => first + 1,
            Mode::Cycle => first + len - last,
        };
        for pair in positions.windows(2) {
            result[pair[1]] = pair[1] - pair[0];
        }

        if mode == Mode::Redundant {
            tails[last] = Some(len - last);
        }
    }

    match mode {
        Mode::Lossy => result.retain(|&interval| interval != 0),
        Mode::Redundant => {
            result = result
                .into_iter()
                .zip(tails)
                .flat_map(|(interval, tail)| std::iter::once(interval).chain(tail))
                .collect();
        }
        Mode::Normal | Mode::Cycle => {}
    }
    result
}

/// Intervals of one symbol given its ascending occurrence positions in a
/// sequence of `len` elements.
pub(crate) fn symbol_intervals(
    positions: &[usize],
    len: usize,
    binding: Binding,
    mode: Mode,
) -> Vec<usize> {
    let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(mode.interval_count(positions.len()));
    let gaps = positions.windows(2).map(|pair| pair[1] - pair[0]);

    // Distance from the start edge to the first occurrence, and from the last
    // occurrence to the end edge. Both count the occurrence itself.
    let head = first + 1;
    let tail = len - last;

    match (mode, binding) {
        (Mode::Lossy, _) => result.extend(gaps),
        (Mode::Normal, Binding::Start) => {
            result.push(head);
            result.extend(gaps);
        }
        (Mode::Normal, Binding::End) => {
            result.extend(gaps);
            result.push(tail);
        }
        (Mode::Cycle, Binding::Start) => {
            result.push(head + tail - 1);
            result.extend(gaps);
        }
        (Mode::Cycle, Binding::End) => {
            result.extend(gaps);
            result.push(head + tail - 1);
        }
        (Mode::Redundant, _) => {
            result.push(head);
            result.extend(gaps);
            result.push(tail);
        }
    }
    result
}
