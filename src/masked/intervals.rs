use super::{MaskedArray, MaskedGrouping};
use crate::binding::{Binding, Mode};
use crate::error::{Error, Result};
use crate::intervals::symbol_intervals;
use ndarray::{Dimension, Ix2};
use std::fmt::Debug;

/// Extracts congeneric intervals of a masked sequence: one group per unmasked
/// symbol, in first-appearance order.
///
/// Masked symbols contribute no group. Distances are still measured in
/// positions of the full sequence, masked positions included.
///
/// # Errors
///
/// - [`Error::Not1DArray`] if `x` is not one-dimensional;
/// - [`Error::InconsistentMask`] if a symbol is masked at some positions and
///   unmasked at others.
///
/// # Example
///
/// ```
/// use foa_rs::{masked, Binding, MaskedArray, Mode};
///
/// let x = MaskedArray::from_vec(vec![4, 250, 8, 250], vec![true, false, true, false]).unwrap();
/// let groups = masked::intervals(&x, Binding::Start, Mode::Lossy).unwrap();
/// assert_eq!(groups, vec![vec![2]]);
/// ```
pub fn intervals<T, D>(
    x: &MaskedArray<T, D>,
    binding: Binding,
    mode: Mode,
) -> Result<Vec<Vec<usize>>>
where
    T: Ord + Debug,
    D: Dimension,
{
    log::trace!(
        "masked intervals: {} elements, binding={binding}, mode={mode}",
        x.len()
    );
    let grouped = MaskedGrouping::new(x)?;
    let len = grouped.grouping.len();

    Ok(grouped
        .grouping
        .symbols()
        .zip(&grouped.symbol_masks)
        .filter(|(_, masked)| !**masked)
        .map(|(positions, _)| symbol_intervals(positions, len, binding, mode))
        .collect())
}

/// Extracts congeneric intervals from a masked order matrix such as the one
/// produced by [`order`](super::order).
///
/// Each row describes one symbol through its unmasked columns. Fully masked
/// rows are skipped; every other row yields one group. A zero-length 1-D
/// order is the encoding of an empty sequence and yields no groups.
///
/// # Errors
///
/// - [`Error::Not2DArray`] if `order` is not a matrix;
/// - [`Error::InconsistentOrderRow`] if a row holds more than one distinct
///   unmasked value.
pub fn intervals_from_order<D>(
    order: &MaskedArray<usize, D>,
    binding: Binding,
    mode: Mode,
) -> Result<Vec<Vec<usize>>>
where
    D: Dimension,
{
    let ndim = order.ndim();
    if ndim == 1 && order.is_empty() {
        return Ok(Vec::new());
    }
    let data = order
        .data()
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::Not2DArray { ndim })?;
    let mask = order
        .mask()
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::Not2DArray { ndim })?;
    let len = data.ncols();
    log::trace!(
        "intervals_from_order: {} rows of {len}, binding={binding}, mode={mode}",
        data.nrows()
    );

    let mut groups = Vec::with_capacity(data.nrows());
    let mut positions = Vec::with_capacity(len);
    for (row, (values, masks)) in data.rows().into_iter().zip(mask.rows()).enumerate() {
        positions.clear();
        let mut symbol = None;
        for (column, (&value, &masked)) in values.iter().zip(masks.iter()).enumerate() {
            if masked {
                continue;
            }
            match symbol {
                None => symbol = Some(value),
                Some(seen) if seen != value => {
                    log::debug!("order row {row} mixes values {seen} and {value}");
                    return Err(Error::InconsistentOrderRow { row });
                }
                Some(_) => {}
            }
            positions.push(column);
        }
        if symbol.is_some() {
            groups.push(symbol_intervals(&positions, len, binding, mode));
        }
    }
    Ok(groups)
}
