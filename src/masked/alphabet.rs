use super::{MaskedArray, MaskedGrouping};
use crate::error::Result;
use ndarray::{Dimension, Ix1};
use std::fmt::Debug;

/// Returns the alphabet of a masked sequence.
///
/// Entries are in first-appearance order (masked positions included); an entry
/// is masked when its symbol only ever appears masked.
///
/// # Errors
///
/// - [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional;
/// - [`Error::InconsistentMask`](crate::Error::InconsistentMask) if a symbol is
///   masked at some positions and unmasked at others.
///
/// # Example
///
/// ```
/// use foa_rs::{masked, MaskedArray};
///
/// let x = MaskedArray::from_vec(
///     vec!["a", "c", "c", "e", "d", "a"],
///     vec![false, false, false, true, false, false],
/// )
/// .unwrap();
/// let alphabet = masked::alphabet(&x).unwrap();
/// assert_eq!(alphabet.compressed(), vec!["a", "c", "d"]);
/// assert!(alphabet.is_masked(2));
/// ```
pub fn alphabet<T, D>(x: &MaskedArray<T, D>) -> Result<MaskedArray<T, Ix1>>
where
    T: Ord + Clone + Debug,
    D: Dimension,
{
    log::trace!("masked alphabet: {} elements", x.len());
    Ok(MaskedGrouping::new(x)?.alphabet())
}
