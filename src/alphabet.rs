use crate::error::Result;
use crate::permutation::{as_1d, Grouping};
use ndarray::{AsArray, Dimension};

/// Returns the distinct values of `x` in order of first appearance.
///
/// Runs in O(n log n) and needs only `Ord` from the symbols.
///
/// # Errors
///
/// [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional.
///
/// # Example
///
/// ```
/// use foa_rs::alphabet;
///
/// let symbols = alphabet(&["a", "c", "c", "e", "d", "a"][..]).unwrap();
/// assert_eq!(symbols, vec!["a", "c", "e", "d"]);
/// ```
pub fn alphabet<'a, T, D>(x: impl AsArray<'a, T, D>) -> Result<Vec<T>>
where
    T: Ord + Clone + 'a,
    D: Dimension,
{
    let values = as_1d(x.into())?;
    log::trace!("alphabet: {} elements", values.len());

    let grouping = Grouping::new(&values);
    Ok(grouping
        .first_positions()
        .map(|position| values[position].clone())
        .collect())
}
