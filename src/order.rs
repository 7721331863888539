use crate::error::Result;
use crate::permutation::{as_1d, Grouping};
use ndarray::{AsArray, Dimension};

/// Encodes every element of `x` as the rank of its value in the alphabet.
///
/// Rank 0 belongs to the value that occurs first, rank 1 to the next new
/// value, and so on, so `alphabet(x)[order(x)[i]] == x[i]`.
///
/// # Errors
///
/// [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional.
///
/// # Example
///
/// ```
/// use foa_rs::order;
///
/// assert_eq!(order(&["a", "b", "a", "c", "d"][..]).unwrap(), vec![0, 1, 0, 2, 3]);
/// ```
pub fn order<'a, T, D>(x: impl AsArray<'a, T, D>) -> Result<Vec<usize>>
where
    T: Ord + 'a,
    D: Dimension,
{
    let values = as_1d(x.into())?;
    log::trace!("order: {} elements", values.len());

    Ok(Grouping::new(&values).ranks())
}

/// Like [`order`], also returning the alphabet the ranks refer to.
///
/// Both come from one sort of the input.
pub fn order_with_alphabet<'a, T, D>(x: impl AsArray<'a, T, D>) -> Result<(Vec<usize>, Vec<T>)>
where
    T: Ord + Clone + 'a,
    D: Dimension,
{
    let values = as_1d(x.into())?;
    log::trace!("order_with_alphabet: {} elements", values.len());

    let grouping = Grouping::new(&values);
    let alphabet = grouping
        .first_positions()
        .map(|position| values[position].clone())
        .collect();
    Ok((grouping.ranks(), alphabet))
}
