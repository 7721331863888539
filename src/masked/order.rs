use super::{MaskedArray, MaskedGrouping};
use crate::error::Result;
use ndarray::{Array2, Dimension, Ix1, Ix2};
use std::fmt::Debug;

/// Encodes a masked sequence as a masked order matrix.
///
/// The matrix has one row per alphabet symbol and one column per position.
/// Row `k` holds `k` wherever symbol `k` occurs and is masked elsewhere; the
/// row of a symbol that only appears masked is masked throughout (its value is
/// still written at the symbol's positions).
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
/// let x = MaskedArray::from_vec(vec!["a", "b", "a"], vec![false; 3]).unwrap();
/// let order = masked::order(&x).unwrap();
/// assert_eq!(order.shape(), &[2, 3]);
/// assert_eq!(order.mask().row(0).to_vec(), vec![false, true, false]);
/// ```
pub fn order<T, D>(x: &MaskedArray<T, D>) -> Result<MaskedArray<usize, Ix2>>
where
    T: Ord + Debug,
    D: Dimension,
{
    log::trace!("masked order: {} elements", x.len());
    let grouped = MaskedGrouping::new(x)?;
    Ok(order_matrix(&grouped))
}

/// Like [`order`], also returning the masked alphabet the rows refer to.
pub fn order_with_alphabet<T, D>(
    x: &MaskedArray<T, D>,
) -> Result<(MaskedArray<usize, Ix2>, MaskedArray<T, Ix1>)>
where
    T: Ord + Clone + Debug,
    D: Dimension,
{
    log::trace!("masked order_with_alphabet: {} elements", x.len());
    let grouped = MaskedGrouping::new(x)?;

    Ok((order_matrix(&grouped), grouped.alphabet()))
}

fn order_matrix<T>(grouped: &MaskedGrouping<'_, T>) -> MaskedArray<usize, Ix2> {
    let shape = (grouped.grouping.symbol_count(), grouped.grouping.len());
    let mut data = Array2::zeros(shape);
    let mut mask = Array2::from_elem(shape, true);

    for (rank, positions) in grouped.grouping.symbols().enumerate() {
        let symbol_masked = grouped.symbol_masks[rank];
        for &position in positions {
            data[[rank, position]] = rank;
            mask[[rank, position]] = symbol_masked;
        }
    }
    MaskedArray { data, mask }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ndarray::arr2;

    fn masked<T>(data: Vec<T>, mask: &[u8]) -> MaskedArray<T> {
        MaskedArray::from_vec(data, mask.iter().map(|&m| m != 0).collect()).unwrap()
    }

    /// Renders rows as `Some(rank)` / `None`, like a printed masked matrix.
    fn rows(order: &MaskedArray<usize, Ix2>) -> Vec<Vec<Option<usize>>> {
        order
            .data()
            .rows()
            .into_iter()
            .zip(order.mask().rows())
            .map(|(data, mask)| {
                data.iter()
                    .zip(mask.iter())
                    .map(|(&value, &masked)| (!masked).then_some(value))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_string_values() {
        let x = masked(vec!["a", "b", "a", "c", "d"], &[0, 0, 0, 0, 0]);
        let order = order(&x).unwrap();
        assert_eq!(
            rows(&order),
            vec![
                vec![Some(0), None, Some(0), None, None],
                vec![None, Some(1), None, None, None],
                vec![None, None, None, Some(2), None],
                vec![None, None, None, None, Some(3)],
            ]
        );
    }

    #[test]
    fn test_with_alphabet() {
        let x = masked(vec!["a", "c", "c", "e", "d", "a"], &[0, 0, 0, 0, 0, 0]);
        let (order, alphabet) = order_with_alphabet(&x).unwrap();
        assert_eq!(
            rows(&order),
            vec![
                vec![Some(0), None, None, None, None, Some(0)],
                vec![None, Some(1), Some(1), None, None, None],
                vec![None, None, None, Some(2), None, None],
                vec![None, None, None, None, Some(3), None],
            ]
        );
        assert_eq!(alphabet.compressed(), vec!["a", "c", "e", "d"]);
    }

    #[test]
    fn test_masked_symbol_row_is_fully_masked() {
        let x = masked(vec![1, 4, 1000, 4, 15], &[0, 1, 0, 1, 0]);
        let order = order(&x).unwrap();
        assert_eq!(
            rows(&order),
            vec![
                vec![Some(0), None, None, None, None],
                vec![None, None, None, None, None],
                vec![None, None, Some(2), None, None],
                vec![None, None, None, None, Some(3)],
            ]
        );
        // Nominal ranks are still present under the mask.
        assert_eq!(order.data()[[1, 1]], 1);
        assert_eq!(order.data()[[1, 3]], 1);
    }

    #[test]
    fn test_empty() {
        let x = masked(Vec::<i32>::new(), &[]);
        let order = order(&x).unwrap();
        assert_eq!(order.shape(), &[0, 0]);
    }

    #[test]
    fn test_inconsistent_mask() {
        let x = masked(vec!["a", "b", "a"], &[0, 1, 1]);
        assert_eq!(
            order(&x),
            Err(Error::InconsistentMask {
                value: "\"a\"".to_string()
            })
        );
        assert!(order_with_alphabet(&x).is_err());
    }

    #[test]
    fn test_rejects_2d() {
        let x = MaskedArray::unmasked(arr2(&[[2, 2, 2], [2, 2, 2]]));
        assert_eq!(order(&x), Err(Error::Not1DArray { ndim: 2 }));
    }
}
