use crate::error::{Error, Result};
use ndarray::{ArrayView, ArrayView1, Dimension, Ix1};
use std::ops::Range;

/// Reinterprets a view as one-dimensional, rejecting any other rank.
pub(crate) fn as_1d<'a, T, D: Dimension>(view: ArrayView<'a, T, D>) -> Result<ArrayView1<'a, T>> {
    let ndim = view.ndim();
    view.into_dimensionality::<Ix1>().map_err(|_| {
        log::debug!("rejecting {ndim}-dimensional sequence");
        Error::Not1DArray { ndim }
    })
}

/// Equal-value runs of a sequence, found by a stable sort permutation.
///
/// This is the grouping every stage is built on: sorting the positions by value
/// puts equal symbols next to each other, and because the sort is stable each
/// run lists the positions of one symbol in ascending (chronological) order.
/// Adjacent-pair comparison then finds the run boundaries.
///
/// Runs are kept in order of first appearance of their symbol, so run `k`
/// belongs to the `k`-th alphabet entry.
#[derive(Debug, Clone)]
pub(crate) struct Grouping {
    /// Original positions, grouped by value.
    perm: Vec<usize>,
    /// Ranges into `perm`, one per distinct value.
    runs: Vec<Range<usize>>,
}

impl Grouping {
    pub(crate) fn new<T: Ord>(values: &ArrayView1<'_, T>) -> Self {
        let mut perm: Vec<usize> = (0..values.len()).collect();
        // `sort_by` is a stable merge sort: equal values keep position order.
        perm.sort_by(|&a, &b| values[a].cmp(&values[b]));

        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..perm.len() {
            if values[perm[i - 1]] != values[perm[i]] {
                runs.push(start..i);
                start = i;
            }
        }
        if !perm.is_empty() {
            runs.push(start..perm.len());
        }

        // First element of a run is the symbol's first occurrence.
        runs.sort_unstable_by_key(|run| perm[run.start]);

        Self { perm, runs }
    }

    /// Number of positions in the grouped sequence.
    pub(crate) fn len(&self) -> usize {
        self.perm.len()
    }

    /// Number of distinct values.
    pub(crate) fn symbol_count(&self) -> usize {
        self.runs.len()
    }

    /// Positions of every symbol, in first-appearance order of the symbols.
    pub(crate) fn symbols(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.runs.iter().map(move |run| &self.perm[run.clone()])
    }

    /// Position of the first occurrence of every symbol.
    pub(crate) fn first_positions(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.runs.iter().map(move |run| self.perm[run.start])
    }

    /// Rank of every position's symbol, scattered back to original order.
    pub(crate) fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.len()];
        for (rank, positions) in self.symbols().enumerate() {
            for &position in positions {
                ranks[position] = rank;
            }
        }
        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2, Array3};

    #[test]
    fn test_runs_follow_first_appearance() {
        let values = arr1(&['c', 'a', 'c', 'b', 'a']);
        let grouping = Grouping::new(&values.view());

        let symbols: Vec<&[usize]> = grouping.symbols().collect();
        assert_eq!(symbols, vec![&[0, 2][..], &[1, 4][..], &[3][..]]);
        assert_eq!(grouping.first_positions().collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(grouping.symbol_count(), 3);
    }

    #[test]
    fn test_ranks() {
        let values = arr1(&[10, 20, 20, 5, 10]);
        let grouping = Grouping::new(&values.view());
        assert_eq!(grouping.ranks(), vec![0, 1, 1, 2, 0]);
    }

    #[test]
    fn test_empty() {
        let values = arr1::<u8>(&[]);
        let grouping = Grouping::new(&values.view());
        assert_eq!(grouping.len(), 0);
        assert_eq!(grouping.symbol_count(), 0);
        assert!(grouping.ranks().is_empty());
    }

    #[test]
    fn test_as_1d_rejects_other_ranks() {
        let matrix = arr2(&[[1, 2], [3, 4]]);
        assert_eq!(as_1d(matrix.view()).unwrap_err(), Error::Not1DArray { ndim: 2 });

        let cube = Array3::<u8>::zeros((1, 2, 3));
        assert_eq!(as_1d(cube.view()).unwrap_err(), Error::Not1DArray { ndim: 3 });

        let dynamic = ndarray::ArrayD::<u8>::zeros(ndarray::IxDyn(&[4]));
        assert_eq!(as_1d(dynamic.view()).unwrap().len(), 4);
    }
}
