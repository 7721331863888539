use crate::binding::{Binding, Mode};
use crate::characteristics::{self, congeneric, flat};
use crate::error::Result;
use crate::intervals::symbol_intervals;
use crate::masked::{MaskedArray, MaskedGrouping};
use crate::permutation::{as_1d, Grouping};
use ndarray::{AsArray, Dimension};
use std::fmt::Debug;

/// Every characteristic of a sequence, computed in one pass through the
/// pipeline: alphabet, order, congeneric intervals, reducers.
///
/// # Example
///
/// ```
/// use foa_rs::{Binding, Mode, SequenceProfile};
///
/// let x = [2, 4, 2, 2, 4];
/// let profile = SequenceProfile::compute(&x[..], Binding::Start, Mode::Normal).unwrap();
/// assert_eq!(profile.alphabet_size, 2);
/// assert_eq!(profile.interval_count, 5);
/// assert_eq!(profile.symbols[1].intervals, vec![2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceProfile {
    pub binding: Binding,
    pub mode: Mode,
    /// Number of positions, masked ones included
    pub length: usize,
    /// Number of distinct unmasked symbols
    pub alphabet_size: usize,
    /// Total number of intervals over all symbols
    pub interval_count: usize,
    pub volume: f64,
    pub depth: f64,
    pub arithmetic_mean: f64,
    pub geometric_mean: f64,
    pub average_remoteness: f64,
    pub identifying_information: f64,
    pub descriptive_information: f64,
    pub uniformity: f64,
    pub regularity: f64,
    /// Per-symbol characteristics, in alphabet order
    pub symbols: Vec<SymbolProfile>,
}

/// Characteristics of the intervals of one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolProfile {
    /// Index of the symbol in the alphabet
    pub rank: usize,
    pub occurrences: usize,
    pub intervals: Vec<usize>,
    pub volume: f64,
    pub depth: f64,
    pub arithmetic_mean: f64,
    pub geometric_mean: f64,
    pub average_remoteness: f64,
    pub identifying_information: f64,
    pub uniformity: f64,
    pub periodicity: f64,
}

impl SequenceProfile {
    /// Profiles a plain sequence.
    ///
    /// # Errors
    ///
    /// [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional.
    pub fn compute<'a, T, D>(
        x: impl AsArray<'a, T, D>,
        binding: Binding,
        mode: Mode,
    ) -> Result<Self>
    where
        T: Ord + 'a,
        D: Dimension,
    {
        let values = as_1d(x.into())?;
        log::trace!(
            "profile: {} elements, binding={binding}, mode={mode}",
            values.len()
        );

        let grouping = Grouping::new(&values);
        let unmasked = vec![false; grouping.symbol_count()];
        Ok(Self::from_grouping(&grouping, &unmasked, binding, mode))
    }

    /// Profiles a masked sequence; masked symbols are left out.
    ///
    /// # Errors
    ///
    /// - [`Error::Not1DArray`](crate::Error::Not1DArray) if `x` is not one-dimensional;
    /// - [`Error::InconsistentMask`](crate::Error::InconsistentMask) if a symbol
    ///   is masked at some positions and unmasked at others.
    pub fn compute_masked<T, D>(
        x: &MaskedArray<T, D>,
        binding: Binding,
        mode: Mode,
    ) -> Result<Self>
    where
        T: Ord + Debug,
        D: Dimension,
    {
        log::trace!(
            "masked profile: {} elements, binding={binding}, mode={mode}",
            x.len()
        );

        let grouped = MaskedGrouping::new(x)?;
        Ok(Self::from_grouping(
            &grouped.grouping,
            &grouped.symbol_masks,
            binding,
            mode,
        ))
    }

    fn from_grouping(
        grouping: &Grouping,
        symbol_masks: &[bool],
        binding: Binding,
        mode: Mode,
    ) -> Self {
        let len = grouping.len();

        let mut groups = Vec::new();
        let mut occurrences = Vec::new();
        let mut ranks = Vec::new();
        for (rank, (positions, &masked)) in grouping.symbols().zip(symbol_masks).enumerate() {
            if masked {
                continue;
            }
            groups.push(symbol_intervals(positions, len, binding, mode));
            occurrences.push(positions.len());
            ranks.push(rank);
        }

        let identifying = congeneric::identifying_information::<f64>(&groups);
        let uniformity = congeneric::uniformity::<f64>(&groups);
        let periodicity = congeneric::periodicity::<f64>(&groups);

        let symbols = groups
            .iter()
            .enumerate()
            .map(|(i, group)| SymbolProfile {
                rank: ranks[i],
                occurrences: occurrences[i],
                intervals: group.clone(),
                volume: flat::volume(group),
                depth: flat::depth(group),
                arithmetic_mean: flat::arithmetic_mean(group),
                geometric_mean: flat::geometric_mean(group),
                average_remoteness: flat::average_remoteness(group),
                identifying_information: identifying[i],
                uniformity: uniformity[i],
                periodicity: periodicity[i],
            })
            .collect();

        Self {
            binding,
            mode,
            length: len,
            alphabet_size: groups.len(),
            interval_count: groups.iter().map(Vec::len).sum(),
            volume: characteristics::volume(&groups),
            depth: characteristics::depth(&groups),
            arithmetic_mean: characteristics::arithmetic_mean(&groups),
            geometric_mean: characteristics::geometric_mean(&groups),
            average_remoteness: characteristics::average_remoteness(&groups),
            identifying_information: characteristics::identifying_information(&groups),
            descriptive_information: characteristics::descriptive_information(&groups),
            uniformity: characteristics::uniformity(&groups),
            regularity: characteristics::regularity(&groups),
            symbols,
        }
    }

    /// Interval groups the profile was computed from.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        self.symbols
            .iter()
            .map(|symbol| symbol.intervals.clone())
            .collect()
    }
}
