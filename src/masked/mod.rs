//! Masked sequences.
//!
//! A [`MaskedArray`] pairs a data array with a boolean mask of the same shape;
//! `true` marks a position as absent. Masked positions keep their nominal value
//! but are skipped wherever the pipeline compares, orders or measures.
//!
//! Every masked stage requires a symbol to be either masked everywhere or
//! nowhere; a symbol seen both ways is an
//! [`Error::InconsistentMask`].

mod alphabet;
mod intervals;
mod order;

pub use alphabet::alphabet;
pub use intervals::{intervals, intervals_from_order};
pub use order::{order, order_with_alphabet};

use crate::error::{Error, Result};
use crate::permutation::{as_1d, Grouping};
use ndarray::{Array, Array1, ArrayView, ArrayView1, Dimension, Ix1};
use std::fmt::Debug;

/// Data array paired with a same-shaped mask (`true` = masked).
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<T, D: Dimension = Ix1> {
    data: Array<T, D>,
    mask: Array<bool, D>,
}

impl<T, D: Dimension> MaskedArray<T, D> {
    /// Pairs `data` with `mask`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the two shapes differ.
    pub fn new(data: Array<T, D>, mask: Array<bool, D>) -> Result<Self> {
        if data.shape() != mask.shape() {
            return Err(Error::ShapeMismatch {
                data: data.shape().to_vec(),
                mask: mask.shape().to_vec(),
            });
        }
        Ok(Self { data, mask })
    }

    /// Wraps `data` with nothing masked.
    pub fn unmasked(data: Array<T, D>) -> Self {
        let mask = Array::from_elem(data.raw_dim(), false);
        Self { data, mask }
    }

    pub fn data(&self) -> ArrayView<'_, T, D> {
        self.data.view()
    }

    pub fn mask(&self) -> ArrayView<'_, bool, D> {
        self.mask.view()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of elements, masked or not.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of masked elements.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&masked| masked).count()
    }

    pub fn into_parts(self) -> (Array<T, D>, Array<bool, D>) {
        (self.data, self.mask)
    }
}

impl<T> MaskedArray<T, Ix1> {
    /// Builds a one-dimensional masked array from parallel vectors.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the lengths differ.
    ///
    /// # Example
    ///
    /// ```
    /// use foa_rs::MaskedArray;
    ///
    /// let x = MaskedArray::from_vec(vec!["a", "b", "a"], vec![false, true, false]).unwrap();
    /// assert_eq!(x.get(1), None);
    /// assert_eq!(x.get(2), Some(&"a"));
    /// ```
    pub fn from_vec(data: Vec<T>, mask: Vec<bool>) -> Result<Self> {
        Self::new(Array1::from(data), Array1::from(mask))
    }

    /// Returns the value at `index`, or `None` if it is masked or out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.mask.get(index).copied() {
            Some(false) => self.data.get(index),
            _ => None,
        }
    }

    /// Whether the element at `index` is masked.
    ///
    /// An out-of-range index is not masked: there is nothing there to mask.
    /// [`get`](Self::get) returns `None` both for masked and out-of-range
    /// positions.
    pub fn is_masked(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Iterates over the elements, yielding `None` for masked positions.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.data
            .iter()
            .zip(self.mask.iter())
            .map(|(value, &masked)| (!masked).then_some(value))
    }

    /// Unmasked values in sequence order.
    pub fn compressed(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().flatten().cloned().collect()
    }
}

/// A validated one-dimensional masked sequence, grouped by value.
pub(crate) struct MaskedGrouping<'a, T> {
    pub(crate) values: ArrayView1<'a, T>,
    pub(crate) grouping: Grouping,
    /// Per symbol (first-appearance order): whether it is masked.
    pub(crate) symbol_masks: Vec<bool>,
}

impl<'a, T: Ord + Debug> MaskedGrouping<'a, T> {
    /// Checks rank and mask consistency of `x` and groups it.
    pub(crate) fn new<D: Dimension>(x: &'a MaskedArray<T, D>) -> Result<Self> {
        let values = as_1d(x.data())?;
        let mask = as_1d(x.mask())?;
        let grouping = Grouping::new(&values);
        let symbol_masks = check_symbol_masks(&values, &mask, &grouping)?;
        Ok(Self {
            values,
            grouping,
            symbol_masks,
        })
    }

    /// Alphabet in first-appearance order, masked where the symbol is.
    pub(crate) fn alphabet(&self) -> MaskedArray<T, Ix1>
    where
        T: Clone,
    {
        let data: Array1<T> = self
            .grouping
            .first_positions()
            .map(|position| self.values[position].clone())
            .collect();
        MaskedArray {
            data,
            mask: Array1::from(self.symbol_masks.clone()),
        }
    }
}

/// Mask flag of every symbol, failing if some symbol is masked at one position
/// and unmasked at another.
///
/// Symbols are checked in first-appearance order, so the earliest offending
/// symbol is the one reported.
fn check_symbol_masks<T: Debug>(
    values: &ArrayView1<'_, T>,
    mask: &ArrayView1<'_, bool>,
    grouping: &Grouping,
) -> Result<Vec<bool>> {
    grouping
        .symbols()
        .map(|positions| {
            let Some(&first) = positions.first() else {
                return Ok(false);
            };
            let masked = mask[first];
            if positions.iter().any(|&position| mask[position] != masked) {
                let value = format!("{:?}", values[first]);
                log::debug!("element {value} is both masked and unmasked");
                return Err(Error::InconsistentMask { value });
            }
            Ok(masked)
        })
        .collect()
}
