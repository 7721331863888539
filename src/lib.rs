//! # foa-rs - Formal Order Analysis of Sequences
//!
//! Decomposes a finite sequence into its alphabet, its order and the
//! intervals between repeated occurrences of each element, then reduces those
//! intervals to numeric characteristics.
//!
//! Every stage takes a one-dimensional array (anything implementing
//! [`ndarray::AsArray`], slices included) of values that can be compared with
//! [`Ord`]:
//! 1. **Alphabet**: distinct values in order of first appearance
//! 2. **Order**: each element replaced by the index of its value in the alphabet
//! 3. **Intervals**: distances between consecutive occurrences of equal values,
//!    shaped by a [`Binding`] direction and a [`Mode`] for the sequence edges
//!
//! The [`masked`] module repeats the pipeline over a [`MaskedArray`], and
//! [`characteristics`] holds the reducers.
//!
//! ## Example
//!
//! ```
//! use foa_rs::{alphabet, characteristics, congeneric_intervals, intervals, order, Binding, Mode};
//!
//! let x = ["a", "c", "c", "e", "d", "a"];
//! assert_eq!(alphabet(&x[..]).unwrap(), vec!["a", "c", "e", "d"]);
//! assert_eq!(order(&x[..]).unwrap(), vec![0, 1, 1, 2, 3, 0]);
//! assert_eq!(intervals(&x[..], Binding::Start, Mode::Normal).unwrap(), vec![1, 2, 1, 4, 5, 5]);
//!
//! let groups = congeneric_intervals(&x[..], Binding::Start, Mode::Lossy).unwrap();
//! assert_eq!(groups, vec![vec![5], vec![1], vec![], vec![]]);
//! assert_eq!(characteristics::volume::<f64>(&groups), 5.0);
//! ```
//!
//! ## Performance
//!
//! - One O(n log n) stable sort per call; every stage after it is linear
//! - No hashing: values only need [`Ord`]

mod alphabet;
mod binding;
pub mod characteristics;
mod error;
mod intervals;
pub mod masked;
mod order;
mod permutation;
mod profile;


pub use alphabet::alphabet;
pub use binding::{Binding, Mode};
pub use error::{Error, Result};
pub use intervals::{congeneric_intervals, intervals};
pub use masked::MaskedArray;
pub use order::{order, order_with_alphabet};
pub use profile::{SequenceProfile, SymbolProfile};
