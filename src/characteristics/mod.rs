//! Characteristics derived from interval structure.
//!
//! - [`flat`]: reducers over one interval array;
//! - [`congeneric`]: one value per symbol group;
//! - this module: whole-sequence characteristics over all groups.
//!
//! All reducers are generic over the float type, so `f32` or `f64` picks the
//! working precision. Empty input never fails: each reducer returns its
//! neutral value instead.
//!
//! ```
//! use foa_rs::{characteristics, congeneric_intervals, Binding, Mode};
//!
//! let x = ["a", "b", "a", "c"];
//! let groups = congeneric_intervals(&x[..], Binding::Start, Mode::Cycle).unwrap();
//! let entropy: f64 = characteristics::identifying_information(&groups);
//! let info: f64 = characteristics::descriptive_information(&groups);
//! assert!((info - entropy.exp2()).abs() < 1e-12);
//! ```

pub mod congeneric;
pub mod flat;

use congeneric::group_identifying_information;
use flat::cast;
use num_traits::Float;

fn flatten(groups: &[Vec<usize>]) -> Vec<usize> {
    groups.iter().flatten().copied().collect()
}

/// Volume of all intervals together.
pub fn volume<F: Float>(groups: &[Vec<usize>]) -> F {
    groups
        .iter()
        .fold(F::one(), |acc, group| acc * flat::volume::<F>(group))
}

/// Depth of all intervals together.
pub fn depth<F: Float>(groups: &[Vec<usize>]) -> F {
    groups
        .iter()
        .fold(F::zero(), |acc, group| acc + flat::depth::<F>(group))
}

pub fn arithmetic_mean<F: Float>(groups: &[Vec<usize>]) -> F {
    flat::arithmetic_mean(&flatten(groups))
}

pub fn geometric_mean<F: Float>(groups: &[Vec<usize>]) -> F {
    flat::geometric_mean(&flatten(groups))
}

pub fn average_remoteness<F: Float>(groups: &[Vec<usize>]) -> F {
    flat::average_remoteness(&flatten(groups))
}

/// Average information needed to identify one interval:
/// `Σ (n_j / n) · log2(mean_j)` over the groups, `n_j` being a group's size and
/// `n` the total interval count. Empty groups contribute nothing; no intervals
/// at all gives 0.
pub fn identifying_information<F: Float>(groups: &[Vec<usize>]) -> F {
    let total: usize = groups.iter().map(Vec::len).sum();
    if total == 0 {
        return F::zero();
    }
    let total = cast::<F>(total);
    groups
        .iter()
        .filter(|group| !group.is_empty())
        .fold(F::zero(), |acc, group| {
            acc + cast::<F>(group.len()) / total * group_identifying_information::<F>(group)
        })
}

/// Entropy of the sequence. This is the same quantity as
/// [`identifying_information`].
pub fn entropy<F: Float>(groups: &[Vec<usize>]) -> F {
    identifying_information(groups)
}

/// `2^identifying_information`.
pub fn descriptive_information<F: Float>(groups: &[Vec<usize>]) -> F {
    identifying_information::<F>(groups).exp2()
}

/// Identifying information minus the average remoteness of all intervals.
pub fn uniformity<F: Float>(groups: &[Vec<usize>]) -> F {
    identifying_information::<F>(groups) - average_remoteness::<F>(groups)
}

/// Geometric mean of all intervals over the descriptive information.
pub fn regularity<F: Float>(groups: &[Vec<usize>]) -> F {
    geometric_mean::<F>(groups) / descriptive_information::<F>(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn groups() -> Vec<Vec<usize>> {
        vec![vec![1, 2, 1], vec![2, 3]]
    }

    #[test]
    fn test_totals_match_flattened() {
        let flattened = [1, 2, 1, 2, 3];
        assert_eq!(volume::<f64>(&groups()), flat::volume::<f64>(&flattened));
        assert!((depth::<f64>(&groups()) - flat::depth::<f64>(&flattened)).abs() < EPS);
        assert!((arithmetic_mean::<f64>(&groups()) - 1.8).abs() < EPS);
        assert!((geometric_mean::<f64>(&groups()) - 12f64.powf(0.2)).abs() < EPS);
        assert!((average_remoteness::<f64>(&groups()) - 12f64.log2() / 5.0).abs() < EPS);
    }

    #[test]
    fn test_identifying_information() {
        let expected = 0.6 * (4.0f64 / 3.0).log2() + 0.4 * 2.5f64.log2();
        assert!((identifying_information::<f64>(&groups()) - expected).abs() < EPS);
        assert_eq!(entropy::<f64>(&groups()), identifying_information::<f64>(&groups()));
    }

    #[test]
    fn test_descriptive_information_is_exp2_entropy() {
        let entropy = entropy::<f64>(&groups());
        assert!((descriptive_information::<f64>(&groups()) - entropy.exp2()).abs() < EPS);
    }

    #[test]
    fn test_uniformity_and_regularity() {
        let uniformity = uniformity::<f64>(&groups());
        let expected = identifying_information::<f64>(&groups()) - 12f64.log2() / 5.0;
        assert!((uniformity - expected).abs() < EPS);

        let regularity = regularity::<f64>(&groups());
        let expected = 12f64.powf(0.2) / descriptive_information::<f64>(&groups());
        assert!((regularity - expected).abs() < EPS);
    }

    #[test]
    fn test_perfectly_regular_sequence() {
        // Every symbol repeats with period 3: regularity 1, uniformity 0.
        let groups = vec![vec![3, 3, 3], vec![3, 3, 3], vec![3, 3, 3]];
        assert!((regularity::<f64>(&groups) - 1.0).abs() < EPS);
        assert!(uniformity::<f64>(&groups).abs() < EPS);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<Vec<usize>> = Vec::new();
        assert_eq!(identifying_information::<f64>(&empty), 0.0);
        assert_eq!(descriptive_information::<f64>(&empty), 1.0);
        assert_eq!(uniformity::<f64>(&empty), 0.0);
        assert_eq!(regularity::<f64>(&empty), 0.0);
        assert_eq!(volume::<f64>(&empty), 1.0);
        assert_eq!(depth::<f64>(&empty), 0.0);

        let hollow: Vec<Vec<usize>> = vec![Vec::new(), Vec::new()];
        assert_eq!(identifying_information::<f64>(&hollow), 0.0);
        assert_eq!(regularity::<f64>(&hollow), 0.0);
    }
}
