//! Per-symbol characteristics.
//!
//! Every function takes congeneric interval groups (one array per symbol, as
//! returned by [`congeneric_intervals`](crate::congeneric_intervals) or
//! [`masked::intervals`](crate::masked::intervals)) and returns one value per
//! group, in the same order.

use super::flat;
use num_traits::Float;

fn per_group<F: Float>(groups: &[Vec<usize>], reduce: fn(&[usize]) -> F) -> Vec<F> {
    groups.iter().map(|group| reduce(group)).collect()
}

pub fn volume<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, flat::volume)
}

pub fn depth<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, flat::depth)
}

pub fn arithmetic_mean<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, flat::arithmetic_mean)
}

pub fn geometric_mean<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, flat::geometric_mean)
}

pub fn average_remoteness<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, flat::average_remoteness)
}

/// `log2` of each group's arithmetic mean; 0 for an empty group.
pub fn identifying_information<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, group_identifying_information)
}

/// Identifying information minus average remoteness, per group.
pub fn uniformity<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, |group| {
        group_identifying_information::<F>(group) - flat::average_remoteness::<F>(group)
    })
}

/// Geometric over arithmetic mean, per group; 0 when the mean is 0.
pub fn periodicity<F: Float>(groups: &[Vec<usize>]) -> Vec<F> {
    per_group(groups, |group| {
        let mean = flat::arithmetic_mean::<F>(group);
        if mean.is_zero() {
            F::zero()
        } else {
            flat::geometric_mean::<F>(group) / mean
        }
    })
}

pub(crate) fn group_identifying_information<F: Float>(group: &[usize]) -> F {
    let mean = flat::arithmetic_mean::<F>(group);
    if mean.is_zero() {
        F::zero()
    } else {
        mean.log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn groups() -> Vec<Vec<usize>> {
        // [2, 4, 2, 2, 4], start binding, normal mode
        vec![vec![1, 2, 1], vec![2, 3]]
    }

    fn close(actual: &[f64], expected: &[f64]) -> bool {
        actual.len() == expected.len()
            && actual.iter().zip(expected).all(|(a, e)| (a - e).abs() < EPS)
    }

    #[test]
    fn test_volume_and_depth() {
        assert_eq!(volume::<f64>(&groups()), vec![2.0, 6.0]);
        assert!(close(&depth::<f64>(&groups()), &[1.0, 6f64.log2()]));
    }

    #[test]
    fn test_means() {
        assert!(close(&arithmetic_mean::<f64>(&groups()), &[4.0 / 3.0, 2.5]));
        assert!(close(
            &geometric_mean::<f64>(&groups()),
            &[2f64.powf(1.0 / 3.0), 6f64.sqrt()]
        ));
    }

    #[test]
    fn test_average_remoteness() {
        assert!(close(
            &average_remoteness::<f64>(&groups()),
            &[1.0 / 3.0, 6f64.log2() / 2.0]
        ));
    }

    #[test]
    fn test_identifying_information_and_uniformity() {
        let info = identifying_information::<f64>(&groups());
        assert!(close(&info, &[(4.0f64 / 3.0).log2(), 2.5f64.log2()]));

        let remoteness = average_remoteness::<f64>(&groups());
        let expected: Vec<f64> = info.iter().zip(&remoteness).map(|(i, r)| i - r).collect();
        assert!(close(&uniformity::<f64>(&groups()), &expected));
    }

    #[test]
    fn test_periodicity() {
        let periodicity = periodicity::<f64>(&groups());
        assert!(close(
            &periodicity,
            &[2f64.powf(1.0 / 3.0) / (4.0 / 3.0), 6f64.sqrt() / 2.5]
        ));
        // A perfectly regular symbol has periodicity 1.
        assert!(close(&super::periodicity::<f64>(&[vec![3, 3, 3]]), &[1.0]));
    }

    #[test]
    fn test_empty_groups_use_neutral_values() {
        let groups = vec![Vec::new(), vec![4]];
        assert_eq!(volume::<f64>(&groups), vec![1.0, 4.0]);
        assert_eq!(depth::<f64>(&groups), vec![0.0, 2.0]);
        assert_eq!(arithmetic_mean::<f64>(&groups), vec![0.0, 4.0]);
        assert_eq!(geometric_mean::<f64>(&groups), vec![0.0, 4.0]);
        assert_eq!(average_remoteness::<f64>(&groups), vec![0.0, 2.0]);
        assert_eq!(identifying_information::<f64>(&groups), vec![0.0, 2.0]);
        assert_eq!(uniformity::<f64>(&groups), vec![0.0, 0.0]);
        assert_eq!(periodicity::<f64>(&groups), vec![0.0, 1.0]);
        assert!(volume::<f64>(&[]).is_empty());
    }
}
