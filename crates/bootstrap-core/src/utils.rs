//! Utility functions for working with data slices

/// Sort data and return a new vector
///
/// Uses the IEEE 754 total order, so NaN values never cause a panic and
/// positive NaN sorts after every finite value.
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_ascending(&mut sorted);
    sorted
}

/// Sort a slice in place, ascending, using the IEEE 754 total order
pub fn sort_ascending(data: &mut [f64]) {
    data.sort_by(f64::total_cmp);
}

/// Smallest and largest value of a slice
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::utils::min_max;
///
/// assert_eq!(min_max(&[2.0, -1.0, 7.5]), Some((-1.0, 7.5)));
/// assert_eq!(min_max(&[]), None);
/// ```
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = data.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_single_element() {
        assert_eq!(sorted(&[42.0]), vec![42.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0];
        let result = sorted(&data);
        assert_eq!(result[0], 1.0);
        assert_eq!(result[1], 3.0);
        assert!(result[2].is_nan());
    }

    #[test]
    fn test_sorted_duplicates() {
        assert_eq!(sorted(&[2.0, 1.0, 2.0, 1.0]), vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_sorted_leaves_input_untouched() {
        let data = vec![2.0, 1.0];
        let _ = sorted(&data);
        assert_eq!(data, vec![2.0, 1.0]);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[5.0]), Some((5.0, 5.0)));
        assert_eq!(min_max(&[1.0, 9.0, -3.0, 4.0]), Some((-3.0, 9.0)));
    }
}
