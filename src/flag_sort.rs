//! Single-pass three-way sort for sequences drawn from {0, 1, 2}.

use crate::error::Error;

/// Sorts a {0, 1, 2}-valued slice in place with a single Dutch national
/// flag pass.
///
/// Three pointers partition the slice into a `0` band, a `1` band, and a
/// `2` band in one pass, O(n) comparisons and at most one swap per
/// element. The domain is validated before any element moves, so on error
/// the slice is left untouched.
///
/// # Errors
///
/// Returns [`Error::OutOfDomain`] naming the first offending index and
/// value when the slice contains anything but 0, 1, or 2.
///
/// # Examples
/// ```
/// use kata::flag_sort::sort_limited_range;
///
/// let mut risks = vec![2, 0, 1, 1, 0, 2];
/// sort_limited_range(&mut risks).unwrap();
/// assert_eq!(risks, vec![0, 0, 1, 1, 2, 2]);
/// ```
pub fn sort_limited_range(arr: &mut [u8]) -> Result<(), Error> {
    if let Some((index, &value)) = arr.iter().enumerate().find(|&(_, &v)| v > 2) {
        return Err(Error::OutOfDomain { index, value });
    }

    let mut low = 0;
    let mut mid = 0;
    // `high` is exclusive: everything at or past it is a settled 2.
    let mut high = arr.len();

    while mid < high {
        match arr[mid] {
            0 => {
                arr.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                high -= 1;
                arr.swap(mid, high);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::gen_sequences::gen_ternary;

    fn assert_sorted_same_multiset(original: &[u8], sorted: &[u8]) {
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        for v in 0..=2u8 {
            assert_eq!(
                original.iter().filter(|&&x| x == v).count(),
                sorted.iter().filter(|&&x| x == v).count(),
                "count of {v} changed"
            );
        }
    }

    #[test]
    fn sorts_the_three_bands() {
        let mut v = vec![2, 0, 1, 1, 0, 2];
        sort_limited_range(&mut v).unwrap();
        assert_eq!(v, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn empty_and_single_element_inputs() {
        let mut v: Vec<u8> = vec![];
        sort_limited_range(&mut v).unwrap();
        assert!(v.is_empty());

        let mut v = vec![1u8];
        sort_limited_range(&mut v).unwrap();
        assert_eq!(v, vec![1]);
    }

    #[test]
    fn already_sorted_and_reverse_sorted() {
        let mut v = vec![0, 0, 1, 2, 2];
        sort_limited_range(&mut v).unwrap();
        assert_eq!(v, vec![0, 0, 1, 2, 2]);

        let mut v = vec![2, 2, 1, 1, 0, 0];
        sort_limited_range(&mut v).unwrap();
        assert_eq!(v, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn single_valued_inputs() {
        for value in 0..=2u8 {
            let mut v = vec![value; 17];
            sort_limited_range(&mut v).unwrap();
            assert_eq!(v, vec![value; 17]);
        }
    }

    #[test]
    fn missing_band_inputs() {
        let mut v = vec![2, 0, 2, 0, 0];
        sort_limited_range(&mut v).unwrap();
        assert_eq!(v, vec![0, 0, 0, 2, 2]);
    }

    #[test]
    fn out_of_domain_value_is_rejected_before_sorting() {
        let mut v = vec![0, 1, 7, 2, 9];
        let err = sort_limited_range(&mut v).unwrap_err();
        assert_eq!(err, Error::OutOfDomain { index: 2, value: 7 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // Slice untouched on error.
        assert_eq!(v, vec![0, 1, 7, 2, 9]);
    }

    #[test]
    fn random_inputs_match_a_comparison_sort() {
        for n in [2, 3, 10, 101, 1000] {
            let data = gen_ternary(n);
            let mut sorted = data.clone();
            sort_limited_range(&mut sorted).unwrap();

            let mut expected = data.clone();
            expected.sort_unstable();
            assert_eq!(sorted, expected, "n = {n}");
            assert_sorted_same_multiset(&data, &sorted);
        }
    }
}
