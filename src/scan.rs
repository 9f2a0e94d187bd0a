//! Running-maximum counting over a left-to-right scan.

/// Counts the elements that are strictly greater than every element before
/// them, i.e. the running maxima of a left-to-right scan.
///
/// The first element is always a running maximum; the empty slice has
/// none. The scan is order-sensitive, nothing is sorted first.
///
/// # Examples
/// ```
/// use kata::scan::count_greater_than_previous;
///
/// // 1, 5, 7, and 8 are new maxima when they appear.
/// assert_eq!(count_greater_than_previous(&[1, 5, 3, 7, 2, 8]), 4);
/// assert_eq!(count_greater_than_previous::<i32>(&[]), 0);
/// ```
#[must_use]
pub fn count_greater_than_previous<T: PartialOrd>(arr: &[T]) -> usize {
    let mut iter = arr.iter();
    let Some(first) = iter.next() else {
        return 0;
    };

    let mut max_so_far = first;
    let mut count = 1;
    for x in iter {
        if x > max_so_far {
            max_so_far = x;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_new_running_maxima() {
        assert_eq!(count_greater_than_previous(&[1, 5, 3, 7, 2, 8]), 4);
    }

    #[test]
    fn empty_input_counts_zero() {
        assert_eq!(count_greater_than_previous::<u64>(&[]), 0);
    }

    #[test]
    fn single_element_counts_one() {
        assert_eq!(count_greater_than_previous(&[-3]), 1);
    }

    #[test]
    fn strictly_increasing_counts_all() {
        let v: Vec<u32> = (0..100).collect();
        assert_eq!(count_greater_than_previous(&v), 100);
    }

    #[test]
    fn strictly_decreasing_counts_only_the_first() {
        assert_eq!(count_greater_than_previous(&[9, 8, 7, 1]), 1);
    }

    #[test]
    fn equal_elements_are_not_new_maxima() {
        assert_eq!(count_greater_than_previous(&[2, 2, 2, 2]), 1);
        assert_eq!(count_greater_than_previous(&[1, 3, 3, 4]), 3);
    }

    #[test]
    fn works_over_any_ordered_type() {
        assert_eq!(count_greater_than_previous(&[1.5, 0.5, 2.5]), 2);
        assert_eq!(count_greater_than_previous(&["a", "c", "b", "d"]), 3);
    }
}
