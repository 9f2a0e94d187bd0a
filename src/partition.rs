//! Single-pass partition that moves every occurrence of one value to the
//! back of a sequence.

/// Moves every element equal to `sentinel` to the back of `arr`, in place.
///
/// Non-sentinel elements keep their relative order; the relative order of
/// the sentinel elements gathered at the back is unspecified (this is a
/// swap-based partition, not a stable partition of both groups). Runs in a
/// single pass with O(1) extra space.
///
/// Any input is valid: an empty slice, a slice without the sentinel, or a
/// slice made entirely of it are all no-ops in content.
///
/// # Examples
/// ```
/// use kata::partition::move_to_end;
///
/// let mut v = vec![0, 3, 0, 1, 0, 2];
/// move_to_end(&mut v, &0);
/// assert_eq!(&v[..3], &[3, 1, 2]);
/// assert!(v[3..].iter().all(|&x| x == 0));
/// ```
pub fn move_to_end<T: PartialEq>(arr: &mut [T], sentinel: &T) {
    let mut front = 0;
    for i in 0..arr.len() {
        if arr[i] != *sentinel {
            arr.swap(front, i);
            front += 1;
        }
    }
}

/// Functional counterpart of [`move_to_end`]: leaves `arr` untouched and
/// returns the partitioned sequence as a fresh vector.
///
/// # Examples
/// ```
/// use kata::partition::moved_to_end;
///
/// let v = vec![1, 0, 2, 0, 3];
/// assert_eq!(moved_to_end(&v, &0), vec![1, 2, 3, 0, 0]);
/// assert_eq!(v, vec![1, 0, 2, 0, 3]);
/// ```
#[must_use]
pub fn moved_to_end<T: PartialEq + Clone>(arr: &[T], sentinel: &T) -> Vec<T> {
    let mut v = arr.to_vec();
    move_to_end(&mut v, sentinel);
    v
}
