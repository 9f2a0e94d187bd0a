//! Fixed-window character counting over strings.

/// Maximum occurrences of `target` over every window of `length`
/// consecutive characters of `s`.
///
/// The count is maintained incrementally while the window slides, so the
/// whole scan is O(n) regardless of `length`. A `length` of 0 or one
/// longer than the string examines no window and yields 0.
///
/// # Examples
/// ```
/// use kata::window::max_char_in_windows;
///
/// assert_eq!(max_char_in_windows("abcbcb", 3, 'b'), 2);
/// assert_eq!(max_char_in_windows("abc", 5, 'a'), 0);
/// ```
#[must_use]
pub fn max_char_in_windows(s: &str, length: usize, target: char) -> usize {
    let chars: Vec<char> = s.chars().collect();
    if length == 0 || length > chars.len() {
        return 0;
    }

    let mut count = chars[..length].iter().filter(|&&c| c == target).count();
    let mut max = count;
    for i in length..chars.len() {
        count += usize::from(chars[i] == target);
        count -= usize::from(chars[i - length] == target);
        max = max.max(count);
    }
    max
}

/// Maximum occurrences of the letter `a` over every window of `length`
/// consecutive characters of `s`.
///
/// The target letter is fixed to `'a'`; use [`max_char_in_windows`] to
/// count any other character.
///
/// # Examples
/// ```
/// use kata::window::max_char_in_substrings;
///
/// assert_eq!(max_char_in_substrings("aabaa", 2), 2);
/// ```
#[must_use]
pub fn max_char_in_substrings(s: &str, length: usize) -> usize {
    max_char_in_windows(s, length, 'a')
}
