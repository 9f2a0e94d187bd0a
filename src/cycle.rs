//! Cyclic weekday counting over the seven-token day alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the seven weekday tokens, used as a cyclic index modulo 7.
///
/// Parses case-insensitively from the three-letter tokens `mon`..`sun` and
/// displays as the lowercase token.
///
/// # Examples
/// ```
/// use kata::Day;
///
/// let day: Day = "SUN".parse().unwrap();
/// assert_eq!(day, Day::Sun);
/// assert_eq!(day.index(), 6);
/// assert_eq!(day.to_string(), "sun");
///
/// assert!("monday".parse::<Day>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Zero-based position in the week, with `mon` at 0 and `sun` at 6.
    #[must_use]
    pub const fn index(self) -> u64 {
        self as u64
    }
}

impl FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mon" => Ok(Day::Mon),
            "tue" => Ok(Day::Tue),
            "wed" => Ok(Day::Wed),
            "thu" => Ok(Day::Thu),
            "fri" => Ok(Day::Fri),
            "sat" => Ok(Day::Sat),
            "sun" => Ok(Day::Sun),
            _ => Err(Error::UnknownDay(s.to_string())),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        };
        f.write_str(token)
    }
}

/// Counts the occurrences of `target` within the `total_days` days that
/// follow a period starting on `start`.
///
/// The start day itself is day 0 and is never counted: when `start` and
/// `target` coincide the first occurrence is day 7, after a full wrap of
/// the cycle. The first occurrence is otherwise day
/// `(target - start) mod 7`, and every seventh day after it occurs again.
///
/// # Examples
/// ```
/// use kata::cycle::count_between;
/// use kata::Day;
///
/// // Starting on Monday, Sunday falls on day 6 and day 13.
/// assert_eq!(count_between(Day::Mon, 10, Day::Sun), 1);
/// assert_eq!(count_between(Day::Mon, 14, Day::Sun), 2);
///
/// // Same day: first occurrence only after a full wrap.
/// assert_eq!(count_between(Day::Fri, 6, Day::Fri), 0);
/// assert_eq!(count_between(Day::Fri, 7, Day::Fri), 1);
/// ```
#[must_use]
pub fn count_between(start: Day, total_days: u64, target: Day) -> u64 {
    let mut first = (target.index() + 7 - start.index()) % 7;
    if first == 0 {
        first = 7;
    }

    if total_days < first {
        0
    } else {
        (total_days - first) / 7 + 1
    }
}

/// String-token boundary for [`count_between`]: parses both day tokens
/// (case-insensitive) and delegates.
///
/// # Errors
///
/// Returns [`Error::UnknownDay`] when either token is not one of the seven
/// day labels.
///
/// # Examples
/// ```
/// use kata::cycle::count_occurrences;
///
/// assert_eq!(count_occurrences("mon", 10, "sun"), Ok(1));
/// assert!(count_occurrences("mon", 10, "someday").is_err());
/// ```
pub fn count_occurrences(start_day: &str, total_days: u64, target_day: &str) -> Result<u64, Error> {
    let start: Day = start_day.parse()?;
    let target: Day = target_day.parse()?;
    Ok(count_between(start, total_days, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn sundays_after_a_monday_start() {
        assert_eq!(count_occurrences("mon", 10, "sun"), Ok(1));
        assert_eq!(count_occurrences("mon", 14, "sun"), Ok(2));
    }

    #[test]
    fn target_before_first_occurrence_counts_zero() {
        // Sunday first falls on day 6.
        assert_eq!(count_between(Day::Mon, 5, Day::Sun), 0);
        assert_eq!(count_between(Day::Mon, 6, Day::Sun), 1);
    }

    #[test]
    fn zero_total_days_counts_zero() {
        assert_eq!(count_between(Day::Wed, 0, Day::Wed), 0);
        assert_eq!(count_between(Day::Wed, 0, Day::Thu), 0);
    }

    #[test]
    fn same_day_needs_a_full_wrap() {
        assert_eq!(count_between(Day::Tue, 6, Day::Tue), 0);
        assert_eq!(count_between(Day::Tue, 7, Day::Tue), 1);
        assert_eq!(count_between(Day::Tue, 20, Day::Tue), 2);
        assert_eq!(count_between(Day::Tue, 21, Day::Tue), 3);
    }

    #[test]
    fn wrap_around_the_week_boundary() {
        // Saturday start, Monday target: first occurrence is day 2.
        assert_eq!(count_between(Day::Sat, 1, Day::Mon), 0);
        assert_eq!(count_between(Day::Sat, 2, Day::Mon), 1);
        assert_eq!(count_between(Day::Sat, 9, Day::Mon), 2);
    }

    #[test]
    fn long_ranges_count_one_per_week() {
        // 365 days starting on Monday hold 52 Sundays (day 6, 13, ..., 362).
        assert_eq!(count_between(Day::Mon, 365, Day::Sun), 52);
    }

    #[test]
    fn tokens_parse_case_insensitively() {
        assert_eq!(count_occurrences("MON", 10, "Sun"), Ok(1));
        assert_eq!("tHu".parse::<Day>(), Ok(Day::Thu));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        for (start, target) in [("mon", "later"), ("yesterday", "sun"), ("", "sun")] {
            let err = count_occurrences(start, 10, target).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(matches!(err, Error::UnknownDay(_)));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for day in [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat, Day::Sun] {
            assert_eq!(day.to_string().parse::<Day>(), Ok(day));
        }
    }
}
