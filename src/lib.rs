//! This crate collects a set of classic array, string, and numeric pattern
//! routines: single-pass partitions, base-2 text conversions, cyclic weekday
//! counting, running-maximum scans, digit arithmetic, fixed-window character
//! counting, and small combinatorics.
//!
//! Every routine is a pure function over caller-owned data: no state is
//! retained across calls and nothing is shared, so all of them can be called
//! freely from concurrent call sites. The in-place routines
//! ([`partition::move_to_end`], [`flag_sort::sort_limited_range`]) reorder
//! the caller's slice; copy first if the original order matters.
//!
//! Precondition violations (an unknown day token, a value outside the
//! {0, 1, 2} sort domain, malformed base-2 text) surface as an explicit
//! [`Error`] instead of a sentinel value, classified by [`ErrorKind`].

pub mod bits;
pub mod cycle;
pub mod digits;
pub mod error;
pub mod flag_sort;
pub mod partition;
pub mod perm;
pub mod scan;
pub mod window;

pub mod gen_sequences;

pub mod utils;

pub use cycle::Day;
pub use error::{Error, ErrorKind};
