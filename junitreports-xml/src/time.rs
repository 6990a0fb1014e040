// Copyright (c) The junitreports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time formatting for JUnit attributes.
//!
//! All formatting here is done with integer arithmetic and fixed patterns, so the output does not
//! depend on the host locale: the decimal separator is always a period and there are no grouping
//! separators.

use chrono::{DateTime, Utc};
use std::time::Duration;

const NANOS_PER_MILLI: u128 = 1_000_000;

/// Formats a number of milliseconds as seconds with exactly three decimal places.
///
/// ```
/// use junitreports_xml::time::format_millis;
///
/// assert_eq!(format_millis(125), "0.125");
/// assert_eq!(format_millis(1_234_567), "1234.567");
/// ```
pub fn format_millis(millis: u64) -> String {
    format!("{}.{:03}", millis / 1000, millis % 1000)
}

/// Converts a duration to whole milliseconds, rounding half up.
pub fn duration_to_millis(duration: Duration) -> u64 {
    let millis = (duration.as_nanos() + NANOS_PER_MILLI / 2) / NANOS_PER_MILLI;
    u64::try_from(millis).unwrap_or(u64::MAX)
}

/// Formats a duration as seconds with exactly three decimal places, rounding half up.
pub fn format_duration(duration: Duration) -> String {
    format_millis(duration_to_millis(duration))
}

/// Formats a timestamp in the legacy GMT string form, e.g. `18 Oct 2026 09:05:03 GMT`.
pub fn format_gmt_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-d %b %Y %H:%M:%S GMT").to_string()
}
