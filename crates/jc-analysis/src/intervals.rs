//! Interval bucket generation
//!
//! Bucket density balances chart readability against range length:
//! weekly boundaries up to a month, bi-weekly up to four months, monthly
//! beyond that. The range end is always the final boundary and a series
//! never has fewer than two points.

use chrono::{Months, NaiveDate};
use tracing::warn;

use crate::filter::DateRange;

const WEEKLY_MAX_DAYS: i64 = 31;
const BIWEEKLY_MAX_DAYS: i64 = 120;

/// Boundary dates for a query range, in increasing order.
///
/// Falls back to the plain `[start, end]` pair instead of failing when the
/// range is degenerate.
pub fn bucket_boundaries(range: &DateRange) -> Vec<NaiveDate> {
    if range.start > range.end {
        warn!(start = %range.start, end = %range.end, "inverted range; falling back to endpoints");
        return vec![range.start, range.end];
    }

    let days = range.days();
    let mut boundaries = if days <= WEEKLY_MAX_DAYS {
        step_days(range, 7)
    } else if days <= BIWEEKLY_MAX_DAYS {
        step_days(range, 14)
    } else {
        step_months(range)
    };

    if boundaries.last() != Some(&range.end) {
        boundaries.push(range.end);
    }
    if boundaries.len() < 2 {
        boundaries = vec![range.start, range.end];
    }
    boundaries
}

fn step_days(range: &DateRange, step: u64) -> Vec<NaiveDate> {
    let mut boundaries = Vec::new();
    let mut cursor = range.start;
    while cursor <= range.end {
        boundaries.push(cursor);
        cursor += chrono::Duration::days(step as i64);
    }
    boundaries
}

fn step_months(range: &DateRange) -> Vec<NaiveDate> {
    let mut boundaries = Vec::new();
    let mut cursor = range.start;
    let mut months = 0u32;
    while cursor <= range.end {
        boundaries.push(cursor);
        months += 1;
        match range.start.checked_add_months(Months::new(months)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    boundaries
}
