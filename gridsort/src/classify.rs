//! One-time comparator inference from a column sample.
//!
//! Classification runs once per column, at registration, against the
//! first data row's cell. Columns whose content changes type after the
//! first row keep the comparator inferred here; that is an accepted
//! limitation of sample-based inference.

use std::sync::LazyLock;

use regex::Regex;

use crate::compare::Comparator;
use crate::text::visible_text;

/// Plain numbers, currency, and percentages: optional leading minus, an
/// optional non-digit prefix, digits with grouping/decimal separators,
/// optional trailing percent sign and whitespace.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[£$€¤]?[\d,.]*\d[\d,.]*\s*%?\s*$").expect("numeric pattern")
});

/// `N<sep>N<sep>N` date shapes: 1-2 digit day/month groups and a 2 or 4
/// digit year, with `/`, `.` or `-` separators.
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})$").expect("date pattern")
});

/// Selects the comparator for a column from one representative sample.
///
/// An override tag naming a registry entry always wins. Otherwise the
/// sample is matched against the numeric pattern, then the date pattern
/// (disambiguated day-first unless the second group forces month-first),
/// and finally falls back to [`Comparator::AlphaNumeric`].
pub fn classify(sample: &str, override_tag: Option<&str>) -> Comparator {
    if let Some(tag) = override_tag {
        if let Some(comparator) = Comparator::by_name(tag) {
            log::debug!("[classify] override tag {tag:?} selects {comparator:?}");
            return comparator;
        }
        log::debug!("[classify] ignoring unknown override tag {tag:?}");
    }

    let sample = visible_text(sample);
    if sample.is_empty() {
        return Comparator::AlphaNumeric;
    }

    if NUMERIC.is_match(sample) {
        return Comparator::NumericPeriod;
    }

    if let Some(caps) = DATE.captures(sample) {
        let first: u32 = caps[1].parse().unwrap_or(0);
        let second: u32 = caps[2].parse().unwrap_or(0);
        let comparator = if first > 12 {
            Comparator::DateDayFirst
        } else if second > 12 {
            Comparator::DateMonthFirst
        } else {
            // Both groups could be a month; day-first by convention.
            Comparator::DateDayFirst
        };
        log::debug!("[classify] sample {sample:?} looks like a date, using {comparator:?}");
        return comparator;
    }

    Comparator::AlphaNumeric
}
