//! The comparator registry: a fixed set of total ordering functions over
//! extracted cell text.
//!
//! Every comparator is total. Malformed input degrades to a neutral value
//! (zero for numbers, the raw text for dates) instead of failing, so
//! irregular cell content can never block a sort.

use std::cmp::Ordering;

/// A named comparison function from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Mixed content: numeric keys order before textual keys.
    AlphaNumeric,
    /// `DD<sep>MM<sep>YYYY` dates with separator `/`, `.` or `-`.
    DateDayFirst,
    /// `MM<sep>DD<sep>YYYY` dates with separator `/`, `.` or `-`.
    DateMonthFirst,
    /// Numbers with `.` as the decimal separator (plain, currency, percent).
    NumericPeriod,
    /// Numbers with `,` as the decimal separator.
    NumericComma,
}

impl Comparator {
    /// All registry entries, in registry order.
    pub const ALL: [Comparator; 5] = [
        Comparator::AlphaNumeric,
        Comparator::DateDayFirst,
        Comparator::DateMonthFirst,
        Comparator::NumericPeriod,
        Comparator::NumericComma,
    ];

    /// Looks up a comparator by its registry name.
    ///
    /// Collaborators use this to wire custom override tags.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "alphanumeric" => Some(Self::AlphaNumeric),
            "date-day-first" => Some(Self::DateDayFirst),
            "date-month-first" => Some(Self::DateMonthFirst),
            "numeric-period" => Some(Self::NumericPeriod),
            "numeric-comma" => Some(Self::NumericComma),
            _ => None,
        }
    }

    /// The registry name of this comparator.
    pub fn name(self) -> &'static str {
        match self {
            Self::AlphaNumeric => "alphanumeric",
            Self::DateDayFirst => "date-day-first",
            Self::DateMonthFirst => "date-month-first",
            Self::NumericPeriod => "numeric-period",
            Self::NumericComma => "numeric-comma",
        }
    }

    /// Compares two extracted text keys.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::AlphaNumeric => alphanumeric(a, b),
            Self::DateDayFirst => date(a, b, DateOrder::DayFirst),
            Self::DateMonthFirst => date(a, b, DateOrder::MonthFirst),
            Self::NumericPeriod => numeric(a, b, '.'),
            Self::NumericComma => numeric(a, b, ','),
        }
    }
}

/// How a key participates in alphanumeric ordering.
enum AlphaKey<'a> {
    Number(f64),
    Text(&'a str),
}

fn alpha_key(s: &str) -> AlphaKey<'_> {
    if s.is_empty() {
        // Empty cells sort as numeric zero.
        return AlphaKey::Number(0.0);
    }
    // A leading zero keeps the key textual so "007" and "7" stay distinct.
    if s.starts_with('0') {
        return AlphaKey::Text(s);
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => AlphaKey::Number(n),
        _ => AlphaKey::Text(s),
    }
}

/// Numeric keys order before textual keys; numbers compare by value,
/// text compares case- and accent-sensitively.
fn alphanumeric(a: &str, b: &str) -> Ordering {
    match (alpha_key(a), alpha_key(b)) {
        (AlphaKey::Number(x), AlphaKey::Number(y)) => x.total_cmp(&y),
        (AlphaKey::Number(_), AlphaKey::Text(_)) => Ordering::Less,
        (AlphaKey::Text(_), AlphaKey::Number(_)) => Ordering::Greater,
        (AlphaKey::Text(x), AlphaKey::Text(y)) => x.cmp(y),
    }
}

#[derive(Debug, Clone, Copy)]
enum DateOrder {
    DayFirst,
    MonthFirst,
}

/// Rebuilds a `YYYYMMDD` (or `YYMMDD` for two-digit years) key from the
/// fixed offsets of a `NN<sep>NN<sep>YEAR` string. Trailing content
/// after a four-digit year is ignored, so timestamps still key on their
/// date part. Returns `None` when the key does not have that shape.
fn date_key(s: &str, order: DateOrder) -> Option<Vec<u8>> {
    let b = s.as_bytes();
    let year: &[u8] = if b.len() >= 10 {
        &b[6..10]
    } else if b.len() == 8 {
        &b[6..8]
    } else {
        return None;
    };
    let sep = b[2];
    if !matches!(sep, b'/' | b'.' | b'-') || b[5] != sep {
        return None;
    }
    let mut digits = b[..2].iter().chain(&b[3..5]).chain(year);
    if !digits.all(u8::is_ascii_digit) {
        return None;
    }
    let (month, day) = match order {
        DateOrder::DayFirst => (&b[3..5], &b[..2]),
        DateOrder::MonthFirst => (&b[..2], &b[3..5]),
    };
    let mut key = Vec::with_capacity(8);
    key.extend_from_slice(year);
    key.extend_from_slice(month);
    key.extend_from_slice(day);
    Some(key)
}

/// Dates compare by their rebuilt `YYYYMMDD` form; anything malformed
/// falls through to plain string comparison of the raw keys.
fn date(a: &str, b: &str, order: DateOrder) -> Ordering {
    match (date_key(a, order), date_key(b, order)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        _ => a.cmp(b),
    }
}

/// Strips everything except digits, the decimal separator, and `-`, then
/// coerces to a number. Unparseable residue counts as zero.
fn numeric_value(s: &str, decimal: char) -> f64 {
    let mut cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == decimal || *c == '-')
        .collect();
    if decimal == ',' {
        cleaned = cleaned.replace(',', ".");
    }
    cleaned.parse().unwrap_or(0.0)
}

fn numeric(a: &str, b: &str, decimal: char) -> Ordering {
    numeric_value(a, decimal).total_cmp(&numeric_value(b, decimal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for comparator in Comparator::ALL {
            assert_eq!(Comparator::by_name(comparator.name()), Some(comparator));
        }
        assert_eq!(Comparator::by_name("bogus"), None);
    }

    #[test]
    fn numeric_value_strips_currency() {
        assert_eq!(numeric_value("$1,234.50", '.'), 1234.50);
        assert_eq!(numeric_value("N/A", '.'), 0.0);
        assert_eq!(numeric_value("1.234,50", ','), 1234.50);
    }

    #[test]
    fn date_key_requires_fixed_shape() {
        assert_eq!(
            date_key("25/12/2023", DateOrder::DayFirst),
            Some(b"20231225".to_vec())
        );
        assert_eq!(
            date_key("25/12/22", DateOrder::DayFirst),
            Some(b"221225".to_vec())
        );
        assert_eq!(date_key("5/1/2023", DateOrder::DayFirst), None);
        assert_eq!(date_key("25/12/202", DateOrder::DayFirst), None);
        assert_eq!(date_key("not a date", DateOrder::DayFirst), None);
    }

    #[test]
    fn date_key_ignores_trailing_time_component() {
        assert_eq!(
            date_key("25/12/2023 10:30", DateOrder::DayFirst),
            Some(b"20231225".to_vec())
        );
    }
}
