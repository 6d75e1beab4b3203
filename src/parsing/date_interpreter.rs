//! Flexible date parsing without a declared format.
//!
//! Dates in assignment files arrive in whatever spelling the exporting tool
//! chose. The [`DateInterpreter`] tries every pattern in [`SUPPORTED_FORMATS`]
//! and flags a value as ambiguous when two patterns accept it but disagree on
//! the resulting calendar day (`01/05/2005` is January 5 or May 1).

use std::collections::BTreeSet;

use chrono::{Datelike, Month, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{EngineError, EngineResult};

/// One row of the format table: pattern, anchored matcher, chrono layout.
struct FormatRule {
    pattern: &'static str,
    matcher: &'static str,
    layout: &'static str,
}

const fn rule(pattern: &'static str, matcher: &'static str, layout: &'static str) -> FormatRule {
    FormatRule {
        pattern,
        matcher,
        layout,
    }
}

// `MM`/`dd` and `M`/`d` all take one or two digits when a separator follows.
// The compact ISO form has no separators, so its digit run is split by width.
const FORMAT_TABLE: [FormatRule; 17] = [
    // ISO
    rule(
        "yyyy-MM-dd",
        r"^(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})$",
        "%Y-%m-%d",
    ),
    rule(
        "yyyy/MM/dd",
        r"^(?P<year>\d{4})/(?P<month>\d{1,2})/(?P<day>\d{1,2})$",
        "%Y/%m/%d",
    ),
    rule(
        "yyyyMMdd",
        r"^(?P<year>\d{4})(?P<month>\d{2})(?P<day>\d{2})$",
        "%Y%m%d",
    ),
    // US
    rule(
        "MM/dd/yyyy",
        r"^(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{4})$",
        "%m/%d/%Y",
    ),
    rule(
        "M/d/yyyy",
        r"^(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{4})$",
        "%-m/%-d/%Y",
    ),
    rule(
        "MM-dd-yyyy",
        r"^(?P<month>\d{1,2})-(?P<day>\d{1,2})-(?P<year>\d{4})$",
        "%m-%d-%Y",
    ),
    rule(
        "M-d-yyyy",
        r"^(?P<month>\d{1,2})-(?P<day>\d{1,2})-(?P<year>\d{4})$",
        "%-m-%-d-%Y",
    ),
    // EU
    rule(
        "dd/MM/yyyy",
        r"^(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year>\d{4})$",
        "%d/%m/%Y",
    ),
    rule(
        "d/M/yyyy",
        r"^(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year>\d{4})$",
        "%-d/%-m/%Y",
    ),
    rule(
        "dd-MM-yyyy",
        r"^(?P<day>\d{1,2})-(?P<month>\d{1,2})-(?P<year>\d{4})$",
        "%d-%m-%Y",
    ),
    rule(
        "d-M-yyyy",
        r"^(?P<day>\d{1,2})-(?P<month>\d{1,2})-(?P<year>\d{4})$",
        "%-d-%-m-%Y",
    ),
    // Two-digit year
    rule(
        "MM/dd/yy",
        r"^(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year2>\d{2})$",
        "%m/%d/%y",
    ),
    rule(
        "dd/MM/yy",
        r"^(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year2>\d{2})$",
        "%d/%m/%y",
    ),
    // Month names
    rule(
        "dd MMM yyyy",
        r"^(?P<day>\d{1,2}) (?P<month_name>[A-Za-z]{3}) (?P<year>\d{4})$",
        "%d %b %Y",
    ),
    rule(
        "MMM dd yyyy",
        r"^(?P<month_name>[A-Za-z]{3}) (?P<day>\d{1,2}) (?P<year>\d{4})$",
        "%b %d %Y",
    ),
    rule(
        "dd MMMM yyyy",
        r"^(?P<day>\d{1,2}) (?P<month_name>[A-Za-z]+) (?P<year>\d{4})$",
        "%d %B %Y",
    ),
    rule(
        "MMMM dd yyyy",
        r"^(?P<month_name>[A-Za-z]+) (?P<day>\d{1,2}) (?P<year>\d{4})$",
        "%B %d %Y",
    ),
];

/// Recognized date patterns, highest priority first.
///
/// ISO spellings come first, then US month-first, then EU day-first, then
/// two-digit years and month names.
pub const SUPPORTED_FORMATS: [&str; 17] = {
    let mut patterns = [""; 17];
    let mut i = 0;
    while i < FORMAT_TABLE.len() {
        patterns[i] = FORMAT_TABLE[i].pattern;
        i += 1;
    }
    patterns
};

/// Compiled matchers, in priority order.
static DATE_FORMATS: Lazy<Vec<DateFormat>> = Lazy::new(|| {
    FORMAT_TABLE
        .iter()
        .map(|entry| DateFormat {
            pattern: entry.pattern,
            matcher: Regex::new(entry.matcher).expect("date format table holds valid regexes"),
            layout: entry.layout,
        })
        .collect()
});

/// One supported date pattern with its compiled matcher.
///
/// # Example
///
/// ```
/// use overlap_engine::parsing::DateFormat;
/// use chrono::NaiveDate;
///
/// let format = DateFormat::supported()
///     .iter()
///     .find(|f| f.pattern() == "dd MMMM yyyy")
///     .unwrap();
/// let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
/// assert_eq!(format.format(date), "05 January 2023");
/// assert_eq!(format.parse("5 January 2023", date), Some(date));
/// ```
#[derive(Debug, Clone)]
pub struct DateFormat {
    pattern: &'static str,
    matcher: Regex,
    layout: &'static str,
}

impl DateFormat {
    /// Returns every entry of [`SUPPORTED_FORMATS`], compiled once, in
    /// priority order.
    pub fn supported() -> &'static [DateFormat] {
        &DATE_FORMATS
    }

    /// Returns the pattern text, e.g. `"MM/dd/yyyy"`.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Parses `text` strictly under this pattern.
    ///
    /// Returns `None` unless the whole text matches the pattern and the
    /// fields form a real calendar day. `reference` anchors two-digit years
    /// to the window `[reference_year - 50, reference_year + 49]`.
    pub fn parse(&self, text: &str, reference: NaiveDate) -> Option<NaiveDate> {
        let captures = self.matcher.captures(text)?;

        let year = match captures.name("year") {
            Some(year) => year.as_str().parse().ok()?,
            None => resolve_two_digit_year(number(&captures, "year2")?, reference.year()),
        };

        let month = match captures.name("month_name") {
            Some(name) => name.as_str().parse::<Month>().ok()?.number_from_month(),
            None => number(&captures, "month")?,
        };

        let day = number(&captures, "day")?;

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Renders `date` in this pattern.
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.layout).to_string()
    }
}

fn number<T: std::str::FromStr>(captures: &Captures, group: &str) -> Option<T> {
    captures.name(group)?.as_str().parse().ok()
}

/// Places a two-digit year in the hundred years around `reference_year`.
fn resolve_two_digit_year(two_digit: i32, reference_year: i32) -> i32 {
    let range_end = reference_year + 50;
    let century = range_end.div_euclid(100) * 100;
    if two_digit >= range_end.rem_euclid(100) {
        century + two_digit - 100
    } else {
        century + two_digit
    }
}

/// The outcome of interpreting one date cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseResult {
    /// The date produced by the highest-priority matching pattern.
    pub date: NaiveDate,
    /// True when matching patterns disagree on the calendar day.
    pub is_ambiguous: bool,
    /// The pattern that produced `date`; `None` for the blank/`NULL` default.
    pub format: Option<&'static str>,
}

/// Interprets date text against the fixed list of supported patterns.
///
/// The interpreter is built around an explicit "today", which is returned for
/// blank cells and `NULL` (an open-ended assignment) and anchors two-digit
/// years. It never reads the system clock.
///
/// # Example
///
/// ```
/// use overlap_engine::parsing::DateInterpreter;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let interpreter = DateInterpreter::new(today);
///
/// let result = interpreter.parse(Some("01/05/2005")).unwrap();
/// assert_eq!(result.date, NaiveDate::from_ymd_opt(2005, 1, 5).unwrap());
/// assert!(result.is_ambiguous);
///
/// let open_ended = interpreter.parse(Some("NULL")).unwrap();
/// assert_eq!(open_ended.date, today);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateInterpreter {
    today: NaiveDate,
}

impl DateInterpreter {
    /// Creates an interpreter that treats `today` as the current date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Returns the injected current date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the compiled patterns in priority order.
    pub fn formats(&self) -> &'static [DateFormat] {
        DateFormat::supported()
    }

    /// Parses one date cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] with the trimmed text when
    /// no pattern accepts it.
    pub fn parse(&self, input: Option<&str>) -> EngineResult<ParseResult> {
        let raw = input.map(str::trim).unwrap_or_default();

        if raw.is_empty() || raw.eq_ignore_ascii_case("NULL") {
            return Ok(ParseResult {
                date: self.today,
                is_ambiguous: false,
                format: None,
            });
        }

        let mut first = None;
        let mut distinct = BTreeSet::new();

        for format in self.formats() {
            if let Some(date) = format.parse(raw, self.today) {
                first.get_or_insert((date, format.pattern()));
                distinct.insert(date);
            }
        }

        let (date, pattern) = first.ok_or_else(|| EngineError::UnsupportedFormat {
            text: raw.to_string(),
        })?;

        Ok(ParseResult {
            date,
            is_ambiguous: distinct.len() > 1,
            format: Some(pattern),
        })
    }
}
