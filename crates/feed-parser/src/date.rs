// crates/feed-parser/src/date.rs
//! Permissive timestamp parsing
//!
//! Feeds in the wild carry dates in far more shapes than RFC 822 and
//! RFC 3339 allow. [`DateNormalizer`] walks an ordered table of layouts and
//! returns the first one that consumes the whole input and yields a valid
//! calendar date and time.
//!
//! Layouts are `chrono` strftime patterns with one extension: `%Z` marks a
//! zone abbreviation that the normalizer resolves itself (RFC 822 names such
//! as `GMT` or `PST`). Unknown abbreviations, and layouts without any zone,
//! are interpreted in the normalizer's reference offset (UTC by default).

use crate::error::{FeedError, FeedResult};
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

/// How a layout determines the UTC offset of the instant it parses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The pattern contains a numeric offset (`%z`, `%:z`, `%#z`, ...)
    Numeric,
    /// The pattern ends in a literal UTC designator such as `Z`
    Utc,
    /// `%Z` marks a zone abbreviation resolved by the normalizer
    Named,
    /// The input carries no zone; the reference offset applies
    Reference,
}

/// One accepted textual date/time representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pattern: &'static str,
    zone: Zone,
}

impl Layout {
    const fn new(pattern: &'static str, zone: Zone) -> Self {
        Self { pattern, zone }
    }

    /// The strftime pattern
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// How the offset is determined
    pub fn zone(&self) -> Zone {
        self.zone
    }

    fn has_time(&self) -> bool {
        self.pattern.contains("%H") || self.pattern.contains("%I")
    }

    fn parse(&self, text: &str, reference: FixedOffset) -> Option<DateTime<Utc>> {
        let mut parsed = Parsed::new();

        let offset = match self.zone {
            Zone::Named => parse_named(&mut parsed, self.pattern, text, reference)?,
            Zone::Utc => {
                format::parse(&mut parsed, text, StrftimeItems::new(self.pattern)).ok()?;
                Utc.fix()
            }
            Zone::Numeric | Zone::Reference => {
                format::parse(&mut parsed, text, StrftimeItems::new(self.pattern)).ok()?;
                reference
            }
        };

        if self.has_time() && !self.pattern.contains("%M") {
            parsed.set_minute(0).ok()?;
        }

        // An explicit numeric offset always wins over names and the reference
        if matches!(self.zone, Zone::Numeric | Zone::Named) {
            if let Ok(dt) = parsed.to_datetime() {
                return Some(dt.with_timezone(&Utc));
            }
            if self.zone == Zone::Numeric {
                return None;
            }
        }

        let local = if self.has_time() {
            parsed.to_naive_datetime_with_offset(0).ok()?
        } else {
            parsed.to_naive_date().ok()?.and_hms_opt(0, 0, 0)?
        };

        offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Parses `text` against a pattern containing `%Z`, returning the offset the
/// zone abbreviation stands for
fn parse_named(
    parsed: &mut Parsed,
    pattern: &str,
    text: &str,
    reference: FixedOffset,
) -> Option<FixedOffset> {
    let (head, tail) = pattern.split_once("%Z")?;
    let rest = format::parse_and_remainder(parsed, text, StrftimeItems::new(head)).ok()?;
    let rest = rest.trim_start();

    let len = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (token, rest) = rest.split_at(len);

    let offset = match zone_offset(token) {
        Some(offset) => offset,
        None if looks_like_zone(token) => reference,
        None => return None,
    };

    format::parse(parsed, rest, StrftimeItems::new(tail)).ok()?;
    Some(offset)
}

/// RFC 822 zone names (plus `UTC`) and their offsets in hours
const ZONES: &[(&str, i32)] = &[
    ("UT", 0),
    ("UTC", 0),
    ("GMT", 0),
    ("Z", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

fn zone_offset(token: &str) -> Option<FixedOffset> {
    ZONES
        .iter()
        .find(|(name, _)| *name == token)
        .and_then(|(_, hours)| FixedOffset::east_opt(hours * 3600))
}

fn looks_like_zone(token: &str) -> bool {
    (3..=5).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_uppercase())
}

use Zone::{Named, Numeric, Reference, Utc as Zulu};

/// Known layouts, tried in order
///
/// Weekday names are removed from the input before matching, so no layout
/// mentions one. `%B` reads both full and abbreviated month names.
/// Two-digit-year variants sit in front of their four-digit counterparts
/// because `%Y` happily reads `06` as the year 6.
pub static LAYOUTS: &[Layout] = &[
    // RFC 1123 / RFC 2822 and RFC 3339, the overwhelming majority
    Layout::new("%d %B %y %H:%M:%S %z", Numeric),
    Layout::new("%d %B %y %H:%M:%S %Z", Named),
    Layout::new("%d %B %Y %H:%M:%S %z", Numeric),
    Layout::new("%d %B %Y %H:%M:%S %Z", Named),
    Layout::new("%Y-%m-%dT%H:%M:%S%.fZ", Zulu),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f%:z", Numeric),
    // Remaining standard layouts (RFC 822, RFC 850, ANSI C, Unix, Ruby)
    Layout::new("%d %B %y %H:%M %z", Numeric),
    Layout::new("%d %B %y %H:%M %Z", Named),
    Layout::new("%d-%B-%y %H:%M:%S %Z", Named),
    Layout::new("%B %e %H:%M:%S %Y", Reference),
    Layout::new("%B %e %H:%M:%S %Z %Y", Named),
    Layout::new("%B %d %H:%M:%S %z %Y", Numeric),
    // ISO 8601 look-alikes
    Layout::new("%Y-%m-%dT%H:%M:%S%.f%z", Numeric),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f %z", Numeric),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f:%z", Numeric),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f%::z", Numeric),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f%#z", Numeric),
    Layout::new("%Y-%m-%dT%H:%M:%S:00", Reference),
    Layout::new("%Y-%m-%dT%H:%M:%S%.f", Reference),
    Layout::new("%Y-%m-%dT%H:%MZ", Zulu),
    Layout::new("%Y-%m-%dT%H:%M%:z", Numeric),
    Layout::new("%y-%m-%d %H:%M", Reference),
    Layout::new("%y/%m/%d %H:%M", Reference),
    Layout::new("%Y-%m-%d %H:%M:%S%.fZ", Zulu),
    Layout::new("%Y-%m-%d %H:%M:%S %z", Numeric),
    Layout::new("%Y-%m-%d %H:%M:%S%:z", Numeric),
    Layout::new("%Y-%m-%d %H:%M:%S%z", Numeric),
    Layout::new("%Y-%m-%d %H:%M:%S %Z", Named),
    Layout::new("%Y-%m-%d %H:%M:%S", Reference),
    Layout::new("%Y-%m-%d 00:00:00.0 %H:%M:%S%.f %z", Numeric),
    Layout::new("%Y-%m-%d at %H:%M:%S", Reference),
    Layout::new("%Y-%m-%d %H:%M", Reference),
    Layout::new("%Y-%m-%d", Reference),
    Layout::new("%Y/%m/%d", Reference),
    Layout::new("%Y %B %d", Reference),
    // Numeric dates, month first before day first
    Layout::new("%m/%d/%Y %H:%M:%S %Z", Named),
    Layout::new("%m/%d/%Y %I:%M:%S %p %Z", Named),
    Layout::new("%m/%d/%Y %I:%M:%S %p", Reference),
    Layout::new("%m/%d/%Y %I:%M %p", Reference),
    Layout::new("%m/%d/%Y - %H:%M", Reference),
    Layout::new("%m/%d/%Y", Reference),
    Layout::new("%m-%d-%Y", Reference),
    Layout::new("%d/%m/%Y %H:%M:%S", Reference),
    Layout::new("%d/%m/%Y %H:%M %Z", Named),
    Layout::new("%d/%m/%Y - %H:%M", Reference),
    Layout::new("%d/%m/%Y", Reference),
    Layout::new("%d-%m-%Y %H:%M:%S %Z", Named),
    Layout::new("%d-%m-%Y", Reference),
    Layout::new("%d.%m.%Y %H:%M:%S", Reference),
    Layout::new("%d.%m.%Y %H:%M", Reference),
    Layout::new("%d.%m.%Y", Reference),
    Layout::new("%H:%M %d.%m.%Y %z", Numeric),
    // Day then month name, sloppy RFC 1123 variants
    Layout::new("%d %B %Y %H:%M:%S %#z", Numeric),
    Layout::new("%d %B %Y %H:%M:%S -%z", Numeric),
    Layout::new("%d %B %Y %H:%M:%S GMT%z", Numeric),
    Layout::new("%d %B %Y %H:%M:%S %z %Z", Numeric),
    Layout::new("%d %B %Y %H:%M:%S %Z %z", Named),
    Layout::new("%d %B %Y %H:%M:%S %Z%:z", Named),
    Layout::new("%d %B %Y %H:%M:%S%z", Numeric),
    Layout::new("%d %B %Y %H:%M:%S%Z", Named),
    Layout::new("%d %B %Y %H:%M:%S 00", Reference),
    Layout::new("%d %B %Y %H:%M:%S", Reference),
    Layout::new("%d %B %Y, %H:%M:%S %Z", Named),
    Layout::new("%d %B %Y %H:%M %z", Numeric),
    Layout::new("%d %B %Y, %H:%M %z", Numeric),
    Layout::new("%d %B %Y %H:%M %Z", Named),
    Layout::new("%d %B %Y %H:%M", Reference),
    Layout::new("%d %B %Y %H %z", Numeric),
    Layout::new("%d %B %Y %I:%M:%S %p %z", Numeric),
    Layout::new("%d %B %Y %I:%M:%S %p %Z", Named),
    Layout::new("%d, %B %Y %H:%M", Reference),
    Layout::new("%d %B %Y", Reference),
    // Month name first
    Layout::new("%B %d %Y %H:%M:%S %z", Numeric),
    Layout::new("%B %e %H:%M:%S %Y %Z", Named),
    Layout::new("%B %e %H:%M %Y", Reference),
    Layout::new("%B %d,%Y %H:%M:%S %Z", Named),
    Layout::new("%B %d %Y %H:%M %Z", Named),
    Layout::new("%B %d %Y %I:%M:%S%p", Reference),
    Layout::new("%B %d, %Y, %H:%M:%S %Z", Named),
    Layout::new("%B %d, %Y %H:%M:%S %Z", Named),
    Layout::new("%B %d, %Y %H:%M %Z", Named),
    Layout::new("%B %d, %Y %I:%M:%S %p %Z", Named),
    Layout::new("%B %d, %Y %I:%M:%S %p", Reference),
    Layout::new("%B %d, %Y %I:%M %p", Reference),
    Layout::new("%B %d, %Y %H:%M:%S", Reference),
    Layout::new("%B %d, %Y %H:%M", Reference),
    Layout::new("%B %d, %Y", Reference),
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "mon", "tue",
    "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun",
];

fn is_weekday(word: &str) -> bool {
    WEEKDAYS.iter().any(|day| day.eq_ignore_ascii_case(word))
}

/// Removes weekday names (and the commas after them) from `text`
///
/// Feeds frequently pair a date with the wrong weekday; the date wins.
fn strip_weekdays(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(|c: char| c.is_ascii_alphabetic()) {
        let (before, word_on) = rest.split_at(start);
        let len = word_on
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(word_on.len());
        let (word, after) = word_on.split_at(len);

        out.push_str(before);
        if is_weekday(word) {
            rest = after.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        } else {
            out.push_str(word);
            rest = after;
        }
    }

    out.push_str(rest);
    out.truncate(out.trim_end().len());
    out
}

/// Widens a trailing three-digit offset (`-700`) to four digits
fn pad_short_offset(text: &mut String) {
    let tail = text.rsplit(' ').next().unwrap_or_default();
    let bytes = tail.as_bytes();
    if tail.len() != text.len()
        && bytes.len() == 4
        && matches!(bytes[0], b'+' | b'-')
        && bytes[1..].iter().all(u8::is_ascii_digit)
    {
        let at = text.len() - 3;
        text.insert(at, '0');
    }
}

/// Converts free-form timestamps into UTC instants
///
/// The layout table is static and shared; a normalizer only adds the
/// reference offset used for inputs that carry no zone of their own.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer {
    layouts: &'static [Layout],
    reference: FixedOffset,
}

impl DateNormalizer {
    /// Creates a normalizer that reads zone-less dates as UTC
    pub fn new() -> Self {
        Self::with_reference_offset(Utc.fix())
    }

    /// Creates a normalizer with a custom reference offset
    pub fn with_reference_offset(reference: FixedOffset) -> Self {
        Self {
            layouts: LAYOUTS,
            reference,
        }
    }

    /// Offset applied to inputs without zone information
    pub fn reference_offset(&self) -> FixedOffset {
        self.reference
    }

    /// Number of layouts in the table
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Parses a timestamp, trying each layout in order
    ///
    /// Surrounding whitespace and weekday names are ignored. Sub-second
    /// precision is kept when the layout reads it.
    pub fn parse_instant(&self, text: &str) -> FeedResult<DateTime<Utc>> {
        let mut cleaned = strip_weekdays(text.trim());
        pad_short_offset(&mut cleaned);

        for layout in self.layouts {
            if let Some(instant) = layout.parse(&cleaned, self.reference) {
                log::trace!("{:?} matched layout {:?}", text, layout.pattern);
                return Ok(instant);
            }
        }

        Err(FeedError::DateFormatUnrecognized {
            input: text.to_string(),
            attempted: self.layouts.len(),
        })
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a timestamp with the default (UTC reference) normalizer
pub fn parse_instant(text: &str) -> FeedResult<DateTime<Utc>> {
    DateNormalizer::new().parse_instant(text)
}
