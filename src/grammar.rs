//! The element grammar for weekly hours descriptions.
//!
//! A description such as `"Mon-Fri 11-3pm, Sat 9am-1pm, Sun closed"` is
//! scanned into a sequence of [`Token`]s by repeatedly trying the element
//! parsers in a fixed priority order at the head of the remaining text.
//! Characters nothing matches (filler words like "lunch") are dropped one
//! at a time, so tokenization itself never fails.

use std::fmt;

use regex::Regex;

use lazy_static::lazy_static;
use tracing::trace;

use crate::datatype::{ClockTime, Day};

lazy_static! {
    // optional-space hyphen optional-space, between the days of a range
    static ref RANGE_SEPARATOR: Regex = Regex::new(r"^ ?- ?").unwrap();
    // hour[sep minutes][meridiem] - hour[sep minutes][meridiem], where the
    // hours carry face values 1-12 and any single character may introduce
    // the minutes; the end meridiem is checked for separately
    static ref TIME_PATTERN: Regex = Regex::new(
        r"^(1[0-2]|[1-9])(?:.([0-5][0-9]))?(am|pm)? ?- ?(1[0-2]|[1-9])(?:.([0-5][0-9]))?(am|pm)?"
    )
    .unwrap();
}

// Short names are prefixes of their long forms, so the long names have
// to be tried first.
const LONG_DAYS: [(&str, Day); 7] = [
    ("monday", Day::MONDAY),
    ("tuesday", Day::TUESDAY),
    ("wednesday", Day::WEDNESDAY),
    ("thursday", Day::THURSDAY),
    ("friday", Day::FRIDAY),
    ("saturday", Day::SATURDAY),
    ("sunday", Day::SUNDAY),
];
const SHORT_DAYS: [(&str, Day); 7] = [
    ("mon", Day::MONDAY),
    ("tue", Day::TUESDAY),
    ("wed", Day::WEDNESDAY),
    ("thur", Day::THURSDAY),
    ("fri", Day::FRIDAY),
    ("sat", Day::SATURDAY),
    ("sun", Day::SUNDAY),
];

// ------------- DayRange -------------

/// The cyclic sequence of days starting at `start` and proceeding forward,
/// wrapping Sunday to Monday, until `end` inclusive. A range with
/// `start == end` covers that single day.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct DayRange {
    start: Day,
    end: Day,
}

impl DayRange {
    pub fn new(start: Day, end: Day) -> Self {
        Self { start, end }
    }
    pub fn start(&self) -> Day {
        self.start
    }
    pub fn end(&self) -> Day {
        self.end
    }
    /// Enumerates the days of the range in order. Always finite: the walk
    /// stops as soon as the current day equals `end`, which happens within
    /// one trip around the week.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        let (start, end) = (self.start, self.end);
        let mut current: Option<Day> = None;
        std::iter::from_fn(move || {
            let day = match current {
                None => start,
                Some(day) if day == end => return None,
                Some(day) => day.next(),
            };
            current = Some(day);
            Some(day)
        })
    }
}
impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ------------- TimeRange -------------

/// A pair of times within a day. The start may lie after the end, which
/// denotes a range crossing midnight into the following day. A zero-length
/// range (start == end) means "no hours" and is discarded downstream.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

impl TimeRange {
    /// The range an hours-free trailing clause defaults to.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: ClockTime::START_OF_DAY,
        end: ClockTime::END_OF_DAY,
    };
    /// What the literal "closed" parses to.
    pub const CLOSED: TimeRange = TimeRange {
        start: ClockTime::START_OF_DAY,
        end: ClockTime::START_OF_DAY,
    };

    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
    pub fn start(&self) -> ClockTime {
        self.start
    }
    pub fn end(&self) -> ClockTime {
        self.end
    }
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }
    pub fn crosses_midnight(&self) -> bool {
        self.start.is_after(&self.end)
    }
}
impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ------------- Token -------------

/// One recognized element of a description.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Token {
    Day(Day),
    DayRange(DayRange),
    TimeRange(TimeRange),
    /// A comma, delimiting clauses. Carries no data.
    Separator,
}

/// Scans a description into its token sequence. Matching is done against
/// the lower-cased text, one element at a time from the front; when no
/// element matches, exactly one character is dropped and scanning resumes.
/// An empty result simply means nothing was recognizable.
pub fn tokenize(description: &str) -> Vec<Token> {
    let lowered = description.to_lowercase();
    let mut remainder = lowered.as_str();
    let mut tokens = Vec::new();
    while !remainder.is_empty() {
        match element(remainder) {
            Some((token, rest)) => {
                trace!(?token, "matched element");
                tokens.push(token);
                remainder = rest;
            }
            None => {
                let mut chars = remainder.chars();
                chars.next();
                remainder = chars.as_str();
            }
        }
    }
    tokens
}

// The fixed priority order. Day ranges begin with a day, so they must be
// tried before single days.
fn element(desc: &str) -> Option<(Token, &str)> {
    if let Some((range, rest)) = day_range(desc) {
        return Some((Token::DayRange(range), rest));
    }
    if let Some((day, rest)) = day(desc) {
        return Some((Token::Day(day), rest));
    }
    if let Some((times, rest)) = time_range(desc) {
        return Some((Token::TimeRange(times), rest));
    }
    separator(desc).map(|rest| (Token::Separator, rest))
}

/// Matches a day name (long or short) at the head of the text, yielding
/// the day and the unconsumed remainder. The character following the name
/// must not be a lowercase letter, so "thursty" is not a Thursday.
pub fn day(desc: &str) -> Option<(Day, &str)> {
    day_from(&LONG_DAYS, desc).or_else(|| day_from(&SHORT_DAYS, desc))
}

fn day_from<'a>(names: &[(&str, Day); 7], desc: &'a str) -> Option<(Day, &'a str)> {
    for (name, day) in names {
        if let Some(rest) = desc.strip_prefix(name) {
            if !rest.starts_with(|c: char| c.is_ascii_lowercase()) {
                return Some((*day, rest));
            }
        }
    }
    None
}

/// Matches `"daily"` (the whole week) or a `day - day` pair. Both days
/// must parse for the candidate to succeed; otherwise no input is
/// consumed and the next element kind gets its try.
pub fn day_range(desc: &str) -> Option<(DayRange, &str)> {
    if let Some(rest) = desc.strip_prefix("daily") {
        return Some((DayRange::new(Day::MONDAY, Day::SUNDAY), rest));
    }
    let (start, after_start) = day(desc)?;
    let separator = RANGE_SEPARATOR.find(after_start)?;
    let (end, rest) = day(&after_start[separator.end()..])?;
    Some((DayRange::new(start, end), rest))
}

/// Matches `"closed"` (a zero-length range) or an `hour[:minutes][am|pm] -
/// hour[:minutes]am|pm` pair anchored at the head of the text. The end
/// meridiem is mandatory; a missing start meridiem is inferred from the
/// numeric relationship between the two hours.
pub fn time_range(desc: &str) -> Option<(TimeRange, &str)> {
    if let Some(rest) = desc.strip_prefix("closed") {
        return Some((TimeRange::CLOSED, rest));
    }

    let captures = TIME_PATTERN.captures(desc)?;

    let start_base = face_value(&captures[1]);
    let end_base = face_value(&captures[4]);

    let end_hour = match captures.get(6).map(|m| m.as_str()) {
        Some("am") => end_base,
        Some("pm") => end_base + 12,
        // Without an end meridiem the whole candidate fails.
        _ => return None,
    };
    let start_hour = match captures.get(3).map(|m| m.as_str()) {
        Some("am") => start_base,
        Some("pm") => start_base + 12,
        _ => infer_start_meridiem(start_base, end_base, end_hour),
    };

    let start_minute = captures.get(2).map_or(0, |m| m.as_str().parse().unwrap());
    let end_minute = captures.get(5).map_or(0, |m| m.as_str().parse().unwrap());

    let range = TimeRange::new(
        ClockTime::new(start_hour, start_minute),
        ClockTime::new(end_hour, end_minute),
    );
    let rest = &desc[captures.get(0).unwrap().end()..];
    Some((range, rest))
}

/// Matches a leading comma.
pub fn separator(desc: &str) -> Option<&str> {
    desc.strip_prefix(',')
}

// A 12 on the clock face stands for the base hour 0 until a meridiem is
// applied.
fn face_value(digits: &str) -> u32 {
    let hour: u32 = digits.parse().unwrap();
    if hour == 12 { 0 } else { hour }
}

/// Resolves a missing start meridiem from the face values of the two
/// hours and the already-resolved end hour. "11- 2am" lands on 23:00 and
/// "1- 2pm" on 13:00. The decision table is not monotonic in any obvious
/// way; the tests pin each branch.
fn infer_start_meridiem(start_base: u32, end_base: u32, end_hour: u32) -> u32 {
    if start_base >= end_base {
        if end_hour >= 12 {
            start_base
        } else {
            start_base + 12
        }
    } else if end_hour > 12 {
        start_base + 12
    } else {
        start_base
    }
}
