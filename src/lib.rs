//! Openhours – parses free-form English descriptions of weekly business
//! hours into a canonical, queryable set of open intervals.
//!
//! A description such as `"Mon-Fri 11-3pm, Sat 9am-1pm, Sun closed"` is
//! scanned into tokens, assembled into day-scoped intervals, and merged
//! into a [`intervals::WeekIntervals`] value that answers "is this
//! day-of-week and time-of-day inside the described hours?":
//! * A [`datatype::Day`] is a day-of-week ordinal, Monday = 1.
//! * A [`datatype::ClockTime`] is a time of day, seconds since midnight.
//! * A [`grammar::Token`] is one recognized element of a description
//!   (day, day range, time range or clause separator).
//! * A [`intervals::DayInterval`] is a closed time interval on one day.
//! * A [`intervals::WeekIntervals`] is the canonical interval set: no two
//!   intervals on a day overlap or touch, and equality ignores the order
//!   intervals were added in.
//!
//! ## Modules
//! * [`datatype`] – Leaf value types for days and times of day.
//! * [`grammar`] – The element tokenizer, including meridiem inference
//!   for time ranges written without an am/pm marker on the start.
//! * [`extract`] – The clause assembler and the
//!   [`extract::parse_week_intervals`] entry point.
//! * [`intervals`] – The interval algebra keeping sets canonical.
//! * [`error`] – Error type for the command line binary.
//!
//! ## Failure Model
//! Malformed input is an expected outcome, not an exception:
//! [`extract::parse_week_intervals`] returns `None` for anything the
//! grammar cannot make sense of, and never panics on bad input. Callers
//! cannot distinguish why a parse failed, only that it did; the tokenizer
//! and assembler emit `tracing` events for diagnosis.
//!
//! ## Timezones
//! There are none. The parsed intervals are timezone-naive by design, and
//! any interpretation of a calendar instant is up to the caller.
//!
//! ## Quick Start
//! ```
//! use openhours::datatype::{ClockTime, Day};
//! use openhours::extract::parse_week_intervals;
//! let hours = parse_week_intervals("Mon-Fri 11-3pm, Sat 9am-1pm, Sun closed").unwrap();
//! assert!(hours.contains(Day::FRIDAY, ClockTime::new(12, 0)));
//! assert!(!hours.contains(Day::SUNDAY, ClockTime::new(12, 0)));
//! ```

pub mod datatype;
pub mod error;
pub mod extract;
pub mod grammar;
pub mod intervals;
