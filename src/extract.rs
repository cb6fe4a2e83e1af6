//! Turns token sequences into week intervals. This is the entry point to
//! the library.
//!
//! Will attempt to parse things which look like this:
//! `Mon-Fri 11-3pm, Saturday closed, Sun 11pm-2am`

use tracing::debug;

use crate::datatype::ClockTime;
use crate::grammar::{self, DayRange, TimeRange, Token};
use crate::intervals::{DayInterval, WeekIntervals};

/// Attempts to parse the given description into the set of open intervals
/// it describes for the week.
///
/// Tokens are grouped into comma-delimited clauses. A clause names its
/// days, or reuses the prior clause's days when it names none ("Mon lunch
/// 11-2pm, dinner 5-10pm"), and carries a time range, or defaults to the
/// whole day when it is the trailing clause. Ranges crossing midnight are
/// split across the day boundary, and "closed" clauses contribute nothing.
///
/// Any grammar or assembly failure yields `None`; there are no partial
/// results and, deliberately, no failure reasons.
pub fn parse_week_intervals(description: &str) -> Option<WeekIntervals> {
    let tokens = grammar::tokenize(description);
    if tokens.is_empty() {
        debug!("no recognizable tokens");
        return None;
    }

    let mut intervals = WeekIntervals::new();
    let mut day_context: Option<DayRange> = None;
    let mut index = 0;
    while index < tokens.len() {
        let clause_end = next_separator_or_end(&tokens, index);
        let clause_is_last = clause_end == tokens.len();

        let clause_days = next_days(&tokens, index).filter(|(i, _)| *i < clause_end);
        let clause_times = next_time_range(&tokens, index).filter(|(i, _)| *i < clause_end);

        // A day-only clause is only allowed in trailing position, where it
        // means the whole day.
        if clause_times.is_none() && !clause_is_last {
            debug!(index, "clause without a time range is not the trailing one");
            return None;
        }

        if let Some((_, days)) = clause_days {
            day_context = Some(days);
        }
        let Some(days) = day_context else {
            debug!(index, "clause without days and no prior day context");
            return None;
        };

        let times = clause_times.map_or(TimeRange::WHOLE_DAY, |(_, times)| times);

        if !times.is_closed() {
            // A range crossing midnight becomes two intervals, the tail of
            // the current day and the head of its successor.
            let (current, spilled) = if times.crosses_midnight() {
                (
                    TimeRange::new(times.start(), ClockTime::END_OF_DAY),
                    Some(TimeRange::new(ClockTime::START_OF_DAY, times.end())),
                )
            } else {
                (times, None)
            };
            for day in days.days() {
                if let Some(next_day_times) = spilled {
                    intervals = intervals.add(DayInterval::new(
                        day.next(),
                        next_day_times.start(),
                        next_day_times.end(),
                    ));
                }
                intervals = intervals.add(DayInterval::new(day, current.start(), current.end()));
            }
        }

        index = clause_end + 1;
    }

    Some(intervals)
}

fn next_separator_or_end(tokens: &[Token], start: usize) -> usize {
    tokens[start..]
        .iter()
        .position(|token| matches!(token, Token::Separator))
        .map_or(tokens.len(), |offset| start + offset)
}

// A single day acts as the one-day range in the day context.
fn next_days(tokens: &[Token], start: usize) -> Option<(usize, DayRange)> {
    tokens[start..]
        .iter()
        .enumerate()
        .find_map(|(offset, token)| match token {
            Token::Day(day) => Some((start + offset, DayRange::new(*day, *day))),
            Token::DayRange(range) => Some((start + offset, *range)),
            _ => None,
        })
}

fn next_time_range(tokens: &[Token], start: usize) -> Option<(usize, TimeRange)> {
    tokens[start..]
        .iter()
        .enumerate()
        .find_map(|(offset, token)| match token {
            Token::TimeRange(times) => Some((start + offset, *times)),
            _ => None,
        })
}
