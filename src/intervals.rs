//! Canonical sets of weekly open intervals.
//!
//! A [`WeekIntervals`] value holds day-scoped closed intervals such that no
//! two intervals on the same day overlap or even share a boundary point;
//! anything that touches is merged on the way in. Values are immutable:
//! [`WeekIntervals::add`] returns a new set, so previously published sets
//! are never affected by later additions.

use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasherDefault;

use chrono::{Datelike, NaiveDateTime, Timelike};
use seahash::SeaHasher;

use crate::datatype::{ClockTime, Day};

pub type IntervalHasher = BuildHasherDefault<SeaHasher>;

// ------------- DayTime -------------

/// A time of day pinned to a day of the week.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct DayTime {
    day: Day,
    time: ClockTime,
}

impl DayTime {
    pub fn new(day: Day, time: ClockTime) -> Self {
        Self { day, time }
    }
    pub fn day(&self) -> Day {
        self.day
    }
    pub fn time(&self) -> ClockTime {
        self.time
    }
}
impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

// ------------- DayInterval -------------

/// A closed interval of times on a single day of the week. The start never
/// lies after the end; ranges crossing midnight are split into two of
/// these before they get here.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct DayInterval {
    day: Day,
    start: ClockTime,
    end: ClockTime,
}

impl DayInterval {
    pub fn new(day: Day, start: ClockTime, end: ClockTime) -> Self {
        assert!(start <= end, "interval start must not lie after its end");
        Self { day, start, end }
    }
    pub fn day(&self) -> Day {
        self.day
    }
    pub fn start(&self) -> ClockTime {
        self.start
    }
    pub fn end(&self) -> ClockTime {
        self.end
    }
    /// Closed-inclusive containment: both bounds count as inside.
    pub fn contains(&self, at: &DayTime) -> bool {
        self.day == at.day() && self.start <= at.time() && self.end >= at.time()
    }
    // Two intervals intersect when either holds an endpoint of the other.
    // Sharing a single boundary point counts, which is what makes touching
    // intervals merge.
    fn intersects(&self, other: &DayInterval) -> bool {
        self.contains(&DayTime::new(other.day, other.start))
            || self.contains(&DayTime::new(other.day, other.end))
            || other.contains(&DayTime::new(self.day, self.start))
            || other.contains(&DayTime::new(self.day, self.end))
    }
    fn merge_with(&self, other: &DayInterval) -> DayInterval {
        DayInterval::new(
            self.day,
            self.start.min(other.start),
            self.end.max(other.end),
        )
    }
}
impl fmt::Display for DayInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

// ------------- WeekIntervals -------------

/// An immutable collection of open intervals over the week, e.g.
/// Mon-Fri 11-2pm, Sat 9am-3pm. Supports checking whether a day and time
/// of day fall within the described hours.
///
/// WeekIntervals doesn't know about timezones.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct WeekIntervals {
    intervals: HashSet<DayInterval, IntervalHasher>,
}

impl WeekIntervals {
    pub fn new() -> Self {
        Self {
            intervals: HashSet::default(),
        }
    }
    pub fn len(&self) -> usize {
        self.intervals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &DayInterval> {
        self.intervals.iter()
    }

    /// Whether the given day and time of day fall within the hours.
    pub fn contains(&self, day: Day, time: ClockTime) -> bool {
        let at = DayTime::new(day, time);
        self.intervals.iter().any(|interval| interval.contains(&at))
    }

    /// Whether the given calendar instant falls within the hours. Only the
    /// day of week, hour and minute of the instant are considered, and any
    /// timezone interpretation is up to the caller.
    pub fn contains_datetime(&self, at: &NaiveDateTime) -> bool {
        let day = Day::from(at.weekday());
        self.contains(day, ClockTime::new(at.hour(), at.minute()))
    }

    /// Returns a new collection with the interval added. Every existing
    /// interval the candidate touches or overlaps is folded into it, so
    /// the result stays canonical: one left-to-right pass suffices because
    /// the candidate keeps growing while it is re-tested against each
    /// remaining interval, collapsing chains of overlaps transitively.
    pub fn add(&self, interval: DayInterval) -> WeekIntervals {
        let mut candidate = interval;
        let mut merged: HashSet<DayInterval, IntervalHasher> = HashSet::default();
        for existing in &self.intervals {
            if existing.intersects(&candidate) {
                candidate = existing.merge_with(&candidate);
            } else {
                merged.insert(*existing);
            }
        }
        merged.insert(candidate);
        WeekIntervals { intervals: merged }
    }

    /// The intervals sorted by day and start time, for stable presentation.
    pub fn sorted(&self) -> Vec<DayInterval> {
        let mut intervals: Vec<DayInterval> = self.intervals.iter().copied().collect();
        intervals.sort();
        intervals
    }
}
impl fmt::Display for WeekIntervals {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for interval in self.sorted() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
            first = false;
        }
        Ok(())
    }
}
