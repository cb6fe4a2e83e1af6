// used to convert from chrono's weekday numbering
use chrono::Weekday;

// used to print out readable forms of a data type
use std::fmt;

// ------------- Day -------------

/// A day of the week as an ordinal in the range 1..=7, with Monday = 1
/// and Sunday = 7. The week is cyclic, so the successor of Sunday is
/// Monday again.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Day(u8);

impl Day {
    pub const MONDAY: Day = Day(1);
    pub const TUESDAY: Day = Day(2);
    pub const WEDNESDAY: Day = Day(3);
    pub const THURSDAY: Day = Day(4);
    pub const FRIDAY: Day = Day(5);
    pub const SATURDAY: Day = Day(6);
    pub const SUNDAY: Day = Day(7);

    /// Creates a day from its ordinal, or `None` when the ordinal lies
    /// outside 1..=7.
    pub fn new(ordinal: u8) -> Option<Day> {
        if (1..=7).contains(&ordinal) {
            Some(Day(ordinal))
        } else {
            None
        }
    }
    // It's intentional to encapsulate the ordinal in the struct
    // and only expose it using a "getter", because this yields
    // true immutability for objects after creation.
    pub fn ordinal(&self) -> u8 {
        self.0
    }
    /// The cyclic successor: Monday follows Sunday.
    pub fn next(&self) -> Day {
        if self.0 == 7 { Day(1) } else { Day(self.0 + 1) }
    }
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "monday",
            2 => "tuesday",
            3 => "wednesday",
            4 => "thursday",
            5 => "friday",
            6 => "saturday",
            _ => "sunday",
        }
    }
}
impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Day {
        // number_from_monday already uses our ordinal scheme
        Day(weekday.number_from_monday() as u8)
    }
}
impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ------------- ClockTime -------------

/// A time of day with no accompanying date or timezone information,
/// packed as seconds since midnight in the range 0..=86399. Comparison
/// is by the packed value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ClockTime {
    seconds: u32,
}

impl ClockTime {
    pub const START_OF_DAY: ClockTime = ClockTime { seconds: 0 };
    /// The upper bound used for inferred whole days, 23:59:00.
    pub const END_OF_DAY: ClockTime = ClockTime {
        seconds: 23 * 3600 + 59 * 60,
    };

    pub fn new(hour: u32, minute: u32) -> ClockTime {
        ClockTime::with_seconds(hour, minute, 0)
    }
    // The grammar never produces seconds, but the packed form keeps
    // room for them.
    pub fn with_seconds(hour: u32, minute: u32, second: u32) -> ClockTime {
        assert!(hour < 24 && minute < 60 && second < 60);
        ClockTime {
            seconds: hour * 3600 + minute * 60 + second,
        }
    }
    pub fn hours(&self) -> u32 {
        self.seconds / 3600
    }
    pub fn minutes(&self) -> u32 {
        self.seconds % 3600 / 60
    }
    pub fn seconds(&self) -> u32 {
        self.seconds % 60
    }
    pub fn is_after(&self, other: &ClockTime) -> bool {
        self > other
    }
}
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
