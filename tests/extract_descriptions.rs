use openhours::datatype::{ClockTime, Day};
use openhours::extract::parse_week_intervals;
use openhours::intervals::{DayInterval, WeekIntervals};

fn interval(day: Day, start: (u32, u32), end: (u32, u32)) -> DayInterval {
    DayInterval::new(
        day,
        ClockTime::new(start.0, start.1),
        ClockTime::new(end.0, end.1),
    )
}

fn whole_day(day: Day) -> DayInterval {
    DayInterval::new(day, ClockTime::START_OF_DAY, ClockTime::END_OF_DAY)
}

fn build(intervals: &[DayInterval]) -> WeekIntervals {
    intervals
        .iter()
        .fold(WeekIntervals::new(), |acc, i| acc.add(*i))
}

#[test]
fn descriptions_yield_expected_intervals() {
    let every_day: Vec<DayInterval> = (1..=7)
        .map(|ordinal| interval(Day::new(ordinal).unwrap(), (7, 30), (23, 0)))
        .collect();

    let cases: Vec<(&str, WeekIntervals)> = vec![
        (
            "Mon-Tue",
            build(&[whole_day(Day::MONDAY), whole_day(Day::TUESDAY)]),
        ),
        (
            "Monday-Tue",
            build(&[whole_day(Day::MONDAY), whole_day(Day::TUESDAY)]),
        ),
        (
            "Mon 8am-5:30pm",
            build(&[interval(Day::MONDAY, (8, 0), (17, 30))]),
        ),
        (
            "Mon 8am-5:30pm, Fri 7:30am-4pm",
            build(&[
                interval(Day::MONDAY, (8, 0), (17, 30)),
                interval(Day::FRIDAY, (7, 30), (16, 0)),
            ]),
        ),
        (
            "Sun-Mon 8am-5:30pm",
            build(&[
                interval(Day::SUNDAY, (8, 0), (17, 30)),
                interval(Day::MONDAY, (8, 0), (17, 30)),
            ]),
        ),
        (
            "Mon 8-5:30pm",
            build(&[interval(Day::MONDAY, (8, 0), (17, 30))]),
        ),
        ("daily 7:30am-11pm", build(&every_day)),
        (
            "Mon lunch 11:30am-2:30pm, dinner 5-10pm, closed Sun, Sat closed",
            build(&[
                interval(Day::MONDAY, (11, 30), (14, 30)),
                interval(Day::MONDAY, (17, 0), (22, 0)),
            ]),
        ),
        (
            "Mon 11am-9.30pm",
            build(&[interval(Day::MONDAY, (11, 0), (21, 30))]),
        ),
        (
            "Tue 11am-2am",
            build(&[
                interval(Day::TUESDAY, (11, 0), (23, 59)),
                interval(Day::WEDNESDAY, (0, 0), (2, 0)),
            ]),
        ),
        (
            "Mon 10-12am, Tue 10-2am",
            build(&[
                interval(Day::MONDAY, (22, 0), (23, 59)),
                interval(Day::TUESDAY, (0, 0), (0, 0)),
                interval(Day::TUESDAY, (22, 0), (23, 59)),
                interval(Day::WEDNESDAY, (0, 0), (2, 0)),
            ]),
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(
            parse_week_intervals(input),
            Some(expected),
            "input: {input}"
        );
    }
}

#[test]
fn day_only_clause_must_be_trailing() {
    assert_eq!(parse_week_intervals("Sun-Mon, Tue 11am-9pm"), None);
    assert_eq!(parse_week_intervals("Mon, Wed 11am-2am"), None);
}

#[test]
fn clause_of_filler_words_fails_midway() {
    // The middle clause carries neither days nor a time range.
    assert_eq!(
        parse_week_intervals("Mon-Sun 11-3pm, something irrelevant, Tue 9am - 11am"),
        None
    );
}

#[test]
fn first_clause_needs_days() {
    assert_eq!(parse_week_intervals("11am-9pm"), None);
}

#[test]
fn unrecognizable_input_fails() {
    assert_eq!(parse_week_intervals(""), None);
    assert_eq!(parse_week_intervals("no hours here whatsoever"), None);
}

#[test]
fn day_context_sticks_across_clauses() {
    // Both clauses apply to Monday; the two ranges merge at the touch point.
    let parsed = parse_week_intervals("Mon 9am-1pm, 1pm-5pm").expect("parses");
    assert_eq!(parsed, build(&[interval(Day::MONDAY, (9, 0), (17, 0))]));
}

#[test]
fn closed_days_are_not_contained() {
    let parsed = parse_week_intervals("Mon-Fri 11-3pm, Sat closed").expect("parses");
    assert!(parsed.contains(Day::WEDNESDAY, ClockTime::new(12, 0)));
    assert!(!parsed.contains(Day::SATURDAY, ClockTime::new(12, 0)));
    assert!(!parsed.contains(Day::SUNDAY, ClockTime::new(12, 0)));
}
