//! Command line front end for the openhours library.
//!
//! Takes a weekly hours description as its arguments (or on stdin when no
//! arguments are given), prints the canonical intervals it describes, and
//! optionally answers a containment query:
//!
//! ```text
//! openhours "Mon-Fri 11-3pm, Sat 9am-1pm" --at fri 12:30
//! ```

use std::env;
use std::io::Read;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use openhours::datatype::{ClockTime, Day};
use openhours::error::{OpenHoursError, Result};
use openhours::extract::parse_week_intervals;
use openhours::grammar;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (description_args, query_args) = split_at_flag(&args)?;

    let description = if description_args.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        description_args.join(" ")
    };
    debug!(%description, "parsing");

    let intervals = parse_week_intervals(&description)
        .ok_or_else(|| OpenHoursError::Unparseable(description.trim().to_string()))?;

    for interval in intervals.sorted() {
        println!("{}", interval);
    }

    if let Some((day_text, time_text)) = query_args {
        let (day, time) = parse_query(day_text, time_text)?;
        let verdict = if intervals.contains(day, time) {
            "open"
        } else {
            "closed"
        };
        println!("{} {}: {}", day, time, verdict);
    }

    Ok(())
}

// Everything before `--at` is the description; the flag takes a day and a
// time of day.
fn split_at_flag(args: &[String]) -> Result<(&[String], Option<(&str, &str)>)> {
    match args.iter().position(|arg| arg == "--at") {
        None => Ok((args, None)),
        Some(flag) => match &args[flag + 1..] {
            [day, time] => Ok((&args[..flag], Some((day.as_str(), time.as_str())))),
            _ => Err(OpenHoursError::Usage(
                "--at takes a day and a time, e.g. --at fri 12:30".to_string(),
            )),
        },
    }
}

fn parse_query(day_text: &str, time_text: &str) -> Result<(Day, ClockTime)> {
    let lowered = day_text.to_lowercase();
    let day = match grammar::day(&lowered) {
        Some((day, "")) => day,
        _ => {
            return Err(OpenHoursError::Query(format!(
                "not a day of the week: {day_text}"
            )));
        }
    };

    let (hour_text, minute_text) = time_text.split_once(':').unwrap_or((time_text, "0"));
    let bad_time = || OpenHoursError::Query(format!("not a time of day: {time_text}"));
    let hour: u32 = hour_text.parse().map_err(|_| bad_time())?;
    let minute: u32 = minute_text.parse().map_err(|_| bad_time())?;
    if hour > 23 || minute > 59 {
        return Err(bad_time());
    }

    Ok((day, ClockTime::new(hour, minute)))
}
