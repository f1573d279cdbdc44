use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Formatted clock panel text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockReading {
    /// 24-hour `HH:MM`
    pub time: String,
    /// `Weekday, Mon D`
    pub date: String,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn format_reading(now: &NaiveDateTime) -> ClockReading {
    ClockReading {
        time: format!("{:02}:{:02}", now.hour(), now.minute()),
        date: format!(
            "{}, {} {}",
            weekday_name(now.weekday()),
            MONTHS[now.month0() as usize],
            now.day()
        ),
    }
}

/// Last sampled local time; replaced wholesale on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockState {
    now: NaiveDateTime,
}

impl ClockState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn sample(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn reading(&self) -> ClockReading {
        format_reading(&self.now)
    }
}
