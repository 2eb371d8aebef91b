use crate::config::DEFAULT_DATE_FORMAT;
use chrono::Local;
use std::fmt::Write;

/// Source of the display date stamped on posts
pub trait Clock {
    /// Today's date rendered with a chrono format string
    fn today(&self, format: &str) -> String;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self, format: &str) -> String {
        let now = Local::now();
        let mut date = String::new();

        // chrono reports bad format strings as a fmt error
        if write!(date, "{}", now.format(format)).is_err() {
            tracing::warn!("Invalid date format '{}', using {}", format, DEFAULT_DATE_FORMAT);
            return now.format(DEFAULT_DATE_FORMAT).to_string();
        }
        date
    }
}

/// Always reports the same date, whatever the format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }
}

impl Clock for FixedClock {
    fn today(&self, _format: &str) -> String {
        self.0.clone()
    }
}
