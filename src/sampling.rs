use chrono::{Datelike, Duration, Timelike};

use crate::types::{SamplingWindow, TimeSeries};

/// Expands a window into the chronological sequence of fractional hours and
/// UTC day-of-year values, stepping from `start` to `end` inclusive.
///
/// An inverted window (`end < start`) or a non-positive step is defined to
/// produce an empty series rather than an error.
pub fn sample_window(window: &SamplingWindow) -> TimeSeries {
    if window.end < window.start || window.step <= Duration::zero() {
        return TimeSeries::default();
    }

    let mut series = TimeSeries::default();
    let mut t = window.start;
    while t <= window.end {
        let fractional =
            t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0;
        series.fractional_hour.push(fractional);
        series.day_of_year.push(t.ordinal());
        t += window.step;
    }
    series
}
