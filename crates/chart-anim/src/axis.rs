// File: crates/chart-anim/src/axis.rs
// Summary: X-axis value type as seen by the spline math (numeric or date-time with an interval).

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateTimeInterval {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DateTimeInterval {
    /// Nominal length of one interval (calendar-free: 365-day years, 30-day months).
    pub fn as_delta(self) -> TimeDelta {
        match self {
            DateTimeInterval::Years => TimeDelta::days(365),
            DateTimeInterval::Months => TimeDelta::days(30),
            DateTimeInterval::Days => TimeDelta::days(1),
            DateTimeInterval::Hours => TimeDelta::hours(1),
            DateTimeInterval::Minutes => TimeDelta::minutes(1),
            DateTimeInterval::Seconds => TimeDelta::seconds(1),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum XValueType {
    #[default]
    Double,
    DateTime(DateTimeInterval),
}

impl XValueType {
    /// Divisor applied to cardinal x-coefficients. 1 for numeric axes; for date-time
    /// axes the interval length in milliseconds, the unit `DataPoint::from_datetime` stores.
    pub fn normalization_factor(self) -> f64 {
        match self {
            XValueType::Double => 1.0,
            XValueType::DateTime(interval) => {
                let f = interval.as_delta().num_milliseconds() as f64;
                if f > 0.0 { f } else { 1.0 }
            }
        }
    }
}
