//! Rate statistics derived from raw counters.
//!
//! Every formula has an explicit zero-denominator policy. Averages with no
//! dismissals or no wickets come back as sentinel [`Rate`] variants rather
//! than NaN or infinity, so callers can tell "no data" apart from zero.

use serde::{Serialize, Serializer};
use std::fmt;

use super::aggregate::BowlingFigures;

/// A rate statistic rounded to two decimal places, or a sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    Value(f64),
    /// Runs scored without ever being dismissed.
    Infinite,
    /// No wickets to divide by.
    Undefined,
}

impl Rate {
    pub fn rounded(value: f64) -> Self {
        Rate::Value((value * 100.0).round() / 100.0)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Rate::Value(v) => Some(*v),
            Rate::Infinite | Rate::Undefined => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Rate::Value(_))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Value(v) => write!(f, "{:.2}", v),
            Rate::Infinite => write!(f, "∞"),
            Rate::Undefined => write!(f, "–"),
        }
    }
}

/// Numbers serialize as JSON numbers; sentinels as `"infinite"` / `"undefined"`.
impl Serialize for Rate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Rate::Value(v) => serializer.serialize_f64(*v),
            Rate::Infinite => serializer.serialize_str("infinite"),
            Rate::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

pub fn batting_average(runs: u32, times_out: u32) -> Rate {
    if times_out == 0 {
        Rate::Infinite
    } else {
        Rate::rounded(f64::from(runs) / f64::from(times_out))
    }
}

/// Runs per 100 balls faced.
pub fn batting_strike_rate(runs: u32, balls_faced: u32) -> Rate {
    if balls_faced == 0 {
        Rate::Value(0.0)
    } else {
        Rate::rounded(f64::from(runs) / f64::from(balls_faced) * 100.0)
    }
}

pub fn bowling_average(runs_conceded: u32, wickets: u32) -> Rate {
    if wickets == 0 {
        Rate::Undefined
    } else {
        Rate::rounded(f64::from(runs_conceded) / f64::from(wickets))
    }
}

/// Runs conceded per six legal balls.
pub fn economy_rate(runs_conceded: u32, balls_bowled: u32) -> Rate {
    if balls_bowled == 0 {
        Rate::Value(0.0)
    } else {
        Rate::rounded(f64::from(runs_conceded) / (f64::from(balls_bowled) / 6.0))
    }
}

/// Balls bowled per wicket.
pub fn bowling_strike_rate(balls_bowled: u32, wickets: u32) -> Rate {
    if wickets == 0 {
        Rate::Undefined
    } else {
        Rate::rounded(f64::from(balls_bowled) / f64::from(wickets))
    }
}

pub fn best_bowling_display(best: Option<BowlingFigures>) -> String {
    best.map_or_else(|| "-".to_string(), |b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batting_average() {
        assert_eq!(batting_average(45, 0), Rate::Infinite);
        assert_eq!(batting_average(100, 3), Rate::Value(33.33));
        assert_eq!(batting_average(0, 2), Rate::Value(0.0));
    }

    #[test]
    fn test_batting_strike_rate() {
        assert_eq!(batting_strike_rate(45, 30), Rate::Value(150.0));
        assert_eq!(batting_strike_rate(10, 0), Rate::Value(0.0));
        assert_eq!(batting_strike_rate(1, 3), Rate::Value(33.33));
    }

    #[test]
    fn test_bowling_rates() {
        assert_eq!(economy_rate(12, 24), Rate::Value(3.0));
        assert_eq!(economy_rate(12, 0), Rate::Value(0.0));
        assert_eq!(bowling_average(12, 0), Rate::Undefined);
        assert_eq!(bowling_average(25, 3), Rate::Value(8.33));
        assert_eq!(bowling_strike_rate(24, 0), Rate::Undefined);
        assert_eq!(bowling_strike_rate(26, 4), Rate::Value(6.5));
    }

    #[test]
    fn test_best_bowling_display() {
        assert_eq!(best_bowling_display(None), "-");
        assert_eq!(
            best_bowling_display(Some(BowlingFigures { wickets: 3, runs: 20 })),
            "3/20"
        );
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::Value(150.0).to_string(), "150.00");
        assert_eq!(Rate::Value(3.5).to_string(), "3.50");
        assert_eq!(Rate::Infinite.to_string(), "∞");
        assert_eq!(Rate::Undefined.to_string(), "–");
    }

    #[test]
    fn test_rate_serialization() {
        assert_eq!(serde_json::to_value(Rate::Value(33.33)).unwrap(), 33.33);
        assert_eq!(serde_json::to_value(Rate::Infinite).unwrap(), "infinite");
        assert_eq!(serde_json::to_value(Rate::Undefined).unwrap(), "undefined");
    }

    #[test]
    fn test_sentinels_are_not_numbers() {
        assert!(Rate::Infinite.is_sentinel());
        assert!(Rate::Undefined.as_f64().is_none());
        assert_eq!(Rate::Value(0.0).as_f64(), Some(0.0));
        assert!(!Rate::Value(0.0).is_sentinel());
    }
}
