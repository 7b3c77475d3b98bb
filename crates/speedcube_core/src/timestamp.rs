use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Moment a scramble was requested, in UTC with millisecond precision.
///
/// The `Display` form is mixed into the scramble seed, so it must stay stable.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timestamp(DateTime<Utc>);
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<DateTime<Utc>>()?.trunc_subsecs(3)))
    }
}
impl Timestamp {
    /// Returns the current time according to the system clock.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }
}
