//! Time model for itineraries.
//!
//! # Design
//!
//! Times and durations are whole seconds held in `u64`:
//!
//!   `Time`     — absolute seconds since midnight of the first simulated day
//!                (values past 24:00:00 are legal and denote following days)
//!   `Duration` — a span of seconds
//!
//! Integer seconds keep itinerary arithmetic exact, so the zero-length
//! teleportation stage compares equal to `Duration::ZERO` without epsilon
//! games.  Routers that compute fractional travel times round *up*
//! ([`Duration::from_secs_ceil`]) so an agent never arrives early.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Duration ──────────────────────────────────────────────────────────────────

/// A span of simulated seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration(pub u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        Duration(secs)
    }

    /// Round a fractional number of seconds up to the next whole second.
    /// Negative and NaN inputs clamp to zero.
    #[inline]
    pub fn from_secs_ceil(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration(secs.ceil() as u64)
        }
    }

    #[inline]
    pub fn secs(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;
    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// ── Time ──────────────────────────────────────────────────────────────────────

/// An absolute simulated time of day, in seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(pub u64);

impl Time {
    pub const MIDNIGHT: Time = Time(0);

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        Time(secs)
    }

    /// Saturates at the largest representable time.
    pub fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self::checked_from_hms(hours, minutes, seconds).unwrap_or(Time(u64::MAX))
    }

    /// `None` if the total does not fit in a `u64` of seconds.
    pub fn checked_from_hms(hours: u64, minutes: u64, seconds: u64) -> Option<Self> {
        hours
            .checked_mul(3_600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds)
            .map(Time)
    }

    #[inline]
    pub fn secs(self) -> u64 {
        self.0
    }

    /// Break the time into (hours, minutes, seconds).  Hours are not wrapped
    /// at 24 so multi-day plans stay monotonic.
    pub fn hms(self) -> (u64, u32, u32) {
        let hours = self.0 / 3_600;
        let minutes = ((self.0 % 3_600) / 60) as u32;
        let seconds = (self.0 % 60) as u32;
        (hours, minutes, seconds)
    }

    /// Time elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Time) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }
}

impl std::ops::Add<Duration> for Time {
    type Output = Time;
    #[inline]
    fn add(self, rhs: Duration) -> Time {
        Time(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl FromStr for Time {
    type Err = CoreError;

    /// Parse `HH:MM:SS` or `HH:MM`.  Hours may exceed 23.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let field = |p: &str| {
            p.parse::<u64>()
                .map_err(|_| CoreError::Parse(format!("invalid time {s:?}: expected HH:MM[:SS]")))
        };
        let (h, m, sec) = match parts.as_slice() {
            [h, m] => (field(h)?, field(m)?, 0),
            [h, m, sec] => (field(h)?, field(m)?, field(sec)?),
            _ => return Err(CoreError::Parse(format!("invalid time {s:?}: expected HH:MM[:SS]"))),
        };
        if m >= 60 || sec >= 60 {
            return Err(CoreError::Parse(format!(
                "invalid time {s:?}: minutes and seconds must be < 60"
            )));
        }
        Time::checked_from_hms(h, m, sec)
            .ok_or_else(|| CoreError::Parse(format!("invalid time {s:?}: out of range")))
    }
}
