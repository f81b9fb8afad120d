//! Workout codes: the short tags sensors attach to each package.

use std::fmt;
use std::str::FromStr;

/// The closed set of workout codes.
///
/// Each code fixes the number and order of raw parameters a package carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// The three-letter tag, as it appears in packages.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Name shown in reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Expected parameters, in package order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
            Self::Running => &["action", "duration_h", "weight_kg"],
            Self::SportsWalking => &["action", "duration_h", "weight_kg", "height_cm"],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a tag is not one of `SWM`, `RUN`, `WLK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl FromStr for WorkoutCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.tag() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}
