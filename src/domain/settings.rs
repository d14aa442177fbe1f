use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;
use super::labels::LabelSet;

/// Suggested range for the word limit. Values outside it are allowed.
pub const ADVISORY_WORD_LIMIT_RANGE: std::ops::RangeInclusive<u32> = 10..=1000;

/// Target comment length, a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WordLimit(u32);

impl WordLimit {
    pub fn new(value: u32) -> Result<Self, AppError> {
        if value == 0 {
            return Err(AppError::InvalidWordLimit(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_advisable(self) -> bool {
        ADVISORY_WORD_LIMIT_RANGE.contains(&self.0)
    }
}

impl TryFrom<u32> for WordLimit {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        WordLimit::new(value)
    }
}

impl From<WordLimit> for u32 {
    fn from(value: WordLimit) -> Self {
        value.0
    }
}

impl FromStr for WordLimit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| AppError::InvalidWordLimit(s.to_string()))?;
        WordLimit::new(value)
    }
}

impl fmt::Display for WordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Saved trait/style/limit triple for one student.
///
/// Always written as a whole; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSettings {
    pub traits: LabelSet,
    pub styles: LabelSet,
    pub word_limit: WordLimit,
}
