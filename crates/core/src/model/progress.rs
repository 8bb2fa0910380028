use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("progress must be between 0 and 100, got {0}")]
    OutOfRange(u32),
}

/// Completion percentage for a course, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(100);

    /// Create a progress value from a whole percentage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::OutOfRange` for values above 100.
    pub fn new(percent: u32) -> Result<Self, ProgressError> {
        u8::try_from(percent)
            .ok()
            .filter(|p| *p <= 100)
            .map(Self)
            .ok_or(ProgressError::OutOfRange(percent))
    }

    /// Derive a percentage from a completed/total count pair.
    ///
    /// Rounds half away from zero. An empty total yields zero, and
    /// `completed` is clamped to `total`.
    #[must_use]
    pub fn from_ratio(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let completed = completed.min(total) as u64;
        let total = total as u64;
        let rounded = (200 * completed + total) / (2 * total);
        // completed <= total keeps this within 0..=100
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<u32> for Progress {
    type Error = ProgressError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u32 {
    fn from(value: Progress) -> Self {
        u32::from(value.0)
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_values_above_one_hundred() {
        assert_eq!(Progress::new(101), Err(ProgressError::OutOfRange(101)));
        assert_eq!(Progress::new(100).unwrap(), Progress::COMPLETE);
    }

    #[test]
    fn ratio_of_empty_total_is_zero() {
        assert_eq!(Progress::from_ratio(0, 0), Progress::ZERO);
    }

    #[test]
    fn ratio_rounds_half_up() {
        assert_eq!(Progress::from_ratio(1, 8).percent(), 13);
        assert_eq!(Progress::from_ratio(1, 3).percent(), 33);
        assert_eq!(Progress::from_ratio(2, 3).percent(), 67);
        assert_eq!(Progress::from_ratio(3, 5).percent(), 60);
    }

    #[test]
    fn ratio_clamps_overcount() {
        assert_eq!(Progress::from_ratio(9, 4), Progress::COMPLETE);
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: Progress = serde_json::from_str("75").unwrap();
        assert_eq!(ok.percent(), 75);
        assert!(serde_json::from_str::<Progress>("140").is_err());
    }

    #[test]
    fn displays_as_percentage() {
        assert_eq!(Progress::new(45).unwrap().to_string(), "45%");
    }
}
