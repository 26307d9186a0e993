//! Unit score value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0.0 and 1.0 inclusive.
///
/// Deserialization validates the range, so stored rows that drifted out of
/// bounds are rejected at the store boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitScore(f64);

impl UnitScore {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Creates a new UnitScore, clamping to valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a UnitScore, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a rounded whole percentage.
    pub fn as_percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for UnitScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for UnitScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<UnitScore> for f64 {
    fn from(score: UnitScore) -> Self {
        score.0
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_score_new_clamps_out_of_range() {
        assert_eq!(UnitScore::new(1.7).value(), 1.0);
        assert_eq!(UnitScore::new(-0.2).value(), 0.0);
        assert_eq!(UnitScore::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn unit_score_try_new_rejects_over_one() {
        match UnitScore::try_new(1.01) {
            Err(ValidationError::OutOfRange { field, min, max, .. }) => {
                assert_eq!(field, "score");
                assert_eq!(min, 0.0);
                assert_eq!(max, 1.0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn unit_score_as_percent_rounds() {
        assert_eq!(UnitScore::new(0.7).as_percent(), 70);
        assert_eq!(UnitScore::new(2.0 / 3.0).as_percent(), 67);
    }

    #[test]
    fn unit_score_serializes_as_bare_number() {
        let json = serde_json::to_string(&UnitScore::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn unit_score_deserialization_validates_range() {
        assert!(serde_json::from_str::<UnitScore>("0.25").is_ok());
        assert!(serde_json::from_str::<UnitScore>("1.5").is_err());
    }

    #[test]
    fn unit_score_ordering_works() {
        assert!(UnitScore::new(0.25) < UnitScore::new(0.75));
    }
}
