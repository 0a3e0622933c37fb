//! A single die value.

use crate::EngineError;
use serde::{Deserialize, Serialize};

/// One die face, always in `1..=6`.
///
/// Movement takes a `Die` rather than a raw integer, so step counts outside
/// the die's range cannot reach the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// The face that lets a piece leave base and earns another roll.
    pub const SIX: Die = Die(6);

    /// Every face, in order.
    pub const ALL: [Die; 6] = [Die(1), Die(2), Die(3), Die(4), Die(5), Die(6)];

    /// Creates a die value, rejecting anything outside `1..=6`.
    pub fn new(value: u8) -> Result<Self, EngineError> {
        if (1..=6).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidDie(value))
        }
    }

    /// Face value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Face value as a step count.
    pub fn steps(self) -> usize {
        usize::from(self.0)
    }

    /// True for a six.
    pub fn is_six(self) -> bool {
        self == Self::SIX
    }
}

impl TryFrom<u8> for Die {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_accepted() {
        for value in 1..=6 {
            assert_eq!(Die::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Die::new(0), Err(EngineError::InvalidDie(0)));
        assert_eq!(Die::new(7), Err(EngineError::InvalidDie(7)));
    }

    #[test]
    fn test_serde_validates() {
        let die: Die = serde_json::from_str("4").unwrap();
        assert_eq!(die.get(), 4);
        assert!(serde_json::from_str::<Die>("9").is_err());
    }
}
