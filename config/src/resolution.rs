//! # Resolution Policy
//!
//! Segment counts for circular primitives, chosen per role rather than per
//! call site.

use serde::{Deserialize, Serialize};

use crate::constants::{DECORATIVE_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS, STRUCTURAL_SEGMENTS};
use crate::error::ConfigError;

/// What a circle is for, which decides how finely it is approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Bores that receive shafts or fasteners.
    Structural,
    /// Small cosmetic holes and visualization proxies.
    Decorative,
}

/// Segment counts used by the part generators.
///
/// # Examples
/// ```
/// use config::resolution::{Quality, ResolutionPolicy};
/// let policy = ResolutionPolicy::default();
/// assert_eq!(policy.segments(Quality::Structural), 60);
/// assert_eq!(policy.segments(Quality::Decorative), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionPolicy {
    /// Segments for structural bores.
    pub structural: u32,
    /// Segments for decorative circles.
    pub decorative: u32,
}

impl ResolutionPolicy {
    /// Builds a policy, rejecting counts outside
    /// [`MIN_SEGMENTS`]`..=`[`MAX_SEGMENTS`].
    ///
    /// # Examples
    /// ```
    /// use config::resolution::ResolutionPolicy;
    /// let cfg = ResolutionPolicy::new(96, 24).expect("valid policy");
    /// assert_eq!(cfg.structural, 96);
    /// assert!(ResolutionPolicy::new(2, 24).is_err());
    /// ```
    pub fn new(structural: u32, decorative: u32) -> Result<Self, ConfigError> {
        let policy = Self {
            structural,
            decorative,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Same counts for every role. Handy for low-poly previews.
    pub fn uniform(segments: u32) -> Result<Self, ConfigError> {
        Self::new(segments, segments)
    }

    /// Segment count for the given role.
    pub fn segments(&self, quality: Quality) -> u32 {
        match quality {
            Quality::Structural => self.structural,
            Quality::Decorative => self.decorative,
        }
    }

    /// Checks both counts form a polygon without exceeding [`MAX_SEGMENTS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("structural", self.structural),
            ("decorative", self.decorative),
        ];
        for (field, value) in counts {
            if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&value) {
                return Err(ConfigError::InvalidSegments { field, value });
            }
        }
        Ok(())
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            structural: STRUCTURAL_SEGMENTS,
            decorative: DECORATIVE_SEGMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_documented_counts() {
        let policy = ResolutionPolicy::default();
        assert_eq!(policy.segments(Quality::Structural), STRUCTURAL_SEGMENTS);
        assert_eq!(policy.segments(Quality::Decorative), DECORATIVE_SEGMENTS);
    }

    #[test]
    fn new_validates_inputs() {
        assert_eq!(
            ResolutionPolicy::new(2, 24).unwrap_err(),
            ConfigError::InvalidSegments {
                field: "structural",
                value: 2
            }
        );
        assert_eq!(
            ResolutionPolicy::new(60, 0).unwrap_err(),
            ConfigError::InvalidSegments {
                field: "decorative",
                value: 0
            }
        );
    }

    #[test]
    fn oversized_counts_are_rejected() {
        assert_eq!(
            ResolutionPolicy::new(4_000_000_000, 20).unwrap_err(),
            ConfigError::InvalidSegments {
                field: "structural",
                value: 4_000_000_000
            }
        );
        assert!(ResolutionPolicy::new(60, MAX_SEGMENTS + 1).is_err());
        assert!(ResolutionPolicy::new(MAX_SEGMENTS, MAX_SEGMENTS).is_ok());
    }

    #[test]
    fn uniform_applies_to_both_roles() {
        let policy = ResolutionPolicy::uniform(8).unwrap();
        assert_eq!(policy.segments(Quality::Structural), 8);
        assert_eq!(policy.segments(Quality::Decorative), 8);
    }
}
