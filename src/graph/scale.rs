//! src/graph/scale.rs
//!
//! Vertical scaling: turns a raw sample into a number of filled rows.

use std::fmt;
use std::num::NonZeroU64;

/// Denominator used to normalise samples against the graph height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    /// Scale against the greatest sample currently in the window.
    #[default]
    Auto,
    /// Scale against a caller-supplied ceiling; samples above it clamp.
    Fixed(NonZeroU64),
}

impl Scale {
    /// Map a raw ceiling to a scale; 0 selects auto-scale.
    pub fn from_ceiling(ceiling: u64) -> Self {
        NonZeroU64::new(ceiling).map_or(Scale::Auto, Scale::Fixed)
    }

    /// The fixed ceiling, or 0 in auto-scale mode.
    pub fn ceiling(self) -> u64 {
        match self {
            Scale::Auto => 0,
            Scale::Fixed(c) => c.get(),
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Scale::Auto)
    }

    /// Number of rows (in `[0, height]`) that `sample` fills.
    ///
    /// `observed_max` is only consulted in auto-scale mode. A zero
    /// denominator renders every sample at zero height.
    pub fn rows(self, sample: u64, height: usize, observed_max: u64) -> usize {
        let denominator = match self {
            Scale::Auto => observed_max,
            Scale::Fixed(c) => c.get(),
        };
        if denominator == 0 {
            return 0;
        }
        let rows = u128::from(sample) * height as u128 / u128::from(denominator);
        usize::try_from(rows).map_or(height, |r| r.min(height))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Auto => f.write_str("auto"),
            Scale::Fixed(c) => write!(f, "fixed {}", c),
        }
    }
}
