//! src/graph/config.rs
//!
//! Construction-time settings for a graph.

use super::error::{self, Result};
use super::glyph::Orientation;
use super::scale::Scale;

/// Immutable configuration handed to [`Graph::new`](super::Graph::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// Columns, which is also the number of samples retained.
    pub width: usize,

    /// Rows available for drawing.
    pub height: usize,

    pub scale: Scale,

    pub orientation: Orientation,
}

impl GraphConfig {
    /// Create a new `GraphConfig` with auto-scale and upright orientation.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validate caller-supplied dimensions and build a config from them.
    pub fn with_dimensions(width: i64, height: i64) -> Result<Self> {
        let (width, height) = error::dimensions(width, height)?;
        Ok(Self::new(width, height))
    }

    /// Same config with a fixed ceiling (0 means auto-scale).
    pub fn ceiling(self, ceiling: u64) -> Self {
        Self {
            scale: Scale::from_ceiling(ceiling),
            ..self
        }
    }

    pub fn inverted(self, inverted: bool) -> Self {
        Self {
            orientation: Orientation::from_inverted(inverted),
            ..self
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 0,
            scale: Scale::Auto,
            orientation: Orientation::Upright,
        }
    }
}
