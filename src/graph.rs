//! src/graph.rs
//!
//! Top-level `graph` module exposing the sample ring, scaling, glyph
//! quantization, rendering and the per-instance graph state.

pub mod config;
pub mod error;
pub mod glyph;
pub mod identity;
pub mod render;
pub mod ring;
pub mod scale;
pub mod state;
pub mod update;

/// Re-exports
pub use config::GraphConfig;
pub use error::{Axis, GraphError, MAX_DIMENSION, Result};
pub use glyph::Orientation;
pub use identity::{GraphId, IdRegistry};
pub use render::RenderFrame;
pub use ring::SampleRing;
pub use scale::Scale;
pub use state::Graph;
pub use update::{Notification, UpdateQueue};
