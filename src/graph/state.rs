//! src/graph/state.rs
//!
//! Per-instance graph state: the sample ring, scale mode, orientation and the
//! display size, plus the operations a host drives it with.
//!
//! # Lifecycle
//! - Built once from a [`GraphConfig`] with an identity from an [`IdRegistry`].
//! - Samples arrive through [`Graph::on_new_sample`], in caller order.
//! - Display size changes go through [`Graph::resize`], which reflows the
//!   ring but keeps identity and scale mode.
//! - [`Graph::render`] rebuilds the text frame on demand.

use chrono::{DateTime, Local};

use super::config::GraphConfig;
use super::error::{self, Axis, MAX_DIMENSION, Result};
use super::glyph::Orientation;
use super::identity::{GraphId, IdRegistry};
use super::render::{self, RenderFrame};
use super::ring::SampleRing;
use super::scale::Scale;
use super::update::Notification;

#[derive(Clone, Debug)]
pub struct Graph {
    id: GraphId,
    ring: SampleRing,
    /// Greatest sample in `ring`, rescanned after every change to it.
    observed_max: u64,
    scale: Scale,
    orientation: Orientation,
    height: usize,
    last_update: Option<DateTime<Local>>,
}

impl Graph {
    /// Construct a graph from a config.
    ///
    /// Dimensions past [`MAX_DIMENSION`] are capped; build the config with
    /// [`GraphConfig::with_dimensions`] to have them rejected instead.
    pub fn new(config: GraphConfig, registry: &IdRegistry) -> Self {
        Self {
            id: registry.allocate(),
            ring: SampleRing::new(config.width.min(MAX_DIMENSION)),
            observed_max: 0,
            scale: config.scale,
            orientation: config.orientation,
            height: config.height.min(MAX_DIMENSION),
            last_update: None,
        }
    }

    /// Construct a default graph `initial_width` columns wide.
    pub fn create(initial_width: i64, registry: &IdRegistry) -> Result<Self> {
        let width = error::dimension(Axis::Width, initial_width)?;
        Ok(Self::new(
            GraphConfig {
                width,
                ..GraphConfig::default()
            },
            registry,
        ))
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn ring(&self) -> &SampleRing {
        &self.ring
    }

    /// Columns; equal to the number of retained samples.
    pub fn width(&self) -> usize {
        self.ring.capacity()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn observed_max(&self) -> u64 {
        self.observed_max
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_inverted(&self) -> bool {
        self.orientation.is_inverted()
    }

    pub fn latest(&self) -> Option<u64> {
        self.ring.latest()
    }

    /// Samples from oldest to newest.
    pub fn samples(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.ring.iter()
    }

    /// When this graph last accepted one of its own notifications.
    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.last_update
    }

    /// Scale against a fixed ceiling; 0 switches back to auto-scale.
    pub fn set_fixed_ceiling(&mut self, ceiling: u64) {
        self.scale = Scale::from_ceiling(ceiling);
        tracing::debug!("graph {} scale set to {}", self.id, self.scale);
    }

    /// Scale against the greatest sample in the window.
    pub fn set_auto_scale(&mut self) {
        self.scale = Scale::Auto;
        tracing::debug!("graph {} scale set to {}", self.id, self.scale);
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.orientation = Orientation::from_inverted(inverted);
    }

    /// Append a sample and return the notification the host should route
    /// back to this graph.
    ///
    /// Negative samples are rejected before anything is modified.
    pub fn on_new_sample(&mut self, value: i64) -> Result<Notification> {
        let value = error::sample(value)?;
        self.ring.insert(value);
        self.observed_max = self.ring.max();
        tracing::trace!(
            "graph {} sample {} (max {})",
            self.id,
            value,
            self.observed_max
        );
        Ok(Notification {
            id: self.id,
            time: Local::now(),
            value,
        })
    }

    /// Accept `notification` if it was issued by this graph.
    ///
    /// Returns `false`, leaving the graph untouched, for anyone else's.
    pub fn update(&mut self, notification: &Notification) -> bool {
        if notification.id != self.id {
            return false;
        }
        self.last_update = Some(notification.time);
        true
    }

    /// Change the display area, keeping the newest
    /// `min(old width, new width)` samples right-aligned.
    ///
    /// Resizing to the current size leaves the samples untouched. Negative
    /// or oversized dimensions are rejected before anything is modified.
    pub fn resize(&mut self, width: i64, height: i64) -> Result<()> {
        let (width, height) = error::dimensions(width, height)?;
        if width != self.ring.capacity() {
            tracing::debug!(
                "graph {} reflow {} -> {} columns",
                self.id,
                self.ring.capacity(),
                width
            );
            self.ring = self.ring.reflow(width);
        }
        self.height = height;
        self.observed_max = self.ring.max();
        Ok(())
    }

    /// The current frame at the graph's own size.
    pub fn frame(&self) -> RenderFrame {
        render::render(self, self.width(), self.height)
    }

    /// The current frame as newline-terminated text rows.
    pub fn render(&self) -> String {
        self.frame().to_string()
    }
}
