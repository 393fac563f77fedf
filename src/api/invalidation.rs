//! Typed invalidation topics and the coalesced rebuild gate.
//!
//! Collaborators call the explicit `invalidate_*` hooks instead of having
//! the engine inspect change-event sources. Requests arriving within one
//! rendering tick merge into a single pending mask; the gate performs at
//! most one rebuild per tick, and a newer invalidation simply supersedes a
//! pending one (last-write-wins).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ChartKind;
use crate::error::SceneResult;
use crate::render::Renderer;

use super::SceneEngine;

/// Domain-oriented invalidation topic used to classify rebuild requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    /// Axis box and populated content are stale.
    Geometry,
    /// Mesh and data-space contour products are stale.
    ContourData,
    /// Only the display-space contour conversion is stale.
    ContourDisplay,
    /// Only camera-facing flags are stale.
    Camera,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Geometry => 1 << 0,
            Self::ContourData => 1 << 1,
            Self::ContourDisplay => 1 << 2,
            Self::Camera => 1 << 3,
        }
    }
}

/// Bitmask of invalidation topics, coalesced until the next rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Geometry.bit()
        | InvalidationTopic::ContourData.bit()
        | InvalidationTopic::ContourDisplay.bit()
        | InvalidationTopic::Camera.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl<R: Renderer> SceneEngine<R> {
    pub(super) fn merge_pending(&mut self, topics: InvalidationTopics) {
        self.pending_invalidation = self.pending_invalidation.union(topics);
    }

    /// Box/scene geometry must be rebuilt before the next paint.
    pub fn invalidate_geometry(&mut self) {
        self.merge_pending(InvalidationTopics::from_topic(InvalidationTopic::Geometry));
    }

    /// The dataset behind the contours changed: both cache tiers are
    /// dropped immediately; the rebuild is deferred to the gate. A contour
    /// chart also owes a geometry rebuild since its facets mirror the mesh.
    pub fn invalidate_contours_all(&mut self) {
        self.contours.invalidate_all();
        let mut topics = InvalidationTopics::from_topic(InvalidationTopic::ContourData)
            .with_topic(InvalidationTopic::ContourDisplay);
        if self.chart_kind == ChartKind::Contour3d {
            topics = topics.with_topic(InvalidationTopic::Geometry);
        }
        self.merge_pending(topics);
    }

    /// Axis range or view changed: only the display-space conversion of the
    /// contours is dropped.
    pub fn invalidate_contours_display(&mut self) {
        self.contours.invalidate_display();
        self.merge_pending(InvalidationTopics::from_topic(
            InvalidationTopic::ContourDisplay,
        ));
    }

    /// Camera orientation changed: facing flags need recomputation, the
    /// geometry itself does not.
    pub fn invalidate_camera(&mut self) {
        self.merge_pending(InvalidationTopics::from_topic(InvalidationTopic::Camera));
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.pending_invalidation
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.pending_invalidation.is_none()
    }

    #[must_use]
    pub fn take_pending_invalidation(&mut self) -> InvalidationTopics {
        std::mem::take(&mut self.pending_invalidation)
    }

    /// Consumes the pending mask and performs at most one rebuild.
    ///
    /// Returns `Ok(false)` when nothing was pending. A failing rebuild
    /// leaves the previous geometry in place and restores the mask so the
    /// next tick can retry; the caller sees a stale frame, never a partial
    /// one.
    pub fn rebuild_if_invalidated(&mut self) -> SceneResult<bool> {
        let pending = self.take_pending_invalidation();
        if pending.is_none() {
            return Ok(false);
        }

        if pending.contains_topic(InvalidationTopic::Geometry) || self.axis_box().is_none() {
            if let Err(error) = self.rebuild_geometry() {
                warn!(%error, "geometry rebuild failed; keeping previous scene");
                self.merge_pending(pending);
                return Err(error);
            }
        } else if pending.contains_topic(InvalidationTopic::Camera) {
            self.refresh_facing();
        }

        Ok(true)
    }
}
