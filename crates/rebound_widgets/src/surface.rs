//! Scroll surface seam
//!
//! The composition boundary toward the host framework's own scrolling
//! primitive. [`OverScrollView`](crate::overscroll::OverScrollView) talks to
//! the surface only through this trait; [`ClampedScroll`] is the built-in
//! inertia-free model. A host with its own fling/momentum physics implements
//! the trait and keeps full ownership of scroll motion.

/// Result of applying a scroll delta: the resulting offset and whether the
/// delta was clamped at a content boundary.
///
/// A `clamped` report is the boundary-overscroll signal that arms the
/// elastic effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollClamp {
    /// Scroll offset after the delta was applied (>= 0)
    pub offset: f32,
    /// True when the requested delta could not be fully applied
    pub clamped: bool,
}

/// A vertically scrollable region the overscroll container wraps
pub trait ScrollSurface: Send {
    /// Apply a scroll delta (positive scrolls toward the content end).
    /// Returns the clamp outcome.
    fn scroll_by(&mut self, delta: f32) -> ScrollClamp;

    /// Current scroll offset from the content start (always >= 0)
    fn offset(&self) -> f32;

    /// Displace the rendered content without changing the scroll offset.
    /// Positive moves content toward the viewport end (downward).
    fn set_content_translation(&mut self, translation: f32);

    /// Current content displacement
    fn content_translation(&self) -> f32;

    /// Inform the surface of the resolved viewport and content heights.
    /// Surfaces that track geometry elsewhere may ignore this.
    fn set_extent(&mut self, viewport_height: f32, content_height: f32) {
        let _ = (viewport_height, content_height);
    }
}

/// Inertia-free scroll model with hard boundary clamping.
///
/// Deliberately has no momentum of its own: motion comes entirely from the
/// deltas fed into [`scroll_by`](ScrollSurface::scroll_by).
#[derive(Debug, Clone, Default)]
pub struct ClampedScroll {
    offset: f32,
    viewport_height: f32,
    content_height: f32,
    content_translation: f32,
}

impl ClampedScroll {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_height,
            content_height,
            content_translation: 0.0,
        }
    }

    /// Largest reachable offset (0 when content fits the viewport)
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }
}

impl ScrollSurface for ClampedScroll {
    fn scroll_by(&mut self, delta: f32) -> ScrollClamp {
        let requested = self.offset + delta;
        self.offset = requested.clamp(0.0, self.max_offset());

        ScrollClamp {
            offset: self.offset,
            clamped: (requested - self.offset).abs() > f32::EPSILON,
        }
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_content_translation(&mut self, translation: f32) {
        self.content_translation = translation;
    }

    fn content_translation(&self) -> f32 {
        self.content_translation
    }

    fn set_extent(&mut self, viewport_height: f32, content_height: f32) {
        self.viewport_height = viewport_height;
        self.content_height = content_height;
        // Re-clamp in case the content shrank under the current offset
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}
