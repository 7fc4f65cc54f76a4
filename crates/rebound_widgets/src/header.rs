//! Pull-to-refresh header region
//!
//! A bounded-height region revealed in lockstep with the overscroll offset.
//! The rendered height is capped at a fixed device-independent maximum no
//! matter how large the requested height gets; children always occupy the
//! full bounds (single-child overlay layout, not a list).

use rebound_core::units::Density;
use taffy::{AvailableSpace, Size};

use crate::error::{Result, WidgetError};
use crate::view::{Bounds, View};

/// Maximum rendered header height in device-independent pixels
pub const MAX_HEADER_HEIGHT_DIP: f32 = 75.0;

/// Header region hosting a refresh indicator
pub struct RefreshHeader {
    /// Height cap derived from [`MAX_HEADER_HEIGHT_DIP`] and the density
    max_height_px: i32,
    /// Raw requested height; may transiently exceed the cap until the next
    /// measure pass clamps it
    requested_height: i32,
    content: Option<Box<dyn View>>,
    size: Size<f32>,
    bounds: Bounds,
}

impl RefreshHeader {
    pub fn new(density: Density) -> Self {
        Self {
            max_height_px: density.dip_to_px_i32(MAX_HEADER_HEIGHT_DIP),
            requested_height: 0,
            content: None,
            size: Size {
                width: 0.0,
                height: 0.0,
            },
            bounds: Bounds::default(),
        }
    }

    /// The derived height cap in physical pixels
    pub fn max_height_px(&self) -> i32 {
        self.max_height_px
    }

    /// Request a new height in physical pixels.
    ///
    /// The value is stored as-is; the cap applies during the next measure.
    pub fn request_height(&mut self, px: i32) {
        self.requested_height = px;
    }

    pub fn requested_height(&self) -> i32 {
        self.requested_height
    }

    /// Height resolved by the last measure pass
    pub fn current_height(&self) -> f32 {
        self.size.height
    }

    /// Attach a pre-built content view.
    ///
    /// Fails when content has already been attached; the header hosts
    /// exactly one indicator.
    pub fn set_content(&mut self, content: Box<dyn View>) -> Result<()> {
        if self.content.is_some() {
            return Err(WidgetError::HeaderAlreadyAttached);
        }
        self.content = Some(content);
        Ok(())
    }

    /// Attach content produced by a builder (the layout-template variant).
    ///
    /// The single-attachment invariant is checked before the builder runs.
    pub fn set_content_with<F>(&mut self, build: F) -> Result<()>
    where
        F: FnOnce() -> Box<dyn View>,
    {
        if self.content.is_some() {
            return Err(WidgetError::HeaderAlreadyAttached);
        }
        self.content = Some(build());
        Ok(())
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Last laid-out bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl View for RefreshHeader {
    fn measure(&mut self, width: AvailableSpace, height: AvailableSpace) -> Size<f32> {
        let max_height = self.max_height_px as f32;

        let resolved_width = match width {
            AvailableSpace::Definite(w) => w,
            _ => self.size.width,
        };
        let resolved_height = match height {
            // Exact constraints above the cap clamp; the rest pass through
            AvailableSpace::Definite(h) if h > max_height => max_height,
            AvailableSpace::Definite(h) => h.max(0.0),
            _ => self.requested_height.clamp(0, self.max_height_px) as f32,
        };

        // Children are measured against the resolved bounds exactly
        if let Some(content) = &mut self.content {
            content.measure(
                AvailableSpace::Definite(resolved_width),
                AvailableSpace::Definite(resolved_height),
            );
        }

        self.size = Size {
            width: resolved_width,
            height: resolved_height,
        };
        self.size
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        // Overlay layout: every child fills the region
        if let Some(content) = &mut self.content {
            content.layout(bounds);
        }
    }

    fn size(&self) -> Size<f32> {
        self.size
    }
}
