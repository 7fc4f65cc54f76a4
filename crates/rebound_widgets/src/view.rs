//! Light view abstraction
//!
//! The minimal measurable/layoutable contract the widgets share. Constraint
//! semantics follow the taffy vocabulary: `AvailableSpace::Definite` is an
//! exact constraint, `MinContent`/`MaxContent` are unspecified.

use taffy::{AvailableSpace, Size};

/// Rectangular bounds in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds at the origin with the given size
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Minimal view contract: resolve a size under constraints, then take a
/// position within the parent.
pub trait View: Send {
    /// Resolve the view's size under the given constraints
    fn measure(&mut self, width: AvailableSpace, height: AvailableSpace) -> Size<f32>;

    /// Position the view (and any children) within the given bounds
    fn layout(&mut self, bounds: Bounds);

    /// Last resolved size
    fn size(&self) -> Size<f32>;
}

/// Fixed-size leaf view, used as placeholder content in tests and samples
#[derive(Debug, Clone)]
pub struct BlockView {
    intrinsic_width: f32,
    intrinsic_height: f32,
    size: Size<f32>,
    bounds: Bounds,
}

impl BlockView {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            intrinsic_width: width,
            intrinsic_height: height,
            size: Size {
                width: 0.0,
                height: 0.0,
            },
            bounds: Bounds::default(),
        }
    }

    /// Last laid-out bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl View for BlockView {
    fn measure(&mut self, width: AvailableSpace, height: AvailableSpace) -> Size<f32> {
        // Exact constraints win over the intrinsic size
        let width = match width {
            AvailableSpace::Definite(w) => w,
            _ => self.intrinsic_width,
        };
        let height = match height {
            AvailableSpace::Definite(h) => h,
            _ => self.intrinsic_height,
        };
        self.size = Size { width, height };
        self.size
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn size(&self) -> Size<f32> {
        self.size
    }
}
