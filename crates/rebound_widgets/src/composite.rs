//! Composite refresh scroll view
//!
//! Owns one [`RefreshHeader`] and one [`OverScrollView`], presents a single
//! logical child list by re-routing all user content into the container,
//! and mirrors the container's overscroll offset into the header's height.

use std::sync::{Arc, Mutex};

use rebound_core::events::TouchEvent;
use rebound_core::units::Density;
use taffy::{AvailableSpace, Size};

use crate::error::Result;
use crate::header::RefreshHeader;
use crate::overscroll::{OverScrollConfig, OverScrollView};
use crate::view::{Bounds, View};

/// Shared handle to the header region.
///
/// The overscroll listener closure holds one clone and the composite the
/// other; resizing happens on whichever side fires.
pub type SharedHeader = Arc<Mutex<RefreshHeader>>;

/// Unified container: pull past the top reveals the refresh header.
///
/// The header and the container are the only structural members; every
/// externally added child lives inside the container.
pub struct RefreshScrollView {
    overscroll: OverScrollView,
    header: SharedHeader,
    size: Size<f32>,
    bounds: Bounds,
}

impl RefreshScrollView {
    pub fn new(density: Density) -> Self {
        Self::assemble(density, OverScrollView::new())
    }

    /// Create with a validated overscroll configuration
    pub fn with_config(density: Density, config: OverScrollConfig) -> Result<Self> {
        Ok(Self::assemble(density, OverScrollView::with_config(config)?))
    }

    fn assemble(density: Density, mut overscroll: OverScrollView) -> Self {
        let header: SharedHeader = Arc::new(Mutex::new(RefreshHeader::new(density)));

        // The offset listener drives the header height; the header's own
        // measure pass applies the cap.
        overscroll.set_overscroll_listener({
            let header = Arc::clone(&header);
            move |offset| {
                header.lock().unwrap().request_height(offset.round() as i32);
            }
        });

        Self {
            overscroll,
            header,
            size: Size {
                width: 0.0,
                height: 0.0,
            },
            bounds: Bounds::default(),
        }
    }

    // =========================================================================
    // Child routing
    // =========================================================================

    /// Add content. Always lands inside the overscroll container, never as a
    /// direct child of the composite.
    pub fn add_child(&mut self, child: Box<dyn View>) {
        self.overscroll.add_child(child);
    }

    /// First-layout adoption: re-parent children inflated outside the
    /// structural pair into the container, preserving relative order.
    pub fn adopt_children(&mut self, children: Vec<Box<dyn View>>) {
        for child in children {
            self.overscroll.add_child(child);
        }
    }

    pub fn child_count(&self) -> usize {
        self.overscroll.child_count()
    }

    // =========================================================================
    // Header
    // =========================================================================

    /// Install custom header content from a pre-built view.
    ///
    /// Fails when a header has already been set.
    pub fn set_custom_header(&mut self, content: Box<dyn View>) -> Result<()> {
        self.header.lock().unwrap().set_content(content)
    }

    /// Install custom header content from a builder (template variant)
    pub fn set_custom_header_with<F>(&mut self, build: F) -> Result<()>
    where
        F: FnOnce() -> Box<dyn View>,
    {
        self.header.lock().unwrap().set_content_with(build)
    }

    /// Shared handle to the header region
    pub fn header(&self) -> SharedHeader {
        Arc::clone(&self.header)
    }

    /// Header height resolved by the last measure pass
    pub fn header_height(&self) -> f32 {
        self.header.lock().unwrap().current_height()
    }

    // =========================================================================
    // Container access & event flow
    // =========================================================================

    pub fn overscroll(&self) -> &OverScrollView {
        &self.overscroll
    }

    pub fn overscroll_mut(&mut self) -> &mut OverScrollView {
        &mut self.overscroll
    }

    /// Last laid-out bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Process a touch event. Returns true when the container consumed it.
    pub fn handle_touch(&mut self, ev: &TouchEvent) -> bool {
        self.overscroll.handle_touch(ev)
    }

    /// Advance the recovery animation. Returns true while still animating.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.overscroll.tick(dt_ms)
    }
}

impl View for RefreshScrollView {
    fn measure(&mut self, width: AvailableSpace, height: AvailableSpace) -> Size<f32> {
        let container_size = self.overscroll.measure(width, height);

        // The header measures against the requested height; its own clamp
        // applies here.
        let mut header = self.header.lock().unwrap();
        let requested = header.requested_height() as f32;
        header.measure(
            AvailableSpace::Definite(container_size.width),
            AvailableSpace::Definite(requested),
        );
        drop(header);

        self.size = container_size;
        self.size
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;

        // Frame semantics: the container fills the composite, the header
        // overlays the top edge at its resolved height.
        self.overscroll.layout(bounds);

        let mut header = self.header.lock().unwrap();
        let header_height = header.size().height;
        header.layout(Bounds::new(bounds.x, bounds.y, bounds.width, header_height));
    }

    fn size(&self) -> Size<f32> {
        self.size
    }
}
