//! Rebound Widgets
//!
//! Elastic overscroll for scrollable content:
//!
//! - [`OverScrollView`](overscroll::OverScrollView): wraps a scroll surface,
//!   damps drags past a content boundary into a visual displacement, and
//!   animates it back to rest on release
//! - [`RefreshHeader`](header::RefreshHeader): height-capped region revealed
//!   by the overscroll offset, hosting a pull-to-refresh indicator
//! - [`RefreshScrollView`](composite::RefreshScrollView): composite wiring
//!   the two together behind a single child list
//!
//! # Example
//!
//! ```rust,ignore
//! use rebound_core::{events::TouchEvent, units::Density};
//! use rebound_widgets::prelude::*;
//!
//! let mut view = RefreshScrollView::new(Density::new(2.0)?);
//! view.set_custom_header(Box::new(BlockView::new(0.0, 40.0)))?;
//! view.add_child(Box::new(BlockView::new(360.0, 80.0)));
//!
//! // Host loop: feed touch events, tick every frame
//! view.handle_touch(&TouchEvent::down(180.0, 200.0));
//! view.handle_touch(&TouchEvent::move_to(180.0, 260.0));
//! view.handle_touch(&TouchEvent::up(180.0, 260.0));
//! while view.tick(16.0) {}
//! ```

pub mod composite;
pub mod error;
pub mod header;
pub mod overscroll;
pub mod surface;
pub mod view;

pub use error::{Result, WidgetError};

/// Common imports for building with Rebound widgets
pub mod prelude {
    pub use crate::composite::{RefreshScrollView, SharedHeader};
    pub use crate::error::{Result, WidgetError};
    pub use crate::header::{RefreshHeader, MAX_HEADER_HEIGHT_DIP};
    pub use crate::overscroll::{
        OverScrollConfig, OverScrollDirection, OverScrollPhase, OverScrollView,
    };
    pub use crate::surface::{ClampedScroll, ScrollClamp, ScrollSurface};
    pub use crate::view::{BlockView, Bounds, View};
}
