//! Elastic overscroll container
//!
//! Wraps a [`ScrollSurface`], watches its clamp signal for boundary hits,
//! damps the drag distance past the boundary into a visual displacement, and
//! animates the displacement back to rest when the gesture ends.
//!
//! # Behavior
//!
//! - **Idle**: touch handling is forwarded to the scroll surface untouched.
//! - **Dragging**: armed by a clamped scroll delta. Each move damps
//!   `|baseline − y|` by the translation factor, displaces the content
//!   (positive at the top boundary, mirrored at the bottom), notifies the
//!   listener, and consumes the event so the surface does not double-handle
//!   it.
//! - **Recovering**: on release the displacement interpolates back to zero
//!   over a fixed duration. A new touch mid-flight pauses the animation and
//!   re-baselines the drag at the interrupted value, so there is no snap.

use rebound_animation::recovery::{RecoveryAnimation, DEFAULT_RECOVERY_DURATION_MS};
use rebound_core::events::{EventType, TouchEvent, TouchPhase};
use taffy::{AvailableSpace, Size};

use crate::error::{Result, WidgetError};
use crate::surface::{ClampedScroll, ScrollClamp, ScrollSurface};
use crate::view::{Bounds, View};

/// Default damping ratio applied to raw drag distance
pub const DEFAULT_TRANSLATION_FACTOR: f32 = 0.33;

// ============================================================================
// Direction & Phase
// ============================================================================

/// Which content boundary the user dragged past
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverScrollDirection {
    /// Dragged past the content start; content displaces downward
    #[default]
    Top,
    /// Dragged past the content end; content displaces upward
    Bottom,
}

/// Events driving [`OverScrollPhase`] transitions
pub mod overscroll_events {
    use rebound_core::events::EventType;

    /// The surface reported a clamped scroll delta
    pub const CLAMP_HIT: EventType = 100;
    /// The gesture ended (up, secondary up, or cancel)
    pub const RELEASE: EventType = 101;
    /// The recovery animation reached zero
    pub const SETTLED: EventType = 102;
    /// A new touch landed while recovery was in flight
    pub const TOUCH_RESUME: EventType = 103;
}

/// Interaction state of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverScrollPhase {
    /// Forwarding touch handling to the scroll surface unchanged
    #[default]
    Idle,
    /// Past a boundary; moves are damped and consumed
    Dragging,
    /// Released; the displacement is animating back to zero
    Recovering,
}

impl OverScrollPhase {
    /// Handle an event and return the new phase, or None if no transition
    pub fn on_event(&self, event: EventType) -> Option<Self> {
        use overscroll_events::*;
        match (self, event) {
            (OverScrollPhase::Idle, CLAMP_HIT) => Some(OverScrollPhase::Dragging),
            (OverScrollPhase::Dragging, RELEASE) => Some(OverScrollPhase::Recovering),
            (OverScrollPhase::Recovering, TOUCH_RESUME) => Some(OverScrollPhase::Dragging),
            (OverScrollPhase::Recovering, SETTLED) => Some(OverScrollPhase::Idle),
            _ => None,
        }
    }

    /// True while the elastic effect is engaged (dragging or recovering)
    pub fn is_active(&self) -> bool {
        !matches!(self, OverScrollPhase::Idle)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the overscroll container
#[derive(Debug, Clone, Copy)]
pub struct OverScrollConfig {
    /// Damping ratio converting raw drag distance into displacement,
    /// within (0, 1]
    pub translation_factor: f32,
    /// Recovery animation duration in milliseconds
    pub recovery_duration_ms: u32,
}

impl Default for OverScrollConfig {
    fn default() -> Self {
        Self {
            translation_factor: DEFAULT_TRANSLATION_FACTOR,
            recovery_duration_ms: DEFAULT_RECOVERY_DURATION_MS,
        }
    }
}

/// Single-slot overscroll listener, invoked with the current offset
pub type OverScrollListener = Box<dyn Fn(f32) + Send + Sync>;

// ============================================================================
// OverScrollView
// ============================================================================

/// A vertically scrollable container with an elastic overscroll effect.
///
/// Owns its scroll surface and content children; reports every offset
/// change (including the terminal zero) to a single registered listener.
pub struct OverScrollView {
    surface: Box<dyn ScrollSurface>,
    children: Vec<Box<dyn View>>,
    phase: OverScrollPhase,
    direction: OverScrollDirection,
    /// Drag baseline; set only while the elastic effect is engaged
    drag_start_y: Option<f32>,
    /// Current displacement magnitude (always >= 0)
    offset: f32,
    translation_factor: f32,
    recovery: RecoveryAnimation,
    listener: Option<OverScrollListener>,
    /// Own height recorded from the last exact measure constraint
    measured_height: Option<f32>,
    /// Last touch y while forwarding moves to the surface
    last_touch_y: Option<f32>,
    size: Size<f32>,
    bounds: Bounds,
}

impl Default for OverScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl OverScrollView {
    /// Create a container with the built-in [`ClampedScroll`] surface
    pub fn new() -> Self {
        Self::with_surface(Box::new(ClampedScroll::default()))
    }

    /// Create with a custom scroll surface
    pub fn with_surface(surface: Box<dyn ScrollSurface>) -> Self {
        Self {
            surface,
            children: Vec::new(),
            phase: OverScrollPhase::Idle,
            direction: OverScrollDirection::Top,
            drag_start_y: None,
            offset: 0.0,
            translation_factor: DEFAULT_TRANSLATION_FACTOR,
            recovery: RecoveryAnimation::new(DEFAULT_RECOVERY_DURATION_MS),
            listener: None,
            measured_height: None,
            last_touch_y: None,
            size: Size {
                width: 0.0,
                height: 0.0,
            },
            bounds: Bounds::default(),
        }
    }

    /// Create with a validated configuration
    pub fn with_config(config: OverScrollConfig) -> Result<Self> {
        Self::validate_factor(config.translation_factor)?;
        let mut view = Self::new();
        view.translation_factor = config.translation_factor;
        view.recovery = RecoveryAnimation::new(config.recovery_duration_ms);
        Ok(view)
    }

    fn validate_factor(factor: f32) -> Result<()> {
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(WidgetError::InvalidTranslationFactor(factor));
        }
        Ok(())
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the translation factor, validated to (0, 1].
    ///
    /// While the recovery animation is running the call is a logged no-op;
    /// changing the damping mid-flight would make the displacement jump.
    pub fn set_translation_factor(&mut self, factor: f32) -> Result<()> {
        if self.recovery.is_running() {
            tracing::warn!(
                factor,
                "ignoring translation factor change while recovery animation is running"
            );
            return Ok(());
        }
        Self::validate_factor(factor)?;
        self.translation_factor = factor;
        Ok(())
    }

    pub fn translation_factor(&self) -> f32 {
        self.translation_factor
    }

    /// Register the single-slot offset listener.
    ///
    /// Invoked with the current offset on every change, including the
    /// terminal zero when recovery completes. Replaces any previous
    /// listener.
    pub fn set_overscroll_listener<F>(&mut self, listener: F)
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    fn notify(&self, offset: f32) {
        if let Some(listener) = &self.listener {
            listener(offset);
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Append a content child
    pub fn add_child(&mut self, child: Box<dyn View>) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[Box<dyn View>] {
        &self.children
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    pub fn phase(&self) -> OverScrollPhase {
        self.phase
    }

    pub fn direction(&self) -> OverScrollDirection {
        self.direction
    }

    /// Current displacement magnitude (always >= 0)
    pub fn overscroll_offset(&self) -> f32 {
        self.offset
    }

    /// True while the elastic effect is engaged
    pub fn is_overscrolling(&self) -> bool {
        self.phase.is_active()
    }

    /// Height recorded from the last exact measure constraint
    pub fn measured_height(&self) -> Option<f32> {
        self.measured_height
    }

    /// Last laid-out bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn surface(&self) -> &dyn ScrollSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn ScrollSurface {
        self.surface.as_mut()
    }

    // =========================================================================
    // Touch handling
    // =========================================================================

    /// Process a touch event. Returns true when the event was consumed and
    /// must not reach the underlying scroll handling.
    pub fn handle_touch(&mut self, ev: &TouchEvent) -> bool {
        match ev.phase {
            TouchPhase::Down => {
                self.last_touch_y = Some(ev.y);
                if self.recovery.is_running() {
                    self.interrupt_recovery(ev.y);
                }
                false
            }

            TouchPhase::Move => {
                if self.phase == OverScrollPhase::Dragging {
                    self.drag_move(ev.y);
                    true
                } else {
                    self.forward_move(ev.y);
                    false
                }
            }

            TouchPhase::Up | TouchPhase::PointerUp | TouchPhase::Cancel => {
                self.last_touch_y = None;
                self.release();
                false
            }
        }
    }

    /// Feed a clamp report from the scroll surface.
    ///
    /// A clamped delta arms the elastic effect; the direction comes from the
    /// resulting offset (0 means the content start was hit). A fully applied
    /// delta while dragging means the content moved back in bounds, which
    /// disengages the effect and clears the baseline.
    pub fn on_over_scrolled(&mut self, clamp: ScrollClamp) {
        if clamp.clamped {
            if let Some(next) = self.phase.on_event(overscroll_events::CLAMP_HIT) {
                self.phase = next;
            }
            self.direction = if clamp.offset == 0.0 {
                OverScrollDirection::Top
            } else {
                OverScrollDirection::Bottom
            };
        } else if self.phase == OverScrollPhase::Dragging {
            self.phase = OverScrollPhase::Idle;
            self.drag_start_y = None;
        }
    }

    /// Damped drag while past a boundary
    fn drag_move(&mut self, y: f32) {
        let baseline = *self.drag_start_y.get_or_insert(y);
        let distance = (baseline - y).abs();
        self.offset = distance * self.translation_factor;
        self.apply_translation();
        tracing::trace!(
            distance,
            offset = self.offset,
            direction = ?self.direction,
            "overscroll drag"
        );
        self.notify(self.offset);
        self.last_touch_y = Some(y);
    }

    /// Translate an idle move into a scroll delta for the surface; the clamp
    /// outcome is the boundary signal that arms the effect.
    fn forward_move(&mut self, y: f32) {
        let last = self.last_touch_y.replace(y).unwrap_or(y);
        let delta = last - y;
        let clamp = self.surface.scroll_by(delta);
        self.on_over_scrolled(clamp);
    }

    /// Capture the animation value and pause, so the next drag continues
    /// exactly from the interrupted displacement.
    fn interrupt_recovery(&mut self, y: f32) {
        let captured = self.recovery.value();
        self.recovery.pause();
        self.offset = captured;
        self.apply_translation();

        // Re-baseline so |baseline - y| * factor reproduces the captured
        // offset at the touch position.
        let reach = captured / self.translation_factor;
        self.drag_start_y = Some(match self.direction {
            OverScrollDirection::Top => y - reach,
            OverScrollDirection::Bottom => y + reach,
        });

        if let Some(next) = self.phase.on_event(overscroll_events::TOUCH_RESUME) {
            self.phase = next;
        }
    }

    /// Start the recovery animation from the current offset
    fn release(&mut self) {
        if self.phase != OverScrollPhase::Dragging {
            return;
        }

        if self.offset <= f32::EPSILON {
            // Armed but never displaced; drop straight back to rest
            self.phase = OverScrollPhase::Idle;
            self.drag_start_y = None;
            return;
        }

        self.recovery.restart(self.offset, 0.0);
        if let Some(next) = self.phase.on_event(overscroll_events::RELEASE) {
            self.phase = next;
        }
    }

    /// Apply the signed displacement for the current direction
    fn apply_translation(&mut self) {
        let translation = match self.direction {
            OverScrollDirection::Top => self.offset,
            OverScrollDirection::Bottom => -self.offset,
        };
        self.surface.set_content_translation(translation);
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Advance the recovery animation by `dt_ms` milliseconds.
    ///
    /// Returns true while the animation is still running. Each tick applies
    /// the interpolated displacement and notifies the listener; completion
    /// clears the overscroll state and notifies with exactly zero.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.phase != OverScrollPhase::Recovering {
            return false;
        }

        let still_running = self.recovery.tick(dt_ms);
        self.offset = self.recovery.value();
        self.apply_translation();

        if still_running {
            self.notify(self.offset);
            true
        } else {
            self.settle();
            false
        }
    }

    fn settle(&mut self) {
        self.offset = 0.0;
        self.drag_start_y = None;
        self.apply_translation();
        if let Some(next) = self.phase.on_event(overscroll_events::SETTLED) {
            self.phase = next;
        }
        self.notify(0.0);
    }
}

impl View for OverScrollView {
    fn measure(&mut self, width: AvailableSpace, height: AvailableSpace) -> Size<f32> {
        let mut content_height = 0.0;
        let mut content_width = 0.0f32;
        for child in &mut self.children {
            let child_size = child.measure(width, AvailableSpace::MaxContent);
            content_height += child_size.height;
            content_width = content_width.max(child_size.width);
        }

        let resolved_width = match width {
            AvailableSpace::Definite(w) => w,
            _ => content_width,
        };
        let resolved_height = match height {
            AvailableSpace::Definite(h) => {
                self.measured_height = Some(h);
                h
            }
            _ => content_height,
        };

        self.surface.set_extent(resolved_height, content_height);
        self.size = Size {
            width: resolved_width,
            height: resolved_height,
        };
        self.size
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;

        // Children stack vertically from the content origin, shifted by the
        // scroll offset and the elastic displacement.
        let mut y = bounds.y - self.surface.offset() + self.surface.content_translation();
        for child in &mut self.children {
            let child_size = child.size();
            child.layout(Bounds::new(bounds.x, y, bounds.width, child_size.height));
            y += child_size.height;
        }
    }

    fn size(&self) -> Size<f32> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Drive the view to the top boundary so the elastic effect is armed
    fn arm_at_top(view: &mut OverScrollView) {
        view.handle_touch(&TouchEvent::down(180.0, 100.0));
        // Downward move at offset 0 clamps at the content start
        view.handle_touch(&TouchEvent::move_to(180.0, 101.0));
        assert_eq!(view.phase(), OverScrollPhase::Dragging);
        assert_eq!(view.direction(), OverScrollDirection::Top);
    }

    fn sized_view() -> OverScrollView {
        let mut view = OverScrollView::new();
        view.surface_mut().set_extent(400.0, 1000.0);
        view
    }

    #[test]
    fn test_factor_validation() {
        let mut view = OverScrollView::new();
        assert!(view.set_translation_factor(0.0).is_err());
        assert!(view.set_translation_factor(-0.5).is_err());
        assert!(view.set_translation_factor(1.5).is_err());
        assert!(view.set_translation_factor(1.0).is_ok());
        assert!(view.set_translation_factor(0.0001).is_ok());
        assert_eq!(view.translation_factor(), 0.0001);
    }

    #[test]
    fn test_config_validation() {
        let bad = OverScrollConfig {
            translation_factor: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            OverScrollView::with_config(bad),
            Err(WidgetError::InvalidTranslationFactor(_))
        ));

        let ok = OverScrollConfig {
            translation_factor: 0.5,
            recovery_duration_ms: 100,
        };
        let view = OverScrollView::with_config(ok).unwrap();
        assert_eq!(view.translation_factor(), 0.5);
    }

    #[test]
    fn test_clamp_arms_dragging_with_direction() {
        let mut view = sized_view();

        view.on_over_scrolled(ScrollClamp {
            offset: 0.0,
            clamped: true,
        });
        assert_eq!(view.phase(), OverScrollPhase::Dragging);
        assert_eq!(view.direction(), OverScrollDirection::Top);

        let mut view = sized_view();
        view.on_over_scrolled(ScrollClamp {
            offset: 600.0,
            clamped: true,
        });
        assert_eq!(view.direction(), OverScrollDirection::Bottom);
    }

    #[test]
    fn test_unclamped_report_disengages() {
        let mut view = sized_view();
        arm_at_top(&mut view);

        view.on_over_scrolled(ScrollClamp {
            offset: 10.0,
            clamped: false,
        });
        assert_eq!(view.phase(), OverScrollPhase::Idle);
    }

    #[test]
    fn test_damped_offset_from_drag_distance() {
        let mut view = sized_view();
        view.set_translation_factor(0.5).unwrap();
        arm_at_top(&mut view);

        // Baseline is recorded by the first damped move
        assert!(view.handle_touch(&TouchEvent::move_to(180.0, 100.0)));
        assert_eq!(view.overscroll_offset(), 0.0);

        // 30px drag at factor 0.5 displaces by 15
        assert!(view.handle_touch(&TouchEvent::move_to(180.0, 130.0)));
        assert_eq!(view.overscroll_offset(), 15.0);
        assert_eq!(view.surface().content_translation(), 15.0);
    }

    #[test]
    fn test_bottom_direction_mirrors_translation() {
        let mut view = sized_view();
        view.set_translation_factor(0.5).unwrap();
        view.handle_touch(&TouchEvent::down(180.0, 300.0));
        view.on_over_scrolled(ScrollClamp {
            offset: 600.0,
            clamped: true,
        });

        view.handle_touch(&TouchEvent::move_to(180.0, 100.0));
        view.handle_touch(&TouchEvent::move_to(180.0, 130.0));
        assert_eq!(view.overscroll_offset(), 15.0);
        assert_eq!(view.surface().content_translation(), -15.0);
    }

    #[test]
    fn test_offset_monotonic_in_drag_distance() {
        let mut view = sized_view();
        arm_at_top(&mut view);

        view.handle_touch(&TouchEvent::move_to(180.0, 100.0));
        let mut last = view.overscroll_offset();
        for step in 1..=10 {
            view.handle_touch(&TouchEvent::move_to(180.0, 100.0 + step as f32 * 12.0));
            let offset = view.overscroll_offset();
            assert!(offset >= last);
            last = offset;
        }
    }

    #[test]
    fn test_moves_consumed_only_while_dragging() {
        let mut view = sized_view();
        view.surface_mut().scroll_by(100.0);

        // In-bounds move forwards to the surface and is not consumed
        view.handle_touch(&TouchEvent::down(180.0, 200.0));
        assert!(!view.handle_touch(&TouchEvent::move_to(180.0, 210.0)));
        assert_eq!(view.phase(), OverScrollPhase::Idle);

        // Exhaust the scrollable range; the clamped move is still the
        // surface's, subsequent moves are consumed
        while view.phase() == OverScrollPhase::Idle {
            let y = view.last_touch_y.unwrap() + 40.0;
            view.handle_touch(&TouchEvent::move_to(180.0, y));
        }
        assert!(view.handle_touch(&TouchEvent::move_to(180.0, 500.0)));
    }

    #[test]
    fn test_recovery_sequence_decreases_to_zero() {
        let offsets: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
        let mut view = sized_view();
        view.set_translation_factor(0.5).unwrap();
        view.set_overscroll_listener({
            let offsets = Arc::clone(&offsets);
            move |offset| offsets.lock().unwrap().push(offset)
        });

        arm_at_top(&mut view);
        view.handle_touch(&TouchEvent::move_to(180.0, 100.0));
        view.handle_touch(&TouchEvent::move_to(180.0, 180.0));
        assert_eq!(view.overscroll_offset(), 40.0);

        offsets.lock().unwrap().clear();
        view.handle_touch(&TouchEvent::up(180.0, 180.0));
        assert_eq!(view.phase(), OverScrollPhase::Recovering);

        let mut frames = 0;
        while view.tick(16.0) {
            frames += 1;
            assert!(frames < 100, "recovery never settled");
        }

        let recorded = offsets.lock().unwrap();
        assert!(!recorded.is_empty());
        for pair in recorded.windows(2) {
            assert!(pair[1] < pair[0], "recovery offsets must decrease");
        }
        assert_eq!(*recorded.last().unwrap(), 0.0);

        // 250ms at 16ms frames
        assert!(frames <= 16);
        assert_eq!(view.phase(), OverScrollPhase::Idle);
        assert!(!view.is_overscrolling());
        assert_eq!(view.surface().content_translation(), 0.0);
    }

    #[test]
    fn test_interrupted_recovery_resumes_without_jump() {
        let mut view = sized_view();
        view.set_translation_factor(0.5).unwrap();
        arm_at_top(&mut view);
        view.handle_touch(&TouchEvent::move_to(180.0, 100.0));
        view.handle_touch(&TouchEvent::move_to(180.0, 200.0));
        assert_eq!(view.overscroll_offset(), 50.0);

        view.handle_touch(&TouchEvent::up(180.0, 200.0));
        view.tick(16.0);
        view.tick(16.0);
        let mid_flight = view.overscroll_offset();
        assert!(mid_flight > 0.0 && mid_flight < 50.0);

        // New touch captures the animated value and re-arms the drag
        view.handle_touch(&TouchEvent::down(180.0, 150.0));
        assert_eq!(view.phase(), OverScrollPhase::Dragging);
        assert_eq!(view.overscroll_offset(), mid_flight);

        // A move at the same position continues from the captured value
        view.handle_touch(&TouchEvent::move_to(180.0, 150.0));
        assert!((view.overscroll_offset() - mid_flight).abs() < 1e-3);

        // Releasing again recovers from the captured value, not from the
        // original peak
        view.handle_touch(&TouchEvent::up(180.0, 150.0));
        assert!((view.recovery.value() - mid_flight).abs() < 1e-3);
        while view.tick(16.0) {}
        assert_eq!(view.overscroll_offset(), 0.0);
    }

    #[test]
    fn test_factor_change_during_recovery_is_noop() {
        let mut view = sized_view();
        arm_at_top(&mut view);
        view.handle_touch(&TouchEvent::move_to(180.0, 100.0));
        view.handle_touch(&TouchEvent::move_to(180.0, 200.0));
        view.handle_touch(&TouchEvent::up(180.0, 200.0));

        let before = view.translation_factor();
        assert!(view.set_translation_factor(1.0).is_ok());
        assert_eq!(view.translation_factor(), before);

        while view.tick(16.0) {}
        assert!(view.set_translation_factor(1.0).is_ok());
        assert_eq!(view.translation_factor(), 1.0);
    }

    #[test]
    fn test_baseline_set_only_while_engaged() {
        let mut view = sized_view();
        assert!(view.drag_start_y.is_none());

        arm_at_top(&mut view);
        view.handle_touch(&TouchEvent::move_to(180.0, 120.0));
        assert!(view.drag_start_y.is_some());

        view.handle_touch(&TouchEvent::up(180.0, 120.0));
        while view.tick(16.0) {}
        assert!(view.drag_start_y.is_none());
    }

    #[test]
    fn test_release_without_displacement_returns_to_idle() {
        let mut view = sized_view();
        arm_at_top(&mut view);

        view.handle_touch(&TouchEvent::up(180.0, 101.0));
        assert_eq!(view.phase(), OverScrollPhase::Idle);
        assert!(view.drag_start_y.is_none());
    }

    #[test]
    fn test_cancel_starts_recovery() {
        let mut view = sized_view();
        arm_at_top(&mut view);
        view.handle_touch(&TouchEvent::move_to(180.0, 100.0));
        view.handle_touch(&TouchEvent::move_to(180.0, 220.0));

        view.handle_touch(&TouchEvent::cancel());
        assert_eq!(view.phase(), OverScrollPhase::Recovering);
    }

    #[test]
    fn test_measure_records_exact_height_only() {
        let mut view = OverScrollView::new();
        view.add_child(Box::new(crate::view::BlockView::new(360.0, 300.0)));

        view.measure(AvailableSpace::Definite(360.0), AvailableSpace::MaxContent);
        assert_eq!(view.measured_height(), None);

        view.measure(
            AvailableSpace::Definite(360.0),
            AvailableSpace::Definite(640.0),
        );
        assert_eq!(view.measured_height(), Some(640.0));
    }

    /// Test view that records its laid-out bounds into shared state
    struct RecordingView {
        height: f32,
        size: Size<f32>,
        last_bounds: Arc<Mutex<Bounds>>,
    }

    impl RecordingView {
        fn new(height: f32, last_bounds: Arc<Mutex<Bounds>>) -> Self {
            Self {
                height,
                size: Size {
                    width: 0.0,
                    height: 0.0,
                },
                last_bounds,
            }
        }
    }

    impl View for RecordingView {
        fn measure(&mut self, width: AvailableSpace, _height: AvailableSpace) -> Size<f32> {
            let width = match width {
                AvailableSpace::Definite(w) => w,
                _ => 0.0,
            };
            self.size = Size {
                width,
                height: self.height,
            };
            self.size
        }

        fn layout(&mut self, bounds: Bounds) {
            *self.last_bounds.lock().unwrap() = bounds;
        }

        fn size(&self) -> Size<f32> {
            self.size
        }
    }

    #[test]
    fn test_layout_applies_offset_and_translation() {
        let first_bounds = Arc::new(Mutex::new(Bounds::default()));
        let second_bounds = Arc::new(Mutex::new(Bounds::default()));

        let mut view = OverScrollView::new();
        view.add_child(Box::new(RecordingView::new(500.0, Arc::clone(&first_bounds))));
        view.add_child(Box::new(RecordingView::new(500.0, Arc::clone(&second_bounds))));
        view.measure(
            AvailableSpace::Definite(360.0),
            AvailableSpace::Definite(400.0),
        );

        view.surface_mut().scroll_by(100.0);
        view.surface_mut().set_content_translation(15.0);
        view.layout(Bounds::sized(360.0, 400.0));

        // Children start at -offset + translation and stack downward
        assert_eq!(first_bounds.lock().unwrap().y, -85.0);
        assert_eq!(second_bounds.lock().unwrap().y, 415.0);
    }
}
