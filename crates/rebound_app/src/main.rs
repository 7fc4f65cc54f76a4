//! Headless pull-to-refresh sample
//!
//! Builds a refresh scroll view with placeholder content, replays a scripted
//! pull-down gesture frame by frame, and logs the overscroll offset and
//! header height as the drag progresses and the recovery animation settles.
//!
//! Run with: cargo run -p rebound_app

use anyhow::Result;
use rebound_core::events::TouchEvent;
use rebound_core::units::Density;
use rebound_widgets::prelude::*;
use taffy::AvailableSpace;

/// Simulated frame duration (~60fps)
const FRAME_MS: f32 = 16.0;

const VIEWPORT_WIDTH: f32 = 360.0;
const VIEWPORT_HEIGHT: f32 = 640.0;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let density = Density::new(2.0)?;
    let mut view = RefreshScrollView::with_config(
        density,
        OverScrollConfig {
            translation_factor: 0.5,
            ..Default::default()
        },
    )?;

    view.set_custom_header(Box::new(BlockView::new(0.0, 48.0)))?;
    for _ in 0..20 {
        view.add_child(Box::new(BlockView::new(VIEWPORT_WIDTH, 96.0)));
    }
    run_layout_pass(&mut view);

    tracing::info!(
        children = view.child_count(),
        header_cap_px = view.header().lock().unwrap().max_height_px(),
        "refresh scroll view ready"
    );

    // Pull down from the content start: the first move hits the boundary
    // and arms the elastic effect, the rest are damped.
    view.handle_touch(&TouchEvent::down(180.0, 200.0));
    for frame in 0..=14 {
        let y = 200.0 + frame as f32 * 12.0;
        view.handle_touch(&TouchEvent::move_to(180.0, y));
        run_layout_pass(&mut view);
        tracing::info!(
            frame,
            touch_y = y,
            offset = view.overscroll().overscroll_offset(),
            header_px = view.header_height(),
            "drag"
        );
    }

    // Release and let the recovery animation bring everything back
    view.handle_touch(&TouchEvent::up(180.0, 368.0));
    let mut frame = 0;
    while view.tick(FRAME_MS) {
        frame += 1;
        run_layout_pass(&mut view);
        tracing::info!(
            frame,
            offset = view.overscroll().overscroll_offset(),
            header_px = view.header_height(),
            "recovering"
        );
    }
    run_layout_pass(&mut view);

    tracing::info!(
        offset = view.overscroll().overscroll_offset(),
        header_px = view.header_height(),
        "settled"
    );

    Ok(())
}

/// Measure and lay out the composite for one frame
fn run_layout_pass(view: &mut RefreshScrollView) {
    view.measure(
        AvailableSpace::Definite(VIEWPORT_WIDTH),
        AvailableSpace::Definite(VIEWPORT_HEIGHT),
    );
    view.layout(Bounds::sized(VIEWPORT_WIDTH, VIEWPORT_HEIGHT));
}
