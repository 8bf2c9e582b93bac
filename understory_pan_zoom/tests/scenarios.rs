// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios for `understory_pan_zoom`.
//!
//! These drive a [`PanZoom`] only through host input and check the documented
//! behavior: zoom to cursor, containment after gestures, and disposal.

use kurbo::{Point, Rect, Vec2};
use understory_pan_zoom::gesture::InputEvent;
use understory_pan_zoom::{
    BoundsConfig, ChangeKind, Containment, Layout, PanZoom, TransformState, css_transform,
};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

fn wheel_at(position: Point, dy: f64) -> InputEvent {
    InputEvent::Wheel {
        position,
        delta: Vec2::new(0.0, dy),
    }
}

fn covers(outer: Rect, inner: Rect) -> bool {
    const EPS: f64 = 1e-9;
    outer.x0 <= inner.x0 + EPS
        && outer.y0 <= inner.y0 + EPS
        && outer.x1 >= inner.x1 - EPS
        && outer.y1 >= inner.y1 - EPS
}

#[test]
fn default_wheel_zoom_in_at_center_keeps_center_and_coverage() {
    let layout = Layout::filled(CONTAINER);
    let mut pz = PanZoom::new(BoundsConfig::default(), layout).unwrap();
    let center = CONTAINER.center();
    let content_before = pz.state().view_to_content(&layout, center);

    let change = pz.handle(wheel_at(center, -120.0)).unwrap();
    assert_eq!(change.kind, ChangeKind::Zoom);
    assert!(pz.scale() > 1.0);

    let content_after = pz.state().view_to_content(&layout, center);
    assert!((content_after.x - content_before.x).abs() < 1e-9);
    assert!((content_after.y - content_before.y).abs() < 1e-9);

    assert!(covers(pz.state().transformed_target(&layout), CONTAINER));
}

#[test]
fn zoom_to_cursor_off_center() {
    let layout = Layout::filled(CONTAINER);
    let config = BoundsConfig::default().with_containment(Containment::None);
    let mut pz = PanZoom::new(config, layout).unwrap();
    pz.pan_to(Vec2::new(-35.0, 12.0));

    let cursor = Point::new(73.0, 211.0);
    let before = pz.state().view_to_content(&layout, cursor);
    pz.handle(wheel_at(cursor, -1.0));
    pz.handle(wheel_at(cursor, -1.0));
    pz.handle(wheel_at(cursor, 1.0));
    let after = pz.state().view_to_content(&layout, cursor);

    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn inside_drag_sums_deltas_then_clamps() {
    let layout = Layout::filled(CONTAINER);
    let config = BoundsConfig::default().with_containment(Containment::Inside);
    let mut pz = PanZoom::new(config, layout).unwrap();
    // Zoom to 2x so the target is larger than the container and can move.
    pz.zoom_to(2.0);
    let start = pz.translate();
    assert_eq!(start, Vec2::new(-200.0, -150.0));

    let mut pos = Point::new(100.0, 100.0);
    pz.handle(InputEvent::PointerDown { id: 1, position: pos });
    for delta in [Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0), Vec2::new(-2.0, -2.0)] {
        pos += delta;
        pz.handle(InputEvent::PointerMove { id: 1, position: pos });
    }
    pz.handle(InputEvent::PointerUp { id: 1, position: pos });

    assert_eq!(pz.translate(), start + Vec2::new(3.0, 3.0));
    assert!(!pz.is_dragging());
}

#[test]
fn inside_drag_at_edge_is_clamped() {
    let layout = Layout::filled(CONTAINER);
    let config = BoundsConfig::default().with_containment(Containment::Inside);
    let mut pz = PanZoom::new(config, layout).unwrap();
    pz.zoom_to(2.0);
    pz.pan_to(Vec2::new(-1.0, -299.0));

    let mut pos = Point::ORIGIN;
    pz.handle(InputEvent::PointerDown { id: 4, position: pos });
    for delta in [Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0), Vec2::new(-2.0, -2.0)] {
        pos += delta;
        pz.handle(InputEvent::PointerMove { id: 4, position: pos });
    }

    // Sum (3, 3) from (-1, -299) is (2, -296); x is clamped to 0.
    assert_eq!(pz.translate(), Vec2::new(0.0, -296.0));
}

#[test]
fn inside_small_target_stays_centered_while_dragging() {
    let layout = Layout::new(CONTAINER, Rect::new(0.0, 0.0, 100.0, 100.0));
    let config = BoundsConfig::new(1.0, 1.5, Containment::Inside);
    let mut pz = PanZoom::new(config, layout).unwrap();
    assert_eq!(pz.translate(), Vec2::new(150.0, 100.0));

    pz.handle(InputEvent::PointerDown {
        id: 1,
        position: Point::ORIGIN,
    });
    assert_eq!(
        pz.handle(InputEvent::PointerMove {
            id: 1,
            position: Point::new(40.0, 40.0),
        }),
        None
    );
    assert_eq!(pz.translate(), Vec2::new(150.0, 100.0));
}

#[test]
fn dispose_then_wheel_changes_nothing() {
    let layout = Layout::filled(CONTAINER);
    let mut pz = PanZoom::new(BoundsConfig::default(), layout).unwrap();
    pz.handle(wheel_at(CONTAINER.center(), -1.0));
    let before = pz.state();
    let revision = pz.revision();

    pz.dispose();
    assert_eq!(pz.handle(wheel_at(CONTAINER.center(), -1.0)), None);
    assert_eq!(
        pz.handle(InputEvent::PointerDown {
            id: 1,
            position: Point::ORIGIN,
        }),
        None
    );
    assert_eq!(pz.state(), before);
    assert_eq!(pz.revision(), revision);
}

#[test]
fn dispose_mid_drag_drops_the_drag() {
    let layout = Layout::filled(CONTAINER);
    let mut pz = PanZoom::new(BoundsConfig::default(), layout).unwrap();
    pz.handle(InputEvent::PointerDown {
        id: 1,
        position: Point::ORIGIN,
    });
    assert!(pz.is_dragging());
    pz.dispose();
    assert!(!pz.is_dragging());
}

#[test]
fn max_scale_caps_repeated_wheel_zoom() {
    let layout = Layout::filled(CONTAINER);
    let config = BoundsConfig::default().with_max_scale(3.0);
    let mut pz = PanZoom::new(config, layout).unwrap();
    for _ in 0..100 {
        pz.handle(wheel_at(Point::new(10.0, 290.0), -1.0));
    }
    assert_eq!(pz.scale(), 3.0);
    assert!(covers(pz.state().transformed_target(&layout), CONTAINER));
}

#[test]
fn rendered_css_matches_state() {
    let layout = Layout::filled(CONTAINER);
    let config = BoundsConfig::default().with_containment(Containment::None);
    let mut pz = PanZoom::new(config, layout).unwrap();
    pz.zoom_to(2.0);

    let mut css = None;
    pz.render(&mut |s: &TransformState| css = Some(css_transform(s)));
    assert_eq!(
        css.as_deref(),
        Some("translate(-200px, -150px) scale(2)")
    );
}
