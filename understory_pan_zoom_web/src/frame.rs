// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use understory_pan_zoom::{Layout, TransformState};

/// Container measurements in client (viewport) coordinates.
///
/// Container-local coordinates start at the top-left of the container's
/// client area, inside its border. Pointer positions and the target box are
/// converted into that space before they reach the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerFrame {
    origin: Point,
    size: Size,
}

impl ContainerFrame {
    /// Builds a frame from the container's bounding client rect, its border
    /// widths (`clientLeft`/`clientTop`) and its client size
    /// (`clientWidth`/`clientHeight`).
    #[must_use]
    pub fn new(bounding: Rect, border: Vec2, client_size: Size) -> Self {
        Self {
            origin: bounding.origin() + border,
            size: client_size,
        }
    }

    /// Converts a client-space point (for example `MouseEvent.clientX/Y`)
    /// into container-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        (client - self.origin).to_point()
    }

    /// Derives the layout from the target's current bounding client rect.
    ///
    /// The target is displayed under `state`, so the transform is undone to
    /// recover its natural box. This relies on `transform-origin: 0 0`.
    #[must_use]
    pub fn layout(&self, target_bounding: Rect, state: &TransformState) -> Layout {
        let shown = target_bounding - self.origin.to_vec2();
        let natural = Rect::from_origin_size(
            shown.origin() - state.translate(),
            shown.size() / state.scale(),
        );
        Layout::new(Rect::from_origin_size(Point::ORIGIN, self.size), natural)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};
    use understory_pan_zoom::TransformState;

    use super::ContainerFrame;

    fn frame() -> ContainerFrame {
        // Container at (100, 50) on the page with a 2px border and 400x300 client area.
        ContainerFrame::new(
            Rect::new(100.0, 50.0, 504.0, 354.0),
            Vec2::new(2.0, 2.0),
            Size::new(400.0, 300.0),
        )
    }

    #[test]
    fn client_points_become_container_local() {
        assert_eq!(frame().to_local(Point::new(102.0, 52.0)), Point::ORIGIN);
        assert_eq!(
            frame().to_local(Point::new(302.0, 202.0)),
            Point::new(200.0, 150.0)
        );
    }

    #[test]
    fn identity_layout_uses_measured_box() {
        let layout = frame().layout(
            Rect::new(102.0, 52.0, 502.0, 352.0),
            &TransformState::IDENTITY,
        );
        assert_eq!(layout.container, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(layout.target, Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn transformed_target_is_unwound_to_natural_box() {
        let state = TransformState::new(2.0, Vec2::new(-100.0, -50.0));
        // Natural box (10, 10)-(210, 160) shown at twice the size, shifted;
        // client origin is frame origin + natural origin + translate.
        let shown = Rect::from_origin_size((12.0, 12.0), (400.0, 300.0));
        let layout = frame().layout(shown, &state);
        assert_eq!(layout.target, Rect::new(10.0, 10.0, 210.0, 160.0));
    }
}
