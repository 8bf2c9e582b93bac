// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Container and untransformed target boxes, in container-local coordinates.
///
/// The host measures these (for example from `getBoundingClientRect`) and
/// hands them to the controller. `target` is the box the element would
/// occupy with an identity transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Visible region of the container.
    pub container: Rect,
    /// Natural box of the target element.
    pub target: Rect,
}

impl Layout {
    /// Creates a layout from the container and natural target boxes.
    #[must_use]
    pub const fn new(container: Rect, target: Rect) -> Self {
        Self { container, target }
    }

    /// A layout where the target exactly fills the container.
    #[must_use]
    pub const fn filled(container: Rect) -> Self {
        Self {
            container,
            target: container,
        }
    }
}

/// Current scale and translation of a target element.
///
/// A target-local point `p` is displayed at
/// `layout.target.origin() + translate + scale * p`; the transform origin is
/// the target's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    scale: f64,
    translate: Vec2,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    /// Scale `1`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a state value.
    ///
    /// This does not touch any controller; proposals only take effect through
    /// [`crate::PanZoom`], which clamps them first.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Uniform scale factor.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Translation offset in container pixels.
    #[must_use]
    pub const fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Horizontal translation.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.translate.x
    }

    /// Vertical translation.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.translate.y
    }

    /// Returns a copy with a different scale.
    #[must_use]
    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Returns a copy with a different translation.
    #[must_use]
    pub const fn with_translate(self, translate: Vec2) -> Self {
        Self { translate, ..self }
    }

    /// Target-local → container transform for a target whose natural
    /// top-left corner sits at `target_origin`.
    #[must_use]
    pub fn to_affine(&self, target_origin: Point) -> Affine {
        Affine::translate(target_origin.to_vec2() + self.translate) * Affine::scale(self.scale)
    }

    /// Converts a container-space point into target-local content coordinates.
    #[must_use]
    pub fn view_to_content(&self, layout: &Layout, pt: Point) -> Point {
        ((pt - layout.target.origin() - self.translate) / self.scale).to_point()
    }

    /// Converts a target-local content point into container coordinates.
    #[must_use]
    pub fn content_to_view(&self, layout: &Layout, pt: Point) -> Point {
        layout.target.origin() + self.translate + pt.to_vec2() * self.scale
    }

    /// The target's box after applying this transform, in container coordinates.
    #[must_use]
    pub fn transformed_target(&self, layout: &Layout) -> Rect {
        Rect::from_origin_size(
            layout.target.origin() + self.translate,
            layout.target.size() * self.scale,
        )
    }

    pub(crate) fn is_usable(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.translate.is_finite()
    }
}
