// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use crate::state::TransformState;

/// Pushes a transform onto the host's visual representation of the target.
///
/// Implementations must be idempotent: applying the same state twice leaves
/// the target looking the same as applying it once.
pub trait RenderApplier {
    /// Applies an already clamped state.
    fn apply(&mut self, state: &TransformState);
}

impl<F: FnMut(&TransformState)> RenderApplier for F {
    fn apply(&mut self, state: &TransformState) {
        self(state);
    }
}

/// Formats a state as a CSS `transform` value.
///
/// The output assumes `transform-origin: 0 0` on the target.
///
/// ```
/// use kurbo::Vec2;
/// use understory_pan_zoom::{TransformState, css_transform};
///
/// let state = TransformState::new(1.5, Vec2::new(-20.0, 4.25));
/// assert_eq!(css_transform(&state), "translate(-20px, 4.25px) scale(1.5)");
/// ```
#[must_use]
pub fn css_transform(state: &TransformState) -> String {
    // Adding zero folds `-0.0` into `0.0` so identical states print identically.
    format!(
        "translate({}px, {}px) scale({})",
        state.x() + 0.0,
        state.y() + 0.0,
        state.scale()
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{RenderApplier, css_transform};
    use crate::state::TransformState;

    #[test]
    fn identity_formats_without_negative_zero() {
        let state = TransformState::new(1.0, Vec2::new(-0.0, 0.0));
        assert_eq!(css_transform(&state), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn closures_are_appliers() {
        let mut seen = alloc::vec::Vec::new();
        let mut applier = |s: &TransformState| seen.push(s.scale());
        applier.apply(&TransformState::new(2.0, Vec2::ZERO));
        applier.apply(&TransformState::new(3.0, Vec2::ZERO));
        assert_eq!(seen, [2.0, 3.0]);
    }
}
