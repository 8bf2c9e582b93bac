// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::Error;
use crate::config::{BoundsConfig, Containment};
use crate::state::{Layout, TransformState};

/// Clamps proposed transforms into the configured scale range and
/// containment policy.
///
/// The enforcer is stateless apart from its config: the same proposal and
/// layout always produce the same result, and clamping an already clamped
/// state returns it unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsEnforcer {
    config: BoundsConfig,
}

impl BoundsEnforcer {
    /// Creates an enforcer, rejecting configs that fail
    /// [`BoundsConfig::validate`].
    pub fn new(config: BoundsConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The config this enforcer applies.
    #[must_use]
    pub const fn config(&self) -> &BoundsConfig {
        &self.config
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale(), self.config.max_scale())
    }

    /// Clamps a translation for the given (already clamped) scale.
    #[must_use]
    pub fn clamp_translate(&self, layout: &Layout, scale: f64, translate: Vec2) -> Vec2 {
        let mode = self.config.containment();
        if mode == Containment::None {
            return translate;
        }
        let c = layout.container;
        let t = layout.target;
        Vec2::new(
            clamp_axis(mode, c.x0, c.x1, t.x0, t.width() * scale, translate.x),
            clamp_axis(mode, c.y0, c.y1, t.y0, t.height() * scale, translate.y),
        )
    }

    /// Returns the closest state to `proposed` that satisfies the config.
    #[must_use]
    pub fn enforce(&self, layout: &Layout, proposed: TransformState) -> TransformState {
        let scale = self.clamp_scale(proposed.scale());
        let translate = self.clamp_translate(layout, scale, proposed.translate());
        TransformState::new(scale, translate)
    }
}

/// Clamps one axis of the translation.
///
/// `align_min` puts the target's near edge on the container's near edge,
/// `align_max` puts the far edges together.
fn clamp_axis(
    mode: Containment,
    container_min: f64,
    container_max: f64,
    target_min: f64,
    scaled_len: f64,
    value: f64,
) -> f64 {
    let align_min = container_min - target_min;
    let align_max = container_max - target_min - scaled_len;
    if !(align_min.is_finite() && align_max.is_finite()) {
        return value;
    }
    match mode {
        Containment::None => value,
        Containment::Outside => value.clamp(align_min.min(align_max), align_min.max(align_max)),
        Containment::Inside => {
            if scaled_len <= container_max - container_min {
                (align_min + align_max) * 0.5
            } else {
                value.clamp(align_max, align_min)
            }
        }
    }
}
