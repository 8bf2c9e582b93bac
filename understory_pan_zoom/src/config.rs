// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use kurbo::Vec2;

use crate::Error;
use crate::state::TransformState;

/// Translation clamp policy relative to the container.
///
/// Consulted by [`crate::BoundsEnforcer`] after every proposed change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Containment {
    /// Keep the target within the container.
    ///
    /// Along an axis where the scaled target fits inside the container, the
    /// target is centered. Along an axis where it is larger, no target edge
    /// may move inward past the matching container edge.
    Inside,
    /// Keep the target covering the container.
    ///
    /// Along an axis where the scaled target is at least as large as the
    /// container, both target edges stay at or beyond the container edges.
    /// When it is smaller, it is kept inside the container instead.
    #[default]
    Outside,
    /// Do not clamp translation at all.
    None,
}

impl Containment {
    /// The lowercase name used in configuration objects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Containment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Containment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(Self::Inside),
            "outside" => Ok(Self::Outside),
            "none" => Ok(Self::None),
            other => Err(Error::UnknownContainment(other.to_string())),
        }
    }
}

/// Scale range and containment policy for one attached target.
///
/// A config is a value: once handed to a [`crate::PanZoom`] it is never
/// changed. Use the `with_*` methods to derive a modified copy before
/// construction.
///
/// ```
/// use understory_pan_zoom::{BoundsConfig, Containment};
///
/// let config = BoundsConfig::default()
///     .with_max_scale(8.0)
///     .with_containment(Containment::Inside);
/// assert_eq!(config.min_scale(), 1.0);
/// assert!(config.validate().is_ok());
/// ```
///
/// With the `serde` feature, an unbounded `maxScale` is omitted on output and
/// a missing or `null` one reads back as unbounded. Deserialized configs are
/// validated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoundsConfig {
    min_scale: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_unbounded"))]
    max_scale: f64,
    #[cfg_attr(feature = "serde", serde(rename = "contain"))]
    containment: Containment,
}

impl Default for BoundsConfig {
    /// `min_scale = 1`, unbounded `max_scale`, [`Containment::Outside`].
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: f64::INFINITY,
            containment: Containment::Outside,
        }
    }
}

impl BoundsConfig {
    /// Creates a config from explicit bounds. Call [`BoundsConfig::validate`]
    /// (or construct a controller, which validates) to reject bad values.
    #[must_use]
    pub const fn new(min_scale: f64, max_scale: f64, containment: Containment) -> Self {
        Self {
            min_scale,
            max_scale,
            containment,
        }
    }

    /// Returns a copy with a different minimum scale.
    #[must_use]
    pub const fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Returns a copy with a different maximum scale. `f64::INFINITY` means unbounded.
    #[must_use]
    pub const fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with a different containment mode.
    #[must_use]
    pub const fn with_containment(mut self, containment: Containment) -> Self {
        self.containment = containment;
        self
    }

    /// Lower clamp bound for the scale.
    #[must_use]
    pub const fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper clamp bound for the scale; may be infinite.
    #[must_use]
    pub const fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Translation clamp policy.
    #[must_use]
    pub const fn containment(&self) -> Containment {
        self.containment
    }

    /// Checks that the scale range is usable.
    ///
    /// `min_scale` must be finite and positive, `max_scale` positive (infinity
    /// allowed), and `min_scale <= max_scale`.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(Error::InvalidScale(self.min_scale));
        }
        if self.max_scale.is_nan() || self.max_scale <= 0.0 {
            return Err(Error::InvalidScale(self.max_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(Error::InvertedScaleBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn is_unbounded(max_scale: &f64) -> bool {
    *max_scale == f64::INFINITY
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BoundsConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        struct Fields {
            min_scale: f64,
            #[serde(deserialize_with = "unbounded_if_null")]
            max_scale: f64,
            #[serde(rename = "contain")]
            containment: Containment,
        }

        impl Default for Fields {
            fn default() -> Self {
                let BoundsConfig {
                    min_scale,
                    max_scale,
                    containment,
                } = BoundsConfig::default();
                Self {
                    min_scale,
                    max_scale,
                    containment,
                }
            }
        }

        fn unbounded_if_null<'de, D: serde::Deserializer<'de>>(
            deserializer: D,
        ) -> Result<f64, D::Error> {
            let max: Option<f64> = serde::Deserialize::deserialize(deserializer)?;
            Ok(max.unwrap_or(f64::INFINITY))
        }

        let fields = <Fields as serde::Deserialize<'de>>::deserialize(deserializer)?;
        let config = Self::new(fields.min_scale, fields.max_scale, fields.containment);
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }
}

/// Behavior options layered on top of [`BoundsConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomOptions {
    /// Zoom step. A wheel notch scales by `exp(step / 3)`; `zoom_in` and
    /// `zoom_out` scale by `exp(step)`.
    pub step: f64,
    /// Scale used on construction and by `reset`.
    pub start_scale: f64,
    /// Translation used on construction and by `reset`.
    pub start_translate: Vec2,
    /// Ignore pointer drags.
    pub disable_pan: bool,
    /// Ignore wheel input.
    pub disable_zoom: bool,
    /// Only start drags when the scale differs from `start_scale`.
    pub pan_only_when_zoomed: bool,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            step: 0.3,
            start_scale: 1.0,
            start_translate: Vec2::ZERO,
            disable_pan: false,
            disable_zoom: false,
            pan_only_when_zoomed: false,
        }
    }
}

impl PanZoomOptions {
    /// Checks that `step` and `start_scale` are positive finite numbers and
    /// that `start_translate` is finite.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(Error::InvalidStep(self.step));
        }
        if !(self.start_scale.is_finite() && self.start_scale > 0.0) {
            return Err(Error::InvalidScale(self.start_scale));
        }
        if !self.start_translate.is_finite() {
            return Err(Error::NonFiniteTranslation);
        }
        Ok(())
    }

    /// The unclamped state the controller starts from and resets to.
    #[must_use]
    pub fn start_state(&self) -> TransformState {
        TransformState::new(self.start_scale, self.start_translate)
    }
}
