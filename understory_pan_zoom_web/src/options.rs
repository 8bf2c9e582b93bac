// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use understory_pan_zoom::{BoundsConfig, Error, PanZoomOptions};

/// A loosely typed key/value bag, such as a JavaScript options object.
///
/// Missing keys and values of the wrong type read as `None` and fall back
/// to the defaults.
pub trait OptionSource {
    /// Reads a numeric option.
    fn number(&self, key: &str) -> Option<f64>;
    /// Reads a string option.
    fn string(&self, key: &str) -> Option<String>;
    /// Reads a boolean option.
    fn boolean(&self, key: &str) -> Option<bool>;
}

/// Reads bounds and behavior options using the `panzoom` option names.
///
/// | key | target |
/// |---|---|
/// | `minScale`, `maxScale` | [`BoundsConfig`] scale range |
/// | `contain` | `"inside"`, `"outside"` or `"none"` |
/// | `step` | [`PanZoomOptions::step`] |
/// | `startScale`, `startX`, `startY` | start state |
/// | `disablePan`, `disableZoom`, `panOnlyWhenZoomed` | input gating |
pub fn read_options(source: &impl OptionSource) -> Result<(BoundsConfig, PanZoomOptions), Error> {
    let mut config = BoundsConfig::default();
    if let Some(min) = source.number("minScale") {
        config = config.with_min_scale(min);
    }
    if let Some(max) = source.number("maxScale") {
        config = config.with_max_scale(max);
    }
    if let Some(contain) = source.string("contain") {
        config = config.with_containment(contain.parse()?);
    }
    config.validate()?;

    let defaults = PanZoomOptions::default();
    let options = PanZoomOptions {
        step: source.number("step").unwrap_or(defaults.step),
        start_scale: source.number("startScale").unwrap_or(defaults.start_scale),
        start_translate: Vec2::new(
            source.number("startX").unwrap_or(defaults.start_translate.x),
            source.number("startY").unwrap_or(defaults.start_translate.y),
        ),
        disable_pan: source.boolean("disablePan").unwrap_or(defaults.disable_pan),
        disable_zoom: source.boolean("disableZoom").unwrap_or(defaults.disable_zoom),
        pan_only_when_zoomed: source
            .boolean("panOnlyWhenZoomed")
            .unwrap_or(defaults.pan_only_when_zoomed),
    };
    options.validate()?;
    Ok((config, options))
}
