// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript entry points.

use js_sys::{Object, Reflect};
use kurbo::Vec2;
use understory_pan_zoom::{BoundsConfig, Error, PanZoomOptions};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::handle::{ControllerHandle, attach_with_options};
use crate::options::{OptionSource, read_options};

/// Handle returned to JavaScript by [`panzoom_action`].
#[wasm_bindgen]
#[derive(Debug)]
pub struct PanZoomHandle {
    handle: ControllerHandle,
}

#[wasm_bindgen]
impl PanZoomHandle {
    /// Zooms in one step around the container center.
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.handle.zoom_in();
    }

    /// Zooms out one step around the container center.
    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.handle.zoom_out();
    }

    /// Sets the scale, anchored at the container center.
    pub fn zoom(&self, scale: f64) {
        self.handle.zoom_to(scale);
    }

    /// Sets the translation in container pixels.
    pub fn pan(&self, x: f64, y: f64) {
        self.handle.pan_to(Vec2::new(x, y));
    }

    /// Returns to the start state.
    pub fn reset(&self) {
        self.handle.reset();
    }

    /// Re-measures after a layout change.
    pub fn refresh(&self) {
        self.handle.refresh_layout();
    }

    /// Current scale.
    #[wasm_bindgen(js_name = getScale)]
    pub fn get_scale(&self) -> f64 {
        self.handle.state().scale()
    }

    /// Current translation as `{ x, y }`.
    #[wasm_bindgen(js_name = getPan)]
    pub fn get_pan(&self) -> Result<Object, JsValue> {
        let state = self.handle.state();
        let pan = Object::new();
        Reflect::set(&pan, &"x".into(), &state.x().into())?;
        Reflect::set(&pan, &"y".into(), &state.y().into())?;
        Ok(pan)
    }

    /// Detaches every listener. Further calls do nothing.
    pub fn destroy(&mut self) {
        self.handle.dispose();
    }
}

/// `panzoom(node, options?)`: makes `node` pannable and zoomable inside its
/// parent element.
///
/// Option names: `minScale`, `maxScale`, `contain`, `step`, `startScale`,
/// `startX`, `startY`, `disablePan`, `disableZoom`, `panOnlyWhenZoomed`.
/// Invalid options throw an `Error`.
#[wasm_bindgen(js_name = panzoom)]
pub fn panzoom_action(node: HtmlElement, options: Option<Object>) -> Result<PanZoomHandle, JsValue> {
    let (config, options) = match &options {
        Some(object) => read_options(&JsOptions(object)).map_err(to_js)?,
        None => (BoundsConfig::default(), PanZoomOptions::default()),
    };
    let container = node
        .parent_element()
        .ok_or(Error::NoParentElement)
        .map_err(to_js)?;
    let handle = attach_with_options(&node, &container, config, options).map_err(to_js)?;
    Ok(PanZoomHandle { handle })
}

fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

struct JsOptions<'a>(&'a Object);

impl JsOptions<'_> {
    fn get(&self, key: &str) -> Option<JsValue> {
        Reflect::get(self.0, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }
}

impl OptionSource for JsOptions<'_> {
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    fn string(&self, key: &str) -> Option<String> {
        self.get(key)?.as_string()
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }
}
