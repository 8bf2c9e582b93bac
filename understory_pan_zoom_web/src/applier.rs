// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_pan_zoom::{RenderApplier, TransformState, css_transform};
use web_sys::HtmlElement;

/// Writes the transform into an element's inline `transform` style.
#[derive(Debug)]
pub struct ElementApplier {
    element: HtmlElement,
    last: Option<String>,
}

impl ElementApplier {
    /// Prepares `element` for transformed display.
    ///
    /// Clears any existing transform, sets `transform-origin: 0 0` and turns
    /// off native touch panning and text selection so drags reach the
    /// controller.
    pub fn new(element: HtmlElement) -> Self {
        let style = element.style();
        for (name, value) in [
            ("transform", "none"),
            ("transform-origin", "0 0"),
            ("touch-action", "none"),
            ("user-select", "none"),
        ] {
            if let Err(err) = style.set_property(name, value) {
                tracing::warn!(property = name, ?err, "failed to set style property");
            }
        }
        Self {
            element,
            last: None,
        }
    }

    /// The element being transformed.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl RenderApplier for ElementApplier {
    fn apply(&mut self, state: &TransformState) {
        let css = css_transform(state);
        if self.last.as_deref() == Some(css.as_str()) {
            return;
        }
        match self.element.style().set_property("transform", &css) {
            Ok(()) => self.last = Some(css),
            Err(err) => tracing::warn!(?err, "failed to apply transform"),
        }
    }
}
