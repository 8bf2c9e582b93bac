// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom_web --heading-base-level=0

//! DOM glue for [`understory_pan_zoom`].
//!
//! When targeting `wasm32`, this crate attaches a [`PanZoom`] controller to
//! an element inside a container:
//! - `wheel` on the container zooms toward the cursor.
//! - Primary-button `pointerdown` on the target starts a drag, followed on
//!   the document until the pointer is released.
//! - Window resizes re-measure and re-clamp.
//! - The state is written as an inline CSS `transform` with
//!   `transform-origin: 0 0`.
//! - Every change dispatches a bubbling `CustomEvent` on the target
//!   (`panzoomstart`, `panzoompan`, `panzoomzoom`, `panzoomreset`,
//!   `panzoomend`, plus `panzoomchange` for pan, zoom and reset) whose
//!   `detail` is `{ scale, x, y }`.
//!
//! Rust callers use `attach`/`attach_with_options` and keep the returned
//! `ControllerHandle`; dropping it removes every listener. JavaScript callers
//! use the exported `panzoom(node, options)` function, which attaches to the
//! node's parent element.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn enable(
//!     target: &web_sys::HtmlElement,
//!     container: &web_sys::Element,
//! ) -> Result<understory_pan_zoom_web::ControllerHandle, understory_pan_zoom::Error> {
//!     use understory_pan_zoom::{BoundsConfig, Containment};
//!
//!     let config = BoundsConfig::default()
//!         .with_max_scale(8.0)
//!         .with_containment(Containment::Inside);
//!     understory_pan_zoom_web::attach(target, container, config)
//! }
//! ```
//!
//! Measurement ([`ContainerFrame`]) and option parsing ([`read_options`])
//! are target independent.

mod frame;
mod options;

#[cfg(target_arch = "wasm32")]
mod applier;
#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod handle;

pub use frame::ContainerFrame;
pub use options::{OptionSource, read_options};
pub use understory_pan_zoom::{
    BoundsConfig, ChangeKind, Containment, Error, PanZoom, PanZoomChange, PanZoomOptions,
    TransformState,
};

#[cfg(target_arch = "wasm32")]
pub use applier::ElementApplier;
#[cfg(target_arch = "wasm32")]
pub use bindings::{PanZoomHandle, panzoom_action};
#[cfg(target_arch = "wasm32")]
pub use handle::{ControllerHandle, attach, attach_with_options};
