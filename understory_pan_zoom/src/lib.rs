// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan/Zoom: a headless pan-and-zoom interaction engine.
//!
//! This crate models one target element shown inside one container and the
//! uniform scale + translation applied to it. It focuses on:
//! - Transform state ([`TransformState`]) and the container/target
//!   geometry it is measured against ([`Layout`]).
//! - Recognizing drags and wheel zoom from raw input ([`gesture`]).
//! - Clamping scale and translation ([`BoundsEnforcer`]) under a
//!   [`Containment`] policy.
//! - Pushing the result to the host ([`RenderApplier`], [`css_transform`]).
//!
//! It does **not** own any DOM or rendering backend. Callers are expected to:
//! - Measure the container and the untransformed target and pass a [`Layout`].
//! - Translate host events into [`gesture::InputEvent`]s in container-local
//!   coordinates and feed them to [`PanZoom::handle`].
//! - Call [`PanZoom::render`] with an applier once per frame (or per event).
//!
//! `understory_pan_zoom_web` does all of this for DOM elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_pan_zoom::gesture::InputEvent;
//! use understory_pan_zoom::{BoundsConfig, Layout, PanZoom, TransformState};
//!
//! // A 400x300 target filling its 400x300 container.
//! let layout = Layout::filled(Rect::new(0.0, 0.0, 400.0, 300.0));
//! let mut pz = PanZoom::new(BoundsConfig::default(), layout).unwrap();
//!
//! // Scroll up over the center: zoom in around it.
//! let center = Point::new(200.0, 150.0);
//! pz.handle(InputEvent::Wheel { position: center, delta: Vec2::new(0.0, -100.0) });
//! assert!(pz.scale() > 1.0);
//!
//! // The content point under the cursor did not move.
//! let content = pz.state().view_to_content(&pz.layout(), center);
//! assert!((content.x - 200.0).abs() < 1e-9);
//!
//! // Apply it somewhere.
//! let mut last = None;
//! pz.render(&mut |s: &TransformState| last = Some(*s));
//! assert_eq!(last, Some(pz.state()));
//! ```
//!
//! ## Containment
//!
//! - [`Containment::Outside`] (default) keeps the target covering the
//!   container, which suits images or maps that should never show a gap.
//! - [`Containment::Inside`] centers a target that fits and keeps the edges
//!   of a target that does not fit from crossing inward.
//! - [`Containment::None`] only clamps the scale.
//!
//! ## Features
//!
//! - `std` (default): forward to Kurbo's `std`.
//! - `libm`: use Kurbo's `libm` backend in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`BoundsConfig`] and
//!   [`Containment`], using the `minScale`/`maxScale`/`contain` keys.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod bounds;
mod config;
mod controller;
mod error;
pub mod gesture;
mod render;
mod state;

pub use bounds::BoundsEnforcer;
pub use config::{BoundsConfig, Containment, PanZoomOptions};
pub use controller::{ChangeKind, PanZoom, PanZoomChange};
pub use error::Error;
pub use render::{RenderApplier, css_transform};
pub use state::{Layout, TransformState};
