// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::Error;
use crate::bounds::BoundsEnforcer;
use crate::config::{BoundsConfig, PanZoomOptions};
use crate::gesture::{Gesture, GestureController, InputEvent};
use crate::render::RenderApplier;
use crate::state::{Layout, TransformState};

/// What kind of change a [`PanZoomChange`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A drag gesture started.
    Start,
    /// Translation changed without a scale change.
    Pan,
    /// Scale changed (translation may have changed with it).
    Zoom,
    /// The state went back to the start state.
    Reset,
    /// A drag gesture ended.
    End,
}

impl ChangeKind {
    /// DOM event name for this change, following the `panzoom*` convention.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Start => "panzoomstart",
            Self::Pan => "panzoompan",
            Self::Zoom => "panzoomzoom",
            Self::Reset => "panzoomreset",
            Self::End => "panzoomend",
        }
    }
}

/// Notification returned by state-changing operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomChange {
    /// What happened.
    pub kind: ChangeKind,
    /// State after the change.
    pub state: TransformState,
}

/// Pan/zoom controller for one target inside one container.
///
/// Owns the [`TransformState`]; every change goes through the
/// [`BoundsEnforcer`]. Host input enters through [`PanZoom::handle`],
/// programmatic changes through the `pan_*`/`zoom_*` methods. After
/// [`PanZoom::dispose`] the controller ignores everything.
#[derive(Clone, Debug)]
pub struct PanZoom {
    enforcer: BoundsEnforcer,
    options: PanZoomOptions,
    layout: Layout,
    state: TransformState,
    gesture: GestureController,
    /// Translation when the current drag started.
    drag_origin: Vec2,
    revision: u64,
    rendered: Option<u64>,
    disposed: bool,
}

impl PanZoom {
    /// Creates a controller with default [`PanZoomOptions`].
    pub fn new(config: BoundsConfig, layout: Layout) -> Result<Self, Error> {
        Self::with_options(config, PanZoomOptions::default(), layout)
    }

    /// Creates a controller, rejecting invalid config or options.
    ///
    /// The start state from `options` is clamped like any other proposal.
    pub fn with_options(
        config: BoundsConfig,
        options: PanZoomOptions,
        layout: Layout,
    ) -> Result<Self, Error> {
        let enforcer = BoundsEnforcer::new(config)?;
        options.validate()?;
        let state = enforcer.enforce(&layout, options.start_state());
        tracing::debug!(
            min_scale = config.min_scale(),
            max_scale = config.max_scale(),
            containment = config.containment().as_str(),
            scale = state.scale(),
            "pan/zoom controller created"
        );
        Ok(Self {
            enforcer,
            options,
            layout,
            state,
            gesture: GestureController::new(options.step),
            drag_origin: state.translate(),
            revision: 0,
            rendered: None,
            disposed: false,
        })
    }

    /// Bounds configuration.
    #[must_use]
    pub fn config(&self) -> &BoundsConfig {
        self.enforcer.config()
    }

    /// Behavior options.
    #[must_use]
    pub fn options(&self) -> &PanZoomOptions {
        &self.options
    }

    /// Layout used for clamping.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Current clamped state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    /// Current translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.state.translate()
    }

    /// Counter bumped on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a pointer drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns `true` once [`PanZoom::dispose`] has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns `true` when the state changed since the last render pass.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        !self.disposed && self.rendered != Some(self.revision)
    }

    /// Processes one host event.
    ///
    /// Returns the resulting change, or `None` when the event was ignored or
    /// clamping left the state as it was.
    pub fn handle(&mut self, event: InputEvent) -> Option<PanZoomChange> {
        if self.disposed {
            return None;
        }
        match event {
            InputEvent::Wheel { .. } if self.options.disable_zoom => return None,
            InputEvent::PointerDown { .. } if !self.can_pan() => return None,
            _ => {}
        }
        match self.gesture.interpret(event)? {
            Gesture::DragStart => {
                self.drag_origin = self.state.translate();
                tracing::trace!(translate = ?self.drag_origin, "drag started");
                Some(self.notify(ChangeKind::Start))
            }
            Gesture::Pan { total, .. } => {
                if !self.can_pan() {
                    return None;
                }
                let proposed = self.state.with_translate(self.drag_origin + total);
                self.commit(proposed, ChangeKind::Pan)
            }
            Gesture::Zoom { anchor, factor } => self.zoom_at(anchor, factor),
            Gesture::DragEnd => {
                tracing::trace!(translate = ?self.state.translate(), "drag ended");
                Some(self.notify(ChangeKind::End))
            }
        }
    }

    /// Moves the target so its translation becomes `translate`.
    pub fn pan_to(&mut self, translate: Vec2) -> Option<PanZoomChange> {
        let proposed = self.state.with_translate(translate);
        self.commit_external(proposed, ChangeKind::Pan)
    }

    /// Moves the target by `delta` container pixels.
    pub fn pan_by(&mut self, delta: Vec2) -> Option<PanZoomChange> {
        self.pan_to(self.state.translate() + delta)
    }

    /// Multiplies the scale by `factor`, keeping the content point under
    /// `anchor` (container coordinates) in place.
    ///
    /// The anchor may drift when clamping has to move the target.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> Option<PanZoomChange> {
        if self.disposed || !(factor.is_finite() && factor > 0.0) || !anchor.is_finite() {
            return None;
        }
        let content = self.state.view_to_content(&self.layout, anchor);
        let scale = self.enforcer.clamp_scale(self.state.scale() * factor);
        let translate = anchor - self.layout.target.origin() - content.to_vec2() * scale;
        self.commit_external(TransformState::new(scale, translate), ChangeKind::Zoom)
    }

    /// Sets the scale, anchored at the container center.
    pub fn zoom_to(&mut self, scale: f64) -> Option<PanZoomChange> {
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        self.zoom_at(self.layout.container.center(), scale / self.state.scale())
    }

    /// Zooms in one step (`exp(step)`) around the container center.
    pub fn zoom_in(&mut self) -> Option<PanZoomChange> {
        let factor = libm::exp(self.options.step);
        self.zoom_at(self.layout.container.center(), factor)
    }

    /// Zooms out one step (`exp(-step)`) around the container center.
    pub fn zoom_out(&mut self) -> Option<PanZoomChange> {
        let factor = libm::exp(-self.options.step);
        self.zoom_at(self.layout.container.center(), factor)
    }

    /// Returns to the start state from the options.
    pub fn reset(&mut self) -> Option<PanZoomChange> {
        tracing::debug!("pan/zoom reset");
        self.commit_external(self.options.start_state(), ChangeKind::Reset)
    }

    /// Proposes a whole new state.
    pub fn set_transform(&mut self, proposed: TransformState) -> Option<PanZoomChange> {
        let kind = if proposed.scale() == self.state.scale() {
            ChangeKind::Pan
        } else {
            ChangeKind::Zoom
        };
        self.commit_external(proposed, kind)
    }

    /// Replaces the layout (after a resize or reflow) and re-clamps.
    pub fn set_layout(&mut self, layout: Layout) -> Option<PanZoomChange> {
        if self.disposed || self.layout == layout {
            return None;
        }
        tracing::debug!(
            container = ?layout.container,
            target = ?layout.target,
            "pan/zoom layout changed"
        );
        self.layout = layout;
        self.commit_external(self.state, ChangeKind::Pan)
    }

    /// Applies the state if it changed since the last pass.
    ///
    /// Returns `true` when the applier was called. Several changes between
    /// passes collapse into one application of the final state.
    pub fn render(&mut self, applier: &mut impl RenderApplier) -> bool {
        if !self.needs_render() {
            return false;
        }
        self.force_render(applier);
        true
    }

    /// Applies the state unconditionally (unless disposed).
    pub fn force_render(&mut self, applier: &mut impl RenderApplier) {
        if self.disposed {
            return;
        }
        applier.apply(&self.state);
        self.rendered = Some(self.revision);
    }

    /// Stops processing input. Calling it again has no effect.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.gesture.cancel();
        tracing::debug!(revision = self.revision, "pan/zoom controller disposed");
    }

    fn can_pan(&self) -> bool {
        if self.options.disable_pan {
            return false;
        }
        !(self.options.pan_only_when_zoomed
            && (self.state.scale() - self.options.start_scale).abs() < f64::EPSILON)
    }

    fn notify(&self, kind: ChangeKind) -> PanZoomChange {
        PanZoomChange {
            kind,
            state: self.state,
        }
    }

    /// Commits a change that did not come from the drag itself; an ongoing
    /// drag continues from the new position.
    fn commit_external(
        &mut self,
        proposed: TransformState,
        kind: ChangeKind,
    ) -> Option<PanZoomChange> {
        let change = self.commit(proposed, kind)?;
        if self.gesture.is_dragging() {
            self.gesture.rebase();
            self.drag_origin = self.state.translate();
        }
        Some(change)
    }

    fn commit(&mut self, proposed: TransformState, kind: ChangeKind) -> Option<PanZoomChange> {
        if self.disposed || !proposed.is_usable() {
            return None;
        }
        let next = self.enforcer.enforce(&self.layout, proposed);
        if next == self.state {
            return None;
        }
        let clamped = next != proposed;
        tracing::trace!(
            scale = next.scale(),
            x = next.x(),
            y = next.y(),
            clamped,
            "pan/zoom state changed"
        );
        self.state = next;
        self.revision += 1;
        Some(self.notify(kind))
    }
}
