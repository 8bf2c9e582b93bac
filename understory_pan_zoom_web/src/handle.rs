// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::{Object, Reflect};
use kurbo::{Point, Rect, Size, Vec2};
use understory_pan_zoom::gesture::{InputEvent, PointerId};
use understory_pan_zoom::{
    BoundsConfig, ChangeKind, Error, Layout, PanZoom, PanZoomChange, PanZoomOptions,
    TransformState,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, Element, EventTarget, HtmlElement, MouseEvent, Node,
    PointerEvent, WheelEvent,
};

use crate::applier::ElementApplier;
use crate::frame::ContainerFrame;

/// Attaches pan/zoom behavior to `target` inside `container` with default
/// options.
pub fn attach(
    target: &HtmlElement,
    container: &Element,
    config: BoundsConfig,
) -> Result<ControllerHandle, Error> {
    attach_with_options(target, container, config, PanZoomOptions::default())
}

/// Attaches pan/zoom behavior to `target` inside `container`.
///
/// `container` must be `target` or one of its ancestors. Wheel events are taken
/// from the container, drags start on the target and are followed on the
/// document. The transform is written to the target's inline style and
/// every change is announced with a bubbling `CustomEvent` on the target.
///
/// Listeners live as long as the returned handle.
pub fn attach_with_options(
    target: &HtmlElement,
    container: &Element,
    config: BoundsConfig,
    options: PanZoomOptions,
) -> Result<ControllerHandle, Error> {
    let target_node: &Node = target;
    let container_node: &Node = container;
    // `contains` is inclusive: the target may be its own container.
    if !container_node.contains(Some(target_node)) {
        return Err(Error::ContainerNotAncestor);
    }
    config.validate()?;
    options.validate()?;

    let mut applier = ElementApplier::new(target.clone());
    let layout = measure_frame(container).layout(client_rect(target), &TransformState::IDENTITY);
    let mut controller = PanZoom::with_options(config, options, layout)?;
    controller.force_render(&mut applier);
    tracing::debug!(
        container = ?layout.container,
        target = ?layout.target,
        "pan/zoom attached"
    );

    let shared = Shared {
        inner: Rc::new(RefCell::new(Inner {
            controller,
            applier,
            container: container.clone(),
        })),
        target: target.clone(),
    };
    let listeners = install_listeners(&shared, container);
    Ok(ControllerHandle { shared, listeners })
}

/// Owner of an attached pan/zoom behavior.
///
/// Dropping the handle detaches it, like [`ControllerHandle::dispose`].
pub struct ControllerHandle {
    shared: Shared,
    listeners: Vec<EventListener>,
}

impl core::fmt::Debug for ControllerHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerHandle")
            .field("state", &self.state())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ControllerHandle {
    /// The transformed element.
    pub fn target(&self) -> &HtmlElement {
        &self.shared.target
    }

    /// Current state.
    pub fn state(&self) -> TransformState {
        self.shared.inner.borrow().controller.state()
    }

    /// Returns `true` once the handle has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.shared.inner.borrow().controller.is_disposed()
    }

    /// See [`PanZoom::pan_to`].
    pub fn pan_to(&self, translate: Vec2) -> Option<PanZoomChange> {
        self.shared.run(|pz| pz.pan_to(translate))
    }

    /// See [`PanZoom::pan_by`].
    pub fn pan_by(&self, delta: Vec2) -> Option<PanZoomChange> {
        self.shared.run(|pz| pz.pan_by(delta))
    }

    /// See [`PanZoom::zoom_at`]; `anchor` is in container coordinates.
    pub fn zoom_at(&self, anchor: Point, factor: f64) -> Option<PanZoomChange> {
        self.shared.run(|pz| pz.zoom_at(anchor, factor))
    }

    /// See [`PanZoom::zoom_to`].
    pub fn zoom_to(&self, scale: f64) -> Option<PanZoomChange> {
        self.shared.run(|pz| pz.zoom_to(scale))
    }

    /// See [`PanZoom::zoom_in`].
    pub fn zoom_in(&self) -> Option<PanZoomChange> {
        self.shared.run(PanZoom::zoom_in)
    }

    /// See [`PanZoom::zoom_out`].
    pub fn zoom_out(&self) -> Option<PanZoomChange> {
        self.shared.run(PanZoom::zoom_out)
    }

    /// See [`PanZoom::reset`].
    pub fn reset(&self) -> Option<PanZoomChange> {
        self.shared.run(PanZoom::reset)
    }

    /// See [`PanZoom::set_transform`].
    pub fn set_transform(&self, state: TransformState) -> Option<PanZoomChange> {
        self.shared.run(|pz| pz.set_transform(state))
    }

    /// Re-measures container and target, then re-clamps.
    ///
    /// Window resizes trigger this automatically; call it after other
    /// layout changes.
    pub fn refresh_layout(&self) -> Option<PanZoomChange> {
        self.shared.refresh_layout()
    }

    /// Removes every listener and stops the controller. Later calls do
    /// nothing.
    pub fn dispose(&mut self) {
        if self.listeners.is_empty() && self.is_disposed() {
            return;
        }
        self.listeners.clear();
        self.shared.inner.borrow_mut().controller.dispose();
    }
}

impl Drop for ControllerHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

struct Inner {
    controller: PanZoom,
    applier: ElementApplier,
    container: Element,
}

impl Inner {
    fn local(&self, event: &MouseEvent) -> Point {
        let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        measure_frame(&self.container).to_local(client)
    }

    fn measure_layout(&self) -> Layout {
        measure_frame(&self.container)
            .layout(client_rect(self.applier.element()), &self.controller.state())
    }
}

#[derive(Clone)]
struct Shared {
    inner: Rc<RefCell<Inner>>,
    target: HtmlElement,
}

impl Shared {
    /// Runs `op` on the controller and renders. The borrow ends before the
    /// change is dispatched, so event handlers may call back in.
    fn run(&self, op: impl FnOnce(&mut PanZoom) -> Option<PanZoomChange>) -> Option<PanZoomChange> {
        self.run_inner(|inner| op(&mut inner.controller))
    }

    fn run_inner(&self, op: impl FnOnce(&mut Inner) -> Option<PanZoomChange>) -> Option<PanZoomChange> {
        let change = {
            let mut inner = self.inner.borrow_mut();
            let change = op(&mut *inner);
            let Inner {
                controller,
                applier,
                ..
            } = &mut *inner;
            controller.render(applier);
            change
        };
        if let Some(change) = change {
            dispatch(&self.target, change);
        }
        change
    }

    fn refresh_layout(&self) -> Option<PanZoomChange> {
        self.run_inner(|inner| {
            let layout = inner.measure_layout();
            inner.controller.set_layout(layout)
        })
    }

    fn is_dragging(&self) -> bool {
        self.inner.borrow().controller.is_dragging()
    }
}

fn active() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

fn install_listeners(shared: &Shared, container: &Element) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let s = shared.clone();
    listeners.push(EventListener::new_with_options(
        container,
        "wheel",
        active(),
        move |event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            s.run_inner(|inner| {
                let pz = &inner.controller;
                if pz.is_disposed() || pz.options().disable_zoom {
                    return None;
                }
                event.prevent_default();
                let position = inner.local(event);
                let delta = Vec2::new(event.delta_x(), event.delta_y());
                inner
                    .controller
                    .handle(InputEvent::Wheel { position, delta })
            });
        },
    ));

    let s = shared.clone();
    listeners.push(EventListener::new_with_options(
        &shared.target,
        "pointerdown",
        active(),
        move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            if event.button() != 0 {
                return;
            }
            let id = event.pointer_id();
            let started = s.run_inner(|inner| {
                let position = inner.local(event);
                inner
                    .controller
                    .handle(InputEvent::PointerDown { id, position })
            });
            if started.is_some() {
                event.prevent_default();
            }
        },
    ));

    // Moves are followed on the document so the drag survives leaving the
    // target.
    let document: EventTarget = shared
        .target
        .owner_document()
        .map_or_else(|| shared.target.clone().into(), Into::into);
    let pointer_events: [(&'static str, fn(PointerId, Point) -> InputEvent); 3] = [
        ("pointermove", |id, position| InputEvent::PointerMove { id, position }),
        ("pointerup", |id, position| InputEvent::PointerUp { id, position }),
        ("pointercancel", |id, _| InputEvent::PointerCancel { id }),
    ];
    for (name, make) in pointer_events {
        let s = shared.clone();
        listeners.push(EventListener::new(&document, name, move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            if !s.is_dragging() {
                return;
            }
            let id = event.pointer_id();
            s.run_inner(|inner| {
                let position = inner.local(event);
                inner.controller.handle(make(id, position))
            });
        }));
    }

    if let Some(window) = web_sys::window() {
        let s = shared.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            s.refresh_layout();
        }));
    }

    listeners
}

fn dispatch(target: &EventTarget, change: PanZoomChange) {
    let detail = Object::new();
    let state = change.state;
    for (key, value) in [("scale", state.scale()), ("x", state.x()), ("y", state.y())] {
        if let Err(err) = Reflect::set(&detail, &JsValue::from_str(key), &JsValue::from_f64(value)) {
            tracing::warn!(key, ?err, "failed to build event detail");
        }
    }
    fire(target, change.kind.event_name(), &detail);
    if matches!(
        change.kind,
        ChangeKind::Pan | ChangeKind::Zoom | ChangeKind::Reset
    ) {
        fire(target, "panzoomchange", &detail);
    }
}

fn fire(target: &EventTarget, name: &str, detail: &JsValue) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(detail);
    let event = match CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(event = name, ?err, "failed to create event");
            return;
        }
    };
    if let Err(err) = target.dispatch_event(&event) {
        tracing::warn!(event = name, ?err, "event dispatch failed");
    }
}

fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::from_origin_size((r.x(), r.y()), (r.width(), r.height()))
}

fn measure_frame(container: &Element) -> ContainerFrame {
    ContainerFrame::new(
        client_rect(container),
        Vec2::new(
            f64::from(container.client_left()),
            f64::from(container.client_top()),
        ),
        Size::new(
            f64::from(container.client_width()),
            f64::from(container.client_height()),
        ),
    )
}
