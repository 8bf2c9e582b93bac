// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognition: turn raw wheel and pointer input into pan/zoom gestures.
//!
//! ## Usage
//!
//! 1) Feed each host event into [`GestureController::interpret`].
//! 2) A pointer-down starts a drag and yields [`Gesture::DragStart`].
//! 3) Each pointer-move of the dragging pointer yields [`Gesture::Pan`] with
//!    the movement since the last move and the total offset since the drag
//!    started.
//! 4) Pointer-up or pointer-cancel ends the drag with [`Gesture::DragEnd`].
//! 5) Wheel events yield [`Gesture::Zoom`] anchored at the pointer.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_pan_zoom::gesture::{Gesture, GestureController, InputEvent};
//!
//! let mut gestures = GestureController::new(0.3);
//!
//! let down = InputEvent::PointerDown { id: 1, position: Point::new(10.0, 10.0) };
//! assert_eq!(gestures.interpret(down), Some(Gesture::DragStart));
//!
//! let moved = InputEvent::PointerMove { id: 1, position: Point::new(15.0, 12.0) };
//! assert_eq!(
//!     gestures.interpret(moved),
//!     Some(Gesture::Pan { delta: Vec2::new(5.0, 2.0), total: Vec2::new(5.0, 2.0) })
//! );
//! ```

use kurbo::{Point, Vec2};

/// Identifier the host assigns to a pointer (for example `PointerEvent.pointerId`).
pub type PointerId = i32;

/// Raw input as delivered by the host, in container-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel or trackpad scroll.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Scroll delta; only its sign matters.
        delta: Vec2,
    },
    /// A pointer was pressed.
    PointerDown {
        /// Pointer identifier.
        id: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer moved.
    PointerMove {
        /// Pointer identifier.
        id: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer was released.
    PointerUp {
        /// Pointer identifier.
        id: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// The host cancelled a pointer.
    PointerCancel {
        /// Pointer identifier.
        id: PointerId,
    },
}

/// A recognized gesture, before any clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A drag started.
    DragStart,
    /// The dragging pointer moved.
    Pan {
        /// Movement since the previous move.
        delta: Vec2,
        /// Movement since the drag started (or was last rebased).
        total: Vec2,
    },
    /// Zoom by `factor` keeping `anchor` fixed.
    Zoom {
        /// Container-space point that stays under the pointer.
        anchor: Point,
        /// Multiplicative scale step.
        factor: f64,
    },
    /// The drag ended.
    DragEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        pointer: PointerId,
        start: Point,
        last: Point,
    },
}

/// Two-phase drag tracker plus stateless wheel zoom.
///
/// `Idle → Dragging` on pointer-down, `Dragging → Idle` on pointer-up or
/// pointer-cancel of the same pointer. Only one pointer drags at a time;
/// other pointers are ignored until it is released.
#[derive(Clone, Copy, Debug)]
pub struct GestureController {
    step: f64,
    phase: Phase,
}

impl GestureController {
    /// Creates an idle controller with the given zoom step.
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self {
            step,
            phase: Phase::Idle,
        }
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Pointer currently dragging, if any.
    #[must_use]
    pub fn dragging_pointer(&self) -> Option<PointerId> {
        match self.phase {
            Phase::Dragging { pointer, .. } => Some(pointer),
            Phase::Idle => None,
        }
    }

    /// Offset of `current` from the drag start, if dragging.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        match self.phase {
            Phase::Dragging { start, .. } => Some(current - start),
            Phase::Idle => None,
        }
    }

    /// Multiplicative zoom step for a wheel delta.
    ///
    /// The vertical delta is used unless it is zero, in which case the
    /// horizontal one is. Negative deltas (scrolling up) zoom in. Zero or
    /// NaN deltas return `1.0`.
    #[must_use]
    pub fn zoom_factor(&self, delta: Vec2) -> f64 {
        let d = if delta.y == 0.0 && delta.x != 0.0 {
            delta.x
        } else {
            delta.y
        };
        if d < 0.0 {
            libm::exp(self.step / 3.0)
        } else if d > 0.0 {
            libm::exp(-self.step / 3.0)
        } else {
            1.0
        }
    }

    /// Interprets one host event.
    pub fn interpret(&mut self, event: InputEvent) -> Option<Gesture> {
        match event {
            InputEvent::Wheel { position, delta } => {
                let factor = self.zoom_factor(delta);
                (factor != 1.0).then_some(Gesture::Zoom {
                    anchor: position,
                    factor,
                })
            }
            InputEvent::PointerDown { id, position } => match self.phase {
                Phase::Dragging { pointer, .. } if pointer != id => None,
                _ => {
                    self.phase = Phase::Dragging {
                        pointer: id,
                        start: position,
                        last: position,
                    };
                    Some(Gesture::DragStart)
                }
            },
            InputEvent::PointerMove { id, position } => match self.phase {
                Phase::Dragging {
                    pointer,
                    start,
                    last,
                } if pointer == id => {
                    self.phase = Phase::Dragging {
                        pointer,
                        start,
                        last: position,
                    };
                    Some(Gesture::Pan {
                        delta: position - last,
                        total: position - start,
                    })
                }
                _ => None,
            },
            InputEvent::PointerUp { id, .. } | InputEvent::PointerCancel { id } => {
                if self.dragging_pointer() == Some(id) {
                    self.phase = Phase::Idle;
                    Some(Gesture::DragEnd)
                } else {
                    None
                }
            }
        }
    }

    /// Restarts the total offset from the last seen drag position.
    ///
    /// Used when something other than the drag (a wheel zoom, a reset) moved
    /// the target mid-drag.
    pub fn rebase(&mut self) {
        if let Phase::Dragging { pointer, last, .. } = self.phase {
            self.phase = Phase::Dragging {
                pointer,
                start: last,
                last,
            };
        }
    }

    /// Drops any active drag without emitting a gesture.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Gesture, GestureController, InputEvent};

    fn down(id: i32, x: f64, y: f64) -> InputEvent {
        InputEvent::PointerDown {
            id,
            position: Point::new(x, y),
        }
    }

    fn mv(id: i32, x: f64, y: f64) -> InputEvent {
        InputEvent::PointerMove {
            id,
            position: Point::new(x, y),
        }
    }

    fn up(id: i32, x: f64, y: f64) -> InputEvent {
        InputEvent::PointerUp {
            id,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn new_controller_is_idle() {
        let g = GestureController::new(0.3);
        assert!(!g.is_dragging());
        assert_eq!(g.dragging_pointer(), None);
        assert_eq!(g.total_offset(Point::ORIGIN), None);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut g = GestureController::new(0.3);
        assert_eq!(g.interpret(mv(1, 5.0, 5.0)), None);
    }

    #[test]
    fn drag_tracks_incremental_and_total_offsets() {
        let mut g = GestureController::new(0.3);
        assert_eq!(g.interpret(down(1, 0.0, 0.0)), Some(Gesture::DragStart));

        assert_eq!(
            g.interpret(mv(1, 5.0, 3.0)),
            Some(Gesture::Pan {
                delta: Vec2::new(5.0, 3.0),
                total: Vec2::new(5.0, 3.0),
            })
        );
        assert_eq!(
            g.interpret(mv(1, 8.0, 7.0)),
            Some(Gesture::Pan {
                delta: Vec2::new(3.0, 4.0),
                total: Vec2::new(8.0, 7.0),
            })
        );
        assert_eq!(g.total_offset(Point::new(10.0, 10.0)), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn up_ends_drag() {
        let mut g = GestureController::new(0.3);
        g.interpret(down(3, 1.0, 1.0));
        assert_eq!(g.interpret(up(3, 2.0, 2.0)), Some(Gesture::DragEnd));
        assert!(!g.is_dragging());
        assert_eq!(g.interpret(mv(3, 4.0, 4.0)), None);
    }

    #[test]
    fn cancel_event_ends_drag() {
        let mut g = GestureController::new(0.3);
        g.interpret(down(3, 1.0, 1.0));
        assert_eq!(
            g.interpret(InputEvent::PointerCancel { id: 3 }),
            Some(Gesture::DragEnd)
        );
        assert!(!g.is_dragging());
    }

    #[test]
    fn second_pointer_is_ignored_while_dragging() {
        let mut g = GestureController::new(0.3);
        g.interpret(down(1, 0.0, 0.0));
        assert_eq!(g.interpret(down(2, 50.0, 50.0)), None);
        assert_eq!(g.interpret(mv(2, 60.0, 60.0)), None);
        assert_eq!(g.interpret(up(2, 60.0, 60.0)), None);
        assert_eq!(g.dragging_pointer(), Some(1));
    }

    #[test]
    fn repeated_down_of_same_pointer_restarts() {
        let mut g = GestureController::new(0.3);
        g.interpret(down(1, 0.0, 0.0));
        g.interpret(mv(1, 10.0, 10.0));
        assert_eq!(g.interpret(down(1, 50.0, 60.0)), Some(Gesture::DragStart));
        assert_eq!(g.total_offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn rebase_restarts_total_from_last_position() {
        let mut g = GestureController::new(0.3);
        g.interpret(down(1, 0.0, 0.0));
        g.interpret(mv(1, 10.0, 0.0));
        g.rebase();
        assert_eq!(
            g.interpret(mv(1, 12.0, 1.0)),
            Some(Gesture::Pan {
                delta: Vec2::new(2.0, 1.0),
                total: Vec2::new(2.0, 1.0),
            })
        );
    }

    #[test]
    fn wheel_sign_selects_direction() {
        let mut g = GestureController::new(0.3);
        let at = Point::new(100.0, 100.0);
        let Some(Gesture::Zoom { anchor, factor }) = g.interpret(InputEvent::Wheel {
            position: at,
            delta: Vec2::new(0.0, -120.0),
        }) else {
            panic!("wheel up should zoom");
        };
        assert_eq!(anchor, at);
        assert!(factor > 1.0);

        let out = g.zoom_factor(Vec2::new(0.0, 3.0));
        assert!(out < 1.0);
        assert!((out * factor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wheel_magnitude_does_not_matter() {
        let g = GestureController::new(0.3);
        assert_eq!(
            g.zoom_factor(Vec2::new(0.0, -1.0)),
            g.zoom_factor(Vec2::new(0.0, -500.0))
        );
    }

    #[test]
    fn horizontal_wheel_used_when_vertical_is_zero() {
        let g = GestureController::new(0.3);
        assert!(g.zoom_factor(Vec2::new(-4.0, 0.0)) > 1.0);
        assert!(g.zoom_factor(Vec2::new(4.0, 0.0)) < 1.0);
    }

    #[test]
    fn zero_or_nan_wheel_is_ignored() {
        let mut g = GestureController::new(0.3);
        assert_eq!(
            g.interpret(InputEvent::Wheel {
                position: Point::ORIGIN,
                delta: Vec2::ZERO,
            }),
            None
        );
        assert_eq!(g.zoom_factor(Vec2::new(0.0, f64::NAN)), 1.0);
    }

    #[test]
    fn wheel_does_not_disturb_drag() {
        let mut g = GestureController::new(0.3);
        g.interpret(down(1, 0.0, 0.0));
        g.interpret(InputEvent::Wheel {
            position: Point::ORIGIN,
            delta: Vec2::new(0.0, -1.0),
        });
        assert!(g.is_dragging());
    }
}
