//! Click/move disambiguation for slot bodies.
//!
//! A press inside a slot is a potential drag: only once the pointer has
//! travelled a minimum distance does it become a move, otherwise the
//! release counts as a click. The grab offset keeps the slot from
//! snapping its origin to the pointer.

use slotmark_ui::{Point, Rectangle};

/// Move interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MoveState {
    #[default]
    Idle,
    /// Pressed inside the body, not yet moved far enough to count
    Pressed { start: Point, grab: Point },
    /// Dragging the whole slot by the grabbed offset
    Moving { grab: Point },
}

/// What a release concluded the gesture was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Released without crossing the drag threshold
    Click,
    /// Released after dragging
    Moved,
}

/// Drives [`MoveState`] from press/motion/release inputs.
#[derive(Debug, Clone, Default)]
pub struct MoveController {
    state: MoveState,
}

impl MoveController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a potential drag if the point is inside the rect.
    /// Returns true when the press was consumed.
    pub fn press(&mut self, rect: Rectangle, point: Point) -> bool {
        if rect.contains(point) {
            self.state = MoveState::Pressed {
                start: point,
                grab: Point::new(point.x - rect.x, point.y - rect.y),
            };
            true
        } else {
            false
        }
    }

    /// New origin for the slot, or None while the gesture is still a
    /// potential click (or no gesture is active).
    pub fn motion(&mut self, point: Point, threshold: f32) -> Option<Point> {
        match self.state {
            MoveState::Pressed { start, grab } => {
                let dx = point.x - start.x;
                let dy = point.y - start.y;
                if (dx * dx + dy * dy).sqrt() >= threshold {
                    self.state = MoveState::Moving { grab };
                    Some(Point::new(point.x - grab.x, point.y - grab.y))
                } else {
                    None
                }
            }
            MoveState::Moving { grab } => Some(Point::new(point.x - grab.x, point.y - grab.y)),
            MoveState::Idle => None,
        }
    }

    /// Finish the gesture. Returns what it turned out to be, or None
    /// when no gesture was active.
    pub fn release(&mut self) -> Option<MoveOutcome> {
        let outcome = match self.state {
            MoveState::Pressed { .. } => Some(MoveOutcome::Click),
            MoveState::Moving { .. } => Some(MoveOutcome::Moved),
            MoveState::Idle => None,
        };
        self.state = MoveState::Idle;
        outcome
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, MoveState::Idle)
    }
}
