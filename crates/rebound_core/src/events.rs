//! Touch event vocabulary
//!
//! Unified touch delivery shared by all widgets. Host platforms convert
//! their native motion events into [`TouchEvent`]s and feed them to the
//! widget tree.

use smallvec::{smallvec, SmallVec};

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// A secondary finger lifted while at least one finger stays down
    pub const POINTER_UP_SECONDARY: EventType = 4;
    pub const POINTER_CANCEL: EventType = 5;
    pub const SCROLL: EventType = 30;
    /// Boundary-overscroll signal reported by a scroll surface
    pub const SCROLL_CLAMP: EventType = 31;
}

/// One finger within a touch event (for multi-touch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPointer {
    /// Pointer ID, stable for the lifetime of the finger contact
    pub id: i32,
    /// X coordinate in window space
    pub x: f32,
    /// Y coordinate in window space
    pub y: f32,
}

/// Phase of a touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// First finger landed
    Down,
    /// Touch position changed
    Move,
    /// Last finger lifted
    Up,
    /// A secondary finger lifted; the gesture may continue with the rest
    PointerUp,
    /// Touch cancelled (e.g. a system gesture took over)
    Cancel,
}

impl TouchPhase {
    /// Map to the corresponding [`event_types`] constant
    pub fn event_type(&self) -> EventType {
        match self {
            TouchPhase::Down => event_types::POINTER_DOWN,
            TouchPhase::Move => event_types::POINTER_MOVE,
            TouchPhase::Up => event_types::POINTER_UP,
            TouchPhase::PointerUp => event_types::POINTER_UP_SECONDARY,
            TouchPhase::Cancel => event_types::POINTER_CANCEL,
        }
    }

    /// Phases that end the active gesture for scroll handling purposes
    pub fn ends_gesture(&self) -> bool {
        matches!(
            self,
            TouchPhase::Up | TouchPhase::PointerUp | TouchPhase::Cancel
        )
    }
}

/// A touch event carrying the primary coordinate and the full pointer set
#[derive(Debug, Clone)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Primary pointer X in window space
    pub x: f32,
    /// Primary pointer Y in window space
    pub y: f32,
    /// All fingers currently down (primary first)
    pub pointers: SmallVec<[TouchPointer; 2]>,
}

impl TouchEvent {
    /// Build a single-pointer event
    pub fn single(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            pointers: smallvec![TouchPointer { id: 0, x, y }],
        }
    }

    /// First finger landed at (x, y)
    pub fn down(x: f32, y: f32) -> Self {
        Self::single(TouchPhase::Down, x, y)
    }

    /// Finger moved to (x, y)
    pub fn move_to(x: f32, y: f32) -> Self {
        Self::single(TouchPhase::Move, x, y)
    }

    /// Last finger lifted at (x, y)
    pub fn up(x: f32, y: f32) -> Self {
        Self::single(TouchPhase::Up, x, y)
    }

    /// Gesture cancelled by the platform
    pub fn cancel() -> Self {
        Self {
            phase: TouchPhase::Cancel,
            x: 0.0,
            y: 0.0,
            pointers: SmallVec::new(),
        }
    }

    /// Number of fingers currently down
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}
