use std::cell::Cell;
use std::rc::Rc;

use swipematch_ui_graphics::Point;

pub type PointerId = u64;

/// Pointer id used for mouse input and for the single-pointer drag helpers.
pub const PRIMARY_POINTER: PointerId = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// Pointer event with consumption tracking.
///
/// A handler that acts on an event consumes it, which tells the host to
/// suppress the platform default (page scroll, text selection).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub position: Point,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: PRIMARY_POINTER,
            kind,
            source: PointerSource::Mouse,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::default())
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    /// Mark this event as handled.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_copies() {
        let event = PointerEvent::down(4.0, 2.0).with_source(PointerSource::Touch);
        let copy = event.clone();
        assert!(!event.is_consumed());
        copy.consume();
        assert!(event.is_consumed());
        assert_eq!(event.id, PRIMARY_POINTER);
        assert_eq!(event.source, PointerSource::Touch);
    }
}
