//! Arena fixtures: widgets with pre-resolved edges.

use crate::session::RecordingSession;
use gantry_core::{AnchorRef, Side, VariableId, WidgetArena, WidgetId};

/// Allocate a widget and pin all four of its edges, modeling a widget the
/// wider system has already positioned at `(left, top, right, bottom)`.
pub fn pinned_box(
    arena: &mut WidgetArena,
    session: &mut RecordingSession,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
) -> WidgetId {
    let id = arena.alloc();
    session.pin(AnchorRef::new(id, Side::Left), left);
    session.pin(AnchorRef::new(id, Side::Top), top);
    session.pin(AnchorRef::new(id, Side::Right), right);
    session.pin(AnchorRef::new(id, Side::Bottom), bottom);
    id
}

/// Pin a single edge of an existing widget.
pub fn pin_edge(
    session: &mut RecordingSession,
    widget: WidgetId,
    side: Side,
    value: i32,
) -> VariableId {
    session.pin(AnchorRef::new(widget, side), value)
}
