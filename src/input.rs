use egui::{Pos2, Response};

/// A discrete pointer event over the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed down; starts a shape.
    Pressed(Pos2),
    /// Pointer dragged while down; grows the in-progress shape.
    Moved(Pos2),
    /// Pointer released; commits the in-progress shape.
    Released,
}

/// Extracts the pointer events carried by this frame's canvas response.
///
/// Press and move events without a pointer position (e.g. the pointer left
/// the surface mid-gesture) are dropped here, so the state machine never
/// sees them.
pub fn pointer_events(response: &Response) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(PointerEvent::Pressed(pos));
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(PointerEvent::Moved(pos));
        }
    }
    if response.drag_stopped() {
        events.push(PointerEvent::Released);
    }
    events
}
