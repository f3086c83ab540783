use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved};

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PointerEvent>()
            .add_systems(PreUpdate, collect_pointer_events);
    }
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from top-left, y down
    pub position: Vec2,
    pub event_type: PointerEventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Move,
    /// Pointer left the window; `position` is the last known position
    Leave,
}

fn collect_pointer_events(
    mut ev_cursor: MessageReader<CursorMoved>,
    mut ev_left: MessageReader<CursorLeft>,
    mut last: Local<Option<Vec2>>,
    mut out: MessageWriter<PointerEvent>,
) {
    for e in ev_cursor.read() {
        *last = Some(e.position);
        out.write(PointerEvent {
            position: e.position,
            event_type: PointerEventType::Move,
        });
    }

    if ev_left.read().count() > 0 {
        if let Some(position) = *last {
            out.write(PointerEvent {
                position,
                event_type: PointerEventType::Leave,
            });
        }
    }
}
