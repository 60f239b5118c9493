// Browser TouchEvent -> platform neutral TouchEventRecord
use wasm_bindgen::JsCast;
use web_sys::{Element, Touch, TouchEvent, TouchList};

use crate::model::{Force, Point, TouchEventRecord, TouchId, TouchPhase, TouchRecord};

#[cfg(test)]
#[path = "web_touch_test.rs"]
mod web_touch_test;

/// Event names the overlay listens to.
pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

/// Shell controls whose taps must still reach the browser as clicks.
pub const CONTROL_SELECTOR: &str = "button, input, label, select, textarea, a";

/// Hardware maximum on the force scale where 1.0 is an average touch.
pub const MAX_POSSIBLE_FORCE: f64 = 20.0 / 3.0;

/// A touch as read off a `TouchList`, before a phase is assigned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawTouch {
    pub id: i32,
    pub location: Point,
    /// Browser force, normalised to [0, 1]; 0 when unsupported.
    pub force: f32,
}

pub fn phase_for_event_type(kind: &str) -> Option<TouchPhase> {
    match kind {
        "touchstart" => Some(TouchPhase::Began),
        "touchmove" => Some(TouchPhase::Moved),
        "touchend" => Some(TouchPhase::Ended),
        "touchcancel" => Some(TouchPhase::Cancelled),
        _ => None,
    }
}

/// Whether the overlay cancels the browser default for an event of type `kind`.
/// Only moves are cancelled; cancelling start or end swallows the click that
/// follows a tap. Touches that start on a shell control are never cancelled.
pub fn blocks_default(kind: &str, capture_default: bool, on_control: bool) -> bool {
    capture_default && !on_control && phase_for_event_type(kind) == Some(TouchPhase::Moved)
}

/// True when the event's target is, or sits inside, an element matching [`CONTROL_SELECTOR`].
pub fn targets_control(event: &TouchEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(CONTROL_SELECTOR).ok().flatten())
        .is_some()
}

/// Browsers report 0 when the device has no pressure sensor.
pub fn normalized_force(raw: f32) -> Option<Force> {
    if !(raw > 0.0) {
        return None;
    }
    Some(Force {
        value: f64::from(raw.min(1.0)) * MAX_POSSIBLE_FORCE,
        max: MAX_POSSIBLE_FORCE,
    })
}

fn to_record(raw: &RawTouch, phase: TouchPhase) -> TouchRecord {
    let record = TouchRecord::new(TouchId(raw.id), phase, raw.location);
    match normalized_force(raw.force) {
        Some(force) => record.with_force(force),
        None => record,
    }
}

/// `changed` carry the event's phase. Every other touch still on the surface
/// is reported as stationary so pressure keeps updating for it.
pub fn build_record(
    phase: TouchPhase,
    changed: &[RawTouch],
    active: &[RawTouch],
) -> TouchEventRecord {
    let mut touches: Vec<TouchRecord> = changed.iter().map(|raw| to_record(raw, phase)).collect();
    for raw in active {
        if !changed.iter().any(|c| c.id == raw.id) {
            touches.push(to_record(raw, TouchPhase::Stationary));
        }
    }
    TouchEventRecord::new(touches)
}

fn read_touch(touch: &Touch, origin: Point) -> RawTouch {
    RawTouch {
        id: touch.identifier(),
        location: Point::new(
            f64::from(touch.client_x()) - origin.x,
            f64::from(touch.client_y()) - origin.y,
        ),
        force: touch.force(),
    }
}

fn read_list(list: &TouchList, origin: Point) -> Vec<RawTouch> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| read_touch(&t, origin))
        .collect()
}

/// Convert a DOM touch event. `origin` is the overlay's top-left corner in
/// client coordinates. Unknown event types produce an empty record.
pub fn record_from_event(event: &TouchEvent, origin: Point) -> TouchEventRecord {
    let Some(phase) = phase_for_event_type(&event.type_()) else {
        return TouchEventRecord::default();
    };
    let changed = read_list(&event.changed_touches(), origin);
    let active = read_list(&event.touches(), origin);
    build_record(phase, &changed, &active)
}
