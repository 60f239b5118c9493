use super::*;

fn raw(id: i32, x: f64, y: f64, force: f32) -> RawTouch {
    RawTouch {
        id,
        location: Point::new(x, y),
        force,
    }
}

#[test]
fn event_types_map_to_phases() {
    assert_eq!(phase_for_event_type("touchstart"), Some(TouchPhase::Began));
    assert_eq!(phase_for_event_type("touchmove"), Some(TouchPhase::Moved));
    assert_eq!(phase_for_event_type("touchend"), Some(TouchPhase::Ended));
    assert_eq!(phase_for_event_type("touchcancel"), Some(TouchPhase::Cancelled));
    assert_eq!(phase_for_event_type("mousedown"), None);
}

#[test]
fn every_listened_event_has_a_phase() {
    for name in TOUCH_EVENTS {
        assert!(phase_for_event_type(name).is_some(), "{name}");
    }
}

#[test]
fn zero_force_means_unsupported() {
    assert_eq!(normalized_force(0.0), None);
    assert_eq!(normalized_force(-0.5), None);
    assert_eq!(normalized_force(f32::NAN), None);
}

#[test]
fn full_force_maps_to_hardware_maximum() {
    let force = normalized_force(1.0).expect("force");
    assert_eq!(force.value, MAX_POSSIBLE_FORCE);
    assert_eq!(force.max, MAX_POSSIBLE_FORCE);
}

#[test]
fn force_above_one_is_clamped() {
    let force = normalized_force(3.0).expect("force");
    assert_eq!(force.value, MAX_POSSIBLE_FORCE);
}

#[test]
fn half_force_is_proportional() {
    let force = normalized_force(0.5).expect("force");
    assert!((force.value - MAX_POSSIBLE_FORCE / 2.0).abs() < 1e-9);
}

#[test]
fn changed_touches_carry_event_phase() {
    let record = build_record(
        TouchPhase::Moved,
        &[raw(1, 10.0, 20.0, 0.0)],
        &[raw(1, 10.0, 20.0, 0.0)],
    );
    assert_eq!(record.touches.len(), 1);
    let touch = record.touches[0];
    assert_eq!(touch.id, TouchId(1));
    assert_eq!(touch.phase, TouchPhase::Moved);
    assert_eq!(touch.location, Point::new(10.0, 20.0));
    assert_eq!(touch.force, None);
}

#[test]
fn unchanged_touches_are_stationary() {
    let record = build_record(
        TouchPhase::Moved,
        &[raw(1, 0.0, 0.0, 0.0)],
        &[raw(1, 0.0, 0.0, 0.0), raw(2, 5.0, 5.0, 0.25)],
    );
    assert_eq!(record.touches.len(), 2);
    assert_eq!(record.touches[1].id, TouchId(2));
    assert_eq!(record.touches[1].phase, TouchPhase::Stationary);
    assert!(record.touches[1].force.is_some());
}

#[test]
fn ended_touch_is_not_duplicated_as_stationary() {
    // touchend: the lifted finger is only in changedTouches.
    let record = build_record(
        TouchPhase::Ended,
        &[raw(1, 0.0, 0.0, 0.0)],
        &[raw(2, 8.0, 8.0, 0.0)],
    );
    let phases: Vec<_> = record.touches.iter().map(|t| (t.id, t.phase)).collect();
    assert_eq!(
        phases,
        vec![
            (TouchId(1), TouchPhase::Ended),
            (TouchId(2), TouchPhase::Stationary),
        ]
    );
}

#[test]
fn empty_lists_give_empty_record() {
    assert!(build_record(TouchPhase::Cancelled, &[], &[]).is_empty());
}

#[test]
fn taps_keep_their_default_so_clicks_fire() {
    assert!(!blocks_default("touchstart", true, false));
    assert!(!blocks_default("touchend", true, false));
    assert!(!blocks_default("touchcancel", true, false));
}

#[test]
fn moves_are_blocked_only_when_capturing() {
    assert!(blocks_default("touchmove", true, false));
    assert!(!blocks_default("touchmove", false, false));
}

#[test]
fn nothing_is_blocked_over_controls() {
    for name in TOUCH_EVENTS {
        assert!(!blocks_default(name, true, true), "{name}");
    }
}

#[test]
fn unknown_events_are_not_blocked() {
    assert!(!blocks_default("click", true, false));
}

#[test]
fn control_selector_covers_shell_inputs() {
    for tag in ["button", "input", "label"] {
        assert!(CONTROL_SELECTOR.split(", ").any(|s| s == tag), "{tag}");
    }
}
