use super::*;

// =============================================================
// Frame
// =============================================================

#[test]
fn frame_centered_on_subtracts_half_size() {
    let frame = Frame::centered_on(Point::new(100.0, 100.0), Size::new(50.0, 50.0));
    assert_eq!(frame.origin, Point::new(75.0, 75.0));
    assert_eq!(frame.size, Size::new(50.0, 50.0));
}

#[test]
fn frame_center_inverts_centered_on() {
    let center = Point::new(12.5, -40.0);
    let frame = Frame::centered_on(center, Size::new(30.0, 10.0));
    assert_eq!(frame.center(), center);
}

#[test]
fn frame_with_center_keeps_size() {
    let frame = Frame::new(Point::new(0.0, 0.0), Size::new(20.0, 40.0));
    let moved = frame.with_center(Point::new(100.0, 100.0));
    assert_eq!(moved.size, frame.size);
    assert_eq!(moved.origin, Point::new(90.0, 80.0));
}

#[test]
fn default_size_is_fifty_square() {
    assert_eq!(Size::default(), Size::new(50.0, 50.0));
}

// =============================================================
// TouchPhase
// =============================================================

#[test]
fn only_ended_and_cancelled_are_terminal() {
    let terminal = [TouchPhase::Ended, TouchPhase::Cancelled];
    let other = [
        TouchPhase::Began,
        TouchPhase::Moved,
        TouchPhase::Stationary,
        TouchPhase::RegionEntered,
        TouchPhase::RegionMoved,
        TouchPhase::RegionExited,
    ];
    for phase in terminal {
        assert!(phase.is_terminal(), "{phase:?}");
    }
    for phase in other {
        assert!(!phase.is_terminal(), "{phase:?}");
    }
}

// =============================================================
// Config & settings
// =============================================================

#[test]
fn config_defaults() {
    let config = OverlayConfig::default();
    assert_eq!(config.indicator_size, Size::new(50.0, 50.0));
    assert!(!config.pressure_enabled);
    assert_eq!(config.unit_force, 1.0);
}

#[test]
fn settings_default_maps_to_default_config() {
    assert_eq!(OverlaySettings::default().to_config(), OverlayConfig::default());
}

#[test]
fn settings_sanitized_clamps_ranges() {
    let settings = OverlaySettings {
        indicator_edge: 1000.0,
        opacity: -3.0,
        color: "   ".to_string(),
        ..OverlaySettings::default()
    }
    .sanitized();
    assert_eq!(settings.indicator_edge, MAX_INDICATOR_EDGE);
    assert_eq!(settings.opacity, 0.1);
    assert_eq!(settings.color, OverlaySettings::default().color);
}

#[test]
fn settings_sanitized_replaces_non_finite() {
    let settings = OverlaySettings {
        indicator_edge: f64::NAN,
        opacity: f64::INFINITY,
        ..OverlaySettings::default()
    }
    .sanitized();
    assert_eq!(settings.indicator_edge, DEFAULT_INDICATOR_EDGE);
    assert_eq!(settings.opacity, 0.6);
}

#[test]
fn settings_to_config_uses_edge_and_pressure() {
    let settings = OverlaySettings {
        indicator_edge: 80.0,
        pressure_enabled: true,
        ..OverlaySettings::default()
    };
    let config = settings.to_config();
    assert_eq!(config.indicator_size, Size::square(80.0));
    assert!(config.pressure_enabled);
}

#[test]
fn error_messages() {
    assert_eq!(OverlayError::NoWindow.to_string(), "no global window");
    assert_eq!(OverlayError::Dom("boom".into()).to_string(), "dom error: boom");
}

// =============================================================
// TouchStats
// =============================================================

#[test]
fn stats_track_peak() {
    let stats = Rc::new(TouchStats::default());
    let stats = stats.reduce(TouchStatsAction::Count(3));
    let stats = stats.reduce(TouchStatsAction::Count(1));
    assert_eq!(*stats, TouchStats { active: 1, peak: 3 });
}

#[test]
fn stats_reset_peak_keeps_active() {
    let stats = Rc::new(TouchStats { active: 2, peak: 5 });
    let stats = stats.reduce(TouchStatsAction::ResetPeak);
    assert_eq!(*stats, TouchStats { active: 2, peak: 2 });
}

#[test]
fn stats_unchanged_count_returns_same_rc() {
    let stats = Rc::new(TouchStats { active: 2, peak: 2 });
    let next = stats.clone().reduce(TouchStatsAction::Count(2));
    assert!(Rc::ptr_eq(&stats, &next));
}
