use super::*;

#[test]
fn encode_then_decode_keeps_settings() {
    let settings = OverlaySettings {
        indicator_edge: 72.0,
        pressure_enabled: true,
        color: "#ff00aa".to_string(),
        opacity: 0.8,
        show_touch_count: false,
        capture_default: false,
    };
    let raw = encode(&settings).expect("encode");
    assert_eq!(decode(&raw).expect("decode"), settings);
}

#[test]
fn missing_fields_take_defaults() {
    let settings = decode(r#"{"pressure_enabled":true}"#).expect("decode");
    assert!(settings.pressure_enabled);
    assert_eq!(settings.indicator_edge, 50.0);
    assert_eq!(settings.color, OverlaySettings::default().color);
    assert!(settings.show_touch_count);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(decode("{}").expect("decode"), OverlaySettings::default());
}

#[test]
fn stored_values_are_clamped() {
    let settings = decode(r#"{"indicator_edge":2,"opacity":7}"#).expect("decode");
    assert_eq!(settings.indicator_edge, crate::model::MIN_INDICATOR_EDGE);
    assert_eq!(settings.opacity, 1.0);
}

#[test]
fn garbage_is_a_settings_error() {
    let err = decode("not json").expect_err("should fail");
    assert!(matches!(err, OverlayError::Settings(_)));
    assert!(err.to_string().starts_with("settings decode error"));
}
