use super::*;

#[test]
fn css_px_whole_values() {
    assert_eq!(css_px(50.0), "50px");
    assert_eq!(css_px(0.0), "0px");
}

#[test]
fn css_px_keeps_fractions() {
    assert_eq!(css_px(75.5), "75.5px");
    assert_eq!(css_px(-12.25), "-12.25px");
}
