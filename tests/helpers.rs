use regionview::{alpha_to_u8, clamp};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn clamp_maps_nan_to_low() {
    assert_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
}

#[test]
fn alpha_to_u8_endpoints() {
    assert_eq!(alpha_to_u8(0.0), 0);
    assert_eq!(alpha_to_u8(1.0), 255);
}

#[test]
fn alpha_to_u8_rounds_and_clamps() {
    assert_eq!(alpha_to_u8(0.5), 128);
    assert_eq!(alpha_to_u8(0.3), 77);
    assert_eq!(alpha_to_u8(1.7), 255);
    assert_eq!(alpha_to_u8(-0.2), 0);
}
