//! Integration tests for colors module

use ring_clock::Srgb;
use ring_clock::colors;

fn close(a: Srgb<u8>, b: Srgb<u8>) -> bool {
    let near = |x: u8, y: u8| x.abs_diff(y) <= 1;
    near(a.red, b.red) && near(a.green, b.green) && near(a.blue, b.blue)
}

#[test]
fn hsv_creates_primary_colors() {
    assert!(close(colors::hsv(0.0, 1.0, 1.0), colors::RED));
    assert!(close(colors::hsv(120.0, 1.0, 1.0), colors::GREEN));
    assert!(close(colors::hsv(240.0, 1.0, 1.0), colors::BLUE));
}

#[test]
fn hsv_handles_saturation_and_value() {
    assert!(close(colors::hsv(0.0, 0.0, 1.0), colors::WHITE));
    assert!(close(colors::hsv(200.0, 1.0, 0.0), colors::OFF));

    let half = colors::hsv(0.0, 1.0, 0.5);
    assert!(half.red.abs_diff(127) <= 1);
    assert_eq!(half.green, 0);
}

#[test]
fn wheel_starts_at_red_and_passes_through_primaries() {
    assert!(close(colors::wheel(0), colors::RED));
    // 256 wheel steps span 360 degrees.
    let third = colors::wheel(85);
    assert!(third.green > 240 && third.red < 10);
    let two_thirds = colors::wheel(171);
    assert!(two_thirds.blue > 240 && two_thirds.green < 10);
}

#[test]
fn scale_is_proportional() {
    let color = Srgb::new(255, 100, 0);
    assert_eq!(colors::scale(color, 255), color);
    assert_eq!(colors::scale(color, 0), colors::OFF);
    assert_eq!(colors::scale(color, 51), Srgb::new(51, 20, 0));
}

#[test]
fn dim_keeps_lit_channels_visible() {
    let dimmed = colors::dim(colors::MINUTE_MARKER);
    assert!(dimmed.red > 0 && dimmed.red < colors::MINUTE_MARKER.red);
    assert_eq!(dimmed.blue, 0);
}
