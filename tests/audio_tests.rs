//! Integration tests for the audio visualizations

mod common;
use common::*;

use palette::Srgb;
use ring_clock::audio::{self, EQUALIZER_BARS, OUTER_PULSE_ARCS, bar_height};
use ring_clock::colors;
use ring_clock::{AudioVisualizer, BandSample, Canvas, Ring, RingGeometry, filter_noise};

const RAW: [u16; 7] = [10, 300, 50, 0, 255, 1, 128];

fn filtered() -> BandSample {
    filter_noise(&RAW, 200, 1)
}

#[test]
fn noise_floor_keeps_quiet_bands_barely_lit() {
    let sample = filtered();
    assert_eq!(sample, [1, 255, 1, 1, 255, 1, 1]);

    // Band 1 saturates to a full bar; band 3 is silent but not dark.
    assert_eq!(bar_height(sample[1], 15), 15);
    assert_eq!(bar_height(sample[3], 15), 1);
    assert_ne!(sample[3], 0);
}

#[test]
fn readings_at_the_floor_count_as_silence() {
    let sample = filter_noise(&[200, 201, 0, 0, 0, 0, 0], 200, 3);
    assert_eq!(sample[0], 3);
    assert_eq!(sample[1], 201);
}

#[test]
fn equalizer_bars_follow_band_heights() {
    let mut pixels = MockPixels::new();
    let geometry = RingGeometry::new();
    let mut visualizer = AudioVisualizer::new(10);

    let mut canvas = Canvas::new(&mut pixels, &geometry);
    visualizer.draw_equalizer(&mut canvas, &filtered());
    canvas.flush();

    // Band 1 fills its whole segment with wheel colors.
    for position in 15..30 {
        assert_eq!(
            pixels.shown_at(Ring::Outer, position),
            visualizer.wheel_color(position)
        );
    }

    // Band 3 lights a single pixel, the rest of its segment falls back.
    assert_eq!(pixels.shown_at(Ring::Outer, 45), visualizer.wheel_color(45));
    for position in 46..60 {
        assert_eq!(
            pixels.shown_at(Ring::Outer, position),
            colors::EQUALIZER_FALLBACK
        );
    }

    // Band 4 fills the first half of the middle ring.
    for position in 0..12 {
        assert_ne!(
            pixels.shown_at(Ring::Middle, position),
            colors::EQUALIZER_FALLBACK
        );
    }
    assert_eq!(pixels.shown_at(Ring::Middle, 13), colors::EQUALIZER_FALLBACK);
}

#[test]
fn equalizer_band_six_is_mirrored_on_the_inner_ring() {
    let bars: Vec<_> = EQUALIZER_BARS
        .iter()
        .filter(|bar| bar.ring == Ring::Inner)
        .collect();
    assert_eq!(bars.len(), 2);
    assert!(bars.iter().all(|bar| bar.band == 6 && bar.len == 6));
}

#[test]
fn color_wheel_drifts_every_ten_frames() {
    let mut pixels = MockPixels::new();
    let geometry = RingGeometry::new();
    let mut visualizer = AudioVisualizer::new(10);
    let sample = filtered();

    let first = visualizer.wheel_color(20);
    for _ in 0..9 {
        let mut canvas = Canvas::new(&mut pixels, &geometry);
        visualizer.draw_equalizer(&mut canvas, &sample);
    }
    assert_eq!(visualizer.phase(), 0);
    assert_eq!(visualizer.wheel_color(20), first);

    let mut canvas = Canvas::new(&mut pixels, &geometry);
    visualizer.draw_equalizer(&mut canvas, &sample);
    assert_eq!(visualizer.phase(), 1);
    assert_eq!(visualizer.frame(), 10);
}

#[test]
fn pulse_arcs_write_raw_band_levels_into_their_channels() {
    let mut pixels = MockPixels::new();
    let geometry = RingGeometry::new();
    let sample: BandSample = [10, 20, 30, 40, 50, 60, 70];

    let mut canvas = Canvas::new(&mut pixels, &geometry);
    audio::draw_pulse(&mut canvas, &sample);
    canvas.flush();

    for arc in OUTER_PULSE_ARCS {
        let expected = arc.channels.color(sample[usize::from(arc.band)]);
        for position in arc.start..arc.start + arc.len {
            assert_eq!(pixels.shown_at(Ring::Outer, usize::from(position)), expected);
        }
    }
    assert_eq!(pixels.shown_at(Ring::Outer, 1), Srgb::new(10, 0, 0));
    assert_eq!(pixels.shown_at(Ring::Outer, 12), Srgb::new(20, 20, 0));
    assert_eq!(pixels.shown_at(Ring::Outer, 8), colors::OFF);
}

#[test]
fn pulse_inner_ring_blends_bands() {
    let mut pixels = MockPixels::new();
    let geometry = RingGeometry::new();
    let sample: BandSample = [10, 20, 30, 40, 50, 60, 70];

    let mut canvas = Canvas::new(&mut pixels, &geometry);
    audio::draw_pulse(&mut canvas, &sample);
    canvas.flush();

    for (position, [red, green, blue]) in audio::INNER_PULSE_BLEND.iter().enumerate() {
        let expected = Srgb::new(
            sample[usize::from(*red)],
            sample[usize::from(*green)],
            sample[usize::from(*blue)] / 2,
        );
        assert_eq!(pixels.shown_at(Ring::Inner, position), expected);
    }
}
