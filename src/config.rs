//! Tunable display parameters.

/// Display configuration, with defaults matching the stock firmware.
///
/// Override individual values with the `with_*` setters:
///
/// ```
/// use ring_clock::DisplayConfig;
///
/// let config = DisplayConfig::default()
///     .with_frame_delay_ms(30)
///     .with_noise_floor(120);
/// assert_eq!(config.frame_delay_ms, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Delay after each frame of an animated mode.
    pub frame_delay_ms: u32,

    /// Analyzer readings at or below this are treated as silence.
    pub noise_floor: u16,

    /// Intensity shown for silent bands.
    pub minimal_level: u8,

    /// Frames per color-wheel step.
    pub phase_divider: u32,

    /// Frames per rotation step, outer ring first.
    pub rotation_periods: [u32; 3],

    /// Each ring reverses with probability one in this many per frame.
    pub toggle_odds: u32,

    /// Seed for the rotation reversals.
    pub rng_seed: u64,

    /// Frames per Pac-Man step.
    pub pacman_step_frames: u32,

    /// Delay between self-test pixels.
    pub self_test_step_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 20,
            noise_floor: 200,
            minimal_level: 1,
            phase_divider: 10,
            rotation_periods: [5, 10, 15],
            toggle_odds: 500,
            rng_seed: 0x5EED,
            pacman_step_frames: 4,
            self_test_step_ms: 15,
        }
    }
}

impl DisplayConfig {
    pub fn with_frame_delay_ms(mut self, frame_delay_ms: u32) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn with_noise_floor(mut self, noise_floor: u16) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    pub fn with_minimal_level(mut self, minimal_level: u8) -> Self {
        self.minimal_level = minimal_level;
        self
    }

    pub fn with_phase_divider(mut self, phase_divider: u32) -> Self {
        self.phase_divider = phase_divider;
        self
    }

    pub fn with_rotation_periods(mut self, rotation_periods: [u32; 3]) -> Self {
        self.rotation_periods = rotation_periods;
        self
    }

    pub fn with_toggle_odds(mut self, toggle_odds: u32) -> Self {
        self.toggle_odds = toggle_odds;
        self
    }

    /// Seeds the rotation reversals, e.g. from a hardware RNG.
    pub fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    pub fn with_pacman_step_frames(mut self, pacman_step_frames: u32) -> Self {
        self.pacman_step_frames = pacman_step_frames;
        self
    }

    pub fn with_self_test_step_ms(mut self, self_test_step_ms: u32) -> Self {
        self.self_test_step_ms = self_test_step_ms;
        self
    }
}
