//! Top-level display state machine.
//!
//! Provides [`ModeController`], which owns the peripherals and all display
//! state, reacts to input, and draws the active mode once per call to
//! [`ModeController::tick`].

use crate::audio::{AudioVisualizer, BAND_COUNT, BandSample, SpectrumAnalyzer, filter_noise};
use crate::calendar::DateTime;
use crate::colors;
use crate::command::ModeAction;
use crate::config::DisplayConfig;
use crate::geometry::RingGeometry;
use crate::input::InputSource;
use crate::pacman::PacMan;
use crate::render::{self, Canvas, PixelBuffer};
use crate::rotation::RotationScheduler;
use crate::setter::{self, poll_or_none};
use crate::time::{SecondTick, TimeCache, TimeKeeper};
use crate::types::{ClockError, DisplayMode, Ring};
use embedded_hal::delay::DelayNs;

/// Drives the LED rings through the display modes.
///
/// Each call to [`tick`](Self::tick) polls the input once and runs the
/// handler of the active mode once. Clock and date redraw only when the
/// one-second tick has fired or the mode was just entered; the animated
/// modes draw a frame on every call.
///
/// # Type Parameters
/// * `'t` - Lifetime of the one-second tick reference
/// * `K` - Real-time clock
/// * `A` - Spectrum analyzer
/// * `P` - LED pixel buffer
/// * `I` - Button/remote input
/// * `D` - Delay provider
pub struct ModeController<'t, K, A, P, I, D>
where
    K: TimeKeeper,
    A: SpectrumAnalyzer,
    P: PixelBuffer,
    I: InputSource,
    D: DelayNs,
{
    keeper: K,
    analyzer: A,
    pixels: P,
    input: I,
    delay: D,
    second_tick: &'t SecondTick,
    config: DisplayConfig,
    mode: DisplayMode,
    first_render: bool,
    geometry: RingGeometry,
    cache: TimeCache,
    visualizer: AudioVisualizer,
    rotation: RotationScheduler,
    pacman: PacMan,
}

impl<'t, K, A, P, I, D> ModeController<'t, K, A, P, I, D>
where
    K: TimeKeeper,
    A: SpectrumAnalyzer,
    P: PixelBuffer,
    I: InputSource,
    D: DelayNs,
{
    /// Creates a controller in clock mode, due for an immediate redraw.
    pub fn new(
        keeper: K,
        analyzer: A,
        pixels: P,
        input: I,
        delay: D,
        second_tick: &'t SecondTick,
        config: DisplayConfig,
    ) -> Self {
        Self {
            keeper,
            analyzer,
            pixels,
            input,
            delay,
            second_tick,
            mode: DisplayMode::Clock,
            first_render: true,
            geometry: RingGeometry::new(),
            cache: TimeCache::default(),
            visualizer: AudioVisualizer::new(config.phase_divider),
            rotation: RotationScheduler::new(
                config.rotation_periods,
                config.toggle_odds,
                config.rng_seed,
            ),
            pacman: PacMan::new(config.pacman_step_frames),
            config,
        }
    }

    /// The active mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// True if the next tick redraws regardless of the one-second flag.
    pub fn is_first_render(&self) -> bool {
        self.first_render
    }

    /// Current ring mapping.
    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// The configuration in use.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The most recent valid RTC reading.
    pub fn last_reading(&self) -> DateTime {
        self.cache.last_good()
    }

    /// The LED pixel buffer.
    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    /// The real-time clock.
    pub fn keeper(&self) -> &K {
        &self.keeper
    }

    /// Switches mode, resetting the ring mapping and forcing a redraw.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        #[cfg(feature = "defmt")]
        defmt::info!("mode {} -> {}", self.mode, mode);

        self.mode = mode;
        self.geometry.reset();
        self.first_render = true;
    }

    /// Handles a control action.
    ///
    /// [`ModeAction::Enter`] blocks while the time or date setter or the
    /// self-test runs.
    ///
    /// # Errors
    /// Propagates a failed RTC write when a setter commits.
    pub fn handle_action(&mut self, action: ModeAction) -> Result<(), ClockError> {
        match action {
            ModeAction::Next => self.set_mode(self.mode.next()),
            ModeAction::Previous => self.set_mode(self.mode.previous()),
            ModeAction::Select(mode) => self.set_mode(mode),
            ModeAction::Enter => return self.enter(),
        }
        Ok(())
    }

    /// Runs the mode-specific action for the both-buttons press.
    fn enter(&mut self) -> Result<(), ClockError> {
        // The one-second flag is left alone while a setter runs; it is
        // neither drained nor acted on until the setter returns.
        let result = match self.mode {
            DisplayMode::Clock => setter::run_time_setter(
                &mut self.keeper,
                &mut self.cache,
                &mut self.pixels,
                &self.geometry,
                &mut self.input,
            )
            .map(|_| ()),
            DisplayMode::Date => setter::run_date_setter(
                &mut self.keeper,
                &mut self.cache,
                &mut self.pixels,
                &self.geometry,
                &mut self.input,
            )
            .map(|_| ()),
            DisplayMode::AudioPulse => {
                self.self_test();
                Ok(())
            }
            _ => return Ok(()),
        };
        self.first_render = true;
        result
    }

    /// Polls the input once and runs the active mode's handler once.
    ///
    /// # Errors
    /// Propagates a failed RTC write when a setter commits.
    pub fn tick(&mut self) -> Result<(), ClockError> {
        let edge = poll_or_none(&mut self.input);
        if let Some(action) = ModeAction::from_edge(edge) {
            self.handle_action(action)?;
        }

        match self.mode {
            DisplayMode::Clock | DisplayMode::Date => self.refresh_static(),
            DisplayMode::AudioPulse | DisplayMode::AudioPulseRotating => {
                self.draw_audio_frame(false)
            }
            DisplayMode::AudioEqualizer | DisplayMode::AudioEqualizerRotating => {
                self.draw_audio_frame(true)
            }
            DisplayMode::PacMan => self.draw_pacman_frame(),
        }
        Ok(())
    }

    /// Runs forever, logging errors and carrying on.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(_err) = self.tick() {
                #[cfg(feature = "defmt")]
                defmt::warn!("tick failed: {}", _err);
            }
        }
    }

    /// Clock and date handler: redraws once per second or on first render.
    fn refresh_static(&mut self) {
        let second_elapsed = self.second_tick.take();
        if !(second_elapsed || self.first_render) {
            return;
        }
        self.first_render = false;

        let now = self.cache.sample(&mut self.keeper);
        let mut canvas = Canvas::new(&mut self.pixels, &self.geometry);
        if self.mode == DisplayMode::Date {
            render::show_date(&mut canvas, &now.calendar(), None);
        } else {
            render::show_time(&mut canvas, &now.clock(), None);
        }
    }

    /// Reads the analyzer, substituting silence if it fails.
    fn sample_audio(&mut self) -> BandSample {
        let raw = self.analyzer.sample_bands().unwrap_or_else(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("spectrum read failed: {}", _err);
            [0; BAND_COUNT]
        });
        filter_noise(&raw, self.config.noise_floor, self.config.minimal_level)
    }

    fn draw_audio_frame(&mut self, equalizer: bool) {
        self.first_render = false;
        let sample = self.sample_audio();

        {
            let mut canvas = Canvas::new(&mut self.pixels, &self.geometry);
            if equalizer {
                self.visualizer.draw_equalizer(&mut canvas, &sample);
            } else {
                self.visualizer.draw_pulse(&mut canvas, &sample);
            }
        }
        if self.mode.is_rotating() {
            self.rotation.step(&mut self.geometry);
        }

        self.pixels.flush();
        self.delay.delay_ms(self.config.frame_delay_ms);
    }

    fn draw_pacman_frame(&mut self) {
        self.first_render = false;
        let mut canvas = Canvas::new(&mut self.pixels, &self.geometry);
        self.pacman.draw(&mut canvas);
        canvas.flush();
        self.delay.delay_ms(self.config.frame_delay_ms);
    }

    /// Lights every pixel of every ring in turn in red, green and blue,
    /// then everything white, then clears.
    pub fn self_test(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("self-test started");

        let step = self.config.self_test_step_ms;
        let mut canvas = Canvas::new(&mut self.pixels, &self.geometry);
        for ring in Ring::ALL {
            for color in [colors::RED, colors::GREEN, colors::BLUE] {
                for position in 0..ring.len() {
                    canvas.clear();
                    canvas.set(ring, position, color);
                    canvas.flush();
                    self.delay.delay_ms(step);
                }
            }
        }

        for ring in Ring::ALL {
            canvas.fill(ring, colors::WHITE);
        }
        canvas.flush();
        self.delay.delay_ms(step.saturating_mul(20));

        canvas.clear();
        canvas.flush();

        #[cfg(feature = "defmt")]
        defmt::info!("self-test finished");
    }
}
