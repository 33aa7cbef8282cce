//! Playback state for the trace TUI.

use std::time::Instant;

use crate::config::ScenarioConfig;
use crate::sim::types::{Sample, SimError};

/// Samples revealed per playback tick.
const SAMPLES_PER_TICK: usize = 4;

/// Tick interval options in milliseconds (slowest → fastest).
const SPEED_LEVELS_MS: [u64; 6] = [500, 250, 100, 50, 20, 5];

/// Default speed index (100 ms).
const DEFAULT_SPEED_IDX: usize = 2;

/// TUI application state.
///
/// The whole trace is computed once at construction (the run is cheap and
/// deterministic); playback just advances a cursor over it, so the UI can
/// never diverge from what the CLI printed or exported.
pub struct App {
    /// Current scenario configuration (kept for restart/preset switch).
    scenario: ScenarioConfig,
    /// Complete precomputed trace.
    pub trace: Vec<Sample>,
    /// Number of samples currently revealed.
    pub cursor: usize,
    /// Whether playback is paused.
    pub paused: bool,
    /// Current index into `SPEED_LEVELS_MS`.
    pub speed_idx: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// When the last playback tick was executed.
    pub last_tick: Instant,
    /// Name of the active preset.
    pub preset_name: String,
}

impl App {
    /// Creates an app from a validated scenario, running the full trace.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if the scenario fails the
    /// engine's fail-fast checks.
    pub fn new(scenario: ScenarioConfig, preset: &str) -> Result<Self, SimError> {
        let trace = scenario.build()?.run();
        Ok(Self {
            scenario,
            trace,
            cursor: 0,
            paused: false,
            speed_idx: DEFAULT_SPEED_IDX,
            quit: false,
            last_tick: Instant::now(),
            preset_name: preset.to_string(),
        })
    }

    /// Advances playback by a few samples if not finished.
    pub fn tick(&mut self) {
        self.cursor = (self.cursor + SAMPLES_PER_TICK).min(self.trace.len());
    }

    /// The revealed prefix of the trace.
    pub fn visible(&self) -> &[Sample] {
        &self.trace[..self.cursor]
    }

    /// Toggles pause/resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Increases playback speed (shorter tick interval).
    pub fn speed_up(&mut self) {
        if self.speed_idx + 1 < SPEED_LEVELS_MS.len() {
            self.speed_idx += 1;
        }
    }

    /// Decreases playback speed (longer tick interval).
    pub fn speed_down(&mut self) {
        if self.speed_idx > 0 {
            self.speed_idx -= 1;
        }
    }

    /// Returns the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        SPEED_LEVELS_MS[self.speed_idx]
    }

    /// Switches to a different preset, recomputing the trace.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        let Ok(mut engine) = scenario.build() else {
            return;
        };
        self.trace = engine.run();
        self.scenario = scenario;
        self.cursor = 0;
        self.paused = false;
        self.preset_name = name.to_string();
    }

    /// Restarts playback of the current trace from the beginning.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.paused = false;
    }

    /// Returns the latest revealed SoC (or the configured initial SoC).
    pub fn soc_percent(&self) -> f64 {
        self.visible()
            .last()
            .map_or(self.scenario.battery.initial_soc_percent, |s| {
                s.soc_percent
            })
    }

    /// OCV bounds for the fixed voltage-panel axis.
    pub fn ocv_bounds(&self) -> (f64, f64) {
        (self.scenario.battery.ocv_min_v, self.scenario.battery.ocv_max_v)
    }

    /// Total simulated duration for the fixed time axis.
    pub fn duration_hours(&self) -> f64 {
        self.scenario.simulation.duration_hours
    }

    /// Returns `true` when every sample has been revealed.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.trace.len()
    }

    /// Returns the most recent revealed sample, if any.
    pub fn last_sample(&self) -> Option<&Sample> {
        self.visible().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(ScenarioConfig::baseline(), "baseline").expect("baseline should build")
    }

    #[test]
    fn app_creates_and_ticks() {
        let mut app = app();
        assert_eq!(app.cursor, 0);
        assert!(!app.is_finished());
        assert_eq!(app.trace.len(), 601);

        app.tick();
        assert!(app.cursor > 0);
        assert_eq!(app.visible().len(), app.cursor);
    }

    #[test]
    fn app_finishes_and_further_ticks_are_noops() {
        let mut app = app();
        while !app.is_finished() {
            app.tick();
        }
        assert_eq!(app.cursor, app.trace.len());
        app.tick();
        assert_eq!(app.cursor, app.trace.len());
    }

    #[test]
    fn speed_controls_stay_in_bounds() {
        let mut app = app();

        for _ in 0..10 {
            app.speed_down();
        }
        assert_eq!(app.speed_idx, 0);

        for _ in 0..10 {
            app.speed_up();
        }
        assert_eq!(app.speed_idx, SPEED_LEVELS_MS.len() - 1);
    }

    #[test]
    fn switch_preset_resets_playback() {
        let mut app = app();
        app.tick();
        app.tick();

        app.switch_preset("fast_charge");
        assert_eq!(app.cursor, 0);
        assert_eq!(app.preset_name, "fast_charge");
        assert!(!app.trace.is_empty());
    }

    #[test]
    fn switch_to_unknown_preset_is_ignored() {
        let mut app = app();
        app.tick();
        let before = app.cursor;
        app.switch_preset("nonexistent");
        assert_eq!(app.cursor, before);
        assert_eq!(app.preset_name, "baseline");
    }

    #[test]
    fn restart_rewinds_without_recompute() {
        let mut app = app();
        for _ in 0..5 {
            app.tick();
        }
        app.restart();
        assert_eq!(app.cursor, 0);
        assert!(!app.paused);
    }

    #[test]
    fn soc_before_first_tick_is_configured_initial() {
        let app = app();
        assert_eq!(app.soc_percent(), 80.0);
    }

    #[test]
    fn toggle_pause() {
        let mut app = app();
        assert!(!app.paused);
        app.toggle_pause();
        assert!(app.paused);
        app.toggle_pause();
        assert!(!app.paused);
    }
}
