//! Flashcard controller
//!
//! Owns the session state and the run/stop state machine. Intents that are
//! not allowed in the current state are dropped without error.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::{ColorId, LanguageId};
use crate::scheduler::{Schedule, Scheduler};
use crate::session::{clamp_frequency, SessionState};
use crate::tts::SpeechOutput;

pub struct FlashcardController {
    state: SessionState,
    scheduler: Scheduler,
    speech: Arc<dyn SpeechOutput>,
    rng: StdRng,
}

impl std::fmt::Debug for FlashcardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashcardController")
            .field("state", &self.state)
            .field("scheduler", &self.scheduler)
            .finish()
    }
}

impl FlashcardController {
    pub fn new(speech: Arc<dyn SpeechOutput>) -> Self {
        Self::with_rng(speech, StdRng::from_entropy())
    }

    pub fn with_rng(speech: Arc<dyn SpeechOutput>, rng: StdRng) -> Self {
        Self {
            state: SessionState::default(),
            scheduler: Scheduler::new(),
            speech,
            rng,
        }
    }

    /// Snapshot for rendering
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The armed cycle timer, if running
    pub fn schedule(&self) -> Option<Schedule> {
        self.scheduler.current()
    }

    /// Allowed at any time. While running, the run restarts in the new
    /// language: speech is cancelled, a new color is drawn right away and the
    /// timer is re-armed.
    pub fn select_language(&mut self, language: LanguageId) {
        if self.state.selected_language == language {
            return;
        }
        info!("🌐 Language: {}", language.label());
        self.state.selected_language = language;

        if self.state.is_running {
            self.restart();
        }
    }

    pub fn toggle_color_active(&mut self, color: ColorId) {
        if self.state.is_running {
            debug!("Ignoring toggle of {:?} while running", color);
            return;
        }
        self.state.toggle_active(color);
        debug!("{:?} active: {}", color, self.state.is_active(color));
    }

    pub fn set_frequency(&mut self, seconds: f64) {
        if self.state.is_running {
            debug!("Ignoring frequency change while running");
            return;
        }
        match clamp_frequency(seconds) {
            Some(seconds) => self.state.frequency_secs = seconds,
            None => debug!("Ignoring invalid frequency {}", seconds),
        }
    }

    pub fn toggle_run(&mut self) {
        if self.state.is_running {
            self.stop();
            return;
        }
        if !self.state.any_active() {
            debug!("Not starting: no active colors");
            return;
        }

        info!("▶️ Starting run every {:.1}s", self.state.frequency_secs);
        self.state.is_running = true;
        self.cycle();
        // The first cycle may have stopped the run
        if self.state.is_running {
            self.arm();
        }
    }

    /// Pick a random active color, show it and speak it.
    ///
    /// Stops the run instead when no color is active.
    pub fn cycle(&mut self) -> Option<ColorId> {
        let active: Vec<ColorId> = self.state.active_colors().collect();
        let Some(&color) = active.choose(&mut self.rng) else {
            info!("⏹️ No active colors, stopping");
            self.stop();
            return None;
        };

        self.state.current_color = color;
        let language = self.state.selected_language;
        let name = color.name(language);
        debug!("🎨 {} ({})", name, language.locale());
        self.speech.speak(name, language.locale());
        Some(color)
    }

    /// Handle a timer tick. Returns whether a cycle ran.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if !self.state.is_running || !self.scheduler.accepts(generation) {
            debug!("Dropping stale tick (generation {})", generation);
            return false;
        }
        self.cycle();
        true
    }

    /// Teardown: stop the run so no tick or speech outlives the session.
    pub fn shutdown(&mut self) {
        if self.state.is_running {
            self.stop();
        }
    }

    fn arm(&mut self) {
        let period = Duration::from_secs_f64(self.state.frequency_secs);
        let schedule = self.scheduler.arm(period);
        debug!(
            "⏱️ Timer armed (generation {}, {:?})",
            schedule.generation, period
        );
    }

    /// Disarm and silence, then cycle and arm again as on start
    fn restart(&mut self) {
        self.scheduler.disarm();
        self.speech.cancel();
        self.cycle();
        if self.state.is_running {
            self.arm();
        }
    }

    fn stop(&mut self) {
        info!("⏹️ Run stopped");
        self.state.is_running = false;
        self.scheduler.disarm();
        self.speech.cancel();
    }
}

impl Drop for FlashcardController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
