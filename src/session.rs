//! Session state for the flashcard screen
//!
//! The only mutable data in the app. Owned by the controller; the GUI reads it
//! to render and never writes to it.

use crate::catalog::{ColorId, LanguageId};

pub const MIN_FREQUENCY_SECS: f64 = 0.1;
pub const MAX_FREQUENCY_SECS: f64 = 5.0;
pub const DEFAULT_FREQUENCY_SECS: f64 = 2.0;

/// Clamp a requested cycle interval into the allowed range.
///
/// Returns `None` for NaN or infinite input.
pub fn clamp_frequency(seconds: f64) -> Option<f64> {
    if !seconds.is_finite() {
        return None;
    }
    Some(seconds.clamp(MIN_FREQUENCY_SECS, MAX_FREQUENCY_SECS))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub(crate) current_color: ColorId,
    pub(crate) is_running: bool,
    pub(crate) frequency_secs: f64,
    pub(crate) selected_language: LanguageId,
    /// One flag per catalog color, indexed by `ColorId::index`
    pub(crate) active_colors: [bool; ColorId::COUNT],
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_color: ColorId::ALL[0],
            is_running: false,
            frequency_secs: DEFAULT_FREQUENCY_SECS,
            selected_language: LanguageId::default(),
            active_colors: [true; ColorId::COUNT],
        }
    }
}

impl SessionState {
    pub fn current_color(&self) -> ColorId {
        self.current_color
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn frequency_secs(&self) -> f64 {
        self.frequency_secs
    }

    pub fn selected_language(&self) -> LanguageId {
        self.selected_language
    }

    pub fn is_active(&self, color: ColorId) -> bool {
        self.active_colors[color.index()]
    }

    /// Active colors in catalog order
    pub fn active_colors(&self) -> impl Iterator<Item = ColorId> + '_ {
        ColorId::ALL
            .into_iter()
            .filter(|color| self.is_active(*color))
    }

    pub fn any_active(&self) -> bool {
        self.active_colors.iter().any(|active| *active)
    }

    /// Name of the current color in the selected language
    pub fn current_name(&self) -> &'static str {
        self.current_color.name(self.selected_language)
    }

    pub(crate) fn toggle_active(&mut self, color: ColorId) {
        let flag = &mut self.active_colors[color.index()];
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let state = SessionState::default();
        assert_eq!(state.current_color(), ColorId::Red);
        assert!(!state.is_running());
        assert_eq!(state.frequency_secs(), 2.0);
        assert_eq!(state.selected_language(), LanguageId::French);
        assert_eq!(state.active_colors().count(), 5);
        assert_eq!(state.current_name(), "rouge");
    }

    #[test]
    fn test_clamp_frequency() {
        assert_eq!(clamp_frequency(7.0), Some(5.0));
        assert_eq!(clamp_frequency(0.0001), Some(0.1));
        assert_eq!(clamp_frequency(1.5), Some(1.5));
        assert_eq!(clamp_frequency(f64::NAN), None);
        assert_eq!(clamp_frequency(f64::INFINITY), None);
    }

    #[test]
    fn test_toggle_active() {
        let mut state = SessionState::default();
        state.toggle_active(ColorId::Blue);
        assert!(!state.is_active(ColorId::Blue));
        assert!(state.any_active());

        for color in ColorId::ALL {
            if state.is_active(color) {
                state.toggle_active(color);
            }
        }
        assert!(!state.any_active());
        assert_eq!(state.active_colors().count(), 0);
    }
}
