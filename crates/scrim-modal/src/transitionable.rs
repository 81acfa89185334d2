use std::time::Duration;

/// Which way a modal transition is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Presenting,
    Dismissing,
}

/// Sensible default values for surfaces that do not declare their own.
pub mod defaults {
    use std::time::Duration;

    pub const DIMMING_OPACITY: f32 = 0.5;
    pub const PRESENTATION_DURATION: Duration = Duration::from_millis(250);
    pub const DISMISSAL_DURATION: Duration = Duration::from_millis(125);

    /// Fallbacks used when the presented surface does not implement
    /// [`Transitionable`](super::Transitionable) at all.
    pub const ALERT_DIMMING_FALLBACK: f32 = 0.25;
    pub const SHEET_DIMMING_FALLBACK: f32 = 0.125;

    /// Sheets move a short distance, so both phases default to the quick
    /// dismissal timing.
    pub const SHEET_PRESENTATION_DURATION: Duration = Duration::from_millis(125);
    pub const SHEET_DISMISSAL_DURATION: Duration = Duration::from_millis(125);
}

/// Optional capability of a presented surface: declare your own dimming
/// opacity and per-phase timing instead of the per-style defaults.
///
/// The transition infrastructure never requires this; any surface that skips
/// it gets the hard-coded per-style fallbacks.
pub trait Transitionable {
    fn dimming_opacity(&self) -> f32 {
        defaults::DIMMING_OPACITY
    }

    fn presentation_duration(&self) -> Duration {
        defaults::PRESENTATION_DURATION
    }

    fn dismissal_duration(&self) -> Duration {
        defaults::DISMISSAL_DURATION
    }

    fn transition_duration(&self, phase: TransitionPhase) -> Duration {
        match phase {
            TransitionPhase::Presenting => self.presentation_duration(),
            TransitionPhase::Dismissing => self.dismissal_duration(),
        }
    }
}
