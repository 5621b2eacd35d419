//! Chrome visibility state
//!
//! The coordinator keeps a coarse, observable label for the chrome's
//! current motion. Direction labels (`Contracting`/`Expanding`) are
//! provisional, set from the most recent above-epsilon delta; the settled
//! labels (`Open`/`Closed`) overwrite them whenever the controller reports
//! a position exactly at one of its extremes.

/// Visibility state of the chrome element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChromeState {
    /// Fully visible, position at the open extreme
    #[default]
    Open,
    /// Fully hidden, position at the closed extreme
    Closed,
    /// Moving toward hidden (last delta was negative)
    Contracting,
    /// Moving toward visible (last delta was positive)
    Expanding,
}

impl ChromeState {
    /// True for the extreme-position labels
    pub fn is_settled(&self) -> bool {
        matches!(self, ChromeState::Open | ChromeState::Closed)
    }

    /// True for the transient direction labels
    pub fn is_in_motion(&self) -> bool {
        !self.is_settled()
    }

    /// Provisional direction label for a positional delta
    ///
    /// Deltas at or below the noise floor produce no label; they are still
    /// applied to the controller, just never classified.
    pub fn from_delta(delta: f32, epsilon: f32) -> Option<ChromeState> {
        if delta.abs() <= epsilon {
            return None;
        }
        if delta < 0.0 {
            Some(ChromeState::Contracting)
        } else {
            Some(ChromeState::Expanding)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_default_is_open() {
        assert_eq!(ChromeState::default(), ChromeState::Open);
    }

    #[test]
    fn test_settled_vs_motion() {
        assert!(ChromeState::Open.is_settled());
        assert!(ChromeState::Closed.is_settled());
        assert!(ChromeState::Contracting.is_in_motion());
        assert!(ChromeState::Expanding.is_in_motion());
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(
            ChromeState::from_delta(-10.0, EPS),
            Some(ChromeState::Contracting)
        );
        assert_eq!(
            ChromeState::from_delta(0.25, EPS),
            Some(ChromeState::Expanding)
        );
    }

    #[test]
    fn test_noise_floor_produces_no_label() {
        assert_eq!(ChromeState::from_delta(0.0, EPS), None);
        assert_eq!(ChromeState::from_delta(5e-6, EPS), None);
        assert_eq!(ChromeState::from_delta(-5e-6, EPS), None);
        // Exactly at the floor is still noise
        assert_eq!(ChromeState::from_delta(EPS, EPS), None);
    }
}
