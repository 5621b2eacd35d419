//! Inbound event port
//!
//! The host UI layer owns gesture recognition and scroll delivery; the
//! coordinator only consumes the signals enumerated here. Any delivery
//! mechanism works as long as events of one gesture arrive in order and
//! each handler runs to completion before the next event.

use crate::geometry::ScrollSample;

/// Phases of a continuous pan gesture
///
/// `Cancelled` is handled identically to `Ended`; there is no other
/// cancellation concept in the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A pan-gesture event with its phase-specific payload
///
/// `Began`/`Changed` carry the scroll sample taken at the moment of the
/// gesture callback. `Ended`/`Cancelled` carry the release velocity along
/// the scroll axis in units per second (positive = upward flick); the
/// velocity is consumed once by the snap decision and discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Began { sample: ScrollSample },
    Changed { sample: ScrollSample },
    Ended { velocity: f32 },
    Cancelled { velocity: f32 },
}

impl PanEvent {
    pub fn phase(&self) -> GesturePhase {
        match self {
            PanEvent::Began { .. } => GesturePhase::Began,
            PanEvent::Changed { .. } => GesturePhase::Changed,
            PanEvent::Ended { .. } => GesturePhase::Ended,
            PanEvent::Cancelled { .. } => GesturePhase::Cancelled,
        }
    }
}

/// Host lifecycle signals that force the chrome fully open
///
/// `Appeared`/`Disappeared` bracket the consuming view's attachment;
/// `Resumed` is the process-wide activation notification, handled the same
/// as a manual expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Appeared,
    Disappeared,
    Resumed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ScrollGeometry, ScrollSample};

    #[test]
    fn test_phase_extraction() {
        let sample = ScrollSample::new(0.0, ScrollGeometry::uninset(100.0, 10.0));
        assert_eq!(PanEvent::Began { sample }.phase(), GesturePhase::Began);
        assert_eq!(PanEvent::Changed { sample }.phase(), GesturePhase::Changed);
        assert_eq!(PanEvent::Ended { velocity: 1.0 }.phase(), GesturePhase::Ended);
        assert_eq!(
            PanEvent::Cancelled { velocity: 1.0 }.phase(),
            GesturePhase::Cancelled
        );
    }
}
