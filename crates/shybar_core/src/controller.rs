//! Position controller contract
//!
//! The coordinator never owns or places the chrome element. It pushes
//! clamped deltas and snap commands into a controller and reads back the
//! controller's position and extremes for state reclassification. The
//! controller clamps internally: the coordinator may forward deltas that
//! would overshoot, and repeated zero deltas must be no-ops.

use crate::geometry::Point;

/// Owns the chrome element's position between its two extremes
pub trait PositionController {
    /// Shift the current position by `delta`, clamped to the extremes.
    ///
    /// Negative deltas move toward closed, positive toward open. Must be
    /// idempotent for repeated zero deltas.
    fn move_by(&mut self, delta: f32);

    /// Jump to the fully closed (`true`) or fully open (`false`) extreme.
    ///
    /// Re-snapping while already at an extreme is allowed and must be an
    /// exact idempotent write.
    fn snap(&mut self, closed: bool);

    fn snap_open(&mut self) {
        self.snap(false);
    }

    fn snap_closed(&mut self) {
        self.snap(true);
    }

    fn is_fully_closed(&self) -> bool {
        self.position() == self.closed_extreme()
    }

    /// Current position of the chrome element
    fn position(&self) -> Point;

    /// Position when fully visible; compared with exact equality
    fn open_extreme(&self) -> Point;

    /// Position when fully hidden; compared with exact equality
    fn closed_extreme(&self) -> Point;

    /// Full extent of the chrome along the scroll axis, for hosts that
    /// reserve an inset for it
    fn total_extent(&self) -> f32;
}
