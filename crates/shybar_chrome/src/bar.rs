//! Hiding bar position controller
//!
//! A [`ChromeBar`] owns the center position of a bar docked to the top or
//! bottom edge of its container and keeps it between the fully open and
//! fully closed extremes. The coordinator pushes clamped deltas and snap
//! commands into it; the host reads the position back (or registers a
//! settle observer) to place the actual view.
//!
//! Snapping is synchronous: the controller jumps to the extreme and fires
//! its settle observers immediately. Hosts that animate interpolate
//! between the previous and new positions themselves.

use smallvec::SmallVec;

use shybar_core::{Point, PositionController};

/// Which container edge the bar is docked to
///
/// A top bar contracts upward off-screen, a bottom bar contracts
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChromeEdge {
    Top,
    #[default]
    Bottom,
}

/// Callback invoked when the bar settles at an extreme
pub type SettleObserver = Box<dyn FnMut(Point) + Send>;

/// Position controller for a tab-bar-style chrome element
pub struct ChromeBar {
    edge: ChromeEdge,
    width: f32,
    height: f32,
    /// Extent of the container along the scroll axis
    container_extent: f32,
    position: Point,
    settle_observers: SmallVec<[SettleObserver; 2]>,
}

impl std::fmt::Debug for ChromeBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeBar")
            .field("edge", &self.edge)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("container_extent", &self.container_extent)
            .field("position", &self.position)
            .field("observers", &self.settle_observers.len())
            .finish()
    }
}

impl ChromeBar {
    /// Create a bar at its fully open position
    pub fn new(edge: ChromeEdge, width: f32, height: f32, container_extent: f32) -> Self {
        let mut bar = Self {
            edge,
            width,
            height,
            container_extent,
            position: Point::ZERO,
            settle_observers: SmallVec::new(),
        };
        bar.position = bar.open_extreme();
        bar
    }

    /// Register a callback fired whenever the bar settles at an extreme
    pub fn on_settle<F: FnMut(Point) + Send + 'static>(&mut self, observer: F) {
        self.settle_observers.push(Box::new(observer));
    }

    /// How far the bar has traveled toward closed, 0.0 (open) to 1.0
    /// (closed); hosts use this to tween alpha alongside position
    pub fn closed_fraction(&self) -> f32 {
        let open = self.open_extreme().y;
        let closed = self.closed_extreme().y;
        let travel = closed - open;
        if travel == 0.0 {
            return 0.0;
        }
        ((self.position.y - open) / travel).clamp(0.0, 1.0)
    }

    /// Update the container extent, preserving the bar's travel fraction
    pub fn set_container_extent(&mut self, container_extent: f32) {
        let fraction = self.closed_fraction();
        self.container_extent = container_extent;
        self.reposition(fraction);
    }

    /// Update the bar's own size, preserving the travel fraction
    pub fn set_bar_size(&mut self, width: f32, height: f32) {
        let fraction = self.closed_fraction();
        self.width = width;
        self.height = height;
        self.reposition(fraction);
    }

    fn reposition(&mut self, fraction: f32) {
        let open = self.open_extreme();
        let closed = self.closed_extreme();
        self.position = Point::new(open.x, open.y + (closed.y - open.y) * fraction);
    }

    /// Bounds of the bar's vertical travel as (min, max)
    fn travel_bounds(&self) -> (f32, f32) {
        let open = self.open_extreme().y;
        let closed = self.closed_extreme().y;
        (open.min(closed), open.max(closed))
    }
}

impl PositionController for ChromeBar {
    fn move_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }

        // Negative deltas move toward closed: downward for a bottom bar,
        // upward for a top bar
        let step = match self.edge {
            ChromeEdge::Top => delta,
            ChromeEdge::Bottom => -delta,
        };
        let (min, max) = self.travel_bounds();
        self.position.y = (self.position.y + step).clamp(min, max);
    }

    fn snap(&mut self, closed: bool) {
        self.position = if closed {
            self.closed_extreme()
        } else {
            self.open_extreme()
        };
        tracing::debug!(
            "chrome bar snapped {} at y={:.1}",
            if closed { "closed" } else { "open" },
            self.position.y
        );
        for observer in self.settle_observers.iter_mut() {
            observer(self.position);
        }
    }

    fn position(&self) -> Point {
        self.position
    }

    fn open_extreme(&self) -> Point {
        let x = self.width / 2.0;
        match self.edge {
            ChromeEdge::Top => Point::new(x, self.height / 2.0),
            ChromeEdge::Bottom => Point::new(x, self.container_extent - self.height / 2.0),
        }
    }

    fn closed_extreme(&self) -> Point {
        let x = self.width / 2.0;
        match self.edge {
            ChromeEdge::Top => Point::new(x, -self.height / 2.0),
            ChromeEdge::Bottom => Point::new(x, self.container_extent + self.height / 2.0),
        }
    }

    fn total_extent(&self) -> f32 {
        self.height
    }
}
