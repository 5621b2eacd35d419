//! Scroll state coordinator
//!
//! Consumes scroll-position samples and pan-gesture phases, produces
//! clamped position deltas and snap decisions for a [`PositionController`].
//!
//! Per-sample flow: compute a delta against the previous accepted offset,
//! clamp it at the content boundaries so rubber-banding never moves the
//! chrome, push it into the controller, then re-derive the visibility
//! state from the controller's reported position. Gesture begin/end
//! bracket that flow: begin primes the tracker, end feeds the release
//! velocity into the snap decision.
//!
//! Everything runs single-threaded and to completion; no event handler
//! blocks, suspends, or fails.

use crate::config::{ConfigError, CoordinatorConfig};
use crate::controller::PositionController;
use crate::events::{HostEvent, PanEvent};
use crate::geometry::ScrollSample;
use crate::state::ChromeState;

/// Translates scroll motion into chrome visibility
///
/// The coordinator owns only its tracking bookkeeping. It never owns the
/// chrome element or its controller: every operation that moves the chrome
/// borrows the controller for the duration of that one event.
#[derive(Debug)]
pub struct ScrollCoordinator {
    config: CoordinatorConfig,
    state: ChromeState,
    /// Offset of the last accepted sample; `None` whenever no continuous
    /// gesture is being tracked, so the first sample after any discrete
    /// state change primes the tracker instead of producing a delta
    previous_offset: Option<f32>,
    /// Leading inset captured at gesture begin; `-top_inset` is the offset
    /// treated as "fully scrolled to top" for the leading clamp
    top_inset: f32,
    /// Set while a host geometry refresh is in progress, so self-inflicted
    /// inset changes never feed back into scroll handling
    refreshing_geometry: bool,
    /// Whether the consuming view is currently attached
    visible: bool,
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self {
            config: CoordinatorConfig::default(),
            state: ChromeState::Open,
            previous_offset: None,
            top_inset: 0.0,
            refreshing_geometry: false,
            visible: true,
        }
    }

    /// Create a coordinator with custom tuning constants
    pub fn with_config(config: CoordinatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Current visibility state of the chrome
    pub fn state(&self) -> ChromeState {
        self.state
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Whether the consuming view is currently attached
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last accepted offset, `None` while no gesture is being tracked
    pub fn previous_offset(&self) -> Option<f32> {
        self.previous_offset
    }

    // ─────────────────────────────────────────────────────────────────────
    // Gesture lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Feed one pan-gesture event
    ///
    /// `Began` captures the leading inset for the gesture's duration,
    /// drops any stale tracking, and primes the tracker. `Changed` runs
    /// one scroll-handling cycle. `Ended`/`Cancelled` run the snap
    /// decision with the release velocity and no scroll-handling cycle.
    pub fn handle_pan<C: PositionController>(&mut self, controller: &mut C, event: PanEvent) {
        match event {
            PanEvent::Began { sample } => {
                if sample.geometry.is_finite() {
                    self.top_inset = sample.geometry.leading_inset;
                }
                self.previous_offset = None;
                self.handle_scroll(controller, &sample);
            }
            PanEvent::Changed { sample } => {
                self.handle_scroll(controller, &sample);
            }
            PanEvent::Ended { velocity } | PanEvent::Cancelled { velocity } => {
                self.handle_release(controller, velocity);
            }
        }
    }

    /// Run one scroll-handling cycle for a fresh sample
    ///
    /// No-ops when the preconditions say scroll motion should not affect
    /// the chrome; otherwise applies the clamped delta and re-derives the
    /// visibility state from the controller.
    pub fn handle_scroll<C: PositionController>(
        &mut self,
        controller: &mut C,
        sample: &ScrollSample,
    ) {
        if !sample.is_finite() {
            // Malformed geometry: drop tracking rather than compare
            // offsets across it
            self.previous_offset = None;
            return;
        }
        if !self.should_handle(sample) {
            return;
        }

        if let Some(previous) = self.previous_offset {
            let delta = self.clamped_delta(previous, sample);

            if let Some(direction) = ChromeState::from_delta(delta, self.config.delta_epsilon) {
                self.state = direction;
            }

            tracing::trace!(
                "scroll offset {:.2} -> {:.2}, delta={:.4}, state={:?}",
                previous,
                sample.offset,
                delta,
                self.state
            );
            controller.move_by(delta);
        }

        self.previous_offset = Some(sample.offset);

        // Settled labels win over direction labels once the chrome has
        // actually reached an extreme
        let position = controller.position();
        if position == controller.open_extreme() {
            self.state = ChromeState::Open;
        } else if position == controller.closed_extreme() {
            self.state = ChromeState::Closed;
        }
    }

    /// Delta between consecutive offsets, reduced at the content
    /// boundaries so over-scroll never moves the chrome
    fn clamped_delta(&self, previous: f32, sample: &ScrollSample) -> f32 {
        let mut delta = previous - sample.offset;

        // Leading edge: rubber-banding above the top may only keep the
        // chrome where it is or contract it, never expand past the clamp
        let start = -self.top_inset;
        if previous < start {
            delta = (delta - previous + start).min(0.0);
        }

        // Trailing edge: the slack absorbs floating-point jitter in
        // offsets reported near the content bottom
        let geometry = &sample.geometry;
        let end = (geometry.content_length - geometry.visible_length + geometry.trailing_inset
            - self.config.trailing_slack)
            .floor();
        if previous > end {
            delta = (delta - previous + end).max(0.0);
        }

        delta
    }

    /// Preconditions for a scroll-handling cycle
    fn should_handle(&self, sample: &ScrollSample) -> bool {
        // A resting rubber-band above the top never contracts an open
        // chrome
        if sample.above_top() && self.state == ChromeState::Open {
            return false;
        }

        self.visible
            && sample
                .geometry
                .is_sufficiently_long(self.config.min_scrollable_factor)
            && !self.refreshing_geometry
    }

    /// Snap decision at gesture release
    ///
    /// A release during motion finishes that motion; a release faster than
    /// the velocity threshold always opens, even when the chrome already
    /// sits at an extreme (the re-snap is an idempotent write). A release
    /// at a settled extreme below the threshold leaves the chrome alone.
    fn handle_release<C: PositionController>(&mut self, controller: &mut C, velocity: f32) {
        let threshold = self.config.snap_velocity_threshold;
        if !self.visible || (controller.is_fully_closed() && velocity < threshold) {
            return;
        }

        if self.state.is_in_motion() || velocity > threshold {
            let mut contracting = self.state == ChromeState::Contracting;
            if velocity > threshold {
                // A fast upward flick always opens
                contracting = false;
            }

            tracing::debug!(
                "gesture release velocity={:.0}, state={:?}, snapping {}",
                velocity,
                self.state,
                if contracting { "closed" } else { "open" }
            );
            controller.snap(contracting);
            self.previous_offset = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Discrete entry points
    // ─────────────────────────────────────────────────────────────────────

    /// Force full expansion, then resynchronize against a fresh sample
    pub fn expand<C: PositionController>(&mut self, controller: &mut C, sample: &ScrollSample) {
        controller.snap_open();
        self.previous_offset = None;
        self.handle_scroll(controller, sample);
    }

    /// Force full contraction, then resynchronize against a fresh sample
    pub fn contract<C: PositionController>(&mut self, controller: &mut C, sample: &ScrollSample) {
        controller.snap_closed();
        self.previous_offset = None;
        self.handle_scroll(controller, sample);
    }

    /// Feed one host lifecycle event
    ///
    /// Appearance, disappearance, and process resume all force the chrome
    /// fully open; disappearance additionally detaches the coordinator so
    /// later scroll and release events are ignored until reappearance.
    pub fn handle_host<C: PositionController>(
        &mut self,
        controller: &mut C,
        event: HostEvent,
        sample: &ScrollSample,
    ) {
        tracing::debug!("host event {:?}", event);
        match event {
            HostEvent::Appeared => {
                self.visible = true;
                self.expand(controller, sample);
            }
            HostEvent::Disappeared => {
                self.expand(controller, sample);
                self.visible = false;
            }
            HostEvent::Resumed => {
                self.expand(controller, sample);
            }
        }
    }

    /// Run a host geometry update with the re-entrancy guard set
    ///
    /// Inset changes made by the host can echo back as scroll callbacks;
    /// any cycle attempted from inside the closure is a silent no-op.
    pub fn refresh_geometry<C, R, F>(&mut self, controller: &mut C, host_update: F) -> R
    where
        C: PositionController,
        F: FnOnce(&mut Self, &mut C) -> R,
    {
        self.refreshing_geometry = true;
        let result = host_update(self, controller);
        self.refreshing_geometry = false;
        result
    }
}
