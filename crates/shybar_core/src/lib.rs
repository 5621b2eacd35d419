//! Shybar Core
//!
//! This crate provides the scroll-to-chrome translation at the heart of
//! shybar:
//!
//! - **Delta Tracking**: clamped positional deltas from consecutive,
//!   boundary-crossing scroll offsets
//! - **Visibility State Machine**: `Open`/`Closed`/`Contracting`/
//!   `Expanding`, re-derived from the controller's reported position
//! - **Snap Decisions**: finish opening or closing the chrome on gesture
//!   release, based on velocity and motion state
//!
//! # Example
//!
//! ```rust
//! use shybar_core::{
//!     ChromeState, PanEvent, PositionController, ScrollCoordinator, ScrollGeometry,
//!     ScrollSample,
//! };
//!
//! fn on_pan<C: PositionController>(
//!     coordinator: &mut ScrollCoordinator,
//!     chrome: &mut C,
//!     offset: f32,
//! ) {
//!     let sample = ScrollSample::new(offset, ScrollGeometry::uninset(4000.0, 600.0));
//!     coordinator.handle_pan(chrome, PanEvent::Changed { sample });
//!     if coordinator.state() == ChromeState::Contracting {
//!         // chrome is on its way out
//!     }
//! }
//! ```

pub mod config;
pub mod controller;
pub mod coordinator;
pub mod events;
pub mod geometry;
pub mod state;

pub use config::{ConfigError, CoordinatorConfig};
pub use controller::PositionController;
pub use coordinator::ScrollCoordinator;
pub use events::{GesturePhase, HostEvent, PanEvent};
pub use geometry::{EdgeInsets, Point, ScrollGeometry, ScrollSample};
pub use state::ChromeState;
