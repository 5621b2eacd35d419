//! Shybar Chrome
//!
//! Concrete chrome for the shybar coordinator:
//!
//! - **ChromeBar**: position controller for a bar docked to the top or
//!   bottom container edge, with clamped travel between its extremes,
//!   synchronous snapping, and settle observers
//! - **Inset bookkeeping**: the scroll-view insets a host should reserve
//!   for header and chrome

pub mod bar;
pub mod inset;

pub use bar::{ChromeBar, ChromeEdge, SettleObserver};
pub use inset::reserved_insets;
