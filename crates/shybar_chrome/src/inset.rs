//! Reserved-inset bookkeeping
//!
//! Hosts carve insets out of their scroll view so content and scroll
//! indicators clear the header and the chrome. The bottom reservation
//! follows the chrome: a fully closed bar reserves nothing.
//!
//! Applying these values to a scroll view is host work and can echo back
//! as scroll callbacks; wrap it in
//! [`ScrollCoordinator::refresh_geometry`](shybar_core::ScrollCoordinator::refresh_geometry)
//! so the echo does not feed the delta tracker.

use shybar_core::{EdgeInsets, PositionController};

/// Insets the host should reserve around its scrollable content
pub fn reserved_insets<C: PositionController>(header_extent: f32, chrome: &C) -> EdgeInsets {
    let bottom = if chrome.is_fully_closed() {
        0.0
    } else {
        chrome.total_extent()
    };
    EdgeInsets::new(header_extent, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::{ChromeBar, ChromeEdge};

    #[test]
    fn test_open_bar_reserves_its_extent() {
        let bar = ChromeBar::new(ChromeEdge::Bottom, 600.0, 50.0, 800.0);
        assert_eq!(reserved_insets(64.0, &bar), EdgeInsets::new(64.0, 50.0));
    }

    #[test]
    fn test_partially_hidden_bar_still_reserves() {
        let mut bar = ChromeBar::new(ChromeEdge::Bottom, 600.0, 50.0, 800.0);
        bar.move_by(-20.0);
        assert_eq!(reserved_insets(64.0, &bar).bottom, 50.0);
    }

    #[test]
    fn test_closed_bar_reserves_nothing() {
        let mut bar = ChromeBar::new(ChromeEdge::Bottom, 600.0, 50.0, 800.0);
        bar.snap_closed();
        assert_eq!(reserved_insets(64.0, &bar), EdgeInsets::new(64.0, 0.0));
    }
}
