//! Geometry types for scroll tracking
//!
//! Scroll samples are ephemeral: the host re-derives one per scroll event
//! from its live scroll view, and the coordinator never retains more than
//! the previous offset scalar.

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
///
/// Extreme-position detection compares points with exact coordinate
/// equality, so positions must be written back verbatim by controllers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Leading/trailing insets reserved around scrollable content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        bottom: 0.0,
    };

    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Live geometry of the scrollable content, along the scroll axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    /// Total length of the content
    pub content_length: f32,
    /// Length of the visible frame
    pub visible_length: f32,
    /// Inset reserved at the leading (top) edge
    pub leading_inset: f32,
    /// Inset reserved at the trailing (bottom) edge
    pub trailing_inset: f32,
}

impl ScrollGeometry {
    pub const fn new(
        content_length: f32,
        visible_length: f32,
        leading_inset: f32,
        trailing_inset: f32,
    ) -> Self {
        Self {
            content_length,
            visible_length,
            leading_inset,
            trailing_inset,
        }
    }

    /// Geometry with no insets
    pub const fn uninset(content_length: f32, visible_length: f32) -> Self {
        Self::new(content_length, visible_length, 0.0, 0.0)
    }

    /// Length of the visible frame after insets are carved out
    pub fn inset_frame_length(&self) -> f32 {
        self.visible_length - self.leading_inset - self.trailing_inset
    }

    /// How far the content can scroll within the inset frame
    pub fn scrollable_length(&self) -> f32 {
        self.content_length - self.inset_frame_length()
    }

    /// Whether the content is long enough for scroll-driven chrome hiding
    ///
    /// Short content never hides the chrome: the scrollable length has to
    /// exceed `factor` visible frames before any cycle runs.
    pub fn is_sufficiently_long(&self, factor: f32) -> bool {
        self.scrollable_length() > self.visible_length * factor
    }

    pub fn is_finite(&self) -> bool {
        self.content_length.is_finite()
            && self.visible_length.is_finite()
            && self.leading_inset.is_finite()
            && self.trailing_inset.is_finite()
    }
}

/// One scroll-position sample: the current offset plus the content geometry
/// at the time of sampling
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Vertical content offset (grows as the user scrolls down)
    pub offset: f32,
    pub geometry: ScrollGeometry,
}

impl ScrollSample {
    pub const fn new(offset: f32, geometry: ScrollGeometry) -> Self {
        Self { offset, geometry }
    }

    /// Malformed samples (NaN/inf anywhere) skip the cycle instead of
    /// propagating a fault
    pub fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.geometry.is_finite()
    }

    /// The offset value at which the content is fully scrolled to top
    pub fn top_offset(&self) -> f32 {
        -self.geometry.leading_inset
    }

    /// Whether the sample is above the content top (rubber-banding);
    /// sitting exactly at the top does not count
    pub fn above_top(&self) -> bool {
        self.offset < self.top_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrollable_length_subtracts_insets() {
        let g = ScrollGeometry::new(2000.0, 600.0, 50.0, 30.0);
        assert_eq!(g.inset_frame_length(), 520.0);
        assert_eq!(g.scrollable_length(), 1480.0);
    }

    #[test]
    fn test_sufficiently_long_threshold() {
        // scrollable = 2000 - 500 = 1500, exactly 3x the frame: not enough
        let exact = ScrollGeometry::uninset(2000.0, 500.0);
        assert!(!exact.is_sufficiently_long(3.0));

        let long = ScrollGeometry::uninset(2001.0, 500.0);
        assert!(long.is_sufficiently_long(3.0));
    }

    #[test]
    fn test_nonfinite_sample_detected() {
        let g = ScrollGeometry::uninset(4000.0, 600.0);
        assert!(ScrollSample::new(10.0, g).is_finite());
        assert!(!ScrollSample::new(f32::NAN, g).is_finite());

        let bad = ScrollGeometry::new(f32::INFINITY, 600.0, 0.0, 0.0);
        assert!(!ScrollSample::new(10.0, bad).is_finite());
    }

    #[test]
    fn test_top_offset_tracks_leading_inset() {
        let g = ScrollGeometry::new(4000.0, 600.0, 64.0, 0.0);
        let at_top = ScrollSample::new(-64.0, g);
        assert_eq!(at_top.top_offset(), -64.0);
        assert!(!at_top.above_top());

        assert!(ScrollSample::new(-64.5, g).above_top());
        assert!(!ScrollSample::new(-63.0, g).above_top());
    }
}
