//! Border trait definitions
//!
//! This module contains the value types describing a single border side as
//! resolved by the upstream style pass: line style, nominal width, color,
//! corner radii at the segment's two ends, and the rendering mode that
//! decides how much of the width straddles the area edge. Everything the
//! merge pass compares lives here.

use crate::color::Rgba;

/// Border line style
///
/// Reference: XSL 1.1, Common Border, Padding, and Background Properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
  None,
  Hidden,
  Solid,
  Dashed,
  Dotted,
  Double,
  Groove,
  Ridge,
  Inset,
  Outset,
}

impl BorderStyle {
  /// Returns true if the border would paint (non-none/hidden)
  pub fn paints(self) -> bool {
    !matches!(self, BorderStyle::None | BorderStyle::Hidden)
  }
}

/// Border rendering mode
///
/// Decides where a border's width sits relative to the area edge it
/// belongs to, which in turn decides how much of it is clipped away when
/// the painter draws the shared edge between two areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
  /// The border paints entirely inside its area edge; nothing is clipped.
  Separate,
  /// The border straddles the edge shared with an inner neighbor; half
  /// the width lies outside the area and is clipped.
  CollapseInner,
  /// The border straddles the outer table edge; half the width lies
  /// outside the area and is clipped.
  CollapseOuter,
}

impl BorderMode {
  /// Returns the clipped part of a border width under this mode
  ///
  /// Separate borders clip nothing; collapsed borders clip half the
  /// nominal width, truncating on odd widths.
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::BorderMode;
  ///
  /// assert_eq!(BorderMode::Separate.clipped_width(4), 0);
  /// assert_eq!(BorderMode::CollapseInner.clipped_width(4), 2);
  /// assert_eq!(BorderMode::CollapseOuter.clipped_width(5), 2);
  /// ```
  pub fn clipped_width(self, width: i32) -> i32 {
    match self {
      BorderMode::Separate => 0,
      BorderMode::CollapseInner | BorderMode::CollapseOuter => width / 2,
    }
  }
}

/// Resolved border traits for one side of one area
///
/// Immutable once built. `radius_start` and `radius_end` are the corner
/// radii at the segment's leading and trailing end in the side's own
/// direction of travel (left to right for horizontal sides, top to bottom
/// for vertical sides).
///
/// # Examples
///
/// ```
/// use overpaint::{BorderMode, BorderProps, BorderStyle, Rgba};
///
/// let props = BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate);
/// assert_eq!(props.width, 2);
/// assert_eq!(props.radius_start, 0);
/// assert_eq!(props.clipped_width(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BorderProps {
  pub style: BorderStyle,
  pub width: i32,
  pub radius_start: i32,
  pub radius_end: i32,
  pub color: Rgba,
  pub mode: BorderMode,
}

impl BorderProps {
  /// Creates border traits with square corners (both radii zero)
  pub fn new(style: BorderStyle, width: i32, color: Rgba, mode: BorderMode) -> Self {
    Self {
      style,
      width,
      radius_start: 0,
      radius_end: 0,
      color,
      mode,
    }
  }

  /// Sets the corner radii at the segment's two ends
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::{BorderMode, BorderProps, BorderStyle, Rgba};
  ///
  /// let props = BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate)
  ///     .with_radii(4, 0);
  /// assert_eq!(props.radius_start, 4);
  /// assert_eq!(props.radius_end, 0);
  /// ```
  pub fn with_radii(mut self, radius_start: i32, radius_end: i32) -> Self {
    self.radius_start = radius_start;
    self.radius_end = radius_end;
    self
  }

  /// Returns the part of this border's width clipped away by its mode
  pub fn clipped_width(&self) -> i32 {
    self.mode.clipped_width(self.width)
  }

  /// Tests whether this segment's border can fuse with the next one
  ///
  /// `self` is the earlier segment along the side's direction of travel,
  /// `next` the later one. The two fuse when style, width, and mode all
  /// match and neither end at the joint is rounded: the earlier segment's
  /// trailing radius and the later segment's leading radius must both be
  /// zero. The radii away from the joint do not matter.
  ///
  /// Color equality is not part of this predicate;
  /// [`MergeOptions::match_colors`](crate::MergeOptions) adds it at merge
  /// time for callers that want it.
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::{BorderMode, BorderProps, BorderStyle, Rgba};
  ///
  /// let a = BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate);
  /// let b = BorderProps::new(BorderStyle::Solid, 2, Rgba::RED, BorderMode::Separate);
  /// let c = BorderProps::new(BorderStyle::Solid, 3, Rgba::BLACK, BorderMode::Separate);
  ///
  /// assert!(a.can_merge_with(&b)); // color ignored
  /// assert!(!a.can_merge_with(&c)); // width differs
  /// ```
  pub fn can_merge_with(&self, next: &BorderProps) -> bool {
    self.style == next.style
      && self.width == next.width
      && self.mode == next.mode
      && self.radius_end == 0
      && next.radius_start == 0
  }
}
