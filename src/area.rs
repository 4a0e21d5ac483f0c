//! Block areas - laid-out rectangles with border and padding traits
//!
//! Block areas are the output of table layout. Unlike the structures layout
//! works on, areas carry final absolute offsets and extents; nothing in this
//! crate moves or resizes them. The consolidation pass reads leaf areas,
//! derives merged border geometry from them, and appends new border-only
//! areas next to them in the same tree.
//!
//! # Writing-Mode Relative Sides
//!
//! Sides are named in writing-mode relative terms, as the upstream layout
//! pass resolves them:
//!
//! | Side   | Horizontal LTR equivalent |
//! |--------|---------------------------|
//! | Before | top                       |
//! | After  | bottom                    |
//! | Start  | left                      |
//! | End    | right                     |
//!
//! # Usage
//!
//! ```
//! use overpaint::{BlockArea, BorderKind, BorderMode, BorderProps, BorderStyle, Rgba};
//!
//! let cell = BlockArea::new(0, 0, 100, 20)
//!     .with_border(
//!         BorderKind::Before,
//!         BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate),
//!     )
//!     .with_padding(BorderKind::Start, 5);
//!
//! assert_eq!(cell.border_width(BorderKind::Before), 2);
//! assert_eq!(cell.padding(BorderKind::Start), 5);
//! assert_eq!(cell.padding(BorderKind::End), 0);
//! ```

use crate::border::BorderProps;
use crate::geometry::Rect;
use unicode_bidi::Level;

/// One of the four writing-mode relative sides of an area
///
/// Border and padding traits are declared per side; the merge passes
/// process the horizontal pair (Before, After) and the vertical pair
/// (Start, End) separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
  /// Block-start edge (top in horizontal-lr writing modes)
  Before,
  /// Block-end edge (bottom)
  After,
  /// Inline-start edge (left in LTR)
  Start,
  /// Inline-end edge (right)
  End,
}

impl BorderKind {
  /// All four sides, in trait-map order
  pub const ALL: [BorderKind; 4] = [
    BorderKind::Before,
    BorderKind::After,
    BorderKind::Start,
    BorderKind::End,
  ];

  /// Returns true for the sides whose border line runs horizontally
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::BorderKind;
  ///
  /// assert!(BorderKind::Before.is_horizontal());
  /// assert!(BorderKind::After.is_horizontal());
  /// assert!(!BorderKind::Start.is_horizontal());
  /// ```
  pub fn is_horizontal(self) -> bool {
    matches!(self, BorderKind::Before | BorderKind::After)
  }
}

/// How an area participates in positioning
///
/// Stacked areas flow with their siblings; absolute areas paint at their
/// recorded offsets independently of surrounding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
  Stack,
  Absolute,
}

/// A laid-out rectangle in the table fragment's coordinate space
///
/// Carries the area's absolute offset, its inline and block extents, up to
/// four optional border traits and padding amounts (one per side), a bidi
/// level, positioning flags, and child areas. The table's rendered block is
/// itself a `BlockArea` whose children are the cell leaf areas.
///
/// Absent paddings read as zero and absent borders as width zero through
/// the accessors; callers never see the `Option`s unless they ask for the
/// trait itself.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockArea {
  /// X coordinate of the area's origin
  pub x_offset: i32,
  /// Y coordinate of the area's origin
  pub y_offset: i32,
  /// Extent in the inline-progression direction (width)
  pub inline_extent: i32,
  /// Extent in the block-progression direction (height)
  pub block_extent: i32,

  /// Border trait on the block-start edge
  pub border_before: Option<BorderProps>,
  /// Border trait on the block-end edge
  pub border_after: Option<BorderProps>,
  /// Border trait on the inline-start edge
  pub border_start: Option<BorderProps>,
  /// Border trait on the inline-end edge
  pub border_end: Option<BorderProps>,

  /// Padding on the block-start edge
  pub padding_before: Option<i32>,
  /// Padding on the block-end edge
  pub padding_after: Option<i32>,
  /// Padding on the inline-start edge
  pub padding_start: Option<i32>,
  /// Padding on the inline-end edge
  pub padding_end: Option<i32>,

  /// Resolved bidi embedding level of the area's content
  pub bidi_level: Level,
  /// How the area positions relative to surrounding flow
  pub positioning: Positioning,
  /// True for areas that fix their geometry at creation and ignore flow
  pub is_reference_area: bool,

  /// Child areas, in paint order
  pub children: Vec<BlockArea>,
}

impl BlockArea {
  /// Creates a new stacked area with the given offsets and extents
  ///
  /// The area starts with no border or padding traits, an LTR bidi level,
  /// and no children.
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::BlockArea;
  ///
  /// let area = BlockArea::new(10, 20, 100, 50);
  /// assert_eq!(area.x_offset, 10);
  /// assert_eq!(area.inline_extent, 100);
  /// assert!(area.children.is_empty());
  /// ```
  pub fn new(x_offset: i32, y_offset: i32, inline_extent: i32, block_extent: i32) -> Self {
    Self {
      x_offset,
      y_offset,
      inline_extent,
      block_extent,
      border_before: None,
      border_after: None,
      border_start: None,
      border_end: None,
      padding_before: None,
      padding_after: None,
      padding_start: None,
      padding_end: None,
      bidi_level: Level::ltr(),
      positioning: Positioning::Stack,
      is_reference_area: false,
      children: Vec::new(),
    }
  }

  /// Sets the border trait for one side
  pub fn with_border(mut self, kind: BorderKind, props: BorderProps) -> Self {
    match kind {
      BorderKind::Before => self.border_before = Some(props),
      BorderKind::After => self.border_after = Some(props),
      BorderKind::Start => self.border_start = Some(props),
      BorderKind::End => self.border_end = Some(props),
    }
    self
  }

  /// Sets the padding amount for one side
  pub fn with_padding(mut self, kind: BorderKind, amount: i32) -> Self {
    match kind {
      BorderKind::Before => self.padding_before = Some(amount),
      BorderKind::After => self.padding_after = Some(amount),
      BorderKind::Start => self.padding_start = Some(amount),
      BorderKind::End => self.padding_end = Some(amount),
    }
    self
  }

  /// Sets the area's bidi embedding level
  pub fn with_bidi_level(mut self, level: Level) -> Self {
    self.bidi_level = level;
    self
  }

  /// Appends a child area after the existing children
  pub fn add_child(&mut self, child: BlockArea) {
    self.children.push(child);
  }

  /// Returns the border trait for one side, if declared
  pub fn border(&self, kind: BorderKind) -> Option<&BorderProps> {
    match kind {
      BorderKind::Before => self.border_before.as_ref(),
      BorderKind::After => self.border_after.as_ref(),
      BorderKind::Start => self.border_start.as_ref(),
      BorderKind::End => self.border_end.as_ref(),
    }
  }

  /// Returns the nominal border width for one side, zero when absent
  pub fn border_width(&self, kind: BorderKind) -> i32 {
    self.border(kind).map_or(0, |bps| bps.width)
  }

  /// Returns the clipped border width for one side, zero when absent
  ///
  /// This is the part of the border's width its mode clips away at the
  /// area edge; the segment anchor formulas shift by it.
  pub fn clipped_border_width(&self, kind: BorderKind) -> i32 {
    self.border(kind).map_or(0, BorderProps::clipped_width)
  }

  /// Returns the padding amount for one side, zero when absent
  pub fn padding(&self, kind: BorderKind) -> i32 {
    let padding = match kind {
      BorderKind::Before => self.padding_before,
      BorderKind::After => self.padding_after,
      BorderKind::Start => self.padding_start,
      BorderKind::End => self.padding_end,
    };
    padding.unwrap_or(0)
  }

  /// Returns border width plus padding for one side
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::{BlockArea, BorderKind, BorderMode, BorderProps, BorderStyle, Rgba};
  ///
  /// let area = BlockArea::new(0, 0, 100, 20)
  ///     .with_border(
  ///         BorderKind::Before,
  ///         BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate),
  ///     )
  ///     .with_padding(BorderKind::Before, 3);
  ///
  /// assert_eq!(area.border_and_padding(BorderKind::Before), 5);
  /// assert_eq!(area.border_and_padding(BorderKind::After), 0);
  /// ```
  pub fn border_and_padding(&self, kind: BorderKind) -> i32 {
    self.border_width(kind) + self.padding(kind)
  }

  /// Reports the rectangle the painter fills for one side's border
  ///
  /// The area's own offsets and extents are taken as the border run's
  /// anchor geometry, which is how the consolidation pass shapes the
  /// areas it emits: the band hangs off the matching edge of the
  /// `(x_offset, y_offset, inline_extent, block_extent)` rectangle with
  /// the border's nominal width as its thickness. Returns `None` when the
  /// side has no border trait.
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::{BlockArea, BorderKind, BorderMode, BorderProps, BorderStyle, Rect, Rgba};
  ///
  /// let run = BlockArea::new(0, 0, 300, 0).with_border(
  ///     BorderKind::Before,
  ///     BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate),
  /// );
  ///
  /// assert_eq!(run.border_band(BorderKind::Before), Some(Rect::new(0, 0, 300, 2)));
  /// assert_eq!(run.border_band(BorderKind::After), None);
  /// ```
  pub fn border_band(&self, kind: BorderKind) -> Option<Rect> {
    let width = self.border(kind)?.width;
    let band = match kind {
      BorderKind::Before => Rect::new(self.x_offset, self.y_offset, self.inline_extent, width),
      BorderKind::After => Rect::new(
        self.x_offset,
        self.y_offset + self.block_extent,
        self.inline_extent,
        width,
      ),
      BorderKind::Start => Rect::new(
        self.x_offset - width,
        self.y_offset,
        width,
        self.block_extent,
      ),
      BorderKind::End => Rect::new(
        self.x_offset + self.inline_extent,
        self.y_offset,
        width,
        self.block_extent,
      ),
    };
    Some(band)
  }
}
