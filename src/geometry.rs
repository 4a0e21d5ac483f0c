//! Core geometry types for border consolidation
//!
//! This module provides the geometric primitives the merge passes work in.
//! All units are integer device units, as resolved by the upstream layout
//! pass; no further scaling or rounding happens here.
//!
//! # Coordinate System
//!
//! The coordinate system has its origin at the table fragment's top-left
//! corner:
//! - Positive X extends to the right (inline-progression direction)
//! - Positive Y extends downward (block-progression direction)
//!
//! Integer coordinates make endpoint comparisons exact equality, which the
//! run-matching rules depend on.

use std::fmt;

/// A 2D point in device-unit space
///
/// Represents a coordinate in the table fragment's coordinate system.
/// The origin (0, 0) is at the top-left corner.
///
/// Points order lexicographically, x first then y, so they can key an
/// ordered map and be scanned in a reproducible order.
///
/// # Examples
///
/// ```
/// use overpaint::Point;
///
/// let p1 = Point::new(10, 20);
/// let p2 = Point::ZERO;
///
/// assert_eq!(p1.x, 10);
/// assert_eq!(p1.y, 20);
/// assert_eq!(p2, Point::new(0, 0));
/// assert!(p2 < p1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
  /// X coordinate (horizontal position, increases to the right)
  pub x: i32,
  /// Y coordinate (vertical position, increases downward)
  pub y: i32,
}

impl Point {
  /// The zero point at the origin (0, 0)
  pub const ZERO: Self = Self { x: 0, y: 0 };

  /// Creates a new point at the given coordinates
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::Point;
  ///
  /// let point = Point::new(100, 50);
  /// assert_eq!(point.x, 100);
  /// assert_eq!(point.y, 50);
  /// ```
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// Translates this point by another point's coordinates
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::Point;
  ///
  /// let p1 = Point::new(10, 20);
  /// let p2 = Point::new(5, 3);
  /// let result = p1.translate(p2);
  ///
  /// assert_eq!(result, Point::new(15, 23));
  /// ```
  pub fn translate(self, other: Point) -> Self {
    Self {
      x: self.x + other.x,
      y: self.y + other.y,
    }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// An axis-aligned rectangle in device-unit space
///
/// Defined by its top-left corner and its extents. Used to report the
/// visual band a border side covers.
///
/// # Examples
///
/// ```
/// use overpaint::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.x, 10);
/// assert_eq!(rect.y, 20);
/// assert_eq!(rect.max_x(), 110);
/// assert_eq!(rect.max_y(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
  /// X coordinate of the left edge
  pub x: i32,
  /// Y coordinate of the top edge
  pub y: i32,
  /// Width (horizontal extent)
  pub width: i32,
  /// Height (vertical extent)
  pub height: i32,
}

impl Rect {
  /// A zero-sized rectangle at the origin
  pub const ZERO: Self = Self {
    x: 0,
    y: 0,
    width: 0,
    height: 0,
  };

  /// Creates a rectangle from x, y, width, height components
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::Rect;
  ///
  /// let rect = Rect::new(10, 20, 100, 50);
  /// assert_eq!(rect.width, 100);
  /// ```
  pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// Returns the x coordinate of the right edge
  pub fn max_x(self) -> i32 {
    self.x + self.width
  }

  /// Returns the y coordinate of the bottom edge
  pub fn max_y(self) -> i32 {
    self.y + self.height
  }

  /// Returns true if either extent is zero
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::Rect;
  ///
  /// assert!(Rect::ZERO.is_empty());
  /// assert!(Rect::new(0, 0, 0, 10).is_empty());
  /// assert!(!Rect::new(0, 0, 10, 10).is_empty());
  /// ```
  pub fn is_empty(self) -> bool {
    self.width == 0 || self.height == 0
  }

  /// Computes the union of two rectangles
  ///
  /// Returns the smallest rectangle that contains both rectangles.
  ///
  /// # Examples
  ///
  /// ```
  /// use overpaint::Rect;
  ///
  /// let rect1 = Rect::new(0, 0, 10, 10);
  /// let rect2 = Rect::new(5, 5, 10, 10);
  /// let union = rect1.union(rect2);
  ///
  /// assert_eq!(union, Rect::new(0, 0, 15, 15));
  /// ```
  pub fn union(self, other: Rect) -> Rect {
    let min_x = self.x.min(other.x);
    let min_y = self.y.min(other.y);
    let max_x = self.max_x().max(other.max_x());
    let max_y = self.max_y().max(other.max_y());

    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
  }
}

impl fmt::Display for Rect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}×{}@({}, {})", self.width, self.height, self.x, self.y)
  }
}
