use crate::area::{BlockArea, BorderKind};
use std::cmp::Ordering;

/// Returns the left edge of an area's padding box.
///
/// Both sweep orders and the merged run rectangles anchor on this edge
/// rather than the content-box `x_offset`, so areas that only differ in
/// start padding still line up.
pub fn adjusted_x(area: &BlockArea) -> i32 {
  area.x_offset - area.padding(BorderKind::Start)
}

/// Ordering for the horizontal-border pass (Before/After merging).
///
/// Primary key: adjusted x ascending. Tie-break: y offset ascending.
/// Ties beyond both keys are left to the caller's stable sort, so equal
/// areas keep their area-tree insertion order.
pub fn horizontal_order(a: &BlockArea, b: &BlockArea) -> Ordering {
  adjusted_x(a)
    .cmp(&adjusted_x(b))
    .then(a.y_offset.cmp(&b.y_offset))
}

/// Ordering for the vertical-border pass (Start/End merging).
///
/// Primary key: y offset ascending. Tie-break: adjusted x ascending.
pub fn vertical_order(a: &BlockArea, b: &BlockArea) -> Ordering {
  a.y_offset
    .cmp(&b.y_offset)
    .then(adjusted_x(a).cmp(&adjusted_x(b)))
}
