//! Border consolidation over a finished table area
//!
//! After table layout has produced one child area per cell, painting each
//! cell's borders individually floods the paint layer with tiny
//! rectangles. This module walks the finished children and fuses
//! collinear, equally-shaped border segments into a handful of merged
//! border areas, which it appends to the table area behind the content
//! children.
//!
//! The merged areas paint exactly where the individual segments would
//! have: callers that draw children in order get the same pixels, minus
//! the redundant seams.

use crate::area::{BlockArea, BorderKind, Positioning};
use crate::border::BorderProps;
use crate::error::{Error, Result};
use crate::merge::{merge_borders_of_kind, BorderRun, MergeOptions};
use crate::sweep;
use log::debug;

/// Consolidates the border segments of `table`'s children into merged
/// border areas appended to `table.children`.
///
/// The children are swept twice: once in horizontal order for the before
/// and after borders, once in vertical order for the start and end
/// borders. Each merged run becomes one absolutely positioned,
/// border-only reference area; content children are left untouched and
/// keep their positions before the emitted areas.
///
/// Returns an error without modifying `table` when a child carries a
/// negative extent, border width, corner radius, or padding.
///
/// # Examples
///
/// ```
/// use overpaint::{
///     overpaint_borders, BlockArea, BorderKind, BorderMode, BorderProps, BorderStyle,
///     MergeOptions, Rgba,
/// };
///
/// let top = BorderProps::new(BorderStyle::Solid, 2, Rgba::BLACK, BorderMode::Separate);
/// let mut table = BlockArea::new(0, 0, 200, 20);
/// table.add_child(BlockArea::new(0, 0, 100, 20).with_border(BorderKind::Before, top.clone()));
/// table.add_child(BlockArea::new(100, 0, 100, 20).with_border(BorderKind::Before, top));
///
/// overpaint_borders(&mut table, &MergeOptions::default())?;
///
/// // two cells and one merged border area spanning both
/// assert_eq!(table.children.len(), 3);
/// assert_eq!(table.children[2].inline_extent, 200);
/// # Ok::<(), overpaint::Error>(())
/// ```
pub fn overpaint_borders(table: &mut BlockArea, options: &MergeOptions) -> Result<()> {
    validate(table)?;

    let mut runs: Vec<BorderRun> = Vec::new();
    {
        let mut sorted: Vec<&BlockArea> = table.children.iter().collect();

        sorted.sort_by(|a, b| sweep::horizontal_order(a, b));
        merge_borders_of_kind(&sorted, BorderKind::Before, options, &mut runs);
        merge_borders_of_kind(&sorted, BorderKind::After, options, &mut runs);

        sorted.sort_by(|a, b| sweep::vertical_order(a, b));
        merge_borders_of_kind(&sorted, BorderKind::Start, options, &mut runs);
        merge_borders_of_kind(&sorted, BorderKind::End, options, &mut runs);
    }

    debug!(
        "emitting {} merged border areas behind {} content children",
        runs.len(),
        table.children.len()
    );
    table.children.extend(runs.into_iter().map(materialize));
    Ok(())
}

/// Rejects children whose geometry or border traits cannot have come out
/// of a layout pass.
fn validate(table: &BlockArea) -> Result<()> {
    for child in &table.children {
        if child.inline_extent < 0 || child.block_extent < 0 {
            return Err(Error::InvalidExtent {
                message: format!(
                    "area at ({}, {}) has extents {}×{}",
                    child.x_offset, child.y_offset, child.inline_extent, child.block_extent
                ),
            });
        }
        for kind in BorderKind::ALL {
            if let Some(props) = child.border(kind) {
                if props.width < 0 || props.radius_start < 0 || props.radius_end < 0 {
                    return Err(Error::InvalidTrait {
                        message: format!(
                            "{:?} border of area at ({}, {}) has width {}, radii {} and {}",
                            kind,
                            child.x_offset,
                            child.y_offset,
                            props.width,
                            props.radius_start,
                            props.radius_end
                        ),
                    });
                }
            }
            if child.padding(kind) < 0 {
                return Err(Error::InvalidTrait {
                    message: format!(
                        "{:?} padding of area at ({}, {}) is {}",
                        kind,
                        child.x_offset,
                        child.y_offset,
                        child.padding(kind)
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Turns a finished run into a border-only area.
///
/// The emitted area is absolutely positioned at the run's offsets,
/// carries exactly one border trait, and paints with square corners
/// regardless of the radii its contributors declared.
fn materialize(run: BorderRun) -> BlockArea {
    let BorderRun {
        kind,
        x_offset,
        y_offset,
        inline_extent,
        block_extent,
        props,
        bidi_level,
    } = run;
    let paint = BorderProps::new(props.style, props.width, props.color, props.mode);
    let mut area = BlockArea::new(x_offset, y_offset, inline_extent, block_extent)
        .with_border(kind, paint)
        .with_bidi_level(bidi_level);
    area.positioning = Positioning::Absolute;
    area.is_reference_area = true;
    area
}
