//! Border merge engine
//!
//! The engine turns per-cell border segments into merged border runs. It
//! is invoked once per border kind, with the areas already sorted by the
//! kind's sweep order: adjusted x then y for the horizontal kinds (Before,
//! After), y then adjusted x for the vertical kinds (Start, End).
//!
//! # Open-Run Map
//!
//! While sweeping, the engine owns a map from the trailing anchor point of
//! each in-progress run to the run itself. For every area that declares
//! the active border kind it computes the segment's two anchor points and
//! scans the map for a run whose recorded end reaches the new segment's
//! start: exact coincidence on the cross axis, and progressed at least as
//! far along the run's own axis. A matching entry is consumed before the
//! border traits are compared, so an incompatible neighbor still
//! finalizes the run it bumped into; the segment then extends the matched
//! run or anchors a fresh one, and its own end point is inserted back
//! into the map.
//!
//! The map is ordered by anchor point, so the candidate scan visits
//! entries in a reproducible order regardless of how the input collection
//! was iterated when it was built.
//!
//! # Anchor Points
//!
//! Anchor points sit on the padding-box edge of the border band, shifted
//! outward by the clipped widths of the area's own borders on the
//! adjacent sides. Two segments that would paint flush against each other
//! therefore compare equal exactly, which is what keeps merged and
//! unmerged rendering indistinguishable.

use crate::area::{BlockArea, BorderKind};
use crate::border::BorderProps;
use crate::geometry::Point;
use log::{debug, trace};
use std::collections::BTreeMap;
use unicode_bidi::Level;

/// Knobs for one consolidation pass
///
/// # Examples
///
/// ```
/// use overpaint::MergeOptions;
///
/// let defaults = MergeOptions::default();
/// assert!(!defaults.match_colors);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Additionally require equal colors for two segments to fuse.
    ///
    /// Off by default: a merged run paints with its last contributor's
    /// color, so runs of same-shaped borders in different colors fuse
    /// into one rectangle. Enable to split runs at color changes instead.
    pub match_colors: bool,
}

/// An in-progress or finished merged border rectangle
///
/// Runs accumulate geometry while the sweep walks the areas and are
/// materialized into border-only areas afterwards. `props` holds the most
/// recent contributor's traits verbatim; the corner radii are only
/// stripped when the run is emitted, so the next mergeability test still
/// sees the genuine trailing radius at the joint.
#[derive(Debug, Clone)]
pub(crate) struct BorderRun {
    pub(crate) kind: BorderKind,
    pub(crate) x_offset: i32,
    pub(crate) y_offset: i32,
    pub(crate) inline_extent: i32,
    pub(crate) block_extent: i32,
    pub(crate) props: BorderProps,
    pub(crate) bidi_level: Level,
}

/// Sweeps the sorted areas once for one border kind, appending the runs
/// it builds to `runs` in creation order.
pub(crate) fn merge_borders_of_kind(
    areas: &[&BlockArea],
    kind: BorderKind,
    options: &MergeOptions,
    runs: &mut Vec<BorderRun>,
) {
    debug!("merging {:?} borders across {} areas", kind, areas.len());

    let mut open: BTreeMap<Point, usize> = BTreeMap::new();
    for area in areas {
        let Some(props) = area.border(kind) else {
            continue;
        };
        trace!(
            "area at x={}, y={} declares a {:?} border",
            area.x_offset,
            area.y_offset,
            kind
        );

        let end_point = segment_end(area, kind);

        let mut continued = None;
        if !open.is_empty() {
            let start_point = segment_start(area, kind);
            let candidate = open
                .iter()
                .map(|(point, index)| (*point, *index))
                .find(|(point, _)| endpoint_matches(kind, *point, start_point));
            if let Some((matched_end, run_index)) = candidate {
                trace!("run ending at {} reaches segment start {}", matched_end, start_point);
                open.remove(&matched_end);
                if can_merge_borders(&runs[run_index].props, props, options) {
                    continued = Some(run_index);
                }
            }
        }

        let run_index = match continued {
            Some(index) => {
                debug!(
                    "extending {:?} run at ({}, {})",
                    kind, runs[index].x_offset, runs[index].y_offset
                );
                index
            }
            None => {
                debug!(
                    "starting {:?} run for area at ({}, {})",
                    kind, area.x_offset, area.y_offset
                );
                runs.push(anchor_run(area, kind, props));
                runs.len() - 1
            }
        };

        let run = &mut runs[run_index];
        extend_run(run, area, kind);
        run.props = props.clone();
        open.insert(end_point, run_index);
    }
}

/// Tests whether the run's current traits accept the next segment.
///
/// Mode equality compares the previous segment against the current one,
/// and the radius gate reads the previous contributor's genuine trailing
/// radius, so a rounded joint splits the run even though the emitted
/// rectangle later paints with square corners.
fn can_merge_borders(prev: &BorderProps, curr: &BorderProps, options: &MergeOptions) -> bool {
    prev.can_merge_with(curr) && (!options.match_colors || prev.color == curr.color)
}

/// Computes the trailing anchor point of an area's border segment.
///
/// The anchor sits past the far end of the segment: below the padding box
/// for the vertical kinds, right of it for the horizontal ones, shifted
/// outward by the clipped widths of the area's own adjacent borders.
fn segment_end(area: &BlockArea, kind: BorderKind) -> Point {
    let bp_before = area.border_and_padding(BorderKind::Before);
    let bp_after = area.border_and_padding(BorderKind::After);
    match kind {
        BorderKind::Start => Point::new(
            area.x_offset
                - area.padding(BorderKind::Start)
                - area.clipped_border_width(BorderKind::Start),
            area.y_offset + area.block_extent + bp_before + bp_after,
        ),
        BorderKind::End => Point::new(
            area.x_offset
                + area.inline_extent
                + area.padding(BorderKind::End)
                + area.clipped_border_width(BorderKind::End),
            area.y_offset + area.block_extent + bp_before + bp_after,
        ),
        BorderKind::Before => Point::new(
            area.x_offset
                + area.inline_extent
                + area.padding(BorderKind::End)
                + area.clipped_border_width(BorderKind::End),
            area.y_offset + area.clipped_border_width(BorderKind::Before),
        ),
        BorderKind::After => Point::new(
            area.x_offset
                + area.inline_extent
                + area.padding(BorderKind::End)
                + area.clipped_border_width(BorderKind::End),
            area.y_offset
                + area.block_extent
                + bp_before
                + area.padding(BorderKind::After)
                + area.clipped_border_width(BorderKind::After),
        ),
    }
}

/// Computes the leading anchor point of an area's border segment.
fn segment_start(area: &BlockArea, kind: BorderKind) -> Point {
    match kind {
        BorderKind::Start => Point::new(
            area.x_offset
                - area.padding(BorderKind::Start)
                - area.clipped_border_width(BorderKind::Start),
            area.y_offset,
        ),
        BorderKind::End => Point::new(
            area.x_offset
                + area.inline_extent
                + area.padding(BorderKind::End)
                + area.clipped_border_width(BorderKind::End),
            area.y_offset,
        ),
        BorderKind::Before => Point::new(
            area.x_offset - area.border_and_padding(BorderKind::Start),
            area.y_offset + area.clipped_border_width(BorderKind::Before),
        ),
        BorderKind::After => Point::new(
            area.x_offset - area.border_and_padding(BorderKind::Start),
            area.y_offset
                + area.border_and_padding(BorderKind::Before)
                + area.block_extent
                + area.padding(BorderKind::After)
                + area.clipped_border_width(BorderKind::After),
        ),
    }
}

/// A recorded run end reaches a new segment start when both sit on the
/// same cross-axis coordinate and the end has progressed at least as far
/// as the start along the run's axis. A short-fall (gap) never matches;
/// forward overlap does.
fn endpoint_matches(kind: BorderKind, end: Point, start: Point) -> bool {
    if kind.is_horizontal() {
        end.y == start.y && end.x >= start.x
    } else {
        end.x == start.x && end.y >= start.y
    }
}

/// Anchors a fresh run on the current area's geometry.
///
/// All four kinds anchor x on the area's padding-box left edge. The
/// vertical kinds and After sit below the area's own before border; the
/// End kind starts out covering the area's inline extent plus both
/// paddings, and the After kind its block extent plus both paddings. The
/// extents along the sweep direction are grown by [`extend_run`] on every
/// contribution, including this first one.
fn anchor_run(area: &BlockArea, kind: BorderKind, props: &BorderProps) -> BorderRun {
    let before_width = area.border_width(BorderKind::Before);
    let x_offset = area.x_offset - area.padding(BorderKind::Start);
    let (y_offset, inline_extent, block_extent) = match kind {
        BorderKind::Before => (area.y_offset, 0, 0),
        BorderKind::After => (
            area.y_offset + before_width,
            0,
            area.block_extent
                + area.padding(BorderKind::Before)
                + area.padding(BorderKind::After),
        ),
        BorderKind::Start => (area.y_offset + before_width, 0, 0),
        BorderKind::End => (
            area.y_offset + before_width,
            area.inline_extent
                + area.padding(BorderKind::Start)
                + area.padding(BorderKind::End),
            0,
        ),
    };
    BorderRun {
        kind,
        x_offset,
        y_offset,
        inline_extent,
        block_extent,
        props: props.clone(),
        bidi_level: area.bidi_level,
    }
}

/// Grows the run's trailing extent to cover the current area.
///
/// Horizontal runs grow their inline extent to the area's padding-box
/// right edge; vertical runs grow their block extent to the bottom of the
/// area's padding box measured past its before border and padding.
fn extend_run(run: &mut BorderRun, area: &BlockArea, kind: BorderKind) {
    if kind.is_horizontal() {
        let new_end = area.x_offset + area.inline_extent + area.padding(BorderKind::End);
        run.inline_extent = new_end - run.x_offset;
    } else {
        let new_end = area.y_offset
            + area.block_extent
            + area.border_and_padding(BorderKind::Before)
            + area.padding(BorderKind::After);
        run.block_extent = new_end - run.y_offset;
    }
}
