use overpaint::{
  overpaint_borders, BlockArea, BorderKind, BorderMode, BorderProps, BorderStyle, Error,
  MergeOptions, Positioning, Rect, Rgba,
};
use unicode_bidi::Level;

fn solid(width: i32) -> BorderProps {
  BorderProps::new(BorderStyle::Solid, width, Rgba::BLACK, BorderMode::Separate)
}

fn full_cell(x: i32, y: i32) -> BlockArea {
  BlockArea::new(x, y, 100, 20)
    .with_border(BorderKind::Before, solid(2))
    .with_border(BorderKind::After, solid(2))
    .with_border(BorderKind::Start, solid(2))
    .with_border(BorderKind::End, solid(2))
}

fn consolidate(children: Vec<BlockArea>) -> BlockArea {
  let mut table = BlockArea::new(0, 0, 300, 60);
  for child in children {
    table.add_child(child);
  }
  overpaint_borders(&mut table, &MergeOptions::default()).unwrap();
  table
}

#[test]
fn emitted_areas_are_border_only_reference_areas() {
  let _ = env_logger::builder().is_test(true).try_init();

  let table = consolidate(vec![full_cell(0, 0), full_cell(100, 0)]);

  let emitted: Vec<&BlockArea> = table.children.iter().filter(|c| c.is_reference_area).collect();
  assert!(!emitted.is_empty());
  for run in emitted {
    assert_eq!(run.positioning, Positioning::Absolute);
    assert!(run.children.is_empty());
    let declared = BorderKind::ALL
      .iter()
      .filter(|&&kind| run.border(kind).is_some())
      .count();
    assert_eq!(declared, 1, "a run paints exactly one side");
    for kind in BorderKind::ALL {
      assert_eq!(run.padding(kind), 0);
      if let Some(props) = run.border(kind) {
        assert_eq!(props.radius_start, 0);
        assert_eq!(props.radius_end, 0);
      }
    }
  }
}

#[test]
fn runs_are_appended_after_content_in_pass_order() {
  let _ = env_logger::builder().is_test(true).try_init();

  let table = consolidate(vec![
    full_cell(0, 0),
    full_cell(100, 0),
    full_cell(0, 20),
    full_cell(100, 20),
  ]);

  assert_eq!(table.children.len(), 12);
  for content in &table.children[..4] {
    assert!(!content.is_reference_area);
  }
  let side_of = |area: &BlockArea| {
    BorderKind::ALL
      .into_iter()
      .find(|&kind| area.border(kind).is_some())
      .unwrap()
  };
  let sides: Vec<BorderKind> = table.children[4..].iter().map(|r| side_of(r)).collect();
  assert_eq!(
    sides,
    vec![
      BorderKind::Before,
      BorderKind::Before,
      BorderKind::After,
      BorderKind::After,
      BorderKind::Start,
      BorderKind::Start,
      BorderKind::End,
      BorderKind::End,
    ]
  );
  // within a kind, runs appear in the order their first contributor was swept
  assert_eq!(table.children[4].y_offset, 0);
  assert_eq!(table.children[5].y_offset, 20);
}

#[test]
fn cells_with_two_sides_feed_both_passes() {
  let _ = env_logger::builder().is_test(true).try_init();

  let cell = BlockArea::new(0, 0, 100, 20)
    .with_border(BorderKind::Before, solid(2))
    .with_border(BorderKind::End, solid(2));
  let table = consolidate(vec![cell]);

  let emitted: Vec<&BlockArea> = table.children.iter().filter(|c| c.is_reference_area).collect();
  assert_eq!(emitted.len(), 2);
  assert!(emitted[0].border(BorderKind::Before).is_some());
  assert!(emitted[1].border(BorderKind::End).is_some());
}

#[test]
fn end_border_run_sits_outside_the_padding_box() {
  let _ = env_logger::builder().is_test(true).try_init();

  let cell = BlockArea::new(0, 0, 100, 20)
    .with_border(BorderKind::End, solid(2))
    .with_padding(BorderKind::Start, 5)
    .with_padding(BorderKind::End, 7);
  let table = consolidate(vec![cell]);

  let run = table.children.iter().find(|c| c.is_reference_area).unwrap();
  assert_eq!(run.x_offset, -5);
  assert_eq!(run.inline_extent, 112);
  assert_eq!(run.block_extent, 20);
  // the band paints right of the content plus end padding
  assert_eq!(run.border_band(BorderKind::End), Some(Rect::new(107, 0, 2, 20)));
}

#[test]
fn collapsed_joint_borders_still_merge() {
  let _ = env_logger::builder().is_test(true).try_init();

  // at the shared edge both cells draw a four-wide collapsed border, so
  // their top border segments overlap by the clipped halves
  let joint = BorderProps::new(BorderStyle::Solid, 4, Rgba::BLACK, BorderMode::CollapseInner);
  let a = BlockArea::new(0, 0, 100, 20)
    .with_border(BorderKind::Before, solid(2))
    .with_border(BorderKind::End, joint.clone());
  let b = BlockArea::new(100, 0, 100, 20)
    .with_border(BorderKind::Before, solid(2))
    .with_border(BorderKind::Start, joint);
  let table = consolidate(vec![a, b]);

  let runs: Vec<&BlockArea> = table
    .children
    .iter()
    .filter(|c| c.is_reference_area && c.border(BorderKind::Before).is_some())
    .collect();
  assert_eq!(runs.len(), 1);
  assert_eq!(runs[0].x_offset, 0);
  assert_eq!(runs[0].inline_extent, 200);
}

#[test]
fn merged_color_comes_from_the_last_contributor() {
  let _ = env_logger::builder().is_test(true).try_init();

  let black = solid(2);
  let red = BorderProps::new(BorderStyle::Solid, 2, Rgba::RED, BorderMode::Separate);
  let mut table = BlockArea::new(0, 0, 200, 20);
  table.add_child(BlockArea::new(0, 0, 100, 20).with_border(BorderKind::Before, black));
  table.add_child(BlockArea::new(100, 0, 100, 20).with_border(BorderKind::Before, red));

  overpaint_borders(&mut table, &MergeOptions::default()).unwrap();

  let runs: Vec<&BlockArea> = table.children.iter().filter(|c| c.is_reference_area).collect();
  assert_eq!(runs.len(), 1);
  assert_eq!(runs[0].border(BorderKind::Before).unwrap().color, Rgba::RED);
}

#[test]
fn color_matching_splits_runs_when_enabled() {
  let _ = env_logger::builder().is_test(true).try_init();

  let build = || {
    let mut table = BlockArea::new(0, 0, 200, 20);
    table.add_child(BlockArea::new(0, 0, 100, 20).with_border(BorderKind::Before, solid(2)));
    table.add_child(BlockArea::new(100, 0, 100, 20).with_border(
      BorderKind::Before,
      BorderProps::new(BorderStyle::Solid, 2, Rgba::RED, BorderMode::Separate),
    ));
    table
  };

  let mut relaxed = build();
  overpaint_borders(&mut relaxed, &MergeOptions::default()).unwrap();
  assert_eq!(relaxed.children.iter().filter(|c| c.is_reference_area).count(), 1);

  let mut strict = build();
  let options = MergeOptions { match_colors: true };
  overpaint_borders(&mut strict, &options).unwrap();
  assert_eq!(strict.children.iter().filter(|c| c.is_reference_area).count(), 2);
}

#[test]
fn runs_keep_the_first_contributors_bidi_level() {
  let _ = env_logger::builder().is_test(true).try_init();

  let mut table = BlockArea::new(0, 0, 200, 20);
  table.add_child(
    BlockArea::new(0, 0, 100, 20)
      .with_border(BorderKind::Before, solid(2))
      .with_bidi_level(Level::rtl()),
  );
  table.add_child(BlockArea::new(100, 0, 100, 20).with_border(BorderKind::Before, solid(2)));

  overpaint_borders(&mut table, &MergeOptions::default()).unwrap();

  let run = table.children.iter().find(|c| c.is_reference_area).unwrap();
  assert_eq!(run.bidi_level, Level::rtl());
}

#[test]
fn a_rejected_table_is_left_untouched() {
  let _ = env_logger::builder().is_test(true).try_init();

  let mut table = BlockArea::new(0, 0, 200, 20);
  table.add_child(BlockArea::new(0, 0, 100, 20).with_border(BorderKind::Before, solid(2)));
  table.add_child(BlockArea::new(100, 0, 100, 20).with_border(BorderKind::Before, solid(-1)));

  let err = overpaint_borders(&mut table, &MergeOptions::default()).unwrap_err();
  assert!(matches!(err, Error::InvalidTrait { .. }));
  assert_eq!(table.children.len(), 2);
  assert!(table.children.iter().all(|c| !c.is_reference_area));
}

#[test]
fn consolidation_of_consolidated_output_is_stable() {
  let _ = env_logger::builder().is_test(true).try_init();

  let mut table = BlockArea::new(0, 0, 300, 20);
  for x in [0, 100, 200] {
    table.add_child(BlockArea::new(x, 0, 100, 20).with_border(BorderKind::Before, solid(2)));
  }
  overpaint_borders(&mut table, &MergeOptions::default()).unwrap();
  assert_eq!(table.children.len(), 4);

  // running again re-reads the merged run as a plain bordered child and
  // re-emits the same single rectangle for it
  let first_pass = table.clone();
  overpaint_borders(&mut table, &MergeOptions::default()).unwrap();
  assert_eq!(table.children.len(), 5);
  let last = table.children.last().unwrap();
  let previous = first_pass.children.last().unwrap();
  assert_eq!(last.x_offset, previous.x_offset);
  assert_eq!(last.y_offset, previous.y_offset);
  assert_eq!(last.inline_extent, previous.inline_extent);
  assert_eq!(
    last.border(BorderKind::Before),
    previous.border(BorderKind::Before)
  );
}
