use chartcss::core::{build_flat_segments, build_nested_segment_rows, build_segments};

#[test]
fn segment_count_is_one_less_than_point_count() {
    let row = build_segments(&[20.0, 40.0, 10.0, 30.0], 40.0, false).expect("segments");
    assert_eq!(row.cells.len(), 3);
}

#[test]
fn segments_carry_absolute_start_and_end_fractions() {
    let rows = build_flat_segments(&[20.0, 40.0, 10.0], None, false).expect("flat segments");

    assert_eq!(rows.len(), 1);
    let cells = &rows[0].cells;
    assert_eq!(cells.len(), 2);

    // max resolves over the entire series (40), not per segment
    assert_eq!(cells[0].start, Some(0.5));
    assert_eq!(cells[0].size, 1.0);
    assert_eq!(cells[1].start, Some(1.0));
    assert_eq!(cells[1].size, 0.25);

    // each segment carries its starting point's raw value
    assert_eq!(cells[0].raw_value, 20.0);
    assert_eq!(cells[1].raw_value, 40.0);
}

#[test]
fn flat_scope_uses_the_whole_series_maximum() {
    // the later 100 raises the denominator for the first segment too
    let rows = build_flat_segments(&[20.0, 40.0, 100.0], None, false).expect("flat segments");

    let cells = &rows[0].cells;
    assert_eq!(cells[0].start, Some(0.2));
    assert_eq!(cells[0].size, 0.4);
}

#[test]
fn nested_scope_resolves_each_row_alone() {
    let rows = build_nested_segment_rows(&[vec![20.0, 40.0], vec![5.0, 10.0]], None, false)
        .expect("nested segments");

    assert_eq!(rows.len(), 2);
    // row 0 maximum is 40, row 1 maximum is 10; neither sees the other
    assert_eq!(rows[0].cells[0].start, Some(0.5));
    assert_eq!(rows[0].cells[0].size, 1.0);
    assert_eq!(rows[1].cells[0].start, Some(0.5));
    assert_eq!(rows[1].cells[0].size, 1.0);
}

#[test]
fn override_applies_uniformly_to_nested_rows() {
    let rows = build_nested_segment_rows(&[vec![20.0, 40.0], vec![5.0, 10.0]], Some(40.0), false)
        .expect("nested segments with override");

    assert_eq!(rows[0].cells[0].start, Some(0.5));
    assert_eq!(rows[0].cells[0].size, 1.0);
    assert_eq!(rows[1].cells[0].start, Some(0.125));
    assert_eq!(rows[1].cells[0].size, 0.25);
}

#[test]
fn single_point_series_yields_no_segments() {
    let row = build_segments(&[7.0], 10.0, false).expect("singleton");
    assert!(row.cells.is_empty());

    let rows = build_flat_segments(&[7.0], None, false).expect("singleton flat");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].cells.is_empty());
}

#[test]
fn empty_series_yields_no_segments() {
    let row = build_segments(&[], 10.0, false).expect("empty");
    assert!(row.cells.is_empty());
}

#[test]
fn short_series_skip_maximum_resolution() {
    // a single non-positive point cannot resolve a maximum, but it also has
    // no outgoing segment, so no maximum is needed
    let rows = build_flat_segments(&[-5.0], None, false).expect("no segments, no error");
    assert!(rows[0].cells.is_empty());

    let rows = build_nested_segment_rows(&[vec![-5.0], vec![]], None, false)
        .expect("no segments, no error");
    assert!(rows.iter().all(|row| row.cells.is_empty()));
}

#[test]
fn hidable_marks_segment_cells() {
    let row = build_segments(&[1.0, 2.0, 3.0], 3.0, true).expect("segments");
    assert!(row.cells.iter().all(|cell| cell.hidable));
}
