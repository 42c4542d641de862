extern crate serde_json;
extern crate stroke_smooth;

use stroke_smooth::*;

fn zig_zag_stroke() -> Stroke {
    Stroke::from_points((0..8).map(|index| Coord2(index as f64, if index%2 == 0 { 0.0 } else { 1.0 })))
}

#[test]
fn new_stroke_is_empty() {
    let stroke = Stroke::new();

    assert!(stroke.is_empty());
    assert!(stroke.len() == 0);
    assert!(stroke.granularity() == DEFAULT_GRANULARITY);
    assert!(stroke.should_smooth());
}

#[test]
fn pushed_points_keep_their_order() {
    let mut stroke = Stroke::new();

    stroke.push(Coord2(0.0, 0.0));
    stroke.push(Coord2(1.0, 2.0));
    stroke.push(Coord2(1.0, 2.0));
    stroke.push(Coord2(0.5, 1.0));

    // Consecutive duplicates are captured as they arrive
    assert!(stroke.points() == &[Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(1.0, 2.0), Coord2(0.5, 1.0)]);
}

#[test]
fn granularity_is_clamped_to_the_minimum() {
    let stroke = Stroke::new().with_granularity(1);
    assert!(stroke.granularity() == MIN_GRANULARITY);

    let stroke = Stroke::new().with_granularity(12);
    assert!(stroke.granularity() == 12);
}

#[test]
fn smoothed_stroke_matches_smooth_path() {
    let zig_zag     = zig_zag_stroke();
    let expected    = smooth_path(zig_zag.points(), zig_zag.granularity()).unwrap();

    assert!(zig_zag.smoothed_points() == expected);
}

#[test]
fn smoothing_can_be_turned_off() {
    let mut zig_zag = zig_zag_stroke();
    zig_zag.set_should_smooth(false);

    assert!(!zig_zag.should_smooth());
    assert!(zig_zag.smoothed_points() == zig_zag.points().to_vec());
}

#[test]
fn smoothing_leaves_the_captured_points_alone() {
    let zig_zag     = zig_zag_stroke();
    let captured    = zig_zag.points().to_vec();

    let smoothed    = zig_zag.smoothed_points();

    assert!(smoothed.len() > captured.len());
    assert!(zig_zag.points() == &captured[..]);
}

#[test]
fn short_stroke_is_presented_unchanged() {
    let short = Stroke::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0)]);

    assert!(short.smoothed_points() == short.points().to_vec());
}

#[test]
fn distinct_points_removes_close_samples() {
    let mut stroke = Stroke::new();

    stroke.push(Coord2(0.0, 0.0));
    stroke.push(Coord2(0.5, 0.0));
    stroke.push(Coord2(4.5, 0.0));
    stroke.push(Coord2(5.0, 0.0));
    stroke.push(Coord2(9.0, 0.0));

    let distinct = stroke.distinct_points(4.0);

    assert!(distinct == vec![Coord2(0.0, 0.0), Coord2(4.5, 0.0), Coord2(9.0, 0.0)]);
}

#[test]
fn distinct_points_collapses_stationary_samples() {
    let tap = Stroke::from_points(vec![Coord2(2.0, 2.0); 6]);

    assert!(tap.distinct_points(0.0) == vec![Coord2(2.0, 2.0)]);
}

#[test]
fn distinct_points_of_empty_stroke_is_empty() {
    let empty = Stroke::new();

    assert!(empty.distinct_points(4.0) == vec![]);
}

#[test]
fn strokes_collect_from_iterators() {
    let stroke: Stroke = (0..4).map(|index| Coord2(index as f64, 0.0)).collect();

    assert!(stroke.len() == 4);
    assert!(stroke.granularity() == DEFAULT_GRANULARITY);
}

#[test]
fn stroke_round_trips_through_serde() {
    let stroke      = zig_zag_stroke().with_granularity(8);

    let encoded     = serde_json::to_string(&stroke).unwrap();
    let decoded: Stroke = serde_json::from_str(&encoded).unwrap();

    assert!(decoded == stroke);
}
