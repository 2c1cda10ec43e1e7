use super::*;
use crate::foundation::core::{Point, RectSide};
use crate::route::select::SideStrategy;

#[test]
fn point_to_point_with_defaults() {
    let a = compute_arrow(0.0, 0.0, 100.0, 100.0, None);
    assert_eq!(a.start, Point::new(0.0, 0.0));
    assert_eq!(a.control_start, Point::new(0.0, -50.0));
    assert_eq!(a.control_end, Point::new(100.0, 50.0));
    assert_eq!(a.end, Point::new(100.0, 100.0));
    assert_eq!(a.start_angle, 90.0);
    assert_eq!(a.end_angle, 90.0);
    assert_eq!((a.start_side, a.end_side), (RectSide::Top, RectSide::Top));
}

#[test]
fn explicit_default_options_match_none() {
    let opts = ArrowOpts::default();
    assert_eq!(
        compute_box_arrow(5.0, 5.0, 40.0, 20.0, 200.0, 90.0, 30.0, 30.0, Some(&opts)),
        compute_box_arrow(5.0, 5.0, 40.0, 20.0, 200.0, 90.0, 30.0, 30.0, None)
    );
}

#[test]
fn zero_stretch_in_options_means_fifty() {
    let opts = ArrowOpts {
        control_point_stretch: 0.0,
        ..ArrowOpts::default()
    };
    assert_eq!(
        compute_arrow(0.0, 0.0, 100.0, 100.0, Some(&opts)),
        compute_arrow(0.0, 0.0, 100.0, 100.0, None)
    );
}

#[test]
fn restricted_start_side_is_used() {
    let opts = ArrowOpts::builder()
        .start_sides([RectSide::Bottom])
        .build()
        .unwrap();
    let a = compute_arrow(0.0, 0.0, 100.0, 100.0, Some(&opts));
    assert_eq!(a.start_side, RectSide::Bottom);
    assert_eq!(a.start_angle, 270.0);
    assert_eq!(a.control_start, Point::new(0.0, 50.0));
    assert_eq!(a.control_end, Point::new(100.0, 50.0));
}

#[test]
fn padded_boxes_with_shortest_strategy_face_each_other() {
    let opts = ArrowOpts::builder()
        .pad(5.0)
        .side_strategy(SideStrategy::Shortest)
        .build()
        .unwrap();
    let a = compute_box_arrow(0.0, 0.0, 100.0, 50.0, 300.0, 0.0, 100.0, 50.0, Some(&opts));
    assert_eq!(a.start, Point::new(110.0, 25.0));
    assert_eq!(a.end, Point::new(290.0, 25.0));
    assert_eq!(a.control_start, Point::new(200.0, 25.0));
    assert_eq!(a.control_end, Point::new(200.0, 25.0));
    assert_eq!((a.start_angle, a.end_angle), (180.0, 0.0));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let opts = ArrowOpts::builder()
        .pad_start(1.5)
        .side_strategy(SideStrategy::Shortest)
        .build()
        .unwrap();
    let a = compute_box_arrow(-3.25, 7.0, 13.0, 9.5, 71.0, -40.0, 22.0, 8.0, Some(&opts));
    let b = compute_box_arrow(-3.25, 7.0, 13.0, 9.5, 71.0, -40.0, 22.0, 8.0, Some(&opts));
    let bits = |d: &ArrowDescriptor| {
        [
            d.start.x, d.start.y, d.control_start.x, d.control_start.y, d.control_end.x,
            d.control_end.y, d.end.x, d.end.y, d.start_angle, d.end_angle,
        ]
        .map(f64::to_bits)
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn request_computes_like_entry_point() {
    let req = ArrowRequest::new(
        Endpoint::rect(0.0, 0.0, 100.0, 50.0),
        Endpoint::point(250.0, 200.0),
    );
    assert_eq!(
        req.compute().unwrap(),
        compute_box_arrow(0.0, 0.0, 100.0, 50.0, 250.0, 200.0, 0.0, 0.0, None)
    );
}

#[test]
fn request_rejects_bad_endpoints() {
    let req = ArrowRequest::new(Endpoint::rect(0.0, 0.0, -1.0, 5.0), Endpoint::point(1.0, 1.0));
    let err = req.compute().unwrap_err();
    assert!(err.to_string().contains("start.width"));

    let req = ArrowRequest::new(Endpoint::point(0.0, 0.0), Endpoint::point(f64::NAN, 1.0));
    let err = req.validate().unwrap_err();
    assert!(err.to_string().contains("end.x"));
}

#[test]
fn request_json_defaults_sizes_and_opts() {
    let req = ArrowRequest::from_json(r#"{ "start": { "x": 1, "y": 2 }, "end": { "x": 3, "y": 4 } }"#)
        .unwrap();
    assert_eq!(req.start, Endpoint::point(1.0, 2.0));
    assert_eq!(req.opts, ArrowOpts::default());
}
