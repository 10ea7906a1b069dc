use zoom_viewport::config::{FitMode, ViewportConfig};
use zoom_viewport::controller::ZoomViewportController;
use zoom_viewport::error::Error;
use zoom_viewport::geometry::{ImageDimensions, Point, Size};
use zoom_viewport::host::{HostViewport, SimulatedViewport};
use zoom_viewport::processing::resize::{RestoreScale, prepare};

fn point_close(a: Point, b: Point, eps: f64) {
    assert!((a.x - b.x).abs() <= eps, "x mismatch: {:?} vs {:?}", a, b);
    assert!((a.y - b.y).abs() <= eps, "y mismatch: {:?} vs {:?}", a, b);
}

fn square_in_portrait(fit: FitMode) -> ZoomViewportController<SimulatedViewport> {
    let cfg = ViewportConfig {
        fit_mode: fit,
        ..ViewportConfig::default()
    };
    let mut c =
        ZoomViewportController::new(SimulatedViewport::new(Size::new(300.0, 600.0)), cfg).unwrap();
    c.display(&ImageDimensions::new(1000.0, 1000.0).unwrap())
        .unwrap();
    c
}

/// Zoom to `factor` times the minimum with `feature` under the container centre.
fn zoom_onto(c: &mut ZoomViewportController<SimulatedViewport>, factor: f64, feature: Point) {
    let min = c.zoom_state().min_scale;
    c.host_mut().set_zoom_scale(min * factor, false);
    c.center_content();
    let host = c.host_mut();
    let target = host.convert_from_content(feature) - host.bounds().half();
    host.set_content_offset(target);
}

fn centred_feature(c: &ZoomViewportController<SimulatedViewport>) -> Point {
    let host = c.host();
    host.convert_to_content(host.visible_center())
}

#[test]
fn snapshot_at_minimum_uses_sentinel() {
    let c = square_in_portrait(FitMode::AspectFill);
    assert_eq!(prepare(c.host()).scale_to_restore, RestoreScale::UseMinimum);
}

#[test]
fn snapshot_above_minimum_keeps_exact_scale() {
    let mut c = square_in_portrait(FitMode::AspectFill);
    zoom_onto(&mut c, 1.5, Point::new(500.0, 500.0));
    let expected = c.zoom_state().current_scale;
    assert_eq!(
        prepare(c.host()).scale_to_restore,
        RestoreScale::Exact(expected)
    );
}

#[test]
fn resting_at_minimum_relocks_to_new_minimum() {
    let mut c = square_in_portrait(FitMode::AspectFill);
    let before = c.zoom_state();
    c.resize(Size::new(800.0, 1000.0)).unwrap();
    let after = c.zoom_state();
    assert_eq!(after.current_scale, after.min_scale);
    assert!((after.min_scale - 0.999).abs() < 1e-12);
    assert!(after.current_scale > before.current_scale);
}

#[test]
fn focal_point_survives_any_resize() {
    let containers = [
        Size::new(600.0, 300.0),
        Size::new(1000.0, 400.0),
        Size::new(200.0, 200.0),
        Size::new(2000.0, 2000.0),
        Size::new(300.0, 600.0),
    ];
    for fit in [FitMode::AspectFill, FitMode::AspectFit] {
        for &size in &containers {
            let mut c = square_in_portrait(fit);
            zoom_onto(&mut c, 1.5, Point::new(500.0, 500.0));
            c.resize(size).unwrap();
            let host = c.host();
            point_close(
                host.convert_from_content(Point::new(500.0, 500.0)),
                host.visible_center(),
                1e-6,
            );
        }
    }
}

#[test]
fn rotation_keeps_off_centre_feature_in_view() {
    let mut c = square_in_portrait(FitMode::AspectFill);
    let feature = Point::new(450.0, 520.0);
    zoom_onto(&mut c, 1.5, feature);
    point_close(centred_feature(&c), feature, 1e-6);
    let scale = c.zoom_state().current_scale;

    c.resize(Size::new(600.0, 300.0)).unwrap();
    point_close(centred_feature(&c), feature, 1e-6);
    assert_eq!(c.zoom_state().current_scale, scale);

    c.resize(Size::new(300.0, 600.0)).unwrap();
    point_close(centred_feature(&c), feature, 1e-6);
}

#[test]
fn restored_offset_is_clamped_at_content_edges() {
    let mut c = square_in_portrait(FitMode::AspectFill);
    // The bottom-right corner can only be brought up to the edges.
    zoom_onto(&mut c, 1.5, Point::new(1000.0, 1000.0));
    c.resize(Size::new(600.0, 300.0)).unwrap();
    let s = c.zoom_state();
    assert!((s.content_offset.x - (s.content_size.width - 600.0)).abs() < 1e-9);
    assert!(s.content_offset.y > 0.0);
    assert!(s.content_offset.y <= s.content_size.height - 300.0);
}

#[test]
fn resize_to_same_bounds_is_a_no_op() {
    let mut c = square_in_portrait(FitMode::AspectFill);
    zoom_onto(&mut c, 2.0, Point::new(300.0, 700.0));
    let before = c.zoom_state();
    c.resize(Size::new(300.0, 600.0)).unwrap();
    assert_eq!(c.zoom_state(), before);
}

#[test]
fn resize_to_zero_is_rejected() {
    let mut c = square_in_portrait(FitMode::AspectFill);
    let before = c.zoom_state();
    assert!(c.resize(Size::new(0.0, 600.0)).is_err());
    assert_eq!(c.zoom_state(), before);
}

#[test]
fn resize_that_underflows_the_scale_is_rejected() {
    let mut c = square_in_portrait(FitMode::AspectFit);
    let before = c.zoom_state();
    let err = c.resize(Size::new(5e-324, 5e-324)).unwrap_err();
    assert!(matches!(err, Error::DegenerateImage { .. }));
    assert_eq!(c.zoom_state().current_scale, before.current_scale);
    assert!(c.zoom_state().min_scale > 0.0);
}

#[test]
fn manual_bracket_matches_resize() {
    let mut a = square_in_portrait(FitMode::AspectFit);
    let mut b = square_in_portrait(FitMode::AspectFit);
    zoom_onto(&mut a, 1.7, Point::new(420.0, 610.0));
    zoom_onto(&mut b, 1.7, Point::new(420.0, 610.0));

    a.resize(Size::new(640.0, 360.0)).unwrap();

    b.prepare_resize();
    b.host_mut().set_bounds(Size::new(640.0, 360.0));
    b.recover_from_resize().unwrap();

    assert_eq!(a.zoom_state(), b.zoom_state());
}
