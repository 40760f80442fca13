use super::*;

fn screen() -> UVec2 {
    UVec2::new(800, 600)
}

fn free_camera(top_left: DVec2, zoom: f64) -> Camera {
    let mut camera = Camera::new(top_left, screen(), zoom, ZoomSettings::default()).unwrap();
    camera.set_tether(false);
    camera
}

fn assert_close(a: DVec2, b: DVec2, tol: f64) {
    assert!(
        (a - b).length() <= tol,
        "expected {b:?}, got {a:?} (tolerance {tol})"
    );
}

#[test]
fn test_derived_sizes() {
    let camera = Camera::new(DVec2::ZERO, screen(), 2.0, ZoomSettings::default()).unwrap();
    assert_eq!(camera.world_size(), DVec2::new(1600.0, 1200.0));
    assert!((camera.radius() - 1000.0).abs() < 1e-9);
    assert_eq!(camera.center(), DVec2::new(800.0, 600.0));
    assert!(camera.is_tethered());
}

#[test]
fn test_new_clamps_zoom() {
    let camera = Camera::new(DVec2::ZERO, screen(), 0.1, ZoomSettings::default()).unwrap();
    assert_eq!(camera.zoom(), 1.0);
    let camera = Camera::new(DVec2::ZERO, screen(), 9_000.0, ZoomSettings::default()).unwrap();
    assert_eq!(camera.zoom(), 500.0);
}

#[test]
fn test_centered_on_rounds_top_left() {
    let camera =
        Camera::centered_on(DVec2::new(0.0, -10_070.4), screen(), ZoomSettings::default())
            .unwrap();
    assert_eq!(camera.top_left(), DVec2::new(-400.0, -10_370.0));
    assert_eq!(camera.zoom(), 1.0);
    assert!(camera.is_tethered());
}

#[test]
fn test_world_to_screen_floors() {
    let camera =
        Camera::new(DVec2::new(100.0, 100.0), screen(), 2.0, ZoomSettings::default()).unwrap();
    assert_eq!(camera.world_to_screen(DVec2::new(100.0, 100.0)), IVec2::new(0, 0));
    assert_eq!(camera.world_to_screen(DVec2::new(103.9, 105.0)), IVec2::new(1, 2));
    // Left of the view floors away from zero.
    assert_eq!(camera.world_to_screen(DVec2::new(99.0, 100.0)), IVec2::new(-1, 0));
}

#[test]
fn test_screen_to_world_inverts_world_to_screen_on_pixel_corners() {
    let camera =
        Camera::new(DVec2::new(-250.0, 75.0), screen(), 4.0, ZoomSettings::default()).unwrap();
    for pixel in [IVec2::new(0, 0), IVec2::new(17, 451), IVec2::new(799, 599)] {
        let world = camera.screen_to_world(pixel.as_dvec2());
        assert_eq!(camera.world_to_screen(world), pixel);
    }
}

#[test]
fn test_pan_refused_while_tethered() {
    let mut camera = Camera::new(DVec2::ZERO, screen(), 3.0, ZoomSettings::default()).unwrap();
    assert!(!camera.pan(10.0, 10.0));
    assert_eq!(camera.top_left(), DVec2::ZERO);
}

#[test]
fn test_pan_scales_by_zoom() {
    let mut camera = free_camera(DVec2::ZERO, 3.0);
    assert!(camera.pan(10.0, -4.0));
    assert_eq!(camera.top_left(), DVec2::new(30.0, -12.0));
}

#[test]
fn test_zoom_keeps_anchor_fixed_when_untethered() {
    let anchors = [
        DVec2::new(0.0, 0.0),
        DVec2::new(400.0, 300.0),
        DVec2::new(799.0, 12.0),
        DVec2::new(33.5, 581.25),
    ];
    for anchor in anchors {
        for direction in [ZoomDirection::In, ZoomDirection::Out] {
            let mut camera = free_camera(DVec2::new(-1_234.5, 9_876.0), 20.0);
            let before = camera.screen_to_world(anchor);
            for _ in 0..5 {
                camera.zoom_at(direction, anchor);
                assert_close(camera.screen_to_world(anchor), before, 1e-6);
            }
        }
    }
}

#[test]
fn test_zoom_direction_and_clamp() {
    let mut camera = free_camera(DVec2::ZERO, 10.0);
    camera.zoom_at(ZoomDirection::In, DVec2::ZERO);
    assert!((camera.zoom() - 9.0).abs() < 1e-12);
    camera.zoom_at(ZoomDirection::Out, DVec2::ZERO);
    assert!((camera.zoom() - 9.9).abs() < 1e-12);

    for _ in 0..200 {
        camera.zoom_at(ZoomDirection::Out, DVec2::ZERO);
    }
    assert_eq!(camera.zoom(), 500.0);
    for _ in 0..200 {
        camera.zoom_at(ZoomDirection::In, DVec2::ZERO);
    }
    assert_eq!(camera.zoom(), 1.0);
}

#[test]
fn test_zoom_at_limit_does_not_move_view() {
    let mut camera = free_camera(DVec2::new(5.0, 5.0), 1.0);
    camera.zoom_at(ZoomDirection::In, DVec2::new(400.0, 300.0));
    assert_eq!(camera.zoom(), 1.0);
    assert_eq!(camera.top_left(), DVec2::new(5.0, 5.0));
}

#[test]
fn test_zoom_updates_derived_values() {
    let mut camera = free_camera(DVec2::ZERO, 10.0);
    camera.zoom_at(ZoomDirection::Out, DVec2::ZERO);
    let expected = DVec2::new(800.0, 600.0) * camera.zoom();
    assert_close(camera.world_size(), expected, 1e-9);
    assert!((camera.radius() - expected.length() / 2.0).abs() < 1e-9);
}

#[test]
fn test_follow_centers_when_tethered() {
    let mut camera = Camera::new(DVec2::ZERO, screen(), 2.0, ZoomSettings::default()).unwrap();
    let target = DVec2::new(1_000.0, -20_000.0);
    camera.follow(target);
    assert_eq!(camera.center(), target);
    assert_eq!(camera.top_left(), DVec2::new(200.0, -20_600.0));
}

#[test]
fn test_follow_ignored_when_untethered() {
    let mut camera = free_camera(DVec2::new(7.0, 7.0), 2.0);
    camera.follow(DVec2::new(1_000.0, 1_000.0));
    assert_eq!(camera.top_left(), DVec2::new(7.0, 7.0));
}

#[test]
fn test_toggle_tether() {
    let mut camera = Camera::new(DVec2::ZERO, screen(), 1.0, ZoomSettings::default()).unwrap();
    camera.toggle_tether();
    assert!(!camera.is_tethered());
    camera.toggle_tether();
    assert!(camera.is_tethered());
}

#[test]
fn test_resize_untethered_keeps_center() {
    let mut camera = free_camera(DVec2::new(100.0, 200.0), 2.5);
    let center = camera.center();
    camera.resize(UVec2::new(1280, 720));
    assert_close(camera.center(), center, 1e-9);
    assert_eq!(camera.screen_size(), UVec2::new(1280, 720));
    assert_eq!(camera.world_size(), DVec2::new(3200.0, 1800.0));
}

#[test]
fn test_resize_tethered_keeps_top_left() {
    let mut camera =
        Camera::new(DVec2::new(100.0, 200.0), screen(), 1.0, ZoomSettings::default()).unwrap();
    camera.resize(UVec2::new(1024, 768));
    assert_eq!(camera.top_left(), DVec2::new(100.0, 200.0));
    assert_eq!(camera.world_size(), DVec2::new(1024.0, 768.0));
}

#[test]
fn test_circle_visibility() {
    // View centered at (400, 300) with radius 500.
    let camera = Camera::new(DVec2::ZERO, screen(), 1.0, ZoomSettings::default()).unwrap();
    assert!(camera.circle_visible(DVec2::new(400.0, 300.0), 1.0));
    assert!(camera.circle_visible(DVec2::new(400.0, 900.0), 100.0));
    assert!(!camera.circle_visible(DVec2::new(400.0, 900.0), 99.0));
    // Body far away but huge.
    assert!(camera.circle_visible(DVec2::new(0.0, 20_000.0), 20_000.0));
}

#[test]
fn test_rect_visibility() {
    let camera = Camera::new(DVec2::ZERO, screen(), 1.0, ZoomSettings::default()).unwrap();
    assert!(camera.rect_visible(DVec2::new(400.0, 300.0), DVec2::new(10.0, 140.0)));
    // Touching the right edge counts.
    assert!(camera.rect_visible(DVec2::new(805.0, 300.0), DVec2::new(10.0, 10.0)));
    assert!(!camera.rect_visible(DVec2::new(820.0, 300.0), DVec2::new(10.0, 10.0)));
    assert!(!camera.rect_visible(DVec2::new(400.0, -100.0), DVec2::new(10.0, 140.0)));
}

#[test]
fn test_project_polyline() {
    let camera =
        Camera::new(DVec2::new(-10.0, -10.0), screen(), 2.0, ZoomSettings::default()).unwrap();
    let projected = camera.project_polyline([DVec2::new(-10.0, -10.0), DVec2::new(0.0, 0.0)]);
    assert_eq!(projected, vec![IVec2::new(0, 0), IVec2::new(5, 5)]);
}

#[test]
fn test_world_rect_matches_view() {
    let camera =
        Camera::new(DVec2::new(-400.0, -300.0), screen(), 1.0, ZoomSettings::default()).unwrap();
    let rect = camera.world_rect();
    assert_eq!(rect.min, DVec2::new(-400.0, -300.0));
    assert_eq!(rect.max, DVec2::new(400.0, 300.0));
    assert_eq!(rect.center(), camera.center());
}

#[test]
fn test_new_rejects_inverted_zoom_range() {
    let settings = ZoomSettings {
        min: 10.0,
        max: 2.0,
        ..ZoomSettings::default()
    };
    assert_eq!(
        Camera::new(DVec2::ZERO, screen(), 5.0, settings),
        Err(CameraError::InvalidZoomRange { min: 10.0, max: 2.0 })
    );
    assert!(Camera::centered_on(DVec2::ZERO, screen(), settings).is_err());
}

#[test]
fn test_new_rejects_nan_settings_and_zoom() {
    let settings = ZoomSettings {
        max: f64::NAN,
        ..ZoomSettings::default()
    };
    assert!(matches!(
        Camera::new(DVec2::ZERO, screen(), 1.0, settings),
        Err(CameraError::InvalidZoomRange { .. })
    ));
    assert!(matches!(
        Camera::new(DVec2::ZERO, screen(), f64::NAN, ZoomSettings::default()),
        Err(CameraError::InvalidZoom(_))
    ));
    assert!(Camera::new(DVec2::ZERO, screen(), 0.0, ZoomSettings::default()).is_err());
}
