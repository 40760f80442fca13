//! Screen-space snapshot of a session for a renderer.

use glam::IVec2;
use liftoff_physics::{Color, Telemetry};

use crate::session::{Session, SessionPhase};

/// A body that passed the visibility test.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub name: String,
    pub center: IVec2,
    /// Radius in pixels.
    pub radius: f64,
    pub color: Color,
}

/// Everything needed to draw one frame, already projected to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub phase: SessionPhase,
    pub time_warp: f64,
    pub telemetry: Telemetry,
    pub bodies: Vec<BodyView>,
    /// `None` when the vehicle's bounding box is off screen.
    pub vehicle_corners: Option<[IVec2; 4]>,
    /// Trail polyline; empty until it has two points.
    pub trail: Vec<IVec2>,
}

impl ViewSnapshot {
    pub fn capture(session: &Session) -> Self {
        let camera = session.camera();
        let vehicle = session.vehicle();

        let bodies = session
            .bodies()
            .iter()
            .filter(|b| camera.circle_visible(b.position(), b.radius()))
            .map(|b| BodyView {
                name: b.name().to_string(),
                center: camera.world_to_screen(b.position()),
                radius: b.radius() / camera.zoom(),
                color: b.color(),
            })
            .collect();

        let profile = vehicle.profile();
        let extent = glam::DVec2::splat(profile.height_m.max(profile.width_m));
        let vehicle_corners = camera
            .rect_visible(vehicle.center(), extent)
            .then(|| vehicle.corners().map(|c| camera.world_to_screen(c)));

        let trail = if vehicle.path().is_drawable() {
            camera.project_polyline(vehicle.path().points())
        } else {
            Vec::new()
        };

        Self {
            phase: session.phase(),
            time_warp: session.time_warp(),
            telemetry: session.telemetry(),
            bodies,
            vehicle_corners,
            trail,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use liftoff_camera::ZoomDirection;
    use liftoff_config::Config;

    use super::*;
    use crate::input::{CameraEvent, Command, ControlInput};

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_pad_view() {
        let session = Session::from_config(&Config::default()).unwrap();
        let view = ViewSnapshot::capture(&session);
        assert_eq!(view.phase, SessionPhase::PreLaunch);

        // Earth fills the bottom of the screen; the Moon is 90 km away.
        assert_eq!(view.bodies.len(), 1);
        assert_eq!(view.bodies[0].name, "earth");
        assert_eq!(view.bodies[0].radius, 10_000.0);

        let corners = view.vehicle_corners.expect("vehicle on screen");
        for c in corners {
            assert!((0..800).contains(&c.x) && (0..600).contains(&c.y), "{c:?}");
        }
        assert!(view.trail.is_empty());
    }

    #[test]
    fn test_zoomed_out_view_shows_moon() {
        let mut session = Session::from_config(&Config::default()).unwrap();
        let zoom_out = (0..60).fold(ControlInput::new(), |input, _| {
            input.camera(CameraEvent::Zoom {
                direction: ZoomDirection::Out,
                anchor: DVec2::new(400.0, 300.0),
            })
        });
        session.step(DT, &zoom_out);
        assert!(session.camera().zoom() > 250.0);

        let view = ViewSnapshot::capture(&session);
        let names: Vec<_> = view.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["earth", "moon"]);
        let moon = &view.bodies[1];
        assert!((moon.radius - 3_000.0 / session.camera().zoom()).abs() < 1e-9);
    }

    #[test]
    fn test_vehicle_hidden_when_panned_away() {
        let mut session = Session::from_config(&Config::default()).unwrap();
        session.step(
            DT,
            &ControlInput::new()
                .camera(CameraEvent::DragStart)
                .camera(CameraEvent::Drag(DVec2::new(-5_000.0, 0.0))),
        );
        let view = ViewSnapshot::capture(&session);
        assert!(view.vehicle_corners.is_none());
    }

    #[test]
    fn test_trail_projected_after_liftoff() {
        let mut config = Config::default();
        config.simulation.countdown_secs = 0.0;
        let mut session = Session::from_config(&config).unwrap();
        session.step(DT, &ControlInput::new().press(Command::Launch));
        for _ in 0..30 {
            session.step(DT, &ControlInput::new());
        }
        let view = ViewSnapshot::capture(&session);
        assert_eq!(view.phase, SessionPhase::Flight);
        assert_eq!(view.trail.len(), session.vehicle().path().len());
        assert!(view.trail.len() > 1);
        assert_eq!(view.telemetry, session.telemetry());
    }
}
