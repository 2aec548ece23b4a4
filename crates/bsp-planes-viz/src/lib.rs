//! Drawing utilities for viewing decoded BSP planes.

use std::hash::{Hash, Hasher};

use bsp_planes::{generate_three_points, Plane, Ray, Vector3d};
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

pub mod navigator;
pub use navigator::PlaneNavigator;

/// Converts a library vector to a macroquad vector.
#[inline]
pub fn to_vec3(v: &Vector3d) -> Vec3 {
    vec3(v.x as f32, v.y as f32, v.z as f32)
}

/// Generates a deterministic color from a plane's normal and distance.
/// Identical planes get identical colors.
pub fn plane_color(plane: &Plane) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    let normal = plane.normal();
    for component in [normal.x, normal.y, normal.z, plane.distance()] {
        component.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    // Extract RGB from hash bytes
    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Ensure colors aren't too dark by adding a minimum brightness
    Color::from_rgba(r.max(40), g.max(40), b.max(40), 255)
}

/// Builds a parallelogram on the plane from its three generated points.
///
/// Returns `None` for planes whose points are not finite (zero normal).
pub fn plane_quad(plane: &Plane, scalar: f32) -> Option<[Vec3; 4]> {
    let [a, b, c] = generate_three_points(plane, scalar.into());
    let d = a + c - b;
    let finite = [a, b, c, d]
        .iter()
        .all(|p| p.iter().all(|v| v.is_finite()));
    if !finite {
        return None;
    }
    Some([to_vec3(&a), to_vec3(&b), to_vec3(&c), to_vec3(&d)])
}

/// Draws a plane as a double-sided quad. Returns `false` if the plane
/// could not be drawn.
pub fn draw_plane(plane: &Plane, scalar: f32, color: Color) -> bool {
    let Some([a, b, c, d]) = plane_quad(plane, scalar) else {
        return false;
    };

    let vertices = [a, b, c, d]
        .iter()
        .map(|p| Vertex::new2(*p, vec2(0.0, 0.0), color))
        .collect();

    // Quad is a, b, c, d around the loop; both windings so it shows from behind
    let mesh = Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3, 2, 1, 0, 3, 2, 0],
        texture: None,
    };
    draw_mesh(&mesh);

    for (from, to) in [(a, b), (b, c), (c, d), (d, a)] {
        draw_line_3d(from, to, BLACK);
    }
    true
}

/// Draws a segment of a line of intersection, centered on its origin.
/// NaN rays (parallel planes) are skipped.
pub fn draw_intersection_line(line: &Ray, half_length: f32, color: Color) -> bool {
    if line.is_nan() {
        return false;
    }
    let origin = to_vec3(&line.origin());
    let direction = to_vec3(&line.direction()).normalize_or_zero();
    draw_line_3d(
        origin - direction * half_length,
        origin + direction * half_length,
        color,
    );
    true
}

const PITCH_LIMIT: f32 = 1.5;
const DRAG_TURN_RATE: f32 = 2.0;
const KEY_TURN_STEP: f32 = 0.02;
/// Distance factor applied per scroll notch.
const ZOOM_STEP: f32 = 0.9;

/// Z-up orbit camera framing the decoded planes.
///
/// Zoom limits scale with the framed radius, so a lump spanning a whole map
/// and one holding a single brush are both navigable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitCamera {
    /// Looks at `target` from far enough away to see a sphere of `radius`.
    pub fn framing(target: Vec3, radius: f32) -> Self {
        let radius = if radius.is_finite() { radius.max(1.0) } else { 1.0 };
        Self {
            target,
            distance: radius * 3.0,
            yaw: 0.6,
            pitch: 0.4,
            min_distance: radius * 0.25,
            max_distance: radius * 16.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Applies mouse drag, arrow keys and scroll wheel.
    pub fn update(&mut self) {
        let mut turn = Vec2::ZERO;
        if is_mouse_button_down(MouseButton::Left) {
            turn -= mouse_delta_position() * DRAG_TURN_RATE;
        }
        for (key, step) in [
            (KeyCode::Left, vec2(KEY_TURN_STEP, 0.0)),
            (KeyCode::Right, vec2(-KEY_TURN_STEP, 0.0)),
            (KeyCode::Up, vec2(0.0, KEY_TURN_STEP)),
            (KeyCode::Down, vec2(0.0, -KEY_TURN_STEP)),
        ] {
            if is_key_down(key) {
                turn += step;
            }
        }

        self.orbit(turn.x, turn.y);
        self.zoom(mouse_wheel().1);
    }

    /// Turns around the target by yaw and pitch deltas in radians.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch = (self.pitch + pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Moves one step closer for a positive `scroll`, one step away for a
    /// negative one. Scroll magnitude differs between platforms, only the
    /// sign is used.
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let factor = if scroll > 0.0 { ZOOM_STEP } else { ZOOM_STEP.recip() };
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + vec3(
                horizontal * self.yaw.cos(),
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
            )
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 0.0, 1.0),
            target: self.target,
            ..Default::default()
        }
    }

    /// Camera position as a library vector, for side tests against planes.
    pub fn eye_point(&self) -> Vector3d {
        let pos = self.position();
        Vector3d::new(pos.x.into(), pos.y.into(), pos.z.into())
    }
}
