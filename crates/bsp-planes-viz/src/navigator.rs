//! Plane-by-plane navigation for interactive viewing.

use bsp_planes::{intersect_planes, Plane, PlaneSide, Vector3d};
use macroquad::prelude::*;

use crate::{draw_intersection_line, draw_plane, plane_color};

/// Color used for planes other than the selected one.
const DIMMED: Color = Color::new(0.35, 0.35, 0.4, 0.35);

/// Steps through a decoded plane list, highlighting one plane at a time.
pub struct PlaneNavigator {
    selected: usize,
    /// Draw every plane instead of only the selected pair.
    show_all: bool,
}

impl Default for PlaneNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneNavigator {
    /// Creates a new navigator starting at the first plane.
    pub fn new() -> Self {
        Self {
            selected: 0,
            show_all: true,
        }
    }

    /// Index of the selected plane.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves to the next plane, wrapping at the end. Returns true if the selection changed.
    pub fn next(&mut self, count: usize) -> bool {
        if count < 2 {
            return false;
        }
        self.selected = (self.selected + 1) % count;
        true
    }

    /// Moves to the previous plane, wrapping at the start. Returns true if the selection changed.
    pub fn previous(&mut self, count: usize) -> bool {
        if count < 2 {
            return false;
        }
        self.selected = (self.selected + count - 1) % count;
        true
    }

    /// Returns to the first plane.
    pub fn first(&mut self) -> bool {
        let changed = self.selected != 0;
        self.selected = 0;
        changed
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update(&mut self, planes: &[Plane]) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::N) {
            changed |= self.next(planes.len());
        }
        if is_key_pressed(KeyCode::P) {
            changed |= self.previous(planes.len());
        }
        if is_key_pressed(KeyCode::R) {
            changed |= self.first();
        }
        if is_key_pressed(KeyCode::A) {
            self.show_all = !self.show_all;
            changed = true;
        }

        changed
    }

    /// Draws the planes, the selected one in its own color, plus the line
    /// where it meets the following plane.
    pub fn render(&self, planes: &[Plane], scalar: f32) {
        let Some(current) = planes.get(self.selected) else {
            return;
        };

        if self.show_all {
            for (idx, plane) in planes.iter().enumerate() {
                if idx != self.selected {
                    draw_plane(plane, scalar, DIMMED);
                }
            }
        }
        draw_plane(current, scalar, plane_color(current));

        if let Some(following) = planes.get(self.selected + 1) {
            if !self.show_all {
                draw_plane(following, scalar, DIMMED);
            }
            draw_intersection_line(&intersect_planes(current, following), scalar * 4.0, YELLOW);
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui(&self, planes: &[Plane], eye: &Vector3d, y_offset: f32) {
        let Some(current) = planes.get(self.selected) else {
            draw_text("No planes", 10.0, y_offset, 18.0, ORANGE);
            return;
        };

        let normal = current.normal();
        let side = match current.classify_point(eye) {
            PlaneSide::Front => "front",
            PlaneSide::Back => "back",
            PlaneSide::OnPlane => "on plane",
        };
        let meets_next = planes
            .get(self.selected + 1)
            .map(|following| !intersect_planes(current, following).is_nan());

        draw_text(
            &format!("Plane {} of {}", self.selected + 1, planes.len()),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!(
                "({:.3}, {:.3}, {:.3}) . p = {:.2}  [{:?}]",
                normal.x,
                normal.y,
                normal.z,
                current.distance(),
                current.plane_type()
            ),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "Eye: {:.1} units, {} side",
                current.signed_distance(eye),
                side
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            GREEN,
        );
        draw_text(
            match meets_next {
                Some(true) => "Meets next plane along the yellow line",
                Some(false) => "Parallel to next plane",
                None => "Last plane",
            },
            10.0,
            y_offset + 60.0,
            18.0,
            if meets_next == Some(false) { ORANGE } else { GRAY },
        );
        draw_text(
            "[N]ext | [P]revious | [R]eset | [A]ll planes",
            10.0,
            y_offset + 80.0,
            16.0,
            DARKGRAY,
        );
    }
}
