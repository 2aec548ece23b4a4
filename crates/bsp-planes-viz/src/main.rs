use std::path::PathBuf;

use bsp_planes::{decode_planes, lump_index, record_size, MapType};
use bsp_planes_viz::{plane_quad, OrbitCamera, PlaneNavigator};
use clap::Parser;
use macroquad::prelude::*;

/// View the planes stored in an extracted BSP planes lump.
#[derive(Debug, Parser)]
struct Args {
    /// Raw planes lump (the bytes of one lump, not a whole .bsp file).
    lump: PathBuf,

    /// Format that produced the lump, e.g. quake, quake3, source20, cod4.
    #[arg(short, long, default_value = "quake")]
    map_type: MapType,

    /// Format version from the file header.
    #[arg(long, default_value_t = 0)]
    format_version: i32,

    /// Spacing of the three points generated on each plane.
    #[arg(short, long, default_value_t = 64.0)]
    scalar: f32,
}

#[macroquad::main("BSP Plane Viewer")]
async fn main() {
    let args = Args::parse();

    let data = match std::fs::read(&args.lump) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.lump.display(), e);
            return;
        }
    };

    let planes = match decode_planes(Some(&data), args.map_type, args.format_version) {
        Ok(planes) => planes,
        Err(e) => {
            eprintln!("Failed to decode {}: {}", args.lump.display(), e);
            return;
        }
    };

    // Both lookups succeed once decoding has
    if let (Ok(size), Some(index)) = (record_size(args.map_type), lump_index(args.map_type)) {
        println!(
            "{}: lump {} with {}-byte records, {} bytes",
            args.map_type,
            index,
            size,
            data.len()
        );
        if data.len() % size != 0 {
            println!("Ignoring {} trailing bytes", data.len() % size);
        }
    }
    println!("Decoded {} planes", planes.len());

    let quad_points: Vec<Vec3> = planes
        .iter()
        .filter_map(|plane| plane_quad(plane, args.scalar))
        .flatten()
        .collect();
    let center = if quad_points.is_empty() {
        Vec3::ZERO
    } else {
        quad_points.iter().copied().sum::<Vec3>() / quad_points.len() as f32
    };

    let radius = quad_points
        .iter()
        .map(|point| point.distance(center))
        .fold(args.scalar, f32::max);

    let mut camera = OrbitCamera::framing(center, radius);
    let mut navigator = PlaneNavigator::new();

    loop {
        camera.update();
        navigator.update(&planes);

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        navigator.render(&planes, args.scalar);

        let axis = args.scalar * 2.0;
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(axis, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, axis, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, axis), BLUE);

        set_default_camera();

        draw_text(
            &format!("BSP Planes - {} ({})", args.lump.display(), args.map_type),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        navigator.draw_ui(&planes, &camera.eye_point(), 50.0);

        draw_text("Drag mouse to rotate, scroll to zoom", 10.0, 155.0, 16.0, DARKGRAY);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 175.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
