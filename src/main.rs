// main.rs
//
// Writes a handful of example wings to ./stl so they can be inspected in any
// STL viewer.

use std::{fs, path::Path};
use wingloft::float_types::Real;
use wingloft::mesh::{SpanMorphParameters, build_lofted_solid};
use wingloft::profile::generate_cross_section;

const PATH: &str = "stl";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides, e.g. RUST_LOG=wingloft=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("wingloft=info"))
        .init();

    fs::create_dir_all(PATH)?;

    // straight NACA 2412 wing, no morph
    let naca2412 = generate_cross_section("2412", 1.0, 60);
    let straight = SpanMorphParameters {
        slice_count: 2,
        ..Default::default()
    };
    write_example(&build_lofted_solid(&naca2412, 5.0, &straight)?, "naca2412_straight")?;

    // tapered, swept and bent outer panel
    let morphed = SpanMorphParameters {
        start_percent: 0.4,
        thickness_factor: 0.45,
        slice_count: 24,
        shift_amount: 0.35,
        dihedral_angle: Real::to_radians(8.0),
    };
    write_example(&build_lofted_solid(&naca2412, 5.0, &morphed)?, "naca2412_morphed")?;

    // 5-digit reflexed section, thickened toward the tip
    let naca23112 = generate_cross_section("23112", 0.8, 80);
    let thick_tip = SpanMorphParameters {
        start_percent: 0.0,
        thickness_factor: 1.6,
        slice_count: 10,
        ..Default::default()
    };
    write_example(&build_lofted_solid(&naca23112, 3.0, &thick_tip)?, "naca23112_thick_tip")?;

    Ok(())
}

fn write_example(wing: &wingloft::WingMesh, name: &str) -> std::io::Result<()> {
    log::info!(
        "{name}: {} vertices, {} triangles, volume {:.5}",
        wing.vertex_count(),
        wing.triangle_count(),
        wing.signed_volume()
    );
    fs::write(
        Path::new(PATH).join(name).with_extension("stl"),
        wing.to_stl_binary(name)?,
    )
}
