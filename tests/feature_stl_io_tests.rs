#![cfg(feature = "stl-io")]

use std::io::Cursor;
use wingloft::{
    mesh::{SpanMorphParameters, WingMesh, build_lofted_solid},
    profile::generate_cross_section,
};

fn wing() -> WingMesh {
    let profile = generate_cross_section("2412", 1.0, 12);
    let params = SpanMorphParameters {
        slice_count: 4,
        ..Default::default()
    };
    build_lofted_solid(&profile, 2.0, &params).unwrap()
}

#[test]
fn wing_to_stl_ascii() {
    let wing = wing();
    let stl_str = wing.to_stl_ascii("test_wing");
    // Basic checks
    assert!(stl_str.starts_with("solid test_wing\n"));
    assert!(stl_str.ends_with("endsolid test_wing\n"));

    // one facet and three vertex lines per triangle
    assert_eq!(stl_str.matches("facet normal").count(), wing.triangle_count());
    assert_eq!(stl_str.matches("      vertex").count(), 3 * wing.triangle_count());
}

#[test]
fn wing_to_stl_binary_reads_back() -> Result<(), Box<dyn std::error::Error>> {
    let wing = wing();
    let bytes = wing.to_stl_binary("test_wing")?;

    // 80 byte header + u32 count + 50 bytes per facet
    assert_eq!(bytes.len(), 84 + 50 * wing.triangle_count());

    let read = stl_io::read_stl(&mut Cursor::new(bytes))?;
    assert_eq!(read.faces.len(), wing.triangle_count());
    // apexes and station rings are all distinct points
    assert_eq!(read.vertices.len(), wing.vertex_count());
    Ok(())
}
