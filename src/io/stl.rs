use crate::mesh::WingMesh;
use crate::triangulated::Triangulated3D;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert this shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use wingloft::mesh::{SpanMorphParameters, build_lofted_solid};
/// # use wingloft::profile::generate_cross_section;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let profile = generate_cross_section("2412", 1.0, 20);
/// let wing = build_lofted_solid(&profile, 4.0, &SpanMorphParameters::default())?;
/// let text = wing.to_stl_ascii("naca2412");
/// assert!(text.starts_with("solid naca2412"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri, n| {
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in &tri {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Convert this shape to a **binary STL** byte vector. The binary header is
/// left blank, so `_name` is unused.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri, n| {
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl WingMesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
