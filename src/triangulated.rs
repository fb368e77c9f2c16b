/// A trait for any shape which can be represented by triangles
use crate::float_types::Real;
use crate::mesh::WingMesh;
use nalgebra::{Point3, Vector3};

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` in winding order, with its facet normal.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Point3<Real>; 3], Vector3<Real>);
}

impl Triangulated3D for WingMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Point3<Real>; 3], Vector3<Real>),
    {
        for tri in self.triangles() {
            f(self.triangle_points(tri), self.face_normal(tri));
        }
    }
}
