//! `WingMesh`: the indexed triangle buffers handed to a renderer.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

pub mod loft;
pub mod manifold;

pub use loft::{SpanMorphParameters, build_lofted_solid};

/// An indexed triangle mesh stored as flat buffers.
///
/// `positions` and `normals` hold three floats per vertex, `indices` three
/// vertex indices per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WingMesh {
    pub positions: Vec<Real>,
    pub indices: Vec<u32>,
    pub normals: Vec<Real>,
}

impl WingMesh {
    /// Build a mesh from vertices and triangles, computing vertex normals.
    pub fn from_triangles(vertices: &[Point3<Real>], triangles: &[[u32; 3]]) -> Self {
        let mut mesh = WingMesh {
            positions: vertices.iter().flat_map(|p| [p.x, p.y, p.z]).collect(),
            indices: triangles.iter().flatten().copied().collect(),
            normals: Vec::new(),
        };
        mesh.recompute_normals();
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`.
    pub fn vertex(&self, i: usize) -> Point3<Real> {
        Point3::new(
            self.positions[3 * i],
            self.positions[3 * i + 1],
            self.positions[3 * i + 2],
        )
    }

    /// Normal of vertex `i`.
    pub fn normal(&self, i: usize) -> Vector3<Real> {
        Vector3::new(self.normals[3 * i], self.normals[3 * i + 1], self.normals[3 * i + 2])
    }

    /// Vertex indices of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Corner positions of triangle `tri`.
    pub fn triangle_points(&self, tri: [u32; 3]) -> [Point3<Real>; 3] {
        tri.map(|i| self.vertex(i as usize))
    }

    /// Unit normal of triangle `tri` by the right-hand rule, or zero if degenerate.
    pub fn face_normal(&self, tri: [u32; 3]) -> Vector3<Real> {
        let [a, b, c] = self.triangle_points(tri);
        (b - a)
            .cross(&(c - a))
            .try_normalize(EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Recompute per-vertex normals from the current triangles.
    ///
    /// Each vertex gets the normalized sum of its incident face normals,
    /// weighted by face area. Vertices with no usable faces get a zero normal.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![Vector3::<Real>::zeros(); self.vertex_count()];
        for tri in self.triangles() {
            let [a, b, c] = self.triangle_points(tri);
            // |cross| is twice the triangle area
            let weighted = (b - a).cross(&(c - a));
            for i in tri {
                accum[i as usize] += weighted;
            }
        }
        self.normals = accum
            .into_iter()
            .flat_map(|n| {
                let n = n.try_normalize(EPSILON).unwrap_or_else(Vector3::zeros);
                [n.x, n.y, n.z]
            })
            .collect();
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        if self.vertex_count() == 0 {
            return None;
        }
        let first = self.vertex(0);
        Some((1..self.vertex_count()).map(|i| self.vertex(i)).fold(
            (first, first),
            |(min, max), p| (min.inf(&p), max.sup(&p)),
        ))
    }

    /// Enclosed volume by the divergence theorem.
    ///
    /// Positive when the triangles of a closed mesh are wound outward.
    pub fn signed_volume(&self) -> Real {
        self.triangles()
            .map(|tri| {
                let [a, b, c] = self.triangle_points(tri);
                a.coords.dot(&b.coords.cross(&c.coords))
            })
            .sum::<Real>()
            / 6.0
    }
}
