//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use wingloft::{
    float_types::Real,
    mesh::{SpanMorphParameters, WingMesh},
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Parameters with every morph control neutral.
pub fn unmorphed(slice_count: usize) -> SpanMorphParameters {
    SpanMorphParameters {
        start_percent: 0.0,
        thickness_factor: 1.0,
        slice_count,
        shift_amount: 0.0,
        dihedral_angle: 0.0,
    }
}

/// The `(x, y)` ring of station `s`, given `ring` vertices per station.
pub fn station(mesh: &WingMesh, s: usize, ring: usize) -> Vec<Point2<Real>> {
    (s * ring..(s + 1) * ring)
        .map(|i| {
            let p = mesh.vertex(i);
            Point2::new(p.x, p.y)
        })
        .collect()
}

/// The z coordinate shared by every vertex of station `s`.
pub fn station_z(mesh: &WingMesh, s: usize, ring: usize) -> Real {
    mesh.vertex(s * ring).z
}
