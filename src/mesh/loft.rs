//! Span-wise lofting of a `Profile` into a capped, morphed wing solid.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::WingMesh;
use crate::profile::Profile;
use nalgebra::{Point2, Point3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Span-wise morph controls.
///
/// Morphing ramps from zero at `start_percent` of the span to full effect at
/// the tip. At full effect a section is scaled by `thickness_factor`, moved
/// `shift_amount` chords along x and raised by the dihedral bend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanMorphParameters {
    /// Span fraction where morphing begins (0 = root, 1 = tip).
    pub start_percent: Real,
    /// Tip-to-root scale multiplier.
    pub thickness_factor: Real,
    /// Number of span stations, root and tip included.
    pub slice_count: usize,
    /// Chordwise translation at full morph, in chords.
    pub shift_amount: Real,
    /// Bend past the morph start (radians).
    pub dihedral_angle: Real,
}

impl Default for SpanMorphParameters {
    fn default() -> Self {
        Self {
            start_percent: 0.5,
            thickness_factor: 1.0,
            slice_count: 16,
            shift_amount: 0.0,
            dihedral_angle: 0.0,
        }
    }
}

/// One span station: its position along the span and how far morphed it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub z: Real,
    pub t: Real,
}

/// Span position where morphing begins.
pub fn morph_start(span: Real, start_percent: Real) -> Real {
    -span / 2.0 + start_percent.clamp(0.0, 1.0) * span
}

/// Morph progress at span position `z`.
///
/// Zero at or before `start_z`. Past it, the ramp reaches one at the tip
/// (`half_span`); with no room left to ramp (`start_z ≥ half_span`) any
/// `z > start_z` is fully morphed.
pub fn morph_progress(z: Real, start_z: Real, half_span: Real) -> Real {
    if z <= start_z {
        return 0.0;
    }
    let ramp = half_span - start_z;
    if ramp <= 0.0 {
        1.0
    } else {
        ((z - start_z) / ramp).clamp(0.0, 1.0)
    }
}

/// Evenly spaced stations from `-span/2` to `+span/2` inclusive.
pub fn stations(span: Real, params: &SpanMorphParameters) -> Vec<Station> {
    let count = params.slice_count;
    let half_span = span / 2.0;
    let start_z = morph_start(span, params.start_percent);
    (0..count)
        .map(|s| {
            let alpha = if count == 1 {
                0.0
            } else {
                s as Real / (count - 1) as Real
            };
            let z = -half_span + alpha * span;
            Station {
                z,
                t: morph_progress(z, start_z, half_span),
            }
        })
        .collect()
}

/// The cross-section placed at one station.
fn station_ring(
    section: &[Point2<Real>],
    station: &Station,
    start_z: Real,
    chord: Real,
    params: &SpanMorphParameters,
) -> Vec<Point3<Real>> {
    let t = station.t;
    let scale = 1.0 + (params.thickness_factor - 1.0) * t;
    let dx = t * params.shift_amount * chord;
    let dy = t * params.dihedral_angle.tan() * (station.z - start_z);
    section
        .iter()
        .map(|p| Point3::new(p.x * scale + dx, p.y * scale + dy, station.z))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn station_rings(
    section: &[Point2<Real>],
    stations: &[Station],
    start_z: Real,
    chord: Real,
    params: &SpanMorphParameters,
) -> Vec<Point3<Real>> {
    stations
        .iter()
        .flat_map(|station| station_ring(section, station, start_z, chord, params))
        .collect()
}

#[cfg(feature = "parallel")]
fn station_rings(
    section: &[Point2<Real>],
    stations: &[Station],
    start_z: Real,
    chord: Real,
    params: &SpanMorphParameters,
) -> Vec<Point3<Real>> {
    stations
        .par_iter()
        .flat_map_iter(|station| station_ring(section, station, start_z, chord, params))
        .collect()
}

/// Swap the last two corners when `flip` is set.
const fn wind(tri: [u32; 3], flip: bool) -> [u32; 3] {
    if flip { [tri[0], tri[2], tri[1]] } else { tri }
}

/// Loft `profile` along `span` (centered on z = 0) into a closed solid.
///
/// Vertices are laid out station by station (`slice_count · N` of them, N being
/// the profile size without its closing point), followed by the root apex
/// `(0, 0, -span/2)` and the tip apex. The tip apex always carries the fully
/// morphed shift and dihedral offset. Triangles are wound outward whichever
/// way the profile ring turns: `2·N·(slice_count − 1)` side triangles, then
/// `N` root-cap and `N` tip-cap fan triangles.
///
/// `span` is not validated, and non-finite parameters propagate into the buffers.
///
/// ```rust
/// use wingloft::mesh::{SpanMorphParameters, build_lofted_solid};
/// use wingloft::profile::generate_cross_section;
///
/// let profile = generate_cross_section("0006", 1.0, 10);
/// let params = SpanMorphParameters { slice_count: 4, ..Default::default() };
/// let mesh = build_lofted_solid(&profile, 3.0, &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 4 * 21 + 2);
/// ```
pub fn build_lofted_solid(
    profile: &Profile,
    span: Real,
    params: &SpanMorphParameters,
) -> Result<WingMesh, ValidationError> {
    let section = profile.without_closing_point();
    let n = section.len();
    if n < 3 {
        return Err(ValidationError::TooFewPoints(n));
    }
    if params.slice_count < 2 {
        return Err(ValidationError::TooFewSlices(params.slice_count));
    }

    let chord = profile.chord();
    let half_span = span / 2.0;
    let start_z = morph_start(span, params.start_percent);
    let stations = stations(span, params);
    log::debug!(
        "lofting {n}-point section over span {span} with {} stations (morph from z = {start_z})",
        stations.len()
    );

    let mut vertices = station_rings(section.points(), &stations, start_z, chord, params);
    let root_apex = vertices.len() as u32;
    let tip_apex = root_apex + 1;
    vertices.push(Point3::new(0.0, 0.0, -half_span));
    vertices.push(Point3::new(
        params.shift_amount * chord,
        params.dihedral_angle.tan() * (half_span - start_z),
        half_span,
    ));

    // generated NACA rings are clockwise
    let flip = section.signed_area() < 0.0;
    let ring = n as u32;
    let slices = stations.len() as u32;
    let mut triangles = Vec::with_capacity(2 * n * stations.len());

    for s in 0..slices - 1 {
        for j in 0..ring {
            let a = s * ring + j;
            let b = s * ring + (j + 1) % ring;
            let c = a + ring;
            let d = b + ring;
            triangles.push(wind([a, b, c], flip));
            triangles.push(wind([b, d, c], flip));
        }
    }

    let tip = (slices - 1) * ring;
    for j in 0..ring {
        let next = (j + 1) % ring;
        triangles.push(wind([next, j, root_apex], flip));
    }
    for j in 0..ring {
        let next = (j + 1) % ring;
        triangles.push(wind([tip + j, tip + next, tip_apex], flip));
    }

    Ok(WingMesh::from_triangles(&vertices, &triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::generate_cross_section;

    #[test]
    fn progress_ramp() {
        assert_eq!(morph_progress(-1.0, 0.0, 1.5), 0.0);
        assert_eq!(morph_progress(0.0, 0.0, 1.5), 0.0);
        assert!((morph_progress(0.75, 0.0, 1.5) - 0.5).abs() < 1e-12);
        assert_eq!(morph_progress(1.5, 0.0, 1.5), 1.0);
        // no ramp left: only the tip side of start counts
        assert_eq!(morph_progress(1.5, 1.5, 1.5), 0.0);
        assert_eq!(morph_progress(1.6, 1.5, 1.5), 1.0);
    }

    #[test]
    fn start_is_clamped() {
        assert_eq!(morph_start(2.0, -3.0), -1.0);
        assert_eq!(morph_start(2.0, 7.0), 1.0);
        assert_eq!(morph_start(2.0, 0.25), -0.5);
    }

    #[test]
    fn stations_span_root_to_tip() {
        let params = SpanMorphParameters {
            slice_count: 5,
            start_percent: 0.0,
            ..Default::default()
        };
        let stations = stations(4.0, &params);
        let z: Vec<Real> = stations.iter().map(|s| s.z).collect();
        assert_eq!(z, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(stations[0].t, 0.0);
        assert_eq!(stations[4].t, 1.0);
    }

    #[test]
    fn rejects_degenerate_input() {
        let two_points = Profile::from_points(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], 1.0);
        assert_eq!(
            build_lofted_solid(&two_points, 1.0, &SpanMorphParameters::default()),
            Err(ValidationError::TooFewPoints(2))
        );

        let profile = generate_cross_section("0012", 1.0, 8);
        let params = SpanMorphParameters {
            slice_count: 1,
            ..Default::default()
        };
        assert_eq!(
            build_lofted_solid(&profile, 1.0, &params),
            Err(ValidationError::TooFewSlices(1))
        );
    }

    #[test]
    fn seam_duplicate_counts_as_one_point() {
        // a closed triangle ring: 4 points, the last repeating the first
        let ring = Profile::from_points(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(0.0, 0.0),
            ],
            1.0,
        );
        let params = SpanMorphParameters {
            slice_count: 2,
            ..Default::default()
        };
        let mesh = build_lofted_solid(&ring, 1.0, &params).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 3 + 2);
        assert_eq!(mesh.triangle_count(), 2 * 3 + 2 * 3);
        assert!((mesh.signed_volume() - 0.5).abs() < 1e-12);
    }
}
