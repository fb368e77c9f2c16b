//! `Profile`: the closed 2D cross-section of a wing, and the NACA generators that build it.

use crate::float_types::{PI, Real, SEAM_EPSILON};
use crate::naca::{FiveDigitMeanLine, FourDigitMeanLine, MeanLine, NacaDesignation, half_thickness};
use geo::{Area, Coord, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// An ordered, closed ring of 2D points describing an airfoil section.
///
/// Generated profiles list the upper surface from leading to trailing edge,
/// then the lower surface back to the leading edge, with x shifted by
/// `-chord / 2`. A profile is a value: operations return new profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Point2<Real>>,
    chord: Real,
}

/// Build the cross-section for `designation`, dispatching on its digit count.
///
/// ```rust
/// let profile = wingloft::profile::generate_cross_section("2412", 1.0, 4);
/// assert_eq!(profile.len(), 10);
/// assert!((profile.points()[0].x + 0.5).abs() < 1e-12);
/// ```
pub fn generate_cross_section(designation: &str, chord: Real, sample_count: usize) -> Profile {
    Profile::naca(&NacaDesignation::parse_lenient(designation), chord, sample_count)
}

/// Build a 4-digit section, reading `code` leniently as a 4-digit designation.
pub fn generate_4_digit(code: &str, chord: Real, sample_count: usize) -> Profile {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    // more than four digits: keep the first four
    let code = if digits.len() > 4 { &digits[..4] } else { code };
    Profile::naca(&NacaDesignation::parse_lenient(code), chord, sample_count)
}

/// Build a 5-digit section, reading `code` leniently as a 5-digit designation.
pub fn generate_5_digit(code: &str, chord: Real, sample_count: usize) -> Profile {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    let padded = format!("{digits:0>5}");
    Profile::naca(&NacaDesignation::parse_lenient(&padded), chord, sample_count)
}

impl Profile {
    /// Wrap an existing ring of points. No validation is performed.
    pub const fn from_points(points: Vec<Point2<Real>>, chord: Real) -> Self {
        Profile { points, chord }
    }

    /// Sample a NACA section with `sample_count + 1` cosine-spaced stations per surface.
    ///
    /// A `sample_count` of zero is treated as one.
    pub fn naca(designation: &NacaDesignation, chord: Real, sample_count: usize) -> Self {
        let thickness = designation.thickness_fraction();
        match *designation {
            NacaDesignation::FourDigit {
                max_camber,
                camber_position,
                ..
            } => Self::from_mean_line(
                &FourDigitMeanLine::new(max_camber, camber_position),
                thickness,
                chord,
                sample_count,
            ),
            NacaDesignation::FiveDigit {
                lift,
                position,
                reflex,
                ..
            } => Self::from_mean_line(
                &FiveDigitMeanLine::new(lift, position, reflex),
                thickness,
                chord,
                sample_count,
            ),
        }
    }

    /// Wrap the NACA thickness distribution around `mean_line`.
    ///
    /// Stations follow `x = chord·(1 − cos β)/2` with `β = iπ/n`, which
    /// clusters points at both edges. Surface points are offset along the
    /// mean-line normal.
    pub fn from_mean_line<M: MeanLine + ?Sized>(
        mean_line: &M,
        thickness: Real,
        chord: Real,
        sample_count: usize,
    ) -> Self {
        let n = sample_count.max(1);
        let half_chord = chord / 2.0;
        let mut upper = Vec::with_capacity(2 * (n + 1));
        let mut lower = Vec::with_capacity(n + 1);

        for i in 0..=n {
            let beta = i as Real / n as Real * PI;
            let x = chord * (1.0 - beta.cos()) / 2.0;
            let xc = x / chord;
            let yt = chord * half_thickness(thickness, xc);
            let (yc, slope) = mean_line.camber(xc);
            let yc = chord * yc;
            let (sin_theta, cos_theta) = slope.atan().sin_cos();

            upper.push(Point2::new(x - yt * sin_theta - half_chord, yc + yt * cos_theta));
            lower.push(Point2::new(x + yt * sin_theta - half_chord, yc - yt * cos_theta));
        }

        upper.extend(lower.into_iter().rev());
        Profile {
            points: upper,
            chord,
        }
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub const fn chord(&self) -> Real {
        self.chord
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Upper surface, leading edge to trailing edge.
    pub fn upper_surface(&self) -> &[Point2<Real>] {
        &self.points[..self.points.len() / 2]
    }

    /// Lower surface, trailing edge to leading edge.
    pub fn lower_surface(&self) -> &[Point2<Real>] {
        &self.points[self.points.len() / 2..]
    }

    /// `true` if the first and last points coincide within `1e-9`.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => coincident(first, last),
            _ => false,
        }
    }

    /// The ring without a trailing point that duplicates the first one.
    ///
    /// Lofting a ring with a doubled seam point would produce a zero-area
    /// triangle pair along the seam.
    pub fn without_closing_point(&self) -> Profile {
        let mut points = self.points.clone();
        if self.is_closed() {
            points.pop();
        }
        Profile {
            points,
            chord: self.chord,
        }
    }

    /// The ring as a `geo` polygon (closed implicitly).
    pub fn to_geo_polygon(&self) -> GeoPolygon<Real> {
        let coords: Vec<Coord<Real>> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        GeoPolygon::new(LineString::new(coords), vec![])
    }

    /// Shoelace area: negative for clockwise rings, which is how NACA
    /// sections come out of the generator.
    pub fn signed_area(&self) -> Real {
        self.to_geo_polygon().signed_area()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty profile.
    pub fn bounding_box(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

fn coincident(a: &Point2<Real>, b: &Point2<Real>) -> bool {
    (a.x - b.x).abs() <= SEAM_EPSILON && (a.y - b.y).abs() <= SEAM_EPSILON
}
