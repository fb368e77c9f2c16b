use super::MeanLine;
use crate::float_types::Real;

/// Mean line of a [4-digit NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil#Four-digit_series):
/// two parabolic arcs meeting with matching value and slope at the camber peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourDigitMeanLine {
    /// Maximum camber (fraction of chord).
    m: Real,
    /// Location of maximum camber (fraction of chord).
    p: Real,
}

impl FourDigitMeanLine {
    /// Creates a new `FourDigitMeanLine` from the first two designation digits.
    pub fn new(max_camber: u8, camber_position: u8) -> Self {
        Self {
            m: max_camber as Real / 100.0,
            p: camber_position as Real / 10.0,
        }
    }
}

impl MeanLine for FourDigitMeanLine {
    fn camber(&self, xc: Real) -> (Real, Real) {
        let (m, p) = (self.m, self.p);
        if p == 0.0 {
            // symmetric section
            (0.0, 0.0)
        } else if xc < p {
            let k = m / (p * p);
            (k * (2.0 * p * xc - xc * xc), 2.0 * k * (p - xc))
        } else {
            let k = m / ((1.0 - p) * (1.0 - p));
            (
                k * ((1.0 - 2.0 * p) + 2.0 * p * xc - xc * xc),
                2.0 * k * (p - xc),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_is_continuous() {
        let line = FourDigitMeanLine::new(2, 4);
        let (before, slope_before) = line.camber(0.4 - 1e-9);
        let (after, slope_after) = line.camber(0.4);
        assert!((before - 0.02).abs() < 1e-8);
        assert!((after - 0.02).abs() < 1e-12);
        assert!(slope_before.abs() < 1e-7 && slope_after.abs() < 1e-12);
    }

    #[test]
    fn ends_on_chord_line() {
        let line = FourDigitMeanLine::new(6, 4);
        assert_eq!(line.camber(0.0).0, 0.0);
        assert!(line.camber(1.0).0.abs() < 1e-12);
    }

    #[test]
    fn zero_position_is_flat() {
        let line = FourDigitMeanLine::new(5, 0);
        for xc in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(line.camber(xc), (0.0, 0.0));
        }
    }
}
