use super::MeanLine;
use crate::float_types::Real;

/// Design lift coefficient the tabulated `k1` values were computed for.
const REFERENCE_LIFT: Real = 0.3;

/// Table key used when a position code has no tabulated entry.
const FALLBACK_KEY: u8 = 15;

/// Standard mean-line constants: `(5·P, r, k1)`.
const NORMAL_TABLE: [(u8, Real, Real); 5] = [
    (5, 0.0580, 361.400),
    (10, 0.1260, 51.640),
    (15, 0.2025, 15.957),
    (20, 0.2900, 6.643),
    (25, 0.3910, 3.230),
];

/// Reflexed mean-line constants: `(5·P, r, k1, k2/k1)`.
const REFLEX_TABLE: [(u8, Real, Real, Real); 4] = [
    (10, 0.1300, 51.990, 0.000764),
    (15, 0.2170, 15.793, 0.00677),
    (20, 0.3180, 6.520, 0.0303),
    (25, 0.4410, 3.191, 0.1355),
];

/// Coefficients of a 5-digit mean line before lift scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberCoefficients {
    pub r: Real,
    pub k1: Real,
    pub k2_over_k1: Real,
}

/// Look up the tabulated coefficients for table key `5·P`.
///
/// Keys outside the table fall back to the `15` entry; nothing is interpolated.
pub fn coefficients(key: u8, reflex: bool) -> CamberCoefficients {
    let find = |key: u8| -> Option<CamberCoefficients> {
        if reflex {
            REFLEX_TABLE
                .iter()
                .find(|entry| entry.0 == key)
                .map(|&(_, r, k1, k2_over_k1)| CamberCoefficients { r, k1, k2_over_k1 })
        } else {
            NORMAL_TABLE
                .iter()
                .find(|entry| entry.0 == key)
                .map(|&(_, r, k1)| CamberCoefficients {
                    r,
                    k1,
                    k2_over_k1: 0.0,
                })
        }
    };

    find(key).unwrap_or_else(|| {
        log::warn!(
            "no {} 5-digit mean line tabulated for key {key}, using key {FALLBACK_KEY}",
            if reflex { "reflexed" } else { "standard" }
        );
        // both tables carry the fallback key
        find(FALLBACK_KEY).unwrap_or(CamberCoefficients {
            r: 0.2025,
            k1: 15.957,
            k2_over_k1: 0.0,
        })
    })
}

/// Mean line of a [5-digit NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil#Five-digit_series):
/// a cubic forward of `r` joined to a straight line (standard) or a cubic tail
/// (reflexed) aft of it.
///
/// The constants come from a small fixed table rather than the closed-form
/// `k1`/`k2` equations, so intermediate position codes use the nearest
/// tabulated entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveDigitMeanLine {
    r: Real,
    k1: Real,
    k2: Real,
}

impl FiveDigitMeanLine {
    /// Creates a new `FiveDigitMeanLine` from the `L`, `P` and `Q` digits.
    pub fn new(lift: u8, position: u8, reflex: bool) -> Self {
        let design_lift = lift as Real * 3.0 / 20.0;
        let CamberCoefficients { r, k1, k2_over_k1 } = coefficients(position.saturating_mul(5), reflex);
        let k1 = k1 * design_lift / REFERENCE_LIFT;
        Self {
            r,
            k1,
            k2: if reflex { k2_over_k1 * k1 } else { 0.0 },
        }
    }

    /// Chordwise fraction where the forward cubic ends.
    pub const fn r(&self) -> Real {
        self.r
    }
}

impl MeanLine for FiveDigitMeanLine {
    fn camber(&self, xc: Real) -> (Real, Real) {
        let (r, k1, k2) = (self.r, self.k1, self.k2);
        let aft = 1.0 - xc;
        let tail = k2 / 6.0 * aft * aft * aft;
        let tail_slope = -k2 / 2.0 * aft * aft;
        if xc < r {
            (
                k1 / 6.0 * (xc * xc * xc - 3.0 * r * xc * xc + r * r * (3.0 - r) * xc) + tail,
                k1 / 6.0 * (3.0 * xc * xc - 6.0 * r * xc + r * r * (3.0 - r)) + tail_slope,
            )
        } else {
            (
                k1 / 6.0 * r * r * r * aft + tail,
                -k1 / 6.0 * r * r * r + tail_slope,
            )
        }
    }
}
