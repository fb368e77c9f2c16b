//! [NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil) designations, mean lines
//! and the shared thickness distribution.

use crate::errors::ValidationError;
use crate::float_types::Real;
use std::fmt;
use std::str::FromStr;

pub mod five_digit;
pub mod four_digit;

pub use five_digit::FiveDigitMeanLine;
pub use four_digit::FourDigitMeanLine;

/// A mean camber line, evaluated in chord-normalized coordinates.
pub trait MeanLine {
    /// Returns `(yc / chord, dyc/dx)` at the chordwise fraction `xc` ∈ [0, 1].
    fn camber(&self, xc: Real) -> (Real, Real);
}

/// A 4- or 5-digit NACA designation, stored digit by digit.
///
/// The canonical text form is the zero-padded digit string, so
/// `NacaDesignation::parse_lenient("12").to_string() == "0012"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NacaDesignation {
    FourDigit {
        /// Maximum camber in percent of chord.
        max_camber: u8,
        /// Location of maximum camber in tenths of chord.
        camber_position: u8,
        /// Maximum thickness in percent of chord.
        thickness: u8,
    },
    FiveDigit {
        /// Design lift coefficient in units of 0.15.
        lift: u8,
        /// Camber peak location in units of 0.05 chord.
        position: u8,
        /// Reflexed mean line (`Q = 1`).
        reflex: bool,
        /// Maximum thickness in percent of chord.
        thickness: u8,
    },
}

impl NacaDesignation {
    /// Parse a designation without ever failing.
    ///
    /// Codes with five or more decimal digits use the 5-digit family: non-digits
    /// are stripped, the rest is left-padded with `0` to five digits and truncated
    /// to the first five. Anything else is a 4-digit code: the trimmed text is
    /// left-padded with `0` to four characters, truncated to the first four, and
    /// any character that is not a decimal digit reads as `0`.
    ///
    /// A 5-digit code whose third digit is above `1` is read as a normal
    /// (unreflexed) mean line with a warning, so its `Display` form no longer
    /// echoes the input: `"12345"` prints as `"12045"`.
    pub fn parse_lenient(code: &str) -> Self {
        let digit_count = code.chars().filter(char::is_ascii_digit).count();
        if digit_count >= 5 {
            let digits: String = code.chars().filter(char::is_ascii_digit).collect();
            let d = padded_digits::<5>(&digits);
            if d[2] > 1 {
                log::warn!("NACA {code:?}: reflex digit {} read as normal camber", d[2]);
            }
            NacaDesignation::FiveDigit {
                lift: d[0],
                position: d[1],
                reflex: d[2] == 1,
                thickness: d[3] * 10 + d[4],
            }
        } else {
            let d = padded_digits::<4>(code.trim());
            NacaDesignation::FourDigit {
                max_camber: d[0],
                camber_position: d[1],
                thickness: d[2] * 10 + d[3],
            }
        }
    }

    /// Maximum thickness as a fraction of chord (last two digits / 100).
    pub fn thickness_fraction(&self) -> Real {
        let thickness = match *self {
            NacaDesignation::FourDigit { thickness, .. } => thickness,
            NacaDesignation::FiveDigit { thickness, .. } => thickness,
        };
        thickness as Real / 100.0
    }

    /// Number of digits in the canonical form.
    pub const fn digit_count(&self) -> usize {
        match self {
            NacaDesignation::FourDigit { .. } => 4,
            NacaDesignation::FiveDigit { .. } => 5,
        }
    }

    /// `true` when the mean line is the chord line itself.
    pub const fn is_symmetric(&self) -> bool {
        match *self {
            NacaDesignation::FourDigit {
                max_camber,
                camber_position,
                ..
            } => max_camber == 0 || camber_position == 0,
            NacaDesignation::FiveDigit { lift, .. } => lift == 0,
        }
    }
}

/// Left-pad `text` with `'0'` to `N` characters, keep the first `N`,
/// and read each as a decimal digit (anything else becomes `0`).
fn padded_digits<const N: usize>(text: &str) -> [u8; N] {
    let chars: Vec<char> = text.chars().collect();
    let padding = N.saturating_sub(chars.len());
    let mut digits = [0u8; N];
    for (slot, c) in digits.iter_mut().skip(padding).zip(chars.iter()) {
        *slot = c.to_digit(10).unwrap_or(0) as u8;
    }
    digits
}

impl FromStr for NacaDesignation {
    type Err = ValidationError;

    /// Strict parse: exactly four or five ASCII digits, optionally preceded by
    /// `NACA` (any case) and whitespace. The reflex digit of a 5-digit code must
    /// be `0` or `1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedDesignation(s.to_string());

        let trimmed = s.trim();
        let body = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
            _ => trimmed,
        };
        if !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let d: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
        match d.as_slice() {
            [m, p, t0, t1] => Ok(NacaDesignation::FourDigit {
                max_camber: *m,
                camber_position: *p,
                thickness: t0 * 10 + t1,
            }),
            [l, p, q @ (0 | 1), t0, t1] => Ok(NacaDesignation::FiveDigit {
                lift: *l,
                position: *p,
                reflex: *q == 1,
                thickness: t0 * 10 + t1,
            }),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for NacaDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NacaDesignation::FourDigit {
                max_camber,
                camber_position,
                thickness,
            } => write!(f, "{max_camber}{camber_position}{thickness:02}"),
            NacaDesignation::FiveDigit {
                lift,
                position,
                reflex,
                thickness,
            } => write!(f, "{lift}{position}{}{thickness:02}", u8::from(reflex)),
        }
    }
}

/// NACA 4-digit thickness half-width at chordwise fraction `xc`, in chord units.
///
/// Shared by both families. The trailing edge is left open (`yt(1) ≈ 0.0021·t/0.2`).
pub fn half_thickness(thickness: Real, xc: Real) -> Real {
    thickness / 0.2
        * (0.2969 * xc.sqrt() - 0.1260 * xc - 0.3516 * xc * xc + 0.2843 * xc * xc * xc
            - 0.1015 * xc * xc * xc * xc)
}
