// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Coordinates closer than this are the same point when closing a profile ring.
pub const SEAM_EPSILON: Real = 1e-9;

/// Machine epsilon for the active `Real`
#[cfg(feature = "f32")]
pub const EPSILON: Real = f32::EPSILON;
/// Machine epsilon for the active `Real`
#[cfg(feature = "f64")]
pub const EPSILON: Real = f64::EPSILON;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;
