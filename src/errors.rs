//! Validation errors

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// (MalformedDesignation) A NACA code is not exactly 4 or 5 digits
    #[error("(MalformedDesignation) Not a 4- or 5-digit NACA designation: {0:?}")]
    MalformedDesignation(String),
    /// (TooFewPoints) A cross-section ring has fewer than 3 distinct points
    #[error("(TooFewPoints) A cross-section needs at least 3 distinct points, got {0}")]
    TooFewPoints(usize),
    /// (TooFewSlices) A loft needs at least a root and a tip station
    #[error("(TooFewSlices) A loft needs at least 2 span stations, got {0}")]
    TooFewSlices(usize),
}
