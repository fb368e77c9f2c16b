//! `WingModel`: the state a viewer keeps between rebuilds.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::{SpanMorphParameters, WingMesh, build_lofted_solid};
use crate::profile::{Profile, generate_cross_section};

/// Last-used generation inputs plus the profile they produced.
///
/// Changing the section inputs regenerates the profile; changing span or morph
/// parameters keeps it. [`WingModel::build`] lofts a fresh mesh each call, so
/// the current morph parameters carry over to a new airfoil without any
/// rebinding.
#[derive(Debug, Clone, PartialEq)]
pub struct WingModel {
    designation: String,
    chord: Real,
    sample_count: usize,
    span: Real,
    params: SpanMorphParameters,
    profile: Profile,
}

impl WingModel {
    pub fn new(
        designation: &str,
        chord: Real,
        sample_count: usize,
        span: Real,
        params: SpanMorphParameters,
    ) -> Self {
        WingModel {
            designation: designation.to_string(),
            chord,
            sample_count,
            span,
            params,
            profile: generate_cross_section(designation, chord, sample_count),
        }
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub const fn chord(&self) -> Real {
        self.chord
    }

    pub const fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub const fn span(&self) -> Real {
        self.span
    }

    pub const fn params(&self) -> &SpanMorphParameters {
        &self.params
    }

    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_designation(&mut self, designation: &str) {
        self.designation = designation.to_string();
        self.regenerate();
    }

    pub fn set_chord(&mut self, chord: Real) {
        self.chord = chord;
        self.regenerate();
    }

    pub fn set_sample_count(&mut self, sample_count: usize) {
        self.sample_count = sample_count;
        self.regenerate();
    }

    pub const fn set_span(&mut self, span: Real) {
        self.span = span;
    }

    pub const fn set_params(&mut self, params: SpanMorphParameters) {
        self.params = params;
    }

    /// Loft the current profile with the current span and morph parameters.
    pub fn build(&self) -> Result<WingMesh, ValidationError> {
        build_lofted_solid(&self.profile, self.span, &self.params)
    }

    fn regenerate(&mut self) {
        self.profile = generate_cross_section(&self.designation, self.chord, self.sample_count);
    }
}

impl Default for WingModel {
    fn default() -> Self {
        WingModel::new("2412", 1.0, 60, 4.0, SpanMorphParameters::default())
    }
}
