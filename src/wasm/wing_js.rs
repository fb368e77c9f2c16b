use crate::float_types::Real;
use crate::mesh::SpanMorphParameters;
use crate::wasm::{js_params, mesh_to_object, profile_to_array};
use crate::wing::WingModel;
use js_sys::{Float64Array, Object};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WingModelJs {
    inner: WingModel,
}

#[wasm_bindgen]
impl WingModelJs {
    #[wasm_bindgen(constructor)]
    pub fn new(designation: &str, chord: Real, sample_count: usize, span: Real) -> Self {
        Self {
            inner: WingModel::new(
                designation,
                chord,
                sample_count,
                span,
                SpanMorphParameters::default(),
            ),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn designation(&self) -> String {
        self.inner.designation().to_string()
    }

    #[wasm_bindgen(js_name = setDesignation)]
    pub fn set_designation(&mut self, designation: &str) {
        self.inner.set_designation(designation);
    }

    #[wasm_bindgen(js_name = setChord)]
    pub fn set_chord(&mut self, chord: Real) {
        self.inner.set_chord(chord);
    }

    #[wasm_bindgen(js_name = setSampleCount)]
    pub fn set_sample_count(&mut self, sample_count: usize) {
        self.inner.set_sample_count(sample_count);
    }

    #[wasm_bindgen(js_name = setSpan)]
    pub fn set_span(&mut self, span: Real) {
        self.inner.set_span(span);
    }

    /// Replace the morph parameters; missing keys take their defaults.
    #[wasm_bindgen(js_name = setParams)]
    pub fn set_params(&mut self, params: JsValue) -> Result<(), JsValue> {
        self.inner.set_params(js_params(params)?);
        Ok(())
    }

    /// Interleaved `[x, y]` points of the current cross-section.
    #[wasm_bindgen(js_name = crossSection)]
    pub fn cross_section(&self) -> Float64Array {
        profile_to_array(self.inner.profile())
    }

    /// Loft a fresh `{ positions, normals, indices }` from the current state.
    pub fn build(&self) -> Result<Object, JsValue> {
        let mesh = self
            .inner
            .build()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        mesh_to_object(&mesh)
    }
}
