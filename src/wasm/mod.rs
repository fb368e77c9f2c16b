use crate::float_types::Real;
use crate::mesh::{SpanMorphParameters, WingMesh};
use crate::profile::Profile;
use js_sys::{Float64Array, Object, Reflect, Uint32Array};
use nalgebra::Point2;
use serde::Deserialize;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub mod wing_js;

/// Runs once when the module loads: routes `log` records to the browser
/// console and, optionally, panics too.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // fails only if the host already installed a logger
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Morph parameters as they arrive from JS. Missing keys take the defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SpanMorphParamsJs {
    start_percent: f64,
    thickness_factor: f64,
    slice_count: f64,
    shift_amount: f64,
    dihedral_angle: f64,
}

impl Default for SpanMorphParamsJs {
    fn default() -> Self {
        let defaults = SpanMorphParameters::default();
        Self {
            start_percent: defaults.start_percent as f64,
            thickness_factor: defaults.thickness_factor as f64,
            slice_count: defaults.slice_count as f64,
            shift_amount: defaults.shift_amount as f64,
            dihedral_angle: defaults.dihedral_angle as f64,
        }
    }
}

impl From<SpanMorphParamsJs> for SpanMorphParameters {
    fn from(js: SpanMorphParamsJs) -> Self {
        SpanMorphParameters {
            start_percent: js.start_percent as Real,
            thickness_factor: js.thickness_factor as Real,
            // slider values may be fractional or out of range
            slice_count: js.slice_count.floor().max(2.0) as usize,
            shift_amount: js.shift_amount as Real,
            dihedral_angle: js.dihedral_angle as Real,
        }
    }
}

fn js_params(params: JsValue) -> Result<SpanMorphParameters, JsValue> {
    if params.is_undefined() || params.is_null() {
        return Ok(SpanMorphParameters::default());
    }
    let js: SpanMorphParamsJs = from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Failed to read morph parameters from JS: {e}")))?;
    Ok(js.into())
}

fn profile_to_array(profile: &Profile) -> Float64Array {
    let flat: Vec<f64> = profile
        .points()
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect();
    Float64Array::from(flat.as_slice())
}

fn profile_from_array(cross_section: &[f64], chord: Real) -> Profile {
    let points = cross_section
        .chunks_exact(2)
        .map(|xy| Point2::new(xy[0] as Real, xy[1] as Real))
        .collect();
    Profile::from_points(points, chord)
}

/// `{ positions, normals, indices }` for a `BufferGeometry`-style consumer.
fn mesh_to_object(mesh: &WingMesh) -> Result<Object, JsValue> {
    let positions: Vec<f64> = mesh.positions.iter().map(|&v| v as f64).collect();
    let normals: Vec<f64> = mesh.normals.iter().map(|&v| v as f64).collect();

    let obj = Object::new();
    Reflect::set(
        &obj,
        &"positions".into(),
        &Float64Array::from(positions.as_slice()).into(),
    )?;
    Reflect::set(
        &obj,
        &"normals".into(),
        &Float64Array::from(normals.as_slice()).into(),
    )?;
    Reflect::set(
        &obj,
        &"indices".into(),
        &Uint32Array::from(mesh.indices.as_slice()).into(),
    )?;
    Ok(obj)
}

/// Interleaved `[x0, y0, x1, y1, …]` cross-section for a NACA designation.
#[wasm_bindgen(js_name = generateCrossSection)]
pub fn generate_cross_section(designation: &str, chord: Real, sample_count: usize) -> Float64Array {
    profile_to_array(&crate::profile::generate_cross_section(designation, chord, sample_count))
}

/// Loft an interleaved cross-section into `{ positions, normals, indices }`.
#[wasm_bindgen(js_name = buildLoftedSolid)]
pub fn build_lofted_solid(
    cross_section: &[f64],
    chord: Real,
    span: Real,
    params: JsValue,
) -> Result<Object, JsValue> {
    let profile = profile_from_array(cross_section, chord);
    let params = js_params(params)?;
    let mesh = crate::mesh::build_lofted_solid(&profile, span, &params)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    mesh_to_object(&mesh)
}
