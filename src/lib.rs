//! Parametric **NACA airfoil** cross-sections lofted into **span-morphed wing solids**,
//! built to feed a browser renderer with flat vertex/index buffers.
//!
//! A 4- or 5-digit designation becomes a closed 2D [`Profile`](profile::Profile);
//! [`build_lofted_solid`](mesh::build_lofted_solid) stacks that section along the
//! span, scaling, shifting and bending it past a morph start, and caps both ends.
//!
//! ```rust
//! use wingloft::mesh::{SpanMorphParameters, build_lofted_solid};
//! use wingloft::profile::generate_cross_section;
//!
//! let profile = generate_cross_section("23012", 1.0, 40);
//! let params = SpanMorphParameters {
//!     start_percent: 0.3,
//!     thickness_factor: 0.5,
//!     slice_count: 12,
//!     shift_amount: 0.25,
//!     dihedral_angle: 5.0_f64.to_radians(),
//! };
//! let wing = build_lofted_solid(&profile, 6.0, &params).unwrap();
//! assert!(wing.is_closed());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - **hashmap**: use hashbrown for edge bookkeeping in `is_closed`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to place span stations
//! - **wasm**: `wasm-bindgen` bindings for the browser
//! - **console_error_panic_hook**: forward panics to the browser console

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod naca;
pub mod profile;
pub mod triangulated;
pub mod wing;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use mesh::WingMesh;
pub use profile::Profile;
pub use wing::WingModel;
