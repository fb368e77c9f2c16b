use wingloft::{
    WingModel,
    mesh::{SpanMorphParameters, build_lofted_solid},
    profile::generate_cross_section,
};

mod support;

use crate::support::{approx_eq, unmorphed};

#[test]
fn build_matches_the_free_functions() {
    let params = SpanMorphParameters {
        start_percent: 0.2,
        thickness_factor: 0.6,
        slice_count: 8,
        shift_amount: 0.1,
        dihedral_angle: 0.05,
    };
    let model = WingModel::new("4412", 1.2, 30, 5.0, params);
    let expected =
        build_lofted_solid(&generate_cross_section("4412", 1.2, 30), 5.0, &params).unwrap();
    assert_eq!(model.build().unwrap(), expected);
    assert_eq!(model.profile(), &generate_cross_section("4412", 1.2, 30));
}

#[test]
fn params_survive_a_new_airfoil() {
    let params = SpanMorphParameters {
        thickness_factor: 1.5,
        ..unmorphed(6)
    };
    let mut model = WingModel::new("0012", 1.0, 20, 2.0, params);
    let before = model.build().unwrap();

    model.set_designation("23012");
    assert_eq!(model.designation(), "23012");
    assert_eq!(model.params(), &params);

    let after = model.build().unwrap();
    assert_ne!(before, after);
    assert_eq!(
        after,
        build_lofted_solid(&generate_cross_section("23012", 1.0, 20), 2.0, &params).unwrap()
    );
}

#[test]
fn section_inputs_regenerate_the_profile() {
    let mut model = WingModel::default();

    model.set_sample_count(10);
    assert_eq!(model.profile().len(), 22);

    model.set_chord(3.0);
    assert!(approx_eq(model.profile().chord(), 3.0, 1e-12));
    assert!(approx_eq(model.profile().points()[0].x, -1.5, 1e-12));

    let before = model.profile().clone();
    model.set_designation("0015");
    assert_ne!(model.profile(), &before);
    assert_eq!(model.profile(), &generate_cross_section("0015", 3.0, 10));
}

#[test]
fn span_and_params_keep_the_profile() {
    let mut model = WingModel::default();
    let profile = model.profile().clone();

    model.set_span(9.0);
    model.set_params(unmorphed(3));
    assert_eq!(model.profile(), &profile);

    let mesh = model.build().unwrap();
    let (min, max) = mesh.bounding_box().unwrap();
    assert!(approx_eq(min.z, -4.5, 1e-12));
    assert!(approx_eq(max.z, 4.5, 1e-12));
}

#[test]
fn invalid_params_surface_as_errors() {
    let mut model = WingModel::default();
    model.set_params(unmorphed(1));
    assert!(model.build().is_err());
}
