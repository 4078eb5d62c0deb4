// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: cross-module physics consistency.
//!
//! Each test ties at least two modules together the way the validation
//! binaries do, so a drift in any shared constant shows up here before
//! it shows up as a suite failure.

use qgi_validation::{
    constants, cosmology, electroweak, gravity, neutrino, pmns, quark, spectral, stats, ward,
};

#[test]
fn epsilon_is_shared_by_every_sector() {
    // ward closure, EW parametrization, gravity shift, and D_eff all
    // consume the same ε = (2π)⁻³
    let eps = constants::epsilon();
    assert!((eps - ward::geometric_factor()).abs() < 1e-18);
    assert!((cosmology::d_eff() - (4.0 - eps)).abs() < 1e-15);
    assert!((gravity::g_eff_ratio() - (1.0 + gravity::c_grav() * eps)).abs() < 1e-15);
}

#[test]
fn ew_parametrization_uses_spectral_kappas() {
    assert!((electroweak::kappa_1_ew() - spectral::kappa_1_unnormalized()).abs() < 1e-15);
    assert!((electroweak::kappa_2_ew() - spectral::kappa_2()).abs() < 1e-15);
    // and the round trip through those kappas closes on the PDG inputs
    let rec = electroweak::reconstruct_from_pdg();
    assert!((rec.alpha_em_inv - constants::ALPHA_EM_INV_MZ).abs() < 1e-9);
}

#[test]
fn triplet_scan_agrees_with_the_standalone_modules() {
    // the scan row for {1,3,7} must reproduce the canonical spectrum and
    // the MaxEnt angles computed directly
    let row = neutrino::evaluate_triplet(1, 3, 7);
    let spec = neutrino::canonical_spectrum();
    let angles = pmns::maxent_angles(1, 3, 7);
    assert!((row.m2_mev - spec.m2 * 1e3).abs() < 1e-12);
    assert!((row.theta_12 - angles.theta_12).abs() < 1e-12);
    assert!((row.chi2_pmns - pmns::chi2_angles(&angles)).abs() < 1e-12);
}

#[test]
fn statistics_table_matches_sector_modules() {
    // the headline table is hardcoded for the report; it must stay in
    // sync with what the sector modules actually compute
    let by_name = |n: &str| {
        stats::OBSERVABLES
            .iter()
            .find(|o| o.name == n)
            .unwrap_or_else(|| panic!("missing observable {n}"))
    };

    let spec = neutrino::canonical_spectrum();
    assert!((by_name("m3").qgi - spec.m3).abs() < 0.1e-3);
    assert!((by_name("Delta_m21_sq").qgi - spec.delta_m21_sq).abs() < 0.01e-5);

    let angles = pmns::maxent_angles(1, 3, 7);
    assert!((by_name("theta12").qgi - angles.theta_12).abs() < 0.01);
    assert!((by_name("theta13").qgi - angles.theta_13).abs() < 0.01);
    assert!((by_name("theta23").qgi - angles.theta_23).abs() < 0.01);

    assert!((by_name("c_d_over_c_u").qgi - quark::RATIO_PREDICTED).abs() < 1e-12);
    assert!((by_name("G_correction").qgi - (gravity::g_eff_ratio() - 1.0)).abs() < 2e-4);
    assert!((by_name("Y_p").qgi - cosmology::Y_P_MANUSCRIPT).abs() < 1e-12);
}

#[test]
fn scan_minimum_survives_a_larger_window() {
    // widening the winding window must not dethrone {1,3,7}
    let results = neutrino::exhaustive_scan(12);
    let best = &results[0];
    assert_eq!((best.n1, best.n2, best.n3), (1, 3, 7));
}

#[test]
fn solar_tension_consistent_between_datasets() {
    let (sigma_pdg, pct_pdg) = neutrino::solar_tension(&qgi_validation::data::PDG_2024);
    let (sigma_nufit, pct_nufit) = neutrino::solar_tension(&qgi_validation::data::NUFIT_6_0);
    // both datasets see the same-direction tension at a few sigma
    assert!(sigma_pdg > 2.0 && sigma_nufit > 2.0);
    assert!(pct_pdg > 0.0 && pct_nufit > 0.0);
    assert!((pct_pdg - pct_nufit).abs() < 2.0);
}
