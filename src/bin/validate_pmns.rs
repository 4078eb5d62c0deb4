// SPDX-License-Identifier: AGPL-3.0-only

//! PMNS mixing-angle validation and the b = 1/6 fixed point.
//!
//! Flags: `--seed=` (contraction start, default 13579), `--iters=`
//! (default 200, must be ≥ 1).
//!
//! # Validation targets
//!
//! | Check            | Tolerance | Basis                         |
//! |------------------|-----------|-------------------------------|
//! | θ₁₂, θ₁₃, θ₂₃    | 1.5°      | MaxEnt kernel vs global fit   |
//! | angle χ² (3 dof) | p > 0.01  | joint consistency             |
//! | b fixed point    | 1e-12     | contraction convergence       |

use qgi_validation::data::parse_flag_usize;
use qgi_validation::figures;
use qgi_validation::neutrino;
use qgi_validation::pmns;
use qgi_validation::provenance;
use qgi_validation::report;
use qgi_validation::tolerances;
use qgi_validation::validation::ValidationHarness;

fn main() {
    let seed = parse_flag_usize("seed", 13_579) as u64;
    let iters = parse_flag_usize("iters", 200);
    if iters == 0 {
        eprintln!("ERROR: --iters must be at least 1 (the contraction history would be empty)");
        std::process::exit(2);
    }

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  PMNS Angles — MaxEnt kernel at the b = 1/6 fixed point     ║");
    println!("║  f_ij = |n_j − n_i| / (n_i n_j)^(1/6)                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    provenance::print_reference(&provenance::THETA_12);
    provenance::print_reference(&provenance::THETA_13);
    provenance::print_reference(&provenance::THETA_23);
    println!();

    let mut harness = ValidationHarness::new("pmns_angles");

    println!("  Phase 1: angles for the canonical triplet");
    let (n1, n2, n3) = neutrino::CANONICAL_TRIPLET;
    let angles = pmns::maxent_angles(n1, n2, n3);
    println!("    theta_12 = {:.4} deg (obs {:.2})", angles.theta_12, provenance::THETA_12.value);
    println!("    theta_13 = {:.4} deg (obs {:.2})", angles.theta_13, provenance::THETA_13.value);
    println!("    theta_23 = {:.4} deg (obs {:.2})", angles.theta_23, provenance::THETA_23.value);
    harness.check_abs(
        "theta_12",
        angles.theta_12,
        provenance::THETA_12.value,
        tolerances::PMNS_ANGLE_DEG,
    );
    harness.check_abs(
        "theta_13",
        angles.theta_13,
        provenance::THETA_13.value,
        tolerances::PMNS_ANGLE_DEG,
    );
    harness.check_abs(
        "theta_23",
        angles.theta_23,
        provenance::THETA_23.value,
        tolerances::PMNS_ANGLE_DEG,
    );

    println!();
    println!("  Phase 2: joint chi^2");
    let chi2 = pmns::chi2_angles(&angles);
    let p = pmns::p_value(chi2);
    println!("    chi^2 = {chi2:.4} over 3 dof, p = {p:.4}");
    harness.check_abs("angle chi^2", chi2, 1.6016, 0.01);
    harness.check_lower("angle p-value", p, tolerances::P_VALUE_MIN);

    println!();
    println!("  Phase 3: contraction to the b = 1/6 fixed point (seed {seed})");
    let hist = pmns::fixed_point_history(seed, iters);
    let last = hist[hist.len() - 1];
    println!("    after {iters} iterations: b = {:.15}, |b - 1/6| = {:.3e}", last.b, last.abs_err);
    harness.check_abs("b converges to 1/6", last.b, pmns::B_EXPONENT, tolerances::EXACT_IDENTITY);
    // geometric contraction rate 1/2
    harness.check_upper("error after 50 steps", hist[49.min(hist.len() - 1)].abs_err, 1e-12);

    println!();
    let rows = report::contraction_rows(&hist);
    match report::save_csv(
        report::RESULTS_DIR,
        "pmns_contraction",
        report::CONTRACTION_HEADER,
        &rows,
    ) {
        Ok(path) => println!("  csv: {path}"),
        Err(e) => println!("  WARNING: csv failed ({e})"),
    }
    let fig = format!("{}/pmns_contraction.png", figures::FIGURES_DIR);
    let points: Vec<(f64, f64)> = hist.iter().map(|s| (s.iter as f64, s.abs_err)).collect();
    match figures::log10_line_chart(
        &fig,
        "Fixed-point contraction b -> 1/6",
        "iteration",
        "log10 |b - 1/6|",
        "|b - 1/6|",
        &points,
        -17.0,
    ) {
        Ok(()) => println!("  figure: {fig}"),
        Err(e) => println!("  WARNING: figure failed ({e})"),
    }
    if let Err(e) = report::save_harness(&harness, "pmns_angles") {
        println!("  WARNING: could not write check summary ({e})");
    }

    harness.finish()
}
