// SPDX-License-Identifier: AGPL-3.0-only

//! Spectral coefficient validation: κ₁, κ₂, κ₃ from SM field content.
//!
//! Rebuilds each κ from the per-field Dynkin-index sums and checks the
//! exact fractions: ΣY²/gen = 10/3, κ₂ = 26/3, κ₃ = 8, κ₁ = 81/20 before
//! normalization and 14 after.

use qgi_validation::report;
use qgi_validation::spectral;
use qgi_validation::tolerances;
use qgi_validation::validation::ValidationHarness;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Spectral Coefficients — κ from SM field content            ║");
    println!("║  Dynkin-index sums, exact fractions                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut harness = ValidationHarness::new("spectral_coefficients");

    println!("  Phase 1: hypercharge sum per generation");
    let y2 = spectral::hypercharge_sum_per_gen();
    println!("    sum Y^2 / gen = {y2:.12} (expect 10/3)");
    harness.check_abs("sum Y^2 per generation", y2, 10.0 / 3.0, tolerances::EXACT_IDENTITY);

    println!();
    println!("  Phase 2: non-abelian coefficients");
    println!("    kappa_2 = {:.12} (expect 26/3)", spectral::kappa_2());
    println!("    kappa_3 = {:.12} (expect 8)", spectral::kappa_3());
    harness.check_abs("kappa_2 = 26/3", spectral::kappa_2(), 26.0 / 3.0, tolerances::EXACT_IDENTITY);
    harness.check_abs("kappa_3 = 8", spectral::kappa_3(), 8.0, tolerances::EXACT_IDENTITY);

    println!();
    println!("  Phase 3: U(1)_Y normalization");
    let k1_raw = spectral::kappa_1_unnormalized();
    let n1 = spectral::normalization_n1();
    println!("    kappa_1 (raw)  = {k1_raw:.12} (expect 81/20)");
    println!("    N_1            = {n1:.12}");
    println!("    kappa_1        = {:.12} (expect 14)", spectral::kappa_1());
    harness.check_abs("kappa_1 raw = 81/20", k1_raw, 81.0 / 20.0, tolerances::EXACT_IDENTITY);
    harness.check_abs("kappa_1 normalized = 14", spectral::kappa_1(), 14.0, tolerances::CLOSED_FORM);

    match report::save_harness(&harness, "spectral_coefficients") {
        Ok(path) => println!("\n  artifact: {path}"),
        Err(e) => println!("\n  WARNING: could not write artifact ({e})"),
    }

    harness.finish()
}
