// SPDX-License-Identifier: AGPL-3.0-only

//! Ward identity closure validation.
//!
//! The single-axiom check: α_info = 1/(8π³ ln π) is the unique member of
//! the candidate family for which ε = α · ln π collapses to the geometric
//! factor (2π)⁻³. The alternatives (base e, base 2π, doubled prefactor)
//! must fail the closure by at least 10⁻⁴.
//!
//! # Validation targets
//!
//! | Check                        | Tolerance | Basis                  |
//! |------------------------------|-----------|------------------------|
//! | α_info digits                | 1e-12     | closed form            |
//! | ε = (2π)⁻³ closure           | 1e-15     | exact identity         |
//! | \|ln α_info\| digits         | 1e-9      | derived constant       |
//! | alternatives break closure   | > 1e-4    | uniqueness             |

use qgi_validation::constants;
use qgi_validation::report;
use qgi_validation::tolerances;
use qgi_validation::validation::ValidationHarness;
use qgi_validation::ward;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Ward Identity Closure — α_info = 1/(8π³ ln π)              ║");
    println!("║  ε = α_info · ln π must equal (2π)⁻³ exactly                ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut harness = ValidationHarness::new("ward_closure");

    println!("  Phase 1: canonical constants");
    let alpha = constants::alpha_info();
    let eps = constants::epsilon();
    println!("    alpha_info     = {alpha:.15e}");
    println!("    epsilon        = {eps:.15e}");
    println!("    |ln alpha_info| = {:.12}", constants::ln_alpha_info_abs());

    harness.check_abs(
        "alpha_info digits",
        alpha,
        3.521_740_677_853_072e-3,
        tolerances::EXACT_IDENTITY,
    );
    harness.check_abs(
        "epsilon = (2pi)^-3",
        eps,
        ward::geometric_factor(),
        1e-15,
    );
    harness.check_abs(
        "ln|alpha_info| digits",
        constants::ln_alpha_info_abs(),
        5.648_799_900_849,
        tolerances::CLOSED_FORM,
    );
    harness.check_upper("canonical closure residual", ward::canonical_residual(), 1e-15);

    println!();
    println!("  Phase 2: closure battery over candidate couplings");
    let battery = ward::closure_battery();
    println!("    {:<14} {:>14} {:>14} {:>12}", "candidate", "alpha", "epsilon", "residual");
    for t in &battery {
        println!(
            "    {:<14} {:>14.6e} {:>14.6e} {:>12.3e}",
            t.name, t.alpha, t.epsilon, t.residual
        );
    }
    harness.check_upper("alpha_info residual", battery[0].residual, 1e-15);
    harness.check_lower("alpha_alt_e breaks closure", battery[1].residual, 1e-4);
    harness.check_lower("alpha_alt_2pi breaks closure", battery[2].residual, 1e-4);
    harness.check_lower("alpha_alt_half breaks closure", battery[3].residual, 1e-4);

    match report::save_harness(&harness, "ward_closure") {
        Ok(path) => println!("\n  artifact: {path}"),
        Err(e) => println!("\n  WARNING: could not write artifact ({e})"),
    }

    harness.finish()
}
