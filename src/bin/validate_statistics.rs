// SPDX-License-Identifier: AGPL-3.0-only

//! Joint statistical validation over the 12-observable table.
//!
//! Full-covariance χ² (PMNS correlations included), Bayes factor against
//! the random-coincidence null, and the leave-one-sector-out robustness
//! scan. Also writes the pull chart.
//!
//! # Validation targets
//!
//! | Check                | Reference | Gate       |
//! |----------------------|-----------|------------|
//! | χ² (full covariance) | 15.884    | pinned     |
//! | χ²_red               | 1.444     | < 2.0      |
//! | p-value              | 0.1455    | > 0.01     |
//! | ln BF                | 25.19     | > 5        |
//! | LOO χ²_red (6 rows)  | —         | all < 2.0  |

use qgi_validation::figures;
use qgi_validation::report;
use qgi_validation::stats;
use qgi_validation::tolerances;
use qgi_validation::validation::ValidationHarness;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Joint Statistics — 12 observables, one anchor              ║");
    println!("║  χ² with PMNS covariance, Bayes factor, sector robustness   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut harness = ValidationHarness::new("statistics");

    println!("  Phase 1: observable table");
    println!("    {:<16} {:>12} {:>12} {:>9} {:>7}", "observable", "qgi", "exp", "sigma", "pull");
    for o in &stats::OBSERVABLES {
        println!(
            "    {:<16} {:>12.5e} {:>12.5e} {:>9.2e} {:>+7.2}",
            o.name,
            o.qgi,
            o.exp,
            o.sigma,
            (o.qgi - o.exp) / o.sigma
        );
    }

    println!();
    println!("  Phase 2: full-covariance chi^2");
    let full = stats::chi2_full();
    println!(
        "    chi2 = {:.4} over {} dof -> chi2_red = {:.4}, p = {:.4}",
        full.chi2, full.dof, full.chi2_red, full.p_value
    );
    harness.check_abs("chi2 (full covariance)", full.chi2, 15.883_951, 1e-3);
    harness.check_abs("chi2_red", full.chi2_red, 1.443_996, 1e-4);
    harness.check_upper("chi2_red gate", full.chi2_red, tolerances::CHI2_REDUCED_MAX);
    harness.check_lower("p-value gate", full.p_value, tolerances::P_VALUE_MIN);

    println!();
    println!("  Phase 3: Bayes factor vs the random-coincidence null");
    let bayes = stats::bayes_factor();
    println!(
        "    ln BF = {:.4} (BF = {:.3e})",
        bayes.log_bayes_factor, bayes.bayes_factor
    );
    harness.check_abs("ln BF", bayes.log_bayes_factor, 25.189, 0.001);
    harness.check_lower("ln BF decisive", bayes.log_bayes_factor, tolerances::LOG_BF_MIN);

    println!();
    println!("  Phase 4: leave-one-sector-out (diagonal covariance)");
    let loo = stats::leave_one_sector_out();
    println!("    {:<22} {:>6} {:>5} {:>9} {:>9}", "excluded", "n_obs", "dof", "chi2", "chi2_red");
    for row in &loo {
        println!(
            "    {:<22} {:>6} {:>5} {:>9.3} {:>9.3}",
            row.excluded, row.n_obs, row.dof, row.chi2, row.chi2_red
        );
        harness.check_upper(
            &format!("LOO chi2_red without {}", row.excluded),
            row.chi2_red,
            tolerances::CHI2_REDUCED_MAX,
        );
    }

    println!();
    let pulls: Vec<(String, f64)> = stats::OBSERVABLES
        .iter()
        .map(|o| (o.name.to_string(), (o.qgi - o.exp) / o.sigma))
        .collect();
    let fig = format!("{}/observable_pulls.png", figures::FIGURES_DIR);
    match figures::pull_chart(&fig, "Prediction pulls (12 observables)", &pulls) {
        Ok(()) => println!("  figure: {fig}"),
        Err(e) => println!("  WARNING: figure failed ({e})"),
    }
    #[derive(serde::Serialize)]
    struct StatisticsArtifact {
        chi2: stats::Chi2Result,
        bayes: stats::BayesResult,
        leave_one_out: Vec<stats::SectorExclusion>,
    }
    let artifact = StatisticsArtifact {
        chi2: full,
        bayes,
        leave_one_out: loo,
    };
    match report::save_json(&artifact, report::RESULTS_DIR, "statistics") {
        Ok(path) => println!("  json: {path}"),
        Err(e) => println!("  WARNING: json failed ({e})"),
    }
    if let Err(e) = report::save_harness(&harness, "statistics_checks") {
        println!("  WARNING: could not write check summary ({e})");
    }

    harness.finish()
}
