// SPDX-License-Identifier: AGPL-3.0-only

//! Meta-validator: runs every QGI validation suite in sequence.
//!
//! Exit code is 0 only if ALL suites pass. `--fast` skips the two slow
//! suites (the full tail sum and the exhaustive scan with artifacts).
//!
//! # Validation suites (in order)
//!
//! | Binary | Domain |
//! |--------|--------|
//! | `validate_ward` | α_info closure and uniqueness |
//! | `validate_spectral` | κ₁, κ₂, κ₃ from SM field content |
//! | `validate_electroweak` | parametrization round trip, slopes |
//! | `validate_gravity` | C_grav, G_eff shift, α_G estimate |
//! | `validate_zeta_tail` | regularized S⁴ spectral sum |
//! | `validate_neutrino` | {1,3,7} spectrum and splittings |
//! | `triplet_scan` | exhaustive global-minimum scan |
//! | `validate_pmns` | MaxEnt angles, b = 1/6 fixed point |
//! | `validate_quark` | c_d/c_u Casimir ratio |
//! | `validate_cosmology` | D_eff, δΩ_Λ, Y_p, DESI |
//! | `validate_statistics` | joint χ², Bayes factor, LOO |

use std::process::{self, Command};
use std::time::Instant;

struct Suite {
    name: &'static str,
    binary: &'static str,
    slow: bool,
}

const SUITES: &[Suite] = &[
    Suite { name: "Ward Closure", binary: "validate_ward", slow: false },
    Suite { name: "Spectral Coefficients", binary: "validate_spectral", slow: false },
    Suite { name: "Electroweak", binary: "validate_electroweak", slow: false },
    Suite { name: "Gravity", binary: "validate_gravity", slow: false },
    Suite { name: "Spectral Tail Sum", binary: "validate_zeta_tail", slow: true },
    Suite { name: "Neutrino Masses", binary: "validate_neutrino", slow: false },
    Suite { name: "Triplet Scan", binary: "triplet_scan", slow: true },
    Suite { name: "PMNS Angles", binary: "validate_pmns", slow: false },
    Suite { name: "Quark Ratio", binary: "validate_quark", slow: false },
    Suite { name: "Cosmology", binary: "validate_cosmology", slow: false },
    Suite { name: "Joint Statistics", binary: "validate_statistics", slow: false },
];

fn main() {
    println!("═══════════════════════════════════════════════════════════");
    println!("  QGI Validation Suite — All Sectors");
    println!("  closed-form predictions vs PDG / NuFit / Planck / CODATA");
    println!("═══════════════════════════════════════════════════════════\n");

    let fast = std::env::args().any(|a| a == "--fast");
    if fast {
        println!("  --fast: skipping slow suites\n");
    }

    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let t_total = Instant::now();
    let mut passed = 0_usize;
    let mut failed = 0_usize;
    let mut skipped = 0_usize;
    let mut failures: Vec<&str> = Vec::new();

    for suite in SUITES {
        if suite.slow && fast {
            println!("  SKIP  {:<28} (slow)", suite.name);
            skipped += 1;
            continue;
        }

        let t_suite = Instant::now();
        print!("  RUN   {:<28} ", suite.name);

        let result = Command::new("cargo")
            .args(["run", "--release", "--bin", suite.binary])
            .current_dir(manifest_dir)
            .output();

        match result {
            Ok(output) => {
                let elapsed = t_suite.elapsed().as_secs_f64();
                if output.status.success() {
                    println!("PASS  ({elapsed:.1}s)");
                    passed += 1;
                } else {
                    println!("FAIL  ({elapsed:.1}s)");
                    failed += 1;
                    failures.push(suite.name);
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    for line in stdout
                        .lines()
                        .rev()
                        .take(5)
                        .collect::<Vec<_>>()
                        .into_iter()
                        .rev()
                    {
                        println!("        {line}");
                    }
                }
            }
            Err(e) => {
                println!("ERROR ({e})");
                failed += 1;
                failures.push(suite.name);
            }
        }
    }

    let total_time = t_total.elapsed().as_secs_f64();

    println!("\n═══════════════════════════════════════════════════════════");
    println!("  TOTAL: {passed} passed, {failed} failed, {skipped} skipped ({total_time:.1}s)");

    if !failures.is_empty() {
        println!("  FAILURES: {}", failures.join(", "));
    }

    if failed == 0 {
        println!("  ALL VALIDATION SUITES PASSED");
        println!("═══════════════════════════════════════════════════════════");
        process::exit(0);
    } else {
        println!("  SOME VALIDATION SUITES FAILED");
        println!("═══════════════════════════════════════════════════════════");
        process::exit(1);
    }
}
