// SPDX-License-Identifier: AGPL-3.0-only

//! Ideal GHZ-state shot simulation.
//!
//! Flags: `--qubits=` (max qubit count, default 8), `--shots=` (per
//! count, default 10000), `--seed=` (default 24680).
//!
//! An ideal n-qubit GHZ state measured in the computational basis yields
//! all-zeros or all-ones at p = ½ each. The simulator samples that
//! distribution directly (no circuit framework), reports the ZZ…Z parity
//! ⟨Z⊗n⟩ = p₀ + (−1)ⁿ p₁ and the GHZ population p₀ + p₁ = 1, and writes
//! one CSV row per qubit count.

use rand::{rngs::StdRng, Rng, SeedableRng};

use qgi_validation::data::parse_flag_usize;
use qgi_validation::report;
use qgi_validation::validation::ValidationHarness;

struct GhzRow {
    n_qubits: usize,
    shots: usize,
    count_zeros: usize,
    count_ones: usize,
    parity: f64,
}

fn sample_ghz(rng: &mut StdRng, n_qubits: usize, shots: usize) -> GhzRow {
    let mut count_zeros = 0_usize;
    for _ in 0..shots {
        if rng.gen_bool(0.5) {
            count_zeros += 1;
        }
    }
    let count_ones = shots - count_zeros;
    let p0 = count_zeros as f64 / shots as f64;
    let p1 = count_ones as f64 / shots as f64;
    let sign = if n_qubits % 2 == 0 { 1.0 } else { -1.0 };
    GhzRow {
        n_qubits,
        shots,
        count_zeros,
        count_ones,
        parity: p0 + sign * p1,
    }
}

fn main() {
    let max_qubits = parse_flag_usize("qubits", 8).max(2);
    let shots = parse_flag_usize("shots", 10_000).max(1);
    let seed = parse_flag_usize("seed", 24_680) as u64;

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  GHZ Shot Simulation — ideal all-0/all-1 sampling           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  qubits 2..={max_qubits}, {shots} shots each, seed {seed}");
    println!();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut harness = ValidationHarness::new("ghz_sim");
    let mut rows = Vec::new();

    println!(
        "    {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "qubits", "shots", "zeros", "ones", "p0", "parity"
    );
    for n in 2..=max_qubits {
        let row = sample_ghz(&mut rng, n, shots);
        let p0 = row.count_zeros as f64 / shots as f64;
        println!(
            "    {:>6} {:>8} {:>8} {:>8} {:>8.4} {:>+8.4}",
            row.n_qubits, row.shots, row.count_zeros, row.count_ones, p0, row.parity
        );

        // binomial fluctuation of p0 around 1/2
        let sigma_p = 0.5 / (shots as f64).sqrt();
        harness.check_sigma(&format!("p0 at n={n}"), p0, 0.5, sigma_p, 5.0);
        // ideal state: only the two GHZ branches appear
        harness.check_abs(
            &format!("GHZ population at n={n}"),
            (row.count_zeros + row.count_ones) as f64,
            shots as f64,
            0.5,
        );
        let expected_parity = if n % 2 == 0 { 1.0 } else { 2.0 * p0 - 1.0 };
        harness.check_abs(&format!("parity at n={n}"), row.parity, expected_parity, 1e-12);

        rows.push(format!(
            "{},{},{},{},{:.6},{:.6}",
            row.n_qubits, row.shots, row.count_zeros, row.count_ones, p0, row.parity
        ));
    }

    println!();
    match report::save_csv(
        report::RESULTS_DIR,
        "ghz_shots",
        "n_qubits,shots,count_zeros,count_ones,p0,parity",
        &rows,
    ) {
        Ok(path) => println!("  csv: {path}"),
        Err(e) => println!("  WARNING: csv failed ({e})"),
    }

    harness.finish()
}
