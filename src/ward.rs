// SPDX-License-Identifier: AGPL-3.0-only

//! Ward identity closure for the informational coupling.
//!
//! The defining property of α_info = 1/(8π³ ln π) is that the combination
//! ε = α_info · ln π collapses to the pure geometric factor (2π)⁻³.
//! Candidate couplings with a different base, log argument, or prefactor
//! break this closure, which is what singles out α_info.

use crate::constants;
use std::f64::consts::PI;

/// Result of the closure test for one candidate coupling.
#[derive(Debug, Clone)]
pub struct ClosureTest {
    /// Name of the candidate
    pub name: &'static str,
    /// Defining expression, for the report
    pub formula: &'static str,
    /// The candidate coupling value
    pub alpha: f64,
    /// ε = α · ln π for this candidate
    pub epsilon: f64,
    /// |ε − (2π)⁻³|, zero (to machine precision) only for α_info
    pub residual: f64,
}

/// The geometric target (2π)⁻³.
#[must_use]
pub fn geometric_factor() -> f64 {
    (2.0 * PI).powi(3).recip()
}

/// Closure residual for the canonical coupling. Should vanish identically:
/// α_info · ln π = ln π / (8π³ ln π) = 1/(8π³) = (2π)⁻³.
#[must_use]
pub fn canonical_residual() -> f64 {
    (constants::epsilon() - geometric_factor()).abs()
}

/// Run the closure test over the canonical coupling and the nearby
/// alternatives that a different base, log argument, or prefactor would
/// give.
#[must_use]
pub fn closure_battery() -> Vec<ClosureTest> {
    let target = geometric_factor();
    let candidates: [(&'static str, &'static str, f64); 4] = [
        (
            "alpha_info",
            "1/(8 pi^3 ln pi)",
            constants::alpha_info(),
        ),
        (
            "alpha_alt_e",
            "1/(8 pi^3 ln e) = 1/(8 pi^3)",
            1.0 / (8.0 * PI.powi(3)),
        ),
        (
            "alpha_alt_2pi",
            "1/(8 pi^3 ln 2pi)",
            1.0 / (8.0 * PI.powi(3) * (2.0 * PI).ln()),
        ),
        (
            "alpha_alt_half",
            "1/(4 pi^3 ln pi)",
            1.0 / (4.0 * PI.powi(3) * PI.ln()),
        ),
    ];
    candidates
        .into_iter()
        .map(|(name, formula, alpha)| {
            let epsilon = alpha * PI.ln();
            ClosureTest {
                name,
                formula,
                alpha,
                epsilon,
                residual: (epsilon - target).abs(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_closure_is_exact() {
        assert!(canonical_residual() < 1e-15);
    }

    #[test]
    fn alternatives_break_closure() {
        let battery = closure_battery();
        assert_eq!(battery.len(), 4);
        assert_eq!(battery[0].name, "alpha_info");
        assert!(battery[0].residual < 1e-15);
        // the doubled prefactor gives ε = 2(2π)⁻³, so its residual is the
        // geometric factor itself
        assert!((battery[3].residual - geometric_factor()).abs() < 1e-15);
        for alt in &battery[1..] {
            assert!(
                alt.residual > 1e-4,
                "{} unexpectedly closes (residual {})",
                alt.name,
                alt.residual
            );
        }
    }

    #[test]
    fn geometric_factor_value() {
        assert!((geometric_factor() - 4.031441804149937e-3).abs() < 1e-17);
    }
}
