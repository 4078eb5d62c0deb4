// SPDX-License-Identifier: AGPL-3.0-only

//! Validation harness for QGI binaries.
//!
//! Every validation binary follows the same pattern:
//!   - Hardcoded expected values with provenance
//!   - Explicit pass/fail checks against documented tolerances
//!   - Exit code 0 (all checks pass) or 1 (any check fails)
//!   - Machine-readable summary on stdout, optional JSON artifact
//!
//! This module provides the shared infrastructure.

use serde::Serialize;
use std::process;

/// A single validation check with result tracking.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether this check passed
    pub passed: bool,
    /// Observed value
    pub observed: f64,
    /// Expected value
    pub expected: f64,
    /// Tolerance used
    pub tolerance: f64,
    /// How the tolerance was applied
    pub mode: ToleranceMode,
}

/// How a tolerance threshold is applied.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum ToleranceMode {
    /// |observed - expected| < tolerance
    Absolute,
    /// |observed - expected| / |expected| < tolerance
    Relative,
    /// |observed - expected| / |expected| * 100 < tolerance (percentage)
    Percentage,
    /// |observed - expected| / sigma < tolerance (tension in units of σ)
    Sigma,
    /// observed < threshold (upper bound only)
    UpperBound,
    /// observed > threshold (lower bound only)
    LowerBound,
}

impl std::fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::Percentage => write!(f, "pct"),
            Self::Sigma => write!(f, "σ"),
            Self::UpperBound => write!(f, "<"),
            Self::LowerBound => write!(f, ">"),
        }
    }
}

/// Accumulates validation checks and produces a summary with exit code.
#[derive(Debug, Default)]
#[must_use]
pub struct ValidationHarness {
    /// Name of the validation binary
    pub name: String,
    /// All checks performed
    pub checks: Vec<Check>,
}

impl ValidationHarness {
    /// Create a new harness for a named validation binary.
    #[must_use = "validation harness must be used to run checks"]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Add an absolute tolerance check: |observed - expected| < tolerance
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = (observed - expected).abs() < tolerance;
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance,
            mode: ToleranceMode::Absolute,
        });
    }

    /// Add a relative tolerance check: |observed - expected| / |expected| < tolerance
    pub fn check_rel(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = if expected.abs() > f64::EPSILON {
            ((observed - expected) / expected).abs() < tolerance
        } else {
            observed.abs() < tolerance
        };
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance,
            mode: ToleranceMode::Relative,
        });
    }

    /// Add a percentage check: |observed - expected| / |expected| * 100 < tolerance
    pub fn check_pct(&mut self, label: &str, observed: f64, expected: f64, tolerance_pct: f64) {
        let passed = if expected.abs() > crate::tolerances::NEAR_ZERO_EXPECTED {
            ((observed - expected) / expected).abs() * 100.0 < tolerance_pct
        } else {
            observed.abs() < tolerance_pct
        };
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance: tolerance_pct,
            mode: ToleranceMode::Percentage,
        });
    }

    /// Add a tension check: |observed - expected| / sigma < n_sigma.
    ///
    /// The experimental 1σ goes in `sigma`; predictions within `n_sigma`
    /// standard deviations pass.
    pub fn check_sigma(&mut self, label: &str, observed: f64, expected: f64, sigma: f64, n_sigma: f64) {
        let tension = (observed - expected).abs() / sigma;
        self.checks.push(Check {
            label: label.to_string(),
            passed: tension < n_sigma,
            observed,
            expected,
            tolerance: n_sigma,
            mode: ToleranceMode::Sigma,
        });
    }

    /// Add an upper-bound check: observed < threshold
    pub fn check_upper(&mut self, label: &str, observed: f64, threshold: f64) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: observed < threshold,
            observed,
            expected: threshold,
            tolerance: threshold,
            mode: ToleranceMode::UpperBound,
        });
    }

    /// Add a lower-bound check: observed > threshold
    pub fn check_lower(&mut self, label: &str, observed: f64, threshold: f64) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: observed > threshold,
            observed,
            expected: threshold,
            tolerance: threshold,
            mode: ToleranceMode::LowerBound,
        });
    }

    /// Add a boolean pass/fail check.
    pub fn check_bool(&mut self, label: &str, passed: bool) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed: f64::from(u8::from(passed)),
            expected: 1.0,
            tolerance: 0.0,
            mode: ToleranceMode::Absolute,
        });
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Serialize the check list to pretty JSON (for the results/ artifact).
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Summary<'a> {
            suite: &'a str,
            passed: usize,
            total: usize,
            checks: &'a [Check],
        }
        serde_json::to_string_pretty(&Summary {
            suite: &self.name,
            passed: self.passed_count(),
            total: self.total_count(),
            checks: &self.checks,
        })
    }

    /// Print summary and exit with appropriate code.
    ///
    /// Exit 0 if all checks pass, exit 1 if any fails.
    pub fn finish(&self) -> ! {
        println!();
        println!(
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );

        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            println!(
                "  {icon} {}: observed={:.6e}, expected={:.6e}, tol={:.2e} ({})",
                check.label, check.observed, check.expected, check.tolerance, check.mode
            );
        }

        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        } else {
            let failed: Vec<&str> = self
                .checks
                .iter()
                .filter(|c| !c.passed)
                .map(|c| c.label.as_str())
                .collect();
            println!("FAILED CHECKS: {}", failed.join(", "));
            process::exit(1);
        }
    }
}

impl ValidationHarness {
    /// Format the validation summary as a string (for testing; `finish` prints and exits).
    #[cfg(test)]
    pub fn format_summary(&self) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: observed={:.6e}, expected={:.6e}, tol={:.2e} ({})",
                check.label, check.observed, check.expected, check.tolerance, check.mode
            );
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_tracks_pass_fail() {
        let mut h = ValidationHarness::new("test");
        h.check_abs("exact", 1.0, 1.0, 1e-10);
        h.check_abs("close", 1.0001, 1.0, 1e-3);
        h.check_abs("far", 2.0, 1.0, 1e-3);
        assert_eq!(h.passed_count(), 2);
        assert_eq!(h.total_count(), 3);
        assert!(!h.all_passed());
    }

    #[test]
    fn relative_check_handles_zero() {
        let mut h = ValidationHarness::new("test");
        h.check_rel("near_zero", 1e-15, 0.0, 1e-10);
        assert!(h.checks[0].passed);
    }

    #[test]
    fn percentage_check() {
        let mut h = ValidationHarness::new("test");
        h.check_pct("within_10pct", 8.18, 7.53, 10.0); // 8.6% off
        assert!(h.checks[0].passed);
        h.check_pct("beyond_5pct", 8.18, 7.53, 5.0);
        assert!(!h.checks[1].passed);
    }

    #[test]
    fn sigma_check_tension() {
        let mut h = ValidationHarness::new("test");
        // 0.65σ tension passes a 2σ gate
        h.check_sigma("mild", 33.9, 33.41, 0.75, 2.0);
        assert!(h.checks[0].passed);
        // 5σ tension fails
        h.check_sigma("strong", 37.2, 33.41, 0.75, 2.0);
        assert!(!h.checks[1].passed);
    }

    #[test]
    fn bounds_are_strict() {
        let mut h = ValidationHarness::new("test");
        h.check_upper("at", 1.0, 1.0);
        h.check_lower("at", 1.0, 1.0);
        assert!(!h.checks[0].passed);
        assert!(!h.checks[1].passed);
    }

    #[test]
    fn json_summary_roundtrip() {
        let mut h = ValidationHarness::new("json_suite");
        h.check_abs("a", 1.0, 1.0, 1e-10);
        h.check_bool("b", false);
        let js = h.to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&js).unwrap();
        assert_eq!(v["suite"], "json_suite");
        assert_eq!(v["passed"], 1);
        assert_eq!(v["total"], 2);
        assert_eq!(v["checks"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn format_summary_no_panic() {
        let mut h = ValidationHarness::new("my_validation");
        h.check_abs("a", 1.0, 1.0, 1e-10);
        h.check_abs("b", 2.0, 1.0, 0.1);
        let s = h.format_summary();
        assert!(s.contains("my_validation"));
        assert!(s.contains("1/2"));
    }

    #[test]
    fn harness_zero_checks() {
        let h = ValidationHarness::new("empty");
        assert_eq!(h.total_count(), 0);
        assert!(h.all_passed()); // vacuously true for empty
    }

    #[test]
    fn tolerance_mode_display_all_variants() {
        assert_eq!(ToleranceMode::Absolute.to_string(), "abs");
        assert_eq!(ToleranceMode::Relative.to_string(), "rel");
        assert_eq!(ToleranceMode::Percentage.to_string(), "pct");
        assert_eq!(ToleranceMode::Sigma.to_string(), "σ");
        assert_eq!(ToleranceMode::UpperBound.to_string(), "<");
        assert_eq!(ToleranceMode::LowerBound.to_string(), ">");
    }

    #[test]
    fn unicode_labels() {
        let mut h = ValidationHarness::new("test");
        h.check_abs("Δm²₂₁ (×10⁻⁵ eV²)", 8.18, 8.18, 1e-3);
        assert_eq!(h.checks[0].label, "Δm²₂₁ (×10⁻⁵ eV²)");
    }
}
