// SPDX-License-Identifier: AGPL-3.0-only

//! Provenance metadata for all experimental reference values.
//!
//! Every hardcoded expected value in the validation binaries traces back to
//! a published measurement or review. This module centralizes that metadata
//! so the binaries carry machine-readable provenance.
//!
//! ## Data Sources
//!
//! | Dataset / Publication | DOI / Accession | Notes |
//! |----------------------|-----------------|-------|
//! | PDG Review of Particle Physics 2024 | [10.1103/PhysRevD.110.030001](https://doi.org/10.1103/PhysRevD.110.030001) | EW couplings, oscillation parameters, quark masses |
//! | NuFit 6.0 (with SK atmospheric) | [10.1007/JHEP12(2024)216](https://doi.org/10.1007/JHEP12(2024)216) | Cross-check oscillation global fit |
//! | Planck 2018 cosmological parameters | [10.1051/0004-6361/201833910](https://doi.org/10.1051/0004-6361/201833910) | Y_p, Ω_Λ, Σm_ν bound |
//! | CODATA 2018 | [10.1103/RevModPhys.93.025010](https://doi.org/10.1103/RevModPhys.93.025010) | G, m_p, ħ, c |
//! | DESI DR2 BAO | [10.48550/arXiv.2503.14738](https://doi.org/10.48550/arXiv.2503.14738) | w₀wₐ contours (digitized) |
//! | Gilkey, Invariance Theory (1984) | ISBN 0-914098-20-7 | ζ′(0) on S⁴, exact fractions |
//! | Vassilevich, Heat kernel expansion | [10.1016/j.physrep.2003.09.002](https://doi.org/10.1016/j.physrep.2003.09.002) | Phys. Rept. 388:279-360 (2003) |

/// A single provenance record tying a reference value to its published origin.
#[derive(Debug, Clone)]
pub struct ReferenceProvenance {
    /// Human-readable label (e.g. "sin²θ_W at M_Z")
    pub label: &'static str,
    /// Publication or dataset the value is taken from
    pub source: &'static str,
    /// DOI or accession identifier
    pub doi: &'static str,
    /// Year of publication
    pub year: u16,
    /// The reference value itself
    pub value: f64,
    /// 1σ experimental uncertainty (0.0 for exact/defined values)
    pub sigma: f64,
    /// Unit or description of the value
    pub unit: &'static str,
}

// ═══════════════════════════════════════════════════════════════════
// Electroweak sector — PDG 2024, MS-bar at M_Z
// ═══════════════════════════════════════════════════════════════════

/// α_em⁻¹(M_Z), MS-bar
pub const ALPHA_EM_INV: ReferenceProvenance = ReferenceProvenance {
    label: "alpha_em^-1 at M_Z (MS-bar)",
    source: "PDG 2024, Review of Particle Physics, EW model section",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 127.9518,
    sigma: 0.0016,
    unit: "dimensionless",
};

/// sin²θ_W(M_Z), MS-bar
pub const SIN2_THETA_W: ReferenceProvenance = ReferenceProvenance {
    label: "sin^2 theta_W at M_Z (MS-bar)",
    source: "PDG 2024, Review of Particle Physics, EW model section",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 0.23153,
    sigma: 0.00004,
    unit: "dimensionless",
};

// ═══════════════════════════════════════════════════════════════════
// Oscillation sector — PDG 2024 normal ordering
// ═══════════════════════════════════════════════════════════════════

/// Atmospheric splitting (the single anchor of the neutrino sector)
pub const DELTA_M31_SQ: ReferenceProvenance = ReferenceProvenance {
    label: "Delta m^2_31 (NO)",
    source: "PDG 2024, neutrino mixing review",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 2.453e-3,
    sigma: 0.033e-3,
    unit: "eV^2",
};

/// Solar splitting (prediction target)
pub const DELTA_M21_SQ: ReferenceProvenance = ReferenceProvenance {
    label: "Delta m^2_21",
    source: "PDG 2024, neutrino mixing review",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 7.53e-5,
    sigma: 0.18e-5,
    unit: "eV^2",
};

/// θ₁₂ central value
pub const THETA_12: ReferenceProvenance = ReferenceProvenance {
    label: "theta_12",
    source: "PDG 2024, neutrino mixing review",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 33.41,
    sigma: 0.75,
    unit: "degrees",
};

/// θ₁₃ central value
pub const THETA_13: ReferenceProvenance = ReferenceProvenance {
    label: "theta_13",
    source: "PDG 2024, neutrino mixing review",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 8.54,
    sigma: 0.12,
    unit: "degrees",
};

/// θ₂₃ central value (upper octant)
pub const THETA_23: ReferenceProvenance = ReferenceProvenance {
    label: "theta_23",
    source: "PDG 2024, neutrino mixing review",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 49.0,
    sigma: 1.4,
    unit: "degrees",
};

/// Cosmological bound on the mass sum
pub const SUM_M_NU_BOUND: ReferenceProvenance = ReferenceProvenance {
    label: "Sum m_nu upper bound (95% CL)",
    source: "Planck 2018 + BAO",
    doi: "10.1051/0004-6361/201833910",
    year: 2018,
    value: 0.12,
    sigma: 0.02,
    unit: "eV",
};

// ═══════════════════════════════════════════════════════════════════
// Gravity and cosmology
// ═══════════════════════════════════════════════════════════════════

/// C_grav exact fraction from the literature ζ′(0) values
pub const C_GRAV_EXACT: ReferenceProvenance = ReferenceProvenance {
    label: "C_grav = -551/720 (de Donder gauge, S^4)",
    source: "Gilkey (1984); Vassilevich, Phys. Rept. 388 (2003)",
    doi: "10.1016/j.physrep.2003.09.002",
    year: 2003,
    value: -551.0 / 720.0,
    sigma: 0.0,
    unit: "dimensionless (exact)",
};

/// Primordial helium mass fraction
pub const Y_P: ReferenceProvenance = ReferenceProvenance {
    label: "Y_p primordial helium",
    source: "Planck 2018 cosmological parameters",
    doi: "10.1051/0004-6361/201833910",
    year: 2018,
    value: 0.245,
    sigma: 0.003,
    unit: "mass fraction",
};

/// Quark sector exponent ratio fitted from PDG masses
pub const C_DOWN_OVER_C_UP: ReferenceProvenance = ReferenceProvenance {
    label: "c_d/c_u fitted from PDG 2024 quark masses",
    source: "PDG 2024, quark masses review",
    doi: "10.1103/PhysRevD.110.030001",
    year: 2024,
    value: 0.602,
    sigma: 0.002,
    unit: "dimensionless",
};

/// Full table, for binaries that print a provenance banner.
pub const ALL_REFERENCES: &[&ReferenceProvenance] = &[
    &ALPHA_EM_INV,
    &SIN2_THETA_W,
    &DELTA_M31_SQ,
    &DELTA_M21_SQ,
    &THETA_12,
    &THETA_13,
    &THETA_23,
    &SUM_M_NU_BOUND,
    &C_GRAV_EXACT,
    &Y_P,
    &C_DOWN_OVER_C_UP,
];

/// Print the provenance line for a record (used in binary banners).
pub fn print_reference(p: &ReferenceProvenance) {
    println!(
        "  {} = {:.6e} ± {:.1e} {} [{} ({})]",
        p.label, p.value, p.sigma, p.unit, p.source, p.year
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_references_have_doi() {
        for p in ALL_REFERENCES {
            assert!(!p.doi.is_empty(), "{} missing DOI", p.label);
            assert!(p.year >= 1984);
        }
    }

    #[test]
    fn c_grav_fraction_matches_sum() {
        // -(-109/180) + (1/2)(-499/180) + (1/2)(11/360) = -551/720
        let from_parts = 109.0 / 180.0 - 499.0 / 360.0 + 11.0 / 720.0;
        assert!((from_parts - C_GRAV_EXACT.value).abs() < 1e-15);
    }

    #[test]
    fn anchor_matches_constants_module() {
        assert_eq!(DELTA_M31_SQ.value, crate::constants::DELTA_M31_SQ);
        assert_eq!(SIN2_THETA_W.value, crate::constants::SIN2_THETA_W_MZ);
    }
}
