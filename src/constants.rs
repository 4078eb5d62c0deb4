// SPDX-License-Identifier: AGPL-3.0-only

//! Fundamental and reference constants.
//!
//! The QGI side of every comparison is derived at runtime from π alone
//! (`alpha_info`, `epsilon`); the experimental side is pinned to the
//! published values below. See `provenance` for the source of each number.

use std::f64::consts::PI;

/// The informational coupling α_info = 1/(8π³ ln π).
///
/// Reference value 3.521740677853072e-3. Everything else in the framework
/// is a function of this number and small integers.
#[must_use]
pub fn alpha_info() -> f64 {
    1.0 / (8.0 * PI.powi(3) * PI.ln())
}

/// The expansion parameter ε = α_info · ln π.
///
/// Closed form (2π)⁻³ ≈ 4.031441804149937e-3. The Ward identity check
/// verifies the two expressions agree to machine precision.
#[must_use]
pub fn epsilon() -> f64 {
    alpha_info() * PI.ln()
}

/// |ln α_info| ≈ 5.648799900849, the denominator of the gravitational δ.
#[must_use]
pub fn ln_alpha_info_abs() -> f64 {
    alpha_info().ln().abs()
}

// ───────────────────────── CODATA 2018 ─────────────────────────

/// Newtonian gravitational constant G [m³ kg⁻¹ s⁻²]
pub const G_NEWTON: f64 = 6.674_30e-11;
/// Proton mass [kg]
pub const M_PROTON: f64 = 1.672_621_923_69e-27;
/// Reduced Planck constant [J s]
pub const HBAR: f64 = 1.054_571_817e-34;
/// Speed of light [m s⁻¹]
pub const C_LIGHT: f64 = 299_792_458.0;

/// Dimensionless gravitational coupling α_G = G m_p² / (ħ c).
///
/// CODATA inputs give 5.906e-39; the QGI symbolic form
/// α_info¹² (2π² α_info)¹⁰ reproduces the order of magnitude.
#[must_use]
pub fn alpha_g_codata() -> f64 {
    G_NEWTON * M_PROTON * M_PROTON / (HBAR * C_LIGHT)
}

// ───────────────────────── PDG 2024 electroweak inputs (M_Z) ─────────────────────────

/// Fine-structure constant inverse at M_Z, MS-bar
pub const ALPHA_EM_INV_MZ: f64 = 127.9518;
/// Weak mixing angle sin²θ_W at M_Z, MS-bar
pub const SIN2_THETA_W_MZ: f64 = 0.23153;
/// U(1)_Y coupling g₁ at M_Z (SU(5) normalization absorbed in b₁)
pub const G1_MZ: f64 = 0.462;
/// SU(2)_L coupling g₂ at M_Z
pub const G2_MZ: f64 = 0.653;
/// One-loop beta coefficient b₁ = 41/10 (GUT normalization)
pub const B1_COEFF: f64 = 41.0 / 10.0;
/// One-loop beta coefficient b₂ = −19/6
pub const B2_COEFF: f64 = -19.0 / 6.0;
/// Z boson mass [GeV]
pub const M_Z_GEV: f64 = 91.1876;

// ───────────────────────── Oscillation anchors ─────────────────────────

/// Atmospheric splitting Δm²₃₁ [eV²], PDG 2024 normal ordering. The single
/// anchor of the neutrino sector.
pub const DELTA_M31_SQ: f64 = 2.453e-3;
/// Solar splitting Δm²₂₁ [eV²], PDG 2024 (prediction target, never an input)
pub const DELTA_M21_SQ_OBS: f64 = 7.53e-5;
/// 1σ on Δm²₂₁ [eV²]
pub const DELTA_M21_SQ_SIGMA: f64 = 0.18e-5;

// ───────────────────────── Cosmology ─────────────────────────

/// Planck 2018 primordial helium mass fraction Y_p
pub const Y_P_OBS: f64 = 0.245;
/// 1σ on Y_p
pub const Y_P_SIGMA: f64 = 0.003;
/// ln of the IR/UV hierarchy (Hubble/Planck) entering the Λ shift estimate
pub const LN_HIERARCHY: f64 = 140.45769067263680; // ln(1e61)

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_info_reference_value() {
        assert!((alpha_info() - 3.521740677853072e-3).abs() < 1e-17);
    }

    #[test]
    fn epsilon_is_inverse_two_pi_cubed() {
        let closed = (2.0 * PI).powi(3).recip();
        assert!((epsilon() - closed).abs() < 1e-18);
        assert!((epsilon() - 4.031441804149937e-3).abs() < 1e-17);
    }

    #[test]
    fn ln_alpha_info_magnitude() {
        assert!((ln_alpha_info_abs() - 5.648799900849).abs() < 1e-9);
    }

    #[test]
    fn alpha_g_order_of_magnitude() {
        let a = alpha_g_codata();
        assert!((a - 5.906e-39).abs() / 5.906e-39 < 1e-3);
    }
}
