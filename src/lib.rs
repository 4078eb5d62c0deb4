// SPDX-License-Identifier: AGPL-3.0-only

//! QGI validation environment — closed-form predictions vs. measurement.
//!
//! Every observable in the QGI framework descends from a single coupling,
//! α_info = 1/(8π³ ln π), with no fitted parameters. This crate recomputes
//! each prediction from first principles and checks it against the published
//! PDG 2024 / NuFit 6.0 / Planck 2018 values.
//!
//! ## Core modules
//!   - `constants` — α_info, ε, CODATA and PDG reference constants
//!   - `ward` — Ward identity closure ε = α_info ln π = (2π)⁻³
//!   - `spectral` — κ₁, κ₂, κ₃ from Standard Model field content
//!   - `electroweak` — α_em⁻¹ and sin²θ_W reconstruction, RG slope
//!   - `gravity` — C_grav = −551/720 from ζ′(0) on S⁴, G_eff shift
//!   - `zeta` — regularized spectral sums on S⁴ (the numerical C_grav path)
//!   - `neutrino` — anchored {1,3,7} mass spectrum and exhaustive triplet scan
//!   - `pmns` — maximum-entropy mixing angles and fixed-point iteration
//!   - `quark` — sector exponents and the c_d/c_u GUT ratio
//!   - `cosmology` — D_eff, δΩ_Λ, primordial helium shift
//!   - `stats` — joint 12-observable χ² with correlated covariance
//!
//! ## Validation binaries
//!   One `validate_*` binary per sector, each printing explicit pass/fail
//!   checks with documented tolerances and exiting 0/1. `validate_all`
//!   runs the full battery. `triplet_scan` is the exhaustive search that
//!   established {1,3,7}; `ghz_sim` and `process_atlas` produce the
//!   experimental-side artifacts.

pub mod constants;
pub mod cosmology;
pub mod data;
pub mod electroweak;
pub mod error;
pub mod figures;
pub mod gravity;
pub mod neutrino;
pub mod pmns;
pub mod provenance;
pub mod quark;
pub mod report;
pub mod special;
pub mod spectral;
pub mod stats;
pub mod tolerances;
pub mod validation;
pub mod ward;
pub mod zeta;

pub use error::{QgiError, Result};
