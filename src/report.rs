// SPDX-License-Identifier: AGPL-3.0-only

//! Run artifacts: JSON reports and CSV tables under `results/`.
//!
//! Every suite writes its machine-readable outputs through this module so
//! the filenames and layout stay uniform. JSON goes through
//! `serde_json::to_string_pretty`; CSV is assembled as a string and
//! written in one call.

use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::neutrino::TripletResult;
use crate::pmns::ContractionStep;
use crate::validation::ValidationHarness;

/// Default artifact directory, relative to the working directory.
pub const RESULTS_DIR: &str = "results";

/// Pure-Rust ISO 8601 timestamp.
#[must_use]
pub fn now_iso8601() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let day_secs = (secs % 86400) as u32;
    let (hour, minute, second) = (day_secs / 3600, (day_secs % 3600) / 60, day_secs % 60);
    // Civil date from days since 1970-01-01 (Howard Hinnant, public domain)
    let z = (secs / 86400) as i64 + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = i64::from(yoe) + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    format!("{y:04}-{m:02}-{d:02}T{hour:02}:{minute:02}:{second:02}")
}

/// Serialize `value` to `<dir>/<stem>.json`. Returns the path written.
///
/// # Errors
///
/// Returns `Err` if the directory cannot be created, serialization fails,
/// or the file cannot be written.
pub fn save_json<T: Serialize>(value: &T, dir: &str, stem: &str) -> Result<String> {
    std::fs::create_dir_all(dir)?;
    let path = format!("{dir}/{stem}.json");
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

/// Write a CSV built from a header line and preformatted rows to
/// `<dir>/<stem>.csv`. Returns the path written.
///
/// # Errors
///
/// Returns `Err` if the directory cannot be created or the file cannot
/// be written.
pub fn save_csv(dir: &str, stem: &str, header: &str, rows: &[String]) -> Result<String> {
    std::fs::create_dir_all(dir)?;
    let path = format!("{dir}/{stem}.csv");
    let mut out = String::with_capacity(header.len() + rows.len() * 64);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    std::fs::write(&path, out)?;
    Ok(path)
}

/// Write a harness check summary to `results/<stem>.json`, stamped with
/// the generation time.
///
/// # Errors
///
/// Returns `Err` on serialization or filesystem failure.
pub fn save_harness(harness: &ValidationHarness, stem: &str) -> Result<String> {
    std::fs::create_dir_all(RESULTS_DIR)?;
    let path = format!("{RESULTS_DIR}/{stem}.json");
    let mut summary: serde_json::Value = serde_json::from_str(&harness.to_json()?)?;
    if let Some(obj) = summary.as_object_mut() {
        obj.insert(
            "generated_at".to_string(),
            serde_json::Value::String(now_iso8601()),
        );
    }
    std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
    Ok(path)
}

pub const TRIPLET_SCAN_HEADER: &str = "n1,n2,n3,m1_mev,m2_mev,m3_mev,sum_mnu_ev,delta_m21_sq,\
theta_12,theta_13,theta_23,chi2_solar,chi2_pmns,chi2_cosmo,chi2_total,violates_cosmo";

/// CSV rows for the exhaustive triplet scan.
#[must_use]
pub fn triplet_scan_rows(results: &[TripletResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| {
            format!(
                "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6e},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{}",
                r.n1,
                r.n2,
                r.n3,
                r.m1_mev,
                r.m2_mev,
                r.m3_mev,
                r.sum_mnu_ev,
                r.delta_m21_sq,
                r.theta_12,
                r.theta_13,
                r.theta_23,
                r.chi2_solar,
                r.chi2_pmns,
                r.chi2_cosmo,
                r.chi2_total,
                r.violates_cosmo
            )
        })
        .collect()
}

pub const CONTRACTION_HEADER: &str = "iter,b,abs_err";

/// CSV rows for the fixed-point contraction history.
#[must_use]
pub fn contraction_rows(history: &[ContractionStep]) -> Vec<String> {
    history
        .iter()
        .map(|s| format!("{},{:.15},{:.3e}", s.iter, s.b, s.abs_err))
        .collect()
}

/// `true` if `path` exists and is a regular file (artifact sanity check).
#[must_use]
pub fn artifact_exists(path: &str) -> bool {
    Path::new(path).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_shape() {
        let s = now_iso8601();
        assert!(s.len() >= 19);
        assert_eq!(s.as_bytes()[4], b'-');
        assert!(s.contains('T'));
    }

    #[test]
    fn save_and_reload_json() {
        #[derive(serde::Serialize)]
        struct Tiny {
            a: f64,
        }
        let dir = std::env::temp_dir().join("qgi_report_test_json");
        let dir_str = dir.to_str().unwrap();
        let path = save_json(&Tiny { a: 1.5 }, dir_str, "tiny").unwrap();
        assert!(artifact_exists(&path));
        let raw = std::fs::read_to_string(&path).unwrap();
        let back: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!((back["a"].as_f64().unwrap() - 1.5).abs() < 1e-12);
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn harness_summary_is_stamped() {
        let mut h = ValidationHarness::new("stamp_suite");
        h.check_bool("ok", true);
        let path = save_harness(&h, "stamp_suite_test").unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["suite"], "stamp_suite");
        assert!(v["generated_at"].as_str().unwrap().contains('T'));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn csv_layout() {
        let dir = std::env::temp_dir().join("qgi_report_test_csv");
        let dir_str = dir.to_str().unwrap();
        let rows = vec!["1,2".to_string(), "3,4".to_string()];
        let path = save_csv(dir_str, "pairs", "x,y", &rows).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines, vec!["x,y", "1,2", "3,4"]);
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn scan_rows_match_results() {
        let results = crate::neutrino::exhaustive_scan(5);
        let rows = triplet_scan_rows(&results);
        assert_eq!(rows.len(), results.len());
        assert_eq!(
            rows[0].split(',').count(),
            TRIPLET_SCAN_HEADER.split(',').count()
        );
    }

    #[test]
    fn contraction_rows_match_history() {
        let hist = crate::pmns::fixed_point_history(13_579, 50);
        let rows = contraction_rows(&hist);
        assert_eq!(rows.len(), 50);
        assert!(rows[0].starts_with("0,"));
    }
}
