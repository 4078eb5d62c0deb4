// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: artifact pipeline (CSV, JSON, figures).

use qgi_validation::{figures, neutrino, pmns, report};

fn temp_dir(stem: &str) -> String {
    let dir = std::env::temp_dir().join(format!("qgi_it_{stem}"));
    dir.to_str().unwrap().to_string()
}

#[test]
fn scan_csv_round_trip() {
    let dir = temp_dir("scan_csv");
    let results = neutrino::exhaustive_scan(6);
    let rows = report::triplet_scan_rows(&results);
    let path = report::save_csv(&dir, "scan", report::TRIPLET_SCAN_HEADER, &rows).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), results.len() + 1);
    // winner is the first data row and carries the canonical triplet
    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(&first[0..3], &["1", "3", "7"]);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_dir(&dir);
}

#[test]
fn scan_json_preserves_ordering() {
    let dir = temp_dir("scan_json");
    let results = neutrino::exhaustive_scan(6);
    let path = report::save_json(&results, &dir, "scan").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let back: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let rows = back.as_array().unwrap();
    assert_eq!(rows.len(), results.len());
    assert_eq!(rows[0]["n3"], 7);
    let chi0 = rows[0]["chi2_total"].as_f64().unwrap();
    let chi1 = rows[1]["chi2_total"].as_f64().unwrap();
    assert!(chi0 <= chi1);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_dir(&dir);
}

#[test]
fn contraction_figure_and_csv() {
    let dir = temp_dir("contraction");
    let hist = pmns::fixed_point_history(13_579, 120);
    let rows = report::contraction_rows(&hist);
    let csv = report::save_csv(&dir, "contraction", report::CONTRACTION_HEADER, &rows).unwrap();
    assert!(report::artifact_exists(&csv));

    let fig = format!("{dir}/contraction.png");
    let points: Vec<(f64, f64)> = hist.iter().map(|s| (s.iter as f64, s.abs_err)).collect();
    figures::log10_line_chart(&fig, "contraction", "iter", "log10 err", "err", &points, -17.0)
        .unwrap();
    assert!(std::fs::metadata(&fig).unwrap().len() > 0);

    let _ = std::fs::remove_file(&csv);
    let _ = std::fs::remove_file(&fig);
    let _ = std::fs::remove_dir(&dir);
}
