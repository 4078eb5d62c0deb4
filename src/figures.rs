// SPDX-License-Identifier: AGPL-3.0-only

//! PNG figures for the validation suites (plotters bitmap backend).
//!
//! Quantities spanning many decades are plotted as log₁₀ on a linear
//! axis, which keeps every chart on the same `f64` coordinate type.
//! Figures land under `figures/` next to the `results/` artifacts.

use plotters::prelude::*;

use crate::error::{QgiError, Result};

/// Default figure directory, relative to the working directory.
pub const FIGURES_DIR: &str = "figures";

/// A named series of (x, y) points.
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

fn fig_err<E: std::fmt::Display>(e: E) -> QgiError {
    QgiError::Figure(e.to_string())
}

fn bounds(series: &[Series]) -> Result<(f64, f64, f64, f64)> {
    let mut it = series.iter().flat_map(|s| s.points.iter().copied());
    let first = it
        .next()
        .ok_or_else(|| QgiError::Figure("no points to plot".into()))?;
    let mut b = (first.0, first.0, first.1, first.1);
    for (x, y) in it {
        b.0 = b.0.min(x);
        b.1 = b.1.max(x);
        b.2 = b.2.min(y);
        b.3 = b.3.max(y);
    }
    // pad degenerate ranges so plotters gets a nonempty axis
    if b.1 - b.0 < 1e-12 {
        b.0 -= 0.5;
        b.1 += 0.5;
    }
    let pad = 0.05 * (b.3 - b.2).max(1e-12);
    Ok((b.0, b.1, b.2 - pad, b.3 + pad))
}

/// Multi-series line chart.
///
/// # Errors
///
/// Returns `Err` if the series are empty or the backend fails to draw
/// or write the file.
pub fn line_chart(
    path: &str,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[Series],
) -> Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let (x0, x1, y0, y1) = bounds(series)?;

    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(fig_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(fig_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(fig_err)?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), &color))
            .map_err(fig_err)?
            .label(s.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.85))
        .draw()
        .map_err(fig_err)?;

    root.present().map_err(fig_err)?;
    Ok(())
}

/// Line chart of log₁₀|y| against x. Zero values are clipped at the
/// given floor (in decades) instead of producing −∞.
///
/// # Errors
///
/// Propagates [`line_chart`] failures.
pub fn log10_line_chart(
    path: &str,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    label: &str,
    points: &[(f64, f64)],
    floor_decades: f64,
) -> Result<()> {
    let transformed: Vec<(f64, f64)> = points
        .iter()
        .map(|&(x, y)| {
            let v = y.abs();
            let ly = if v > 0.0 {
                v.log10().max(floor_decades)
            } else {
                floor_decades
            };
            (x, ly)
        })
        .collect();
    line_chart(
        path,
        title,
        x_desc,
        y_desc,
        &[Series {
            label: label.to_string(),
            points: transformed,
        }],
    )
}

/// Pull chart: one marker per observable at (index, (pred − obs)/σ),
/// with guide lines at 0 and ±2σ.
///
/// # Errors
///
/// Returns `Err` if `pulls` is empty or the backend fails.
pub fn pull_chart(path: &str, title: &str, pulls: &[(String, f64)]) -> Result<()> {
    if pulls.is_empty() {
        return Err(QgiError::Figure("no pulls to plot".into()));
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let n = pulls.len() as f64;
    let y_max = pulls
        .iter()
        .map(|(_, p)| p.abs())
        .fold(2.5_f64, f64::max)
        + 0.5;

    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(fig_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.5..(n - 0.5), -y_max..y_max)
        .map_err(fig_err)?;

    chart
        .configure_mesh()
        .x_desc("observable index")
        .y_desc("pull (σ)")
        .draw()
        .map_err(fig_err)?;

    for level in [-2.0, 0.0, 2.0] {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(-0.5, level), (n - 0.5, level)],
                BLACK.mix(if level == 0.0 { 0.8 } else { 0.3 }),
            )))
            .map_err(fig_err)?;
    }

    chart
        .draw_series(
            pulls
                .iter()
                .enumerate()
                .map(|(i, (_, p))| Circle::new((i as f64, *p), 5, BLUE.filled())),
        )
        .map_err(fig_err)?;

    root.present().map_err(fig_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_png(stem: &str) -> String {
        std::env::temp_dir()
            .join(format!("qgi_fig_test_{stem}.png"))
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn empty_series_is_an_error() {
        let path = tmp_png("empty");
        let r = line_chart(&path, "t", "x", "y", &[]);
        assert!(r.is_err());
    }

    #[test]
    fn line_chart_writes_png() {
        let path = tmp_png("line");
        let series = [Series {
            label: "demo".into(),
            points: (0..50).map(|i| (f64::from(i), f64::from(i).sin())).collect(),
        }];
        line_chart(&path, "demo", "x", "sin x", &series).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn log10_chart_clips_zeros() {
        let path = tmp_png("log10");
        let points = vec![(1.0, 1e-3), (2.0, 0.0), (3.0, 1e-9)];
        log10_line_chart(&path, "residuals", "l", "log10 |r|", "r", &points, -16.0).unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn pull_chart_writes_png() {
        let path = tmp_png("pulls");
        let pulls = vec![
            ("a".to_string(), 0.4),
            ("b".to_string(), -3.6),
            ("c".to_string(), 1.0),
        ];
        pull_chart(&path, "pulls", &pulls).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
