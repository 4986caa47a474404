//! PNG chart rendering via plotters
//!
//! Lays out the sweep the way a paper figure would: curve, dashed threshold
//! marker, title, axis labels, legend and grid. Sizes are specified in
//! typographic points and scaled by the configured DPI, so a 10×6 in figure
//! at 300 DPI comes out at 3000×1800 px with proportionate text.

use plotters::prelude::*;
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::Config;
use crate::core::sensitivity::Sample;
use crate::render::clip::{clip_runs, ViewBox};

pub const TITLE: &str = "Sensitivity Analysis: Overlap Volume vs. Intersection Angle";
pub const X_LABEL: &str = "Intersection Angle (degrees)";
pub const Y_LABEL: &str = "Overlap Volume (m³)";
pub const CURVE_LABEL: &str = "Overlap Volume V = t²h / sin(θ)";

const FONT: &str = "sans-serif";

// Sizes in points
const TITLE_PT: f64 = 14.0;
const AXIS_DESC_PT: f64 = 12.0;
const TICK_PT: f64 = 10.0;
const LEGEND_PT: f64 = 10.0;
const CURVE_WIDTH_PT: f64 = 2.0;
const MARKER_WIDTH_PT: f64 = 1.5;
const GRID_WIDTH_PT: f64 = 0.8;
const MARGIN_PT: f64 = 10.0;
const X_LABEL_AREA_PT: f64 = 40.0;
const Y_LABEL_AREA_PT: f64 = 55.0;
const LEGEND_SWATCH_PT: f64 = 20.0;
const MARKER_DASH_PT: f64 = 6.0;
const MARKER_GAP_PT: f64 = 4.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to render chart to {path}: {message}")]
    Drawing { path: PathBuf, message: String },
}

/// Legend text for the threshold marker
pub fn threshold_label(degrees: f64) -> String {
    format!("Threshold θmin = {}°", degrees)
}

/// Converts point sizes to pixels at a given DPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    dpi: u32,
}

impl PointScale {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Pixels for a size in points (1 pt = 1/72 in), never below 1 px
    pub fn px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }
}

/// Render `samples` to the PNG named by `config.output_path`
///
/// The file is written and closed before this returns. Any backend failure
/// (unwritable path, missing font) is reported as [`RenderError`].
pub fn render_chart(samples: &[Sample], config: &Config) -> Result<PathBuf, RenderError> {
    let path = config.output_path.clone();
    let size = config.pixel_size();
    log::info!(
        "Rendering {} samples to {} ({}x{} px)",
        samples.len(),
        path.display(),
        size.0,
        size.1
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(RenderError::MissingDirectory(parent.to_path_buf()));
        }
    }

    draw(&path, size, samples, config).map_err(|e| RenderError::Drawing {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(path)
}

fn draw(
    path: &Path,
    size: (u32, u32),
    samples: &[Sample],
    config: &Config,
) -> Result<(), Box<dyn StdError>> {
    let scale = PointScale::new(config.output_resolution);
    let view = ViewBox::new(config.x_axis_limit, config.y_axis_limit);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, (FONT, scale.px(TITLE_PT)))
        .margin(scale.px(MARGIN_PT))
        .x_label_area_size(scale.px(X_LABEL_AREA_PT))
        .y_label_area_size(scale.px(Y_LABEL_AREA_PT))
        .build_cartesian_2d(view.x_min..view.x_max, view.y_min..view.y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style((FONT, scale.px(AXIS_DESC_PT)))
        .label_style((FONT, scale.px(TICK_PT)))
        .bold_line_style(BLACK.mix(0.25).stroke_width(scale.px(GRID_WIDTH_PT)))
        .light_line_style(BLACK.mix(0.08).stroke_width(1))
        .draw()?;

    let curve_style = BLUE.stroke_width(scale.px(CURVE_WIDTH_PT));
    let marker_style = RED.stroke_width(scale.px(MARKER_WIDTH_PT));
    let swatch = scale.px(LEGEND_SWATCH_PT) as i32;

    let mut runs = clip_runs(samples, &view);
    log::debug!("Curve clipped into {} run(s)", runs.len());
    if runs.is_empty() {
        // Keeps the legend entry when nothing is visible
        runs.push(Vec::new());
    }

    for (i, run) in runs.into_iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(run, curve_style))?;
        if i == 0 {
            series
                .label(CURVE_LABEL)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + swatch, y)], curve_style));
        }
    }

    chart
        .draw_series(DashedLineSeries::new(
            view.vertical_span(config.threshold_marker_degrees),
            scale.px(MARKER_DASH_PT),
            scale.px(MARKER_GAP_PT),
            marker_style,
        ))?
        .label(threshold_label(config.threshold_marker_degrees))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + swatch / 2, y)], marker_style)
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, scale.px(LEGEND_PT)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_scale() {
        let scale = PointScale::new(300);
        assert_eq!(scale.px(72.0), 300);
        assert_eq!(scale.px(14.0), 58);
        assert_eq!(PointScale::new(72).px(12.0), 12);
        assert_eq!(PointScale::new(10).px(0.5), 1);
    }

    #[test]
    fn test_threshold_label() {
        assert_eq!(threshold_label(15.0), "Threshold θmin = 15°");
        assert_eq!(threshold_label(12.5), "Threshold θmin = 12.5°");
    }

    #[test]
    fn test_missing_directory_rejected_before_drawing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.output_path = tmp.path().join("missing").join("chart.png");
        let err = render_chart(&[], &config).unwrap_err();
        assert!(matches!(err, RenderError::MissingDirectory(_)));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_render_error_names_path() {
        let err = RenderError::Drawing {
            path: PathBuf::from("/nope/chart.png"),
            message: "denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to render chart to /nope/chart.png: denied"
        );
    }
}
