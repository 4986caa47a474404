//! Terminal visualization using braille graphics
//!
//! Draws the sensitivity curve with Unicode braille characters so a sweep can
//! be eyeballed without opening the rendered PNG.

use drawille::Canvas;

use crate::core::config::Config;
use crate::core::sensitivity::Sample;
use crate::render::clip::{clip_runs, Point, ViewBox};

/// Default canvas size (braille dots; each character cell is 2x4 dots)
pub const PREVIEW_WIDTH: u32 = 120;
pub const PREVIEW_HEIGHT: u32 = 48;

/// Accepted canvas side range (braille dots)
pub const PREVIEW_MIN: u32 = 8;
pub const PREVIEW_MAX: u32 = 2000;

/// Maps data coordinates onto canvas dots
struct DotMapper {
    view: ViewBox,
    width: u32,
    height: u32,
}

impl DotMapper {
    fn map(&self, (x, y): Point) -> (u32, u32) {
        let fx = (x - self.view.x_min) / (self.view.x_max - self.view.x_min);
        let fy = (y - self.view.y_min) / (self.view.y_max - self.view.y_min);
        let px = (fx * (self.width - 1) as f64).round();
        // Y inverted
        let py = ((1.0 - fy) * (self.height - 1) as f64).round();
        (
            px.clamp(0.0, (self.width - 1) as f64) as u32,
            py.clamp(0.0, (self.height - 1) as f64) as u32,
        )
    }
}

/// Render the curve and threshold marker as braille art
///
/// # Example Output
/// ```text
/// Overlap volume (y 0..1, x 0..90°)
/// ⡇⠀⢸⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀
/// ⡇⠀⠀⠑⠢⢄⣀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀
/// ⡇⠀⢸⠀⠀⠀⠀⠉⠉⠑⠒⠒⠒⠤⠤⠤⠤⠤
/// ⣇⣀⣸⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀
///   threshold 15°  |  degenerate points: 0
/// ```
pub fn render_curve_preview(samples: &[Sample], config: &Config, width: u32, height: u32) -> String {
    let width = width.clamp(PREVIEW_MIN, PREVIEW_MAX);
    let height = height.clamp(PREVIEW_MIN, PREVIEW_MAX);
    let view = ViewBox::new(config.x_axis_limit, config.y_axis_limit);
    let mapper = DotMapper {
        view,
        width,
        height,
    };

    let mut canvas = Canvas::new(width, height);

    // Axes along the left and bottom edges
    for y in 0..height {
        canvas.set(0, y);
    }
    for x in 0..width {
        canvas.set(x, height - 1);
    }

    // Dotted threshold marker
    let marker = config.threshold_marker_degrees;
    if marker >= view.x_min && marker <= view.x_max {
        let (mx, _) = mapper.map((marker, view.y_min));
        for y in (0..height).step_by(3) {
            canvas.set(mx, y);
        }
    }

    for run in clip_runs(samples, &view) {
        if let [only] = run.as_slice() {
            let (x, y) = mapper.map(*only);
            canvas.set(x, y);
            continue;
        }
        for pair in run.windows(2) {
            let (x1, y1) = mapper.map(pair[0]);
            let (x2, y2) = mapper.map(pair[1]);
            canvas.line(x1, y1, x2, y2);
        }
    }

    let degenerate = samples.iter().filter(|s| s.volume.is_infinite()).count();

    let mut output = String::new();
    output.push_str(&format!(
        "Overlap volume (y {}..{}, x {}..{}°)\n",
        view.y_min, view.y_max, view.x_min, view.x_max
    ));
    output.push_str(&canvas.frame());
    output.push_str(&format!(
        "\n  threshold {}°  |  degenerate points: {}",
        marker, degenerate
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sweep() -> (Config, Vec<Sample>) {
        let config = Config::default();
        let samples = config.model().sweep(&config.domain().points());
        (config, samples)
    }

    #[test]
    fn test_preview_contains_braille() {
        let (config, samples) = default_sweep();
        let output = render_curve_preview(&samples, &config, PREVIEW_WIDTH, PREVIEW_HEIGHT);

        assert!(output.starts_with("Overlap volume (y 0..1, x 0..90°)"));
        assert!(output.contains("threshold 15°"));
        assert!(output.contains("degenerate points: 0"));
        assert!(output
            .chars()
            .any(|c| c as u32 >= 0x2800 && c as u32 <= 0x28FF));
    }

    #[test]
    fn test_preview_counts_degenerate_points() {
        let (mut config, _) = default_sweep();
        config.domain_start = 0.0;
        config.point_count = 10;
        let samples = config.model().sweep(&config.domain().points());
        let output = render_curve_preview(&samples, &config, 40, 16);
        assert!(output.contains("degenerate points: 1"));
    }

    #[test]
    fn test_preview_tiny_canvas_is_clamped() {
        let (config, samples) = default_sweep();
        let output = render_curve_preview(&samples, &config, 1, 1);
        assert!(output.contains("threshold"));
    }

    #[test]
    fn test_preview_huge_canvas_is_clamped() {
        let (config, samples) = default_sweep();
        let output = render_curve_preview(&samples, &config, u32::MAX, 8);
        let frame_width = output
            .lines()
            .nth(1)
            .map(|line| line.chars().count())
            .unwrap_or(0);
        assert!(frame_width > 0 && frame_width <= (PREVIEW_MAX / 2) as usize);
    }

    #[test]
    fn test_mapper_corners() {
        let mapper = DotMapper {
            view: ViewBox::new([0.0, 90.0], [0.0, 1.0]),
            width: 91,
            height: 11,
        };
        assert_eq!(mapper.map((0.0, 0.0)), (0, 10));
        assert_eq!(mapper.map((90.0, 1.0)), (90, 0));
        assert_eq!(mapper.map((45.0, 0.5)), (45, 5));
    }
}
