//! Clip a sampled curve to the visible chart window
//!
//! Samples above the y limit (the steep end near 0°) and infinite samples
//! must not reach the backend. Segments are clipped against the view
//! rectangle with Liang-Barsky, and the curve is split into separate runs
//! wherever it leaves the view or hits an infinite sample.

use crate::core::sensitivity::{Sample, Volume};

pub type Point = (f64, f64);

/// Visible data-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBox {
    pub fn new(x_limit: [f64; 2], y_limit: [f64; 2]) -> Self {
        Self {
            x_min: x_limit[0],
            x_max: x_limit[1],
            y_min: y_limit[0],
            y_max: y_limit[1],
        }
    }

    pub fn contains(&self, (x, y): Point) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Endpoints of a full-height vertical line at `x`, empty when `x` is off view
    pub fn vertical_span(&self, x: f64) -> Vec<Point> {
        if x < self.x_min || x > self.x_max {
            return Vec::new();
        }
        vec![(x, self.y_min), (x, self.y_max)]
    }
}

/// Clip one segment to the view; `None` when it lies entirely outside
pub fn clip_segment(p0: Point, p1: Point, view: &ViewBox) -> Option<(Point, Point)> {
    let (x0, y0) = p0;
    let dx = p1.0 - x0;
    let dy = p1.1 - y0;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-dx, x0 - view.x_min),
        (dx, view.x_max - x0),
        (-dy, y0 - view.y_min),
        (dy, view.y_max - y0),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    // Keep untouched endpoints bit-exact so neighbouring segments join up
    let start = if t0 == 0.0 {
        p0
    } else {
        (x0 + t0 * dx, y0 + t0 * dy)
    };
    let end = if t1 == 1.0 {
        p1
    } else {
        (x0 + t1 * dx, y0 + t1 * dy)
    };

    Some((start, end))
}

/// Split samples into visible polyline runs
pub fn clip_runs(samples: &[Sample], view: &ViewBox) -> Vec<Vec<Point>> {
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut prev: Option<Point> = None;

    for sample in samples {
        let point = match sample.volume {
            Volume::Finite(v) => (sample.angle, v),
            Volume::Infinite => {
                flush(&mut runs, &mut current);
                prev = None;
                continue;
            }
        };

        match prev {
            None => {
                if view.contains(point) {
                    current.push(point);
                }
            }
            Some(last) => match clip_segment(last, point, view) {
                Some((a, b)) => {
                    if current.last() != Some(&a) {
                        flush(&mut runs, &mut current);
                        current.push(a);
                    }
                    if b != a {
                        current.push(b);
                    }
                }
                None => flush(&mut runs, &mut current),
            },
        }

        prev = Some(point);
    }

    flush(&mut runs, &mut current);
    runs
}

fn flush(runs: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if !current.is_empty() {
        runs.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewBox {
        ViewBox::new([0.0, 90.0], [0.0, 1.0])
    }

    fn finite(angle: f64, v: f64) -> Sample {
        Sample {
            angle,
            volume: Volume::Finite(v),
        }
    }

    fn infinite(angle: f64) -> Sample {
        Sample {
            angle,
            volume: Volume::Infinite,
        }
    }

    #[test]
    fn test_segment_inside_untouched() {
        let (a, b) = clip_segment((10.0, 0.5), (20.0, 0.4), &view()).unwrap();
        assert_eq!(a, (10.0, 0.5));
        assert_eq!(b, (20.0, 0.4));
    }

    #[test]
    fn test_segment_crossing_top_edge() {
        let (a, b) = clip_segment((0.0, 2.0), (10.0, 0.0), &view()).unwrap();
        assert!((a.0 - 5.0).abs() < 1e-12);
        assert!((a.1 - 1.0).abs() < 1e-12);
        assert_eq!(b, (10.0, 0.0));
    }

    #[test]
    fn test_segment_fully_outside() {
        assert!(clip_segment((1.0, 5.0), (2.0, 3.0), &view()).is_none());
        assert!(clip_segment((95.0, 0.5), (100.0, 0.5), &view()).is_none());
    }

    #[test]
    fn test_runs_continuous_curve_is_one_run() {
        let samples = vec![finite(10.0, 0.9), finite(20.0, 0.5), finite(30.0, 0.3)];
        let runs = clip_runs(&samples, &view());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], vec![(10.0, 0.9), (20.0, 0.5), (30.0, 0.3)]);
    }

    #[test]
    fn test_runs_enter_from_above() {
        let samples = vec![finite(1.0, 8.0), finite(5.0, 2.0), finite(15.0, 0.5)];
        let runs = clip_runs(&samples, &view());
        assert_eq!(runs.len(), 1);
        let first = runs[0][0];
        assert!((first.1 - 1.0).abs() < 1e-12);
        assert!(first.0 > 5.0 && first.0 < 15.0);
        assert_eq!(*runs[0].last().unwrap(), (15.0, 0.5));
    }

    #[test]
    fn test_runs_split_on_infinite() {
        let samples = vec![
            finite(10.0, 0.5),
            finite(20.0, 0.4),
            infinite(25.0),
            finite(30.0, 0.3),
            finite(40.0, 0.2),
        ];
        let runs = clip_runs(&samples, &view());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(10.0, 0.5), (20.0, 0.4)]);
        assert_eq!(runs[1], vec![(30.0, 0.3), (40.0, 0.2)]);
    }

    #[test]
    fn test_runs_never_leave_view() {
        let model = crate::core::sensitivity::SensitivityModel::new(0.225, 3.0, 0.1);
        let domain = crate::core::domain::SweepDomain::new(0.0, 120.0, 400).points();
        let samples = model.sweep(&domain);
        let v = view();
        for run in clip_runs(&samples, &v) {
            for (x, y) in run {
                assert!(x >= v.x_min - 1e-9 && x <= v.x_max + 1e-9, "x {}", x);
                assert!(y >= v.y_min - 1e-9 && y <= v.y_max + 1e-9, "y {}", y);
            }
        }
    }

    #[test]
    fn test_runs_all_infinite_is_empty() {
        let samples = vec![infinite(0.0), infinite(0.05)];
        assert!(clip_runs(&samples, &view()).is_empty());
    }

    #[test]
    fn test_single_visible_point() {
        let runs = clip_runs(&[finite(45.0, 0.2)], &view());
        assert_eq!(runs, vec![vec![(45.0, 0.2)]]);
    }

    #[test]
    fn test_vertical_span() {
        assert_eq!(view().vertical_span(15.0), vec![(15.0, 0.0), (15.0, 1.0)]);
        assert_eq!(view().vertical_span(90.0), vec![(90.0, 0.0), (90.0, 1.0)]);
        assert!(view().vertical_span(120.0).is_empty());
        assert!(view().vertical_span(-0.5).is_empty());
    }
}
