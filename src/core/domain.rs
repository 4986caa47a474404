//! Sweep domain - the evenly spaced angle grid

use serde::{Deserialize, Serialize};

/// Closed interval of angles sampled at `point_count` evenly spaced points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepDomain {
    pub start: f64,
    pub end: f64,
    pub point_count: usize,
}

impl SweepDomain {
    pub fn new(start: f64, end: f64, point_count: usize) -> Self {
        Self {
            start,
            end,
            point_count,
        }
    }

    /// Spacing between consecutive points (0 for a single-point domain)
    pub fn step(&self) -> f64 {
        if self.point_count < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.point_count - 1) as f64
        }
    }

    /// Materialize the grid
    ///
    /// Both endpoints are included and the last point is exactly `end`.
    /// A single-point domain yields `[start]`, an empty one yields nothing.
    pub fn points(&self) -> Vec<f64> {
        let n = self.point_count;
        let step = self.step();
        (0..n)
            .map(|i| {
                if n > 1 && i == n - 1 {
                    self.end
                } else {
                    self.start + i as f64 * step
                }
            })
            .collect()
    }

    /// Whether `angle` lies within the closed interval, in either direction
    pub fn contains(&self, angle: f64) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        angle >= lo && angle <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_endpoints() {
        let points = SweepDomain::new(1.0, 90.0, 500).points();
        assert_eq!(points.len(), 500);
        assert_eq!(points[0], 1.0);
        assert_eq!(points[499], 90.0);
    }

    #[test]
    fn test_even_spacing() {
        let domain = SweepDomain::new(0.0, 10.0, 11);
        let points = domain.points();
        assert_eq!(domain.step(), 1.0);
        for (i, p) in points.iter().enumerate() {
            assert!((p - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_point() {
        assert_eq!(SweepDomain::new(15.0, 90.0, 1).points(), vec![15.0]);
    }

    #[test]
    fn test_empty() {
        assert!(SweepDomain::new(1.0, 90.0, 0).points().is_empty());
    }

    #[test]
    fn test_descending_domain() {
        let points = SweepDomain::new(90.0, 0.0, 4).points();
        assert_eq!(points, vec![90.0, 60.0, 30.0, 0.0]);
    }

    #[test]
    fn test_every_point_within_domain() {
        let domain = SweepDomain::new(1.0, 90.0, 500);
        assert!(domain.points().iter().all(|&p| domain.contains(p)));
        assert!(!domain.contains(0.5));
        assert!(!domain.contains(90.5));
    }
}
