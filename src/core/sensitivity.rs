//! Overlap volume sensitivity kernel
//!
//! Two sheets of thickness `t` crossing at an intersection angle `θ` over a
//! height `h` share an overlap region whose volume grows as the angle closes:
//!
//! ```text
//! V(θ) = t² · h / sin(θ)
//! ```
//!
//! As `θ → 0°` the denominator vanishes, so angles below a configured floor are
//! reported as [`Volume::Infinite`] instead of being computed.

use serde::{Serialize, Serializer};

/// Overlap volume at one angle
///
/// Degenerate angles carry an explicit tag instead of an IEEE infinity so
/// consumers (table output, chart clipping) can match on it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume {
    /// A finite, strictly positive volume
    Finite(f64),
    /// Unbounded overlap (angle below the degenerate floor)
    Infinite,
}

impl Volume {
    /// The finite value, or `None` for degenerate angles
    pub fn finite(self) -> Option<f64> {
        match self {
            Volume::Finite(v) => Some(v),
            Volume::Infinite => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Volume::Infinite)
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Volume::Finite(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Volume::Infinite => write!(f, "inf"),
        }
    }
}

impl Serialize for Volume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Volume::Finite(v) => serializer.serialize_f64(*v),
            Volume::Infinite => serializer.serialize_str("inf"),
        }
    }
}

/// One point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Intersection angle in degrees
    pub angle: f64,
    /// Overlap volume at that angle
    pub volume: Volume,
}

/// Evaluate the overlap volume at a single angle
///
/// Returns [`Volume::Infinite`] when `angle_degrees < floor_degrees`.
/// Otherwise returns `thickness² × height / sin(angle)` with the angle
/// converted using `π / 180`. A quotient that is not finite and strictly
/// positive (sine ≤ 0 past 180°, NaN input, overflow) is also reported as
/// infinite so a [`Volume::Finite`] is never NaN or negative.
pub fn evaluate(angle_degrees: f64, thickness: f64, height: f64, floor_degrees: f64) -> Volume {
    if angle_degrees < floor_degrees {
        return Volume::Infinite;
    }

    let theta = angle_degrees * std::f64::consts::PI / 180.0;
    let volume = (thickness * thickness * height) / theta.sin();

    if volume.is_finite() && volume > 0.0 {
        Volume::Finite(volume)
    } else {
        Volume::Infinite
    }
}

/// Physical parameters the sampler closes over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityModel {
    pub thickness: f64,
    pub height: f64,
    pub floor_degrees: f64,
}

impl SensitivityModel {
    pub fn new(thickness: f64, height: f64, floor_degrees: f64) -> Self {
        Self {
            thickness,
            height,
            floor_degrees,
        }
    }

    /// Evaluate the model at one angle
    pub fn evaluate(&self, angle_degrees: f64) -> Volume {
        evaluate(
            angle_degrees,
            self.thickness,
            self.height,
            self.floor_degrees,
        )
    }

    /// Lazily map each domain angle to a sample, preserving order
    pub fn samples<'a>(&'a self, domain: &'a [f64]) -> impl Iterator<Item = Sample> + 'a {
        domain.iter().map(move |&angle| Sample {
            angle,
            volume: self.evaluate(angle),
        })
    }

    /// Evaluate every angle in `domain`
    ///
    /// Output length always equals `domain.len()` and `out[i].angle == domain[i]`.
    pub fn sweep(&self, domain: &[f64]) -> Vec<Sample> {
        self.samples(domain).collect()
    }
}

/// Headline numbers for a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    pub points: usize,
    pub infinite_points: usize,
    /// (angle, volume) of the smallest finite volume
    pub min: Option<(f64, f64)>,
    /// (angle, volume) of the largest finite volume
    pub max: Option<(f64, f64)>,
    /// Volume evaluated at the threshold marker angle
    pub at_threshold: Volume,
    pub threshold_degrees: f64,
}

impl SweepSummary {
    pub fn from_samples(
        samples: &[Sample],
        model: &SensitivityModel,
        threshold_degrees: f64,
    ) -> Self {
        let mut min: Option<(f64, f64)> = None;
        let mut max: Option<(f64, f64)> = None;
        let mut infinite_points = 0;

        for sample in samples {
            match sample.volume {
                Volume::Finite(v) => {
                    if min.map_or(true, |(_, m)| v < m) {
                        min = Some((sample.angle, v));
                    }
                    if max.map_or(true, |(_, m)| v > m) {
                        max = Some((sample.angle, v));
                    }
                }
                Volume::Infinite => infinite_points += 1,
            }
        }

        Self {
            points: samples.len(),
            infinite_points,
            min,
            max,
            at_threshold: model.evaluate(threshold_degrees),
            threshold_degrees,
        }
    }
}
