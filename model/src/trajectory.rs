use serde::Deserialize;

use crate::TrajectoryError;

/// Positions of both loads at one simulation step. The columns are read in file order, so the
/// names follow the file layout `x1,x2,y1,y2`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CoordinateSample {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl CoordinateSample {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.x2.is_finite() && self.y1.is_finite() && self.y2.is_finite()
    }
}

/// An immutable, non-empty sequence of samples, one per simulation step.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    inner: Vec<CoordinateSample>,
}

impl Trajectory {
    pub fn new(samples: Vec<CoordinateSample>) -> Result<Self, TrajectoryError> {
        if samples.is_empty() {
            return Err(TrajectoryError::EmptyTrajectory);
        }
        Ok(Self { inner: samples })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    // Never true, but clippy insists on the pair
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&CoordinateSample> {
        self.inner.get(idx)
    }

    pub fn samples(&self) -> &[CoordinateSample] {
        &self.inner
    }
}
