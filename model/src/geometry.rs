use crate::{Trajectory, TrajectoryError};

/// A point on the Cartesian plane, in simulation length units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The pivot, then load 1, then load 2
    pub vertices: [Point; 3],
    pub label: String,
}

/// Turns a frame index into geometry and an elapsed-time label.
#[derive(Clone, Copy, Debug)]
pub struct GeometryMapper {
    /// Simulated time covered by one frame
    frame_time_step: f64,
}

impl GeometryMapper {
    pub fn new(frame_time_step: f64) -> Self {
        Self { frame_time_step }
    }

    pub fn map(&self, trajectory: &Trajectory, idx: usize) -> Result<Frame, TrajectoryError> {
        let sample = trajectory
            .get(idx)
            .ok_or(TrajectoryError::IndexOutOfRange {
                index: idx,
                len: trajectory.len(),
            })?;
        // The first two columns form the second vertex and the last two the third. The
        // simulator writes each load's (x, y) pair next to each other, whatever the column
        // names suggest.
        let vertices = [
            Point::ORIGIN,
            Point::new(sample.x1, sample.x2),
            Point::new(sample.y1, sample.y2),
        ];
        Ok(Frame {
            vertices,
            label: self.label(idx),
        })
    }

    pub fn label(&self, idx: usize) -> String {
        format!("time = {:.1}s", idx as f64 * self.frame_time_step)
    }
}
