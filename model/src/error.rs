use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading the sample file and mapping a frame.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("can't read samples from {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based, counting the way an editor would.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("trajectory has no samples")]
    EmptyTrajectory,

    /// Only reachable if a caller skips the bounds check the scheduler does.
    #[error("frame {index} requested, but the trajectory only has {len} samples")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TrajectoryError {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
