#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod bootstrap;
mod cadence;
mod config;
mod error;
mod geometry;
mod loader;
mod scheduler;
mod trajectory;

pub use self::cadence::{Cadence, FrameClock, StopSignal};
pub use self::config::{Config, SimulatorParams};
pub use self::error::TrajectoryError;
pub use self::geometry::{Frame, GeometryMapper, Point};
pub use self::scheduler::{PlaybackState, RenderSink, Scheduler};
pub use self::trajectory::{CoordinateSample, Trajectory};

pub use self::loader::{load, load_from_reader};
