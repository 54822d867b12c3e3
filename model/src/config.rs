use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

pub const DEFAULT_SAMPLES_PATH: &str = "data/pendulum_loads_coordinates.csv";
pub const DEFAULT_SIMULATOR_PATH: &str = "./build/mathematical_pendulum";
/// Simulated seconds per frame. Matches the simulator's integration step.
pub const DEFAULT_FRAME_TIME_STEP: f64 = 0.05;
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(25);

/// Initial conditions passed to the simulator, in the order it expects them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulatorParams {
    pub visualization_time_s: f64,
    pub angle_deg_1: f64,
    pub angle_deg_2: f64,
    pub angular_velocity_deg_1: f64,
    pub angular_velocity_deg_2: f64,
}

impl SimulatorParams {
    /// Positional arguments: T, θ1, θ2, ω1, ω2
    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.visualization_time_s.to_string(),
            self.angle_deg_1.to_string(),
            self.angle_deg_2.to_string(),
            self.angular_velocity_deg_1.to_string(),
            self.angular_velocity_deg_2.to_string(),
        ]
    }
}

/// Built once at startup and handed to everything that needs it.
#[derive(Clone, Debug)]
pub struct Config {
    pub simulator: SimulatorParams,
    /// Run the simulator and overwrite `samples_path` before loading
    pub recalculate: bool,
    pub samples_path: PathBuf,
    pub simulator_path: PathBuf,
    pub frame_time_step: f64,
    pub redraw_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulator: SimulatorParams::default(),
            recalculate: false,
            samples_path: PathBuf::from(DEFAULT_SAMPLES_PATH),
            simulator_path: PathBuf::from(DEFAULT_SIMULATOR_PATH),
            frame_time_step: DEFAULT_FRAME_TIME_STEP,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.frame_time_step.is_finite() || self.frame_time_step < 0.0 {
            bail!(
                "frame time step must be a non-negative number, not {}",
                self.frame_time_step
            );
        }
        if self.redraw_interval.is_zero() {
            bail!("redraw interval can't be zero");
        }
        Ok(())
    }
}
