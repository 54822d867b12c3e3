//! Everything that happens before playback: optionally regenerating the sample file, then
//! loading it.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::{Config, GeometryMapper, Scheduler, Trajectory};

/// Produces the trajectory to play, running the simulator first if asked to.
pub fn prepare(config: &Config) -> Result<Trajectory> {
    config.validate()?;
    if config.recalculate {
        run_simulator(config)?;
    }
    let samples = crate::load(&config.samples_path)?;
    let trajectory = Trajectory::new(samples)?;
    info!(
        "Loaded a trajectory with {} frames, covering {:.1}s",
        trajectory.len(),
        trajectory.len() as f64 * config.frame_time_step
    );
    Ok(trajectory)
}

/// `prepare`, then hand the result to an idle scheduler.
pub fn scheduler(config: &Config) -> Result<Scheduler> {
    let trajectory = prepare(config)?;
    Ok(Scheduler::new(
        trajectory,
        GeometryMapper::new(config.frame_time_step),
    ))
}

fn run_simulator(config: &Config) -> Result<()> {
    if let Some(dir) = config.samples_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs_err::create_dir_all(dir)?;
        }
    }
    let (output, _) = fs_err::File::create(&config.samples_path)?.into_parts();

    let args = config.simulator.to_args();
    info!(
        "Running {} {} > {}",
        config.simulator_path.display(),
        args.join(" "),
        config.samples_path.display()
    );
    let status = Command::new(&config.simulator_path)
        .args(&args)
        .stdout(Stdio::from(output))
        .status()
        .with_context(|| format!("couldn't run {}", config.simulator_path.display()))?;
    if !status.success() {
        bail!("{} failed: {}", config.simulator_path.display(), status);
    }
    Ok(())
}
