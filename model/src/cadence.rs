use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{PlaybackState, RenderSink, Scheduler};

/// Asks playback to stop. Clones share the same flag, so one can be handed to whatever notices
/// the window closing.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Drives a scheduler from the current thread, sleeping between ticks.
#[derive(Clone, Copy, Debug)]
pub struct Cadence {
    interval: Duration,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Blocks until playback finishes or `stop` is raised. Ticks start `interval` apart; a tick
    /// that takes longer is followed immediately by the next one, never by a burst.
    pub fn run<S: RenderSink + ?Sized>(
        &self,
        scheduler: &mut Scheduler,
        sink: &mut S,
        stop: &StopSignal,
    ) -> PlaybackState {
        scheduler.start();
        loop {
            // Checked right before every tick, so nothing runs after a stop
            if stop.is_raised() {
                return scheduler.abort();
            }

            let tick_started = Instant::now();
            let state = scheduler.tick(sink);
            if state != PlaybackState::Running {
                return state;
            }

            let elapsed = tick_started.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            } else {
                warn!(
                    "Frame {} took {:?}, longer than the {:?} interval",
                    scheduler.current_frame() - 1,
                    elapsed,
                    self.interval
                );
            }
        }
    }
}

/// For event loops that report how much real time passed since the last update. Says when the
/// next tick is due.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    interval: Duration,
    since_last_tick: Duration,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            since_last_tick: Duration::ZERO,
        }
    }

    /// At most one tick per update, no matter how much time passed. Whole missed intervals
    /// aren't caught up, but the remainder carries over so ticks don't drift later.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.since_last_tick += dt;
        if self.since_last_tick >= self.interval {
            let leftover = self.since_last_tick.as_nanos() % self.interval.as_nanos();
            self.since_last_tick = Duration::from_nanos(leftover as u64);
            true
        } else {
            false
        }
    }
}
