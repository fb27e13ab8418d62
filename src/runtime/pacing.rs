use std::{
    thread,
    time::{Duration, Instant},
};

/// Keeps a software loop on a fixed period by sleeping away whatever part of
/// `interval` the loop body did not use.
///
/// ```no_run
/// use std::time::Duration;
/// use saavy_ctl::runtime::pacing::PhaseLock;
///
/// let mut lock = PhaseLock::new(Duration::from_millis(1));
/// lock.start();
/// for _ in 0..100 {
///     // read sensor, update controller, write actuator
///     lock.tick();
/// }
/// ```
///
/// The pacing is best effort. It bounds jitter from the loop body but not
/// from the OS scheduler, and it never feeds back into the stages: their
/// `dt` stays fixed.
#[derive(Debug, Clone, Copy)]
pub struct PhaseLock {
    pub interval: Duration,
    started: Option<Instant>,
}

impl PhaseLock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            started: None,
        }
    }

    /// Mark the beginning of one loop iteration.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Sleep out the rest of the interval and return how long the iteration
    /// took before sleeping. An overrun returns immediately.
    ///
    /// Without a preceding `start` there is nothing to measure: returns zero
    /// without sleeping.
    pub fn stop(&mut self) -> Duration {
        let Some(started) = self.started.take() else {
            return Duration::ZERO;
        };

        let elapsed = started.elapsed();
        match self.interval.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => thread::sleep(remaining),
            _ => log::trace!(
                "iteration overran: {:?} of {:?}",
                elapsed,
                self.interval
            ),
        }
        elapsed
    }

    /// `stop` followed by `start`.
    pub fn tick(&mut self) -> Duration {
        let elapsed = self.stop();
        self.start();
        elapsed
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }
}
