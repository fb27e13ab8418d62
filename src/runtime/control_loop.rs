use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::graph::node::Updater;

/*
Streaming Control Loop
======================

Pumps measurements through a stage on a dedicated thread:

    caller thread                         loop thread
    ─────────────                         ───────────
    LoopHandle::send(m) ──[measurements]──→ ┐
                                            │ stage.update(m)
    LoopHandle::recv()  ←──[outputs]─────── ┘
    LoopHandle::pause() ──[commands]──────→ Pause / Resume / Stop

All three queues are single-producer single-consumer lock-free ring
buffers (rtrb), so neither side ever takes a lock or allocates after
`channel()` returns. The stage is owned by the loop: there is exactly one
in-flight `update` per stage by construction.

Lifecycle
---------

    Running ── Pause ──→ Paused ── Resume ──→ Running
       │                   │
       └────── Stop ───────┴──→ Stopped

Dropping the `LoopHandle` (abandoning the measurement queue) also stops the
loop once the remaining measurements have been processed, so "close the
input" is a valid way to shut down. A loop that is paused when the handle
goes away stops at once and leaves its queued measurements unprocessed.

While paused, measurements stay queued. If the caller keeps sending, the
measurement queue fills and `send` reports it.

Back-pressure
-------------

If the caller does not drain outputs, the output queue fills. The loop never
blocks on it: the output is dropped and counted (`dropped()`).
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    Pause,
    Resume,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Running,
    Paused,
    Stopped,
}

/// Loop side: owns the stage.
pub struct ControlLoop<U> {
    stage: U,
    measurements: Consumer<f64>,
    outputs: Producer<f64>,
    commands: Consumer<LoopCommand>,
    status: LoopStatus,
    processed: u64,
    dropped: u64,
}

/// Caller side: feeds measurements, collects outputs, steers the loop.
pub struct LoopHandle {
    measurements: Producer<f64>,
    outputs: Consumer<f64>,
    commands: Producer<LoopCommand>,
}

const COMMAND_QUEUE_SIZE: usize = 16;

/// Create a loop around `stage` with room for `capacity` in-flight
/// measurements and outputs.
pub fn channel<U: Updater>(stage: U, capacity: usize) -> (ControlLoop<U>, LoopHandle) {
    let (measurement_tx, measurement_rx) = RingBuffer::<f64>::new(capacity);
    let (output_tx, output_rx) = RingBuffer::<f64>::new(capacity);
    let (command_tx, command_rx) = RingBuffer::<LoopCommand>::new(COMMAND_QUEUE_SIZE);

    let control = ControlLoop {
        stage,
        measurements: measurement_rx,
        outputs: output_tx,
        commands: command_rx,
        status: LoopStatus::Running,
        processed: 0,
        dropped: 0,
    };
    let handle = LoopHandle {
        measurements: measurement_tx,
        outputs: output_rx,
        commands: command_tx,
    };

    (control, handle)
}

impl<U: Updater> ControlLoop<U> {
    pub fn status(&self) -> LoopStatus {
        self.status
    }

    /// Measurements run through the stage so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Outputs discarded because the output queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn stage(&self) -> &U {
        &self.stage
    }

    /// One non-blocking pass: apply pending commands, then process the
    /// measurements that were queued when the pass started.
    pub fn poll(&mut self) -> LoopStatus {
        while let Ok(command) = self.commands.pop() {
            self.apply(command);
        }

        // A dropped handle can never send Resume or Stop
        if self.status == LoopStatus::Paused && self.commands.is_abandoned() {
            log::debug!("handle dropped while paused");
            self.status = LoopStatus::Stopped;
        }

        if self.status != LoopStatus::Running {
            return self.status;
        }

        let pending = self.measurements.slots();
        for _ in 0..pending {
            let Ok(measurement) = self.measurements.pop() else {
                break;
            };
            let output = self.stage.update(measurement);
            self.processed += 1;

            if self.outputs.push(output).is_err() {
                self.dropped += 1;
                if self.dropped.is_power_of_two() {
                    log::warn!("output queue full, {} outputs dropped so far", self.dropped);
                }
            }
        }

        if self.measurements.is_abandoned() && self.measurements.is_empty() {
            log::debug!("measurement queue closed");
            self.status = LoopStatus::Stopped;
        }

        self.status
    }

    /// Poll until stopped, sleeping `idle` whenever there is nothing to do.
    /// Returns the stage so its final state can be inspected.
    pub fn run(mut self, idle: Duration) -> U {
        log::info!("control loop started");

        while self.poll() != LoopStatus::Stopped {
            if self.measurements.is_empty() || self.status == LoopStatus::Paused {
                thread::sleep(idle);
            }
        }

        log::info!(
            "control loop stopped after {} updates ({} outputs dropped)",
            self.processed,
            self.dropped
        );
        self.stage
    }

    /// `run` on a new thread.
    pub fn spawn(self, idle: Duration) -> JoinHandle<U>
    where
        U: 'static,
    {
        thread::spawn(move || self.run(idle))
    }

    fn apply(&mut self, command: LoopCommand) {
        let next = match (self.status, command) {
            (LoopStatus::Stopped, _) => LoopStatus::Stopped,
            (_, LoopCommand::Stop) => LoopStatus::Stopped,
            (_, LoopCommand::Pause) => LoopStatus::Paused,
            (_, LoopCommand::Resume) => LoopStatus::Running,
        };
        if next != self.status {
            log::debug!("control loop {:?} -> {:?}", self.status, next);
            self.status = next;
        }
    }
}

impl LoopHandle {
    pub fn send(&mut self, measurement: f64) -> Result<(), PushError<f64>> {
        self.measurements.push(measurement)
    }

    pub fn recv(&mut self) -> Option<f64> {
        self.outputs.pop().ok()
    }

    /// Outputs waiting to be received.
    pub fn pending(&self) -> usize {
        self.outputs.slots()
    }

    pub fn pause(&mut self) -> Result<(), PushError<LoopCommand>> {
        self.commands.push(LoopCommand::Pause)
    }

    pub fn resume(&mut self) -> Result<(), PushError<LoopCommand>> {
        self.commands.push(LoopCommand::Resume)
    }

    pub fn stop(&mut self) -> Result<(), PushError<LoopCommand>> {
        self.commands.push(LoopCommand::Stop)
    }
}
