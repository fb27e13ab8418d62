use crate::graph::node::Updater;

/*
PID Controller
==============

Proportional-Integral-Derivative control drives a measured process toward a
setpoint by combining three views of the error:

    err        = setpoint - measurement
    integral  += err · dt
    derivative = (err - prev_err) / dt

    output     = kp·err + ki·integral + kd·derivative

Vocabulary
----------

  kp          Proportional gain, unitless. Reacts to the present error.

  ki          Integral gain, 1/s. Removes steady-state offset by reacting to
              accumulated error.

  kd          Derivative gain, s. Damps the response by reacting to how fast
              the error is changing.

  dt          Interval between updates, seconds. A FIXED field, never measured
              from a clock. The loop is deterministic and runs identically in
              a simulation and on hardware; the caller is responsible for
              invoking `update` every `dt`.

  windup      The integral keeps growing while the actuator is saturated or
              the process is slow, then overshoots once the error flips sign.

  anti-windup `integral_limit` caps the accumulated integral. Zero disables
              the cap. Only the HIGH side is clamped.


Start-up
--------

The controller has two states:

    ┌───────────────┐  first update(x)   ┌─────────┐
    │ uninitialized │ ─────────────────→ │ running │ ──┐ update(x)
    └───────────────┘   returns x as-is  └─────────┘ ←─┘

The first sample only seeds the reference point: it is stored as the last
input and output and returned unchanged. Error, integral and previous error
are not touched. Control starts with the second sample.


Setpoint Changes
----------------

Moving the setpoint with a large accumulated integral produces a transient
driven by stale history. Call `integral_reset()` when making a step change.


Contract
--------

dt must be > 0, even for P-only control. This is not checked on the hot
path: dt == 0 yields Inf/NaN output. `patch::StageDescriptor::build` checks
it once at construction.
*/

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pid {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub dt: f64,
    /// Cap on the integral error. 0 disables the cap.
    pub integral_limit: f64,
    pub setpoint: f64,

    input: f64,
    output: f64,
    prev_error: f64,
    integral: f64,
    running: bool,
}

impl Pid {
    pub fn new(kp: f64, ki: f64, kd: f64, dt: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            dt,
            ..Self::default()
        }
    }

    pub fn with_integral_limit(mut self, limit: f64) -> Self {
        self.integral_limit = limit;
        self
    }

    pub fn with_setpoint(mut self, setpoint: f64) -> Self {
        self.setpoint = setpoint;
        self
    }

    pub fn set_setpoint(&mut self, setpoint: f64) {
        self.setpoint = setpoint;
    }

    /// Last measurement passed to `update`.
    pub fn input(&self) -> f64 {
        self.input
    }

    /// Last value returned by `update`.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Accumulated integral error. Useful when tuning the loop.
    pub fn integral_error(&self) -> f64 {
        self.integral
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Zero the accumulated integral error.
    pub fn integral_reset(&mut self) {
        self.integral = 0.0;
    }

    /// Back to the uninitialized state. Gains and setpoint are kept.
    pub fn reset(&mut self) {
        self.input = 0.0;
        self.output = 0.0;
        self.prev_error = 0.0;
        self.integral = 0.0;
        self.running = false;
    }
}

impl Updater for Pid {
    fn update(&mut self, input: f64) -> f64 {
        self.input = input;

        if !self.running {
            self.output = input;
            self.running = true;
            return input;
        }

        let err = self.setpoint - input;
        self.integral += err * self.dt;
        if self.integral_limit != 0.0 && self.integral > self.integral_limit {
            self.integral = self.integral_limit;
        }
        let derivative = (err - self.prev_error) / self.dt;

        self.output = self.kp * err + self.ki * self.integral + self.kd * derivative;
        self.prev_error = err;
        self.output
    }
}
