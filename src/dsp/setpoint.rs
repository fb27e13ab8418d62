use crate::graph::node::Updater;

/// Error stage: `measurement - target`.
///
/// Stateless apart from the target, so any two setpoints commute in a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Setpoint {
    pub target: f64,
}

impl Setpoint {
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl Updater for Setpoint {
    #[inline]
    fn update(&mut self, measurement: f64) -> f64 {
        measurement - self.target
    }
}
