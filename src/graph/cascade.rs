use crate::graph::node::Updater;

/*
Cascade
=======

A cascade threads one sample through an ordered list of stages:

    x ──→ [stage 0] ──→ [stage 1] ──→ ... ──→ [stage n-1] ──→ y

It is exactly equivalent to writing the calls out by hand:

    let y = s2.update(s1.update(s0.update(x)));

The classic use is a second-order-sections (SOS) chain, or a servo path such
as pre-filter → controller → actuator shaping.

Two forms are provided:

  cascade(x, &mut stages)   Free function over any slice of stages. Works
                            with `Box<dyn Updater>`, `&mut dyn Updater`, or a
                            homogeneous slice like `[Biquad; 4]`.

  Cascade                   An owned, growable chain of boxed stages. It is
                            itself an `Updater`, so cascades nest and can be
                            handed to the streaming runtime.

Order is caller-specified and significant: each stage has its own recursive
state. Only stateless stages (e.g. two `Setpoint`s) commute.

Allocation: building a `Cascade` allocates (one box per stage, plus the
vector). Updating it never does.
*/

/// Feed `input` through `stages` in order and return the last output.
///
/// An empty slice returns `input` unchanged.
#[inline]
pub fn cascade<U: Updater>(input: f64, stages: &mut [U]) -> f64 {
    stages
        .iter_mut()
        .fold(input, |sample, stage| stage.update(sample))
}

/// Owned chain of boxed stages.
#[derive(Default)]
pub struct Cascade {
    stages: Vec<Box<dyn Updater>>,
}

impl Cascade {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn with<U: Updater + 'static>(mut self, stage: U) -> Self {
        self.push(stage);
        self
    }

    pub fn push<U: Updater + 'static>(&mut self, stage: U) {
        self.stages.push(Box::new(stage));
    }

    pub fn push_boxed(&mut self, stage: Box<dyn Updater>) {
        self.stages.push(stage);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages_mut(&mut self) -> &mut [Box<dyn Updater>] {
        &mut self.stages
    }
}

impl From<Vec<Box<dyn Updater>>> for Cascade {
    fn from(stages: Vec<Box<dyn Updater>>) -> Self {
        Self { stages }
    }
}

impl Updater for Cascade {
    #[inline]
    fn update(&mut self, input: f64) -> f64 {
        cascade(input, &mut self.stages)
    }
}
