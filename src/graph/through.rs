use crate::graph::node::Updater;

/*
Serial Stage Chain (Through)
============================

Through connects two stages in series, passing the output of the first
(source) into the second (next). It is the statically dispatched sibling of
`Cascade`: the pair is a concrete type, so the compiler can inline both
`update` calls and no box or vtable is involved.

How It Works:
-------------
For every sample:

    y = next.update(source.update(x))

  x ──→ [Source] ──→ [Next] ──→ y

Common Use Cases:
-----------------

1. Conditioned feedback:
   Filter a noisy sensor before the controller sees it.

     let mut servo = Biquad::lowpass(1000.0, 50.0, FRAC_1_SQRT_2, 0.0)
         .through(Pid::new(2.0, 0.5, 0.0, 1e-3));

2. Error signal:
   Subtract a target, then shape the error.

     let mut shaped = Setpoint::new(1.0)
         .through(LowPass::new(10.0, 1e-3));

3. Steeper rolloff:
   Two second-order sections in series give a fourth-order response.

     let steep = Biquad::lowpass(fs, fc, q1, 0.0)
         .through(Biquad::lowpass(fs, fc, q2, 0.0));

Through vs Cascade:
-------------------
- Through: fixed at compile time, zero-cost, nests (`a.through(b).through(c)`)
- Cascade: built at runtime from boxed stages (e.g. from a descriptor)

Order matters. Stages carry recursive state, so `a → b` and `b → a` generally
produce different outputs.
*/

pub struct Through<S, N> {
    source: S,
    next: N,
}

impl<S, N> Through<S, N> {
    pub fn new(source: S, next: N) -> Self {
        Self { source, next }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn next(&self) -> &N {
        &self.next
    }

    pub fn into_inner(self) -> (S, N) {
        (self.source, self.next)
    }
}

impl<S: Updater, N: Updater> Updater for Through<S, N> {
    #[inline]
    fn update(&mut self, input: f64) -> f64 {
        let intermediate = self.source.update(input);
        self.next.update(intermediate)
    }
}
