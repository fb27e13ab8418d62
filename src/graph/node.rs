/// Core trait for single-sample processing stages
///
/// Every controller and filter in the crate consumes one sample and produces
/// one sample. Implementations must not allocate and must finish in bounded,
/// input-independent time: `update` runs inside the control loop itself.
pub trait Updater: Send {
    fn update(&mut self, input: f64) -> f64;
}

/// Allow boxed stages to be used as stages (for dynamic dispatch)
impl<U: Updater + ?Sized> Updater for Box<U> {
    #[inline]
    fn update(&mut self, input: f64) -> f64 {
        (**self).update(input)
    }
}

/// Borrowed stages, so a caller can chain stages it keeps ownership of.
impl<U: Updater + ?Sized> Updater for &mut U {
    #[inline]
    fn update(&mut self, input: f64) -> f64 {
        (**self).update(input)
    }
}

/// Stage backed by a closure. Created with [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

/// Wrap a closure as a stage.
///
/// Handy for plant models in simulations:
///
/// ```
/// use saavy_ctl::graph::{from_fn, Updater};
///
/// let mut state = 0.0;
/// let mut plant = from_fn(move |command| {
///     state += command;
///     state
/// });
/// assert_eq!(plant.update(2.0), 2.0);
/// assert_eq!(plant.update(1.0), 3.0);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(f64) -> f64 + Send,
{
    FromFn { f }
}

impl<F> Updater for FromFn<F>
where
    F: FnMut(f64) -> f64 + Send,
{
    #[inline]
    fn update(&mut self, input: f64) -> f64 {
        (self.f)(input)
    }
}
