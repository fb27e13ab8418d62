use crate::graph::{cascade::Cascade, node::Updater, through::Through};

pub trait UpdaterExt: Updater + Sized {
    fn through<N: Updater>(self, next: N) -> Through<Self, N> {
        Through::new(self, next)
    }

    /// Box the stage and start a runtime cascade with it.
    fn into_cascade(self) -> Cascade
    where
        Self: 'static,
    {
        Cascade::new().with(self)
    }
}

impl<T: Updater> UpdaterExt for T {}
