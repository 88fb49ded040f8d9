use super::chunk::Chunk;

/// Observer notified once per completed chunk.
///
/// Purely cosmetic: implementations never influence the result, and
/// may be called from any worker thread in any order.
pub trait Progress: Sync {
    fn tick(&self, chunk: &Chunk);
    fn finish(&self) {}
}

/// No-op progress, the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn tick(&self, _: &Chunk) {}
}

/// Adapts any thread-safe closure into a progress observer.
pub struct Callback<F>(pub F);

impl<F> Progress for Callback<F>
where
    F: Fn(&Chunk) + Sync,
{
    fn tick(&self, chunk: &Chunk) {
        (self.0)(chunk)
    }
}

impl Progress for indicatif::ProgressBar {
    fn tick(&self, _: &Chunk) {
        self.inc(1);
    }
    fn finish(&self) {
        indicatif::ProgressBar::finish(self);
    }
}
