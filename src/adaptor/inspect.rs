use crate::protocol::Iterator;
use crate::option::Option::{self, Some};
use crate::pipe::Stage;

/// 把每个元素交给`f`查看后原样产出。
pub struct Inspect<I, F> {
    upstream: I,
    f: F,
}

impl<I, F> Iterator for Inspect<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let next = self.upstream.next();
        if let Some(item) = &next {
            (self.f)(item);
        }
        next
    }
}

pub struct InspectStage<F> {
    f: F,
}

pub fn inspect<F>(f: F) -> InspectStage<F> {
    InspectStage { f }
}

impl<I, F> Stage<I> for InspectStage<F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Output = Inspect<I, F>;

    #[inline]
    fn apply(self, upstream: I) -> Inspect<I, F> {
        Inspect { upstream, f: self.f }
    }
}
