use crate::option::Option::Some;
use crate::pipe::Stage;
use crate::protocol::Iterator;

pub struct ForEachStage<F> {
    f: F,
}

/// 按迭代顺序对每个元素调用`f`，直到上游耗尽。
pub fn for_each<F>(f: F) -> ForEachStage<F> {
    ForEachStage { f }
}

impl<I, F> Stage<I> for ForEachStage<F>
where
    I: Iterator,
    F: FnMut(I::Item),
{
    type Output = ();

    fn apply(mut self, mut upstream: I) {
        while let Some(item) = upstream.next() {
            (self.f)(item);
        }
    }
}
