use crate::option::Option::Some;
use crate::pipe::Stage;
use crate::protocol::Iterator;

pub struct FoldStage<A, G> {
    init: A,
    g: G,
}

/// 左折叠：从`init`开始，按顺序用每个元素更新累加值，上游耗尽后返回。
///
/// 累加值在每一步被移动而不是复制，空管道直接返回`init`。
pub fn fold<A, G>(init: A, g: G) -> FoldStage<A, G> {
    FoldStage { init, g }
}

impl<I, A, G> Stage<I> for FoldStage<A, G>
where
    I: Iterator,
    G: FnMut(A, I::Item) -> A,
{
    type Output = A;

    fn apply(self, mut upstream: I) -> A {
        let FoldStage { init: mut acc, mut g } = self;
        while let Some(item) = upstream.next() {
            acc = g(acc, item);
        }
        acc
    }
}
