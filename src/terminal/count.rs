use crate::option::Option::Some;
use crate::pipe::Stage;
use crate::protocol::Iterator;

pub struct CountStage;

/// 统计元素数量。
pub fn count() -> CountStage {
    CountStage
}

impl<I> Stage<I> for CountStage
where
    I: Iterator,
{
    type Output = usize;

    fn apply(self, mut upstream: I) -> usize {
        let mut count = 0;
        while let Some(_) = upstream.next() {
            count += 1;
        }
        count
    }
}
