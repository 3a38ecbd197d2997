use crate::option::IntoOption;
use crate::option::Option::{self, None, Some};
use crate::pipe::Stage;
use crate::protocol::Iterator;

pub struct FindStage<P> {
    predicate: P,
}

/// 返回第一个满足谓词的元素，找到后不再从上游拉取。
///
/// 通过`&mut`应用时，原迭代器停在匹配元素之后，可以继续使用。
pub fn find<P>(predicate: P) -> FindStage<P> {
    FindStage { predicate }
}

impl<I, P> Stage<I> for FindStage<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = Option<I::Item>;

    fn apply(mut self, mut upstream: I) -> Option<I::Item> {
        while let Some(item) = upstream.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

pub struct FindMapStage<G> {
    g: G,
}

/// 对元素依次调用`g`，返回其第一个`Some`结果；之后不再调用`g`。
///
/// `g`可以返回本库的[`Option`]，也可以返回标准库的`Option`。
pub fn find_map<G>(g: G) -> FindMapStage<G> {
    FindMapStage { g }
}

impl<I, G, R> Stage<I> for FindMapStage<G>
where
    I: Iterator,
    G: FnMut(I::Item) -> R,
    R: IntoOption,
{
    type Output = Option<R::Value>;

    fn apply(mut self, mut upstream: I) -> Option<R::Value> {
        while let Some(item) = upstream.next() {
            if let Some(value) = (self.g)(item).into_option() {
                return Some(value);
            }
        }
        None
    }
}
