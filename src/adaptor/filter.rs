use crate::protocol::Iterator;
use crate::option::Option::{self, None, Some};
use crate::pipe::Stage;

/// 只产出满足谓词的元素，元素类型（包括引用与否）与上游相同。
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            match self.upstream.next() {
                Some(item) => {
                    if (self.predicate)(&item) {
                        return Some(item);
                    }
                }
                None => return None,
            }
        }
    }
}

pub struct FilterStage<P> {
    predicate: P,
}

/// 过滤适配器：谓词只借用元素，不消费元素。
pub fn filter<P>(predicate: P) -> FilterStage<P> {
    FilterStage { predicate }
}

impl<I, P> Stage<I> for FilterStage<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = Filter<I, P>;

    #[inline]
    fn apply(self, upstream: I) -> Filter<I, P> {
        Filter { upstream, predicate: self.predicate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iter, range};
    use std::cell::Cell;

    #[test]
    fn test_filter_range() {
        let mut it = range(0, 10) | filter(|v: &i32| v % 3 == 0);
        assert_eq!(Some(0), it.next());
        assert_eq!(Some(3), it.next());
        assert_eq!(Some(6), it.next());
        assert_eq!(Some(9), it.next());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn test_filter_keeps_references() {
        let values = vec![5, 6, 7];
        let mut it = iter(&values) | filter(|v: &&i32| **v != 6);
        let first: &i32 = it.next().get_unchecked();
        assert!(std::ptr::eq(first, &values[0]));
        assert_eq!(Some(&7), it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn test_filter_none_match() {
        let mut it = range(0, 100) | filter(|_: &i32| false);
        assert_eq!(None, it.next());
    }

    #[test]
    fn test_filter_pulls_only_on_demand() {
        let pulled = Cell::new(0);
        let mut it = range(0, 10)
            | crate::inspect(|_: &i32| pulled.set(pulled.get() + 1))
            | filter(|v: &i32| v % 2 == 1);
        assert_eq!(0, pulled.get());
        assert_eq!(Some(1), it.next());
        assert_eq!(2, pulled.get());
        assert_eq!(Some(3), it.next());
        assert_eq!(4, pulled.get());
    }
}
