use crate::protocol::Iterator;
use crate::option::Option;
use crate::pipe::Stage;

/// 对每个元素调用`f`，产出`f`的返回值。
pub struct Map<I, F> {
    upstream: I,
    f: F,
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.upstream.next().map(&mut self.f)
    }
}

pub struct MapStage<F> {
    f: F,
}

/// 变换适配器：`f`对每个产出的元素按顺序恰好调用一次，产出值归管道所有。
pub fn map<F>(f: F) -> MapStage<F> {
    MapStage { f }
}

impl<I, F, U> Stage<I> for MapStage<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Output = Map<I, F>;

    #[inline]
    fn apply(self, upstream: I) -> Map<I, F> {
        Map { upstream, f: self.f }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::Option::{None, Some};
    use crate::{iter, range};
    use std::cell::Cell;

    #[test]
    fn test_map_range() {
        let mut it = range(0, 3) | map(|v: i32| v * 10);
        assert_eq!(Some(0), it.next());
        assert_eq!(Some(10), it.next());
        assert_eq!(Some(20), it.next());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn test_map_produces_owned_values() {
        let words = vec!["a", "bc"];
        let mut it = iter(&words) | map(|w: &&str| w.to_uppercase());
        assert_eq!(Some("A".to_string()), it.next());
        assert_eq!(Some("BC".to_string()), it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mut it = range(0, 5) | map(|v: i32| {
            calls.set(calls.get() + 1);
            v
        });
        assert_eq!(0, calls.get());
        it.next();
        it.next();
        assert_eq!(2, calls.get());
    }

    #[test]
    fn test_map_change_type() {
        let mut it = range(1u8, 2) | map(|v: u8| v as f64 + 0.5);
        assert_eq!(Some(1.5), it.next());
    }
}
