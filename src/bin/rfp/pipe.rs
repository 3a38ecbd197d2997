use crate::num::Num;
use rustfp::{Boxed, filter, inspect, map};

/// 运行时组装的数值管道，每一段都经由库的`|`连接。
pub(crate) struct Pipe<'a> {
    iter: Boxed<'a, Num>,
}

impl<'a> Pipe<'a> {
    pub(crate) fn new<I>(iter: I) -> Self
    where
        I: rustfp::Iterator<Item = Num> + 'a,
    {
        Pipe { iter: iter.boxed() }
    }

    pub(crate) fn op_map<F>(self, f: F) -> Self
    where
        F: FnMut(Num) -> Num + 'a,
    {
        Pipe::new(self.iter | map(f))
    }

    pub(crate) fn op_filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Num) -> bool + 'a,
    {
        Pipe::new(self.iter | filter(predicate))
    }

    pub(crate) fn op_inspect<F>(self, f: F) -> Self
    where
        F: FnMut(&Num) + 'a,
    {
        Pipe::new(self.iter | inspect(f))
    }

    pub(crate) fn into_boxed(self) -> Boxed<'a, Num> {
        self.iter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfp::{collect, range};

    #[test]
    fn test_ops() {
        let mut seen = Vec::new();
        let collected = Pipe::new(range(0, 6) | map(Num::Integer))
            .op_filter(|v| matches!(v, Num::Integer(i) if i % 2 == 0))
            .op_inspect(|v| seen.push(*v))
            .op_map(|v| match v {
                Num::Integer(i) => Num::Integer(i * 10),
                float => float,
            })
            .into_boxed()
            | collect::<Vec<Num>>();
        assert_eq!(vec![Num::Integer(0), Num::Integer(20), Num::Integer(40)], collected);
        assert_eq!(vec![Num::Integer(0), Num::Integer(2), Num::Integer(4)], seen);
    }
}
