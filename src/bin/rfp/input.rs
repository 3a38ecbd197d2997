use crate::num::{Integer, Num};
use crate::pipe::Pipe;
use rustfp::{iter, map, range};

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// 半开整数区间`[begin, end)`
    Range { begin: Integer, end: Integer },
    /// 字面量数值，借用迭代
    Of { values: Vec<Num> },
}

impl Input {
    pub(crate) fn new_range(begin: Integer, end: Integer) -> Input {
        Input::Range { begin, end }
    }

    pub(crate) fn new_of(values: Vec<Num>) -> Input {
        Input::Of { values }
    }

    pub(crate) fn pipe(&self) -> Pipe<'_> {
        match self {
            Input::Range { begin, end } => Pipe::new(range(*begin, *end) | map(Num::Integer)),
            Input::Of { values } => Pipe::new(iter(values) | map(|v: &Num| *v)),
        }
    }
}
