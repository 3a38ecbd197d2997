use crate::condition::Condition;
use crate::num::{Arith, Num};
use crate::pipe::Pipe;
use crate::println_notice;
use rustc_hash::FxHashSet;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Op {
    /// 对每个元素做四则运算，元素为左操作数。
    Map { arith: Arith, operand: Num },
    /// 保留满足条件的元素。
    Filter(Condition),
    /// 去重，保留首次出现的元素。
    Uniq,
    /// 打印经过的每个元素。
    Peek,
}

impl Op {
    pub(crate) fn new_map(arith: Arith, operand: Num) -> Op {
        Op::Map { arith, operand }
    }

    pub(crate) fn new_filter(condition: Condition) -> Op {
        Op::Filter(condition)
    }

    pub(crate) fn wrap(self, pipe: Pipe<'_>) -> Pipe<'_> {
        match self {
            Op::Map { arith, operand } => pipe.op_map(move |v| arith.apply(v, operand)),
            Op::Filter(condition) => pipe.op_filter(move |v| condition.test(v)),
            Op::Uniq => {
                let mut seen = FxHashSet::default();
                pipe.op_filter(move |v| seen.insert(*v))
            }
            Op::Peek => pipe.op_inspect(|v| println_notice!("{v}")),
        }
    }
}
