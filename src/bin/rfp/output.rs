use crate::condition::Condition;
use crate::err::RfpErr;
use crate::num::{Arith, Num};
use crate::pipe::Pipe;
use rustfp::{count, find, find_map, fold, join};
use std::fmt::Display;
use std::io::Write;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Output {
    /// 逐行输出每个元素
    Collect,
    /// 输出元素数量
    Count,
    /// 输出所有元素之和，空管道为`0`
    Sum,
    /// 以分隔符连接所有元素后输出
    Join { separator: String },
    /// 以初始值为左操作数依次累计
    Fold { init: Num, arith: Arith },
    /// 输出第一个满足条件的元素，没有则不输出
    Find(Condition),
}

impl Output {
    pub(crate) fn new_join(separator: String) -> Output {
        Output::Join { separator }
    }

    pub(crate) fn new_fold(init: Num, arith: Arith) -> Output {
        Output::Fold { init, arith }
    }

    pub(crate) fn handle(self, pipe: Pipe<'_>, out: &mut impl Write) -> Result<(), RfpErr> {
        let iter = pipe.into_boxed();
        match self {
            Output::Collect => {
                // 第一次写入失败即停止拉取
                match iter | find_map(|item: Num| writeln!(out, "{item}").err().map(|err| (item, err))) {
                    rustfp::Some((item, err)) => Err(write_err(item, err)),
                    rustfp::None => Ok(()),
                }
            }
            Output::Count => write_line(out, iter | count()),
            Output::Sum => write_line(out, iter | fold(Num::Integer(0), |acc: Num, v: Num| Arith::Add.apply(acc, v))),
            Output::Join { separator } => write_line(out, iter | join(&separator)),
            Output::Fold { init, arith } => write_line(out, iter | fold(init, |acc: Num, v: Num| arith.apply(acc, v))),
            Output::Find(condition) => match iter | find(|v: &Num| condition.test(v)) {
                rustfp::Some(found) => write_line(out, found),
                rustfp::None => Ok(()),
            },
        }
    }
}

pub(crate) fn write_line(out: &mut impl Write, item: impl Display) -> Result<(), RfpErr> {
    writeln!(out, "{item}").map_err(|err| write_err(item, err))
}

fn write_err(item: impl Display, err: std::io::Error) -> RfpErr {
    RfpErr::WriteOutputErr { item: item.to_string(), err: err.to_string() }
}
