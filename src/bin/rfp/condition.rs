use crate::num::{Integer, Num};
use std::cmp::Ordering;

/// 条件
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, value: &Num) -> bool {
        match self {
            Condition::Yes(select) => select.select(value),
            Condition::No(select) => !select.select(value),
        }
    }
}

/// 选择
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Select {
    /// [!]odd
    ///     选择奇数，带小数部分的浮点数不是奇数。
    Odd,
    /// [!]even
    ///     选择偶数，带小数部分的浮点数不是偶数。
    Even,
    /// [!]mod <n>
    ///     选择能被`n`整除的数，`n`为非零整数。
    Mod(Integer),
    /// [!]eq|ne|lt|le|gt|ge <num>
    ///     按数值与`num`比较。
    Cmp(Cmp, Num),
}

impl Select {
    fn select(&self, value: &Num) -> bool {
        match (self, value) {
            (Select::Odd, Num::Integer(v)) => v % 2 != 0,
            (Select::Odd, Num::Float(v)) => v.into_inner().fract() == 0.0 && v.into_inner() % 2.0 != 0.0,
            (Select::Even, Num::Integer(v)) => v % 2 == 0,
            (Select::Even, Num::Float(v)) => v.into_inner() % 2.0 == 0.0,
            (Select::Mod(n), Num::Integer(v)) => v.wrapping_rem(*n) == 0,
            (Select::Mod(n), Num::Float(v)) => v.into_inner() % (*n as f64) == 0.0,
            (Select::Cmp(cmp, rhs), _) => cmp.test(value.compare(rhs)),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Cmp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Cmp {
    pub(crate) fn from_cmd(cmd: &str) -> Option<Cmp> {
        match cmd.to_ascii_lowercase().as_str() {
            "eq" => Some(Cmp::Eq),
            "ne" => Some(Cmp::Ne),
            "lt" => Some(Cmp::Lt),
            "le" => Some(Cmp::Le),
            "gt" => Some(Cmp::Gt),
            "ge" => Some(Cmp::Ge),
            _ => None,
        }
    }

    fn test(self, ordering: Ordering) -> bool {
        match self {
            Cmp::Eq => ordering.is_eq(),
            Cmp::Ne => ordering.is_ne(),
            Cmp::Lt => ordering.is_lt(),
            Cmp::Le => ordering.is_le(),
            Cmp::Gt => ordering.is_gt(),
            Cmp::Ge => ordering.is_ge(),
        }
    }
}
