use nom::branch::alt;
use nom::character::complete::{i64 as integer, one_of};
use nom::combinator::{all_consuming, map, not};
use nom::error::{Error, ParseError};
use nom::number::complete::double;
use nom::sequence::terminated;
use nom::{IResult, Parser};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// 整数类型
pub(crate) type Integer = i64;

/// 浮点数类型，可比较，可哈希
pub(crate) type Float = OrderedFloat<f64>;

/// 数值，整数与浮点数是不同的值：`uniq`不会把`1`和`1.0`视为重复。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) enum Num {
    Integer(Integer),
    Float(Float),
}

impl Num {
    pub(crate) fn as_float(self) -> f64 {
        match self {
            Num::Integer(v) => v as f64,
            Num::Float(v) => v.into_inner(),
        }
    }

    /// 按数值比较，整数与浮点数混合时按浮点数比较。
    pub(crate) fn compare(&self, other: &Num) -> Ordering {
        match (self, other) {
            (Num::Integer(l), Num::Integer(r)) => l.cmp(r),
            _ => OrderedFloat(self.as_float()).cmp(&OrderedFloat(other.as_float())),
        }
    }
}

impl From<Integer> for Num {
    fn from(value: Integer) -> Self {
        Num::Integer(value)
    }
}

impl From<f64> for Num {
    fn from(value: f64) -> Self {
        Num::Float(OrderedFloat(value))
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Num::Integer(v) => write!(f, "{v}"),
            // 保留小数点，与整数区分
            Num::Float(v) => write!(f, "{:?}", v.into_inner()),
        }
    }
}

/// 解析一个数值：不带小数点和指数的按整数，否则按浮点数。
pub(crate) fn parse_num<'a, E>(input: &'a str) -> IResult<&'a str, Num, E>
where
    E: ParseError<&'a str>,
{
    alt((map(terminated(integer, not(one_of(".eE"))), Num::Integer), map(double, Num::from))).parse(input)
}

impl FromStr for Num {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match all_consuming(parse_num::<Error<&str>>).parse(s) {
            Ok((_, num)) => Ok(num),
            Err(err) => Err(err.to_string()),
        }
    }
}

/// 四则运算
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Arith {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arith {
    /// 整数运算溢出时回绕；整数除法仅在整除时得到整数，否则得到浮点数，除以零得到无穷或NaN。
    pub(crate) fn apply(self, lhs: Num, rhs: Num) -> Num {
        match (lhs, rhs) {
            (Num::Integer(l), Num::Integer(r)) => match self {
                Arith::Add => Num::Integer(l.wrapping_add(r)),
                Arith::Sub => Num::Integer(l.wrapping_sub(r)),
                Arith::Mul => Num::Integer(l.wrapping_mul(r)),
                Arith::Div => {
                    if r != 0 && l.wrapping_rem(r) == 0 {
                        Num::Integer(l.wrapping_div(r))
                    } else {
                        Num::from(l as f64 / r as f64)
                    }
                }
            },
            _ => {
                let (l, r) = (lhs.as_float(), rhs.as_float());
                Num::from(match self {
                    Arith::Add => l + r,
                    Arith::Sub => l - r,
                    Arith::Mul => l * r,
                    Arith::Div => l / r,
                })
            }
        }
    }
}

impl FromStr for Arith {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("add") {
            Ok(Arith::Add)
        } else if s.eq_ignore_ascii_case("sub") {
            Ok(Arith::Sub)
        } else if s.eq_ignore_ascii_case("mul") {
            Ok(Arith::Mul)
        } else if s.eq_ignore_ascii_case("div") {
            Ok(Arith::Div)
        } else {
            Err("expected one of `add`, `sub`, `mul`, `div`".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Ok(Num::Integer(42)), "42".parse());
        assert_eq!(Ok(Num::Integer(-7)), "-7".parse());
        assert_eq!(Ok(Num::from(1.5)), "1.5".parse());
        assert_eq!(Ok(Num::from(3.0)), "3.".parse());
        assert_eq!(Ok(Num::from(1000.0)), "1e3".parse());
        assert!("".parse::<Num>().is_err());
        assert!("abc".parse::<Num>().is_err());
        assert!("12abc".parse::<Num>().is_err());
        assert!("1.5.2".parse::<Num>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!("3", Num::Integer(3).to_string());
        assert_eq!("3.0", Num::from(3.0).to_string());
        assert_eq!("-0.25", Num::from(-0.25).to_string());
        assert_eq!("inf", Num::from(f64::INFINITY).to_string());
    }

    #[test]
    fn test_compare() {
        assert_eq!(Ordering::Less, Num::Integer(1).compare(&Num::Integer(2)));
        assert_eq!(Ordering::Equal, Num::Integer(2).compare(&Num::from(2.0)));
        assert_eq!(Ordering::Greater, Num::from(2.5).compare(&Num::Integer(2)));
        assert_ne!(Num::Integer(2), Num::from(2.0));
    }

    #[test]
    fn test_integer_arith() {
        assert_eq!(Num::Integer(5), Arith::Add.apply(Num::Integer(2), Num::Integer(3)));
        assert_eq!(Num::Integer(-1), Arith::Sub.apply(Num::Integer(2), Num::Integer(3)));
        assert_eq!(Num::Integer(6), Arith::Mul.apply(Num::Integer(2), Num::Integer(3)));
        assert_eq!(Num::Integer(i64::MIN), Arith::Add.apply(Num::Integer(i64::MAX), Num::Integer(1)));
    }

    #[test]
    fn test_integer_div() {
        assert_eq!(Num::Integer(3), Arith::Div.apply(Num::Integer(6), Num::Integer(2)));
        assert_eq!(Num::from(3.5), Arith::Div.apply(Num::Integer(7), Num::Integer(2)));
        assert_eq!(Num::from(f64::INFINITY), Arith::Div.apply(Num::Integer(1), Num::Integer(0)));
        assert!(Arith::Div.apply(Num::Integer(0), Num::Integer(0)).as_float().is_nan());
        assert_eq!(Num::Integer(i64::MIN), Arith::Div.apply(Num::Integer(i64::MIN), Num::Integer(-1)));
    }

    #[test]
    fn test_mixed_arith() {
        assert_eq!(Num::from(2.5), Arith::Add.apply(Num::Integer(2), Num::from(0.5)));
        assert_eq!(Num::from(1.0), Arith::Mul.apply(Num::from(0.5), Num::Integer(2)));
    }

    #[test]
    fn test_parse_arith() {
        assert_eq!(Ok(Arith::Add), "add".parse());
        assert_eq!(Ok(Arith::Div), "DIV".parse());
        assert!("pow".parse::<Arith>().is_err());
    }
}
