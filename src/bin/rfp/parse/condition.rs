use crate::condition::{Cmp, Condition, Select};
use crate::err::RfpErr;
use crate::num::{Integer, Num};
use crate::parse::parse_value;
use std::iter::Peekable;

/// 解析`[!]odd`、`[!]even`、`[!]mod <n>`、`[!]eq|ne|lt|le|gt|ge <num>`。
pub(in crate::parse) fn parse_condition(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str,
) -> Result<Condition, RfpErr> {
    let Some(select) = args.next() else {
        return Err(RfpErr::MissingArg { cmd, arg: "condition" });
    };
    let (not, name) = match select.strip_prefix('!') {
        Some(name) => (true, name),
        None => (false, select.as_str()),
    };
    let select = if name.eq_ignore_ascii_case("odd") {
        Select::Odd
    } else if name.eq_ignore_ascii_case("even") {
        Select::Even
    } else if name.eq_ignore_ascii_case("mod") {
        let n = parse_value::<Integer>(args, "mod", "n")?;
        if n == 0 {
            Err(RfpErr::InvalidArg { cmd: "mod", arg: "n", arg_value: n.to_string(), reason: "must not be zero" })?
        }
        Select::Mod(n)
    } else if let Some(cmp) = Cmp::from_cmd(name) {
        Select::Cmp(cmp, parse_value::<Num>(args, cmd, "num")?)
    } else {
        return Err(RfpErr::InvalidArg {
            cmd,
            arg: "condition",
            arg_value: select.clone(),
            reason: "expected one of `odd`, `even`, `mod`, `eq`, `ne`, `lt`, `le`, `gt`, `ge`",
        });
    };
    Ok(Condition::new(select, not))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::build_args;

    fn parse(args_line: &'static str) -> Result<Condition, RfpErr> {
        parse_condition(&mut build_args(args_line), "filter")
    }

    #[test]
    fn test_parse_condition() {
        assert_eq!(Ok(Condition::new(Select::Odd, false)), parse("odd"));
        assert_eq!(Ok(Condition::new(Select::Even, true)), parse("!even"));
        assert_eq!(Ok(Condition::new(Select::Mod(11), false)), parse("mod 11"));
        assert_eq!(Ok(Condition::new(Select::Mod(-3), true)), parse("!MOD -3"));
        assert_eq!(Ok(Condition::new(Select::Cmp(Cmp::Lt, Num::from(2.5)), false)), parse("lt 2.5"));
        assert_eq!(Ok(Condition::new(Select::Cmp(Cmp::Ne, Num::Integer(0)), true)), parse("!ne 0"));
    }

    #[test]
    fn test_parse_condition_err() {
        assert_eq!(Err(RfpErr::MissingArg { cmd: "filter", arg: "condition" }), parse(""));
        assert_eq!(
            Err(RfpErr::InvalidArg {
                cmd: "mod",
                arg: "n",
                arg_value: "0".to_string(),
                reason: "must not be zero"
            }),
            parse("mod 0")
        );
        assert!(matches!(parse("mod 1.5"), Err(RfpErr::ArgParseErr { cmd: "mod", .. })));
        assert_eq!(Err(RfpErr::MissingArg { cmd: "filter", arg: "num" }), parse("gt"));
        assert!(matches!(parse("prime"), Err(RfpErr::InvalidArg { arg: "condition", .. })));
    }
}
