use crate::err::RfpErr;
use crate::input::Input;
use crate::num::{Integer, Num};
use crate::parse::{consume_if_some, is_cmd, parse_value};
use std::iter::Peekable;

pub(in crate::parse) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RfpErr> {
    if is_cmd(args, "range") {
        parse_range(args)
    } else if is_cmd(args, "of") {
        parse_of(args)
    } else if let Some(source) = args.next() {
        Err(RfpErr::InvalidArg { cmd: "rfp", arg: "source", arg_value: source, reason: "expected `range` or `of`" })
    } else {
        Err(RfpErr::MissingArg { cmd: "rfp", arg: "source" })
    }
}

fn parse_range(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RfpErr> {
    args.next();
    let begin = parse_value::<Integer>(args, "range", "begin")?;
    let end = parse_value::<Integer>(args, "range", "end")?;
    Ok(Input::new_range(begin, end))
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RfpErr> {
    args.next();
    let mut values = Vec::new();
    // 直到遇到非数值参数
    while let Some(value) = consume_if_some(args, |s| s.parse::<Num>().ok()) {
        values.push(value);
    }
    if values.is_empty() { Err(RfpErr::MissingArg { cmd: "of", arg: "num" }) } else { Ok(Input::new_of(values)) }
}
