use crate::err::RfpErr;
use crate::num::{Arith, Num};
use crate::output::Output;
use crate::parse::condition::parse_condition;
use crate::parse::{is_cmd, parse_value};
use std::iter::Peekable;

/// 未指定终结操作时逐行输出。
pub(in crate::parse) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RfpErr> {
    if is_cmd(args, "collect") {
        args.next();
        Ok(Output::Collect)
    } else if is_cmd(args, "count") {
        args.next();
        Ok(Output::Count)
    } else if is_cmd(args, "sum") {
        args.next();
        Ok(Output::Sum)
    } else if is_cmd(args, "join") {
        args.next();
        match args.next() {
            Some(separator) => Ok(Output::new_join(separator)),
            None => Err(RfpErr::MissingArg { cmd: "join", arg: "separator" }),
        }
    } else if is_cmd(args, "fold") {
        args.next();
        let init = parse_value::<Num>(args, "fold", "init")?;
        let arith = parse_value::<Arith>(args, "fold", "arith")?;
        Ok(Output::new_fold(init, arith))
    } else if is_cmd(args, "find") {
        args.next();
        Ok(Output::Find(parse_condition(args, "find")?))
    } else {
        Ok(Output::Collect)
    }
}
