use crate::err::RfpErr;
use crate::num::{Arith, Num};
use crate::op::Op;
use crate::parse::condition::parse_condition;
use crate::parse::{is_cmd, parse_value};
use std::iter::Peekable;

pub(in crate::parse) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, RfpErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RfpErr> {
    if is_cmd(args, "map") {
        parse_map(args)
    } else if is_cmd(args, "filter") {
        parse_filter(args)
    } else if is_cmd(args, "uniq") {
        args.next();
        Ok(Some(Op::Uniq))
    } else if is_cmd(args, "peek") {
        args.next();
        Ok(Some(Op::Peek))
    } else {
        Ok(None)
    }
}

fn parse_map(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RfpErr> {
    args.next();
    let arith = parse_value::<Arith>(args, "map", "arith")?;
    let operand = parse_value::<Num>(args, "map", "operand")?;
    Ok(Some(Op::new_map(arith, operand)))
}

fn parse_filter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RfpErr> {
    args.next();
    Ok(Some(Op::new_filter(parse_condition(args, "filter")?)))
}
