use crate::err::RfpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::input::parse_input;
use crate::parse::op::parse_ops;
use crate::parse::output::parse_output;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::FromStr;

mod condition;
mod config;
mod input;
mod op;
mod output;
mod token;

pub(crate) use config::parse_configs;

pub(crate) type Parsed = (Input, Vec<Op>, Output);

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<Parsed, RfpErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RfpErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

/// 把下一个参数按Token模式拆分后解析，其后不能再有参数。
pub(crate) fn parse_eval(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Parsed, RfpErr> {
    match args.next() {
        Some(token) => {
            let tokens = token::split_token(&token)?;
            let remaining = args.collect::<Vec<_>>();
            if !remaining.is_empty() {
                Err(RfpErr::UnknownArgs { args: remaining })?
            }
            parse(tokens.into_iter().peekable())
        }
        None => Err(RfpErr::MissingArg { cmd: "--eval", arg: "token" }),
    }
}

/// 消耗下一个参数并解析为`T`，参数必选。
fn parse_value<T>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<T, RfpErr>
where
    T: FromStr,
    T::Err: Display,
{
    match args.next() {
        Some(value) => value.parse::<T>().map_err(|error| RfpErr::ArgParseErr {
            cmd,
            arg,
            arg_value: value.clone(),
            error: error.to_string(),
        }),
        None => Err(RfpErr::MissingArg { cmd, arg }),
    }
}

/// 下一个参数能被`m`接受时才消耗。
fn consume_if_some<M, U>(args: &mut Peekable<impl Iterator<Item = String>>, m: M) -> Option<U>
where
    M: FnOnce(&String) -> Option<U>,
{
    let option = args.peek().and_then(m);
    if option.is_some() {
        args.next();
    }
    option
}

fn is_cmd(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &str) -> bool {
    args.peek().is_some_and(|value| value.eq_ignore_ascii_case(cmd))
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split_whitespace().map(String::from).peekable()
}
