use crate::err::RfpErr;
use nom::branch::alt;
use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{cut, map};
use nom::error::context;
use nom::multi::separated_list0;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 单个参数：`"..."`包围的原样保留（可含空白），否则到空白为止。
fn arg(input: &str) -> IResult<&str, String, ParserError<'_>> {
    map(
        alt((
            preceded(char('"'), cut(context("closing quote", terminated(take_until("\""), char('"'))))),
            take_while1(|c: char| !c.is_whitespace() && c != '"'),
        )),
        String::from,
    )
    .parse(input)
}

fn args(input: &str) -> IResult<&str, Vec<String>, ParserError<'_>> {
    delimited(multispace0, separated_list0(multispace1, arg), multispace0).parse(input)
}

/// 把`--eval`的参数拆分为命令行参数序列。
pub(in crate::parse) fn split_token(token: &str) -> Result<Vec<String>, RfpErr> {
    match args(token) {
        Ok(("", args)) => Ok(args),
        Ok((remaining, _)) => {
            Err(RfpErr::UnexpectedRemaining { cmd: "--eval", arg: "token", remaining: remaining.to_owned() })
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(RfpErr::ArgParseErr {
            cmd: "--eval",
            arg: "token",
            arg_value: token.to_owned(),
            error: convert_error(token, err),
        }),
        Err(nom::Err::Incomplete(_)) => Err(RfpErr::ArgParseErr {
            cmd: "--eval",
            arg: "token",
            arg_value: token.to_owned(),
            error: "incomplete input".to_owned(),
        }),
    }
}
