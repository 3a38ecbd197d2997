use crate::config::Config;
use crate::err::RfpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::output::write_line;
use itertools::Itertools;
use std::io::Write;

mod condition;
mod config;
mod err;
mod input;
mod num;
mod op;
mod output;
mod parse;
mod pipe;
mod print;

const HELP: &str = "\
Usage: rfp [-h] [-V] [-v] [-d] [--eval <token>] <source> [<stage>...] [<terminal>]

Options:
    -h              打印帮助并退出
    -V              打印版本并退出
    -v              执行前打印解析出的管道
    -d              仅解析，不执行
    --eval <token>  把下一个参数按空白拆分后解析，支持`\"...\"`引用

Source:
    range <begin> <end>         整数半开区间`[begin, end)`
    of <num> [<num>...]         字面量数值

Stage:
    map add|sub|mul|div <num>   四则运算，元素为左操作数
    filter [!]<cond>            保留满足条件的元素
    uniq                        去重，保留首次出现的元素
    peek                        向标准错误打印经过的元素

Terminal:
    collect                     逐行输出每个元素（默认）
    count                       输出元素数量
    sum                         输出元素之和
    join <sep>                  以分隔符连接后输出
    fold <init> add|sub|mul|div 以初始值为左操作数依次累计
    find [!]<cond>              输出第一个满足条件的元素

Cond:
    odd | even | mod <n> | eq|ne|lt|le|gt|ge <num>";

/// `-v`输出的管道结构，每个部分一段。
fn describe(input: &Input, ops: &[Op], output: &Output) -> String {
    let ops = if ops.is_empty() {
        "    (none)".to_owned()
    } else {
        ops.iter().map(|op| format!("    {:?}", op)).join("\n")
    };
    format!("Input:\n    {:?}\nOp:\n{}\nOutput:\n    {:?}", input, ops, output)
}

fn main() {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(std::env::args().skip(1), &mut stdout) {
        e.termination();
    }
}

fn run(args: impl Iterator<Item = String>, out: &mut impl Write) -> Result<(), RfpErr> {
    let mut args = args.peekable();
    let configs = parse::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        return write_line(out, HELP);
    }
    if configs.contains(&Config::Version) {
        return write_line(out, format!("rfp {}", env!("CARGO_PKG_VERSION")));
    }
    let (input, ops, output) =
        if configs.contains(&Config::Eval) { parse::parse_eval(&mut args)? } else { parse::parse(args)? };
    if configs.contains(&Config::Verbose) {
        write_line(out, describe(&input, &ops, &output))?;
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let mut pipe = input.pipe();
    for op in ops {
        pipe = op.wrap(pipe);
    }
    output.handle(pipe, out)
}
