use crate::config::Config;
use std::iter::Peekable;

/// 连续消耗开头的配置参数，遇到第一个非配置参数时停止。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = args.peek().and_then(|arg| Config::from_flag(arg)) {
        args.next();
        configs.push(config);
    }
    configs
}
