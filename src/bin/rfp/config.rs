/// 位于所有命令之前的全局配置。
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// `-h`
    Help,
    /// `-V`
    Version,
    /// `-v`，执行前输出解析出的管道
    Verbose,
    /// `-d`，只解析不执行
    DryRun,
    /// `--eval <token>`
    Eval,
}

impl Config {
    pub(crate) fn from_flag(flag: &str) -> Option<Config> {
        Some(match flag {
            "-h" => Config::Help,
            "-V" => Config::Version,
            "-v" => Config::Verbose,
            "-d" => Config::DryRun,
            "--eval" => Config::Eval,
            _ => return None,
        })
    }
}
