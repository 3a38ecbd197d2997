use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum RfpErr {
    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Unexpected remaining value `{remaining}` in argument `{arg}` of cmd `{cmd}`")]
    UnexpectedRemaining { cmd: &'static str, arg: &'static str, remaining: String },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Bad Arg] Invalid value `{arg_value}` in argument `{arg}` of cmd `{cmd}`: {reason}")]
    InvalidArg { cmd: &'static str, arg: &'static str, arg_value: String, reason: &'static str },

    #[error("[Output] Write `{item}` to output error: {err}")]
    WriteOutputErr { item: String, err: String },
}

impl Termination for RfpErr {
    fn report(self) -> ExitCode {
        crate::println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl RfpErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    /// 按声明顺序从1开始编号。
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            RfpErr::MissingArg { .. } => 1,
            RfpErr::ArgParseErr { .. } => 2,
            RfpErr::UnexpectedRemaining { .. } => 3,
            RfpErr::UnknownArgs { .. } => 4,
            RfpErr::InvalidArg { .. } => 5,
            RfpErr::WriteOutputErr { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        assert_eq!(
            "[Missing Arg] Missing argument `end` of cmd `range`",
            RfpErr::MissingArg { cmd: "range", arg: "end" }.to_string()
        );
        assert_eq!(
            r#"[Bad Arg] Unknown arguments: ["x", "y"]"#,
            RfpErr::UnknownArgs { args: vec!["x".to_string(), "y".to_string()] }.to_string()
        );
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(1, RfpErr::MissingArg { cmd: "of", arg: "num" }.exit_code());
        assert_eq!(
            5,
            RfpErr::InvalidArg { cmd: "mod", arg: "n", arg_value: "0".to_string(), reason: "must not be zero" }
                .exit_code()
        );
        assert_eq!(6, RfpErr::WriteOutputErr { item: "1".to_string(), err: "closed".to_string() }.exit_code());
    }
}
