use thiserror::Error;

/// 访问 [`Option`](crate::Option) 或 [`Result`](crate::Result) 时变体不符。
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum VariantErr {
    #[error("[Option] Expected `Some`, found `None`")]
    NoneValue,

    #[error("[Result] Expected `Ok`, found `Err`")]
    ErrValue,

    #[error("[Result] Expected `Err`, found `Ok`")]
    OkValue,
}
