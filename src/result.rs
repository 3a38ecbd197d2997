use crate::err::VariantErr;
use crate::option::Option::{self, None, Some};

/// 可能失败的值：成功（`Ok`）或失败（`Err`）。
///
/// `Err`携带调用方领域内的错误值而不是字符串消息。库本身从不产生`Err`，
/// 它只作为普通元素在管道中流动。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

use self::Result::{Err, Ok};

impl<T, E> Result<T, E> {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// 取出`Ok`中的值。
    ///
    /// # Panics
    ///
    /// 当前为`Err`时panic。
    #[inline]
    #[track_caller]
    pub fn get_unchecked(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => panic!("{}", VariantErr::ErrValue),
        }
    }

    /// 取出`Err`中的错误。
    ///
    /// # Panics
    ///
    /// 当前为`Ok`时panic。
    #[inline]
    #[track_caller]
    pub fn get_err_unchecked(self) -> E {
        match self {
            Ok(_) => panic!("{}", VariantErr::OkValue),
            Err(err) => err,
        }
    }

    pub fn try_get(self) -> std::result::Result<T, VariantErr> {
        match self {
            Ok(value) => std::result::Result::Ok(value),
            Err(_) => std::result::Result::Err(VariantErr::ErrValue),
        }
    }

    pub fn try_get_err(self) -> std::result::Result<E, VariantErr> {
        match self {
            Ok(_) => std::result::Result::Err(VariantErr::OkValue),
            Err(err) => std::result::Result::Ok(err),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Ok(value) => value,
            Err(err) => f(err),
        }
    }

    /// 变换`Ok`中的值，`Err`原样传递。
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(value) => Ok(f(value)),
            Err(err) => Err(err),
        }
    }

    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(f(err)),
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => f(value),
            Err(err) => Err(err),
        }
    }

    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => f(err),
        }
    }

    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(err) => Some(err),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err),
        }
    }

    pub fn match_with<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(err) => on_err(err),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            std::result::Result::Ok(value) => Ok(value),
            std::result::Result::Err(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => std::result::Result::Ok(value),
            Err(err) => std::result::Result::Err(err),
        }
    }
}
