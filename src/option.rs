use crate::err::VariantErr;
use crate::result::Result::{self, Err, Ok};

/// 可选值：有值（`Some`）或无值（`None`）。
///
/// 迭代协议用它区分“已无元素”与任意合法元素，查找类终结操作用它表示“未找到”。
/// 变体在构造后不可改变，只能通过 [`is_some`](Option::is_some)/[`is_none`](Option::is_none)
/// 判断，通过取值或变换消费。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Option<T> {
    None,
    Some(T),
}

use self::Option::{None, Some};

impl<T> Option<T> {
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// 取出`Some`中的值。
    ///
    /// # Panics
    ///
    /// 调用方须保证当前为`Some`；为`None`时无论debug还是release构建都会panic。
    #[inline]
    #[track_caller]
    pub fn get_unchecked(self) -> T {
        match self {
            Some(value) => value,
            None => panic!("{}", VariantErr::NoneValue),
        }
    }

    /// [`get_unchecked`](Option::get_unchecked)的检查版本。
    pub fn try_get(self) -> std::result::Result<T, VariantErr> {
        match self {
            Some(value) => std::result::Result::Ok(value),
            None => std::result::Result::Err(VariantErr::NoneValue),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            None => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(value) => value,
            None => f(),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => Some(f(value)),
            None => None,
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    #[inline]
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Some(_) => self,
            None => other,
        }
    }

    #[inline]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Some(_) => self,
            None => f(),
        }
    }

    /// 值满足谓词时保留，否则为`None`。
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Some(value) if predicate(&value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(value) => Ok(value),
            None => Err(err),
        }
    }

    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(f()),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Some(value) => Some(value),
            None => None,
        }
    }

    /// 按变体分派，返回所走分支的结果。
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(option: std::option::Option<T>) -> Self {
        match option {
            std::option::Option::Some(value) => Some(value),
            std::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => std::option::Option::Some(value),
            None => std::option::Option::None,
        }
    }
}

/// 可以转换为[`Option`]的类型，`find_map`的回调可以返回本库或标准库的可选值。
pub trait IntoOption {
    type Value;

    fn into_option(self) -> Option<Self::Value>;
}

impl<T> IntoOption for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T> IntoOption for std::option::Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        self.into()
    }
}
