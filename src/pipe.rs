use crate::adaptor::{Filter, Inspect, Map};
use crate::protocol::Boxed;
use crate::source::{FromStd, Iter, Range};
use std::ops::BitOr;

/// 管道中的一段：适配器工厂或终结操作工厂。
///
/// 工厂由`map(f)`、`fold(init, g)`等函数创建，只能使用一次：
/// 适配器的`Output`是新的迭代器，终结操作的`Output`是最终结果。
pub trait Stage<I> {
    type Output;

    fn apply(self, upstream: I) -> Self::Output;
}

/// 为本库的迭代器实现`lhs | stage`，等价于`lhs.pipe(stage)`。
macro_rules! impl_pipe_operator {
    ($(<$($gen:tt),*> $ty:ty $(where [$($bound:tt)+])?;)*) => {
        $(
            impl<$($gen,)* S> BitOr<S> for $ty
            where
                S: Stage<$ty>,
                $($($bound)+)?
            {
                type Output = S::Output;

                #[inline]
                fn bitor(self, stage: S) -> S::Output {
                    stage.apply(self)
                }
            }
        )*
    };
}

impl_pipe_operator! {
    <T> Range<T>;
    <'a, C> Iter<'a, C> where [C: ?Sized + 'a, &'a C: IntoIterator];
    <I> FromStd<I>;
    <I, F> Map<I, F>;
    <I, P> Filter<I, P>;
    <I, F> Inspect<I, F>;
    <'a, T> Boxed<'a, T>;
}
