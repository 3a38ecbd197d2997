use crate::option::Option::{self, None, Some};
use crate::pipe::Stage;

/// 拉取式迭代协议。
///
/// 每次调用[`next`](Iterator::next)前进恰好一个元素，返回`None`表示已耗尽。
/// 一旦返回过`None`，后续调用都必须继续返回`None`，各适配器依赖这一点。
///
/// 迭代器只能移动，不能复制：复制会让两个值共享同一游标。迭代器也不保证可以重新开始。
pub trait Iterator {
    type Item;

    fn next(&mut self) -> Option<Self::Item>;

    /// `|`运算符的方法形式，语义完全相同。
    ///
    /// 本库之外定义的迭代器无法实现`|`，使用此方法组装管道。
    #[inline]
    fn pipe<S>(self, stage: S) -> S::Output
    where
        Self: Sized,
        S: Stage<Self>,
    {
        stage.apply(self)
    }

    /// 擦除具体类型，便于在运行时组装管道。
    fn boxed<'a>(self) -> Boxed<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Boxed { iter: Box::new(self) }
    }

    /// 转为标准库迭代器。
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd { iter: self }
    }
}

impl<I> Iterator for &mut I
where
    I: Iterator + ?Sized,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<I> Iterator for Box<I>
where
    I: Iterator + ?Sized,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// 类型擦除后的迭代器。
pub struct Boxed<'a, T> {
    iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<T> Iterator for Boxed<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// 以标准库`Iterator`的形式驱动本库迭代器，见[`Iterator::into_std`]。
pub struct IntoStd<I> {
    iter: I,
}

impl<I> std::iter::Iterator for IntoStd<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> std::option::Option<Self::Item> {
        match self.iter.next() {
            Some(item) => std::option::Option::Some(item),
            None => std::option::Option::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::iter::Iterator as _;

    struct Countdown(u8);

    impl Iterator for Countdown {
        type Item = u8;

        fn next(&mut self) -> Option<u8> {
            if self.0 == 0 {
                None
            } else {
                self.0 -= 1;
                Some(self.0)
            }
        }
    }

    #[test]
    fn test_mut_ref_advances_original() {
        let mut countdown = Countdown(3);
        assert_eq!(Some(2), (&mut countdown).next());
        assert_eq!(Some(1), countdown.next());
    }

    #[test]
    fn test_boxed() {
        let mut boxed = Countdown(2).boxed();
        assert_eq!(Some(1), boxed.next());
        assert_eq!(Some(0), boxed.next());
        assert_eq!(None, boxed.next());
        assert_eq!(None, boxed.next());
    }

    #[test]
    fn test_box_of_dyn() {
        let mut dynamic: Box<dyn Iterator<Item = u8>> = Box::new(Countdown(1));
        assert_eq!(Some(0), dynamic.next());
        assert_eq!(None, dynamic.next());
    }

    #[test]
    fn test_into_std() {
        assert_eq!(vec![4, 3, 2, 1, 0], Countdown(5).into_std().collect::<Vec<_>>());
        assert_eq!(0, Countdown(0).into_std().count());
    }
}
