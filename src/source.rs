use crate::protocol::Iterator;
use crate::option::Option::{self, None, Some};
use std::iter::{Fuse, Iterator as _};
use std::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

/// 可作为[`range`]端点的整数类型。
pub trait Step: Copy + PartialOrd + private::Sealed {
    /// 后继值，仅在`self`严格小于区间终点时调用，因而不会溢出。
    fn successor(self) -> Self;
}

macro_rules! impl_step {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Step for $ty {
                #[inline]
                fn successor(self) -> Self {
                    self + 1
                }
            }
        )*
    };
}

impl_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// 半开整数区间`[begin, end)`。
#[derive(Debug)]
pub struct Range<T> {
    next: T,
    end: T,
}

/// 依次产出`begin`、`begin + 1`……直到`end`（不含）。`begin >= end`时为空。
pub fn range<T>(begin: T, end: T) -> Range<T>
where
    T: Step,
{
    Range { next: begin, end }
}

impl<T> Iterator for Range<T>
where
    T: Step,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.next < self.end {
            let current = self.next;
            self.next = current.successor();
            Some(current)
        } else {
            None
        }
    }
}

/// 借用外部容器的迭代器，产出容器元素的共享引用。
///
/// 游标本身持有对容器的借用：容器必须比迭代器活得更久，且迭代期间不能被修改，
/// 二者都由借用检查在编译期保证。
pub struct Iter<'a, C>
where
    C: ?Sized + 'a,
    &'a C: IntoIterator,
{
    cursor: Fuse<<&'a C as IntoIterator>::IntoIter>,
}

/// 从容器起始位置开始借用迭代。
pub fn iter<'a, C>(container: &'a C) -> Iter<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Iter { cursor: IntoIterator::into_iter(container).fuse() }
}

impl<'a, C> Iterator for Iter<'a, C>
where
    C: ?Sized + 'a,
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().into()
    }
}

/// 接入标准库迭代器产生的序列，例如`str::split`。
pub struct FromStd<I> {
    cursor: Fuse<I>,
}

pub fn from_std<I>(iterable: I) -> FromStd<I::IntoIter>
where
    I: IntoIterator,
{
    FromStd { cursor: iterable.into_iter().fuse() }
}

impl<I> Iterator for FromStd<I>
where
    I: std::iter::Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().into()
    }
}

/// 尚未支持的迭代方式，没有任何类型实现它。
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be iterated mutably or by value yet",
    note = "`iter_mut` and `into_iter` are reserved; use `iter` to borrow the container"
)]
pub trait Unsupported: private::Sealed {}

/// 预留的可变借用源，任何调用都无法通过编译。
///
/// TODO: 实现`IterMut`，逐个产出`&mut`元素，并在迭代器存活期间独占容器。
///
/// ```compile_fail
/// let mut values = vec![1, 2, 3];
/// let _ = rustfp::iter_mut(&mut values);
/// ```
pub fn iter_mut<'a, C>(container: &'a mut C) -> IterMut<'a, C>
where
    C: ?Sized + Unsupported,
{
    let _ = container;
    IterMut { _container: PhantomData }
}

pub struct IterMut<'a, C: ?Sized> {
    _container: PhantomData<&'a mut C>,
}

/// 预留的消费源，任何调用都无法通过编译。
///
/// TODO: 实现`IntoIter`，取得容器所有权并逐个移出元素。
///
/// ```compile_fail
/// let values = vec![1, 2, 3];
/// let _ = rustfp::into_iter(values);
/// ```
pub fn into_iter<C>(container: C) -> IntoIter<C>
where
    C: Unsupported,
{
    IntoIter { _container: container }
}

pub struct IntoIter<C> {
    _container: C,
}
