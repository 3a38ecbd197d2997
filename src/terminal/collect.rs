use crate::option::Option::Some;
use crate::pipe::Stage;
use crate::protocol::Iterator;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

/// 可以由迭代器构造的容器，[`collect`]据此物化管道。
pub trait FromIter<T>: Sized {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>;
}

fn drain_into<I, F>(mut iter: I, mut push: F)
where
    I: Iterator,
    F: FnMut(I::Item),
{
    while let Some(item) = iter.next() {
        push(item);
    }
}

impl<T> FromIter<T> for Vec<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut vec = Vec::new();
        drain_into(iter, |item| vec.push(item));
        vec
    }
}

impl<T> FromIter<T> for Box<[T]> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        <Vec<T> as FromIter<T>>::from_iter(iter).into_boxed_slice()
    }
}

impl<T> FromIter<T> for VecDeque<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut deque = VecDeque::new();
        drain_into(iter, |item| deque.push_back(item));
        deque
    }
}

impl<T> FromIter<T> for LinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut list = LinkedList::new();
        drain_into(iter, |item| list.push_back(item));
        list
    }
}

impl<T> FromIter<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut heap = BinaryHeap::new();
        drain_into(iter, |item| heap.push(item));
        heap
    }
}

impl<T, S> FromIter<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut set = HashSet::default();
        drain_into(iter, |item| {
            set.insert(item);
        });
        set
    }
}

impl<T> FromIter<T> for BTreeSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut set = BTreeSet::new();
        drain_into(iter, |item| {
            set.insert(item);
        });
        set
    }
}

impl<K, V, S> FromIter<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = (K, V)>,
    {
        let mut map = HashMap::default();
        drain_into(iter, |(k, v)| {
            map.insert(k, v);
        });
        map
    }
}

impl<K, V> FromIter<(K, V)> for BTreeMap<K, V>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = (K, V)>,
    {
        let mut map = BTreeMap::new();
        drain_into(iter, |(k, v)| {
            map.insert(k, v);
        });
        map
    }
}

impl FromIter<char> for String {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = char>,
    {
        let mut string = String::new();
        drain_into(iter, |c| string.push(c));
        string
    }
}

impl<'a> FromIter<&'a char> for String {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a char>,
    {
        let mut string = String::new();
        drain_into(iter, |c| string.push(*c));
        string
    }
}

impl<'a> FromIter<&'a str> for String {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let mut string = String::new();
        drain_into(iter, |s| string.push_str(s));
        string
    }
}

impl FromIter<String> for String {
    fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut string = String::new();
        drain_into(iter, |s| string.push_str(&s));
        string
    }
}

pub struct CollectStage<C> {
    _target: PhantomData<fn() -> C>,
}

/// 把全部元素按顺序物化到容器`C`中，只有这里会按元素数量分配内存。
pub fn collect<C>() -> CollectStage<C> {
    CollectStage { _target: PhantomData }
}

impl<I, C> Stage<I> for CollectStage<C>
where
    I: Iterator,
    C: FromIter<I::Item>,
{
    type Output = C;

    #[inline]
    fn apply(self, upstream: I) -> C {
        C::from_iter(upstream)
    }
}
