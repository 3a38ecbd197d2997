//! 拉取式迭代管道。
//!
//! 源（[`range`]、[`iter`]）经零个或多个惰性适配器（[`map`]、[`filter`]）流向一个终结操作
//! （[`for_each`]、[`fold`]、[`find`]、[`find_map`]、[`collect`]……），用`|`从左到右串联：
//!
//! ```
//! use rustfp::{collect, filter, fold, iter, map, range};
//!
//! let evens = range(0, 10) | filter(|v: &i32| v % 2 == 0) | collect::<Vec<i32>>();
//! assert_eq!(vec![0, 2, 4, 6, 8], evens);
//!
//! let total = iter(&evens) | map(|v: &i32| v * 10) | fold(0, |acc: i32, v: i32| acc + v);
//! assert_eq!(200, total);
//! ```
//!
//! 工厂函数在看到上游之前就已构造，闭包参数需要写明类型；
//! 接收引用的闭包写成`|v: &T|`，使其对任意生命周期成立。
//!
//! 本库之外的迭代器以及语句位置的管道使用等价的[`Iterator::pipe`]。

pub mod adaptor;
pub mod err;
pub mod option;
pub mod pipe;
pub mod protocol;
pub mod result;
pub mod source;
pub mod terminal;

pub use adaptor::{filter, inspect, map};
pub use err::VariantErr;
pub use option::Option::{None, Some};
pub use option::{IntoOption, Option};
pub use pipe::Stage;
pub use protocol::{Boxed, Iterator};
pub use result::Result;
pub use result::Result::{Err, Ok};
pub use source::{from_std, into_iter, iter, iter_mut, range};
pub use terminal::{FromIter, collect, count, find, find_map, fold, for_each, join};
