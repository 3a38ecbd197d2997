//! 终结操作：驱动管道直到耗尽，或在得到结果时提前停止拉取。

mod collect;
mod count;
mod find;
mod fold;
mod for_each;
mod join;

pub use collect::{CollectStage, FromIter, collect};
pub use count::{CountStage, count};
pub use find::{FindMapStage, FindStage, find, find_map};
pub use fold::{FoldStage, fold};
pub use for_each::{ForEachStage, for_each};
pub use join::{JoinStage, join};
