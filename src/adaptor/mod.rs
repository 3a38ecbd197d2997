//! 惰性适配器：包装上游迭代器，只在自身`next`被调用时才从上游拉取，且严格保持上游顺序。

mod filter;
mod inspect;
mod map;

pub use filter::{Filter, FilterStage, filter};
pub use inspect::{Inspect, InspectStage, inspect};
pub use map::{Map, MapStage, map};
