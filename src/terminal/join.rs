use crate::pipe::Stage;
use crate::protocol::Iterator;
use itertools::Itertools;
use std::fmt::Display;

pub struct JoinStage<'s> {
    separator: &'s str,
}

/// 以`Display`格式化每个元素，相邻元素之间插入`separator`。
pub fn join(separator: &str) -> JoinStage<'_> {
    JoinStage { separator }
}

impl<I> Stage<I> for JoinStage<'_>
where
    I: Iterator,
    I::Item: Display,
{
    type Output = String;

    fn apply(self, upstream: I) -> String {
        upstream.into_std().join(self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iter, map, range};

    #[test]
    fn test_join() {
        assert_eq!("1, 2, 3", range(1, 4) | join(", "));
        assert_eq!("", range(1, 1) | join(", "));
        assert_eq!("7", range(7, 8) | join(", "));
    }

    #[test]
    fn test_join_references_and_mapped() {
        let words = vec!["a", "b"];
        assert_eq!("a-b", iter(&words) | join("-"));
        assert_eq!("0.5 1.5", range(0, 2) | map(|v: i32| v as f64 + 0.5) | join(" "));
    }
}
