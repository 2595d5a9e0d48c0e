//! `filter`：补全结果后处理（排序/去重）。
//!
//! 只重排和去重，不丢命中：结果集合始终等于词表里的全部前缀命中。

use std::collections::HashSet;

use crate::model::Completion;

/// Filter：对命中列表做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, completions: Vec<Completion>) -> Vec<Completion>;
}

/// 结果顺序。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// 词表定义顺序
    #[default]
    Definition,
    /// 短的在前，同长按字典序（字节序）
    LengthThenAlpha,
}

impl Filter for SortOrder {
    fn apply(&self, mut completions: Vec<Completion>) -> Vec<Completion> {
        match self {
            SortOrder::Definition => completions.sort_by_key(|c| c.position),
            SortOrder::LengthThenAlpha => completions.sort_by(|a, b| {
                a.text
                    .chars()
                    .count()
                    .cmp(&b.text.chars().count())
                    .then_with(|| a.text.cmp(&b.text))
            }),
        }
        // 自定义 lookup_prefix 可能返回重复文本，保留排序后的第一条
        let mut seen: HashSet<String> = HashSet::new();
        completions.retain(|c| seen.insert(c.text.clone()));
        completions
    }
}
