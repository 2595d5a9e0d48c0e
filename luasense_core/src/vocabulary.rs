use std::collections::HashSet;
use std::sync::Arc;

use crate::model::{Completion, Entry};

/// 词表抽象：core 不关心词表来自常量表/文件/内嵌资源。
///
/// 约定：
/// - 词表在构造后只读，没有任何修改接口
/// - `entries()` 按定义顺序返回，且不含重复文本
/// - `lookup_prefix` 是精确、大小写敏感的前缀匹配，结果按定义顺序
pub trait Vocabulary: Send + Sync {
    /// 全部词条（定义顺序）。
    fn entries(&self) -> &[Entry];

    /// 查询以 `prefix` 开头的词条（默认线性扫描，实现可以换成索引，但结果必须一致）。
    fn lookup_prefix(&self, prefix: &str) -> Vec<Completion> {
        self.entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.text.starts_with(prefix))
            .map(|(i, e)| Completion::from_entry(e, i))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn contains(&self, text: &str) -> bool {
        self.entries().iter().any(|e| e.text == text)
    }
}

impl<V> Vocabulary for &V
where
    V: Vocabulary + ?Sized,
{
    fn entries(&self) -> &[Entry] {
        (**self).entries()
    }

    fn lookup_prefix(&self, prefix: &str) -> Vec<Completion> {
        (**self).lookup_prefix(prefix)
    }
}

impl<V> Vocabulary for Arc<V>
where
    V: Vocabulary + ?Sized,
{
    fn entries(&self) -> &[Entry] {
        (**self).entries()
    }

    fn lookup_prefix(&self, prefix: &str) -> Vec<Completion> {
        (**self).lookup_prefix(prefix)
    }
}

/// 内存词表：构造时去重（保留第一次出现），之后冻结。
#[derive(Debug, Clone, Default)]
pub struct StaticVocabulary {
    entries: Vec<Entry>,
}

impl StaticVocabulary {
    /// 从词条构造；重复文本只保留第一条。
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out: Vec<Entry> = Vec::new();
        let mut dropped: usize = 0;
        for e in entries {
            if seen.insert(e.text.clone()) {
                out.push(e);
            } else {
                dropped += 1;
            }
        }
        tracing::debug!(entries = out.len(), dropped, "built static vocabulary");
        Self { entries: out }
    }

    /// 从纯文本词条构造，分类用 [`crate::EntryKind::classify`] 推断。
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(words.into_iter().map(Entry::classified))
    }
}

impl Vocabulary for StaticVocabulary {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;

    #[test]
    fn duplicates_keep_first_occurrence() {
        let vocab = StaticVocabulary::from_entries([
            Entry::new("print", EntryKind::Global),
            Entry::new("pairs", EntryKind::Global),
            Entry::new("print", EntryKind::Keyword),
        ]);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.entries()[0], Entry::new("print", EntryKind::Global));
    }

    #[test]
    fn lookup_prefix_is_case_sensitive_and_ordered() {
        let vocab = StaticVocabulary::from_words(["print", "Print", "pairs", "private"]);
        let hits: Vec<(String, usize)> = vocab
            .lookup_prefix("pri")
            .into_iter()
            .map(|c| (c.text, c.position))
            .collect();
        assert_eq!(
            hits,
            vec![("print".to_string(), 0), ("private".to_string(), 3)]
        );
    }

    #[test]
    fn shared_handles_delegate() {
        let vocab = Arc::new(StaticVocabulary::from_words(["for", "function"]));
        let by_ref: &StaticVocabulary = &vocab;
        assert_eq!(vocab.lookup_prefix("fo").len(), 1);
        assert_eq!(by_ref.lookup_prefix("f").len(), 2);
        assert!(vocab.contains("function"));
        assert!(!vocab.contains("fun"));
        assert!(!StaticVocabulary::default().contains("for"));
        assert!(StaticVocabulary::default().is_empty());
    }
}
