use crate::error::{AutocompleteError, Result};
use crate::filter::{Filter, SortOrder};
use crate::model::Completion;
use crate::vocabulary::Vocabulary;

/// 查询串最少字符数（按字符计，不按字节）。
pub const MIN_QUERY_LENGTH: usize = 2;

/// 补全器：持有只读词表，负责“校验 -> 前缀匹配 -> 排序”。
///
/// 流水线：
/// - validate（长度校验） -> vocabulary.lookup_prefix（查词） -> filter（排序/去重） -> 输出
///
/// 没有内部可变状态，`V: Sync` 时可以跨线程共享同一个实例。
#[derive(Debug, Clone)]
pub struct Autocompleter<V> {
    /// 词表（常量表、文件词表或其引用）
    vocabulary: V,
    /// 查询串最少字符数
    min_query_length: usize,
    /// 结果顺序
    order: SortOrder,
}

impl<V> Autocompleter<V>
where
    V: Vocabulary,
{
    pub fn new(vocabulary: V) -> Self {
        Self {
            vocabulary,
            min_query_length: MIN_QUERY_LENGTH,
            order: SortOrder::Definition,
        }
    }

    /// 设置查询串最少字符数；0 会被提升到 1。
    pub fn min_query_length(mut self, n: usize) -> Self {
        self.min_query_length = n.max(1);
        self
    }

    /// 设置结果顺序。
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// 只做长度校验，不查词。
    pub fn validate(&self, query: &str) -> Result<()> {
        let len: usize = query.chars().count();
        if len < self.min_query_length {
            tracing::debug!(query, len, min = self.min_query_length, "query too short");
            return Err(AutocompleteError::TooShortRequest {
                query: query.to_owned(),
                min_length: self.min_query_length,
            });
        }
        Ok(())
    }

    /// 带分类与定义序号的补全结果。
    pub fn complete(&self, query: &str) -> Result<Vec<Completion>> {
        self.validate(query)?;
        let hits: Vec<Completion> = self.vocabulary.lookup_prefix(query);
        let out = self.order.apply(hits);
        tracing::debug!(query, matches = out.len(), order = ?self.order, "completed");
        for c in &out {
            tracing::trace!(text = %c.text, kind = %c.kind, position = c.position, "match");
        }
        Ok(out)
    }

    /// 只返回文本的补全结果。
    pub fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        Ok(self
            .complete(query)?
            .into_iter()
            .map(|c| c.text)
            .collect())
    }
}
