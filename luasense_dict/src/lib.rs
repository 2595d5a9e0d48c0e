use std::{collections::BTreeMap, fs, io, path::Path};

use luasense_core::{Completion, Entry, EntryKind, Vocabulary};
use thiserror::Error;

/// 词表文件加载错误。
#[derive(Debug, Error)]
pub enum DictError {
    #[error("读取词表失败: {0}")]
    Io(#[from] io::Error),
    #[error("词表第 {line} 行: 未知分类 `{kind}`（可选 keyword/global/library）")]
    UnknownKind { line: usize, kind: String },
    #[error("词表第 {line} 行: 词条不能包含空白字符")]
    InvalidText { line: usize },
}

/// 文件词表（加载一次，之后只读）。
///
/// 格式：
///
/// - `text` 或 `text<TAB>kind`，kind 为 `keyword` / `global` / `library`
/// - kind 省略时按 Lua 命名习惯推断（见 `EntryKind::classify`）
/// - 允许空行与 `#` 开头注释行
/// - 重复词条只保留第一次出现
#[derive(Debug, Clone, Default)]
pub struct WordListVocabulary {
    entries: Vec<Entry>,
    index: BTreeMap<String, usize>, // text -> 定义序号
}

impl WordListVocabulary {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let vocab = Self::from_word_list_str(&s)?;
        tracing::debug!(path = %path.display(), entries = vocab.entries.len(), "loaded word list");
        Ok(vocab)
    }

    pub fn from_word_list_str(s: &str) -> Result<Self, DictError> {
        let mut entries: Vec<Entry> = Vec::new();
        let mut index: BTreeMap<String, usize> = BTreeMap::new();

        for (idx, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut it = line.split('\t');
            let text = it.next().unwrap_or("").trim();
            if text.chars().any(char::is_whitespace) {
                return Err(DictError::InvalidText { line: idx + 1 });
            }
            let kind = match it.next().map(str::trim).filter(|x| !x.is_empty()) {
                Some(k) => EntryKind::parse(k).ok_or_else(|| DictError::UnknownKind {
                    line: idx + 1,
                    kind: k.to_string(),
                })?,
                None => EntryKind::classify(text),
            };

            if index.contains_key(text) {
                tracing::debug!(line = idx + 1, text, "duplicate word list entry dropped");
                continue;
            }
            index.insert(text.to_string(), entries.len());
            entries.push(Entry::new(text, kind));
        }

        Ok(Self { entries, index })
    }
}

impl Vocabulary for WordListVocabulary {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// 按索引做范围扫描，再按定义序号恢复顺序。
    fn lookup_prefix(&self, prefix: &str) -> Vec<Completion> {
        let mut out: Vec<Completion> = Vec::new();
        for (key, &pos) in self.index.range(prefix.to_string()..) {
            if !key.starts_with(prefix) {
                break;
            }
            out.push(Completion::from_entry(&self.entries[pos], pos));
        }
        out.sort_by_key(|c| c.position);
        out
    }

    fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }
}
