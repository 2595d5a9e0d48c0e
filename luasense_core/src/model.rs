use std::fmt;

use crate::lua::LUA_RESERVED_WORDS;

/// 词条分类，只作展示用，不参与匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// 保留字（`if`、`function` ...）
    Keyword,
    /// 全局函数/变量（`print`、`_G` ...）
    Global,
    /// 标准库成员（`string.sub`、`math.pi` ...）
    Library,
}

impl EntryKind {
    /// 按 Lua 的命名习惯推断分类：保留字 -> Keyword，带 `.` -> Library，其余 Global。
    pub fn classify(text: &str) -> Self {
        if LUA_RESERVED_WORDS.contains(&text) {
            EntryKind::Keyword
        } else if text.contains('.') {
            EntryKind::Library
        } else {
            EntryKind::Global
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Keyword => "keyword",
            EntryKind::Global => "global",
            EntryKind::Library => "library",
        }
    }

    /// 解析词表文件里的 kind 列；未知值返回 None。
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "keyword" => Some(EntryKind::Keyword),
            "global" => Some(EntryKind::Global),
            "library" => Some(EntryKind::Library),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 词表中的一个词条。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 词条文本（原样保存，大小写敏感）
    pub text: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(text: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// 用 [`EntryKind::classify`] 推断分类。
    pub fn classified(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let kind = EntryKind::classify(&text);
        Self { text, kind }
    }
}

/// 一次补全命中的词条。
///
/// `position` 是词条在词表中的定义序号，filter 用它恢复定义顺序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub kind: EntryKind,
    pub position: usize,
}

impl Completion {
    pub fn from_entry(entry: &Entry, position: usize) -> Self {
        Self {
            text: entry.text.clone(),
            kind: entry.kind,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_lua_naming() {
        assert_eq!(EntryKind::classify("function"), EntryKind::Keyword);
        assert_eq!(EntryKind::classify("print"), EntryKind::Global);
        assert_eq!(EntryKind::classify("bit32"), EntryKind::Global);
        assert_eq!(EntryKind::classify("string.sub"), EntryKind::Library);
        // 大小写敏感：`End` 不是保留字
        assert_eq!(EntryKind::classify("End"), EntryKind::Global);
    }

    #[test]
    fn parse_accepts_display_form() {
        for kind in [EntryKind::Keyword, EntryKind::Global, EntryKind::Library] {
            assert_eq!(EntryKind::parse(&kind.to_string()), Some(kind));
        }
        assert_eq!(EntryKind::parse("Keyword"), None);
        assert_eq!(EntryKind::parse("builtin"), None);
    }
}
