//! `luasense_core`：纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/编辑器插件/服务端都能复用同一套补全逻辑
//! - **分层清晰**：vocabulary（词表） -> completer（校验 + 前缀匹配） -> filter（排序） -> 输出
//! - **只读**：词表在初始化后冻结，补全是纯函数，可以并发调用
pub mod completer;
pub mod error;
pub mod filter;
pub mod lua;
pub mod model;
pub mod vocabulary;

pub use completer::{Autocompleter, MIN_QUERY_LENGTH};
pub use error::{AutocompleteError, Result};
pub use filter::SortOrder;
pub use model::{Completion, Entry, EntryKind};
pub use vocabulary::{StaticVocabulary, Vocabulary};

/// 对内置 Lua 词表做前缀补全。
///
/// 查询少于 2 个字符时返回 [`AutocompleteError::TooShortRequest`]；
/// 没有匹配项不是错误，返回空列表。
pub fn autocomplete(query: &str) -> Result<Vec<String>> {
    lua::default_completer().autocomplete(query)
}
