use thiserror::Error;

/// 补全请求的错误。
///
/// 目前只有一种：查询串太短。查不到候选不算错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutocompleteError {
    #[error("autocomplete query '{query}' is too short (minimum {min_length} characters required)")]
    TooShortRequest { query: String, min_length: usize },
}

pub type Result<T> = std::result::Result<T, AutocompleteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_message_names_query_and_minimum() {
        let err = AutocompleteError::TooShortRequest {
            query: "p".to_string(),
            min_length: 2,
        };
        assert_eq!(
            err.to_string(),
            "autocomplete query 'p' is too short (minimum 2 characters required)"
        );
    }
}
