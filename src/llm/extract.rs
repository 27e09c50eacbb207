// モデル応答からJSON本体を取り出す

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("JSON Parse Error at line {line} column {column}: {message}")]
pub struct ExtractError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ```json ... ``` を優先し、無ければ言語指定なしのフェンス
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n?(.*?)```").expect("fence pattern is a valid regex")
    })
}

/// Markdownのコードフェンスや前後の説明文を取り除いた本文
pub fn strip_wrapping(text: &str) -> &str {
    let inner = if let Some(start) = text.find("```json") {
        let body = &text[start + "```json".len()..];
        match body.find("```") {
            Some(end) => &body[..end],
            None => text,
        }
    } else {
        fence_pattern()
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .unwrap_or(text)
    };

    let inner = inner.trim();

    // 最初の '{' から最後の '}' までを切り出す
    match (inner.find('{'), inner.rfind('}')) {
        (Some(start), Some(end)) if end > start => &inner[start..=end],
        _ => inner,
    }
}

/// 応答テキストからJSONオブジェクトを抽出・解析する
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    serde_json::from_str(strip_wrapping(text)).map_err(|e| ExtractError {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

/// デバッグ表示用に先頭だけを切り出す（文字境界を保つ）
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_json() {
        let value = extract_json(r#"{"test_info": {}, "questions": []}"#).unwrap();
        assert_eq!(value, json!({"test_info": {}, "questions": []}));
    }

    #[test]
    fn test_json_fence_with_prose() {
        let text = "Here is your test:\n```json\n{\"questions\": [1, 2]}\n```\nGood luck!";
        assert_eq!(extract_json(text).unwrap(), json!({"questions": [1, 2]}));
    }

    #[test]
    fn test_bare_fence() {
        let text = "```\n{\"a\": true}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({"a": true}));
    }

    #[test]
    fn test_surrounding_prose_without_fence() {
        let text = "Sure! {\"a\": {\"b\": 2}} Let me know if you need more.";
        assert_eq!(extract_json(text).unwrap(), json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_malformed_json_reports_error() {
        let err = extract_json("{\"questions\": [1, 2,}").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.to_string().starts_with("JSON Parse Error at line 1"));
    }

    #[test]
    fn test_text_without_json_reports_error() {
        assert!(extract_json("I cannot help with that.").is_err());
        assert!(extract_json("").is_err());
        assert!(extract_json("}{").is_err());
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("abc", 5), "abc");
        assert_eq!(excerpt("√√√√", 2), "√√...");
    }
}
