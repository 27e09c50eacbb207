// Anthropic Messages API のリクエスト・レスポンス定義

use serde::{Deserialize, Serialize};

/// チャットメッセージ
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// メッセージの役割（"user" / "assistant"）
    pub role: String,
    /// メッセージの内容
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Messages API へのリクエストボディ
#[derive(Clone, Debug, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

/// レスポンス中のコンテンツブロック
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// トークン使用量
#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

/// Messages API の成功レスポンス
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Usage,
}

impl MessagesResponse {
    /// 最初のテキストブロック
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .filter(|block| block.block_type == "text")
            .find_map(|block| block.text.as_deref())
    }
}

/// エラーレスポンス {"error": {"type": ..., "message": ...}}
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = MessagesRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 4000,
            messages: vec![ChatMessage::user("Create a test")],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 4000,
                "messages": [{"role": "user", "content": "Create a test"}]
            })
        );
    }

    #[test]
    fn test_first_text_skips_non_text_blocks() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "content": [
                {"type": "thinking"},
                {"type": "text", "text": "{\"a\": 1}"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("{\"a\": 1}"));
        assert_eq!(response.usage.output_tokens, 5);
    }

    #[test]
    fn test_empty_content_has_no_text() {
        let response: MessagesResponse = serde_json::from_value(json!({"content": []})).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
