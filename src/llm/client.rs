// Anthropic Messages API クライアント

use super::GenerationError;
use super::extract::excerpt;
use super::schemas::{ChatMessage, ErrorResponse, MessagesRequest, MessagesResponse};
use crate::config::{ApiConfig, KeyStatus};
use log::{debug, info, warn};
use reqwest::{StatusCode, header};
use std::time::Duration;

// 接続確認で消費するトークン数
const PROBE_MAX_TOKENS: u32 = 10;

pub struct AnthropicClient {
    client: reqwest::Client,
    config: ApiConfig,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(config: ApiConfig) -> Result<Self, GenerationError> {
        let status = config.key_status();
        let api_key = match (&config.api_key, status.is_usable()) {
            (Some(key), true) => key.clone(),
            _ => return Err(GenerationError::MissingApiKey),
        };

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GenerationError::Http)?;

        Ok(AnthropicClient {
            client,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(
        &self,
        request: &MessagesRequest,
        timeout: Duration,
    ) -> Result<MessagesResponse, GenerationError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.anthropic_version)
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        info!("📥 レスポンス受信: ステータス {}", status);

        let body = response.text().await.map_err(map_transport_error)?;
        if status != StatusCode::OK {
            return Err(map_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!("レスポンス解析失敗: {}", e);
            GenerationError::InvalidEnvelope
        })
    }

    /// プロンプトを1通送り、最初のテキストブロックを返す
    pub async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![ChatMessage::user(prompt)],
        };

        info!("📡 リクエスト送信中: モデル {}", request.model);
        let response = self.send(&request, self.config.timeout).await?;

        debug!(
            "メッセージID: {} / トークン使用量: 入力 {} / 出力 {}",
            response.id.as_deref().unwrap_or("-"),
            response.usage.input_tokens,
            response.usage.output_tokens
        );

        response
            .first_text()
            .map(str::to_string)
            .ok_or(GenerationError::InvalidEnvelope)
    }

    /// 最小リクエストで接続とキーを確認する
    pub async fn check_connection(&self) -> Result<String, GenerationError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: PROBE_MAX_TOKENS,
            messages: vec![ChatMessage::user("Test")],
        };

        self.send(&request, self.config.check_timeout).await?;
        Ok("API connection successful".to_string())
    }
}

/// キー状態をチェックしてからクライアントを作る
pub fn client_for(config: ApiConfig) -> Result<AnthropicClient, GenerationError> {
    if config.key_status() == KeyStatus::UnexpectedFormat {
        warn!("⚠️ APIキーの形式が想定と異なります (sk-ant-api03-...)");
    }
    AnthropicClient::new(config)
}

fn map_transport_error(error: reqwest::Error) -> GenerationError {
    if error.is_timeout() {
        GenerationError::Timeout
    } else if error.is_connect() {
        GenerationError::Connection(error.to_string())
    } else {
        GenerationError::Http(error)
    }
}

/// HTTPステータスとボディからエラーを決定する
pub fn map_status(status: StatusCode, body: &str) -> GenerationError {
    let provider_error = serde_json::from_str::<ErrorResponse>(body).ok();
    if let Some(envelope) = &provider_error {
        debug!(
            "APIエラー種別: {}",
            envelope.error.error_type.as_deref().unwrap_or("unknown")
        );
    }
    let provider_message = provider_error.and_then(|envelope| envelope.error.message);

    match status {
        StatusCode::UNAUTHORIZED => GenerationError::AuthenticationFailed,
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
        StatusCode::BAD_REQUEST => GenerationError::BadRequest(
            provider_message.unwrap_or_else(|| "Bad request".to_string()),
        ),
        _ => GenerationError::Api {
            status: status.as_u16(),
            message: provider_message.unwrap_or_else(|| excerpt(body, 200)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiArgs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const TEST_KEY: &str = "sk-ant-REDACTED";

    fn config(url: String, timeout: Duration) -> ApiConfig {
        let mut config = ApiConfig::from(ApiArgs {
            api_key: Some(TEST_KEY.to_string()),
            api_url: url,
            model: "claude-3-5-sonnet-20241022".to_string(),
            anthropic_version: "2023-06-01".to_string(),
            max_tokens: 4000,
            timeout_secs: 60,
        });
        config.timeout = timeout;
        config.check_timeout = timeout;
        config
    }

    // 1回だけ応答するHTTPサーバー。受信したリクエストを返す
    async fn one_shot_server(
        status_line: &'static str,
        body: String,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/messages", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (url, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buffer).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buffer.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buffer).to_string()
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let mut config = config("http://localhost".to_string(), Duration::from_secs(1));
        config.api_key = None;
        assert!(matches!(
            AnthropicClient::new(config),
            Err(GenerationError::MissingApiKey)
        ));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, ""),
            GenerationError::AuthenticationFailed
        ));
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, "{}"),
            GenerationError::RateLimited
        ));

        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens: too large"}}"#;
        match map_status(StatusCode::BAD_REQUEST, body) {
            GenerationError::BadRequest(message) => assert_eq!(message, "max_tokens: too large"),
            other => panic!("unexpected error: {other:?}"),
        }

        match map_status(StatusCode::BAD_GATEWAY, "<html>upstream down</html>") {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>upstream down</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_sends_headers_and_returns_text() {
        let body = serde_json::json!({
            "id": "msg_01",
            "content": [{"type": "text", "text": "{\"ok\": true}"}],
            "usage": {"input_tokens": 12, "output_tokens": 4}
        })
        .to_string();
        let (url, server) = one_shot_server("200 OK", body).await;

        let client = AnthropicClient::new(config(url, Duration::from_secs(5))).unwrap();
        let text = client.complete("Create a test").await.unwrap();
        assert_eq!(text, "{\"ok\": true}");

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /v1/messages"));
        assert!(request.contains(&format!("x-api-key: {}", TEST_KEY.to_lowercase())));
        assert!(request.contains("anthropic-version: 2023-06-01"));
        assert!(request.contains("\"max_tokens\":4000"));
        assert!(request.contains("create a test"));
    }

    #[tokio::test]
    async fn test_authentication_failure() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        let (url, _server) = one_shot_server("401 Unauthorized", body.to_string()).await;

        let client = AnthropicClient::new(config(url, Duration::from_secs(5))).unwrap();
        let err = client.check_connection().await.unwrap_err();
        assert!(matches!(err, GenerationError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_empty_content_is_invalid_envelope() {
        let (url, _server) = one_shot_server("200 OK", r#"{"content": []}"#.to_string()).await;

        let client = AnthropicClient::new(config(url, Duration::from_secs(5))).unwrap();
        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidEnvelope));
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/messages", listener.local_addr().unwrap());
        // 接続は受け付けるが応答しない
        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let client = AnthropicClient::new(config(url, Duration::from_millis(200))).unwrap();
        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::Timeout));
    }

    #[tokio::test]
    async fn test_connection_refused_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/messages", listener.local_addr().unwrap());
        drop(listener);

        let client = AnthropicClient::new(config(url, Duration::from_secs(5))).unwrap();
        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::Connection(_)));
    }
}
