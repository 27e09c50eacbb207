// API接続設定（コマンドライン引数・環境変数・.env）

use clap::Args;
use std::time::Duration;

const PLACEHOLDER_KEY: &str = "REPLACE_WITH_YOUR_API_KEY";
const KEY_PREFIX: &str = "sk-ant-api03-";

/// API関連のコマンドライン引数
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Anthropic APIキー
    #[clap(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Messages APIのURL
    #[clap(
        long,
        env = "ANTHROPIC_API_URL",
        default_value = "https://api.anthropic.com/v1/messages"
    )]
    pub api_url: String,

    /// 使用するモデル
    #[clap(long, env = "ANTHROPIC_MODEL", default_value = "claude-3-5-sonnet-20241022")]
    pub model: String,

    /// anthropic-version ヘッダー
    #[clap(long, env = "ANTHROPIC_VERSION", default_value = "2023-06-01")]
    pub anthropic_version: String,

    /// 生成時の最大トークン数
    #[clap(long, env = "MAX_TOKENS", default_value = "4000")]
    pub max_tokens: u32,

    /// 生成リクエストのタイムアウト（秒）
    #[clap(long, env = "REQUEST_TIMEOUT_SECS", default_value = "60")]
    pub timeout_secs: u64,
}

/// 解決済みのAPI設定
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub check_timeout: Duration,
}

/// APIキーの状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStatus {
    Missing,
    Placeholder,
    UnexpectedFormat,
    Ok,
}

impl KeyStatus {
    pub fn is_usable(self) -> bool {
        matches!(self, KeyStatus::Ok | KeyStatus::UnexpectedFormat)
    }

    pub fn describe(self) -> &'static str {
        match self {
            KeyStatus::Missing | KeyStatus::Placeholder => "API key not configured",
            KeyStatus::UnexpectedFormat => "Invalid API key format",
            KeyStatus::Ok => "API key format is correct",
        }
    }
}

impl From<ApiArgs> for ApiConfig {
    fn from(args: ApiArgs) -> Self {
        ApiConfig {
            api_key: args
                .api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            api_url: args.api_url,
            model: args.model,
            anthropic_version: args.anthropic_version,
            max_tokens: args.max_tokens,
            timeout: Duration::from_secs(args.timeout_secs),
            check_timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    pub fn key_status(&self) -> KeyStatus {
        match self.api_key.as_deref() {
            None => KeyStatus::Missing,
            Some(PLACEHOLDER_KEY) => KeyStatus::Placeholder,
            Some(key) if !key.starts_with(KEY_PREFIX) => KeyStatus::UnexpectedFormat,
            Some(_) => KeyStatus::Ok,
        }
    }

    /// 先頭15文字と末尾8文字だけを表示する
    pub fn key_preview(&self) -> Option<String> {
        let key = self.api_key.as_deref()?;
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 23 {
            return Some("*".repeat(chars.len()));
        }

        let head: String = chars[..15].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        Some(format!("{}...{}", head, tail))
    }
}
