// LLMモジュール - 問題生成に関わるAPI呼び出し・プロンプト・応答解析をまとめたモジュール

// サブモジュールをエクスポート
pub mod client;
pub mod extract;
pub mod prompts;
pub mod schemas;

use crate::curriculum::{Board, Grade};
use crate::mock_test::GeneratedTest;
use crate::paper::QuestionMix;
use client::AnthropicClient;
use log::{debug, info};
use serde_json::Value;
use thiserror::Error;

// デバッグ表示する生レスポンスの最大文字数
const RAW_EXCERPT_CHARS: usize = 500;

/// 問題生成で起こりうるエラー
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key not configured. Set ANTHROPIC_API_KEY or pass --api-key")]
    MissingApiKey,
    #[error("Request timeout. Please try again.")]
    Timeout,
    #[error("Connection error. Please check your internet connection. ({0})")]
    Connection(String),
    #[error("API Authentication failed. Please check your API key.")]
    AuthenticationFailed,
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("API Request Error: {0}")]
    BadRequest(String),
    #[error("API Error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Invalid response format from Claude API")]
    InvalidEnvelope,
    #[error("{message}\nRaw response: {excerpt}")]
    MalformedJson { message: String, excerpt: String },
    #[error("Invalid test data structure: missing {0}")]
    InvalidStructure(&'static str),
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
}

/// 問題生成の入力
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub board: Board,
    pub grade: Grade,
    pub subject: String,
    pub topic: String,
    pub paper_type: String,
    pub show_answers: bool,
}

impl GenerationRequest {
    pub fn curriculum_standard(&self) -> String {
        format!(
            "{} {} {}",
            self.board,
            self.grade.label(self.board),
            self.subject
        )
    }
}

/// 問題構成の決定からAPI呼び出し、応答の解析までを実行する
pub async fn generate_test(
    client: &AnthropicClient,
    request: &GenerationRequest,
) -> Result<GeneratedTest, GenerationError> {
    let mix = QuestionMix::for_paper(&request.paper_type);
    info!(
        "🧮 問題構成: 択一 {} / 短答 {} / 長答 {}",
        mix.mcq, mix.short, mix.long
    );

    let prompt = prompts::build_prompt(request, mix);
    debug!("プロンプト長: {} 文字", prompt.len());

    info!("🔍 Claude AI に接続中...");
    let content = client.complete(&prompt).await?;

    info!("🔧 応答を処理中...");
    parse_completion(&content, request)
}

/// モデルの応答テキストをテストデータに変換する
pub fn parse_completion(
    content: &str,
    request: &GenerationRequest,
) -> Result<GeneratedTest, GenerationError> {
    let mut value =
        extract::extract_json(content).map_err(|e| GenerationError::MalformedJson {
            message: e.to_string(),
            excerpt: extract::excerpt(content, RAW_EXCERPT_CHARS),
        })?;

    for key in ["test_info", "questions"] {
        if value.get(key).is_none() {
            return Err(GenerationError::InvalidStructure(key));
        }
    }

    // 画面表示の有無とカリキュラム基準はユーザーの選択で上書きする
    if let Some(info) = value.get_mut("test_info").and_then(Value::as_object_mut) {
        info.insert(
            "show_answers_on_screen".to_string(),
            Value::Bool(request.show_answers),
        );
        info.insert(
            "curriculum_standard".to_string(),
            Value::String(request.curriculum_standard()),
        );
    }

    serde_json::from_value(value).map_err(|e| GenerationError::MalformedJson {
        message: format!("JSON Parse Error: {}", e),
        excerpt: extract::excerpt(content, RAW_EXCERPT_CHARS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_test::QuestionKind;

    fn request(show_answers: bool) -> GenerationRequest {
        GenerationRequest {
            board: Board::Cbse,
            grade: Grade::new(10).unwrap(),
            subject: "Science".to_string(),
            topic: "Electricity".to_string(),
            paper_type: "Board Pattern Paper 1 (MCQ + Short)".to_string(),
            show_answers,
        }
    }

    const COMPLETION: &str = r#"Here is the test you asked for:
```json
{
  "test_info": {"board": "CBSE", "grade": "10", "subject": "Science", "topic": "Electricity",
                "paper_type": "Board Pattern Paper 1 (MCQ + Short)", "total_questions": 2,
                "mcq_count": 1, "short_count": 1, "long_count": 0, "show_answers_on_screen": false},
  "questions": [
    {"question_number": 1, "type": "mcq", "question": "SI unit of current?",
     "options": {"A": "Ampere", "B": "Volt", "C": "Ohm", "D": "Watt"},
     "correct_answer": "A", "explanation": "Current is measured in amperes."},
    {"question_number": 2, "type": "short", "question": "State Ohm's law.",
     "sample_answer": "V = IR at constant temperature.", "marks": 3}
  ]
}
```"#;

    #[test]
    fn test_parse_completion_overrides_user_choices() {
        let test = parse_completion(COMPLETION, &request(true)).unwrap();
        assert!(test.test_info.show_answers_on_screen);
        assert_eq!(
            test.test_info.curriculum_standard.as_deref(),
            Some("CBSE Grade 10 Science")
        );
        assert_eq!(test.questions.len(), 2);
        assert_eq!(test.questions[1].kind, QuestionKind::Short);
    }

    #[test]
    fn test_parse_completion_accepts_numbers_as_strings() {
        let content = r#"{
  "test_info": {"board": "CBSE", "grade": 10, "total_questions": "1",
                "mcq_count": "0", "short_count": 1, "long_count": null},
  "questions": [
    {"question_number": "1", "type": "short", "question": "Define resistance.",
     "sample_answer": "Opposition to current.", "marks": "3"}
  ]
}"#;
        let test = parse_completion(content, &request(false)).unwrap();
        assert_eq!(test.test_info.grade, "10");
        assert_eq!(test.test_info.total_questions, Some(1));
        assert_eq!(test.test_info.long_count, 0);
        assert_eq!(test.questions[0].question_number, Some(1));
        assert_eq!(test.questions[0].marks, Some(3));
    }

    #[test]
    fn test_malformed_completion_is_reported() {
        let err = parse_completion("```json\n{\"test_info\": {,}\n```", &request(false)).unwrap_err();
        match err {
            GenerationError::MalformedJson { message, excerpt } => {
                assert!(message.starts_with("JSON Parse Error"));
                assert!(excerpt.contains("test_info"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_questions_is_invalid_structure() {
        let err = parse_completion(r#"{"test_info": {}}"#, &request(false)).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidStructure("questions")));
    }

    #[test]
    fn test_prose_only_completion_is_malformed() {
        let err = parse_completion("Sorry, I can't do that.", &request(false)).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedJson { .. }));
    }
}
