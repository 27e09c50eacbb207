// 生成された模擬テストのデータ構造と保存・読み込み

use anyhow::{Context, Result};
use chrono::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 模擬テスト全体
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedTest {
    pub test_info: TestInfo,
    pub questions: Vec<Question>,
}

/// テストのメタ情報
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TestInfo {
    pub board: String,
    #[serde(deserialize_with = "string_or_number")]
    pub grade: String,
    pub subject: String,
    pub topic: String,
    pub paper_type: String,
    #[serde(deserialize_with = "lenient_opt_u32")]
    pub total_questions: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    pub mcq_count: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub short_count: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub long_count: u32,
    pub show_answers_on_screen: bool,
    pub curriculum_standard: Option<String>,
}

/// 問題の種類
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[serde(alias = "multiple_choice")]
    Mcq,
    #[serde(alias = "short_answer")]
    Short,
    #[serde(alias = "long_answer")]
    Long,
    #[default]
    #[serde(other)]
    Other,
}

/// 問題1件
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Question {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_u32"
    )]
    pub question_number: Option<u32>,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    // キー順（A, B, C, D）で並ぶ
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_answer: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_u32"
    )]
    pub marks: Option<u32>,
}

impl Question {
    /// 配点（未指定なら短答3点・長答6点）
    pub fn marks_or_default(&self) -> Option<u32> {
        match self.kind {
            QuestionKind::Short => Some(self.marks.unwrap_or(3)),
            QuestionKind::Long => Some(self.marks.unwrap_or(6)),
            _ => self.marks,
        }
    }

    /// 空でない正解記号
    pub fn correct_answer_text(&self) -> Option<&str> {
        non_empty(&self.correct_answer)
    }

    /// 空でない模範解答
    pub fn sample_answer_text(&self) -> Option<&str> {
        non_empty(&self.sample_answer)
    }

    /// 解答キーに載せる答え（正解記号を優先し、無ければ模範解答）
    pub fn answer(&self) -> Option<Answer<'_>> {
        self.correct_answer_text()
            .map(Answer::Correct)
            .or_else(|| self.sample_answer_text().map(Answer::Sample))
    }

    pub fn explanation(&self) -> Option<&str> {
        non_empty(&self.explanation)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Answer<'a> {
    Correct(&'a str),
    Sample(&'a str),
}

impl GeneratedTest {
    pub fn total_questions(&self) -> usize {
        self.test_info
            .total_questions
            .map(|n| n as usize)
            .unwrap_or(self.questions.len())
    }

    /// 保存用のファイル名（教育委員会_学年_科目_日時.json）
    pub fn file_stem(&self, now: DateTime<Utc>) -> String {
        let slug = |text: &str| -> String {
            text.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect::<String>()
                .split('_')
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("_")
        };

        format!(
            "{}_{}_{}_{}",
            slug(&self.test_info.board),
            slug(&self.test_info.grade),
            slug(&self.test_info.subject),
            now.format("%Y%m%d_%H%M%S")
        )
    }

    /// JSONとして保存し、保存先パスを返す
    pub async fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)
            .await
            .with_context(|| format!("出力ディレクトリの作成に失敗: {}", output_dir.display()))?;

        let filename = output_dir.join(format!("{}.json", self.file_stem(Utc::now())));
        let json_data = serde_json::to_string_pretty(self)?;
        fs::write(&filename, json_data)
            .await
            .with_context(|| format!("テストの保存に失敗: {}", filename.display()))?;

        Ok(filename)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("テストファイルの読み込みに失敗: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("テストファイルの解析に失敗: {}", path.display()))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

// モデルは数値を "3" のような文字列や null で返すことがある
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
    Missing(()),
}

impl RawNumber {
    fn to_u32(&self) -> Option<u32> {
        match self {
            RawNumber::Number(number) => number
                .as_u64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|value| value.fract() == 0.0 && *value >= 0.0)
                        .map(|value| value as u64)
                })
                .and_then(|value| u32::try_from(value).ok()),
            RawNumber::Text(text) => text.trim().parse().ok(),
            RawNumber::Missing(()) => None,
        }
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawNumber::deserialize(deserializer)?
        .to_u32()
        .unwrap_or_default())
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawNumber::deserialize(deserializer)?.to_u32())
}

// 学年は "10" / 10 / "Grade 5 (PYP)" のいずれでも受け付ける
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Missing(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_test() -> GeneratedTest {
        serde_json::from_value(json!({
            "test_info": {
                "board": "CBSE",
                "grade": 10,
                "subject": "Mathematics",
                "topic": "Quadratic Equations",
                "paper_type": "Board Pattern Paper 1 (MCQ + Short)",
                "total_questions": 2,
                "mcq_count": 1,
                "short_count": 1,
                "long_count": 0
            },
            "questions": [
                {
                    "question_number": 1,
                    "type": "mcq",
                    "question": "What is the discriminant of x^2 + 2x + 1?",
                    "options": {"C": "2", "A": "0", "D": "4", "B": "1"},
                    "correct_answer": "A",
                    "explanation": "b^2 - 4ac = 4 - 4 = 0"
                },
                {
                    "question_number": 2,
                    "type": "short_answer",
                    "question": "State the quadratic formula.",
                    "sample_answer": "x = (-b ± √(b²-4ac)) / 2a"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_lenient_fields() {
        let test = sample_test();
        assert_eq!(test.test_info.grade, "10");
        assert_eq!(test.questions[0].kind, QuestionKind::Mcq);
        assert_eq!(test.questions[1].kind, QuestionKind::Short);
        let keys: Vec<_> = test.questions[0].options.keys().cloned().collect();
        assert_eq!(keys, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_numbers_given_as_strings_or_null() {
        let test: GeneratedTest = serde_json::from_value(json!({
            "test_info": {"total_questions": "2", "mcq_count": " 1 ", "short_count": 1.0, "long_count": null},
            "questions": [
                {"question_number": "1", "type": "short", "question": "Define force.", "marks": "3"},
                {"question_number": null, "type": "long", "question": "Explain inertia.", "marks": "six"}
            ]
        }))
        .unwrap();

        assert_eq!(test.test_info.total_questions, Some(2));
        assert_eq!(test.test_info.mcq_count, 1);
        assert_eq!(test.test_info.short_count, 1);
        assert_eq!(test.test_info.long_count, 0);
        assert_eq!(test.questions[0].question_number, Some(1));
        assert_eq!(test.questions[0].marks, Some(3));
        assert_eq!(test.questions[1].question_number, None);
        assert_eq!(test.questions[1].marks_or_default(), Some(6));
    }

    #[test]
    fn test_blank_answers_are_ignored() {
        let question: Question = serde_json::from_value(json!({
            "type": "mcq", "question": "Pick one", "correct_answer": "  ",
            "sample_answer": "", "explanation": " "
        }))
        .unwrap();
        assert_eq!(question.correct_answer_text(), None);
        assert_eq!(question.sample_answer_text(), None);
        assert_eq!(question.answer(), None);
        assert_eq!(question.explanation(), None);
    }

    #[test]
    fn test_unknown_question_type_is_other() {
        let question: Question =
            serde_json::from_value(json!({"type": "true_false", "question": "Is 2 prime?"}))
                .unwrap();
        assert_eq!(question.kind, QuestionKind::Other);
        assert_eq!(question.marks_or_default(), None);
    }

    #[test]
    fn test_answer_prefers_correct_answer() {
        let test = sample_test();
        assert_eq!(test.questions[0].answer(), Some(Answer::Correct("A")));
        assert!(matches!(test.questions[1].answer(), Some(Answer::Sample(_))));
        assert_eq!(test.questions[1].marks_or_default(), Some(3));
    }

    #[test]
    fn test_file_stem_is_filesystem_safe() {
        let mut test = sample_test();
        test.test_info.board = "Cambridge IGCSE".to_string();
        test.test_info.subject = "Art & Design".to_string();
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(
            test.file_stem(now),
            "Cambridge_IGCSE_10_Art_Design_20240309_140500"
        );
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let test = sample_test();

        let path = test.save(dir.path()).await.unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

        let loaded = GeneratedTest::load(&path).await.unwrap();
        assert_eq!(loaded, test);
    }
}
