// 単元（トピック）の妥当性チェック

use crate::curriculum::{self, Board, Grade};

/// 判定に使ったデータの種類
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationSource {
    /// カリキュラム単元表
    Curriculum,
    /// 単元表が無い科目のキーワード表
    Keywords,
}

/// トピック判定結果
#[derive(Debug)]
pub struct TopicValidation {
    pub valid: bool,
    pub source: ValidationSource,
    /// 一致した単元またはキーワード
    pub matched: Vec<&'static str>,
    /// 候補として提示するリスト
    pub suggestions: &'static [&'static str],
}

/// 入力トピックが選択中のカリキュラムに含まれるか判定する
pub fn validate_topic(board: Board, grade: Grade, subject: &str, topic: &str) -> TopicValidation {
    let topic_clean = topic.trim().to_lowercase();

    if topic_clean.is_empty() {
        return TopicValidation {
            valid: false,
            source: ValidationSource::Curriculum,
            matched: Vec::new(),
            suggestions: &[],
        };
    }

    let curriculum_topics = curriculum::topics(board, grade, subject);
    if curriculum_topics.is_empty() {
        return check_keyword_relevance(&topic_clean, subject);
    }

    let words: Vec<&str> = topic_clean
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .collect();

    let matched: Vec<&'static str> = curriculum_topics
        .iter()
        .copied()
        .filter(|candidate| {
            let candidate = candidate.to_lowercase();
            topic_clean.contains(&candidate)
                || candidate.contains(&topic_clean)
                || words.iter().any(|word| candidate.contains(word))
        })
        .collect();

    TopicValidation {
        valid: !matched.is_empty(),
        source: ValidationSource::Curriculum,
        matched,
        suggestions: curriculum_topics,
    }
}

// 単元表が無い場合は科目キーワードとの部分一致で判定する
fn check_keyword_relevance(topic_clean: &str, subject: &str) -> TopicValidation {
    let subject_keywords = curriculum::subject_keywords(subject);
    let mut matched = matching_keywords(topic_clean, subject_keywords, usize::MAX);

    // 総合科目は個別科目のキーワードでも一度だけ拾う
    if matched.is_empty() {
        let related: &[&str] = if subject == "Science" {
            &["Physics", "Chemistry", "Biology"]
        } else if subject.contains("Social Science") {
            &["History", "Geography", "Civics", "Economics", "Political Science"]
        } else {
            &[]
        };

        matched = related
            .iter()
            .map(|name| matching_keywords(topic_clean, curriculum::subject_keywords(name), 1))
            .find(|found| !found.is_empty())
            .unwrap_or_default();
    }

    TopicValidation {
        valid: !matched.is_empty(),
        source: ValidationSource::Keywords,
        matched,
        suggestions: subject_keywords,
    }
}

fn matching_keywords(
    topic_clean: &str,
    keywords: &'static [&'static str],
    limit: usize,
) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| {
            let keyword = keyword.to_lowercase();
            topic_clean.contains(&keyword) || keyword.contains(topic_clean)
        })
        .take(limit)
        .collect()
}

/// 入力内容のサマリー行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub ok: bool,
    pub message: String,
}

/// 入力4項目（教育委員会・学年・科目・トピック）の検証サマリー
#[derive(Debug, Default)]
pub struct SelectionSummary {
    pub lines: Vec<SummaryLine>,
}

impl SelectionSummary {
    pub fn build(board: Board, grade: Grade, subject: &str, topic: &str, topic_valid: bool) -> Self {
        let topic = topic.trim();
        let topic_line = if topic.is_empty() {
            line(false, "TOPIC: Please enter a topic".to_string())
        } else if topic_valid {
            line(true, format!("TOPIC: '{}' is Valid", topic))
        } else {
            line(false, "TOPIC: Topic doesn't match curriculum".to_string())
        };

        SelectionSummary {
            lines: vec![
                line(true, format!("BOARD: {} Selected", board)),
                line(true, format!("GRADE: {} Selected", grade.label(board))),
                line(true, format!("SUBJECT: {} Selected", subject)),
                topic_line,
            ],
        }
    }

    pub fn all_valid(&self) -> bool {
        self.lines.len() == 4 && self.lines.iter().all(|l| l.ok)
    }
}

fn line(ok: bool, message: String) -> SummaryLine {
    SummaryLine { ok, message }
}
