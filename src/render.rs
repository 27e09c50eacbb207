// 端末向けの表示整形

use crate::curriculum::{Board, CurriculumStats, Grade};
use crate::mock_test::{GeneratedTest, QuestionKind};
use crate::paper;
use crate::validation::{SelectionSummary, TopicValidation, ValidationSource};
use std::fmt;

// トピック一覧で最初に表示する件数
const TOPIC_PREVIEW: usize = 15;

const SEPARATOR: &str = "----------------------------------------";

pub const INSTRUCTIONS: [&str; 6] = [
    "Read all questions carefully before answering",
    "For multiple choice questions, select the best option",
    "Take your time to understand each question",
    "Show all working for calculation problems",
    "Write clearly for descriptive answers",
    "Manage your time effectively",
];

fn or_na(text: &str) -> &str {
    if text.trim().is_empty() { "N/A" } else { text }
}

/// 画面表示用のテスト用紙
pub struct TestSheet<'a>(pub &'a GeneratedTest);

impl fmt::Display for TestSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let test = self.0;
        let info = &test.test_info;
        let show_answers = info.show_answers_on_screen;

        writeln!(f, "🎓 Mock Test Generated")?;
        writeln!(f, "{} Mock Test", or_na(&info.subject))?;
        writeln!(
            f,
            "Board: {} | Grade: {} | Topic: {}",
            or_na(&info.board),
            or_na(&info.grade),
            or_na(&info.topic)
        )?;
        writeln!(
            f,
            "Paper Type: {} | Total Questions: {}",
            or_na(&info.paper_type),
            test.total_questions()
        )?;
        writeln!(
            f,
            "Curriculum Standard: {}",
            info.curriculum_standard.as_deref().unwrap_or("N/A")
        )?;
        writeln!(f)?;

        writeln!(f, "📋 Instructions:")?;
        for line in INSTRUCTIONS {
            writeln!(f, "  - {}", line)?;
        }
        writeln!(f, "{}", SEPARATOR)?;

        for (index, question) in test.questions.iter().enumerate() {
            let number = question.question_number.unwrap_or(index as u32 + 1);
            let text = if question.question.trim().is_empty() {
                "Question text missing"
            } else {
                question.question.as_str()
            };
            writeln!(f, "Question {}", number)?;
            writeln!(f, "{}", text)?;

            match question.kind {
                QuestionKind::Mcq => {
                    for (key, option) in &question.options {
                        writeln!(f, "  {}) {}", key, option)?;
                    }
                    if show_answers {
                        if let Some(correct) = question.correct_answer_text() {
                            writeln!(f, "✅ Correct Answer: {}", correct)?;
                            if let Some(explanation) = question.explanation() {
                                writeln!(f, "💡 Explanation: {}", explanation)?;
                            }
                        }
                    }
                }
                QuestionKind::Short | QuestionKind::Long => {
                    let (label, prompt) = if question.kind == QuestionKind::Short {
                        ("Short Answer Question", "Write your detailed answer below:")
                    } else {
                        (
                            "Long Answer Question",
                            "Write your detailed answer with proper explanations:",
                        )
                    };
                    let marks = question.marks_or_default().unwrap_or_default();
                    writeln!(f, "[{} - {} marks]", label, marks)?;
                    writeln!(f, "{}", prompt)?;
                    if show_answers {
                        if let Some(sample) = question.sample_answer_text() {
                            writeln!(f, "📝 Sample Answer: {}", sample)?;
                        }
                    }
                }
                QuestionKind::Other => {}
            }
            writeln!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

/// 生成されたテストを画面表示用の文字列にする
pub fn render_test(test: &GeneratedTest) -> String {
    TestSheet(test).to_string()
}

/// 教育委員会の一覧と特徴
pub fn render_boards() -> String {
    Board::ALL
        .iter()
        .map(|board| {
            let profile = board.profile();
            format!(
                "{} - {}\n  Grades: {}\n  Difficulty: {}\n  Focus: {}\n",
                board,
                profile.full_name,
                profile.grades,
                profile.difficulty,
                profile.specialties.join(", ")
            )
        })
        .collect()
}

pub fn render_grades(board: Board) -> String {
    Grade::all()
        .map(|grade| format!("{}\n", grade.label(board)))
        .collect()
}

fn bullets<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|item| format!("  • {}\n", item)).collect()
}

pub fn render_subjects(board: Board, grade: Grade, subjects: &[&str]) -> String {
    if subjects.is_empty() {
        return format!("No subjects listed for {} {}\n", board, grade.label(board));
    }

    format!(
        "📚 Subjects for {} {}:\n{}",
        board,
        grade.label(board),
        bullets(subjects.iter().copied())
    )
}

/// カリキュラム単元一覧（先頭15件のみ）
pub fn render_topics(board: Board, grade: Grade, subject: &str, topics: &[&str]) -> String {
    if topics.is_empty() {
        return format!(
            "💡 No curriculum topic list for {} {} {}. Topics are checked against subject keywords.\n",
            board,
            grade.label(board),
            subject
        );
    }

    let mut out = format!(
        "📚 {} {} {} Curriculum Topics:\n{}",
        board,
        grade.label(board),
        subject,
        bullets(topics.iter().copied().take(TOPIC_PREVIEW))
    );
    if topics.len() > TOPIC_PREVIEW {
        out.push_str(&format!(
            "  ... and {} more topics\n",
            topics.len() - TOPIC_PREVIEW
        ));
    }
    out
}

/// 試験形式一覧（番号・説明・目安時間付き）
pub fn render_paper_types(board: Board, grade: Grade, papers: &[&str]) -> String {
    let listed: String = papers
        .iter()
        .enumerate()
        .map(|(index, paper_type)| {
            let (description, duration) = paper::paper_details(paper_type);
            format!(
                "  {}. {}\n     Format: {} | Duration: {}\n",
                index + 1,
                paper_type,
                description,
                duration
            )
        })
        .collect();
    format!("📝 Paper types for {} {}:\n{}", board, grade.label(board), listed)
}

/// トピック判定結果
pub fn render_validation(topic: &str, subject: &str, result: &TopicValidation) -> String {
    match (result.valid, result.source) {
        (true, ValidationSource::Curriculum) => format!(
            "✅ Topic '{}' is valid for the selected curriculum\n  Related topics: {}\n",
            topic,
            result.matched.join(", ")
        ),
        (true, ValidationSource::Keywords) => format!(
            "✅ Topic '{}' matches {} keywords\n  Related keywords: {}\n",
            topic,
            subject,
            result.matched.join(", ")
        ),
        (false, _) if topic.trim().is_empty() => "❌ Please enter a topic\n".to_string(),
        (false, _) => {
            let mut out = format!(
                "❌ Topic '{}' doesn't match the {} curriculum\n",
                topic, subject
            );
            if !result.suggestions.is_empty() {
                let listed: Vec<&str> = result
                    .suggestions
                    .iter()
                    .copied()
                    .take(TOPIC_PREVIEW)
                    .collect();
                out.push_str(&format!("  Try one of: {}\n", listed.join(", ")));
            }
            out
        }
    }
}

pub fn render_summary(summary: &SelectionSummary) -> String {
    summary
        .lines
        .iter()
        .map(|line| {
            let mark = if line.ok { "✅" } else { "❌" };
            format!("{} {}\n", mark, line.message)
        })
        .collect()
}

pub fn render_stats(stats: &CurriculumStats) -> String {
    let mut out = format!(
        "📊 Curriculum coverage\n  Boards: {}\n  Subjects: {}\n  Topics: {}\n",
        stats.total_boards, stats.total_subjects, stats.total_topics
    );
    for (board, count) in &stats.topics_per_board {
        out.push_str(&format!("  {}: {} topics\n", board, count));
    }
    out
}
