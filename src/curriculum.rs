// カリキュラムモジュール - 教育委員会・学年・科目・単元の静的テーブルと検索

mod keywords;
mod subjects;
mod topics;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// カリキュラム選択に関するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurriculumError {
    #[error("Unknown board '{0}'. Choose one of: CBSE, ICSE, IB, Cambridge IGCSE, State Board")]
    UnknownBoard(String),
    #[error("Invalid grade '{0}'. Grades run from 1 to 12")]
    InvalidGrade(String),
    #[error("Subject '{subject}' is not offered for {board} {grade}. Available: {available}")]
    SubjectNotOffered {
        board: Board,
        grade: String,
        subject: String,
        available: String,
    },
    #[error("No paper types available for {board} {grade}")]
    NoPaperTypes { board: Board, grade: String },
    #[error("Unknown paper type '{choice}'. Options: {options}")]
    UnknownPaperType { choice: String, options: String },
    #[error("Please enter a topic")]
    EmptyTopic,
}

/// 教育委員会（試験機関）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Board {
    #[serde(rename = "CBSE")]
    Cbse,
    #[serde(rename = "ICSE")]
    Icse,
    #[serde(rename = "IB")]
    Ib,
    #[serde(rename = "Cambridge IGCSE")]
    CambridgeIgcse,
    #[serde(rename = "State Board")]
    StateBoard,
}

/// 教育委員会ごとの教育方針・出題スタイル
#[derive(Debug)]
pub struct BoardProfile {
    pub full_name: &'static str,
    pub philosophy: &'static str,
    pub language: &'static str,
    pub examples: &'static str,
    pub assessment: &'static str,
    pub difficulty: &'static str,
    pub grades: &'static str,
    pub specialties: &'static [&'static str],
}

impl Board {
    pub const ALL: [Board; 5] = [
        Board::Cbse,
        Board::Icse,
        Board::Ib,
        Board::CambridgeIgcse,
        Board::StateBoard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Board::Cbse => "CBSE",
            Board::Icse => "ICSE",
            Board::Ib => "IB",
            Board::CambridgeIgcse => "Cambridge IGCSE",
            Board::StateBoard => "State Board",
        }
    }

    pub fn profile(self) -> &'static BoardProfile {
        match self {
            Board::Cbse => &CBSE_PROFILE,
            Board::Icse => &ICSE_PROFILE,
            Board::Ib => &IB_PROFILE,
            Board::CambridgeIgcse => &IGCSE_PROFILE,
            Board::StateBoard => &STATE_PROFILE,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 大文字小文字・区切り文字の違いを吸収する
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "cbse" => Ok(Board::Cbse),
            "icse" | "isc" => Ok(Board::Icse),
            "ib" => Ok(Board::Ib),
            "igcse" | "cambridgeigcse" | "cambridge" => Ok(Board::CambridgeIgcse),
            "state" | "stateboard" => Ok(Board::StateBoard),
            _ => Err(CurriculumError::UnknownBoard(s.trim().to_string())),
        }
    }
}

static CBSE_PROFILE: BoardProfile = BoardProfile {
    full_name: "Central Board of Secondary Education",
    philosophy: "Holistic development, practical application, Indian cultural context",
    language: "Indian English, Hindi transliterations when relevant",
    examples: "Indian cities, cultural references, local contexts",
    assessment: "Application-based, real-world problems, analytical thinking",
    difficulty: "Balanced approach, comprehensive coverage, skill development",
    grades: "1-12",
    specialties: &[
        "Indian cultural context",
        "Application-based learning",
        "Comprehensive coverage",
    ],
};

static ICSE_PROFILE: BoardProfile = BoardProfile {
    full_name: "Indian Certificate of Secondary Education",
    philosophy: "Analytical thinking, detailed study, British educational system",
    language: "British English spellings and grammar",
    examples: "International contexts, analytical scenarios",
    assessment: "Detailed answers, analytical questions, comprehensive evaluation",
    difficulty: "Higher complexity, detailed explanations, thorough understanding",
    grades: "1-12",
    specialties: &[
        "British educational system",
        "Detailed explanations",
        "Analytical questions",
    ],
};

static IB_PROFILE: BoardProfile = BoardProfile {
    full_name: "International Baccalaureate",
    philosophy: "Inquiry-based learning, international mindedness, critical thinking",
    language: "Academic English, inquiry-based terminology",
    examples: "Global perspectives, intercultural understanding, real-world applications",
    assessment: "Concept-based, inquiry-driven, reflection and analysis",
    difficulty: "High academic rigor, conceptual understanding, independent thinking",
    grades: "PYP, MYP, DP (1-12)",
    specialties: &[
        "Global perspectives",
        "Critical thinking",
        "Conceptual understanding",
    ],
};

static IGCSE_PROFILE: BoardProfile = BoardProfile {
    full_name: "Cambridge International General Certificate",
    philosophy: "International perspective, global contexts, academic excellence",
    language: "International English, academic vocabulary",
    examples: "Global examples, international case studies, multicultural contexts",
    assessment: "Cambridge assessment style, structured questions, evidence-based answers",
    difficulty: "International standards, university preparation, rigorous evaluation",
    grades: "1-12",
    specialties: &[
        "International standards",
        "University preparation",
        "Global contexts",
    ],
};

static STATE_PROFILE: BoardProfile = BoardProfile {
    full_name: "Regional State Education Boards",
    philosophy: "Regional relevance, state-specific curriculum, accessible education",
    language: "Local language influences, regional terminology",
    examples: "State-specific examples, local geography and culture",
    assessment: "State pattern questions, curriculum-aligned, practical focus",
    difficulty: "State standards, accessible to diverse learners, practical applications",
    grades: "1-12",
    specialties: &[
        "Local contexts",
        "Regional curriculum",
        "State-specific examples",
    ],
};

/// IBのプログラム区分
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IbProgramme {
    Pyp,
    Myp,
    Dp,
}

impl IbProgramme {
    pub fn for_grade(grade: u8) -> Self {
        match grade {
            0..=5 => IbProgramme::Pyp,
            6..=10 => IbProgramme::Myp,
            _ => IbProgramme::Dp,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IbProgramme::Pyp => "PYP",
            IbProgramme::Myp => "MYP",
            IbProgramme::Dp => "DP",
        }
    }
}

/// 学年（1〜12）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> Result<Self, CurriculumError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Grade(value))
        } else {
            Err(CurriculumError::InvalidGrade(value.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Grade> {
        (Self::MIN..=Self::MAX).map(Grade)
    }

    /// 画面表示用のラベル（IBはプログラム名付き）
    pub fn label(self, board: Board) -> String {
        match board {
            Board::Ib => format!(
                "Grade {} ({})",
                self.0,
                IbProgramme::for_grade(self.0).label()
            ),
            _ => format!("Grade {}", self.0),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn grade_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:grade\s*)?(\d{1,2})\s*(?:\(\s*(?:pyp|myp|dp)\s*\))?\s*$")
            .expect("grade pattern is a valid regex")
    })
}

impl FromStr for Grade {
    type Err = CurriculumError;

    // "5" / "Grade 5" / "Grade 5 (PYP)" のいずれも受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CurriculumError::InvalidGrade(s.trim().to_string());
        let captures = grade_pattern().captures(s).ok_or_else(invalid)?;
        let value: u8 = captures[1].parse().map_err(|_| invalid())?;
        Grade::new(value).map_err(|_| invalid())
    }
}

/// 開講科目を取得（該当なしは空）
pub fn subjects(board: Board, grade: Grade) -> &'static [&'static str] {
    subjects::SUBJECTS
        .iter()
        .find(|entry| entry.board == board && entry.grades.contains(&grade.value()))
        .map(|entry| entry.subjects)
        .unwrap_or(&[])
}

/// カリキュラム単元を取得（該当なしは空）
pub fn topics(board: Board, grade: Grade, subject: &str) -> &'static [&'static str] {
    topics::TOPICS
        .iter()
        .find(|entry| {
            entry.board == board && entry.grade == grade.value() && entry.subject == subject
        })
        .map(|entry| entry.topics)
        .unwrap_or(&[])
}

/// 科目の関連キーワードを取得（該当なしは空）
pub fn subject_keywords(subject: &str) -> &'static [&'static str] {
    keywords::KEYWORDS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// 科目名を開講科目リストの表記に合わせる（大文字小文字を無視）
pub fn resolve_subject(
    board: Board,
    grade: Grade,
    subject: &str,
) -> Result<&'static str, CurriculumError> {
    let offered = subjects(board, grade);
    let wanted = subject.trim();

    offered
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CurriculumError::SubjectNotOffered {
            board,
            grade: grade.label(board),
            subject: wanted.to_string(),
            available: offered.join(", "),
        })
}

/// カリキュラム全体の統計
#[derive(Debug, Serialize)]
pub struct CurriculumStats {
    pub total_boards: usize,
    pub total_subjects: usize,
    pub total_topics: usize,
    pub topics_per_board: BTreeMap<Board, usize>,
}

pub fn statistics() -> CurriculumStats {
    let mut subjects = BTreeSet::new();
    let mut topics_per_board = BTreeMap::new();
    let mut total_topics = 0;

    for entry in topics::TOPICS {
        subjects.insert(entry.subject);
        total_topics += entry.topics.len();
        *topics_per_board.entry(entry.board).or_insert(0) += entry.topics.len();
    }

    CurriculumStats {
        total_boards: topics_per_board.len(),
        total_subjects: subjects.len(),
        total_topics,
        topics_per_board,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: u8) -> Grade {
        Grade::new(value).unwrap()
    }

    #[test]
    fn test_board_parsing_accepts_aliases() {
        assert_eq!("cbse".parse::<Board>().unwrap(), Board::Cbse);
        assert_eq!("Cambridge IGCSE".parse::<Board>().unwrap(), Board::CambridgeIgcse);
        assert_eq!("igcse".parse::<Board>().unwrap(), Board::CambridgeIgcse);
        assert_eq!("state-board".parse::<Board>().unwrap(), Board::StateBoard);
        assert_eq!(
            "Oxford".parse::<Board>(),
            Err(CurriculumError::UnknownBoard("Oxford".to_string()))
        );
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!("7".parse::<Grade>().unwrap(), grade(7));
        assert_eq!("Grade 10".parse::<Grade>().unwrap(), grade(10));
        assert_eq!("Grade 5 (PYP)".parse::<Grade>().unwrap(), grade(5));
        assert!("Grade 13".parse::<Grade>().is_err());
        assert!("0".parse::<Grade>().is_err());
        assert!("tenth".parse::<Grade>().is_err());
    }

    #[test]
    fn test_ib_grade_labels_carry_programme() {
        assert_eq!(grade(3).label(Board::Ib), "Grade 3 (PYP)");
        assert_eq!(grade(8).label(Board::Ib), "Grade 8 (MYP)");
        assert_eq!(grade(12).label(Board::Ib), "Grade 12 (DP)");
        assert_eq!(grade(8).label(Board::Cbse), "Grade 8");
    }

    #[test]
    fn test_topic_lookup_is_deterministic() {
        let first = topics(Board::Cbse, grade(10), "Mathematics");
        let second = topics(Board::Cbse, grade(10), "Mathematics");
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
        assert_eq!(first[0], "Real Numbers");
        assert!(first.contains(&"Quadratic Equations"));
    }

    #[test]
    fn test_missing_keys_yield_empty_lists() {
        assert!(topics(Board::Cbse, grade(10), "Underwater Basket Weaving").is_empty());
        assert!(topics(Board::CambridgeIgcse, grade(3), "Mathematics").is_empty());
        assert!(subject_keywords("Astrology").is_empty());
    }

    #[test]
    fn test_subjects_by_board_and_grade() {
        let cbse_nine = subjects(Board::Cbse, grade(9));
        assert!(cbse_nine.contains(&"Information Technology"));
        assert!(!subjects(Board::Cbse, grade(8)).contains(&"Information Technology"));
        assert!(subjects(Board::Ib, grade(11)).contains(&"Theatre"));
    }

    #[test]
    fn test_resolve_subject_is_case_insensitive() {
        assert_eq!(
            resolve_subject(Board::Icse, grade(9), "physics").unwrap(),
            "Physics"
        );
        let err = resolve_subject(Board::Icse, grade(2), "Physics").unwrap_err();
        assert!(matches!(err, CurriculumError::SubjectNotOffered { .. }));
    }

    #[test]
    fn test_statistics_cover_every_board() {
        let stats = statistics();
        assert_eq!(stats.total_boards, 5);
        assert_eq!(stats.total_subjects, 7);
        assert_eq!(stats.total_topics, 1157);
        assert_eq!(
            stats.total_topics,
            stats.topics_per_board.values().sum::<usize>()
        );
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        use std::collections::HashSet;

        for entry in topics::TOPICS {
            let unique: HashSet<_> = entry.topics.iter().collect();
            assert_eq!(
                unique.len(),
                entry.topics.len(),
                "{} {} grade {}",
                entry.board,
                entry.subject,
                entry.grade
            );
        }
        for (subject, words) in keywords::KEYWORDS {
            let unique: HashSet<_> = words.iter().collect();
            assert_eq!(unique.len(), words.len(), "{}", subject);
        }
    }
}
