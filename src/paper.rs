// 試験形式（ペーパータイプ）と問題構成の決定

use crate::curriculum::{Board, CurriculumError, Grade};
use serde::{Deserialize, Serialize};

/// 教育委員会・学年帯ごとの試験形式一覧
pub fn paper_types(board: Board, grade: Grade) -> &'static [&'static str] {
    let grade = grade.value();

    match board {
        Board::Cbse => match grade {
            0..=5 => &[
                "Primary Assessment (20 Mixed Questions)",
                "Activity-Based Test (15 Practical Tasks)",
                "Oral Assessment (10 Questions)",
            ],
            6..=8 => &[
                "Periodic Test (35 Mixed Questions)",
                "Unit Test (30 Questions)",
                "Annual Practice (40 Questions)",
            ],
            9..=10 => &[
                "Board Pattern Paper 1 (MCQ + Short)",
                "Board Pattern Paper 2 (Long Answer)",
                "Sample Paper Format (Full 80 marks)",
            ],
            _ => &[
                "Board Exam Pattern (35 Mixed Questions)",
                "Practice Test Series (40 Questions)",
                "Mock Board Paper (80 marks)",
            ],
        },
        Board::Icse => match grade {
            0..=5 => &[
                "Foundation Test (20 Mixed Questions)",
                "Skills Assessment (15 Activity Questions)",
                "Progress Evaluation (25 Questions)",
            ],
            6..=8 => &[
                "Class Test Format (30 Questions)",
                "Term Examination (25 MCQ + 10 Descriptive)",
                "Annual Assessment (40 Mixed Questions)",
            ],
            9..=10 => &[
                "ICSE Board Format Paper 1 (40 MCQs)",
                "ICSE Board Format Paper 2 (Descriptive)",
                "Mock ICSE Paper (Full 80 marks)",
                "Practice Test (35 Mixed Questions)",
            ],
            // 11〜12年はISC
            _ => &[
                "ISC Board Pattern Paper 1 (Theory)",
                "ISC Board Pattern Paper 2 (Application)",
                "Mock ISC Paper (Full 100 marks)",
                "Practice Assessment (45 Questions)",
            ],
        },
        Board::Ib => match grade {
            0..=5 => &[
                "Formative Assessment (20 Mixed Questions)",
                "Skills Practice (15 Activity Tasks)",
                "Inquiry Tasks (25 Exploration Questions)",
            ],
            6..=10 => &[
                "Practice Assessment (30 Mixed Questions)",
                "Criterion-Based Test (25 Questions)",
                "Personal Project Prep (15 Research Questions)",
                "MYP Certificate Practice (40 Questions)",
            ],
            _ => &[
                "Paper 1 (40 MCQs)",
                "Paper 2 (15 Short + 15 Long Answers)",
                "Paper 3 (Data Analysis & Application)",
            ],
        },
        Board::CambridgeIgcse => match grade {
            0..=8 => &[
                "Cambridge Primary Test (20 Questions)",
                "Lower Secondary Assessment (25 Questions)",
                "Checkpoint Practice (30 Questions)",
            ],
            9..=10 => &[
                "Paper 1 (30 MCQs)",
                "Paper 2 (Theory - 75 min)",
                "Paper 3 (Practical/Coursework)",
                "Paper 4 (Alternative to Practical)",
            ],
            _ => &[
                "A-Level AS Paper (35 Questions)",
                "A-Level A2 Paper (40 Questions)",
                "Cambridge Advanced Test (45 Questions)",
            ],
        },
        Board::StateBoard => match grade {
            0..=5 => &[
                "State Pattern Test (20 Questions)",
                "Monthly Assessment (15 Questions)",
                "Annual Examination (25 Questions)",
            ],
            6..=8 => &[
                "State Board Format (30 Questions)",
                "Quarterly Test (25 MCQ + 10 Short)",
                "Half-yearly Pattern (35 Questions)",
            ],
            9..=10 => &[
                "State Board Paper 1 (25 MCQ + 15 Short)",
                "State Board Paper 2 (20 Long Answers)",
                "Annual Exam Pattern (Full State Format)",
            ],
            _ => &[
                "HSC Board Pattern (40 Mixed Questions)",
                "State Higher Secondary (45 Questions)",
                "Board Exam Format (Full Board Pattern)",
            ],
        },
    }
}

/// 番号（1始まり）またはラベルから試験形式を決定する。未指定なら先頭。
pub fn resolve_paper_type(
    board: Board,
    grade: Grade,
    choice: Option<&str>,
) -> Result<&'static str, CurriculumError> {
    let options = paper_types(board, grade);
    let first = options.first().copied().ok_or(CurriculumError::NoPaperTypes {
        board,
        grade: grade.label(board),
    })?;

    let choice = match choice.map(str::trim) {
        None | Some("") => return Ok(first),
        Some(choice) => choice,
    };

    let unknown = || CurriculumError::UnknownPaperType {
        choice: choice.to_string(),
        options: options.join(" | "),
    };

    if let Ok(index) = choice.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .copied()
            .ok_or_else(unknown);
    }

    if let Some(exact) = options
        .iter()
        .copied()
        .find(|o| o.eq_ignore_ascii_case(choice))
    {
        return Ok(exact);
    }

    // 部分一致は一意に決まる場合のみ採用
    let needle = choice.to_lowercase();
    let mut partial = options
        .iter()
        .copied()
        .filter(|o| o.to_lowercase().contains(&needle));
    match (partial.next(), partial.next()) {
        (Some(only), None) => Ok(only),
        _ => Err(unknown()),
    }
}

/// 問題構成（択一・記述短答・記述長答の問題数）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMix {
    pub mcq: u32,
    pub short: u32,
    pub long: u32,
}

const fn mix(mcq: u32, short: u32, long: u32) -> QuestionMix {
    QuestionMix { mcq, short, long }
}

// 上から順に評価し、最初に部分一致したルールを採用する
const MIX_RULES: &[(&[&str], QuestionMix)] = &[
    // 初等（1〜5年）
    (
        &["Primary Assessment", "Foundation Test", "State Pattern Test"],
        mix(15, 5, 0),
    ),
    (&["Activity", "Skills"], mix(0, 15, 0)),
    (&["Oral Assessment"], mix(0, 10, 0)),
    // 中等前期（6〜8年）
    (
        &["Periodic Test", "Class Test", "State Board Format"],
        mix(20, 10, 0),
    ),
    (
        &["Unit Test", "Term Examination", "Quarterly Test"],
        mix(20, 10, 0),
    ),
    (
        &["Annual Practice", "Annual Assessment", "Half-yearly Pattern"],
        mix(25, 15, 0),
    ),
    // 中等後期（9〜10年）
    (
        &[
            "Board Pattern Paper 1",
            "ICSE Board Format Paper 1",
            "State Board Paper 1",
        ],
        mix(25, 15, 0),
    ),
    (
        &[
            "Board Pattern Paper 2",
            "ICSE Board Format Paper 2",
            "State Board Paper 2",
        ],
        mix(0, 10, 10),
    ),
    (
        &["Sample Paper Format", "Mock ICSE Paper", "Annual Exam Pattern"],
        mix(25, 10, 5),
    ),
    // 高等（11〜12年）
    (
        &["Board Exam Pattern", "ISC Board Pattern", "HSC Board Pattern"],
        mix(25, 10, 5),
    ),
    (
        &[
            "Practice Test Series",
            "Practice Assessment",
            "State Higher Secondary",
        ],
        mix(30, 10, 0),
    ),
    (
        &["Mock Board Paper", "Mock ISC Paper", "Board Exam Format"],
        mix(30, 15, 5),
    ),
    // IB
    (&["Formative Assessment"], mix(15, 5, 0)),
    (&["Inquiry Tasks"], mix(0, 25, 0)),
    (&["Criterion-Based Test"], mix(15, 10, 0)),
    (&["Personal Project Prep"], mix(0, 15, 0)),
    (&["MYP Certificate Practice"], mix(30, 10, 0)),
    (&["Paper 1 (40 MCQs)"], mix(40, 0, 0)),
    (&["Paper 2 (15 Short + 15 Long"], mix(0, 15, 15)),
    (&["Paper 3 (Data Analysis"], mix(15, 10, 0)),
    // Cambridge IGCSE
    (
        &["Cambridge Primary Test", "Lower Secondary Assessment"],
        mix(15, 10, 0),
    ),
    (&["Checkpoint Practice"], mix(20, 10, 0)),
    (&["Paper 1 (30 MCQs)"], mix(30, 0, 0)),
    (&["Paper 2 (Theory"], mix(10, 15, 5)),
    (
        &["Paper 3 (Practical", "Paper 4 (Alternative"],
        mix(15, 10, 0),
    ),
    (&["A-Level AS Paper"], mix(20, 15, 0)),
    (&["A-Level A2 Paper"], mix(25, 15, 0)),
    (&["Cambridge Advanced Test"], mix(30, 15, 0)),
];

const DEFAULT_MIX: QuestionMix = mix(20, 10, 0);

impl QuestionMix {
    pub fn for_paper(paper_type: &str) -> Self {
        MIX_RULES
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| paper_type.contains(p)))
            .map(|(_, mix)| *mix)
            .unwrap_or(DEFAULT_MIX)
    }

    pub fn total(&self) -> u32 {
        self.mcq + self.short + self.long
    }
}

/// 試験形式の説明と目安時間
pub fn paper_details(paper_type: &str) -> (&'static str, &'static str) {
    let has = |needle: &str| paper_type.contains(needle);

    if has("40 MCQs") {
        ("40 Multiple Choice Questions", "90-120 minutes")
    } else if has("30 MCQs") {
        ("30 Multiple Choice Questions", "60-90 minutes")
    } else if has("25 MCQ") {
        ("25 Multiple Choice Questions", "45-60 minutes")
    } else if has("20 Mixed") {
        ("20 Mixed Questions (MCQ + Short)", "60-75 minutes")
    } else if has("15 Short + 15 Long") {
        ("15 Short + 15 Long Answer Questions", "120-150 minutes")
    } else if has("15 Activity") || has("Skills Practice") {
        ("15 Hands-on Activity Tasks", "90-120 minutes")
    } else if has("25 Exploration") || has("Inquiry Tasks") {
        ("25 Inquiry-based Questions", "90-120 minutes")
    } else if has("Primary Assessment") || has("Foundation Test") {
        ("20 Age-appropriate Mixed Questions", "45-60 minutes")
    } else if has("Board Pattern Paper 1") {
        ("25 MCQs + 15 Short Answers", "120 minutes")
    } else if has("Board Pattern Paper 2") {
        ("10 Short + 10 Long Answer Questions", "120 minutes")
    } else if has("Sample Paper Format") || has("Mock") {
        ("Full Board Exam Pattern", "180 minutes")
    } else {
        ("Custom Question Format", "Varies")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: u8) -> Grade {
        Grade::new(value).unwrap()
    }

    #[test]
    fn test_paper_types_follow_grade_bands() {
        assert_eq!(
            paper_types(Board::Cbse, grade(4))[0],
            "Primary Assessment (20 Mixed Questions)"
        );
        assert_eq!(paper_types(Board::Ib, grade(12))[0], "Paper 1 (40 MCQs)");
        assert_eq!(
            paper_types(Board::CambridgeIgcse, grade(7))[2],
            "Checkpoint Practice (30 Questions)"
        );
        assert_eq!(paper_types(Board::Icse, grade(10)).len(), 4);
    }

    #[test]
    fn test_question_mix_rules() {
        assert_eq!(
            QuestionMix::for_paper("Primary Assessment (20 Mixed Questions)"),
            mix(15, 5, 0)
        );
        assert_eq!(
            QuestionMix::for_paper("Paper 2 (15 Short + 15 Long Answers)"),
            mix(0, 15, 15)
        );
        assert_eq!(QuestionMix::for_paper("Paper 1 (30 MCQs)"), mix(30, 0, 0));
        assert_eq!(
            QuestionMix::for_paper("Mock Board Paper (80 marks)").total(),
            50
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "ISC Board Pattern Paper 1" は9〜10年の "Board Pattern Paper 1" に先に一致する
        assert_eq!(
            QuestionMix::for_paper("ISC Board Pattern Paper 1 (Theory)"),
            mix(25, 15, 0)
        );
        // IBの "Practice Assessment" は高等ルールに一致する
        assert_eq!(
            QuestionMix::for_paper("Practice Assessment (30 Mixed Questions)"),
            mix(30, 10, 0)
        );
    }

    #[test]
    fn test_unknown_paper_uses_default_mix() {
        assert_eq!(QuestionMix::for_paper("Progress Evaluation (25 Questions)"), DEFAULT_MIX);
        assert_eq!(QuestionMix::for_paper(""), DEFAULT_MIX);
    }

    #[test]
    fn test_resolve_paper_type_by_index_and_label() {
        let g = grade(10);
        assert_eq!(
            resolve_paper_type(Board::Cbse, g, None).unwrap(),
            "Board Pattern Paper 1 (MCQ + Short)"
        );
        assert_eq!(
            resolve_paper_type(Board::Cbse, g, Some("3")).unwrap(),
            "Sample Paper Format (Full 80 marks)"
        );
        assert_eq!(
            resolve_paper_type(Board::Cbse, g, Some("long answer")).unwrap(),
            "Board Pattern Paper 2 (Long Answer)"
        );
        assert!(resolve_paper_type(Board::Cbse, g, Some("0")).is_err());
        assert!(resolve_paper_type(Board::Cbse, g, Some("9")).is_err());
        // "Board Pattern" は複数に一致するので曖昧
        assert!(resolve_paper_type(Board::Cbse, g, Some("Board Pattern")).is_err());
    }

    #[test]
    fn test_paper_details() {
        assert_eq!(paper_details("Paper 1 (40 MCQs)").1, "90-120 minutes");
        assert_eq!(paper_details("Mock ISC Paper (Full 100 marks)").0, "Full Board Exam Pattern");
        assert_eq!(paper_details("Unit Test (30 Questions)").0, "Custom Question Format");
    }
}
