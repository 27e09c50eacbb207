// 教育委員会・学年ごとの開講科目

use super::Board;
use std::ops::RangeInclusive;

/// 同じ科目構成を持つ学年範囲ごとのエントリ
pub(super) struct SubjectEntry {
    pub board: Board,
    pub grades: RangeInclusive<u8>,
    pub subjects: &'static [&'static str],
}

pub(super) static SUBJECTS: &[SubjectEntry] = &[
    SubjectEntry {
        board: Board::Cbse,
        grades: 1..=2,
        subjects: &[
            "Mathematics", "English", "Hindi", "EVS (Environmental Studies)",
            "GK (General Knowledge)", "Art & Craft", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Cbse,
        grades: 3..=5,
        subjects: &[
            "Mathematics", "English", "Hindi", "EVS (Environmental Studies)", "Computer Science",
            "GK (General Knowledge)", "Art & Craft", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Cbse,
        grades: 6..=8,
        subjects: &[
            "Mathematics", "English", "Hindi", "Science", "Social Science", "Sanskrit",
            "Computer Science", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Cbse,
        grades: 9..=10,
        subjects: &[
            "Mathematics", "English", "Hindi", "Science", "Social Science", "Sanskrit",
            "Computer Science", "Physical Education", "Information Technology",
        ],
    },
    SubjectEntry {
        board: Board::Cbse,
        grades: 11..=12,
        subjects: &[
            "Mathematics", "Physics", "Chemistry", "Biology", "English Core", "Computer Science",
            "Economics", "Business Studies", "Accountancy", "Political Science", "Geography",
            "History", "Psychology", "Physical Education", "Applied Mathematics", "Biotechnology",
            "Engineering Graphics",
        ],
    },
    SubjectEntry {
        board: Board::Icse,
        grades: 1..=2,
        subjects: &[
            "Mathematics", "English", "Hindi", "EVS (Environmental Studies)",
            "GK (General Knowledge)", "Art & Craft", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Icse,
        grades: 3..=5,
        subjects: &[
            "Mathematics", "English", "Hindi", "EVS (Environmental Studies)",
            "Computer Applications", "GK (General Knowledge)", "Art & Craft", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Icse,
        grades: 6..=8,
        subjects: &[
            "Mathematics", "English", "Hindi", "Physics", "Chemistry", "Biology",
            "History & Civics", "Geography", "Computer Applications", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Icse,
        grades: 9..=10,
        subjects: &[
            "Mathematics", "English", "Hindi", "Physics", "Chemistry", "Biology",
            "History & Civics", "Geography", "Computer Applications", "Physical Education",
            "Economics", "Commercial Studies",
        ],
    },
    SubjectEntry {
        board: Board::Icse,
        grades: 11..=12,
        subjects: &[
            "Mathematics", "Physics", "Chemistry", "Biology", "English", "Computer Science",
            "Economics", "Commerce", "Accounts", "Business Studies", "Geography", "History",
            "Political Science", "Psychology", "Sociology", "Art", "Home Science",
            "Environmental Science",
        ],
    },
    SubjectEntry {
        board: Board::Ib,
        grades: 1..=5,
        subjects: &[
            "Mathematics", "English", "Science", "Social Studies", "Arts", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::Ib,
        grades: 6..=8,
        subjects: &[
            "Mathematics", "Language & Literature", "Language Acquisition", "Sciences",
            "Individuals & Societies", "Arts", "Physical & Health Education", "Design",
        ],
    },
    SubjectEntry {
        board: Board::Ib,
        grades: 9..=10,
        subjects: &[
            "Mathematics", "Language & Literature", "Language Acquisition", "Sciences",
            "Individuals & Societies", "Arts", "Physical & Health Education", "Design",
            "Computer Science",
        ],
    },
    SubjectEntry {
        board: Board::Ib,
        grades: 11..=12,
        subjects: &[
            "Mathematics", "Physics", "Chemistry", "Biology", "English Literature", "Economics",
            "Business Management", "Psychology", "Geography", "History", "Philosophy",
            "Computer Science", "Visual Arts", "Theatre", "Music", "Film",
        ],
    },
    SubjectEntry {
        board: Board::CambridgeIgcse,
        grades: 1..=5,
        subjects: &[
            "Mathematics", "English", "Science", "Social Studies", "ICT", "Art & Design",
            "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::CambridgeIgcse,
        grades: 6..=8,
        subjects: &[
            "Mathematics", "English", "Science", "Social Studies", "ICT", "Art & Design",
            "Physical Education", "French", "Spanish",
        ],
    },
    SubjectEntry {
        board: Board::CambridgeIgcse,
        grades: 9..=10,
        subjects: &[
            "Mathematics", "English First Language", "English Literature", "Physics", "Chemistry",
            "Biology", "Computer Science", "Economics", "Business Studies", "Accounting",
            "Geography", "History", "Art & Design", "Music", "Physical Education", "French",
            "Spanish", "Additional Mathematics",
        ],
    },
    SubjectEntry {
        board: Board::CambridgeIgcse,
        grades: 11..=12,
        subjects: &[
            "Mathematics", "Further Mathematics", "Physics", "Chemistry", "Biology",
            "Computer Science", "Economics", "Business", "Accounting", "Geography", "History",
            "Psychology", "Sociology", "Art & Design", "Music", "Physical Education",
            "English Language", "English Literature",
        ],
    },
    SubjectEntry {
        board: Board::StateBoard,
        grades: 1..=2,
        subjects: &[
            "Mathematics", "English", "Mother Tongue", "EVS (Environmental Studies)",
            "GK (General Knowledge)", "Art & Craft", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::StateBoard,
        grades: 3..=5,
        subjects: &[
            "Mathematics", "English", "Mother Tongue", "EVS (Environmental Studies)",
            "Computer Science", "GK (General Knowledge)", "Art & Craft", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::StateBoard,
        grades: 6..=8,
        subjects: &[
            "Mathematics", "English", "Mother Tongue", "Science", "Social Science",
            "Computer Science", "Physical Education",
        ],
    },
    SubjectEntry {
        board: Board::StateBoard,
        grades: 9..=10,
        subjects: &[
            "Mathematics", "English", "Mother Tongue", "Science", "Social Science",
            "Computer Science", "Physical Education", "Vocational Subjects",
        ],
    },
    SubjectEntry {
        board: Board::StateBoard,
        grades: 11..=12,
        subjects: &[
            "Mathematics", "Physics", "Chemistry", "Biology", "English", "Computer Science",
            "Economics", "Commerce", "Accountancy", "Business Studies", "Political Science",
            "Geography", "History", "Psychology", "Sociology", "Agriculture", "Home Science",
        ],
    },
];
