// プロンプトテンプレートを管理するモジュール

use super::GenerationRequest;
use crate::curriculum::{self, Board, Grade};
use crate::paper::QuestionMix;

// テンプレート変数のタイプ
pub type TemplateVariables = Vec<(String, String)>;

// プロンプトに載せるカリキュラム単元の上限
const CURRICULUM_CONTEXT_LIMIT: usize = 10;

// テンプレート内の変数を置換
// 置換後の値は再走査しない（入力に含まれる {{...}} はそのまま残る）
pub fn render_template(template: &str, variables: &TemplateVariables) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            variables
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| (value, end))
        });

        match value {
            Some((value, end)) => {
                rendered.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                rendered.push_str("{{");
                rest = after;
            }
        }
    }
    rendered.push_str(rest);

    rendered
}

// 学年ごとの認知発達レベル
fn grade_development(grade: Grade) -> &'static str {
    match grade.value() {
        1 => "Basic recognition, simple vocabulary, concrete concepts, visual learning",
        2 => "Simple sentences, basic operations, pattern recognition, foundational skills",
        3 => "Expanded vocabulary, multi-step processes, comparison skills, basic analysis",
        4 => "Complex sentences, problem-solving, categorization, logical reasoning",
        5 => "Abstract thinking begins, detailed explanations, cause-effect relationships",
        6 => "Advanced vocabulary, multi-step problems, analytical thinking, applications",
        7 => "Complex concepts, critical thinking, detailed analysis, practical applications",
        8 => "Abstract reasoning, sophisticated vocabulary, advanced problem-solving",
        9 => "High-level analysis, complex applications, preparation for advanced study",
        10 => "Board exam preparation, advanced concepts, comprehensive understanding",
        11 => "Pre-university level, specialized knowledge, research-based learning",
        _ => "University preparation, expert-level understanding, independent analysis",
    }
}

const GUIDELINES_TEMPLATE: &str = r#"
BOARD: {{board}}
{{philosophy}}
Language: {{language}}
Examples: {{examples}}
Assessment Style: {{assessment}}

{{grade_heading}} LEVEL:
Cognitive Development: {{development}}

TOPIC: "{{topic}}"
Focus: All questions must be specifically about "{{topic}}" as taught in {{board}} {{grade_label}} {{subject}}
Complexity: Match {{board}} {{grade_label}} examination standards
Context: Use {{examples}} where appropriate
Language: {{language}} terminology and style
"#;

/// 教育委員会・学年・単元に応じた出題ガイドライン
pub fn board_guidelines(board: Board, grade: Grade, subject: &str, topic: &str) -> String {
    let profile = board.profile();

    let variables: TemplateVariables = vec![
        ("board".to_string(), board.to_string()),
        ("philosophy".to_string(), profile.philosophy.to_string()),
        ("language".to_string(), profile.language.to_string()),
        ("examples".to_string(), profile.examples.to_string()),
        ("assessment".to_string(), profile.assessment.to_string()),
        ("grade_heading".to_string(), grade.label(board).to_uppercase()),
        ("grade_label".to_string(), grade.label(board)),
        ("development".to_string(), grade_development(grade).to_string()),
        ("topic".to_string(), topic.to_string()),
        ("subject".to_string(), subject.to_string()),
    ];

    render_template(GUIDELINES_TEMPLATE, &variables)
}

const GENERATION_TEMPLATE: &str = r#"Create a {{board}} {{grade_label}} {{subject}} test on "{{topic}}" using {{paper_type}} format.

{{guidelines}}
{{curriculum_context}}

Generate exactly:
- {{mcq_count}} multiple choice questions (if any)
- {{short_count}} short answer questions (if any)
- {{long_count}} long answer questions (if any)

IMPORTANT: All questions MUST be specifically about "{{topic}}" as taught in {{board}} {{grade_label}} {{subject}} curriculum. Use examples, terminology, and difficulty level appropriate for {{board}} {{grade_label}} students.

Question Types:
- MCQ: 4 options (A, B, C, D) with one correct answer
- Short Answer: 2-5 sentence responses
- Long Answer: Detailed explanations or essay-type responses

CRITICAL: Respond with ONLY valid JSON. No markdown, no extra text, no explanations - just pure JSON.

{
    "test_info": {
        "board": "{{board}}",
        "grade": "{{grade}}",
        "subject": "{{subject}}",
        "topic": "{{topic}}",
        "paper_type": "{{paper_type}}",
        "total_questions": {{total_questions}},
        "mcq_count": {{mcq_count}},
        "short_count": {{short_count}},
        "long_count": {{long_count}},
        "show_answers_on_screen": {{show_answers}}
    },
    "questions": [
        {
            "question_number": 1,
            "type": "mcq",
            "question": "Sample MCQ question about {{topic}}?",
            "options": {
                "A": "Option A",
                "B": "Option B",
                "C": "Option C",
                "D": "Option D"
            },
            "correct_answer": "A",
            "explanation": "Brief explanation"
        },
        {
            "question_number": 2,
            "type": "short",
            "question": "Sample short answer question about {{topic}}?",
            "sample_answer": "Expected short answer",
            "marks": 3
        },
        {
            "question_number": 3,
            "type": "long",
            "question": "Sample long answer question about {{topic}}?",
            "sample_answer": "Expected detailed answer",
            "marks": 6
        }
    ]
}"#;

/// 問題生成用プロンプトを組み立てる
pub fn build_prompt(request: &GenerationRequest, mix: QuestionMix) -> String {
    let curriculum_topics = curriculum::topics(request.board, request.grade, &request.subject);
    let curriculum_context = if curriculum_topics.is_empty() {
        String::new()
    } else {
        let listed: Vec<&str> = curriculum_topics
            .iter()
            .copied()
            .take(CURRICULUM_CONTEXT_LIMIT)
            .collect();
        format!(
            "\nCURRICULUM TOPICS for {} {} {}: {}",
            request.board,
            request.grade.label(request.board),
            request.subject,
            listed.join(", ")
        )
    };

    let variables: TemplateVariables = vec![
        ("board".to_string(), request.board.to_string()),
        ("grade_label".to_string(), request.grade.label(request.board)),
        ("grade".to_string(), request.grade.to_string()),
        ("subject".to_string(), request.subject.clone()),
        ("topic".to_string(), request.topic.clone()),
        ("paper_type".to_string(), request.paper_type.clone()),
        (
            "guidelines".to_string(),
            board_guidelines(request.board, request.grade, &request.subject, &request.topic),
        ),
        ("curriculum_context".to_string(), curriculum_context),
        ("mcq_count".to_string(), mix.mcq.to_string()),
        ("short_count".to_string(), mix.short.to_string()),
        ("long_count".to_string(), mix.long.to_string()),
        ("total_questions".to_string(), mix.total().to_string()),
        ("show_answers".to_string(), request.show_answers.to_string()),
    ];

    render_template(GENERATION_TEMPLATE, &variables)
}
