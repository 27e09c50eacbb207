// PDF出力（問題用・解答用の2種類）

use crate::mock_test::{Answer, GeneratedTest, QuestionKind};
use log::{debug, info};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

// A4（mm）
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.4;
// Helveticaの平均文字幅（em比）。少し広めに見積もる
const CHAR_WIDTH_EM: f32 = 0.52;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;
const OPTION_INDENT: f32 = 8.0;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Error creating PDF: {0}")]
    Render(String),
    #[error("Failed to write PDF {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 文書を構成する要素
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    Paragraph {
        label: Option<String>,
        text: String,
        indent: f32,
    },
    Bullet(String),
    /// 余白（pt）
    Spacer(f32),
}

impl Block {
    fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Block::Paragraph {
            label: Some(label.into()),
            text: text.into(),
            indent: 0.0,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Block::Paragraph {
            label: None,
            text: text.into(),
            indent: 0.0,
        }
    }
}

/// 1行に配置する文字列片
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub x: f32,
}

/// 配置済みの1行（yはベースライン、mm）
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub y: f32,
    pub size: f32,
    pub runs: Vec<Run>,
}

pub type Page = Vec<PlacedLine>;

/// 問題用PDFの内容
pub fn questions_blocks(test: &GeneratedTest) -> Vec<Block> {
    let info = &test.test_info;
    let mut blocks = vec![
        Block::Title("Mock Test Generated".to_string()),
        Block::Title(format!("{} Mock Test", or_default(&info.subject, "Subject"))),
        Block::plain(format!(
            "Board: {} | Grade: {} | Topic: {}",
            or_default(&info.board, "N/A"),
            or_default(&info.grade, "N/A"),
            or_default(&info.topic, "N/A")
        )),
        Block::Spacer(20.0),
        Block::Heading("Instructions:".to_string()),
        Block::Bullet("Read all questions carefully".to_string()),
        Block::Bullet("Choose the best answer for multiple choice questions".to_string()),
        Block::Bullet("Write clearly for descriptive answers".to_string()),
        Block::Bullet("Manage your time effectively".to_string()),
        Block::Spacer(20.0),
    ];

    for (index, question) in test.questions.iter().enumerate() {
        blocks.push(Block::labeled(
            format!("Question {}:", index + 1),
            question.question.as_str(),
        ));
        if question.kind == QuestionKind::Mcq {
            for (key, option) in &question.options {
                blocks.push(Block::Paragraph {
                    label: Some(format!("{})", key)),
                    text: option.clone(),
                    indent: OPTION_INDENT,
                });
            }
        }
        blocks.push(Block::Spacer(15.0));
    }

    blocks
}

/// 解答用PDFの内容
pub fn answers_blocks(test: &GeneratedTest) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("Mock Test - Answer Key".to_string()),
        Block::Heading(format!(
            "{} Mock Test Answers",
            or_default(&test.test_info.subject, "Subject")
        )),
        Block::Spacer(20.0),
    ];

    for (index, question) in test.questions.iter().enumerate() {
        blocks.push(Block::labeled(
            format!("Question {}:", index + 1),
            question.question.as_str(),
        ));
        match question.answer() {
            Some(Answer::Correct(answer)) => blocks.push(Block::labeled("Correct Answer:", answer)),
            Some(Answer::Sample(answer)) => blocks.push(Block::labeled("Sample Answer:", answer)),
            None => {}
        }
        if let Some(explanation) = question.explanation() {
            blocks.push(Block::labeled("Explanation:", explanation));
        }
        blocks.push(Block::Spacer(15.0));
    }

    blocks
}

fn or_default<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() { fallback } else { text }
}

/// 組み込みフォント（WinAnsi）で表示できない文字を置き換える
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(' '),
            ' '..='~' | '\u{A0}'..='\u{FF}' => out.push(c),
            // cp1252 の 0x80〜0x9F に割り当てられた記号
            '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž'
            | '‘' | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž'
            | 'Ÿ' => out.push(c),
            '′' => out.push('\''),
            '″' => out.push('"'),
            '−' => out.push('-'),
            '√' => out.push_str("sqrt"),
            'π' => out.push_str("pi"),
            '≤' => out.push_str("<="),
            '≥' => out.push_str(">="),
            '≠' => out.push_str("!="),
            '≈' => out.push_str("~="),
            '→' => out.push_str("->"),
            '∞' => out.push_str("inf"),
            _ => out.push('?'),
        }
    }
    out
}

/// 単語単位で折り返す（1語が長すぎる場合は文字単位で分割）
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current.is_empty() {
            current = word.into_iter().collect();
        } else if current_len + 1 + word.len() <= max_chars {
            current.push(' ');
            current.extend(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.into_iter().collect()));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn char_width(size: f32) -> f32 {
    size * PT_TO_MM * CHAR_WIDTH_EM
}

fn max_chars(size: f32, width: f32) -> usize {
    (width / char_width(size)).floor() as usize
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * char_width(size)
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Cursor {
            pages: vec![Vec::new()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn place(&mut self, size: f32, runs: Vec<Run>) {
        let line_height = size * LINE_SPACING * PT_TO_MM;
        if self.y - line_height < MARGIN {
            self.new_page();
        }
        self.y -= line_height;
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                y: self.y,
                size,
                runs,
            });
        }
    }

    fn space(&mut self, points: f32) {
        self.y -= points * PT_TO_MM;
        if self.y < MARGIN {
            self.new_page();
        }
    }
}

/// A4ページに行を配置する（改ページ込み）
pub fn layout(blocks: &[Block]) -> Vec<Page> {
    let mut cursor = Cursor::new();
    let width = PAGE_WIDTH - 2.0 * MARGIN;

    for block in blocks {
        match block {
            Block::Title(text) | Block::Heading(text) => {
                let centered = matches!(block, Block::Title(_));
                let size = if centered { TITLE_SIZE } else { HEADING_SIZE };
                for line in wrap_text(&sanitize(text), max_chars(size, width)) {
                    // タイトルは中央寄せ
                    let x = if centered {
                        ((PAGE_WIDTH - text_width(&line, size)) / 2.0).max(MARGIN)
                    } else {
                        MARGIN
                    };
                    cursor.place(size, vec![Run { text: line, bold: true, x }]);
                }
                cursor.space(6.0);
            }
            Block::Paragraph {
                label,
                text,
                indent,
            } => {
                let x = MARGIN + indent;
                let text = sanitize(text);
                let label = label.as_deref().map(sanitize);
                let combined = match &label {
                    Some(label) => format!("{} {}", label, text),
                    None => text,
                };

                let lines = wrap_text(&combined, max_chars(BODY_SIZE, width - indent));
                for (index, line) in lines.into_iter().enumerate() {
                    let runs = match (&label, index) {
                        (Some(label), 0) if line.starts_with(label.as_str()) => {
                            let rest = line[label.len()..].trim_start().to_string();
                            let mut runs = vec![Run {
                                text: label.clone(),
                                bold: true,
                                x,
                            }];
                            if !rest.is_empty() {
                                runs.push(Run {
                                    text: rest,
                                    bold: false,
                                    x: x + text_width(label, BODY_SIZE) + char_width(BODY_SIZE),
                                });
                            }
                            runs
                        }
                        _ => vec![Run {
                            text: line,
                            bold: false,
                            x,
                        }],
                    };
                    cursor.place(BODY_SIZE, runs);
                }
            }
            Block::Bullet(text) => {
                let line_text = format!("* {}", sanitize(text));
                for (index, line) in wrap_text(&line_text, max_chars(BODY_SIZE, width - 4.0))
                    .into_iter()
                    .enumerate()
                {
                    let x = if index == 0 { MARGIN } else { MARGIN + 4.0 };
                    cursor.place(BODY_SIZE, vec![Run { text: line, bold: false, x }]);
                }
            }
            Block::Spacer(points) => cursor.space(*points),
        }
    }

    // 末尾の空ページは捨てる
    if cursor.pages.len() > 1 && cursor.pages.last().is_some_and(|page| page.is_empty()) {
        cursor.pages.pop();
    }
    cursor.pages
}

fn render_error<E: std::fmt::Debug>(error: E) -> PdfError {
    PdfError::Render(format!("{:?}", error))
}

/// 配置済みの行をPDFのバイト列にする
pub fn render_pdf(title: &str, blocks: &[Block]) -> Result<Vec<u8>, PdfError> {
    let pages = layout(blocks);
    debug!("PDFページ数: {}", pages.len());

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in page {
            for run in &line.runs {
                let font = if run.bold { &bold } else { &regular };
                layer.use_text(run.text.clone(), line.size, Mm(run.x), Mm(line.y), font);
            }
        }
    }

    doc.save_to_bytes().map_err(render_error)
}

async fn write_pdf(path: PathBuf, title: &str, blocks: &[Block]) -> Result<PathBuf, PdfError> {
    let bytes = render_pdf(title, blocks)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| PdfError::Write {
                path: path.clone(),
                source,
            })?;
    }
    fs::write(&path, bytes)
        .await
        .map_err(|source| PdfError::Write {
            path: path.clone(),
            source,
        })?;

    info!("📄 PDF保存完了: {}", path.display());
    Ok(path)
}

/// 問題のみのPDFを書き出す
pub async fn write_questions_pdf(
    test: &GeneratedTest,
    output_dir: &Path,
    stem: &str,
) -> Result<PathBuf, PdfError> {
    let path = output_dir.join(format!("{}_questions.pdf", stem));
    let title = format!("{} Mock Test", test.test_info.subject);
    write_pdf(path, &title, &questions_blocks(test)).await
}

/// 解答のみのPDFを書き出す
pub async fn write_answers_pdf(
    test: &GeneratedTest,
    output_dir: &Path,
    stem: &str,
) -> Result<PathBuf, PdfError> {
    let path = output_dir.join(format!("{}_answers.pdf", stem));
    let title = format!("{} Mock Test Answers", test.test_info.subject);
    write_pdf(path, &title, &answers_blocks(test)).await
}
