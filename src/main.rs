// mock-test-generator - カリキュラムに沿った模擬テストを生成し、PDFに出力するツール
// Rust版実装

mod config;
mod curriculum;
mod llm;
mod mock_test;
mod paper;
mod pdf;
mod render;
mod validation;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{error, info, warn};
use simple_logger::SimpleLogger;

use config::{ApiArgs, ApiConfig, KeyStatus};
use curriculum::{Board, CurriculumError, Grade};
use llm::GenerationRequest;
use mock_test::GeneratedTest;
use validation::{SelectionSummary, TopicValidation};

// コマンドライン引数の定義

#[derive(Parser, Debug)]
#[clap(
    name = "mock-test-generator",
    about = "教育委員会・学年・科目・単元に合わせた模擬テストを生成するツール",
    version = "1.0.0"
)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// 保存先ディレクトリ
    #[clap(long, env = "OUTPUT_DIR", default_value = "mock_tests", global = true)]
    output_dir: PathBuf,

    /// デバッグログを表示
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 教育委員会の一覧
    Boards,
    /// 学年の一覧
    Grades {
        #[clap(long)]
        board: Board,
    },
    /// 開講科目の一覧
    Subjects {
        #[clap(long)]
        board: Board,
        #[clap(long)]
        grade: Grade,
    },
    /// カリキュラム単元の一覧
    Topics {
        #[clap(long)]
        board: Board,
        #[clap(long)]
        grade: Grade,
        #[clap(long)]
        subject: String,
    },
    /// 試験形式の一覧
    Papers {
        #[clap(long)]
        board: Board,
        #[clap(long)]
        grade: Grade,
    },
    /// 入力内容とトピックの検証
    Validate(Selection),
    /// 模擬テストを生成
    Generate {
        #[clap(flatten)]
        selection: Selection,

        /// 試験形式（番号またはラベル。省略時は先頭）
        #[clap(long)]
        paper: Option<String>,

        /// 画面に解答を表示
        #[clap(long)]
        show_answers: bool,

        /// PDFを出力しない
        #[clap(long)]
        no_pdf: bool,

        #[clap(flatten)]
        api: ApiArgs,
    },
    /// 保存済みテストを再表示・PDF再出力
    Export {
        /// 保存済みテストのJSON
        path: PathBuf,

        /// 画面に解答を表示
        #[clap(long)]
        show_answers: bool,

        /// PDFを出力しない
        #[clap(long)]
        no_pdf: bool,
    },
    /// APIキーと接続の確認
    CheckApi {
        #[clap(flatten)]
        api: ApiArgs,
    },
    /// カリキュラムの統計
    Stats,
}

/// 教育委員会・学年・科目・トピックの選択
#[derive(clap::Args, Debug, Clone)]
struct Selection {
    #[clap(long)]
    board: Board,
    #[clap(long)]
    grade: Grade,
    #[clap(long)]
    subject: String,
    #[clap(long)]
    topic: String,
}

// 選択内容の検証結果
struct CheckedSelection {
    subject: &'static str,
    validation: TopicValidation,
    summary: SelectionSummary,
}

fn check_selection(selection: &Selection) -> Result<CheckedSelection> {
    let subject = curriculum::resolve_subject(selection.board, selection.grade, &selection.subject)?;
    let topic = selection.topic.trim();
    if topic.is_empty() {
        return Err(CurriculumError::EmptyTopic.into());
    }

    let validation = validation::validate_topic(selection.board, selection.grade, subject, topic);
    let summary = SelectionSummary::build(
        selection.board,
        selection.grade,
        subject,
        topic,
        validation.valid,
    );

    Ok(CheckedSelection {
        subject,
        validation,
        summary,
    })
}

fn print_validation(selection: &Selection, checked: &CheckedSelection) {
    print!("{}", render::render_summary(&checked.summary));
    print!(
        "{}",
        render::render_validation(selection.topic.trim(), checked.subject, &checked.validation)
    );
}

// JSONのファイル名（拡張子なし）をPDFのファイル名に使う
fn stem_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("mock_test")
        .to_string()
}

async fn export_pdfs(test: &GeneratedTest, output_dir: &Path, stem: &str) -> Result<()> {
    let questions = pdf::write_questions_pdf(test, output_dir, stem).await?;
    let answers = pdf::write_answers_pdf(test, output_dir, stem).await?;
    println!("📄 Questions PDF: {}", questions.display());
    println!("📄 Answers PDF: {}", answers.display());
    Ok(())
}

async fn run_generate(
    selection: Selection,
    paper_choice: Option<String>,
    show_answers: bool,
    no_pdf: bool,
    api: ApiArgs,
    output_dir: &Path,
) -> Result<()> {
    let checked = check_selection(&selection)?;
    print_validation(&selection, &checked);
    if !checked.summary.all_valid() {
        bail!("トピックがカリキュラムに一致しないため生成を中止しました");
    }

    let paper_type =
        paper::resolve_paper_type(selection.board, selection.grade, paper_choice.as_deref())?;
    let (description, duration) = paper::paper_details(paper_type);
    info!("📝 試験形式: {} ({}, {})", paper_type, description, duration);

    let client = llm::client::client_for(ApiConfig::from(api))?;
    info!("🤖 モデル: {}", client.config().model);
    let request = GenerationRequest {
        board: selection.board,
        grade: selection.grade,
        subject: checked.subject.to_string(),
        topic: selection.topic.trim().to_string(),
        paper_type: paper_type.to_string(),
        show_answers,
    };

    info!(
        "🚀 生成開始: {} {} {} - {}",
        request.board,
        request.grade.label(request.board),
        request.subject,
        request.topic
    );
    let test = match llm::generate_test(&client, &request).await {
        Ok(test) => test,
        Err(e) => {
            error!("❌ 生成エラー: {}", e);
            return Err(e.into());
        }
    };
    info!("✅ 生成完了: {} 問", test.questions.len());

    let saved = test.save(output_dir).await?;
    info!("💾 保存完了: {}", saved.display());

    println!("{}", render::render_test(&test));

    if !no_pdf {
        export_pdfs(&test, output_dir, &stem_of(&saved)).await?;
    }

    Ok(())
}

async fn run_export(path: &Path, show_answers: bool, no_pdf: bool, output_dir: &Path) -> Result<()> {
    let mut test = GeneratedTest::load(path).await?;
    info!("📂 読み込み完了: {} ({} 問)", path.display(), test.questions.len());

    if show_answers {
        test.test_info.show_answers_on_screen = true;
    }
    println!("{}", render::render_test(&test));

    if !no_pdf {
        export_pdfs(&test, output_dir, &stem_of(path)).await?;
    }
    Ok(())
}

async fn run_check_api(api: ApiArgs) -> Result<()> {
    let config = ApiConfig::from(api);
    let status = config.key_status();

    let mark = match status {
        KeyStatus::Ok => "✅",
        KeyStatus::UnexpectedFormat => "⚠️",
        KeyStatus::Missing | KeyStatus::Placeholder => "❌",
    };
    println!("{} {}", mark, status.describe());
    if let Some(preview) = config.key_preview() {
        println!("🔑 Key: {}", preview);
    }
    println!("🌐 Endpoint: {}", config.api_url);
    println!("🤖 Model: {}", config.model);

    if !status.is_usable() {
        bail!("APIキーが設定されていません (ANTHROPIC_API_KEY)");
    }

    let client = llm::client::client_for(config)?;
    info!("🔍 API接続を確認中...");
    match client.check_connection().await {
        Ok(message) => {
            println!("✅ {}", message);
            Ok(())
        }
        Err(e) => {
            error!("❌ 接続確認エラー: {}", e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .envファイルを読み込み
    dotenv().ok();

    // コマンドライン引数を解析
    let args = Args::parse();

    // ロガー初期化
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    match args.command {
        Command::Boards => print!("{}", render::render_boards()),
        Command::Grades { board } => print!("{}", render::render_grades(board)),
        Command::Subjects { board, grade } => {
            let subjects = curriculum::subjects(board, grade);
            print!("{}", render::render_subjects(board, grade, subjects));
        }
        Command::Topics {
            board,
            grade,
            subject,
        } => {
            let subject = curriculum::resolve_subject(board, grade, &subject)?;
            let topics = curriculum::topics(board, grade, subject);
            print!("{}", render::render_topics(board, grade, subject, topics));
        }
        Command::Papers { board, grade } => {
            let papers = paper::paper_types(board, grade);
            if papers.is_empty() {
                warn!("⚠️ 試験形式が見つかりません");
            }
            print!("{}", render::render_paper_types(board, grade, papers));
        }
        Command::Validate(selection) => {
            let checked = check_selection(&selection)?;
            print_validation(&selection, &checked);
        }
        Command::Generate {
            selection,
            paper,
            show_answers,
            no_pdf,
            api,
        } => {
            run_generate(selection, paper, show_answers, no_pdf, api, &args.output_dir).await?;
        }
        Command::Export {
            path,
            show_answers,
            no_pdf,
        } => {
            run_export(&path, show_answers, no_pdf, &args.output_dir).await?;
        }
        Command::CheckApi { api } => run_check_api(api).await?,
        Command::Stats => print!("{}", render::render_stats(&curriculum::statistics())),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let args = Args::try_parse_from([
            "mock-test-generator",
            "generate",
            "--board",
            "cbse",
            "--grade",
            "Grade 10",
            "--subject",
            "science",
            "--topic",
            "Electricity",
            "--paper",
            "2",
            "--api-key",
            "sk-ant-api03-test",
        ])
        .unwrap();

        match args.command {
            Command::Generate {
                selection,
                paper,
                api,
                ..
            } => {
                assert_eq!(selection.board, Board::Cbse);
                assert_eq!(selection.grade.value(), 10);
                assert_eq!(paper.as_deref(), Some("2"));
                assert_eq!(api.api_key.as_deref(), Some("sk-ant-api03-test"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_board() {
        assert!(Args::try_parse_from(["mock-test-generator", "grades", "--board", "Oxford"]).is_err());
    }

    #[test]
    fn test_check_selection_resolves_subject() {
        let selection = Selection {
            board: Board::Cbse,
            grade: Grade::new(10).unwrap(),
            subject: "mathematics".to_string(),
            topic: "Quadratic Equations".to_string(),
        };
        let checked = check_selection(&selection).unwrap();
        assert_eq!(checked.subject, "Mathematics");
        assert!(checked.summary.all_valid());
    }

    #[test]
    fn test_check_selection_rejects_empty_topic() {
        let selection = Selection {
            board: Board::Cbse,
            grade: Grade::new(10).unwrap(),
            subject: "Mathematics".to_string(),
            topic: "   ".to_string(),
        };
        let err = check_selection(&selection).err().unwrap();
        assert_eq!(
            err.downcast_ref::<CurriculumError>(),
            Some(&CurriculumError::EmptyTopic)
        );
    }

    #[test]
    fn test_stem_of() {
        assert_eq!(stem_of(Path::new("out/CBSE_10_Science_20240101_000000.json")), "CBSE_10_Science_20240101_000000");
    }
}
