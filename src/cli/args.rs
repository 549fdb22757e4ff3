// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use super::value_enum::{CliDiagnosticStyle, CliLayout, CliReportFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "muembed",
    version = crate::VERSION,
    about = "mu 形式 C ライブラリの単一ファイル結合ツール",
    long_about = "カタログに記述されたモジュールを依存順に埋め込み、インクルードガードの重複を除去して単一ファイルを生成します。\n\
                  同じガードシンボルが異なるバージョンで埋め込まれた場合は警告を出しますが、処理は継続します。"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// カタログファイル (YAML / JSON)
    #[arg(
        long,
        short = 'c',
        global = true,
        default_value = "muembed.yaml",
        value_hint = ValueHint::FilePath,
        help_heading = "入力"
    )]
    pub catalog: PathBuf,

    /// 対象ターゲット（カンマ区切り/複数指定可, 省略時は全ターゲット）
    #[arg(long, short = 't', global = true, value_delimiter = ',', help_heading = "入力")]
    pub target: Vec<String>,

    /// バージョン不一致の警告を抑制する（埋め込み結果は変わらない）
    #[arg(long, global = true, help_heading = "検査")]
    pub no_version_check: bool,

    /// 警告の表示形式
    #[arg(long, value_enum, global = true, default_value = "text", help_heading = "検査")]
    pub diagnostics: CliDiagnosticStyle,

    /// 出力レイアウト
    #[arg(long, value_enum, global = true, default_value = "sectioned", help_heading = "出力")]
    pub layout: CliLayout,

    /// 不一致を #pragma message として出力ファイルにも書き込む
    #[arg(long, global = true, help_heading = "出力")]
    pub annotate_mismatches: bool,

    /// 出力先ディレクトリ（相対パスのターゲット出力はここを基準に解決）
    #[arg(
        long,
        short = 'o',
        global = true,
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help_heading = "出力"
    )]
    pub out_dir: PathBuf,

    /// ファイルではなく標準出力へ書き出す
    #[arg(long, global = true, help_heading = "出力")]
    pub stdout: bool,

    /// plan の表示形式
    #[arg(long, value_enum, global = true, default_value = "table", help_heading = "出力")]
    pub format: CliReportFormat,

    /// 詳細ログ（-v: info, -vv: debug, -vvv: trace）
    #[arg(long, short = 'v', global = true, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログと要約を表示しない
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// ターゲットを結合して書き出す（既定）
    Assemble,
    /// 書き出さずにバージョン不一致だけを検査する
    Check,
    /// 各ターゲットで埋め込まれる/スキップされるモジュールを表示する
    Plan,
}

impl Args {
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Assemble)
    }
}
