//! フロントエンドのパイプライン管理モジュール
//!
//! このモジュールは、ソースファイルの読み込み（拡張子の検査を含む）と
//! 字句解析・構文解析の実行を受け持ちます。エラーは最初の1つで処理を打ち切り、
//! 呼び出し元に返します。

use crate::ast::Function;
use crate::error::{RillError, RillResult};
use crate::lexer::{Lexer, Token};
use crate::parser::Parser;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::fs;
use std::path::Path;

/// Rillソースファイルの拡張子
pub const SOURCE_EXTENSION: &str = "rill";

/// コンパイル状態を管理する構造体
pub struct CompilationState {
    pub source_file: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
}

impl CompilationState {
    /// ファイルからコンパイル状態を作成
    pub fn new<P: AsRef<Path>>(source_file: P) -> RillResult<Self> {
        let path = source_file.as_ref();
        let source_file_str = path.display().to_string();

        if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            return Err(RillError::InvalidExtension {
                path: source_file_str,
                expected: SOURCE_EXTENSION,
            });
        }

        let source = fs::read_to_string(path).map_err(|e| RillError::Io {
            path: source_file_str.clone(),
            message: e.to_string(),
        })?;

        Self::new_from_string(&source_file_str, source)
    }

    /// 文字列からコンパイル状態を作成（テスト用）
    pub fn new_from_string(filename: &str, source: String) -> RillResult<Self> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(filename.to_string(), source.clone());

        Ok(Self {
            source_file: filename.to_string(),
            source,
            files,
            file_id,
        })
    }

    /// codespan-reportingで診断情報を報告
    pub fn report_diagnostic(&self, error: &RillError) -> RillResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        let diagnostic = error.to_diagnostic(self.file_id, &self.source);

        let mut lock = writer.lock();
        codespan_reporting::term::emit(&mut lock, &config, &self.files, &diagnostic)
            .map_err(|e| RillError::Other(format!("Failed to emit diagnostic: {}", e)))
    }
}

/// フロントエンドのパイプライン
pub struct CompilationPipeline {
    state: CompilationState,
}

impl CompilationPipeline {
    /// 新しいパイプラインを作成
    pub fn new(state: CompilationState) -> Self {
        Self { state }
    }

    /// コンパイル状態への参照を取得
    pub fn state(&self) -> &CompilationState {
        &self.state
    }

    /// レキシカル解析を実行
    pub fn tokenize(&self) -> RillResult<Vec<Token>> {
        log::debug!("Starting lexical analysis of {}", self.state.source_file);
        let tokens = Lexer::new(&self.state.source, self.state.source_file.as_str()).tokenize()?;
        Ok(tokens)
    }

    /// 構文解析を実行
    pub fn parse(&self, tokens: Vec<Token>) -> RillResult<Vec<Function>> {
        log::debug!("Starting parsing of {} tokens", tokens.len());
        let functions = Parser::new(tokens).parse()?;
        log::debug!("Found {} function declarations", functions.len());
        Ok(functions)
    }

    /// 字句解析から構文解析までを実行
    pub fn run(&self) -> RillResult<Vec<Function>> {
        let tokens = self.tokenize()?;
        self.parse(tokens)
    }
}
