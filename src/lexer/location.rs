//! ソース上の位置情報

use serde::{Deserialize, Serialize};
use std::fmt;

/// トークンに付与される位置情報（1始まりの行・列）
///
/// 診断メッセージのためだけに使用され、構文解析の判断には影響しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file_path: String,
    pub row: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file_path: impl Into<String>, row: usize, column: usize) -> Self {
        Self {
            file_path: file_path.into(),
            row,
            column,
        }
    }

    /// 同じ行で `offset` 列だけ右にずらした位置を返す
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            file_path: self.file_path.clone(),
            row: self.row,
            column: self.column + offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.row, self.column)
    }
}
