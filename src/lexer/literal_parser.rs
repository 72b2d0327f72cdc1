//! 引用符で囲まれたリテラルの切り出し
//!
//! エスケープシーケンスは扱わない。どちらのリテラルも1行の中で閉じる必要がある。

/// 開き `"` の直後から閉じ `"` の直前までを返す。閉じていなければ `None`
pub(crate) fn scan_string(rest: &str) -> Option<&str> {
    rest.find('"').map(|end| &rest[..end])
}

/// 開き `'` の直後の1文字を返す。ちょうど1文字で閉じていなければ `None`
pub(crate) fn scan_char(rest: &str) -> Option<char> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('\'')) if c != '\'' => Some(c),
        _ => None,
    }
}
