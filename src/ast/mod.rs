//! パーサーが生成するレコード
//!
//! 文の木はまだ構築しない。解析結果はファイル内の関数宣言の一覧で、
//! 各関数は本体を未解析のトークン列として保持する。

mod declarations;

pub use declarations::Function;
