//! # Folium
//!
//! Foliumは、転写された手稿コーパスを解析するための共有基盤です。
//!
//! ## 概要
//!
//! このライブラリは、タブ区切りの転写ファイルを型付きトークン列として
//! 読み込むトークンストアと、各トークン文字列をPREFIX・MIDDLE・SUFFIXの
//! 三要素に決定論的に分解する形態素セグメンターを提供します。
//! 分解規則は一つのバージョン付き不変テーブルに集約されており、
//! 下流のすべての統計解析が同一の規則を共有します。
//!
//! ## 主な機能
//!
//! - **遅延トークンストリーム**: 転写者・言語・ワイルドカードによる
//!   標準フィルタを適用した型付き[`Token`]の遅延列挙
//! - **決定論的セグメンテーション**: 最長一致規則による
//!   接頭辞・中核・接尾辞の分解
//! - **MIDDLEインベントリ**: コーパス全体のMIDDLE頻度表と
//!   複合語判定フラグの構築
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folium::{FilterConfig, MorphTable, Segmenter, Transcript};
//!
//! let corpus = "\
//! word\tfolio\tsection\tquire\tlanguage\tplacement\tline_number\ttranscriber\tline_initial\tline_final
//! daiin\tf1r\tH\tA\tA\tP1\t1\tH\t1\t0
//! \"chedy\"\tf1r\tH\tA\tA\tP1\t1\tH\t0\t1";
//!
//! let transcript = Transcript::from_reader(corpus.as_bytes())?;
//! let config = FilterConfig::default();
//!
//! let words: Vec<String> = transcript
//!     .tokens(&config)
//!     .map(|t| t.word.clone())
//!     .collect();
//! assert_eq!(words, vec!["daiin", "chedy"]);
//!
//! let segmenter = Segmenter::new(MorphTable::standard());
//! let result = segmenter.segment("chody");
//! assert_eq!(result.prefix, Some("ch"));
//! assert_eq!(result.middle, "o");
//! assert_eq!(result.suffix, Some("dy"));
//! # Ok(())
//! # }
//! ```

/// 転写ファイルの読み込みと行レコードの正規化
pub mod corpus;

/// エラー型の定義
pub mod errors;

/// MIDDLEインベントリの構築
pub mod inventory;

/// 形態素テーブルとセグメンター
pub mod morph;

/// フィルタ付きトークンストリーム
pub mod stream;

/// 型付きトークンの定義
pub mod token;

/// 内部ユーティリティ関数
pub mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use corpus::Transcript;
pub use inventory::MiddleInventory;
pub use morph::{FallbackPolicy, MorphResult, Segmenter};
pub use morph::table::MorphTable;
pub use stream::{group_by_line, FilterConfig, TokenStream};
pub use token::{Language, Token, Zone};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
