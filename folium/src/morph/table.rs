//! 形態素候補テーブル
//!
//! このモジュールは、セグメンテーションに使用される接頭辞・接尾辞の
//! 候補リストを保持する、バージョン付きの不変テーブルを提供します。
//! 歴史的に約20のスクリプトへ複製されていたインラインの候補リストを
//! 一つの監査可能な値へ集約したものであり、構築後は決して変更されず、
//! 参照によってすべてのセグメンター呼び出しに共有されます。

use std::cmp::Reverse;

use crate::errors::{FoliumError, Result};

/// 標準テーブルのバージョン識別子
pub const STANDARD_TABLE_VERSION: &str = "1";

/// 標準の接頭辞候補（挿入順がタイブレーク順になります）
const STANDARD_PREFIXES: &[&str] = &[
    "qok", "qot", "qo", "ch", "sh", "ok", "ot", "ol", "or", "o", "d", "s", "y", "q", "k", "t",
];

/// 標準の接尾辞候補（挿入順がタイブレーク順になります）
const STANDARD_SUFFIXES: &[&str] = &[
    "aiin", "ain", "iin", "edy", "eey", "dy", "ey", "in", "ol", "or", "al", "ar", "am", "y", "o",
    "n", "r", "l", "m",
];

/// セグメンテーション規則を定める不変の候補テーブル
///
/// 候補リストは構築時に長さ降順へ安定ソートされます（同長の候補は
/// 挿入順を保ちます）。この順序は最長一致規則の一部であり、`"ch"` と
/// `"c"` のような重なり合う候補が常に同じ結果へ解決されることを
/// 保証します。
///
/// An immutable, versioned candidate table shared by reference across
/// all segmenter calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphTable {
    version: String,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl MorphTable {
    /// 候補リストから新しいテーブルを構築します。
    ///
    /// # 引数
    ///
    /// * `version` - このテーブルのバージョン識別子
    /// * `prefixes` - 接頭辞候補（挿入順がタイブレーク順）
    /// * `suffixes` - 接尾辞候補（挿入順がタイブレーク順）
    ///
    /// # 戻り値
    ///
    /// 成功時は `Ok(MorphTable)` を返します。
    ///
    /// # エラー
    ///
    /// いずれかのリストが空の場合、または空文字列の候補を含む場合に
    /// エラーを返します。
    pub fn new<V, P, S>(version: V, prefixes: P, suffixes: S) -> Result<Self>
    where
        V: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        let suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();

        if prefixes.is_empty() {
            return Err(FoliumError::invalid_argument(
                "prefixes",
                "must contain at least one candidate",
            ));
        }
        if suffixes.is_empty() {
            return Err(FoliumError::invalid_argument(
                "suffixes",
                "must contain at least one candidate",
            ));
        }
        if prefixes.iter().chain(&suffixes).any(|c| c.is_empty()) {
            return Err(FoliumError::invalid_argument(
                "candidates",
                "must not contain empty strings",
            ));
        }

        Ok(Self::build(version.into(), prefixes, suffixes))
    }

    /// 標準のバージョン付きテーブルを返します。
    ///
    /// これが各解析スクリプトから重複を排して集約された、唯一の正準
    /// 候補リストです。テーブルの変更は必ずこの定数とバージョン識別子の
    /// 更新を通して行われます。
    pub fn standard() -> Self {
        Self::build(
            STANDARD_TABLE_VERSION.to_string(),
            STANDARD_PREFIXES.iter().map(|s| s.to_string()).collect(),
            STANDARD_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn build(version: String, mut prefixes: Vec<String>, mut suffixes: Vec<String>) -> Self {
        // Stable sort: ties keep insertion order, which is part of the
        // longest-match contract.
        prefixes.sort_by_key(|c| Reverse(c.len()));
        suffixes.sort_by_key(|c| Reverse(c.len()));
        Self {
            version,
            prefixes,
            suffixes,
        }
    }

    /// テーブルのバージョン識別子を返します。
    #[inline(always)]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// 長さ降順に整列された接頭辞候補を返します。
    #[inline(always)]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// 長さ降順に整列された接尾辞候補を返します。
    #[inline(always)]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_by_length_descending() {
        let table = MorphTable::new("test", ["c", "ch", "sh"], ["y", "dy"]).unwrap();
        assert_eq!(table.prefixes(), &["ch", "sh", "c"]);
        assert_eq!(table.suffixes(), &["dy", "y"]);
    }

    #[test]
    fn test_new_preserves_insertion_order_on_ties() {
        let table = MorphTable::new("test", ["ok", "ot", "ch"], ["y"]).unwrap();
        assert_eq!(table.prefixes(), &["ok", "ot", "ch"]);
    }

    #[test]
    fn test_new_rejects_empty_lists() {
        let empty: [&str; 0] = [];
        assert!(MorphTable::new("test", empty, ["y"]).is_err());
        assert!(MorphTable::new("test", ["ch"], empty).is_err());
    }

    #[test]
    fn test_new_rejects_empty_candidate() {
        assert!(MorphTable::new("test", ["ch", ""], ["y"]).is_err());
    }

    #[test]
    fn test_standard_table() {
        let table = MorphTable::standard();
        assert_eq!(table.version(), STANDARD_TABLE_VERSION);
        assert!(!table.prefixes().is_empty());
        assert!(!table.suffixes().is_empty());
        // Longest-first scan order.
        for w in table.prefixes().windows(2) {
            assert!(w[0].len() >= w[1].len());
        }
        for w in table.suffixes().windows(2) {
            assert!(w[0].len() >= w[1].len());
        }
    }
}
