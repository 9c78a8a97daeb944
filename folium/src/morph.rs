//! 形態素セグメンター
//!
//! このモジュールは、一つのトークン文字列をPREFIX・MIDDLE・SUFFIXの
//! 三要素へ決定論的に分解するセグメンターを提供します。分解は
//! `(語, テーブル)` の純粋関数であり、同じ入力に対して常にビット単位で
//! 同一の結果を返します。どの接頭辞も一致しないトークンは「不透明」
//! として明示的なデータで表現され、例外にはなりません。

pub mod table;

use crate::morph::table::MorphTable;

/// 一致しない残余部分の取り扱い方針
///
/// テーブルのどの接尾辞候補も一致しなかったとき、残余部分をどう分解するかを
/// 定める名前付きの方針です。歴史的には各スクリプトが暗黙に異なる
/// 文字列スライスを行っていたため、ここで明示的な設定に固定されています。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// 末尾ヒューリスティックを適用します（既定）。
    ///
    /// 残余が2文字以上なら末尾2文字を接尾辞に、1文字なら全体を接尾辞に
    /// します（MIDDLEは空）。残余が空なら両方とも空のセンチネルです。
    #[default]
    TailHeuristic,

    /// 残余全体をMIDDLEのまま残し、接尾辞は `None` にします。
    ///
    /// 分解できない残余を単一の不透明な区間として扱いたい
    /// 探索的スクリプトのための方針です。
    Opaque,
}

/// 一つのトークンの形態素分解結果
///
/// 各フィールドは入力語の部分スライスです。空のMIDDLEは
/// 「MIDDLEなし」とは異なる正当な結果であり、接頭辞と接尾辞だけで
/// 語全体が構成されることを意味します。
///
/// # 不変条件
///
/// 接頭辞と接尾辞がともに `Some` のとき、
/// `prefix + middle + suffix == word` が成り立ちます。
/// 接頭辞が見つからなかったとき、`middle == word` かつ
/// `suffix == None` です（現在のテーブルのもとで不透明なトークン）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphResult<'a> {
    /// 最長一致した接頭辞。一致が無ければ `None`
    pub prefix: Option<&'a str>,

    /// 接頭辞と接尾辞の間の残余区間。空文字列は正当な結果です
    pub middle: &'a str,

    /// 最長一致した接尾辞。一致が無ければ `None`
    pub suffix: Option<&'a str>,
}

impl MorphResult<'_> {
    /// このトークンが現在のテーブルのもとで不透明かどうかを返します。
    ///
    /// どの接頭辞候補も一致しなかった場合に `true` です。不透明さは
    /// 失敗ではなく、照会可能な第一級の結果です。
    #[inline(always)]
    pub fn is_opaque(&self) -> bool {
        self.prefix.is_none()
    }
}

/// 決定論的な形態素セグメンター
///
/// 不変の[`MorphTable`]を保持し、トークン文字列を分解します。
/// テーブルはコンストラクタへ明示的に渡され、モジュールスコープの
/// 暗黙状態からは決して読み取られません。
///
/// # 例
///
/// ```
/// use folium::{MorphTable, Segmenter};
///
/// let segmenter = Segmenter::new(MorphTable::standard());
/// let result = segmenter.segment("qokaiin");
/// assert_eq!(result.prefix, Some("qok"));
/// assert_eq!(result.middle, "");
/// assert_eq!(result.suffix, Some("aiin"));
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    table: MorphTable,
    fallback: FallbackPolicy,
    allow_suffix_only: bool,
}

impl Segmenter {
    /// 新しいセグメンターを作成します。
    ///
    /// 既定では末尾ヒューリスティックのフォールバックが有効で、
    /// 接尾辞が残余全体と完全一致すること（空のMIDDLE）も許されます。
    ///
    /// # 引数
    ///
    /// * `table` - 使用する候補テーブル
    pub fn new(table: MorphTable) -> Self {
        Self {
            table,
            fallback: FallbackPolicy::default(),
            allow_suffix_only: true,
        }
    }

    /// 一致しない残余部分の取り扱い方針を設定します。
    ///
    /// # 引数
    ///
    /// * `fallback` - 適用するフォールバック方針
    pub fn fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// 接尾辞が残余全体と完全一致すること（空のMIDDLE）を許すかどうかを
    /// 設定します。
    ///
    /// `false` にすると、接尾辞は必ずMIDDLEを1文字以上残さなければ
    /// ならなくなります。一部のスクリプトが要求する変種です。
    pub fn allow_suffix_only(mut self, yes: bool) -> Self {
        self.allow_suffix_only = yes;
        self
    }

    /// 保持している候補テーブルへの参照を返します。
    #[inline(always)]
    pub fn table(&self) -> &MorphTable {
        &self.table
    }

    /// 一つのトークン文字列を分解します。
    ///
    /// 候補の走査順はテーブル構築時に固定されており（長さ降順、同長は
    /// 挿入順）、結果は入力に対して決定論的です。空でない整形済みの
    /// 入力に対してパニックすることはありません。
    ///
    /// # 引数
    ///
    /// * `word` - 分解するトークン文字列
    ///
    /// # 戻り値
    ///
    /// 入力語の部分スライスからなる[`MorphResult`]
    pub fn segment<'a>(&self, word: &'a str) -> MorphResult<'a> {
        let Some(prefix) = self
            .table
            .prefixes()
            .iter()
            .find(|p| word.starts_with(p.as_str()))
        else {
            // Opaque token: no prefix, the whole word is the middle.
            return MorphResult {
                prefix: None,
                middle: word,
                suffix: None,
            };
        };
        let prefix = &word[..prefix.len()];
        let remainder = &word[prefix.len()..];

        for s in self.table.suffixes() {
            if remainder.len() > s.len() && remainder.ends_with(s.as_str()) {
                let cut = word.len() - s.len();
                return MorphResult {
                    prefix: Some(prefix),
                    middle: &word[prefix.len()..cut],
                    suffix: Some(&word[cut..]),
                };
            }
            if self.allow_suffix_only && remainder == s.as_str() {
                // Suffix-only remainder: an explicit empty middle.
                return MorphResult {
                    prefix: Some(prefix),
                    middle: &word[prefix.len()..prefix.len()],
                    suffix: Some(remainder),
                };
            }
        }

        match self.fallback {
            FallbackPolicy::TailHeuristic => {
                let cut = remainder
                    .char_indices()
                    .rev()
                    .nth(1)
                    .map_or(0, |(i, _)| i);
                MorphResult {
                    prefix: Some(prefix),
                    middle: &remainder[..cut],
                    suffix: Some(&remainder[cut..]),
                }
            }
            FallbackPolicy::Opaque => MorphResult {
                prefix: Some(prefix),
                middle: remainder,
                suffix: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Segmenter {
        Segmenter::new(MorphTable::standard())
    }

    #[test]
    fn test_recomposition_invariant() {
        let segmenter = standard();
        for word in ["qokaiin", "chedy", "shol", "otaly", "daiin", "qokeedy"] {
            let r = segmenter.segment(word);
            if let (Some(p), Some(s)) = (r.prefix, r.suffix) {
                assert_eq!(format!("{p}{}{s}", r.middle), word);
            }
        }
    }

    #[test]
    fn test_opaque_token() {
        let segmenter = standard();
        let r = segmenter.segment("xaiin");
        assert!(r.is_opaque());
        assert_eq!(r.prefix, None);
        assert_eq!(r.middle, "xaiin");
        assert_eq!(r.suffix, None);
    }

    #[test]
    fn test_longest_match_precedence() {
        let table = MorphTable::new("test", ["c", "ch"], ["y"]).unwrap();
        let segmenter = Segmenter::new(table);
        let r = segmenter.segment("chair");
        assert_eq!(r.prefix, Some("ch"));
    }

    #[test]
    fn test_suffix_only_remainder() {
        let segmenter = standard();
        let r = segmenter.segment("qokaiin");
        assert_eq!(r.prefix, Some("qok"));
        assert_eq!(r.middle, "");
        assert_eq!(r.suffix, Some("aiin"));
    }

    #[test]
    fn test_suffix_never_consumes_remainder_when_disallowed() {
        let segmenter = standard().allow_suffix_only(false);
        let r = segmenter.segment("qokaiin");
        assert_eq!(r.prefix, Some("qok"));
        // "aiin" may no longer consume the whole remainder; the longest
        // suffix leaving at least one middle character wins instead.
        assert_eq!(r.middle, "a");
        assert_eq!(r.suffix, Some("iin"));
    }

    #[test]
    fn test_suffix_leaves_middle() {
        let segmenter = standard();
        let r = segmenter.segment("chody");
        assert_eq!(r.prefix, Some("ch"));
        assert_eq!(r.middle, "o");
        assert_eq!(r.suffix, Some("dy"));
    }

    #[test]
    fn test_fallback_tail_heuristic() {
        let table = MorphTable::new("test", ["ch"], ["zz"]).unwrap();
        let segmenter = Segmenter::new(table);

        // Remainder "abcd": last two characters become the suffix.
        let r = segmenter.segment("chabcd");
        assert_eq!(r.prefix, Some("ch"));
        assert_eq!(r.middle, "ab");
        assert_eq!(r.suffix, Some("cd"));

        // One-character remainder: suffix-only with an empty middle.
        let r = segmenter.segment("cha");
        assert_eq!(r.middle, "");
        assert_eq!(r.suffix, Some("a"));

        // Empty remainder: both parts are the empty sentinel.
        let r = segmenter.segment("ch");
        assert_eq!(r.middle, "");
        assert_eq!(r.suffix, Some(""));
    }

    #[test]
    fn test_fallback_opaque() {
        let table = MorphTable::new("test", ["ch"], ["zz"]).unwrap();
        let segmenter = Segmenter::new(table).fallback(FallbackPolicy::Opaque);
        let r = segmenter.segment("chabcd");
        assert_eq!(r.prefix, Some("ch"));
        assert_eq!(r.middle, "abcd");
        assert_eq!(r.suffix, None);
    }

    #[test]
    fn test_determinism() {
        let segmenter = standard();
        for word in ["qokaiin", "chedy", "xaiin", "shol"] {
            assert_eq!(segmenter.segment(word), segmenter.segment(word));
        }
    }
}
