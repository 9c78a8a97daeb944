//! MIDDLEインベントリの構築
//!
//! このモジュールは、トークン部分集合に対するセグメンテーション結果を
//! 一回の走査で集計し、多数の解析スクリプトが共有するコーパス統計
//! （MIDDLE頻度表、所属フォリオ集合、共起接頭辞集合、複合語フラグ）を
//! 構築します。インベントリは `(トークン部分集合, テーブルバージョン)`
//! の組ごとに一度だけ構築され、以後は不変です。どちらかが変われば
//! 再構築が必要です。

use hashbrown::{HashMap, HashSet};

use crate::morph::{FallbackPolicy, Segmenter};
use crate::token::Token;

/// 一つのMIDDLE文字列に対する集計エントリ
#[derive(Debug, Clone, Default)]
pub struct MiddleEntry {
    count: usize,
    folios: HashSet<String>,
    prefixes: HashSet<String>,
    is_compound: bool,
}

impl MiddleEntry {
    /// このMIDDLEの総出現回数を返します。
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// このMIDDLEが出現するフォリオの集合を返します。
    #[inline(always)]
    pub fn folios(&self) -> &HashSet<String> {
        &self.folios
    }

    /// このMIDDLEと共起した接頭辞の集合を返します。
    #[inline(always)]
    pub fn prefixes(&self) -> &HashSet<String> {
        &self.prefixes
    }

    /// このMIDDLE自身が再分解可能（複合）かどうかを返します。
    ///
    /// 構築時に一度だけ導出されるキャッシュ済みの属性であり、
    /// 照会ごとに再計算されることはありません。
    #[inline(always)]
    pub fn is_compound(&self) -> bool {
        self.is_compound
    }
}

/// コーパス部分集合に対するMIDDLE集計
///
/// 構築後は不変です。
pub struct MiddleInventory {
    entries: HashMap<String, MiddleEntry>,
    folio_vocab: HashMap<String, HashSet<String>>,
    table_version: String,
    num_tokens: usize,
}

impl MiddleInventory {
    /// トークン列からインベントリを構築します。
    ///
    /// トークン列を一度だけ走査し、トークンごとにセグメンターを呼び出して
    /// 集計します。複合語フラグは走査後に、MIDDLE自身をトークンとして
    /// フォールバック無しで再分解することで導出されます（テーブルの
    /// 接頭辞が一致し、かつ接頭辞の先に残余が存在すれば複合）。
    ///
    /// # 引数
    ///
    /// * `tokens` - 集計対象のトークン列（消費されます）
    /// * `segmenter` - 使用するセグメンター
    pub fn build<I>(tokens: I, segmenter: &Segmenter) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut entries: HashMap<String, MiddleEntry> = HashMap::new();
        let mut folio_vocab: HashMap<String, HashSet<String>> = HashMap::new();
        let mut num_tokens = 0;

        for token in tokens {
            let result = segmenter.segment(&token.word);
            let middle = result.middle.to_string();

            let entry = entries.entry(middle.clone()).or_default();
            entry.count += 1;
            if !entry.folios.contains(&token.folio) {
                entry.folios.insert(token.folio.clone());
            }
            if let Some(prefix) = result.prefix {
                if !entry.prefixes.contains(prefix) {
                    entry.prefixes.insert(prefix.to_string());
                }
            }
            folio_vocab.entry(token.folio).or_default().insert(middle);
            num_tokens += 1;
        }

        // Second decomposition pass over the middles themselves. The tail
        // fallback must not run here: a fallback split is not an internal
        // boundary, only table matches count.
        let detector = Segmenter::new(segmenter.table().clone()).fallback(FallbackPolicy::Opaque);
        for (middle, entry) in entries.iter_mut() {
            if middle.is_empty() {
                continue;
            }
            let inner = detector.segment(middle);
            entry.is_compound =
                inner.prefix.is_some() && (inner.suffix.is_some() || !inner.middle.is_empty());
        }

        Self {
            entries,
            folio_vocab,
            table_version: segmenter.table().version().to_string(),
            num_tokens,
        }
    }

    /// 指定されたMIDDLEのエントリを返します。
    #[inline(always)]
    pub fn entry(&self, middle: &str) -> Option<&MiddleEntry> {
        self.entries.get(middle)
    }

    /// 指定されたMIDDLEの総出現回数を返します。未知のMIDDLEは0です。
    #[inline(always)]
    pub fn count(&self, middle: &str) -> usize {
        self.entries.get(middle).map_or(0, |e| e.count)
    }

    /// 指定されたMIDDLEが複合かどうかを返します。未知のMIDDLEは`false`です。
    #[inline(always)]
    pub fn is_compound(&self, middle: &str) -> bool {
        self.entries.get(middle).is_some_and(|e| e.is_compound)
    }

    /// 指定されたMIDDLEが存在するかどうかを返します。
    #[inline(always)]
    pub fn contains(&self, middle: &str) -> bool {
        self.entries.contains_key(middle)
    }

    /// 指定されたフォリオに出現したMIDDLEの語彙を返します。
    #[inline(always)]
    pub fn folio_vocabulary(&self, folio: &str) -> Option<&HashSet<String>> {
        self.folio_vocab.get(folio)
    }

    /// 異なりMIDDLE数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// インベントリが空かどうかを返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 集計されたトークンの総数を返します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.num_tokens
    }

    /// このインベントリの構築に使われたテーブルのバージョンを返します。
    #[inline(always)]
    pub fn table_version(&self) -> &str {
        &self.table_version
    }

    /// すべての `(MIDDLE, エントリ)` の組のイテレータを返します。
    ///
    /// 順序は規定されません。順序に依存する消費者はキーで整列してください。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MiddleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
