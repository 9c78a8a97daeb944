//! フィルタ付きトークンストリーム
//!
//! このモジュールは、生の行レコードを標準フィルタ（筆耕者・言語・
//! ワイルドカード）のもとで検証済みの[`Token`]へ変換する遅延ストリームを
//! 提供します。トークンはソースファイルの出現順で生成されます。
//! この順序は隣接行の解析に依存する下流の消費者にとって不可欠であり、
//! いかなる変換によっても崩してはなりません。

use hashbrown::{HashMap, HashSet};

use crate::corpus::{Records, Transcript};
use crate::token::{Language, Token};
use crate::utils::parse_line_number;

/// トークンストリームの標準フィルタ設定
///
/// # 例
///
/// ```
/// use folium::{FilterConfig, Language};
///
/// // Currier A、筆耕者Hのみを残す設定
/// let config = FilterConfig::new()
///     .transcriber("H")
///     .languages([Language::A]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    transcriber: String,
    languages: HashSet<Language>,
    exclude_wildcards: bool,
}

impl Default for FilterConfig {
    /// 既定のフィルタ設定を返します。
    ///
    /// 筆耕者は`"H"`、言語は`{A, B}`、ワイルドカード語は除外されます。
    fn default() -> Self {
        Self {
            transcriber: "H".to_string(),
            languages: HashSet::from_iter([Language::A, Language::B]),
            exclude_wildcards: true,
        }
    }
}

impl FilterConfig {
    /// 既定値で新しいフィルタ設定を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 残す筆耕者を設定します。
    ///
    /// # 引数
    ///
    /// * `transcriber` - 筆耕者識別子（文字列等価で比較されます）
    pub fn transcriber<S>(mut self, transcriber: S) -> Self
    where
        S: Into<String>,
    {
        self.transcriber = transcriber.into();
        self
    }

    /// 含める言語分類の集合を設定します。
    ///
    /// # 引数
    ///
    /// * `languages` - 含める言語分類
    pub fn languages<I>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = Language>,
    {
        self.languages = languages.into_iter().collect();
        self
    }

    /// ワイルドカード `*` を含む語を除外するかどうかを設定します。
    ///
    /// 既定では除外されます。不確実読みを含めた解析を行う
    /// 探索的スクリプトのみが `false` を指定します。
    pub fn exclude_wildcards(mut self, yes: bool) -> Self {
        self.exclude_wildcards = yes;
        self
    }
}

impl Transcript {
    /// フィルタを適用した型付きトークンの遅延ストリームを返します。
    ///
    /// 呼び出しごとに新しいイテレータが生成されるため、同じ設定で
    /// 何度でも再スタートできます。トークンはソースファイルの出現順で
    /// 生成され、途中で`break`しても残りの行は処理されません。
    ///
    /// # 引数
    ///
    /// * `config` - 標準フィルタ設定
    ///
    /// # 戻り値
    ///
    /// [`Token`]を生成する遅延イテレータ
    pub fn tokens<'a>(&'a self, config: &'a FilterConfig) -> TokenStream<'a> {
        TokenStream {
            records: self.records(),
            config,
        }
    }
}

/// フィルタ適用済みトークンの遅延イテレータ
///
/// [`Transcript::tokens`]によって生成されます。
pub struct TokenStream<'a> {
    records: Records<'a>,
    config: &'a FilterConfig,
}

impl TokenStream<'_> {
    /// ここまでにスキップされた不正行の件数を返します。
    ///
    /// フィルタで除外された行は不正行ではないため、ここには含まれません。
    #[inline(always)]
    pub fn skipped_rows(&self) -> usize {
        self.records.skipped()
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.records.next()?;

            // Cheapest rejections first: transcriber, then language.
            if record.transcriber != self.config.transcriber {
                continue;
            }
            let language = match Language::from_code(&record.language) {
                Some(language) if self.config.languages.contains(&language) => language,
                // An unknown or absent code never matches the filter.
                _ => continue,
            };
            if record.word.is_empty() {
                continue;
            }
            if self.config.exclude_wildcards && record.word.contains('*') {
                continue;
            }

            return Some(Token {
                line: parse_line_number(&record.line_number),
                word: record.word,
                folio: record.folio,
                quire: record.quire,
                section: record.section,
                placement: record.placement,
                language,
                transcriber: record.transcriber,
                line_initial: record.line_initial,
                line_final: record.line_final,
                par_initial: record.par_initial,
            });
        }
    }
}

/// トークンを `(folio, line)` でグループ化します。
///
/// グループはキーの初出順に並び、各グループ内のトークンは
/// ソースファイルの出現順を保ちます。ほぼすべての解析スクリプトが
/// この「前後の行」隣接構造に依存するため、この関数が唯一の
/// グループ化の入口です。ストリームを消費して全体を実体化する点に
/// 注意してください。
///
/// # 引数
///
/// * `tokens` - グループ化するトークン列
///
/// # 戻り値
///
/// `((folio, line), トークン列)` のベクター。キーの初出順。
pub fn group_by_line<I>(tokens: I) -> Vec<((String, u32), Vec<Token>)>
where
    I: IntoIterator<Item = Token>,
{
    let mut groups: Vec<((String, u32), Vec<Token>)> = vec![];
    let mut index: HashMap<(String, u32), usize> = HashMap::new();

    for token in tokens {
        let key = (token.folio.clone(), token.line);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(token),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![token]));
            }
        }
    }
    groups
}
