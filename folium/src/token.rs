//! 型付きトークンの定義
//!
//! このモジュールは、手稿中の一語の出現を表す[`Token`]型と、
//! その派生属性である言語分類[`Language`]およびゾーン分類[`Zone`]を提供します。
//! 文字列キーによる動的なフィールド参照を排し、読み込み時に一度だけ
//! 型付きのレコードへ変換します。

/// コーパス内の言語分類
///
/// Currier分類に基づく主要な書記変種と、図版ラベルなどの非線形テキストを
/// 区別する閉じたラベル集合です。
///
/// The closed set of corpus language labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Currier言語A
    A,
    /// Currier言語B
    B,
    /// 非線形・図版ラベルテキスト（ソース上の`"NA"`）
    NonLinear,
}

impl Language {
    /// ソースファイル上の言語コードから言語分類を得ます。
    ///
    /// # 引数
    ///
    /// * `code` - 生の言語コード（`"A"`、`"B"`、`"NA"`）
    ///
    /// # 戻り値
    ///
    /// 既知のコードであれば対応する`Language`、未知または空であれば`None`。
    /// `None`はフィルタに一致しない扱いとなり、エラーにはなりません。
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "NA" => Some(Self::NonLinear),
            _ => None,
        }
    }

    /// ソースファイル上の言語コードを返します。
    pub fn code(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::NonLinear => "NA",
        }
    }
}

/// 配置コードから導出されるゾーン分類
///
/// 円環状・図形的なページ領域を区別するための粗い分類です。
/// 本文テキストでは配置コードが空の場合があり、その場合は
/// [`Zone::Paragraph`]として扱われます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// 段落本文
    Paragraph,
    /// 図版ラベル
    Label,
    /// 円環領域
    Circle,
    /// 放射状領域
    Radial,
    /// 表題行
    Title,
    /// 上記いずれにも分類されない領域
    Other,
}

impl Zone {
    /// 配置コードからゾーン分類を導出します。
    ///
    /// 配置コードの先頭文字が領域種別を示します（例: `"P1"` は段落、
    /// `"C2"` は円環）。空のコードは段落本文とみなされます。
    ///
    /// # 引数
    ///
    /// * `placement` - 生の配置コード
    pub fn from_placement(placement: &str) -> Self {
        match placement.chars().next() {
            None | Some('P') | Some('p') => Self::Paragraph,
            Some('L') | Some('l') => Self::Label,
            Some('C') | Some('c') => Self::Circle,
            Some('R') | Some('r') => Self::Radial,
            Some('T') | Some('t') => Self::Title,
            Some(_) => Self::Other,
        }
    }
}

/// 手稿中の一語の出現
///
/// フィルタを通過した転写行一件に対応する所有型のレコードです。
/// フィールドは読み込み時に一度だけ正規化され、以後は不変です。
///
/// One manuscript word occurrence, populated once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 転写された語（小文字化済み）。フィルタ後は空になりません。
    pub word: String,

    /// ページ識別子（例: `f93v`）
    pub folio: String,

    /// 折丁識別子。空の場合があります。
    pub quire: String,

    /// 内容領域コード
    pub section: String,

    /// 細粒度の配置コード。本文では空の場合があります。
    pub placement: String,

    /// 言語分類
    pub language: Language,

    /// 転写の筆耕者識別子
    pub transcriber: String,

    /// フォリオ内の正規化済み行番号
    pub line: u32,

    /// 行頭フラグ
    pub line_initial: bool,

    /// 行末フラグ
    pub line_final: bool,

    /// 段落頭フラグ。ソースに列が無い場合は`false`です。
    pub par_initial: bool,
}

impl Token {
    /// 配置コードから導出されるゾーン分類を返します。
    ///
    /// 導出は呼び出し時に行われ、トークンには保持されません。
    ///
    /// # 戻り値
    ///
    /// このトークンのゾーン分類
    #[inline(always)]
    pub fn zone(&self) -> Zone {
        Zone::from_placement(&self.placement)
    }

    /// 語に不確実読みマーカー `*` が含まれるかどうかを返します。
    #[inline(always)]
    pub fn has_wildcard(&self) -> bool {
        self.word.contains('*')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("A"), Some(Language::A));
        assert_eq!(Language::from_code("B"), Some(Language::B));
        assert_eq!(Language::from_code("NA"), Some(Language::NonLinear));
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("X"), None);
    }

    #[test]
    fn test_zone_from_placement() {
        assert_eq!(Zone::from_placement(""), Zone::Paragraph);
        assert_eq!(Zone::from_placement("P1"), Zone::Paragraph);
        assert_eq!(Zone::from_placement("L0"), Zone::Label);
        assert_eq!(Zone::from_placement("C2"), Zone::Circle);
        assert_eq!(Zone::from_placement("R3"), Zone::Radial);
        assert_eq!(Zone::from_placement("T"), Zone::Title);
        assert_eq!(Zone::from_placement("X9"), Zone::Other);
    }
}
