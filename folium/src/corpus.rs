//! 転写ファイルの読み込みと行レコードの正規化
//!
//! このモジュールは、タブ区切りの転写ファイルを読み込み、
//! クォートを除去した正規化済みの行レコードを遅延的に生成します。
//! 行単位の不整合（フィールド数不足など）はスキップして数えるだけで、
//! ストリームを中断することはありません。致命的なのはセットアップ段階の
//! 失敗（ファイルが存在しない・読めない、ヘッダー行が不正）のみです。

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{FoliumError, Result};
use crate::utils::{parse_flag, parse_tsv_row};

/// 転写スキーマの必須列数
///
/// `word, folio, section, quire, language, placement, line_number,
/// transcriber, line_initial, line_final` の10列。11列目（段落頭フラグ）は
/// 任意で、欠落時は `false` になります。
pub const REQUIRED_FIELDS: usize = 10;

const COL_WORD: usize = 0;
const COL_FOLIO: usize = 1;
const COL_SECTION: usize = 2;
const COL_QUIRE: usize = 3;
const COL_LANGUAGE: usize = 4;
const COL_PLACEMENT: usize = 5;
const COL_LINE_NUMBER: usize = 6;
const COL_TRANSCRIBER: usize = 7;
const COL_LINE_INITIAL: usize = 8;
const COL_LINE_FINAL: usize = 9;
const COL_PAR_INITIAL: usize = 10;

/// 正規化済みの生の行レコード
///
/// クォートが除去された一行分のフィールドです。この段階では
/// フィルタリングも型変換も行われていません（それらは
/// [`TokenStream`](crate::stream::TokenStream)の責務です）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 転写された語
    pub word: String,

    /// ページ識別子
    pub folio: String,

    /// 内容領域コード
    pub section: String,

    /// 折丁識別子
    pub quire: String,

    /// 生の言語コード
    pub language: String,

    /// 配置コード
    pub placement: String,

    /// 生の行番号フィールド（英数字混在の場合があります）
    pub line_number: String,

    /// 転写の筆耕者識別子
    pub transcriber: String,

    /// 行頭フラグ
    pub line_initial: bool,

    /// 行末フラグ
    pub line_final: bool,

    /// 段落頭フラグ（任意列、欠落時は`false`）
    pub par_initial: bool,
}

/// 読み込み済みの転写コーパス
///
/// ファイル全体を一度だけメモリに読み込み、以後はその内容に対する
/// 遅延イテレータを何度でも生成できます。ファイルハンドルは読み込みの
/// スコープ内で解放され、イテレーション中に保持されることはありません。
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// 転写ファイルを読み込みます。
    ///
    /// # 引数
    ///
    /// * `path` - タブ区切り転写ファイルのパス
    ///
    /// # 戻り値
    ///
    /// 成功時は `Ok(Transcript)` を返します。
    ///
    /// # エラー
    ///
    /// ファイルが存在しない・読めない場合、またはUTF-8でない場合に
    /// エラーを返します。これが唯一の致命的条件です。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// 任意のリーダーから転写コーパスを読み込みます。
    ///
    /// # 引数
    ///
    /// * `rdr` - 転写データのリーダー
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、UTF-8でない場合、またはヘッダー行が
    /// 必須列数を満たさない場合にエラーを返します。ヘッダーの検証は
    /// セットアップ段階の失敗であり、データ行のスキップ回復とは
    /// 区別されます。
    pub fn from_reader<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut buf = vec![];
        rdr.read_to_end(&mut buf)?;
        let text = std::str::from_utf8(&buf)?.to_string();

        match text.lines().find(|line| !line.is_empty()) {
            Some(header) if parse_tsv_row(header).len() >= REQUIRED_FIELDS => {}
            Some(header) => {
                let msg = format!(
                    "A header row must have {REQUIRED_FIELDS} fields at least, {header:?}",
                );
                return Err(FoliumError::invalid_format("transcript", msg));
            }
            None => {
                return Err(FoliumError::invalid_format(
                    "transcript",
                    "A transcript must begin with a header row",
                ));
            }
        }

        Ok(Self { text })
    }

    /// 正規化済みレコードの遅延イテレータを返します。
    ///
    /// ヘッダー行はスキップされます。フィールド数が必須列数に満たない行は
    /// スキップされ、その件数は[`Records::skipped`]で取得できます。
    ///
    /// # 戻り値
    ///
    /// [`RawRecord`]を生成する遅延イテレータ
    pub fn records(&self) -> Records<'_> {
        Records {
            lines: self.text.lines(),
            header_seen: false,
            skipped: 0,
        }
    }
}

/// 正規化済みレコードの遅延イテレータ
///
/// [`Transcript::records`]によって生成されます。
pub struct Records<'a> {
    lines: std::str::Lines<'a>,
    header_seen: bool,
    skipped: usize,
}

impl Records<'_> {
    /// ここまでにスキップされた不正行の件数を返します。
    ///
    /// イテレーションの進行に応じて増加する診断用カウンターです。
    #[inline(always)]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Records<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            if line.is_empty() {
                continue;
            }
            if !self.header_seen {
                self.header_seen = true;
                continue;
            }
            let fields = parse_tsv_row(line);
            if fields.len() < REQUIRED_FIELDS {
                self.skipped += 1;
                continue;
            }
            return Some(RawRecord {
                word: fields[COL_WORD].to_lowercase(),
                folio: fields[COL_FOLIO].clone(),
                section: fields[COL_SECTION].clone(),
                quire: fields[COL_QUIRE].clone(),
                language: fields[COL_LANGUAGE].clone(),
                placement: fields[COL_PLACEMENT].clone(),
                line_number: fields[COL_LINE_NUMBER].clone(),
                transcriber: fields[COL_TRANSCRIBER].clone(),
                line_initial: parse_flag(fields.get(COL_LINE_INITIAL).map(String::as_str)),
                line_final: parse_flag(fields.get(COL_LINE_FINAL).map(String::as_str)),
                par_initial: parse_flag(fields.get(COL_PAR_INITIAL).map(String::as_str)),
            });
        }
    }
}
