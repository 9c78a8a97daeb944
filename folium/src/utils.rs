//! ユーティリティ関数を提供するモジュール
//!
//! このモジュールには、タブ区切り行の解析、行番号の正規化、
//! 構造フラグの解釈などのヘルパー関数が含まれています。

use csv_core::ReadFieldResult;

/// タブ区切り形式の行を解析してフィールドのベクターに分割する
///
/// この関数は、タブ区切りの文字列を解析し、各フィールドを個別の文字列として
/// 抽出します。ダブルクォートで囲まれたフィールドも正しく処理し、
/// 囲みのクォートは取り除かれます。
///
/// # 引数
///
/// * `row` - 解析するタブ区切り形式の文字列
///
/// # 戻り値
///
/// 解析されたフィールドを格納する文字列のベクター
///
/// # 例
///
/// ```
/// # use folium::utils::parse_tsv_row;
/// let fields = parse_tsv_row("daiin\tf1r\tA");
/// assert_eq!(fields, vec!["daiin", "f1r", "A"]);
///
/// let fields_with_quote = parse_tsv_row("\"daiin\"\t\"f1r\"");
/// assert_eq!(fields_with_quote, vec!["daiin", "f1r"]);
/// ```
pub fn parse_tsv_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::ReaderBuilder::new().delimiter(b'\t').build();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        match result {
            // The field is longer than the scratch buffer: keep reading it.
            ReadFieldResult::OutputFull => continue,
            ReadFieldResult::Field { .. } => {
                fields.push(String::from_utf8_lossy(&field).into_owned());
                field.clear();
            }
            ReadFieldResult::InputEmpty | ReadFieldResult::End => {
                fields.push(String::from_utf8_lossy(&field).into_owned());
                break;
            }
        }
    }
    fields
}

/// 行番号フィールドを整数に正規化する
///
/// 生の行番号フィールドは英数字混在の場合があるため（例: `"4a"`）、
/// 先頭の連続する数字列を抽出して整数化します。数字を含まない
/// フィールドは `0` に正規化されます（クラッシュではなく規定の挙動）。
///
/// # 引数
///
/// * `raw` - 生の行番号フィールド
///
/// # 戻り値
///
/// 正規化された行番号
///
/// # 例
///
/// ```
/// # use folium::utils::parse_line_number;
/// assert_eq!(parse_line_number("4a"), 4);
/// assert_eq!(parse_line_number("12"), 12);
/// assert_eq!(parse_line_number("xyz"), 0);
/// ```
pub fn parse_line_number(raw: &str) -> u32 {
    let digits: &str = {
        let end = raw
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(raw.len(), |(i, _)| i);
        &raw[..end]
    };
    // A leading digit run longer than a u32 does not occur in real folios,
    // but saturate rather than panic if it ever does.
    digits.parse().unwrap_or(if digits.is_empty() { 0 } else { u32::MAX })
}

/// 構造フラグのフィールドを真偽値として解釈する
///
/// 転写ソースは `"1"`/`"0"` と `"true"`/`"false"` の両方の表記を使うため、
/// どちらも受け付けます。欠落列や未知の値は `false` になります。
///
/// # 引数
///
/// * `raw` - 生のフラグフィールド。列自体が無い場合は `None`
///
/// # 戻り値
///
/// 解釈された真偽値
pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("1") | Some("true") | Some("True") | Some("TRUE"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_row() {
        assert_eq!(
            &["daiin", "f93v", "A"],
            parse_tsv_row("daiin\tf93v\tA").as_slice()
        );
    }

    #[test]
    fn test_parse_tsv_row_with_quote() {
        assert_eq!(
            &["daiin", "f93v", "P 1"],
            parse_tsv_row("\"daiin\"\tf93v\t\"P 1\"").as_slice()
        );
    }

    #[test]
    fn test_parse_tsv_row_quoted_tab() {
        assert_eq!(
            &["a\tb", "c"],
            parse_tsv_row("\"a\tb\"\tc").as_slice()
        );
    }

    #[test]
    fn test_parse_tsv_row_field_longer_than_buffer() {
        let long = "x".repeat(5000);
        let fields = parse_tsv_row(&format!("{long}\tb"));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], long);
        assert_eq!(fields[1], "b");
    }

    #[test]
    fn test_parse_line_number_alphanumeric() {
        assert_eq!(parse_line_number("4a"), 4);
    }

    #[test]
    fn test_parse_line_number_plain() {
        assert_eq!(parse_line_number("17"), 17);
    }

    #[test]
    fn test_parse_line_number_no_digits() {
        assert_eq!(parse_line_number("xyz"), 0);
        assert_eq!(parse_line_number(""), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }
}
