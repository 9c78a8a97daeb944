//! Foliumのテストモジュール
//!
//! 読み込みからセグメンテーション、インベントリ構築までを通した
//! エンドツーエンドの動作を検証するテストを含みます。

use crate::corpus::Transcript;
use crate::inventory::MiddleInventory;
use crate::morph::table::MorphTable;
use crate::morph::Segmenter;
use crate::stream::{group_by_line, FilterConfig};
use crate::token::{Language, Zone};

const HEADER: &str =
    "word\tfolio\tsection\tquire\tlanguage\tplacement\tline_number\ttranscriber\tline_initial\tline_final";

fn corpus() -> Transcript {
    let data = format!(
        "{HEADER}\n\
         daiin\tf1r\tH\tA\tA\tP1\t1\tH\t1\t0\n\
         ol\tf1r\tH\tA\tA\tP1\t1\tH\t0\t1\n\
         qokaiin\tf1r\tH\tA\tA\tP1\t2\tH\t1\t1\n\
         chody\tf2v\tB\tB\tB\tC1\t4a\tH\t1\t0\n\
         qo*in\tf2v\tB\tB\tB\tC1\t4a\tH\t0\t0\n\
         shey\tf2v\tB\tB\tB\tL2\txyz\tH\t0\t1\n\
         otaly\tf2v\tB\tB\tB\tC1\t4a\tC\t0\t0\n"
    );
    Transcript::from_reader(data.as_bytes()).unwrap()
}

#[test]
fn test_end_to_end_grouping() {
    let transcript = corpus();
    let groups = group_by_line(transcript.tokens(&FilterConfig::default()));

    assert_eq!(groups.len(), 4);

    assert_eq!(groups[0].0, ("f1r".to_string(), 1));
    let words: Vec<_> = groups[0].1.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(words, vec!["daiin", "ol"]);

    assert_eq!(groups[1].0, ("f1r".to_string(), 2));

    // "4a" normalizes to 4; "xyz" to 0. The wildcard word "qo*in" and the
    // transcriber-C word "otaly" are gone.
    assert_eq!(groups[2].0, ("f2v".to_string(), 4));
    let words: Vec<_> = groups[2].1.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(words, vec!["chody"]);

    // "xyz" normalizes to line 0, a group of its own.
    assert_eq!(groups[3].0, ("f2v".to_string(), 0));
}

#[test]
fn test_end_to_end_derived_fields() {
    let transcript = corpus();
    let tokens: Vec<_> = transcript.tokens(&FilterConfig::default()).collect();

    let daiin = &tokens[0];
    assert_eq!(daiin.language, Language::A);
    assert_eq!(daiin.zone(), Zone::Paragraph);
    assert!(daiin.line_initial);

    let chody = tokens.iter().find(|t| t.word == "chody").unwrap();
    assert_eq!(chody.language, Language::B);
    assert_eq!(chody.zone(), Zone::Circle);
    assert_eq!(chody.line, 4);

    let shey = tokens.iter().find(|t| t.word == "shey").unwrap();
    assert_eq!(shey.zone(), Zone::Label);
    assert_eq!(shey.line, 0);
}

#[test]
fn test_end_to_end_inventory() {
    let transcript = corpus();
    let segmenter = Segmenter::new(MorphTable::standard());
    let inventory = MiddleInventory::build(
        transcript.tokens(&FilterConfig::default()),
        &segmenter,
    );

    assert_eq!(inventory.num_tokens(), 5);
    assert_eq!(inventory.table_version(), segmenter.table().version());

    // "qokaiin" -> qok||aiin: the empty middle is a first-class entry.
    assert!(inventory.contains(""));

    // "chody" -> ch|o|dy.
    assert_eq!(inventory.count("o"), 1);
    assert!(inventory.folio_vocabulary("f2v").unwrap().contains("o"));
}

#[test]
fn test_recomposition_over_corpus() {
    let transcript = corpus();
    let segmenter = Segmenter::new(MorphTable::standard());

    for token in transcript.tokens(&FilterConfig::default()) {
        let r = segmenter.segment(&token.word);
        match (r.prefix, r.suffix) {
            (Some(p), Some(s)) => assert_eq!(format!("{p}{}{s}", r.middle), token.word),
            (None, _) => {
                assert_eq!(r.middle, token.word);
                assert_eq!(r.suffix, None);
            }
            _ => {}
        }
    }
}

#[test]
fn test_early_termination_is_cheap() {
    let transcript = corpus();
    let config = FilterConfig::default();
    let mut stream = transcript.tokens(&config);

    // Consuming a single token must not exhaust the stream.
    let first = stream.next().unwrap();
    assert_eq!(first.word, "daiin");
    assert!(stream.next().is_some());
}
