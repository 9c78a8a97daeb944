//! 転写ファイルを形態素分解するユーティリティ
//!
//! このバイナリは、タブ区切りの転写ファイルを読み込み、標準フィルタを
//! 適用したうえで、指定された出力形式（triples、middles、grouped）で
//! 結果を標準出力に出力します。

use std::error::Error;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use folium::{
    group_by_line, FallbackPolicy, FilterConfig, Language, MiddleInventory, MorphTable, Segmenter,
    Transcript,
};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Triples,
    Middles,
    Grouped,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"triples"、"middles"、"grouped"のいずれか）
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "triples" => Ok(Self::Triples),
            "middles" => Ok(Self::Middles),
            "grouped" => Ok(Self::Grouped),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "segment", about = "Segments transcription tokens")]
struct Args {
    /// Transcription file (tab-separated, quoted fields allowed).
    #[clap(short = 'i', long)]
    corpus: PathBuf,

    /// Transcriber hand to keep.
    #[clap(short = 't', long, default_value = "H")]
    transcriber: String,

    /// Language codes to include. May be repeated.
    #[clap(short = 'l', long = "language", default_values_t = vec!["A".to_string(), "B".to_string()])]
    languages: Vec<String>,

    /// Keeps tokens containing the wildcard marker `*`.
    #[clap(short = 'w', long)]
    keep_wildcards: bool,

    /// Leaves unmatched remainders whole instead of applying the tail fallback.
    #[clap(short = 'F', long)]
    no_fallback: bool,

    /// Output mode. Choices are triples, middles, and grouped.
    #[clap(short = 'O', long, default_value = "triples")]
    output_mode: OutputMode,
}

/// メイン関数
///
/// 転写ファイルを読み込み、フィルタとセグメンターを適用して、
/// 指定された形式で結果を標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut languages = vec![];
    for code in &args.languages {
        let language = Language::from_code(code)
            .ok_or_else(|| format!("unknown language code: {code:?}"))?;
        languages.push(language);
    }

    let config = FilterConfig::new()
        .transcriber(args.transcriber.as_str())
        .languages(languages)
        .exclude_wildcards(!args.keep_wildcards);

    let fallback = if args.no_fallback {
        FallbackPolicy::Opaque
    } else {
        FallbackPolicy::TailHeuristic
    };
    let segmenter = Segmenter::new(MorphTable::standard()).fallback(fallback);

    eprintln!("Loading the transcript...");
    let transcript = Transcript::from_path(&args.corpus)?;

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    match args.output_mode {
        OutputMode::Triples => {
            let mut stream = transcript.tokens(&config);
            for token in &mut stream {
                let r = segmenter.segment(&token.word);
                writeln!(
                    &mut out,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    token.word,
                    token.folio,
                    token.line,
                    r.prefix.unwrap_or("-"),
                    r.middle,
                    r.suffix.unwrap_or("-"),
                )?;
            }
            eprintln!("Skipped {} malformed rows", stream.skipped_rows());
        }
        OutputMode::Middles => {
            let inventory =
                MiddleInventory::build(transcript.tokens(&config), &segmenter);
            let mut middles: Vec<_> = inventory.iter().collect();
            middles.sort_by(|(a, ea), (b, eb)| eb.count().cmp(&ea.count()).then(a.cmp(b)));
            for (middle, entry) in middles {
                writeln!(
                    &mut out,
                    "{}\t{}\t{}\t{}",
                    middle,
                    entry.count(),
                    entry.folios().len(),
                    if entry.is_compound() { "compound" } else { "simple" },
                )?;
            }
        }
        OutputMode::Grouped => {
            for ((folio, line), tokens) in group_by_line(transcript.tokens(&config)) {
                let words: Vec<_> = tokens.iter().map(|t| t.word.as_str()).collect();
                writeln!(&mut out, "{folio}\t{line}\t{}", words.join(" "))?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
