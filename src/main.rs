use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use structopt::StructOpt;
use tracing::{info, warn};

use anagram_tools::alphabet::normalize;
use anagram_tools::{FileFormat, SearchConfig, Wordlist};

/// Find dictionary words that are anagrams of the given letters.
#[derive(StructOpt)]
struct Cli {
    /// The letters to rearrange
    letters: String,

    /// Path to a newline-delimited word list
    #[structopt(
        long,
        parse(from_os_str),
        default_value = "/usr/share/dict/words"
    )]
    wordlist: PathBuf,

    /// Fetch the word list from this URL instead of the filesystem,
    /// e.g. https://raw.githubusercontent.com/lad/words/master/words
    #[structopt(long)]
    url: Option<String>,

    /// Column delimiter for word lists that carry extra columns
    #[structopt(long)]
    delimiter: Option<char>,

    /// Zero-based column holding the word (used with --delimiter)
    #[structopt(long)]
    word_column: Option<usize>,

    /// Stop the search after this many candidate arrangements
    #[structopt(long)]
    max_results: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Cli::from_args();

    let wl = load_wordlist(&args);
    info!("{} words loaded", wl.len());

    let letters = normalize(&args.letters);
    let config = SearchConfig {
        max_results: args.max_results,
    };

    let start = Instant::now();
    let words = wl.anagram(&letters, &config);
    info!(
        "{} anagrams of {:?} in {:.3}s",
        words.len(),
        letters,
        start.elapsed().as_secs_f64()
    );

    for word in &words {
        println!("{}", word);
    }
    Ok(())
}

/// A word list that fails to load is not fatal: the search runs against
/// an empty dictionary and finds nothing.
fn load_wordlist(args: &Cli) -> Wordlist {
    let loaded = match &args.url {
        Some(url) => Wordlist::from_url(url),
        None => {
            let format = match (args.delimiter, args.word_column) {
                (Some(d), Some(w)) => FileFormat::builder().delimiter(d).word_column(w).build(),
                (Some(d), None) => FileFormat::builder().delimiter(d).build(),
                (None, _) => FileFormat::builder().build(),
            };
            Wordlist::from_file(&args.wordlist, &format)
        }
    };
    loaded.unwrap_or_else(|e| {
        warn!("continuing with an empty dictionary: {}", e);
        Wordlist::default()
    })
}
