use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::index::Index;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch word list: {0}")]
    Http(#[from] Box<ureq::Error>),
}

/// Shape of a word-list line. The default treats the whole line as the
/// word; delimited formats pick one column out of each line.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

#[derive(Debug)]
pub struct LoadStats {
    pub words: usize,
    pub skipped: usize,
}

/// Feeds every line of `reader` through trim-and-lowercase normalization
/// into `index`. Blank lines are dropped silently; lines missing the word
/// column are counted as skipped. A read error mid-stream stops the load,
/// keeping everything inserted up to that point.
pub fn load_reader<I, R>(index: &mut I, reader: R, format: &FileFormat) -> LoadStats
where
    I: Index,
    R: BufRead,
{
    let mut words = 0;
    let mut skipped = 0;
    for line in reader.lines() {
        match line {
            Ok(line) => match format.parse_line(&line) {
                Some(column) => {
                    let word = normalize(column);
                    if word.is_empty() {
                        continue;
                    }
                    index.add(&word);
                    words += 1;
                }
                None => skipped += 1,
            },
            Err(e) => {
                warn!("stopped reading word list: {}", e);
                skipped += 1;
                break;
            }
        }
    }
    LoadStats { words, skipped }
}

pub fn load_file<I: Index>(
    index: &mut I,
    path: &Path,
    format: &FileFormat,
) -> Result<LoadStats, LoadError> {
    info!("reading words from {}", path.display());
    let file = File::open(path)?;
    Ok(load_reader(index, BufReader::new(file), format))
}

pub fn load_url<I: Index>(index: &mut I, url: &str) -> Result<LoadStats, LoadError> {
    info!("fetching words from {}", url);
    let response = ureq::get(url)
        .call()
        .map_err(|e| LoadError::Http(Box::new(e)))?;
    let reader = BufReader::new(response.into_reader());
    Ok(load_reader(index, reader, &FileFormat::builder().build()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use crate::wordlist::loader::{load_file, load_reader, FileFormat, LoadError};
    use crate::wordlist::trie::Trie;

    #[test]
    fn normalizes_lines_before_inserting() {
        let mut trie = Trie::new();
        let stats = load_reader(
            &mut trie,
            Cursor::new("  Abler \nBALE\n\n   \nbear\n"),
            &FileFormat::builder().build(),
        );
        assert_eq!(stats.words, 3);
        assert_eq!(stats.skipped, 0);
        assert!(trie.is_word("abler"));
        assert!(trie.is_word("bale"));
        assert!(trie.is_word("bear"));
        assert!(!trie.is_word("Abler"));
    }

    #[test]
    fn delimited_format_selects_the_word_column() {
        let mut trie = Trie::new();
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let stats = load_reader(&mut trie, Cursor::new("17\tstop\n3\tspot\n"), &format);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.skipped, 0);
        assert!(trie.is_word("stop"));
        assert!(trie.is_word("spot"));
        assert!(!trie.is_word("17"));
    }

    #[test]
    fn missing_column_counts_as_skipped() {
        let mut trie = Trie::new();
        let format = FileFormat::builder().delimiter(',').word_column(2).build();
        let stats = load_reader(&mut trie, Cursor::new("a,b\nx,y,z\n"), &format);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.skipped, 1);
        assert!(trie.is_word("z"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut trie = Trie::new();
        let result = load_file(
            &mut trie,
            Path::new("/nonexistent/word/list"),
            &FileFormat::builder().build(),
        );
        assert!(matches!(result, Err(LoadError::Io(_))));
        assert!(trie.is_empty());
    }
}
