use std::path::Path;

use delegate::delegate;
use tracing::info;

use crate::wordlist::loader::{self, FileFormat, LoadError, LoadStats};
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::Trie;

/// A dictionary loaded into a trie, ready to answer anagram queries.
/// Built once, then read-only for the rest of the run.
#[derive(Default)]
pub struct Wordlist {
    trie: Trie,
}

impl Wordlist {
    pub fn from_words<'f, I>(words: I) -> Wordlist
    where
        I: IntoIterator<Item = &'f str>,
    {
        let mut trie = Trie::new();
        trie.add_all(words);
        Wordlist { trie }
    }

    pub fn from_file(path: &Path, format: &FileFormat) -> Result<Wordlist, LoadError> {
        let mut trie = Trie::new();
        let stats = loader::load_file(&mut trie, path, format)?;
        Self::log_stats(&stats);
        Ok(Wordlist { trie })
    }

    pub fn from_url(url: &str) -> Result<Wordlist, LoadError> {
        let mut trie = Trie::new();
        let stats = loader::load_url(&mut trie, url)?;
        Self::log_stats(&stats);
        Ok(Wordlist { trie })
    }

    fn log_stats(stats: &LoadStats) {
        info!("read {} words ({} lines skipped)", stats.words, stats.skipped);
    }

    delegate! {
        to self.trie {
            #[call(is_word)]
            pub fn contains(&self, word: &str) -> bool;
            pub fn has_prefix(&self, prefix: &str) -> bool;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    /// Dictionary words that use every input letter exactly once.
    pub fn anagram(&self, letters: &str, config: &SearchConfig) -> Vec<String> {
        self.trie.anagram(letters, config)
    }

    pub fn arrangements(&self, letters: &str, config: &SearchConfig) -> Vec<String> {
        self.trie.arrangements(letters, config)
    }
}
