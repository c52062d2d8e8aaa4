//! Find dictionary words that are anagrams of a set of letters.
//!
//! A word list is loaded into a prefix tree, then a backtracking search
//! rearranges the input letters, cutting every branch the tree does not
//! accept as a prefix. The full-length arrangements that are stored words
//! are the answer.

pub mod alphabet;
pub mod wordlist;

pub use crate::wordlist::loader::{FileFormat, LoadError};
pub use crate::wordlist::trie::searchconfig::SearchConfig;
pub use crate::wordlist::trie::Trie;
pub use crate::wordlist::wordlist::Wordlist;
