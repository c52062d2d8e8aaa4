use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over dictionary words. Insert and lookup walk one node per
/// character, so both cost O(len) no matter how many words are stored —
/// which is what makes millions of prefix checks during a search viable.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Default::default()
    }

    /// Stores `word`, creating any missing nodes along its path. Empty
    /// input is ignored. Inserting a word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        if !current.terminal {
            current.terminal = true;
            self.len += 1;
        }
    }

    pub fn add_all<'f, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'f str>,
    {
        items.into_iter().for_each(|x| self.insert(x));
    }

    /// True iff `word` was inserted as a complete word. Never creates
    /// nodes; any character with no matching edge answers false.
    pub fn is_word(&self, word: &str) -> bool {
        self.get_node(word).map(|n| n.terminal).unwrap_or(false)
    }

    /// True iff at least one stored word starts with `prefix`. The empty
    /// prefix is the root, which always exists.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in word.chars() {
            current = current.get_child(c)?;
        }
        Some(current)
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        self.insert(word);
    }

    fn contains(&self, word: &str) -> bool {
        self.is_word(word)
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied());
        words.iter().for_each(|word| assert!(trie.is_word(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let bad_words = vec!["he", "h", "lol", "banana"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied());
        bad_words.iter().for_each(|word| assert!(!trie.is_word(word)));
    }

    #[test]
    fn every_prefix_of_a_word_is_a_prefix() {
        let mut trie = Trie::new();
        trie.insert("goodbye");
        for end in 0..="goodbye".len() {
            assert!(trie.has_prefix(&"goodbye"[..end]));
        }
        assert!(!trie.has_prefix("goodbyes"));
        assert!(!trie.has_prefix("x"));
    }

    #[test]
    fn empty_prefix_always_exists() {
        let trie = Trie::new();
        assert!(trie.has_prefix(""));
        assert!(!trie.is_word(""));
    }

    #[test]
    fn inserting_empty_word_is_a_noop() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.is_empty());
        assert!(!trie.is_word(""));
    }

    #[test]
    fn double_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("good");
        trie.insert("good");
        assert_eq!(trie.len(), 1);
        assert!(trie.is_word("good"));
        assert!(trie.has_prefix("goo"));
        assert!(!trie.is_word("goo"));
    }

    #[test]
    fn words_survive_later_inserts() {
        let mut trie = Trie::new();
        trie.insert("good");
        trie.insert("goodbye");
        trie.insert("hello");
        assert!(trie.is_word("good"));
        assert!(trie.is_word("goodbye"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn queries_are_total_over_uninserted_characters() {
        let mut trie = Trie::new();
        trie.insert("good");
        assert!(!trie.is_word("göd"));
        assert!(!trie.has_prefix("g!"));
        assert!(!trie.has_prefix("日本"));
    }
}
