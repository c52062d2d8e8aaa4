use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Every distinct ordering of `letters` that the trie accepts as a
    /// prefix, at full length. Depth-first backtracking over the sorted
    /// multiset: a shared candidate buffer is pushed and popped as the
    /// search descends and undoes, and a branch is cut the moment no
    /// stored word starts with the candidate. Results come out in the
    /// order the search visits them.
    pub fn arrangements(&self, letters: &str, config: &SearchConfig) -> Vec<String> {
        let mut letters: Vec<char> = letters.chars().collect();
        let mut results = vec![];
        if letters.is_empty() {
            // No meaningful anagram of nothing.
            return results;
        }
        // Sorting groups equal letters so the duplicate skip below works.
        letters.sort_unstable();

        let mut candidate = String::with_capacity(letters.len());
        let mut used = vec![false; letters.len()];
        self.extend_candidate(&letters, &mut used, &mut candidate, &mut results, config);
        results
    }

    /// The arrangements of `letters` that are stored words, in
    /// enumeration order.
    pub fn anagram(&self, letters: &str, config: &SearchConfig) -> Vec<String> {
        self.arrangements(letters, config)
            .into_iter()
            .filter(|s| self.is_word(s))
            .collect()
    }

    fn extend_candidate(
        &self,
        letters: &[char],
        used: &mut [bool],
        candidate: &mut String,
        results: &mut Vec<String>,
        config: &SearchConfig,
    ) {
        if let Some(max) = config.max_results {
            if results.len() >= max {
                return;
            }
        }
        if candidate.chars().count() == letters.len() {
            results.push(candidate.clone());
            return;
        }
        for i in 0..letters.len() {
            if used[i] {
                continue;
            }
            // Among equal letters only the leftmost still-unused one may
            // be placed next; branches that would spell the same string
            // collapse into one.
            if i > 0 && letters[i] == letters[i - 1] && !used[i - 1] {
                continue;
            }
            candidate.push(letters[i]);
            if !self.has_prefix(candidate) {
                // No stored word starts this way; cut the branch.
                candidate.pop();
                continue;
            }
            used[i] = true;
            self.extend_candidate(letters, used, candidate, results, config);
            used[i] = false;
            candidate.pop();
        }
    }
}
