use std::collections::HashMap;

/// One prefix position. A node owns its children outright; the letter on
/// the edge into a child is the child's key in `children`.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    pub(crate) children: HashMap<char, TrieNode>,
    pub(crate) terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }
}
