/// Insertion/membership seam between the loaders and a concrete word
/// store. Loaders write through this trait, so tests can load into any
/// index they like.
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        items.into_iter().for_each(|x| self.add(x));
    }
}
