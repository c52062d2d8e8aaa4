#[derive(Default)]
pub struct SearchConfig {
    /// Stop the search once this many arrangements have been recorded.
    /// `None` reports everything.
    pub max_results: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }
}
