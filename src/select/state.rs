//! Selector state: query, filtered view, cursor and scroll window.

use super::filter::filter_indices;
use crate::git::BranchListing;

#[derive(Debug, Clone)]
pub struct SelectorState {
    names: Vec<String>,
    query: String,
    /// Indices into `names` that match the current query.
    matches: Vec<usize>,
    /// Index into `matches` of the highlighted row.
    cursor: usize,
    /// Index into `matches` of the first row on screen.
    offset: usize,
    page_size: usize,
}

impl SelectorState {
    /// Start with the full list and the cursor on the active branch.
    pub fn new(listing: &BranchListing, page_size: usize) -> Self {
        let names = listing.names().to_vec();
        let matches = (0..names.len()).collect();
        let mut state = Self {
            names,
            query: String::new(),
            matches,
            cursor: listing.active_index(),
            offset: 0,
            page_size: page_size.max(1),
        };
        state.cursor = state.cursor.min(state.matches.len().saturating_sub(1));
        state.scroll_to_cursor();
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// All names matching the current query.
    pub fn matches(&self) -> impl Iterator<Item = &str> + '_ {
        self.matches.iter().map(|&i| self.names[i].as_str())
    }

    /// The highlighted name, if anything matches.
    pub fn selected(&self) -> Option<&str> {
        self.matches
            .get(self.cursor)
            .map(|&i| self.names[i].as_str())
    }

    /// Rows currently on screen, paired with whether each is highlighted.
    pub fn page(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.matches
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.page_size)
            .map(|(pos, &i)| (self.names[i].as_str(), pos == self.cursor))
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    /// Move up one row, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = match self.cursor {
            0 => self.matches.len() - 1,
            n => n - 1,
        };
        self.scroll_to_cursor();
    }

    /// Move down one row, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
        self.scroll_to_cursor();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_size);
        self.scroll_to_cursor();
    }

    pub fn page_down(&mut self) {
        let last = self.matches.len().saturating_sub(1);
        self.cursor = (self.cursor + self.page_size).min(last);
        self.scroll_to_cursor();
    }

    pub fn first(&mut self) {
        self.cursor = 0;
        self.scroll_to_cursor();
    }

    pub fn last(&mut self) {
        self.cursor = self.matches.len().saturating_sub(1);
        self.scroll_to_cursor();
    }

    /// Recompute the view from the full list. Keeps the highlighted name if
    /// it still matches, otherwise highlights the first match.
    fn refilter(&mut self) {
        let highlighted = self.matches.get(self.cursor).copied();
        let query = (!self.query.is_empty()).then_some(self.query.as_str());
        self.matches = filter_indices(&self.names, query);
        self.cursor = highlighted
            .and_then(|h| self.matches.iter().position(|&i| i == h))
            .unwrap_or(0);
        self.offset = 0;
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.page_size {
            self.offset = self.cursor + 1 - self.page_size;
        }
    }
}
