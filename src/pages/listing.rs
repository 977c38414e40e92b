// Listing - a filter engine plus a keyboard cursor over its results
//
// Shared by every searchable page. Any change to the filter state clears the
// cursor, so it never points past the end of the filtered list.

use crate::card::{Card, Presentable};
use crate::cursor::GridCursor;
use crate::filter::{is_all, Facet, FilterEngine, FilterState, Searchable};
use crate::routing::Link;

/// Search box operations the shell forwards while the search field has focus
pub trait SearchBox {
    fn query(&self) -> &str;
    fn push_char(&mut self, c: char);
    fn pop_char(&mut self);
    fn clear_query(&mut self);
}

#[derive(Debug, Clone)]
pub struct Listing<T> {
    engine: FilterEngine<T>,
    cursor: GridCursor,
    seen_revision: u64,
}

impl<T: Searchable> Listing<T> {
    pub fn new(catalog: Vec<T>) -> Self {
        Self::with_state(catalog, FilterState::neutral())
    }

    pub fn with_state(catalog: Vec<T>, state: FilterState) -> Self {
        let engine = FilterEngine::with_state(catalog, state);
        let seen_revision = engine.revision();
        Listing {
            engine,
            cursor: GridCursor::new(),
            seen_revision,
        }
    }

    pub fn engine(&self) -> &FilterEngine<T> {
        &self.engine
    }

    pub fn results(&self) -> Vec<&T> {
        self.engine.results()
    }

    pub fn selection(&self, facet: Facet) -> &str {
        self.engine.selection(facet)
    }

    pub fn select(&mut self, facet: Facet, value: &str) {
        self.engine.select(facet, value);
        self.sync_cursor();
    }

    /// Move the facet to the option after the current one, wrapping to the first
    pub fn cycle(&mut self, facet: Facet, options: &[String]) -> String {
        let current = self.engine.selection(facet).to_string();
        let position = options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(&current) || (is_all(o) && is_all(&current)));
        let next = match position {
            Some(i) => options[(i + 1) % options.len()].clone(),
            None => options.first().cloned().unwrap_or_default(),
        };
        self.select(facet, &next);
        next
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.sync_cursor();
    }

    // ------------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------------

    pub fn active(&self) -> Option<usize> {
        self.cursor.active()
    }

    pub fn selected(&self) -> Option<&T> {
        self.cursor.active().and_then(|i| self.engine.get(i))
    }

    pub fn down(&mut self) {
        self.cursor.down(self.engine.len());
    }

    pub fn up(&mut self) {
        self.cursor.up(self.engine.len());
    }

    pub fn first(&mut self) {
        self.cursor.first(self.engine.len());
    }

    pub fn last(&mut self) {
        self.cursor.last(self.engine.len());
    }

    pub fn set_active(&mut self, index: usize) {
        self.cursor.set(index, self.engine.len());
    }

    pub fn clear_active(&mut self) {
        self.cursor.clear();
    }

    fn sync_cursor(&mut self) {
        if self.engine.revision() != self.seen_revision {
            self.seen_revision = self.engine.revision();
            self.cursor.clear();
        }
    }
}

impl<T: Searchable + Presentable> Listing<T> {
    /// Card of the active entry, numbered by its position in the results
    pub fn selected_card(&self) -> Option<Card> {
        let index = self.cursor.active()?;
        self.engine.get(index).map(|item| item.card(index))
    }

    pub fn primary_link(&self) -> Option<Link> {
        self.selected_card()?.primary_link().cloned()
    }

    pub fn secondary_link(&self) -> Option<Link> {
        self.selected_card()?.secondary_link().cloned()
    }
}

impl<T: Searchable> SearchBox for Listing<T> {
    fn query(&self) -> &str {
        self.engine.query()
    }

    fn push_char(&mut self, c: char) {
        self.engine.push_char(c);
        self.sync_cursor();
    }

    fn pop_char(&mut self) {
        self.engine.pop_char();
        self.sync_cursor();
    }

    fn clear_query(&mut self) {
        self.engine.set_query("");
        self.sync_cursor();
    }
}
